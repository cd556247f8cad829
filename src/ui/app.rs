//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{Align2, CentralPanel, Context, CornerRadius, Frame, Rect, RichText, Vec2};

use super::board_view::BoardView;
use super::theme::*;
use super::view::GameView;
use crate::game::{Action, GameState};

/// Main tic-tac-toe application
#[derive(Default)]
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the status line above the board
    fn render_status(&self, ui: &mut egui::Ui, view: &GameView) {
        ui.label(RichText::new(&view.headline).size(22.0).strong().color(TEXT_PRIMARY));
    }

    /// Render the board, then the end overlay on top of it
    fn render_board(&mut self, ui: &mut egui::Ui, view: &GameView, actions: &mut Vec<Action>) {
        if let Some(pos) = self.board_view.show(ui, &view.cells) {
            actions.push(Action::Play(pos));
        }

        if let Some(message) = &view.end_message {
            if self.render_end_overlay(ui, self.board_view.rect(), message) {
                actions.push(Action::Restart);
            }
        }
    }

    /// Render end message and restart button over the board.
    /// Returns true when restart was clicked.
    fn render_end_overlay(&self, ui: &mut egui::Ui, board_rect: Rect, message: &str) -> bool {
        let painter = ui.painter_at(board_rect);
        painter.rect_filled(board_rect, CornerRadius::same(8), overlay_bg());
        painter.text(
            board_rect.center() - Vec2::new(0.0, 30.0),
            Align2::CENTER_CENTER,
            message,
            egui::FontId::proportional(32.0),
            TEXT_PRIMARY,
        );

        let button_rect = Rect::from_center_size(
            board_rect.center() + Vec2::new(0.0, 30.0),
            Vec2::new(180.0, 40.0),
        );
        let button = egui::Button::new(RichText::new("Начать заново").size(16.0).strong());
        ui.put(button_rect, button).clicked()
    }

    /// Render the move list used to jump back in history
    fn render_moves(&self, ui: &mut egui::Ui, view: &GameView, actions: &mut Vec<Action>) {
        if !view.show_moves() {
            return;
        }

        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Перейти к ходу:").size(12.0).color(TEXT_SECONDARY));
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    for entry in &view.moves {
                        let label = RichText::new(entry.step.to_string()).size(14.0);
                        if ui.selectable_label(entry.current, label).clicked() {
                            actions.push(Action::JumpTo(entry.step));
                        }
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&self, ctx: &Context) -> Option<Action> {
        let step = self.state.step();
        let last = self.state.move_count();

        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                return Some(Action::Restart);
            }

            // Left / Right - step through history
            if i.key_pressed(egui::Key::ArrowLeft) && step > 0 {
                return Some(Action::JumpTo(step - 1));
            }
            if i.key_pressed(egui::Key::ArrowRight) && step < last {
                return Some(Action::JumpTo(step + 1));
            }

            None
        })
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<Action> = self.handle_input(ctx).into_iter().collect();
        let view = GameView::from_state(&self.state);

        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    self.render_status(ui, &view);
                    ui.add_space(12.0);
                    self.render_board(ui, &view, &mut actions);
                    ui.add_space(12.0);
                    self.render_moves(ui, &view, &mut actions);
                });
            });

        for action in actions {
            self.state.dispatch(action);
        }
    }
}
