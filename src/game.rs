//! Game state and transitions
//!
//! [`GameState`] owns the move history and is advanced only through
//! [`GameState::reduce`], which consumes the state and an [`Action`] and
//! returns the next state. Everything shown on screen is derived from it.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Action, GameState, Mark, Pos, Status};
//!
//! let mut state = GameState::new();
//! for idx in [0, 4, 1, 5, 2] {
//!     state.dispatch(Action::Play(Pos::from_index(idx)));
//! }
//! assert_eq!(state.status(), Status::Won(Mark::X));
//! ```

use crate::board::{Board, Mark, Pos, BOARD_SIZE};
use crate::error::{GameError, Result};
use crate::rules::{self, Win};

/// User intent raised by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the active mark on a cell
    Play(Pos),
    /// Show the board after `n` moves
    JumpTo(usize),
    /// Start over from an empty board
    Restart,
}

impl Action {
    /// Play action from a raw cell index
    pub fn play_index(idx: usize) -> Result<Action> {
        Pos::try_from(idx).map(Action::Play)
    }
}

/// Outcome of the position currently on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Game in progress, the given mark moves next
    Turn(Mark),
    Won(Mark),
    Draw,
}

impl Status {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Turn(_))
    }

    /// Short headline: game-over notice once finished, else whose turn
    pub fn headline(self) -> String {
        if self.is_over() {
            "Игра окончена".to_string()
        } else {
            self.to_string()
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Turn(mark) => write!(f, "Ходит: {}", mark),
            Status::Won(mark) => write!(f, "Выиграл {}", mark),
            Status::Draw => f.write_str("Ничья!"),
        }
    }
}

/// Full game state: move history plus the step being viewed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    step: usize,
    x_is_next: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
            x_is_next: true,
        }
    }

    /// Snapshots from the empty board to the furthest move played
    #[inline]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot on display
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    #[inline]
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Mark placed by the next move
    #[inline]
    pub fn active_mark(&self) -> Mark {
        Mark::for_turn(self.x_is_next)
    }

    /// Snapshot on display
    #[inline]
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Number of moves recorded in history
    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// Completed line on the current snapshot
    pub fn win(&self) -> Option<Win> {
        rules::find_win(self.current())
    }

    pub fn status(&self) -> Status {
        match self.win() {
            Some(win) => Status::Won(win.winner),
            None if rules::is_draw(self.current()) => Status::Draw,
            None => Status::Turn(self.active_mark()),
        }
    }

    /// Reject actions that address cells or steps that do not exist
    pub fn validate(&self, action: Action) -> Result<()> {
        match action {
            Action::Play(Pos { row, col })
                if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE =>
            {
                Err(GameError::InvalidPos { row, col })
            }
            Action::JumpTo(step) if step >= self.history.len() => Err(GameError::InvalidStep {
                step,
                len: self.history.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Apply an action and return the next state.
    ///
    /// Clicks on a filled cell or after a win return the state unchanged.
    pub fn reduce(self, action: Action) -> GameState {
        if let Err(err) = self.validate(action) {
            tracing::warn!(?action, %err, "Ignoring malformed action");
            return self;
        }

        match action {
            Action::Play(pos) => self.play(pos),
            Action::JumpTo(step) => self.jump_to(step),
            Action::Restart => {
                tracing::debug!("Restarting game");
                GameState::new()
            }
        }
    }

    /// In-place variant of [`GameState::reduce`] for the UI loop
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(self);
        *self = state.reduce(action);
    }

    fn play(mut self, pos: Pos) -> GameState {
        let current = *self.current();
        if rules::find_win(&current).is_some() {
            tracing::trace!(cell = pos.to_index(), "Click ignored, game already won");
            return self;
        }
        if !current.is_empty(pos) {
            tracing::trace!(cell = pos.to_index(), "Click ignored, cell occupied");
            return self;
        }

        let mark = self.active_mark();
        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history.push(current.with_mark(pos, mark));
        self.step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        tracing::debug!(
            cell = pos.to_index(),
            %mark,
            step = self.step,
            discarded,
            "Move played"
        );

        match self.status() {
            Status::Won(winner) => tracing::info!(%winner, moves = self.step, "Game won"),
            Status::Draw => tracing::info!("Game drawn"),
            Status::Turn(_) => {}
        }

        self
    }

    fn jump_to(mut self, step: usize) -> GameState {
        self.step = step;
        self.x_is_next = step % 2 == 0;
        tracing::debug!(step, "Jumped to move");
        self
    }
}
