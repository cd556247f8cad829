//! Property-based tests for win detection and the game reducer.

use proptest::prelude::*;
use tictactoe::rules::{find_win, is_draw, WINNING_LINES};
use tictactoe::{Action, Board, GameState, Mark, Pos, Status, TOTAL_CELLS};

// =============================================================================
// Strategies
// =============================================================================

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::Empty), Just(Mark::X), Just(Mark::O)]
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(arb_mark()).prop_map(Board::from_cells)
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (0..TOTAL_CELLS).prop_map(|idx| Action::Play(Pos::from_index(idx))),
        2 => (0usize..10).prop_map(Action::JumpTo),
        1 => Just(Action::Restart),
    ]
}

/// Reference check: the first line in scan order whose cells match
fn reference_win(board: &Board) -> Option<(Mark, [usize; 3])> {
    let cells = board.cells();
    WINNING_LINES.iter().copied().find_map(|line| {
        let [a, b, c] = line;
        (cells[a] != Mark::Empty && cells[a] == cells[b] && cells[b] == cells[c])
            .then_some((cells[a], line))
    })
}

fn assert_invariants(state: &GameState) {
    assert!(state.step() < state.history().len());
    assert_eq!(state.x_is_next(), state.step() % 2 == 0);
    assert!(state.history()[0].is_board_empty());
    for (k, pair) in state.history().windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        assert_eq!(next.mark_count(), prev.mark_count() + 1, "snapshot {}", k + 1);
        for pos in Pos::all() {
            if !prev.is_empty(pos) {
                assert_eq!(prev.get(pos), next.get(pos));
            }
        }
    }
}

proptest! {
    #[test]
    fn win_detector_matches_reference(board in arb_board()) {
        let found = find_win(&board).map(|w| (w.winner, w.indices()));
        prop_assert_eq!(found, reference_win(&board));
    }

    #[test]
    fn completed_line_is_always_found(line_idx in 0usize..8, x in any::<bool>()) {
        let mark = Mark::for_turn(x);
        let mut cells = [Mark::Empty; TOTAL_CELLS];
        for idx in WINNING_LINES[line_idx] {
            cells[idx] = mark;
        }
        let win = find_win(&Board::from_cells(cells)).unwrap();
        prop_assert_eq!(win.winner, mark);
        prop_assert_eq!(win.indices(), WINNING_LINES[line_idx]);
    }

    #[test]
    fn reducer_preserves_invariants(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut state = GameState::new();
        for action in actions {
            state = state.reduce(action);
            assert_invariants(&state);
        }
    }

    #[test]
    fn playing_empty_cell_advances_one_step(
        actions in prop::collection::vec(arb_action(), 0..20),
        idx in 0..TOTAL_CELLS,
    ) {
        let state = actions.into_iter().fold(GameState::new(), GameState::reduce);
        let pos = Pos::from_index(idx);
        prop_assume!(!state.status().is_over() && state.current().is_empty(pos));

        let next = state.clone().reduce(Action::Play(pos));
        prop_assert_eq!(next.step(), state.step() + 1);
        prop_assert_eq!(next.x_is_next(), !state.x_is_next());
        prop_assert_eq!(next.history().len(), state.step() + 2);
        prop_assert_eq!(&next.history()[..=state.step()], &state.history()[..=state.step()]);
    }

    #[test]
    fn illegal_click_is_a_no_op(
        actions in prop::collection::vec(arb_action(), 0..30),
        idx in 0..TOTAL_CELLS,
    ) {
        let state = actions.into_iter().fold(GameState::new(), GameState::reduce);
        let pos = Pos::from_index(idx);
        prop_assume!(state.win().is_some() || !state.current().is_empty(pos));

        let next = state.clone().reduce(Action::Play(pos));
        prop_assert_eq!(next, state);
    }

    #[test]
    fn jump_sets_parity_and_keeps_history(
        actions in prop::collection::vec(arb_action(), 0..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let state = actions.into_iter().fold(GameState::new(), GameState::reduce);
        let step = pick.index(state.history().len());

        let next = state.clone().reduce(Action::JumpTo(step));
        prop_assert_eq!(next.step(), step);
        prop_assert_eq!(next.x_is_next(), step % 2 == 0);
        prop_assert_eq!(next.history(), state.history());
    }

    #[test]
    fn draw_means_full_board_without_line(actions in prop::collection::vec(arb_action(), 0..40)) {
        let state = actions.into_iter().fold(GameState::new(), GameState::reduce);
        let drawn = state.status() == Status::Draw;
        prop_assert_eq!(drawn, state.step() == TOTAL_CELLS && state.win().is_none());
        prop_assert_eq!(drawn, is_draw(state.current()));
    }

    #[test]
    fn restart_always_resets(actions in prop::collection::vec(arb_action(), 0..30)) {
        let state = actions.into_iter().fold(GameState::new(), GameState::reduce);
        prop_assert_eq!(state.reduce(Action::Restart), GameState::new());
    }
}
