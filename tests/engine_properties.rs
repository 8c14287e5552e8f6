use pawns_only_chess::{
    new_game, outcome, render, submit_move, Cell, EngineState, GameOutcome, MoveError, MoveKind,
    MoveResult, Side, Square, StalemateRule,
};

fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

fn from_fen(fen: &str) -> EngineState {
    EngineState::from_fen(fen, StalemateRule::default()).unwrap()
}

fn play(state: &EngineState, moves: &[&str]) -> EngineState {
    let mut state = state.clone();
    for mv in moves {
        if let Err(err) = state.apply_move(sq(&mv[..2]), sq(&mv[2..])) {
            panic!("{mv} rejected: {err}");
        }
    }
    state
}

fn expect_applied(result: MoveResult) -> (EngineState, GameOutcome) {
    match result {
        MoveResult::Applied(state, outcome) => (state, outcome),
        MoveResult::Rejected(err) => panic!("rejected: {err}"),
    }
}

/// Squares whose cells differ between two renders.
fn changed_cells(before: &[[Cell; 8]; 8], after: &[[Cell; 8]; 8]) -> Vec<String> {
    let mut changed = Vec::new();
    for row in 0..8 {
        for file in 0..8 {
            if before[row][file] != after[row][file] {
                changed.push(Square::new(file as u8, 8 - row as u8).unwrap().to_string());
            }
        }
    }
    changed.sort();
    changed
}

#[test]
fn double_step_on_an_empty_file() {
    let state = from_fen("8/7p/8/8/8/8/P7/8 w - - 0 1");
    assert_eq!(state.classify(sq("a2"), sq("a4")), Ok(MoveKind::DoubleAdvance));
}

#[test]
fn double_step_blocked_by_intermediate_square() {
    let state = from_fen("8/7p/8/8/8/p7/P6P/8 w - - 0 1");
    assert_eq!(
        submit_move(&state, sq("a2"), sq("a4")),
        MoveResult::Rejected(MoveError::BlockedPath { from: sq("a2"), to: sq("a4"), blocker: sq("a3") })
    );
}

#[test]
fn double_step_only_from_the_starting_rank() {
    let state = play(&new_game(), &["a2a3", "h7h6"]);
    assert_eq!(
        submit_move(&state, sq("a3"), sq("a5")),
        MoveResult::Rejected(MoveError::IllegalShape { from: sq("a3"), to: sq("a5") })
    );
}

#[test]
fn en_passant_removes_the_bypassed_pawn() {
    let state = play(&new_game(), &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let before = render(&state);
    let (after, outcome) = expect_applied(submit_move(&state, sq("e5"), sq("d6")));

    assert_eq!(outcome, GameOutcome::InProgress);
    assert_eq!(after.board().cell_at(sq("d6")), Cell::WhitePawn);
    assert_eq!(after.board().cell_at(sq("d5")), Cell::Empty);
    assert_eq!(changed_cells(&before, &render(&after)), vec!["d5", "d6", "e5"]);
}

#[test]
fn en_passant_needs_the_immediately_preceding_double_step() {
    let state = play(&new_game(), &["e2e4", "d7d6", "e4e5", "d6d5"]);
    assert_eq!(
        submit_move(&state, sq("e5"), sq("d6")),
        MoveResult::Rejected(MoveError::NoCaptureTarget { to: sq("d6") })
    );

    let state = play(&new_game(), &["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);
    assert_eq!(
        submit_move(&state, sq("e5"), sq("d6")),
        MoveResult::Rejected(MoveError::NoCaptureTarget { to: sq("d6") })
    );
}

#[test]
fn black_can_capture_en_passant_too() {
    let state = play(&new_game(), &["a2a3", "d7d5", "b2b3", "d5d4", "e2e4"]);
    let (after, _) = expect_applied(submit_move(&state, sq("d4"), sq("e3")));
    assert_eq!(after.board().cell_at(sq("e3")), Cell::BlackPawn);
    assert_eq!(after.board().cell_at(sq("e4")), Cell::Empty);
}

#[test]
fn reaching_rank_eight_wins_with_pawns_left() {
    let state = from_fen("8/1P6/8/8/8/8/pppppppp/8 w - - 0 40");
    let (after, result) = expect_applied(submit_move(&state, sq("b7"), sq("b8")));
    assert_eq!(result, GameOutcome::Win(Side::White));
    assert_eq!(outcome(&after), GameOutcome::Win(Side::White));
    assert_eq!(after.board().pawn_count(Side::Black), 8);
}

#[test]
fn reaching_rank_one_wins_for_black() {
    let state = from_fen("8/PPPPPPP1/8/8/8/8/7p/8 b - - 0 40");
    let (_, result) = expect_applied(submit_move(&state, sq("h2"), sq("h1")));
    assert_eq!(result, GameOutcome::Win(Side::Black));
}

#[test]
fn capturing_the_last_pawn_wins() {
    let state = from_fen("8/8/8/8/3p4/4P3/8/8 w - - 0 20");
    let (_, result) = expect_applied(submit_move(&state, sq("e3"), sq("d4")));
    assert_eq!(result, GameOutcome::Win(Side::White));
}

#[test]
fn promotion_beats_stalemate() {
    // black's only pawn is blocked, but white has already won
    let state = from_fen("8/4P3/8/8/8/p7/P7/8 w - - 0 20");
    let (_, result) = expect_applied(submit_move(&state, sq("e7"), sq("e8")));
    assert_eq!(result, GameOutcome::Win(Side::White));
}

#[test]
fn side_to_move_without_moves_draws() {
    let state = from_fen("8/8/8/4p3/8/4P3/P7/8 w - - 0 12");
    let (after, result) = expect_applied(submit_move(&state, sq("e3"), sq("e4")));
    assert_eq!(result, GameOutcome::Draw);
    assert!(after.legal_moves().is_empty());
}

#[test]
fn either_side_rule_draws_when_the_mover_is_stuck() {
    let fen = "8/p7/8/4p3/8/4P3/8/8 w - - 0 12";
    let default_rule = from_fen(fen);
    let (_, result) = expect_applied(submit_move(&default_rule, sq("e3"), sq("e4")));
    assert_eq!(result, GameOutcome::InProgress);

    let either = EngineState::from_fen(fen, StalemateRule::EitherSide).unwrap();
    let (_, result) = expect_applied(submit_move(&either, sq("e3"), sq("e4")));
    assert_eq!(result, GameOutcome::Draw);
}

#[test]
fn rejected_moves_change_nothing() {
    let state = play(&new_game(), &["e2e4", "d7d5"]);
    let attempts = [
        ("e4", "e6"),
        ("d5", "d4"),
        ("e4", "f5"),
        ("a2", "c3"),
        ("e3", "e4"),
        ("e4", "e3"),
    ];
    for (from, to) in attempts {
        let mut copy = state.clone();
        let result = copy.apply_move(sq(from), sq(to));
        assert!(result.is_err(), "{from}{to} should be rejected");
        assert_eq!(copy, state, "{from}{to} changed the state");
        assert_eq!(copy.side_to_move(), Side::White);
        assert_eq!(copy.last_move(), state.last_move());
    }
}

#[test]
fn plain_moves_touch_exactly_two_cells() {
    let state = new_game();
    for (from, to) in [("a2", "a3"), ("h2", "h4")] {
        let (after, _) = expect_applied(submit_move(&state, sq(from), sq(to)));
        assert_eq!(changed_cells(&render(&state), &render(&after)), vec![from, to]);
    }
}

#[test]
fn normal_capture_touches_exactly_two_cells() {
    let state = play(&new_game(), &["e2e4", "d7d5"]);
    let (after, _) = expect_applied(submit_move(&state, sq("e4"), sq("d5")));
    assert_eq!(changed_cells(&render(&state), &render(&after)), vec!["d5", "e4"]);
    assert_eq!(after.board().pawn_count(Side::Black), 7);
}
