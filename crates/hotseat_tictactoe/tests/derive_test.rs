//! Tests for deriving game state from a turn log.

use hotseat_tictactoe::{
    Board, Outcome, PlayerRegistry, Position, Square, Symbol, Turn, TurnLog,
    active_player, derive_board, derive_winner, is_draw, outcome,
};

fn turn(row: u8, col: u8, player: Symbol) -> Turn {
    Turn::new(Position::new(row, col).expect("in bounds"), player)
}

#[test]
fn test_empty_log_scenario() {
    let turns = TurnLog::new();
    let board = derive_board(&turns);
    let winner = derive_winner(&board, &PlayerRegistry::default());

    assert_eq!(active_player(&turns), Symbol::X);
    assert!(board.squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(winner, None);
    assert!(!is_draw(&turns, winner.as_deref()));
}

#[test]
fn test_top_row_win_scenario() {
    let turns = TurnLog::from_turns(vec![
        turn(0, 0, Symbol::X),
        turn(1, 1, Symbol::O),
        turn(0, 1, Symbol::X),
        turn(1, 0, Symbol::O),
        turn(0, 2, Symbol::X),
    ])
    .expect("legal log");
    let players = PlayerRegistry::default();
    let board = derive_board(&turns);
    let winner = derive_winner(&board, &players);

    assert_eq!(winner.as_deref(), Some(players.name(Symbol::X)));
    assert!(!is_draw(&turns, winner.as_deref()));
    assert_eq!(outcome(&turns), Outcome::Win(Symbol::X));
}

#[test]
fn test_full_board_draw_scenario() {
    // X O X
    // O X X
    // O X O
    let turns = TurnLog::from_turns(vec![
        turn(0, 0, Symbol::X),
        turn(0, 1, Symbol::O),
        turn(0, 2, Symbol::X),
        turn(1, 0, Symbol::O),
        turn(1, 1, Symbol::X),
        turn(2, 0, Symbol::O),
        turn(1, 2, Symbol::X),
        turn(2, 2, Symbol::O),
        turn(2, 1, Symbol::X),
    ])
    .expect("legal log");
    let board = derive_board(&turns);
    let winner = derive_winner(&board, &PlayerRegistry::default());

    assert_eq!(board.display(), "X|O|X\n-+-+-\nO|X|X\n-+-+-\nO|X|O");
    assert_eq!(winner, None);
    assert!(is_draw(&turns, winner.as_deref()));
    assert_eq!(outcome(&turns), Outcome::Draw);
}

#[test]
fn test_active_player_follows_parity() {
    // Same cells as the drawn game above, played in order.
    let sequence = [
        turn(0, 0, Symbol::X),
        turn(0, 1, Symbol::O),
        turn(0, 2, Symbol::X),
        turn(1, 0, Symbol::O),
        turn(1, 1, Symbol::X),
        turn(2, 0, Symbol::O),
        turn(1, 2, Symbol::X),
        turn(2, 2, Symbol::O),
        turn(2, 1, Symbol::X),
    ];

    for n in 0..=sequence.len() {
        let turns = TurnLog::from_turns(sequence[..n].to_vec()).expect("legal prefix");
        let expected = if n % 2 == 0 { Symbol::X } else { Symbol::O };
        assert_eq!(active_player(&turns), expected, "after {} turns", n);

        let board = derive_board(&turns);
        let occupied = board.squares().iter().filter(|s| **s != Square::Empty);
        assert_eq!(occupied.count(), n);
        for t in &sequence[..n] {
            assert_eq!(board.get(t.position()), Square::Occupied(t.player()));
        }

        let winner = derive_winner(&board, &PlayerRegistry::default());
        assert_eq!(is_draw(&turns, winner.as_deref()), n == 9);
    }
}

#[test]
fn test_winner_reported_the_moment_line_completes() {
    // O completes the middle column on turn 6.
    let sequence = [
        turn(0, 0, Symbol::X),
        turn(0, 1, Symbol::O),
        turn(2, 2, Symbol::X),
        turn(1, 1, Symbol::O),
        turn(1, 0, Symbol::X),
        turn(2, 1, Symbol::O),
    ];
    let players = PlayerRegistry::new("Ada", "Grace");

    for n in 0..sequence.len() {
        let turns = TurnLog::from_turns(sequence[..n].to_vec()).expect("legal prefix");
        assert_eq!(derive_winner(&derive_board(&turns), &players), None);
    }

    let turns = TurnLog::from_turns(sequence.to_vec()).expect("legal log");
    assert_eq!(
        derive_winner(&derive_board(&turns), &players).as_deref(),
        Some("Grace")
    );
}

#[test]
fn test_is_draw_false_with_winner_even_when_full() {
    let turns = TurnLog::from_turns(vec![
        turn(0, 0, Symbol::X),
        turn(1, 0, Symbol::O),
        turn(0, 1, Symbol::X),
        turn(1, 1, Symbol::O),
        turn(1, 2, Symbol::X),
        turn(2, 0, Symbol::O),
        turn(2, 1, Symbol::X),
        turn(2, 2, Symbol::O),
        turn(0, 2, Symbol::X),
    ])
    .expect("legal log");

    assert!(!is_draw(&turns, Some("Player 1")));
    assert!(is_draw(&turns, None));
}

#[test]
fn test_board_new_is_empty() {
    assert_eq!(derive_board(&TurnLog::new()), Board::new());
}

#[test]
fn test_turn_log_deserialization_is_validated() {
    let json = r#"[{"position":[0,0],"player":"X"},{"position":[0,0],"player":"O"}]"#;
    assert!(serde_json::from_str::<TurnLog>(json).is_err());

    let json = r#"[{"position":[0,3],"player":"X"}]"#;
    assert!(serde_json::from_str::<TurnLog>(json).is_err());

    let json = r#"[{"position":[1,1],"player":"X"}]"#;
    let turns: TurnLog = serde_json::from_str(json).expect("valid log");
    assert_eq!(turns.last(), Some(&turn(1, 1, Symbol::X)));
}
