//! Tests for the textual board adapters.

use strictly_verdict::{Board, InvalidBoardKind, Player, Symbol};

#[test]
fn test_from_chars_matches_parse() {
    let chars = [['X', 'X', 'X'], ['O', ' ', 'O'], [' ', 'O', ' ']];
    let from_chars = Board::from_chars(&chars).unwrap();
    let parsed = Board::parse(&["XXX", "O O", " O "]).unwrap();
    assert_eq!(from_chars, parsed);
}

#[test]
fn test_from_json_matches_parse() {
    let json = Board::from_json(r#"[["X","O"," "],[" ","X"," "],["O"," "," "]]"#).unwrap();
    let parsed = Board::parse(&["XO ", " X ", "O  "]).unwrap();
    assert_eq!(json, parsed);
}

#[test]
fn test_lowercase_marks_rejected() {
    let err = Board::parse(&["xo ", "   ", "   "]).unwrap_err();
    assert_eq!(err.kind, InvalidBoardKind::IllegalSymbol("x".to_string()));
    assert_eq!(err.to_string(), "Wrong input");
}

#[test]
fn test_board_serializes_as_character_grid() {
    let board = Board::parse(&["XO ", "   ", "   "]).unwrap();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(
        json,
        r#"[["X","O"," "],[" "," "," "],[" "," "," "]]"#
    );
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_deserialize_rejects_illegal_symbol() {
    let result: Result<Board, _> = serde_json::from_str(r#"[["X","-"," "]]"#);
    assert!(result.is_err());
}

#[test]
fn test_cell_accessors() {
    let board = Board::parse(&["XO ", "   ", "  X"]).unwrap();
    assert_eq!(board.get(0, 0).and_then(Symbol::player), Some(Player::X));
    assert!(board.get(1, 1).is_some_and(Symbol::is_empty));
    let marks = board.cells().filter(|(_, _, s)| !s.is_empty()).count();
    assert_eq!(marks, 3);
}
