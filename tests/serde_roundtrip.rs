//! JSON round trips for the serializable types.
#![cfg(feature = "serde")]

use chess_bot::board::{Board, CastlingRights, Color, GameState, Move, Piece, SearchParams, Square};

#[test]
fn move_round_trips_through_json() {
    let mut board = Board::new();
    let moves = board.get_all_moves(Color::White);
    let mv: Move = moves[0];
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);
}

#[test]
fn search_params_round_trip_and_default_missing_fields() {
    let params = SearchParams::default().with_fixed_depth(4).with_tie_break(0.0);
    let json = serde_json::to_string(&params).unwrap();
    let back: SearchParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);

    let partial: SearchParams = serde_json::from_str(r#"{"depth": 5}"#).unwrap();
    assert_eq!(partial.depth, 5);
    assert_eq!(partial.opening_depth, SearchParams::default().opening_depth);
}

#[test]
fn small_types_serialize() {
    let value = (
        Square(7, 4),
        Piece::Knight,
        CastlingRights::all(),
        GameState::Stalemate,
    );
    let json = serde_json::to_string(&value).unwrap();
    let back: (Square, Piece, CastlingRights, GameState) = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
