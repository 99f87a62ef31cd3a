//! 二歩

use super::*;
use crate::error::IllegalMove;
use crate::rules::validator::{is_valid_move, validate_move};
use crate::types::Move;

fn kings() -> Vec<(&'static str, Piece)> {
    vec![("5i", black(PieceType::King)), ("5a", white(PieceType::King))]
}

#[test]
fn test_drop_into_file_with_own_pawn_rejected() {
    let mut pieces = kings();
    pieces.push(("3g", black(PieceType::Pawn)));
    let board = place(&pieces);
    let hands = black_holds(&[PieceType::Pawn]);
    assert_eq!(
        validate_move(&board, &Move::drop(PieceType::Pawn, sq("3d")), Color::Black, &hands),
        Err(IllegalMove::DoublePawn(3))
    );
    assert!(is_valid_move(&board, &Move::drop(PieceType::Pawn, sq("4d")), Color::Black, &hands));
}

#[test]
fn test_opponent_pawn_in_file_does_not_count() {
    let mut pieces = kings();
    pieces.push(("3c", white(PieceType::Pawn)));
    let board = place(&pieces);
    let hands = black_holds(&[PieceType::Pawn]);
    assert!(is_valid_move(&board, &Move::drop(PieceType::Pawn, sq("3e")), Color::Black, &hands));
}

#[test]
fn test_promoted_pawn_in_file_does_not_count() {
    let mut pieces = kings();
    pieces.push(("3c", black(PieceType::ProPawn)));
    let board = place(&pieces);
    let hands = black_holds(&[PieceType::Pawn]);
    assert!(is_valid_move(&board, &Move::drop(PieceType::Pawn, sq("3e")), Color::Black, &hands));
}

#[test]
fn test_white_double_pawn() {
    let mut pieces = kings();
    pieces.push(("7c", white(PieceType::Pawn)));
    let board = place(&pieces);
    let hands = white_holds(&[PieceType::Pawn]);
    assert_eq!(
        validate_move(&board, &Move::drop(PieceType::Pawn, sq("7f")), Color::White, &hands),
        Err(IllegalMove::DoublePawn(7))
    );
}

#[test]
fn test_generated_drops_respect_double_pawn() {
    let board = Board::hirate();
    let hands = black_holds(&[PieceType::Pawn]);
    let moves = crate::movegen::generate_legal_moves(&board, &hands, Color::Black);
    assert!(moves.iter().all(|mv| !(mv.is_drop() && mv.piece_type() == PieceType::Pawn)));
}
