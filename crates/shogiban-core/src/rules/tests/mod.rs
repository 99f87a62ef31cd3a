//! 規則のシナリオテスト

mod double_pawn;

use crate::board::Board;
use crate::types::{CapturedPieces, Color, Hand, Piece, PieceType, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn black(pt: PieceType) -> Piece {
    Piece::new(Color::Black, pt)
}

fn white(pt: PieceType) -> Piece {
    Piece::new(Color::White, pt)
}

fn hand_of(pts: &[PieceType]) -> Hand {
    pts.iter().fold(Hand::EMPTY, |h, &pt| h.add(pt))
}

fn place(pieces: &[(&str, Piece)]) -> Board {
    pieces.iter().fold(Board::empty(), |b, &(s, pc)| b.with_piece(sq(s), pc))
}

fn black_holds(pts: &[PieceType]) -> CapturedPieces {
    CapturedPieces::new(hand_of(pts), Hand::EMPTY)
}

fn white_holds(pts: &[PieceType]) -> CapturedPieces {
    CapturedPieces::new(Hand::EMPTY, hand_of(pts))
}
