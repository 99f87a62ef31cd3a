//! 駒ごとの移動先

use crate::board::Board;
use crate::movegen::reach::legal_destinations;
use crate::types::{Color, Piece, PieceType, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn destinations(piece: Piece, from: &str) -> Vec<String> {
    let board = Board::empty().with_piece(sq(from), piece);
    let mut v: Vec<String> = legal_destinations(&board, sq(from)).iter().map(|s| s.to_string()).collect();
    v.sort();
    v
}

fn strs(v: &[&str]) -> Vec<String> {
    let mut v: Vec<String> = v.iter().map(|s| s.to_string()).collect();
    v.sort();
    v
}

#[test]
fn test_step_pieces_at_center() {
    let black = |pt| Piece::new(Color::Black, pt);
    assert_eq!(destinations(black(PieceType::Pawn), "5e"), strs(&["5d"]));
    assert_eq!(destinations(black(PieceType::Knight), "5e"), strs(&["4c", "6c"]));
    assert_eq!(destinations(black(PieceType::Silver), "5e"), strs(&["4d", "5d", "6d", "4f", "6f"]));
    assert_eq!(destinations(black(PieceType::Gold), "5e"), strs(&["4d", "5d", "6d", "4e", "6e", "5f"]));
    assert_eq!(
        destinations(black(PieceType::King), "5e"),
        strs(&["4d", "5d", "6d", "4e", "6e", "4f", "5f", "6f"])
    );
}

#[test]
fn test_white_pieces_move_down_the_board() {
    let white = |pt| Piece::new(Color::White, pt);
    assert_eq!(destinations(white(PieceType::Pawn), "5e"), strs(&["5f"]));
    assert_eq!(destinations(white(PieceType::Knight), "5e"), strs(&["4g", "6g"]));
    assert_eq!(destinations(white(PieceType::Silver), "5e"), strs(&["4f", "5f", "6f", "4d", "6d"]));
    assert_eq!(destinations(white(PieceType::ProSilver), "5e"), strs(&["4f", "5f", "6f", "4e", "6e", "5d"]));
}

#[test]
fn test_sliders_on_empty_board() {
    let black = |pt| Piece::new(Color::Black, pt);
    assert_eq!(destinations(black(PieceType::Lance), "5e"), strs(&["5a", "5b", "5c", "5d"]));
    assert_eq!(destinations(black(PieceType::Rook), "5e").len(), 16);
    assert_eq!(destinations(black(PieceType::Bishop), "5e").len(), 16);
    assert_eq!(destinations(black(PieceType::Dragon), "5e").len(), 20);
    assert_eq!(destinations(black(PieceType::Horse), "5e").len(), 20);
    assert_eq!(destinations(black(PieceType::Bishop), "1i").len(), 8);
}

#[test]
fn test_slider_capture_stops_ray() {
    let board = Board::empty()
        .with_piece(sq("9i"), Piece::new(Color::White, PieceType::Lance))
        .with_piece(sq("9f"), Piece::new(Color::Black, PieceType::Pawn));
    let dests: Vec<String> = legal_destinations(&board, sq("9i")).iter().map(|s| s.to_string()).collect();
    assert!(dests.is_empty());

    let board = Board::empty()
        .with_piece(sq("9a"), Piece::new(Color::White, PieceType::Lance))
        .with_piece(sq("9f"), Piece::new(Color::Black, PieceType::Pawn));
    let mut dests: Vec<String> = legal_destinations(&board, sq("9a")).iter().map(|s| s.to_string()).collect();
    dests.sort();
    assert_eq!(dests, strs(&["9b", "9c", "9d", "9e", "9f"]));
}
