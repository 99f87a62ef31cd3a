//! 入玉宣言ルール（Entering King Rule）

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::movegen::promotion::in_promotion_zone;
use crate::types::{Color, PieceType};

/// 宣言勝ちに必要な点数
pub const DECLARATION_POINTS_REQUIRED: u32 = 24;

/// 入玉宣言ルールの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnteringKingRule {
    /// 入玉ルールなし
    #[default]
    None,
    /// 24点法（敵陣の駒の点数が24点以上で宣言勝ち）
    Points24,
}

/// 敵陣にある自駒（玉を除く）の点数合計
///
/// 大駒（飛・角・竜・馬）5点、その他1点。
pub fn declaration_points(board: &Board, color: Color) -> u32 {
    board
        .pieces_of(color)
        .filter(|(sq, pc)| pc.piece_type != PieceType::King && in_promotion_zone(color, *sq))
        .map(|(_, pc)| pc.piece_type.declaration_points())
        .sum()
}

/// 宣言勝ちの条件を満たすか
///
/// 玉が敵陣（相手側の3段）にいて、敵陣の自駒の点数が24点以上。
pub fn can_declare_win(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        return false;
    };
    in_promotion_zone(color, king) && declaration_points(board, color) >= DECLARATION_POINTS_REQUIRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    /// 先手玉を 5b に置き、敵陣に大駒4枚（20点）と小駒 `minors` 枚
    fn entered_board(minors: u8) -> Board {
        let mut board = Board::empty()
            .with_piece(sq("5b"), Piece::new(Color::Black, PieceType::King))
            .with_piece(sq("1a"), Piece::new(Color::Black, PieceType::Dragon))
            .with_piece(sq("2a"), Piece::new(Color::Black, PieceType::Horse))
            .with_piece(sq("3a"), Piece::new(Color::Black, PieceType::Rook))
            .with_piece(sq("4a"), Piece::new(Color::Black, PieceType::Bishop));
        for col in 0..minors {
            board = board.with_piece(Square::new(2, col), Piece::new(Color::Black, PieceType::ProPawn));
        }
        board
    }

    #[test]
    fn test_points_count_only_pieces_in_zone() {
        let board = entered_board(3)
            .with_piece(sq("5e"), Piece::new(Color::Black, PieceType::Gold))
            .with_piece(sq("5g"), Piece::new(Color::White, PieceType::Rook));
        assert_eq!(declaration_points(&board, Color::Black), 23);
    }

    #[test]
    fn test_declare_win_threshold() {
        assert!(!can_declare_win(&entered_board(3), Color::Black));
        assert!(can_declare_win(&entered_board(4), Color::Black));
    }

    #[test]
    fn test_king_must_be_in_zone() {
        let board = entered_board(9).without_piece(sq("5b")).with_piece(
            sq("5d"),
            Piece::new(Color::Black, PieceType::King),
        );
        assert!(!can_declare_win(&board, Color::Black));
    }

    #[test]
    fn test_white_zone_is_ranks_g_to_i() {
        let board = Board::empty()
            .with_piece(sq("5h"), Piece::new(Color::White, PieceType::King))
            .with_piece(sq("1i"), Piece::new(Color::White, PieceType::Dragon))
            .with_piece(sq("2i"), Piece::new(Color::White, PieceType::Horse))
            .with_piece(sq("3i"), Piece::new(Color::White, PieceType::Dragon))
            .with_piece(sq("4i"), Piece::new(Color::White, PieceType::Horse))
            .with_piece(sq("6g"), Piece::new(Color::White, PieceType::Gold))
            .with_piece(sq("7g"), Piece::new(Color::White, PieceType::Silver))
            .with_piece(sq("8g"), Piece::new(Color::White, PieceType::Silver))
            .with_piece(sq("9g"), Piece::new(Color::White, PieceType::Gold));
        assert_eq!(declaration_points(&board, Color::White), 24);
        assert!(can_declare_win(&board, Color::White));
        assert!(!can_declare_win(&board, Color::Black));
    }
}
