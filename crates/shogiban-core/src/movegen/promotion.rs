//! 成りの判定と行き所のない駒

use crate::types::{Color, Piece, PieceType, Square};

/// 成りの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionChoice {
    /// 成れない
    Forbidden,
    /// 成っても成らなくてもよい
    Optional,
    /// 成らなければならない（不成では行き所がない）
    Forced,
}

/// 敵陣（手番から見て奥の3段）か
#[inline]
pub const fn in_promotion_zone(color: Color, sq: Square) -> bool {
    color.relative_row(sq.row()) <= 2
}

/// その升に置いた駒が二度と動けないか（行き所のない駒）
///
/// 歩・香は最奥段、桂は奥の2段。打ち駒の禁止と成りの強制の両方に使う。
#[inline]
pub const fn is_immobile_at(piece_type: PieceType, color: Color, sq: Square) -> bool {
    let rank = color.relative_row(sq.row());
    match piece_type {
        PieceType::Pawn | PieceType::Lance => rank == 0,
        PieceType::Knight => rank <= 1,
        _ => false,
    }
}

/// 盤上の手の成りの選択肢
///
/// 移動元か移動先のどちらかが敵陣なら成れる。
pub fn promotion_choice(piece: Piece, from: Square, to: Square) -> PromotionChoice {
    if !piece.piece_type.can_promote() {
        return PromotionChoice::Forbidden;
    }
    if !in_promotion_zone(piece.color, from) && !in_promotion_zone(piece.color, to) {
        return PromotionChoice::Forbidden;
    }
    if is_immobile_at(piece.piece_type, piece.color, to) {
        PromotionChoice::Forced
    } else {
        PromotionChoice::Optional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_zone_is_relative_to_owner() {
        assert!(in_promotion_zone(Color::Black, sq("5c")));
        assert!(!in_promotion_zone(Color::Black, sq("5d")));
        assert!(in_promotion_zone(Color::White, sq("5g")));
        assert!(!in_promotion_zone(Color::White, sq("5f")));
    }

    #[test]
    fn test_promotion_choice() {
        let black_pawn = Piece::new(Color::Black, PieceType::Pawn);
        assert_eq!(promotion_choice(black_pawn, sq("5e"), sq("5d")), PromotionChoice::Forbidden);
        assert_eq!(promotion_choice(black_pawn, sq("5d"), sq("5c")), PromotionChoice::Optional);
        assert_eq!(promotion_choice(black_pawn, sq("5b"), sq("5a")), PromotionChoice::Forced);

        let white_knight = Piece::new(Color::White, PieceType::Knight);
        assert_eq!(promotion_choice(white_knight, sq("4f"), sq("3h")), PromotionChoice::Forced);
        assert_eq!(promotion_choice(white_knight, sq("4e"), sq("3g")), PromotionChoice::Optional);

        // 敵陣から出る手も成れる
        let black_silver = Piece::new(Color::Black, PieceType::Silver);
        assert_eq!(promotion_choice(black_silver, sq("5c"), sq("4d")), PromotionChoice::Optional);

        let gold = Piece::new(Color::Black, PieceType::Gold);
        assert_eq!(promotion_choice(gold, sq("5b"), sq("5a")), PromotionChoice::Forbidden);
        let horse = Piece::new(Color::Black, PieceType::Horse);
        assert_eq!(promotion_choice(horse, sq("5b"), sq("4a")), PromotionChoice::Forbidden);
    }

    #[test]
    fn test_immobile_squares() {
        assert!(is_immobile_at(PieceType::Pawn, Color::Black, sq("1a")));
        assert!(!is_immobile_at(PieceType::Pawn, Color::Black, sq("1b")));
        assert!(is_immobile_at(PieceType::Lance, Color::White, sq("9i")));
        assert!(is_immobile_at(PieceType::Knight, Color::Black, sq("3b")));
        assert!(!is_immobile_at(PieceType::Knight, Color::Black, sq("3c")));
        assert!(is_immobile_at(PieceType::Knight, Color::White, sq("3h")));
        assert!(!is_immobile_at(PieceType::Silver, Color::Black, sq("3a")));
    }
}
