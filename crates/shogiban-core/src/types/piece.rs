//! 駒（Piece）

use super::{Color, PieceType};

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    /// ColorとPieceTypeから生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece { piece_type, color }
    }

    /// 成り駒を返す
    #[inline]
    pub const fn promote(self) -> Option<Piece> {
        match self.piece_type.promote() {
            Some(pt) => Some(Piece::new(self.color, pt)),
            None => None,
        }
    }

    /// 生駒を返す
    #[inline]
    pub const fn unpromote(self) -> Piece {
        Piece::new(self.color, self.piece_type.unpromote())
    }

    /// SFEN の盤面表記（"P", "+p" など）
    pub fn to_sfen(self) -> String {
        let c = self.piece_type.sfen_char();
        let c = match self.color {
            Color::Black => c,
            Color::White => c.to_ascii_lowercase(),
        };
        if self.piece_type.is_promoted() { format!("+{c}") } else { c.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_promote() {
        let pawn = Piece::new(Color::Black, PieceType::Pawn);
        assert_eq!(pawn.promote(), Some(Piece::new(Color::Black, PieceType::ProPawn)));
        assert_eq!(Piece::new(Color::White, PieceType::Gold).promote(), None);
        assert_eq!(Piece::new(Color::White, PieceType::Horse).unpromote().piece_type, PieceType::Bishop);
    }

    #[test]
    fn test_piece_to_sfen() {
        assert_eq!(Piece::new(Color::Black, PieceType::Pawn).to_sfen(), "P");
        assert_eq!(Piece::new(Color::White, PieceType::Dragon).to_sfen(), "+r");
        assert_eq!(Piece::new(Color::White, PieceType::King).to_sfen(), "k");
    }
}
