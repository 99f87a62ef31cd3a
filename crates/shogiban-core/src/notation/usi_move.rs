//! USI形式の指し手文字列
//!
//! - 盤上の手: `7g7f`、成り `8h2b+`
//! - 打つ手: `P*5e`
//!
//! 盤上の手の文字列には動かす駒の種類が含まれない。復号結果は [`UsiMove`] のままでは
//! 指せず、[`UsiMove::resolve`] で盤面から駒種を引いて [`Move`] にする。

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::{IllegalMove, NotationError};
use crate::types::{Move, PieceType, Square};

/// 復号した指し手（盤上の手は駒種未確定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsiMove {
    Normal { from: Square, to: Square, promote: bool },
    Drop { piece_type: PieceType, to: Square },
}

impl UsiMove {
    /// 盤面を参照して駒種（と取る駒）を確定する
    ///
    /// 移動元が空なら `EmptySource`。所有者や動きの検証はしない。
    pub fn resolve(self, board: &Board) -> Result<Move, IllegalMove> {
        match self {
            UsiMove::Normal { from, to, promote } => {
                let piece = board.piece_on(from).ok_or(IllegalMove::EmptySource(from))?;
                let captured = board.piece_on(to).map(|pc| pc.piece_type);
                Ok(Move::normal(from, to, piece.piece_type, promote).with_captured(captured))
            }
            UsiMove::Drop { piece_type, to } => Ok(Move::drop(piece_type, to)),
        }
    }
}

impl From<Move> for UsiMove {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Normal { from, to, promote, .. } => UsiMove::Normal { from, to, promote },
            Move::Drop { to, piece_type } => UsiMove::Drop { piece_type, to },
        }
    }
}

impl fmt::Display for UsiMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            UsiMove::Normal { from, to, promote } => {
                write!(f, "{from}{to}{}", if promote { "+" } else { "" })
            }
            UsiMove::Drop { piece_type, to } => write!(f, "{}*{to}", piece_type.sfen_char()),
        }
    }
}

impl FromStr for UsiMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_move(s)
    }
}

/// 指し手を USI 文字列にする
pub fn encode_move(mv: &Move) -> String {
    UsiMove::from(*mv).to_string()
}

/// USI 文字列を復号する
pub fn decode_move(s: &str) -> Result<UsiMove, NotationError> {
    let invalid = || NotationError::Move(s.to_string());

    if let Some((piece, to)) = s.split_once('*') {
        let mut chars = piece.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !c.is_ascii_uppercase() {
            return Err(invalid());
        }
        let piece_type = PieceType::from_sfen_char(c).filter(|pt| pt.is_hand_piece()).ok_or_else(invalid)?;
        let to = to.parse::<Square>().map_err(|_| invalid())?;
        return Ok(UsiMove::Drop { piece_type, to });
    }

    let (body, promote) = match s.strip_suffix('+') {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };
    if body.len() != 4 || !body.is_ascii() {
        return Err(invalid());
    }
    let from = body[0..2].parse::<Square>().map_err(|_| invalid())?;
    let to = body[2..4].parse::<Square>().map_err(|_| invalid())?;
    if from == to {
        return Err(invalid());
    }
    Ok(UsiMove::Normal { from, to, promote })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Piece};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_roundtrip_slide() {
        let mv = Move::normal(sq("2h"), sq("2c"), PieceType::Rook, false);
        assert_eq!(encode_move(&mv), "2h2c");
        assert_eq!(decode_move("2h2c").unwrap(), UsiMove::from(mv));
    }

    #[test]
    fn test_roundtrip_promoting_slide() {
        let mv = Move::normal(sq("2h"), sq("2c"), PieceType::Rook, true);
        assert_eq!(encode_move(&mv), "2h2c+");
        assert_eq!(decode_move("2h2c+").unwrap(), UsiMove::Normal { from: sq("2h"), to: sq("2c"), promote: true });
    }

    #[test]
    fn test_roundtrip_drop() {
        let mv = Move::drop(PieceType::Pawn, sq("5e"));
        assert_eq!(encode_move(&mv), "P*5e");
        assert_eq!(decode_move("P*5e").unwrap().resolve(&Board::empty()).unwrap(), mv);
    }

    #[test]
    fn test_resolve_looks_up_kind_and_capture() {
        let board = Board::empty()
            .with_piece(sq("8h"), Piece::new(Color::Black, PieceType::Bishop))
            .with_piece(sq("2b"), Piece::new(Color::White, PieceType::Rook));
        let mv = decode_move("8h2b+").unwrap().resolve(&board).unwrap();
        assert_eq!(mv.piece_type(), PieceType::Bishop);
        assert_eq!(mv.captured(), Some(PieceType::Rook));
        assert!(mv.is_promote());
    }

    #[test]
    fn test_resolve_empty_source() {
        let err = decode_move("5e5d").unwrap().resolve(&Board::empty()).unwrap_err();
        assert_eq!(err, IllegalMove::EmptySource(sq("5e")));
    }

    #[test]
    fn test_decode_errors() {
        for s in ["", "7g", "7g7", "7g7f++", "0a1a", "7j7f", "7g7g", "p*5e", "K*5e", "+P*5e", "PP*5e", "P*5", "7g7f+x", "７g7f"] {
            assert!(decode_move(s).is_err(), "{s} should not decode");
        }
    }
}
