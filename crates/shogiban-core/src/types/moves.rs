//! 指し手（Move）

use smallvec::SmallVec;

use super::{PieceType, Square};

/// 指し手リスト
/// 合法手はほとんどの局面で128手未満なのでヒープ確保を避けられる
pub type MoveList = SmallVec<[Move; 128]>;

/// 指し手
///
/// 盤上の駒を動かす手（`Normal`）と持ち駒を打つ手（`Drop`）の2種類。
/// `piece_type` は動かす前の駒種。成る手では `promote` が立つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Normal {
        from: Square,
        to: Square,
        piece_type: PieceType,
        promote: bool,
        captured: Option<PieceType>,
    },
    Drop {
        to: Square,
        piece_type: PieceType,
    },
}

impl Move {
    /// 盤上の駒を動かす手（取る駒なし）
    #[inline]
    pub const fn normal(from: Square, to: Square, piece_type: PieceType, promote: bool) -> Move {
        Move::Normal { from, to, piece_type, promote, captured: None }
    }

    /// 持ち駒を打つ手
    #[inline]
    pub const fn drop(piece_type: PieceType, to: Square) -> Move {
        Move::Drop { to, piece_type }
    }

    /// 取る駒を設定した手を返す（打つ手はそのまま）
    #[inline]
    pub const fn with_captured(self, captured: Option<PieceType>) -> Move {
        match self {
            Move::Normal { from, to, piece_type, promote, .. } => {
                Move::Normal { from, to, piece_type, promote, captured }
            }
            other => other,
        }
    }

    /// 移動元（打つ手は None）
    #[inline]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Normal { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    /// 移動先
    #[inline]
    pub const fn to(self) -> Square {
        match self {
            Move::Normal { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// 動かす（打つ）駒種
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        match self {
            Move::Normal { piece_type, .. } | Move::Drop { piece_type, .. } => piece_type,
        }
    }

    /// 打つ手か
    #[inline]
    pub const fn is_drop(self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    /// 成る手か（打つ手は常に false）
    #[inline]
    pub const fn is_promote(self) -> bool {
        matches!(self, Move::Normal { promote: true, .. })
    }

    /// 取る駒種
    #[inline]
    pub const fn captured(self) -> Option<PieceType> {
        match self {
            Move::Normal { captured, .. } => captured,
            Move::Drop { .. } => None,
        }
    }
}
