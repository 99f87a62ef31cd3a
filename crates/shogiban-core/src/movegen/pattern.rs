//! 駒の動きのパターン
//!
//! 駒種と手番から方向ベクトルの一覧を返す。盤面は一切参照しない。
//! 盤外に出る方向も含めて返すので、範囲の判定は呼び出し側（`reach`）で行う。

use smallvec::{SmallVec, smallvec};

use crate::types::{Color, PieceType};

/// 方向ベクトル（row 増分, col 増分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    #[inline]
    pub const fn new(dr: i8, dc: i8) -> Direction {
        Direction { dr, dc }
    }
}

/// 一方向の動き。`slides` が真なら盤端か駒に当たるまで進める
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ray {
    pub direction: Direction,
    pub slides: bool,
}

impl Ray {
    #[inline]
    const fn step(dr: i8, dc: i8) -> Ray {
        Ray { direction: Direction::new(dr, dc), slides: false }
    }

    #[inline]
    const fn slide(dr: i8, dc: i8) -> Ray {
        Ray { direction: Direction::new(dr, dc), slides: true }
    }
}

/// 駒の動き（最大8方向）
pub type Pattern = SmallVec<[Ray; 8]>;

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 駒種・手番に対する動きのパターンを返す
///
/// 前方は手番の進行方向（先手は row が減る方向）。
/// 盤上の位置は引数に取らない。パターンは位置に依存せず、盤端での打ち切りは
/// `reach` 側のレイキャストで行う。
pub fn movement_pattern(piece_type: PieceType, color: Color) -> Pattern {
    let f = color.forward();
    match piece_type {
        PieceType::Pawn => smallvec![Ray::step(f, 0)],
        PieceType::Lance => smallvec![Ray::slide(f, 0)],
        PieceType::Knight => smallvec![Ray::step(2 * f, -1), Ray::step(2 * f, 1)],
        PieceType::Silver => smallvec![
            Ray::step(f, -1),
            Ray::step(f, 0),
            Ray::step(f, 1),
            Ray::step(-f, -1),
            Ray::step(-f, 1),
        ],
        PieceType::Gold
        | PieceType::ProPawn
        | PieceType::ProLance
        | PieceType::ProKnight
        | PieceType::ProSilver => smallvec![
            Ray::step(f, -1),
            Ray::step(f, 0),
            Ray::step(f, 1),
            Ray::step(0, -1),
            Ray::step(0, 1),
            Ray::step(-f, 0),
        ],
        PieceType::Bishop => DIAGONALS.iter().map(|&(dr, dc)| Ray::slide(dr, dc)).collect(),
        PieceType::Rook => ORTHOGONALS.iter().map(|&(dr, dc)| Ray::slide(dr, dc)).collect(),
        PieceType::King => DIAGONALS
            .iter()
            .chain(ORTHOGONALS.iter())
            .map(|&(dr, dc)| Ray::step(dr, dc))
            .collect(),
        PieceType::Horse => DIAGONALS
            .iter()
            .map(|&(dr, dc)| Ray::slide(dr, dc))
            .chain(ORTHOGONALS.iter().map(|&(dr, dc)| Ray::step(dr, dc)))
            .collect(),
        PieceType::Dragon => ORTHOGONALS
            .iter()
            .map(|&(dr, dc)| Ray::slide(dr, dc))
            .chain(DIAGONALS.iter().map(|&(dr, dc)| Ray::step(dr, dc)))
            .collect(),
    }
}
