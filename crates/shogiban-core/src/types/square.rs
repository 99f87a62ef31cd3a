//! 升目（Square）

use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;

/// 盤の一辺の升数
pub const BOARD_SIZE: u8 = 9;

/// 升目（row, col）
///
/// - row 0 = 一段目（後手の最奥段）, row 8 = 九段目（先手の最奥段）
/// - col 0 = 9筋（左端）, col 8 = 1筋（右端）
///
/// 範囲外の座標も保持できる（盤外への指し手を `OutOfBounds` として拒否するため）。
/// 盤上にあるかは `is_on_board()` で確認する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// 升目の数
    pub const NUM: usize = 81;

    /// row と col から生成（範囲チェックなし）
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    /// row と col から生成（範囲外は None）
    #[inline]
    pub const fn checked(row: u8, col: u8) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE { Some(Square { row, col }) } else { None }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 盤上の升か
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// 筋（1-9）。col 0 が 9筋
    #[inline]
    pub const fn file(self) -> u8 {
        BOARD_SIZE - self.col
    }

    /// (dr, dc) だけずらした升。盤外なら None
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// 全ての升を返すイテレータ（一段目の9筋から順に）
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }

    /// USI の筋・段文字から生成（例: '7', 'g'）
    pub fn from_usi_chars(file: char, rank: char) -> Option<Square> {
        let file = file.to_digit(10).filter(|d| (1..=9).contains(d))? as u8;
        if !('a'..='i').contains(&rank) {
            return None;
        }
        let row = rank as u8 - b'a';
        Some(Square::new(row, BOARD_SIZE - file))
    }
}

/// USI 表記（"7g" など）で表示する
///
/// - col 0 → '9', col 8 → '1'
/// - row 0 → 'a', row 8 → 'i'
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({},{})", self.row, self.col);
        }
        let file = (b'0' + self.file()) as char;
        let rank = (b'a' + self.row) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => Square::from_usi_chars(f, r)
                .ok_or_else(|| NotationError::Move(format!("invalid square: {s}"))),
            _ => Err(NotationError::Move(format!("invalid square: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_checked() {
        assert!(Square::checked(0, 0).is_some());
        assert!(Square::checked(8, 8).is_some());
        assert!(Square::checked(9, 0).is_none());
        assert!(!Square::new(0, 9).is_on_board());
    }

    #[test]
    fn test_square_offset() {
        let sq = Square::new(4, 4);
        assert_eq!(sq.offset(-1, 1), Some(Square::new(3, 5)));
        assert_eq!(Square::new(0, 0).offset(-1, 0), None);
        assert_eq!(Square::new(8, 8).offset(0, 1), None);
    }

    #[test]
    fn test_square_usi() {
        assert_eq!(Square::new(6, 2).to_string(), "7g");
        assert_eq!(Square::new(0, 8).to_string(), "1a");
        assert_eq!(Square::new(8, 0).to_string(), "9i");
        assert_eq!("7g".parse::<Square>(), Ok(Square::new(6, 2)));
        assert_eq!("5e".parse::<Square>(), Ok(Square::new(4, 4)));
        assert!("0a".parse::<Square>().is_err());
        assert!("1j".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_all() {
        let all: Vec<_> = Square::all().collect();
        assert_eq!(all.len(), Square::NUM);
        assert_eq!(all[0], Square::new(0, 0));
        assert_eq!(all[80], Square::new(8, 8));
    }
}
