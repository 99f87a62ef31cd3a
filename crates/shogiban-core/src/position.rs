//! 局面（盤面 + 持ち駒 + 手番 + 手数）

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::NotationError;
use crate::notation::sfen;
use crate::types::{CapturedPieces, Color, Move};

/// 千日手判定用の局面表記（盤面・手番・持ち駒。手数を含まない）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionRecord(String);

impl PositionRecord {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 局面
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub hands: CapturedPieces,
    pub side_to_move: Color,
    /// 次に指される手の手数（平手初期局面で 1）
    pub move_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Position::hirate()
    }
}

impl Position {
    pub const fn new(board: Board, hands: CapturedPieces, side_to_move: Color, move_number: u32) -> Position {
        Position { board, hands, side_to_move, move_number }
    }

    /// 平手初期局面
    pub fn hirate() -> Position {
        Position::new(Board::hirate(), CapturedPieces::EMPTY, Color::Black, 1)
    }

    /// SFEN文字列から生成
    pub fn from_sfen(sfen: &str) -> Result<Position, NotationError> {
        sfen::decode_position(sfen)
    }

    /// SFEN文字列を返す
    pub fn to_sfen(&self) -> String {
        sfen::encode_position(&self.board, self.side_to_move, &self.hands, self.move_number)
    }

    /// 千日手判定用の局面表記
    pub fn record(&self) -> PositionRecord {
        PositionRecord(format!(
            "{} {} {}",
            sfen::encode_board(&self.board),
            if self.side_to_move == Color::Black { 'b' } else { 'w' },
            sfen::encode_hands(&self.hands)
        ))
    }

    /// 手を指した次の局面を返す（`self` は変更しない）
    ///
    /// 合法性は検証しない。
    ///
    /// # Panics
    /// 移動元に駒がない、または持っていない駒を打つ手を渡した場合。
    #[must_use]
    pub fn apply(&self, mv: &Move) -> Position {
        let (board, hands) = self.board.apply_move_with_hands(&self.hands, mv, self.side_to_move);
        Position::new(board, hands, self.side_to_move.opponent(), self.move_number.saturating_add(1))
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_sfen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sfen())
    }
}
