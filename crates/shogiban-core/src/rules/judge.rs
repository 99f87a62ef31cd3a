//! 局面の状態判定
//!
//! 優先順位: 千日手 → 詰み → ステイルメイト → 王手 → 対局中

use crate::board::Board;
use crate::movegen::aggregate::has_legal_move;
use crate::position::{Position, PositionRecord};
use crate::types::{CapturedPieces, Color, GameStatus};

use super::config::GameRules;

pub use crate::movegen::reach::is_in_check;

/// 千日手とみなす過去の出現回数の既定値（4回目の出現で千日手）
pub const DEFAULT_REPETITION_LIMIT: usize = 3;

/// `color` が詰んでいるか
///
/// 王手されていて、合法手（打つ手も全ての規則で検証したもの）が1つもない。
pub fn is_checkmate(board: &Board, color: Color, hands: &CapturedPieces) -> bool {
    is_in_check(board, color) && !has_legal_move(board, hands, color)
}

/// `color` がステイルメイトか（王手されておらず、合法手がない）
pub fn is_stalemate(board: &Board, color: Color, hands: &CapturedPieces) -> bool {
    !is_in_check(board, color) && !has_legal_move(board, hands, color)
}

/// 現局面が過去に3回以上現れているか（今回が4回目）
pub fn is_repetition(history: &[PositionRecord], current: &PositionRecord) -> bool {
    is_repetition_with_limit(history, current, DEFAULT_REPETITION_LIMIT)
}

/// 現局面が過去に `limit` 回以上現れているか
///
/// `history` には現局面を含めない。
pub fn is_repetition_with_limit(history: &[PositionRecord], current: &PositionRecord, limit: usize) -> bool {
    history.iter().filter(|record| *record == current).count() >= limit
}

/// 手番側から見た局面の状態
pub fn check_game_status(position: &Position, history: &[PositionRecord], rules: &GameRules) -> GameStatus {
    let color = position.side_to_move;
    if is_repetition_with_limit(history, &position.record(), rules.repetition_limit) {
        return GameStatus::Repetition;
    }
    let in_check = is_in_check(&position.board, color);
    let can_move = has_legal_move(&position.board, &position.hands, color);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Playing,
    }
}
