//! 対局規則
//!
//! - `validator`: 1手の合法性検証（着手前の唯一の関門）
//! - `judge`: 王手・詰み・ステイルメイト・千日手の判定
//! - `entering_king`: 入玉宣言
//! - `config`: 規則の設定値

pub mod config;
pub mod entering_king;
pub mod judge;
pub mod validator;

#[cfg(test)]
mod tests;

pub use config::GameRules;
pub use entering_king::{EnteringKingRule, can_declare_win, declaration_points};
pub use judge::{
    DEFAULT_REPETITION_LIMIT, check_game_status, is_checkmate, is_in_check, is_repetition,
    is_repetition_with_limit, is_stalemate,
};
pub use validator::{is_valid_move, validate_move};
