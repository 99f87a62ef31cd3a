//! 局面の状態（GameStatus）

use serde::{Deserialize, Serialize};

/// 手番側から見た局面の状態
///
/// 投了はセッション層の概念なのでここには含めない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// 対局継続中
    #[default]
    Playing,
    /// 王手されている
    Check,
    /// 詰み
    Checkmate,
    /// 手詰まり（王手されていないが合法手がない）
    Stalemate,
    /// 千日手
    Repetition,
}

impl GameStatus {
    /// 対局が終了する状態か
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Repetition)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Repetition => "repetition",
        };
        f.write_str(s)
    }
}
