//! 規則の設定

use serde::{Deserialize, Serialize};

use super::entering_king::EnteringKingRule;
use super::judge::DEFAULT_REPETITION_LIMIT;

/// 対局ごとの規則設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// 入玉宣言ルール
    pub entering_king: EnteringKingRule,
    /// 千日手とみなす過去の出現回数（3 なら同一局面の4回目で千日手）
    pub repetition_limit: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            entering_king: EnteringKingRule::None,
            repetition_limit: DEFAULT_REPETITION_LIMIT,
        }
    }
}
