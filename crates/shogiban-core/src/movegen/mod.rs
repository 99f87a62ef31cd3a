//! 指し手生成
//!
//! 依存の向き（下から上へ）:
//!
//! ```text
//! pattern    駒種ごとの方向ベクトルと走り/一歩の区別（盤面を見ない）
//!   ↓
//! reach      盤面に対するレイキャスト（範囲・遮り・駒取り）と自玉の安全確認
//!   ↓
//! aggregate  全合法手（成り・不成の展開と打つ手）
//! ```
//!
//! `reach` の王手判定は `rules::validator` と `rules::judge` の両方から使われる。

pub mod aggregate;
pub mod pattern;
pub mod promotion;
pub mod reach;

#[cfg(test)]
mod tests;

pub use aggregate::{generate_board_moves, generate_legal_moves, has_legal_move};
pub use pattern::{Direction, Pattern, Ray, movement_pattern};
pub use promotion::{PromotionChoice, is_immobile_at, promotion_choice};
pub use reach::{
    Destinations, attacks_square, is_in_check, is_square_attacked, legal_destinations,
    reachable_squares,
};
