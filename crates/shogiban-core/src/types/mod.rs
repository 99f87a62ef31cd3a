//! 基本型モジュール
//!
//! ルールエンジンで使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! Square
//!   ↓
//! PieceType
//!   ↓
//! Piece ← Move
//!   ↓
//! Hand → CapturedPieces
//!
//! GameStatus は独立
//! ```

mod color;
mod hand;
mod moves;
mod piece;
mod piece_type;
mod square;
mod status;

pub use color::Color;
pub use hand::{CapturedPieces, Hand};
pub use moves::{Move, MoveList};
pub use piece::Piece;
pub use piece_type::PieceType;
pub use square::Square;
pub use status::GameStatus;
