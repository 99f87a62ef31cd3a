//! 棋譜表記（SFEN 局面文字列・USI 指し手文字列）
//!
//! 合法性とは独立。形式が正しければ反則手でも復号する。

pub mod sfen;
pub mod usi_move;

pub use sfen::{SFEN_HIRATE, decode_position, encode_board, encode_hands, encode_position};
pub use usi_move::{UsiMove, decode_move, encode_move};
