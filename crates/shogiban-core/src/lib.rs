//! 将棋のルールエンジン
//!
//! 盤面と指し手のデータ型、駒の動きの生成、合法手の判定（二歩・打ち歩詰め・
//! 行き所のない駒・王手放置）、局面の状態判定（王手・詰み・ステイルメイト・千日手・入玉宣言）、
//! SFEN / USI 表記の変換を提供する。
//!
//! 全ての操作は値に対する純粋な関数で、盤面を書き換えない。
//!
//! ```
//! use shogiban_core::{Game, GameStatus};
//!
//! let mut game = Game::default();
//! assert_eq!(game.play_usi("7g7f").unwrap(), GameStatus::Playing);
//! assert_eq!(game.position().to_sfen(), "lnsgkgsnl/1b5r1/ppppppppp/9/9/2P6/PP1PPPPPP/1R5B1/LNSGKGSNL w - 2");
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod json;
pub mod movegen;
pub mod notation;
pub mod position;
pub mod rules;
pub mod types;

pub use board::Board;
pub use error::{GameError, GameResult, IllegalMove, NotationError};
pub use game::{Game, ReplayResult, replay};
pub use json::BoardStateJson;
pub use movegen::{generate_legal_moves, movement_pattern};
pub use notation::{SFEN_HIRATE, UsiMove, decode_move, decode_position, encode_move, encode_position};
pub use position::{Position, PositionRecord};
pub use rules::{EnteringKingRule, GameRules, check_game_status, is_checkmate, is_in_check, is_stalemate, is_valid_move};
pub use types::{CapturedPieces, Color, GameStatus, Hand, Move, MoveList, Piece, PieceType, Square};
