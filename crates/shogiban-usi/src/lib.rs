//! USI (Universal Shogi Interface) で外部エンジンとやり取りするための境界
//!
//! - [`command`]: エンジンへ送るコマンドの組み立て
//! - [`response`]: エンジンからの応答行の解析
//! - [`collaborator`]: 対局（[`shogiban_core::Game`]）とエンジンの橋渡し
//! - [`mock`]: 合法手を無作為に返す決定的な代替エンジン
//!
//! プロセスの起動・終了・タイムアウトは扱わない。

pub mod collaborator;
pub mod command;
pub mod mock;
pub mod response;

pub use collaborator::{CollaboratorError, EngineReply, accept_engine_reply, position_command};
pub use command::{GoParams, UsiCommand};
pub use mock::MockEngine;
pub use response::{Score, ThinkingInfo, UsiResponse, parse_usi_line};
