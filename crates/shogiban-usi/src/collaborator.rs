//! 対局と外部エンジンの橋渡し
//!
//! 1. [`position_command`]: 現在の対局を `position` コマンドにする
//! 2. [`accept_engine_reply`]: `bestmove` の手を人の手と同じ検証に通して指す

use shogiban_core::{Game, GameError, GameStatus};

use crate::command::UsiCommand;
use crate::response::UsiResponse;

/// エンジンの応答を処理した結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineReply {
    /// 手を指した。指した後の状態
    Moved(GameStatus),
    /// `bestmove resign`
    Resign,
    /// `bestmove win`。宣言が規則上認められたか
    DeclareWin { accepted: bool },
    /// `bestmove` 以外の応答（info など）
    Ignored,
}

/// エンジン応答の処理エラー
#[derive(thiserror::Error, Debug)]
pub enum CollaboratorError {
    /// 手が読めない、反則、または決着後
    #[error("engine move {best_move} rejected: {source}")]
    Rejected {
        best_move: String,
        #[source]
        source: GameError,
    },
}

/// 開始局面と指し手列からなる `position` コマンド
pub fn position_command(game: &Game) -> UsiCommand {
    UsiCommand::Position { sfen: game.start_position().to_sfen(), moves: game.usi_moves() }
}

/// エンジンの応答を対局に反映する
///
/// `bestmove` の手は盤面から駒種を引いてから、全ての規則で検証して指す。
/// 拒否された場合、対局は変わらない。
pub fn accept_engine_reply(game: &mut Game, response: &UsiResponse) -> Result<EngineReply, CollaboratorError> {
    let UsiResponse::BestMove { best_move, .. } = response else {
        return Ok(EngineReply::Ignored);
    };
    match best_move.as_str() {
        "resign" => Ok(EngineReply::Resign),
        "win" => Ok(EngineReply::DeclareWin { accepted: game.declare_win() }),
        mv => match game.play_usi(mv) {
            Ok(status) => Ok(EngineReply::Moved(status)),
            Err(source) => {
                log::warn!("engine move {mv} rejected: {source}");
                Err(CollaboratorError::Rejected { best_move: mv.to_string(), source })
            }
        },
    }
}
