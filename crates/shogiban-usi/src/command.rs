//! USI protocol command definitions

use std::fmt;

/// エンジンへ送るコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsiCommand {
    /// Initialize USI mode
    Usi,

    /// Check if engine is ready
    IsReady,

    /// Set engine option
    SetOption { name: String, value: String },

    /// New game notification
    UsiNewGame,

    /// 開始局面と、そこから指された手
    Position { sfen: String, moves: Vec<String> },

    /// Start search
    Go(GoParams),

    /// Stop searching
    Stop,

    /// Quit the engine
    Quit,
}

/// go コマンドの持ち時間指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoParams {
    /// 1手ごとの秒読み（ミリ秒）
    Byoyomi(u64),
    /// 残り時間と加算（ミリ秒）
    Clock { btime: u64, wtime: u64, binc: u64, winc: u64 },
    /// 探索深さ
    Depth(u32),
}

impl fmt::Display for UsiCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsiCommand::Usi => write!(f, "usi"),
            UsiCommand::IsReady => write!(f, "isready"),
            UsiCommand::SetOption { name, value } => write!(f, "setoption name {name} value {value}"),
            UsiCommand::UsiNewGame => write!(f, "usinewgame"),
            UsiCommand::Position { sfen, moves } => {
                write!(f, "position sfen {sfen}")?;
                if !moves.is_empty() {
                    write!(f, " moves {}", moves.join(" "))?;
                }
                Ok(())
            }
            UsiCommand::Go(params) => write!(f, "go {params}"),
            UsiCommand::Stop => write!(f, "stop"),
            UsiCommand::Quit => write!(f, "quit"),
        }
    }
}

impl fmt::Display for GoParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GoParams::Byoyomi(ms) => write!(f, "byoyomi {ms}"),
            GoParams::Clock { btime, wtime, binc, winc } => {
                write!(f, "btime {btime} wtime {wtime} binc {binc} winc {winc}")
            }
            GoParams::Depth(depth) => write!(f, "depth {depth}"),
        }
    }
}
