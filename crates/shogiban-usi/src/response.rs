//! USI protocol response parser

use serde::{Deserialize, Serialize};

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    /// Centipawn score
    Cp(i32),
    /// Mate in N plies (positive = winning, negative = losing)
    Mate(i32),
}

/// info 行の内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingInfo {
    pub depth: Option<u32>,
    pub seldepth: Option<u32>,
    pub score: Option<Score>,
    pub nodes: Option<u64>,
    pub nps: Option<u64>,
    /// ミリ秒
    pub time: Option<u64>,
    /// 読み筋
    pub pv: Vec<String>,
}

/// エンジンからの応答行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsiResponse {
    UsiOk,
    ReadyOk,
    BestMove { best_move: String, ponder: Option<String> },
    Info(ThinkingInfo),
    Unknown(String),
}

/// 1行を解析する
pub fn parse_usi_line(line: &str) -> UsiResponse {
    let trimmed = line.trim();
    let mut tokens = trimmed.split_whitespace();
    match tokens.next() {
        Some("usiok") if tokens.next().is_none() => UsiResponse::UsiOk,
        Some("readyok") if tokens.next().is_none() => UsiResponse::ReadyOk,
        Some("bestmove") => parse_bestmove(trimmed, tokens),
        Some("info") => UsiResponse::Info(parse_info(tokens)),
        _ => UsiResponse::Unknown(trimmed.to_string()),
    }
}

/// `bestmove <move> [ponder <move>]`
fn parse_bestmove<'a>(line: &str, mut tokens: impl Iterator<Item = &'a str>) -> UsiResponse {
    let Some(best_move) = tokens.next() else {
        return UsiResponse::Unknown(line.to_string());
    };
    let ponder = match (tokens.next(), tokens.next()) {
        (Some("ponder"), Some(mv)) => Some(mv.to_string()),
        _ => None,
    };
    UsiResponse::BestMove { best_move: best_move.to_string(), ponder }
}

/// `info depth <d> seldepth <s> score cp <x> | score mate <n> nodes <n> nps <n> time <t> pv <moves...>`
///
/// 知らないキーや値の読めないキーは読み飛ばす。
fn parse_info<'a>(tokens: impl Iterator<Item = &'a str>) -> ThinkingInfo {
    let parts: Vec<&str> = tokens.collect();
    let mut info = ThinkingInfo::default();
    let value = |i: usize| parts.get(i + 1).copied();

    let mut i = 0;
    while i < parts.len() {
        match parts[i] {
            "depth" => {
                info.depth = value(i).and_then(|v| v.parse().ok());
                i += 2;
            }
            "seldepth" => {
                info.seldepth = value(i).and_then(|v| v.parse().ok());
                i += 2;
            }
            "nodes" => {
                info.nodes = value(i).and_then(|v| v.parse().ok());
                i += 2;
            }
            "nps" => {
                info.nps = value(i).and_then(|v| v.parse().ok());
                i += 2;
            }
            "time" => {
                info.time = value(i).and_then(|v| v.parse().ok());
                i += 2;
            }
            "score" => {
                let amount = parts.get(i + 2).and_then(|v| v.parse().ok());
                info.score = match (value(i), amount) {
                    (Some("cp"), Some(x)) => Some(Score::Cp(x)),
                    (Some("mate"), Some(n)) => Some(Score::Mate(n)),
                    _ => info.score,
                };
                i += 3;
            }
            "pv" => {
                info.pv = parts[i + 1..].iter().map(|s| s.to_string()).collect();
                break;
            }
            _ => i += 1,
        }
    }
    info
}
