//! フロントエンド向けの盤面 JSON 表現

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{Color, Hand, Piece, PieceType, Square};

/// 駒
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceJson {
    /// "sente" | "gote"
    pub owner: String,
    /// "K" | "R" | "B" | "G" | "S" | "N" | "L" | "P"（成駒は生駒の文字）
    #[serde(rename = "type")]
    pub piece_type: String,
    /// 成駒かどうか
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<bool>,
}

/// 盤面の1マス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellJson {
    /// "9a" ~ "1i" 形式
    pub square: String,
    pub piece: Option<PieceJson>,
}

/// 持ち駒（持っていない駒種は省略）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HandJson {
    #[serde(rename = "R", skip_serializing_if = "Option::is_none")]
    pub rook: Option<u32>,
    #[serde(rename = "B", skip_serializing_if = "Option::is_none")]
    pub bishop: Option<u32>,
    #[serde(rename = "G", skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(rename = "S", skip_serializing_if = "Option::is_none")]
    pub silver: Option<u32>,
    #[serde(rename = "N", skip_serializing_if = "Option::is_none")]
    pub knight: Option<u32>,
    #[serde(rename = "L", skip_serializing_if = "Option::is_none")]
    pub lance: Option<u32>,
    #[serde(rename = "P", skip_serializing_if = "Option::is_none")]
    pub pawn: Option<u32>,
}

/// 両者の持ち駒
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandsJson {
    pub sente: HandJson,
    pub gote: HandJson,
}

/// 盤面全体の状態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardStateJson {
    /// 9x9 のセル配列（一段目から、各段は9筋から）
    pub cells: Vec<Vec<CellJson>>,
    pub hands: HandsJson,
    /// 手番: "sente" | "gote"
    pub turn: String,
    /// 手数
    pub ply: u32,
}

impl BoardStateJson {
    pub fn from_position(position: &Position) -> BoardStateJson {
        let cells = (0..9)
            .map(|row| {
                (0..9)
                    .map(|col| {
                        let sq = Square::new(row, col);
                        CellJson {
                            square: sq.to_string(),
                            piece: position.board.piece_on(sq).map(piece_to_json),
                        }
                    })
                    .collect()
            })
            .collect();

        BoardStateJson {
            cells,
            hands: HandsJson {
                sente: hand_to_json(position.hands.of(Color::Black)),
                gote: hand_to_json(position.hands.of(Color::White)),
            },
            turn: color_to_owner(position.side_to_move).to_string(),
            ply: position.move_number,
        }
    }
}

impl From<&Position> for BoardStateJson {
    fn from(position: &Position) -> Self {
        BoardStateJson::from_position(position)
    }
}

fn color_to_owner(color: Color) -> &'static str {
    match color {
        Color::Black => "sente",
        Color::White => "gote",
    }
}

fn piece_to_json(pc: Piece) -> PieceJson {
    PieceJson {
        owner: color_to_owner(pc.color).to_string(),
        piece_type: pc.piece_type.sfen_char().to_string(),
        promoted: pc.piece_type.is_promoted().then_some(true),
    }
}

fn hand_to_json(hand: Hand) -> HandJson {
    let count = |pt| Some(hand.count(pt)).filter(|&n| n > 0);
    HandJson {
        rook: count(PieceType::Rook),
        bishop: count(PieceType::Bishop),
        gold: count(PieceType::Gold),
        silver: count(PieceType::Silver),
        knight: count(PieceType::Knight),
        lance: count(PieceType::Lance),
        pawn: count(PieceType::Pawn),
    }
}
