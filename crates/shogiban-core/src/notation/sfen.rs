//! SFEN形式の解析・出力
//!
//! `<盤面> <手番> <持ち駒> <手数>` の4フィールド。

use crate::board::Board;
use crate::error::NotationError;
use crate::position::Position;
use crate::types::{CapturedPieces, Color, Hand, Piece, PieceType, Square};

/// 平手初期局面のSFEN
pub const SFEN_HIRATE: &str = "lnsgkgsnl/1b5r1/ppppppppp/9/9/9/PPPPPPPPP/1R5B1/LNSGKGSNL b - 1";

/// 局面をSFEN文字列にする
pub fn encode_position(board: &Board, side_to_move: Color, hands: &CapturedPieces, move_number: u32) -> String {
    format!(
        "{} {} {} {}",
        encode_board(board),
        side_char(side_to_move),
        encode_hands(hands),
        move_number
    )
}

/// 盤面部分（一段目から九段目、各段は9筋から1筋）
pub fn encode_board(board: &Board) -> String {
    let mut result = String::with_capacity(64);
    for row in 0..9 {
        let mut empty_count = 0;
        for col in 0..9 {
            match board.piece_on(Square::new(row, col)) {
                None => empty_count += 1,
                Some(pc) => {
                    if empty_count > 0 {
                        result.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    result.push_str(&pc.to_sfen());
                }
            }
        }
        if empty_count > 0 {
            result.push_str(&empty_count.to_string());
        }
        if row < 8 {
            result.push('/');
        }
    }
    result
}

/// 持ち駒部分（先手の大文字、後手の小文字。各々飛角金銀桂香歩の順、2枚以上は枚数を前置）
pub fn encode_hands(hands: &CapturedPieces) -> String {
    let mut result = String::new();
    for color in Color::ALL {
        let hand = hands.of(color);
        for pt in PieceType::HAND_PIECES {
            let cnt = hand.count(pt);
            if cnt == 0 {
                continue;
            }
            if cnt > 1 {
                result.push_str(&cnt.to_string());
            }
            let c = pt.sfen_char();
            result.push(if color == Color::Black { c } else { c.to_ascii_lowercase() });
        }
    }
    if result.is_empty() {
        result.push('-');
    }
    result
}

fn side_char(color: Color) -> char {
    match color {
        Color::Black => 'b',
        Color::White => 'w',
    }
}

/// SFEN文字列を局面に復号する
pub fn decode_position(sfen: &str) -> Result<Position, NotationError> {
    let parts: Vec<&str> = sfen.split_whitespace().collect();
    let [board, side, hand, move_number] = parts.as_slice() else {
        return Err(NotationError::FieldCount(parts.len()));
    };

    let board = decode_board(board)?;
    let side_to_move = match *side {
        "b" => Color::Black,
        "w" => Color::White,
        other => return Err(NotationError::SideToMove(other.to_string())),
    };
    let hands = decode_hands(hand)?;
    check_piece_totals(&board, &hands)?;
    let move_number =
        move_number.parse::<u32>().map_err(|_| NotationError::MoveNumber(move_number.to_string()))?;

    Ok(Position::new(board, hands, side_to_move, move_number))
}

fn decode_board(board_str: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = board_str.split('/').collect();
    if ranks.len() != 9 {
        return Err(NotationError::Board(format!("expected 9 ranks, got {}", ranks.len())));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;
        let mut promoted = false;
        for c in rank_str.chars() {
            if c == '+' {
                if promoted {
                    return Err(NotationError::Board(format!("double '+' in rank {}", row + 1)));
                }
                promoted = true;
                continue;
            }
            if let Some(digit) = c.to_digit(10) {
                if promoted || digit == 0 {
                    return Err(NotationError::Board(format!("unexpected '{c}' in rank {}", row + 1)));
                }
                col += digit as u8;
                if col > 9 {
                    return Err(NotationError::Board(format!("too many squares in rank {}", row + 1)));
                }
                continue;
            }
            if col >= 9 {
                return Err(NotationError::Board(format!("too many pieces in rank {}", row + 1)));
            }
            let piece = decode_piece(c, promoted)?;
            board = board.with_piece(Square::new(row as u8, col), piece);
            promoted = false;
            col += 1;
        }
        if promoted || col != 9 {
            return Err(NotationError::Board(format!("rank {} has wrong number of squares", row + 1)));
        }
    }
    Ok(board)
}

fn decode_piece(c: char, promoted: bool) -> Result<Piece, NotationError> {
    let pt = PieceType::from_sfen_char(c)
        .ok_or_else(|| NotationError::Board(format!("unknown piece character '{c}'")))?;
    let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
    let pt = if promoted {
        pt.promote()
            .ok_or_else(|| NotationError::Board(format!("'{c}' cannot be promoted")))?
    } else {
        pt
    };
    Ok(Piece::new(color, pt))
}

fn decode_hands(hand_str: &str) -> Result<CapturedPieces, NotationError> {
    if hand_str == "-" {
        return Ok(CapturedPieces::EMPTY);
    }

    let mut hands = CapturedPieces::EMPTY;
    let mut count: Option<u32> = None;
    for c in hand_str.chars() {
        if let Some(digit) = c.to_digit(10) {
            let next = count.unwrap_or(0) * 10 + digit;
            if next > 18 {
                return Err(NotationError::Hand(format!("count too large in '{hand_str}'")));
            }
            count = Some(next);
            continue;
        }
        let pt = PieceType::from_sfen_char(c)
            .filter(|pt| pt.is_hand_piece())
            .ok_or_else(|| NotationError::Hand(format!("invalid hand piece '{c}'")))?;
        let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
        let n = count.take().unwrap_or(1);
        let total = hands.of(color).count(pt) + n;
        if n == 0 || total > Hand::max_count(pt) {
            return Err(NotationError::Hand(format!("invalid count {n} for '{c}'")));
        }
        hands = hands.with(color, hands.of(color).with_count(pt, total));
    }
    if count.is_some() {
        return Err(NotationError::Hand(format!("trailing count in '{hand_str}'")));
    }
    Ok(hands)
}

/// 盤上と両者の持ち駒を合わせた枚数が駒種ごとの上限を超えていないか
fn check_piece_totals(board: &Board, hands: &CapturedPieces) -> Result<(), NotationError> {
    for pt in PieceType::HAND_PIECES {
        let on_board = board.pieces().filter(|(_, pc)| pc.piece_type.unpromote() == pt).count() as u32;
        let total = on_board + hands.of(Color::Black).count(pt) + hands.of(Color::White).count(pt);
        if total > Hand::max_count(pt) {
            return Err(NotationError::Hand(format!(
                "{total} pieces of kind '{}' on board and in hand",
                pt.sfen_char()
            )));
        }
    }
    Ok(())
}
