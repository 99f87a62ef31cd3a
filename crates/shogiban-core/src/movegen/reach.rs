//! 盤面に対する到達升の計算（レイキャスト）と王手判定

use smallvec::SmallVec;

use crate::board::Board;
use crate::types::{Color, Move, Square};

use super::pattern::movement_pattern;

/// 1つの駒の移動先（飛車・竜でも 20 升以下）
pub type Destinations = SmallVec<[Square; 32]>;

/// 自玉の安全を考えない到達升
///
/// 一歩の方向は盤外と自駒の升を除く。走る方向は一歩ずつ進み、
/// 自駒の手前で止まり、相手駒の升を含めてそこで止まる。
/// `from` が空なら空を返す。
pub fn reachable_squares(board: &Board, from: Square) -> Destinations {
    let mut out = Destinations::new();
    let Some(piece) = board.piece_on(from) else {
        return out;
    };
    for ray in movement_pattern(piece.piece_type, piece.color) {
        let mut cur = from;
        while let Some(next) = cur.offset(ray.direction.dr, ray.direction.dc) {
            match board.piece_on(next) {
                None => out.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        out.push(next);
                    }
                    break;
                }
            }
            if !ray.slides {
                break;
            }
            cur = next;
        }
    }
    out
}

/// 合法な移動先（自玉が取られる升を除いたもの）
///
/// 各移動先について盤面を複製して指し、自玉に利きがあれば除く。
pub fn legal_destinations(board: &Board, from: Square) -> Destinations {
    let Some(piece) = board.piece_on(from) else {
        return Destinations::new();
    };
    reachable_squares(board, from)
        .into_iter()
        .filter(|&to| {
            let mv = Move::normal(from, to, piece.piece_type, false);
            !is_in_check(&board.apply_move(&mv, piece.color), piece.color)
        })
        .collect()
}

/// `from` の駒が `target` に利いているか
pub fn attacks_square(board: &Board, from: Square, target: Square) -> bool {
    let Some(piece) = board.piece_on(from) else {
        return false;
    };
    movement_pattern(piece.piece_type, piece.color).into_iter().any(|ray| {
        let mut cur = from;
        while let Some(next) = cur.offset(ray.direction.dr, ray.direction.dc) {
            if next == target {
                return true;
            }
            if !ray.slides || board.piece_on(next).is_some() {
                return false;
            }
            cur = next;
        }
        false
    })
}

/// `by` 側のいずれかの駒が `target` に利いているか
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board.pieces_of(by).any(|(from, _)| attacks_square(board, from, target))
}

/// `color` の玉に相手の利きがあるか
///
/// 玉のない部分盤面では false。
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.opponent()),
        None => {
            log::trace!("is_in_check: no {color:?} king on board");
            false
        }
    }
}
