//! 全合法手の生成
//!
//! 盤上の手は `legal_destinations` の結果を成り・不成に展開する。
//! 打つ手は持ち駒の種類ごとに全ての空き升を候補とし、
//! 実際の着手と同じ検証（二歩・行き所のない駒・打ち歩詰め・自玉の王手放置）を通す。

use crate::board::Board;
use crate::rules::validator::is_valid_move;
use crate::types::{CapturedPieces, Color, Move, MoveList, Piece, Square};

use super::promotion::{PromotionChoice, promotion_choice};
use super::reach::legal_destinations;

/// 盤上の駒の合法手（打つ手を含まない）
pub fn generate_board_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (from, piece) in board.pieces_of(color) {
        for to in legal_destinations(board, from) {
            push_with_promotions(&mut moves, board, piece, from, to);
        }
    }
    moves
}

/// 全合法手（盤上の手 + 打つ手）
pub fn generate_legal_moves(board: &Board, hands: &CapturedPieces, color: Color) -> MoveList {
    let mut moves = generate_board_moves(board, color);
    moves.extend(drop_candidates(board, hands, color).filter(|mv| is_valid_move(board, mv, color, hands)));
    moves
}

/// 合法手が1つでもあるか
///
/// 詰み・ステイルメイト判定用。見つかった時点で打ち切る。
pub fn has_legal_move(board: &Board, hands: &CapturedPieces, color: Color) -> bool {
    board.pieces_of(color).any(|(from, _)| !legal_destinations(board, from).is_empty())
        || drop_candidates(board, hands, color).any(|mv| is_valid_move(board, &mv, color, hands))
}

fn push_with_promotions(moves: &mut MoveList, board: &Board, piece: Piece, from: Square, to: Square) {
    let captured = board.piece_on(to).map(|pc| pc.piece_type);
    let mv = |promote| Move::normal(from, to, piece.piece_type, promote).with_captured(captured);
    match promotion_choice(piece, from, to) {
        PromotionChoice::Forbidden => moves.push(mv(false)),
        PromotionChoice::Optional => {
            moves.push(mv(false));
            moves.push(mv(true));
        }
        PromotionChoice::Forced => moves.push(mv(true)),
    }
}

/// 打つ手の候補（未検証）
fn drop_candidates<'a>(
    board: &'a Board,
    hands: &CapturedPieces,
    color: Color,
) -> impl Iterator<Item = Move> + 'a {
    let hand = hands.of(color);
    hand.kinds().flat_map(move |pt| {
        Square::all().filter(move |&sq| board.is_empty_at(sq)).map(move |sq| Move::drop(pt, sq))
    })
}
