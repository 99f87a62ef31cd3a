//! 指し手の合法性検証
//!
//! 着手を確定する前に必ず通す関門。外部エンジンから受け取った手も人の手と同じく検証する。
//!
//! 打つ手の検査順:
//! 盤外 → 駒のある升 → 持ち駒なし → 二歩 → 行き所のない駒 → 自玉の王手放置 → 打ち歩詰め
//!
//! 打ち歩詰めの判定は相手の詰み判定（全合法手の生成）を呼び、その中でさらに打つ手の検証が走る。
//! 自玉の王手放置を先に弾き、シミュレーションでは打った歩を持ち駒から減らすので、入れ子は有限で終わる。

use crate::board::Board;
use crate::error::IllegalMove;
use crate::movegen::promotion::{PromotionChoice, is_immobile_at, promotion_choice};
use crate::movegen::reach::{is_in_check, reachable_squares};
use crate::types::{CapturedPieces, Color, Move, PieceType, Square};

use super::judge::is_checkmate;

/// 指し手を検証する
///
/// 合法なら `Ok(())`、不正なら理由を返す。
pub fn validate_move(
    board: &Board,
    mv: &Move,
    mover: Color,
    hands: &CapturedPieces,
) -> Result<(), IllegalMove> {
    let result = match *mv {
        Move::Normal { from, to, piece_type, promote, .. } => {
            validate_board_move(board, mover, from, to, piece_type, promote)
        }
        Move::Drop { to, piece_type } => validate_drop(board, mover, hands, piece_type, to),
    };
    if let Err(reason) = &result {
        log::debug!("rejected {mover:?} move {mv:?}: {reason}");
    }
    result
}

/// 指し手が合法か
#[inline]
pub fn is_valid_move(board: &Board, mv: &Move, mover: Color, hands: &CapturedPieces) -> bool {
    validate_move(board, mv, mover, hands).is_ok()
}

fn validate_board_move(
    board: &Board,
    mover: Color,
    from: Square,
    to: Square,
    piece_type: PieceType,
    promote: bool,
) -> Result<(), IllegalMove> {
    if !from.is_on_board() {
        return Err(IllegalMove::OutOfBounds(from));
    }
    if !to.is_on_board() {
        return Err(IllegalMove::OutOfBounds(to));
    }
    let piece = board.piece_on(from).ok_or(IllegalMove::EmptySource(from))?;
    if piece.color != mover {
        return Err(IllegalMove::WrongOwner(from));
    }
    if piece.piece_type != piece_type {
        return Err(IllegalMove::PieceMismatch(from));
    }
    if !reachable_squares(board, from).contains(&to) {
        return Err(IllegalMove::Blocked(to));
    }
    let mv = Move::normal(from, to, piece_type, false);
    if is_in_check(&board.apply_move(&mv, mover), mover) {
        return Err(IllegalMove::LeavesKingInCheck);
    }
    match (promotion_choice(piece, from, to), promote) {
        (PromotionChoice::Forbidden, true) | (PromotionChoice::Forced, false) => {
            Err(IllegalMove::IllegalPromotion)
        }
        _ => Ok(()),
    }
}

fn validate_drop(
    board: &Board,
    mover: Color,
    hands: &CapturedPieces,
    piece_type: PieceType,
    to: Square,
) -> Result<(), IllegalMove> {
    if !to.is_on_board() {
        return Err(IllegalMove::OutOfBounds(to));
    }
    if board.piece_on(to).is_some() {
        return Err(IllegalMove::DropOnOccupiedSquare(to));
    }
    if !piece_type.is_hand_piece() {
        return Err(IllegalMove::DropWithoutHandPiece);
    }
    let Some(next_hands) = hands.remove(mover, piece_type) else {
        return Err(IllegalMove::DropWithoutHandPiece);
    };
    if piece_type == PieceType::Pawn && board.has_unpromoted_pawn_on_col(mover, to.col()) {
        return Err(IllegalMove::DoublePawn(to.file()));
    }
    if is_immobile_at(piece_type, mover, to) {
        return Err(IllegalMove::ImmobileDrop(to));
    }
    let next = board.apply_move(&Move::drop(piece_type, to), mover);
    if is_in_check(&next, mover) {
        return Err(IllegalMove::LeavesKingInCheck);
    }
    if piece_type == PieceType::Pawn && is_pawn_drop_mate(&next, &next_hands, mover.opponent(), to) {
        return Err(IllegalMove::PawnDropCheckmate(to));
    }
    Ok(())
}

/// 打った歩だけが詰みの原因か
///
/// 歩を打った盤面で相手が詰んでいなければ false。
/// 詰んでいる場合は、同じ盤面から打った歩だけを取り除いて再判定し、
/// それでも詰みなら歩は原因ではない（false）、詰みが消えるなら歩が唯一の原因（true）。
fn is_pawn_drop_mate(after_drop: &Board, hands: &CapturedPieces, defender: Color, pawn: Square) -> bool {
    if !is_checkmate(after_drop, defender, hands) {
        return false;
    }
    let without_pawn = after_drop.clone().without_piece(pawn);
    !is_checkmate(&without_pawn, defender, hands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Hand, Piece};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn black(pt: PieceType) -> Piece {
        Piece::new(Color::Black, pt)
    }

    fn white(pt: PieceType) -> Piece {
        Piece::new(Color::White, pt)
    }

    fn black_hand(pts: &[PieceType]) -> CapturedPieces {
        let hand = pts.iter().fold(Hand::EMPTY, |h, &pt| h.add(pt));
        CapturedPieces::new(hand, Hand::EMPTY)
    }

    #[test]
    fn test_hirate_pawn_push_is_valid() {
        let board = Board::hirate();
        let mv = Move::normal(sq("7g"), sq("7f"), PieceType::Pawn, false);
        assert_eq!(validate_move(&board, &mv, Color::Black, &CapturedPieces::EMPTY), Ok(()));
    }

    #[test]
    fn test_board_move_rejections() {
        let board = Board::hirate();
        let hands = CapturedPieces::EMPTY;
        let cases = [
            (Move::normal(sq("5e"), sq("5d"), PieceType::Pawn, false), IllegalMove::EmptySource(sq("5e"))),
            (Move::normal(sq("3c"), sq("3d"), PieceType::Pawn, false), IllegalMove::WrongOwner(sq("3c"))),
            (Move::normal(sq("7g"), sq("7f"), PieceType::Lance, false), IllegalMove::PieceMismatch(sq("7g"))),
            (Move::normal(sq("7g"), sq("7e"), PieceType::Pawn, false), IllegalMove::Blocked(sq("7e"))),
            (Move::normal(sq("8h"), sq("2h"), PieceType::Rook, false), IllegalMove::Blocked(sq("2h"))),
            (Move::normal(sq("7g"), sq("7f"), PieceType::Pawn, true), IllegalMove::IllegalPromotion),
            (
                Move::normal(Square::new(9, 0), sq("7f"), PieceType::Pawn, false),
                IllegalMove::OutOfBounds(Square::new(9, 0)),
            ),
        ];
        for (mv, want) in cases {
            assert_eq!(validate_move(&board, &mv, Color::Black, &hands), Err(want), "{mv:?}");
        }
    }

    #[test]
    fn test_forced_promotion_must_be_taken() {
        let board = Board::empty()
            .with_piece(sq("5i"), black(PieceType::King))
            .with_piece(sq("3b"), black(PieceType::Pawn));
        let hands = CapturedPieces::EMPTY;
        let stay = Move::normal(sq("3b"), sq("3a"), PieceType::Pawn, false);
        let promote = Move::normal(sq("3b"), sq("3a"), PieceType::Pawn, true);
        assert_eq!(validate_move(&board, &stay, Color::Black, &hands), Err(IllegalMove::IllegalPromotion));
        assert!(is_valid_move(&board, &promote, Color::Black, &hands));
    }

    #[test]
    fn test_moving_pinned_piece_leaves_king_in_check() {
        let board = Board::empty()
            .with_piece(sq("5i"), black(PieceType::King))
            .with_piece(sq("5g"), black(PieceType::Silver))
            .with_piece(sq("5a"), white(PieceType::Lance));
        let mv = Move::normal(sq("5g"), sq("4f"), PieceType::Silver, false);
        assert_eq!(
            validate_move(&board, &mv, Color::Black, &CapturedPieces::EMPTY),
            Err(IllegalMove::LeavesKingInCheck)
        );
    }

    #[test]
    fn test_drop_rejections() {
        let board = Board::empty()
            .with_piece(sq("5i"), black(PieceType::King))
            .with_piece(sq("5a"), white(PieceType::King))
            .with_piece(sq("7g"), black(PieceType::Pawn));
        let hands = black_hand(&[PieceType::Pawn, PieceType::Knight]);
        let cases = [
            (Move::drop(PieceType::Pawn, sq("7g")), IllegalMove::DropOnOccupiedSquare(sq("7g"))),
            (Move::drop(PieceType::Gold, sq("5e")), IllegalMove::DropWithoutHandPiece),
            (Move::drop(PieceType::ProPawn, sq("5e")), IllegalMove::DropWithoutHandPiece),
            (Move::drop(PieceType::Pawn, sq("7c")), IllegalMove::DoublePawn(7)),
            (Move::drop(PieceType::Pawn, sq("3a")), IllegalMove::ImmobileDrop(sq("3a"))),
            (Move::drop(PieceType::Knight, sq("3b")), IllegalMove::ImmobileDrop(sq("3b"))),
            (Move::drop(PieceType::Pawn, Square::new(4, 9)), IllegalMove::OutOfBounds(Square::new(4, 9))),
        ];
        for (mv, want) in cases {
            assert_eq!(validate_move(&board, &mv, Color::Black, &hands), Err(want), "{mv:?}");
        }
        assert!(is_valid_move(&board, &Move::drop(PieceType::Knight, sq("3c")), Color::Black, &hands));
    }

    #[test]
    fn test_drop_must_answer_check() {
        // 5i玉に5a飛車の王手。5e への打ちは合駒になるが 3e への打ちは放置
        let board = Board::empty()
            .with_piece(sq("5i"), black(PieceType::King))
            .with_piece(sq("5a"), white(PieceType::Rook));
        let hands = black_hand(&[PieceType::Gold]);
        assert!(is_valid_move(&board, &Move::drop(PieceType::Gold, sq("5e")), Color::Black, &hands));
        assert_eq!(
            validate_move(&board, &Move::drop(PieceType::Gold, sq("3e")), Color::Black, &hands),
            Err(IllegalMove::LeavesKingInCheck)
        );
    }
}
