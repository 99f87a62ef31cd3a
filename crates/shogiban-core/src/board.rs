//! 盤面（Board）
//!
//! 9×9 の升に `Option<Piece>` を持つ値型。`apply_move` は新しい盤面を返し、
//! 元の盤面は変更しない。

use crate::types::{CapturedPieces, Color, Move, Piece, PieceType, Square};

const BACK_RANK: [PieceType; 9] = [
    PieceType::Lance,
    PieceType::Knight,
    PieceType::Silver,
    PieceType::Gold,
    PieceType::King,
    PieceType::Gold,
    PieceType::Silver,
    PieceType::Knight,
    PieceType::Lance,
];

/// 盤面
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// [row][col]
    cells: [[Option<Piece>; 9]; 9],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// 駒のない盤面
    pub const fn empty() -> Board {
        Board { cells: [[None; 9]; 9] }
    }

    /// 平手初期配置
    ///
    /// SFEN: `lnsgkgsnl/1b5r1/ppppppppp/9/9/9/PPPPPPPPP/1R5B1/LNSGKGSNL`
    pub fn hirate() -> Board {
        let mut board = Board::empty();
        for (col, &pt) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(Color::White, pt));
            board.cells[8][col] = Some(Piece::new(Color::Black, pt));
            board.cells[2][col] = Some(Piece::new(Color::White, PieceType::Pawn));
            board.cells[6][col] = Some(Piece::new(Color::Black, PieceType::Pawn));
        }
        board.cells[1][1] = Some(Piece::new(Color::White, PieceType::Bishop));
        board.cells[1][7] = Some(Piece::new(Color::White, PieceType::Rook));
        board.cells[7][1] = Some(Piece::new(Color::Black, PieceType::Rook));
        board.cells[7][7] = Some(Piece::new(Color::Black, PieceType::Bishop));
        board
    }

    /// 升の駒（盤外は None）
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        if sq.is_on_board() { self.cells[sq.row() as usize][sq.col() as usize] } else { None }
    }

    /// 升が空か（盤外は false）
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        sq.is_on_board() && self.piece_on(sq).is_none()
    }

    /// 駒を置いた盤面を返す（盤面の組み立て用）
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Board {
        self.set(sq, Some(piece));
        self
    }

    /// 駒を取り除いた盤面を返す
    #[must_use]
    pub fn without_piece(mut self, sq: Square) -> Board {
        self.set(sq, None);
        self
    }

    fn set(&mut self, sq: Square, piece: Option<Piece>) {
        debug_assert!(sq.is_on_board(), "square {sq} is off the board");
        if sq.is_on_board() {
            self.cells[sq.row() as usize][sq.col() as usize] = piece;
        }
    }

    /// 盤上の全ての駒
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|pc| (sq, pc)))
    }

    /// 指定手番の駒
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, pc)| pc.color == color)
    }

    /// 玉の位置（テスト用の部分盤面では None になりうる）
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color).find(|(_, pc)| pc.piece_type == PieceType::King).map(|(sq, _)| sq)
    }

    /// 指定の筋（col）に指定手番の成っていない歩があるか
    pub fn has_unpromoted_pawn_on_col(&self, color: Color, col: u8) -> bool {
        (0..9).any(|row| {
            self.piece_on(Square::new(row, col))
                == Some(Piece::new(color, PieceType::Pawn))
        })
    }

    /// 指し手を適用した新しい盤面を返す
    ///
    /// 盤面だけを更新し、持ち駒は扱わない（王手判定などのシミュレーション用）。
    /// 手の合法性は検証しない。
    ///
    /// # Panics
    /// 移動元に駒がない盤上の手を渡した場合。検証済みの手でのみ起こらない。
    #[must_use]
    pub fn apply_move(&self, mv: &Move, mover: Color) -> Board {
        let mut next = self.clone();
        match *mv {
            Move::Normal { from, to, promote, .. } => {
                let Some(piece) = self.piece_on(from) else {
                    panic!("apply_move: no piece on {from} for move to {to}; move was not validated");
                };
                let moved = if promote { piece.promote().unwrap_or(piece) } else { piece };
                next.set(from, None);
                next.set(to, Some(moved));
            }
            Move::Drop { to, piece_type } => {
                next.set(to, Some(Piece::new(mover, piece_type)));
            }
        }
        next
    }

    /// 指し手を適用した新しい盤面と持ち駒を返す
    ///
    /// 取った駒は生駒に戻して手番側の持ち駒に加える。
    ///
    /// # Panics
    /// 移動元に駒がない、または持っていない駒を打つ手を渡した場合。
    #[must_use]
    pub fn apply_move_with_hands(
        &self,
        hands: &CapturedPieces,
        mv: &Move,
        mover: Color,
    ) -> (Board, CapturedPieces) {
        let next_hands = match *mv {
            Move::Normal { to, .. } => match self.piece_on(to) {
                Some(captured) => hands.add(mover, captured.piece_type.unpromote()),
                None => *hands,
            },
            Move::Drop { piece_type, to } => match hands.remove(mover, piece_type) {
                Some(h) => h,
                None => panic!(
                    "apply_move: {mover:?} has no {piece_type:?} in hand to drop on {to}; move was not validated"
                ),
            },
        };
        (self.apply_move(mv, mover), next_hands)
    }
}
