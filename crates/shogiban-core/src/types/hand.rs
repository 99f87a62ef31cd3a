//! 手駒（Hand / CapturedPieces）

use super::{Color, PieceType};

/// 手駒（32bit packed の不変マルチセット）
///
/// ビット配置:
/// - bit 0-4:   歩 (5bit, 最大18枚)
/// - bit 5-7:   香 (3bit, 最大4枚)
/// - bit 8-10:  桂 (3bit, 最大4枚)
/// - bit 11-13: 銀 (3bit, 最大4枚)
/// - bit 14-16: 金 (3bit, 最大4枚)
/// - bit 17-18: 角 (2bit, 最大2枚)
/// - bit 19-20: 飛 (2bit, 最大2枚)
///
/// 成駒を追加すると生駒として数える。玉は手駒にならない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Hand(u32);

impl Hand {
    /// 空の手駒
    pub const EMPTY: Hand = Hand(0);

    // ビットシフト・マスク定数
    const PAWN_SHIFT: u32 = 0;
    const PAWN_MASK: u32 = 0x1F; // 5bit (最大18枚)
    const LANCE_SHIFT: u32 = 5;
    const LANCE_MASK: u32 = 0x07; // 3bit (最大4枚)
    const KNIGHT_SHIFT: u32 = 8;
    const KNIGHT_MASK: u32 = 0x07;
    const SILVER_SHIFT: u32 = 11;
    const SILVER_MASK: u32 = 0x07;
    const GOLD_SHIFT: u32 = 14;
    const GOLD_MASK: u32 = 0x07;
    const BISHOP_SHIFT: u32 = 17;
    const BISHOP_MASK: u32 = 0x03; // 2bit (最大2枚)
    const ROOK_SHIFT: u32 = 19;
    const ROOK_MASK: u32 = 0x03;

    /// 指定駒種の枚数を取得
    #[inline]
    pub const fn count(self, pt: PieceType) -> u32 {
        match Self::shift_mask(pt.unpromote()) {
            Some((shift, mask)) => (self.0 >> shift) & mask,
            None => 0,
        }
    }

    /// 指定駒種を持っているか
    #[inline]
    pub const fn has(self, pt: PieceType) -> bool {
        self.count(pt) > 0
    }

    /// 1枚追加した手駒を返す（成駒は生駒として追加、玉は無視）
    ///
    /// 上限枚数を超える追加は隣の駒種のビットを壊すので許さない。
    #[inline]
    pub const fn add(self, pt: PieceType) -> Hand {
        let base = pt.unpromote();
        match Self::shift_mask(base) {
            Some((shift, mask)) => {
                debug_assert!((self.0 >> shift) & mask < Self::max_count(base), "hand count overflow");
                Hand(self.0 + (1 << shift))
            }
            None => self,
        }
    }

    /// 1枚減らした手駒を返す（持っていなければ None）
    #[inline]
    pub const fn remove(self, pt: PieceType) -> Option<Hand> {
        if !self.has(pt) {
            return None;
        }
        match Self::shift_mask(pt.unpromote()) {
            Some((shift, _)) => Some(Hand(self.0 - (1 << shift))),
            None => None,
        }
    }

    /// 指定枚数をセットした手駒を返す
    #[inline]
    pub const fn with_count(self, pt: PieceType, count: u32) -> Hand {
        match Self::shift_mask(pt.unpromote()) {
            Some((shift, mask)) => Hand((self.0 & !(mask << shift)) | ((count & mask) << shift)),
            None => self,
        }
    }

    /// 1種類あたりの上限枚数（歩18、飛角2、その他4。手駒にならない駒は0）
    #[inline]
    pub const fn max_count(pt: PieceType) -> u32 {
        match pt {
            PieceType::Pawn => 18,
            PieceType::Lance | PieceType::Knight | PieceType::Silver | PieceType::Gold => 4,
            PieceType::Bishop | PieceType::Rook => 2,
            _ => 0,
        }
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 保持している駒種（重複なし、飛角金銀桂香歩の順）
    pub fn kinds(self) -> impl Iterator<Item = PieceType> {
        PieceType::HAND_PIECES.into_iter().filter(move |&pt| self.has(pt))
    }

    const fn shift_mask(pt: PieceType) -> Option<(u32, u32)> {
        match pt {
            PieceType::Pawn => Some((Self::PAWN_SHIFT, Self::PAWN_MASK)),
            PieceType::Lance => Some((Self::LANCE_SHIFT, Self::LANCE_MASK)),
            PieceType::Knight => Some((Self::KNIGHT_SHIFT, Self::KNIGHT_MASK)),
            PieceType::Silver => Some((Self::SILVER_SHIFT, Self::SILVER_MASK)),
            PieceType::Gold => Some((Self::GOLD_SHIFT, Self::GOLD_MASK)),
            PieceType::Bishop => Some((Self::BISHOP_SHIFT, Self::BISHOP_MASK)),
            PieceType::Rook => Some((Self::ROOK_SHIFT, Self::ROOK_MASK)),
            _ => None, // King, 成駒は手駒にならない
        }
    }
}

/// 両者の持ち駒
///
/// `add` / `remove` は新しい値を返し、呼び出し側の値は変更しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapturedPieces {
    hands: [Hand; Color::NUM],
}

impl CapturedPieces {
    /// 両者とも持ち駒なし
    pub const EMPTY: CapturedPieces = CapturedPieces { hands: [Hand::EMPTY; Color::NUM] };

    /// 先手・後手の手駒から生成
    #[inline]
    pub const fn new(black: Hand, white: Hand) -> CapturedPieces {
        CapturedPieces { hands: [black, white] }
    }

    /// 指定手番の手駒
    #[inline]
    pub const fn of(&self, color: Color) -> Hand {
        self.hands[color.index()]
    }

    /// 指定手番の手駒を差し替えた値を返す
    #[inline]
    pub const fn with(mut self, color: Color, hand: Hand) -> CapturedPieces {
        self.hands[color.index()] = hand;
        self
    }

    /// 指定手番に1枚追加した値を返す
    #[inline]
    pub const fn add(self, color: Color, pt: PieceType) -> CapturedPieces {
        self.with(color, self.of(color).add(pt))
    }

    /// 指定手番から1枚減らした値を返す（持っていなければ None）
    #[inline]
    pub const fn remove(self, color: Color, pt: PieceType) -> Option<CapturedPieces> {
        match self.of(color).remove(pt) {
            Some(hand) => Some(self.with(color, hand)),
            None => None,
        }
    }

    /// 両者とも持ち駒がないか
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.hands[0].is_empty() && self.hands[1].is_empty()
    }
}
