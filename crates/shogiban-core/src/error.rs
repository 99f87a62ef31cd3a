//! Error types for the rules engine
//!
//! - [`NotationError`]: 局面文字列・指し手文字列の解析失敗
//! - [`IllegalMove`]: 指し手が反則として拒否された理由
//! - [`GameError`]: 対局（[`crate::game::Game`]）操作の失敗
//!
//! 検証を経ずに apply された手（移動元に駒がない等）は値として返さず panic する。

use crate::types::{GameStatus, Square};

/// 局面文字列（SFEN）・指し手文字列（USI）の解析エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// フィールド数が不正
    #[error("Expected 4 fields (board side hand move-number), got {0}")]
    FieldCount(usize),

    /// 盤面の形式が不正
    #[error("Invalid board: {0}")]
    Board(String),

    /// 手番の形式が不正
    #[error("Invalid side to move: {0} (expected 'b' or 'w')")]
    SideToMove(String),

    /// 手駒の形式が不正
    #[error("Invalid hand: {0}")]
    Hand(String),

    /// 手数の形式が不正
    #[error("Invalid move number: {0}")]
    MoveNumber(String),

    /// 指し手の形式が不正
    #[error("Invalid move: {0}")]
    Move(String),
}

/// 反則手の種類
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// 移動元または移動先が盤外
    #[error("square {0} is off the board")]
    OutOfBounds(Square),

    /// 相手の駒を動かそうとした
    #[error("piece on {0} belongs to the opponent")]
    WrongOwner(Square),

    /// 移動元に駒がない
    #[error("no piece on {0}")]
    EmptySource(Square),

    /// その駒の利きが移動先に届かない（遮られている、または動けない方向）
    #[error("piece cannot reach {0}")]
    Blocked(Square),

    /// 二歩
    #[error("double pawn: an unpromoted pawn already stands on file {0}")]
    DoublePawn(u8),

    /// 行き所のない駒を打った
    #[error("a dropped piece on {0} could never move again")]
    ImmobileDrop(Square),

    /// 打ち歩詰め
    #[error("pawn drop on {0} would be the sole cause of checkmate")]
    PawnDropCheckmate(Square),

    /// 自玉に王手がかかったままになる
    #[error("move leaves own king in check")]
    LeavesKingInCheck,

    /// 駒のある升に打った
    #[error("cannot drop onto occupied square {0}")]
    DropOnOccupiedSquare(Square),

    /// 持っていない駒を打った
    #[error("no piece of that kind in hand")]
    DropWithoutHandPiece,

    /// 成れない手で成った、または成らなければならない手で成らなかった
    #[error("promotion is not allowed or is mandatory for this move")]
    IllegalPromotion,

    /// 指し手の駒種と移動元の駒が一致しない
    #[error("move does not describe the piece on {0}")]
    PieceMismatch(Square),
}

/// 対局操作のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Illegal(#[from] IllegalMove),

    /// 終局後に指そうとした
    #[error("game is already over ({0})")]
    GameOver(GameStatus),
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
