//! 対局（局面・履歴・規則を持つセッション値）
//!
//! 1手ごとに 検証 → 適用 → 履歴追加 → 状態判定 の順で進める。

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult, IllegalMove, NotationError};
use crate::movegen::generate_legal_moves;
use crate::notation::sfen::SFEN_HIRATE;
use crate::notation::usi_move::{decode_move, encode_move};
use crate::position::{Position, PositionRecord};
use crate::rules::entering_king::{EnteringKingRule, can_declare_win};
use crate::rules::judge::check_game_status;
use crate::rules::validator::validate_move;
use crate::rules::GameRules;
use crate::types::{Color, GameStatus, Move, MoveList};

/// 対局
#[derive(Debug, Clone)]
pub struct Game {
    start: Position,
    position: Position,
    /// 現局面より前の全局面（新しい対局でのみ空になる）
    history: Vec<PositionRecord>,
    moves: Vec<Move>,
    rules: GameRules,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameRules::default())
    }
}

impl Game {
    /// 平手初期局面から開始
    pub fn new(rules: GameRules) -> Game {
        Game::from_position(Position::hirate(), rules)
    }

    /// 任意の局面から開始
    pub fn from_position(position: Position, rules: GameRules) -> Game {
        let status = check_game_status(&position, &[], &rules);
        Game { start: position.clone(), position, history: Vec::new(), moves: Vec::new(), rules, status }
    }

    /// SFEN文字列（または `startpos`）から開始
    pub fn from_sfen(sfen: &str, rules: GameRules) -> Result<Game, NotationError> {
        let sfen = sfen.trim();
        let sfen = if sfen == "startpos" { SFEN_HIRATE } else { sfen };
        Ok(Game::from_position(Position::from_sfen(sfen)?, rules))
    }

    /// 開始局面
    pub fn start_position(&self) -> &Position {
        &self.start
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &[PositionRecord] {
        &self.history
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// 詰みで決着していれば勝者
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.position.side_to_move.opponent()),
            _ => None,
        }
    }

    /// 手番側の指し手を検証する（局面は変えない）
    pub fn validate(&self, mv: &Move) -> Result<(), IllegalMove> {
        validate_move(&self.position.board, mv, self.position.side_to_move, &self.position.hands)
    }

    /// 手番側の全合法手
    pub fn legal_moves(&self) -> MoveList {
        generate_legal_moves(&self.position.board, &self.position.hands, self.position.side_to_move)
    }

    /// 1手指す
    ///
    /// 決着後の手は `GameOver`、反則手は `Illegal` で拒否し、局面は変わらない。
    pub fn play(&mut self, mv: Move) -> GameResult<GameStatus> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver(self.status));
        }
        self.validate(&mv)?;

        let captured = self.position.board.piece_on(mv.to()).map(|pc| pc.piece_type);
        let mv = mv.with_captured(captured);
        let next = self.position.apply(&mv);
        self.history.push(self.position.record());
        self.position = next;
        self.moves.push(mv);

        let status = check_game_status(&self.position, &self.history, &self.rules);
        if status != self.status {
            log::debug!("status {} -> {} after {}", self.status, status, encode_move(&mv));
        }
        self.status = status;
        Ok(status)
    }

    /// USI 文字列の手を指す（駒種は現局面から引く）
    pub fn play_usi(&mut self, usi: &str) -> GameResult<GameStatus> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver(self.status));
        }
        let mv = decode_move(usi)?.resolve(&self.position.board)?;
        self.play(mv)
    }

    /// 入玉宣言が認められるか
    ///
    /// 入玉ルールが有効で、決着前で、手番側が条件を満たすときだけ true。
    pub fn declare_win(&self) -> bool {
        self.rules.entering_king != EnteringKingRule::None
            && !self.status.is_terminal()
            && can_declare_win(&self.position.board, self.position.side_to_move)
    }

    /// 指した手の USI 文字列
    pub fn usi_moves(&self) -> Vec<String> {
        self.moves.iter().map(encode_move).collect()
    }
}

/// 棋譜再生の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayResult {
    /// 適用できた手
    pub applied: Vec<String>,
    /// 最後に適用した手の添字（1手も適用できなければ -1）
    pub last_ply: i32,
    /// 最終局面のSFEN
    pub sfen: String,
    pub status: GameStatus,
    /// 停止の理由
    pub error: Option<String>,
}

/// 開始局面から棋譜を順に適用し、最初の失敗で止める
///
/// 開始局面が読めない場合だけ `Err` を返す。
pub fn replay<S: AsRef<str>>(start_sfen: &str, moves: &[S], rules: GameRules) -> Result<ReplayResult, NotationError> {
    let mut game = Game::from_sfen(start_sfen, rules)?;
    let mut error = None;
    for mv in moves {
        if let Err(e) = game.play_usi(mv.as_ref()) {
            error = Some(format!("{}: {e}", mv.as_ref()));
            break;
        }
    }
    let applied = game.usi_moves();
    let last_ply = applied.len().min(i32::MAX as usize) as i32 - 1;
    Ok(ReplayResult {
        applied,
        last_ply,
        sfen: game.position().to_sfen(),
        status: game.status(),
        error,
    })
}
