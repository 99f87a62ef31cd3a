//! 決定的な代替エンジン
//!
//! 探索も評価もしない。受け取った局面の合法手から一様に1手を選んで `bestmove` を返す。
//! 同じシードなら同じ手順になる。

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use shogiban_core::{Game, GameRules, encode_move};

use crate::command::UsiCommand;

/// 代替エンジン
#[derive(Debug, Clone)]
pub struct MockEngine {
    rng: Xoshiro256PlusPlus,
    rules: GameRules,
    game: Option<Game>,
}

impl MockEngine {
    pub fn new(seed: u64) -> MockEngine {
        MockEngine::with_rules(seed, GameRules::default())
    }

    pub fn with_rules(seed: u64, rules: GameRules) -> MockEngine {
        MockEngine { rng: Xoshiro256PlusPlus::seed_from_u64(seed), rules, game: None }
    }

    /// コマンド1つに対する応答行
    pub fn handle(&mut self, command: &UsiCommand) -> Vec<String> {
        match command {
            UsiCommand::Usi => vec![
                format!("id name shogiban-mock {}", env!("CARGO_PKG_VERSION")),
                "id author shogiban".to_string(),
                "usiok".to_string(),
            ],
            UsiCommand::IsReady => vec!["readyok".to_string()],
            UsiCommand::UsiNewGame => {
                self.game = None;
                Vec::new()
            }
            UsiCommand::Position { sfen, moves } => {
                self.set_position(sfen, moves);
                Vec::new()
            }
            UsiCommand::Go(_) => self.think(),
            UsiCommand::SetOption { .. } | UsiCommand::Stop | UsiCommand::Quit => Vec::new(),
        }
    }

    fn set_position(&mut self, sfen: &str, moves: &[String]) {
        self.game = match Game::from_sfen(sfen, self.rules) {
            Ok(mut game) => {
                let replayed = moves.iter().try_for_each(|mv| game.play_usi(mv).map(|_| ()));
                match replayed {
                    Ok(()) => Some(game),
                    Err(e) => {
                        log::warn!("mock engine: cannot replay moves: {e}");
                        None
                    }
                }
            }
            Err(e) => {
                log::warn!("mock engine: invalid position: {e}");
                None
            }
        };
    }

    fn think(&mut self) -> Vec<String> {
        let Some(game) = &self.game else {
            log::warn!("mock engine: go without position");
            return vec!["bestmove resign".to_string()];
        };
        if game.declare_win() {
            return vec!["bestmove win".to_string()];
        }
        let moves = game.legal_moves();
        if moves.is_empty() || game.status().is_terminal() {
            return vec!["bestmove resign".to_string()];
        }
        let mv = encode_move(&moves[self.rng.random_range(0..moves.len())]);
        vec![format!("info depth 1 nodes {} pv {mv}", moves.len()), format!("bestmove {mv}")]
    }
}
