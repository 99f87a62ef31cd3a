//! ランダムな対局進行に対する性質テスト

use proptest::prelude::*;
use proptest::sample::Index;
use shogiban_core::{
    Position, decode_move, decode_position, encode_move, generate_legal_moves, is_in_check, is_valid_move,
};

/// 平手から `choices` に従って合法手を選び、各局面を返す
fn playout(choices: &[Index]) -> Vec<Position> {
    let mut positions = vec![Position::hirate()];
    for choice in choices {
        let Some(current) = positions.last() else { break };
        let moves = generate_legal_moves(&current.board, &current.hands, current.side_to_move);
        if moves.is_empty() {
            break;
        }
        let next = current.apply(&moves[choice.index(moves.len())]);
        positions.push(next);
    }
    positions
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 24, .. ProptestConfig::default() })]

    #[test]
    fn prop_apply_never_mutates_input(choices in prop::collection::vec(any::<Index>(), 0..48)) {
        for position in playout(&choices) {
            let moves = generate_legal_moves(&position.board, &position.hands, position.side_to_move);
            let before = position.clone();
            for mv in &moves {
                let _ = position.apply(mv);
                let _ = position.board.apply_move(mv, position.side_to_move);
            }
            prop_assert_eq!(&position, &before);
        }
    }

    #[test]
    fn prop_sfen_roundtrip(choices in prop::collection::vec(any::<Index>(), 0..64)) {
        for position in playout(&choices) {
            let sfen = position.to_sfen();
            prop_assert_eq!(decode_position(&sfen).unwrap(), position);
        }
    }

    #[test]
    fn prop_generated_moves_validate(choices in prop::collection::vec(any::<Index>(), 0..48)) {
        for position in playout(&choices) {
            let mover = position.side_to_move;
            for mv in generate_legal_moves(&position.board, &position.hands, mover) {
                prop_assert!(is_valid_move(&position.board, &mv, mover, &position.hands), "{:?}", mv);
                let next = position.apply(&mv);
                prop_assert!(!is_in_check(&next.board, mover));

                let decoded = decode_move(&encode_move(&mv)).unwrap().resolve(&position.board).unwrap();
                prop_assert_eq!(decoded, mv);
            }
        }
    }
}
