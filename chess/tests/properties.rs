//! Property tests over random legal games.

use chess::{Game, MoveRequest, Position, STARTING_FEN};
use proptest::prelude::*;

/// Play up to `choices.len()` plies, picking the n-th legal move each time.
/// Stops early if the game ends.
fn play_random(game: &mut Game, choices: &[usize]) {
    for &choice in choices {
        let moves = game.position().legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice % moves.len()];
        game.apply(MoveRequest::new(mv.from, mv.to))
            .expect("legal move must apply");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn new_game_after_any_sequence_is_the_start(choices in prop::collection::vec(0usize..64, 0..40)) {
        let mut game = Game::new();
        play_random(&mut game, &choices);
        game.reset();
        prop_assert_eq!(game.to_fen(), STARTING_FEN);
        prop_assert!(game.captured().is_empty());
        prop_assert!(game.history().is_empty());
    }

    #[test]
    fn applier_matches_direct_play(choices in prop::collection::vec(0usize..64, 0..30), pick in 0usize..64) {
        let mut game = Game::new();
        play_random(&mut game, &choices);

        let moves = game.position().legal_moves();
        prop_assume!(!moves.is_empty());
        let mv = moves[pick % moves.len()];

        let promotion = mv.is_promotion.then_some(chess::PieceKind::Queen);
        let direct: Position = game.position().play(&mv, promotion).unwrap();
        game.apply(MoveRequest::new(mv.from, mv.to)).unwrap();
        prop_assert_eq!(game.to_fen(), direct.to_fen());
    }

    #[test]
    fn captures_touch_only_the_victims_side(choices in prop::collection::vec(0usize..64, 0..40)) {
        let mut game = Game::new();
        for &choice in &choices {
            let moves = game.position().legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice % moves.len()];
            let mover = game.side_to_move();
            let lost_by_mover = game.captured().lost_by(mover).to_vec();
            let lost_by_victim = game.captured().lost_by(!mover).len();

            game.apply(MoveRequest::new(mv.from, mv.to)).unwrap();

            prop_assert_eq!(game.captured().lost_by(mover), lost_by_mover.as_slice());
            match mv.captured {
                Some(kind) => {
                    let victim = game.captured().lost_by(!mover);
                    prop_assert_eq!(victim.len(), lost_by_victim + 1);
                    let last = victim[victim.len() - 1];
                    prop_assert_eq!(last.kind, kind);
                    prop_assert_eq!(last.color, !mover);
                }
                None => prop_assert_eq!(game.captured().lost_by(!mover).len(), lost_by_victim),
            }
        }
    }

    #[test]
    fn only_the_side_to_move_has_moves(choices in prop::collection::vec(0usize..64, 0..30)) {
        let mut game = Game::new();
        play_random(&mut game, &choices);
        let side = game.side_to_move();
        for mv in game.position().legal_moves() {
            let piece = game.position().piece_at(mv.from).unwrap();
            prop_assert_eq!(piece.color, side);
        }
    }
}
