//! Property tests over board geometry and whole games

use proptest::prelude::*;
use tide_rs::{
    core::{mirror, Move, Pos, Side},
    game::{GameLoop, Gamestate, NullPresenter, RandomStrategy, VerbosityLevel},
    notation::{parse_move, parse_pos},
};

fn on_board() -> impl Strategy<Value = Pos> {
    (0u8..5, 0u8..5).prop_map(|(i, j)| Pos::new(i, j))
}

proptest! {
    #[test]
    fn mirror_is_an_involution(i in 0i8..5, j in 0i8..5) {
        let (mi, mj) = mirror(i, j);
        prop_assert_eq!(mirror(mi, mj), (i, j));
    }

    #[test]
    fn frames_agree_on_absolute_cells(pos in on_board()) {
        prop_assert_eq!(pos.to_absolute(Side::Ebb), pos);
        prop_assert_eq!(pos.to_absolute(Side::Flow).to_absolute(Side::Flow), pos);
    }

    #[test]
    fn notation_reads_what_display_writes(pos in on_board(), down in any::<bool>()) {
        prop_assert_eq!(parse_pos(&pos.to_string()).unwrap(), pos);

        let end = if down { Pos::new(pos.i, pos.j + 1) } else { Pos::new(pos.i + 1, pos.j) };
        let mv = Move::new(pos, end).unwrap();
        prop_assert_eq!(parse_move(&mv.to_string()).unwrap(), mv);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn random_games_keep_fifty_cards(seed in any::<u64>(), turns in 1u32..50) {
        let mut game = Gamestate::with_seed(
            Box::new(RandomStrategy::with_seed(seed)),
            Box::new(RandomStrategy::with_seed(seed.wrapping_add(1))),
            Box::new(NullPresenter),
            seed,
        );
        game.logger.enable_capture();

        let result = GameLoop::new(&mut game)
            .with_verbosity(VerbosityLevel::Silent)
            .run_turns(turns)
            .unwrap();

        prop_assert_eq!(result.turns_played, turns);
        prop_assert_eq!(game.card_count(), 50);
        prop_assert_eq!(
            game.cards_left_for(Side::Ebb) + game.cards_left_for(Side::Flow),
            50 - turns as usize
        );
        prop_assert!(game.board().cards().all(|card| !card.is_placeholder()));
    }
}
