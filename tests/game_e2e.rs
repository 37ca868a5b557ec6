//! End-to-end tests driving whole games through the public API

use similar_asserts::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;
use tide_rs::{
    core::{Card, Deck, Move, Pos, Side},
    game::{
        FirstStrategy, GameEndReason, GameLoop, GameResult, GameStateView, Gamestate,
        NullPresenter, Presenter, RandomStrategy, ScriptedStrategy, TurnPhase, VerbosityLevel,
    },
    notation::parse_card_list,
    TideError, Violation,
};

fn stacked(side: Side, top: &str) -> Deck {
    let cards = parse_card_list(top, side).unwrap();
    Deck::with_top(side, &cards).unwrap()
}

fn card(text: &str) -> Card {
    text.parse().unwrap()
}

fn quiet(mut game: Gamestate) -> Gamestate {
    game.logger.enable_capture();
    game
}

fn random_game(seed: u64) -> Gamestate {
    quiet(Gamestate::with_seed(
        Box::new(RandomStrategy::with_seed(seed)),
        Box::new(RandomStrategy::with_seed(seed + 1)),
        Box::new(NullPresenter),
        seed,
    ))
}

fn manual_game(ebb_top: &str, flow_top: &str) -> Gamestate {
    quiet(Gamestate::with_decks(
        Box::new(FirstStrategy::new()),
        Box::new(FirstStrategy::new()),
        Box::new(NullPresenter),
        [stacked(Side::Ebb, ebb_top), stacked(Side::Flow, flow_top)],
    ))
}

#[test]
fn test_random_games_conserve_cards() {
    for seed in [1u64, 2, 3, 99, 12345] {
        let mut game = random_game(seed);
        let result = GameLoop::new(&mut game)
            .with_verbosity(VerbosityLevel::Silent)
            .run_game()
            .unwrap();

        assert_eq!(result.end_reason, GameEndReason::DeckExhausted(Side::Flow));
        assert_eq!(result.turns_played, 50);
        assert_eq!(game.card_count(), 50);
        assert_eq!(result.score.total() + game.board().card_count(), 50);
        assert_eq!(result.winner, result.score.leader());
    }
}

#[test]
fn test_first_turn_belongs_to_flow() {
    let mut game = manual_game("B3", "A1, A2");
    game.new_turn().unwrap();

    assert_eq!(game.active_player(), Side::Flow);
    assert_eq!(game.cards_left(), 24);
    assert_eq!(game.cards_left_for(Side::Ebb), 25);
    assert_eq!(game.drawn_card(), Some(card("A1/1")));
    assert_eq!(game.phase(), TurnPhase::AwaitingPlacement);
}

#[test]
fn test_placement_is_mirrored_for_flow() {
    let mut game = manual_game("B3", "A1");
    game.new_turn().unwrap();
    game.set_card(0, 0).unwrap();
    assert_eq!(game.board().top_card(Pos::new(4, 4)), card("A1/1"));
    assert!(game.board().top_card(Pos::new(0, 0)).is_placeholder());

    game.new_turn().unwrap();
    game.set_card(0, 0).unwrap();
    assert_eq!(game.board().top_card(Pos::new(0, 0)), card("B3/0"));
}

#[test]
fn test_clash_and_move_through_the_api() {
    let mut game = manual_game("B3, C4", "A1, A2");

    game.new_turn().unwrap();
    game.set_card(0, 0).unwrap();
    assert!(game.possible_moves().is_empty());

    game.new_turn().unwrap();
    game.set_card(0, 0).unwrap();

    game.new_turn().unwrap();
    game.set_card(1, 0).unwrap();
    let moves: Vec<Move> = game.possible_moves().into_iter().collect();
    assert_eq!(
        moves,
        vec![Move::create(0, 0, 1, 0).unwrap(), Move::create(1, 0, 2, 0).unwrap()]
    );

    let mv = game.create_move(1, 0, 2, 0).unwrap();
    game.make_move(mv).unwrap();
    assert_eq!(game.phase(), TurnPhase::Moved);
    assert_eq!(game.board().top_card(Pos::new(2, 4)), card("A2/1"));
    assert!(game.board().top_card(Pos::new(3, 4)).is_placeholder());

    // Only one move per turn
    let again = game.create_move(0, 0, 1, 0).unwrap();
    assert!(matches!(
        game.make_move(again),
        Err(TideError::Violation(Violation::AlreadyMoved))
    ));
    assert_eq!(game.card_count(), 50);
}

#[test]
fn test_scripted_strategies_in_the_loop() {
    let ebb = ScriptedStrategy::from_script("0,0; 1,0").unwrap();
    let flow = ScriptedStrategy::from_script("0,0; 1,0; 1,0>2,0").unwrap();
    let mut game = quiet(Gamestate::with_decks(
        Box::new(ebb),
        Box::new(flow),
        Box::new(NullPresenter),
        [stacked(Side::Ebb, "B3 C4"), stacked(Side::Flow, "A1 A2")],
    ));

    let result = GameLoop::new(&mut game).run_turns(4).unwrap();
    assert_eq!(result.end_reason, GameEndReason::Manual);
    assert_eq!(result.turns_played, 4);

    let board = game.board();
    assert_eq!(board.top_card(Pos::new(4, 4)), card("A1/1"));
    assert_eq!(board.top_card(Pos::new(2, 4)), card("A2/1"));
    assert_eq!(board.top_card(Pos::new(0, 0)), card("B3/0"));
    assert_eq!(board.top_card(Pos::new(1, 0)), card("C4/0"));
    assert_eq!(game.cards_left_for(Side::Ebb), 23);
    assert_eq!(game.cards_left_for(Side::Flow), 23);
}

#[test]
fn test_exhausted_script_aborts_the_game() {
    let mut game = quiet(Gamestate::with_seed(
        Box::new(FirstStrategy::new()),
        Box::new(ScriptedStrategy::default()),
        Box::new(NullPresenter),
        5,
    ));
    let err = GameLoop::new(&mut game).run_game().unwrap_err();
    assert_eq!(err.violation(), Some(&Violation::PlacementSkipped(Side::Flow)));
    assert_eq!(game.turn_number(), 1);
}

#[test]
fn test_score_log_matches_points() {
    let mut game = random_game(2024);
    let result = GameLoop::new(&mut game).run_game().unwrap();

    let scored = game
        .logger
        .logs()
        .iter()
        .filter(|entry| entry.category.as_deref() == Some("score"))
        .count();
    assert_eq!(scored, result.score.total());
}

#[derive(Default)]
struct Calls {
    starts: usize,
    placements: usize,
    moves: usize,
    results: Vec<GameResult>,
}

struct CountingPresenter(Rc<RefCell<Calls>>);

impl Presenter for CountingPresenter {
    fn start_of_turn(&mut self, view: &GameStateView<'_>) {
        assert_eq!(view.phase(), TurnPhase::AwaitingPlacement);
        self.0.borrow_mut().starts += 1;
    }

    fn after_card_set(&mut self, view: &GameStateView<'_>) {
        assert_eq!(view.phase(), TurnPhase::AwaitingMove);
        self.0.borrow_mut().placements += 1;
    }

    fn after_move(&mut self, view: &GameStateView<'_>) {
        assert_eq!(view.phase(), TurnPhase::Moved);
        self.0.borrow_mut().moves += 1;
    }

    fn game_over(&mut self, _view: &GameStateView<'_>, result: &GameResult) {
        self.0.borrow_mut().results.push(result.clone());
    }
}

#[test]
fn test_presenter_sees_every_step() {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let mut game = quiet(Gamestate::with_seed(
        Box::new(RandomStrategy::with_seed(8)),
        Box::new(RandomStrategy::with_seed(9)),
        Box::new(CountingPresenter(Rc::clone(&calls))),
        8,
    ));
    let result = GameLoop::new(&mut game).run_game().unwrap();

    let calls = calls.borrow();
    assert_eq!(calls.starts, 50);
    assert_eq!(calls.placements, 50);
    assert!(calls.moves <= 50);
    assert_eq!(calls.results, vec![result]);
}

#[test]
fn test_game_result_serializes() {
    let mut game = random_game(31);
    let result = GameLoop::new(&mut game).run_game().unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["turns_played"].as_u64(), Some(50));
    assert_eq!(json["end_reason"]["DeckExhausted"].as_str(), Some("Flow"));
}
