//! Main game state structure
//!
//! `Gamestate` owns both players, the board and the turn state machine. It is
//! mutated only through `new_turn`, `set_card` and `make_move`; each of them
//! validates fully before touching any state.

use crate::core::{
    Board, Card, Deck, Field, Landing, Move, Player, Pos, Score, Side, ENTRY_CELLS,
};
use crate::error::Violation;
use crate::game::movegen;
use crate::game::{
    GameLogger, GameResult, GameStateView, PlayerTurn, Presenter, Strategy, TurnPhase,
};
use crate::{Result, TideError};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Complete game state
pub struct Gamestate {
    players: [Player; 2],

    /// Seated strategies, indexed like `players`. A slot is empty only while
    /// its strategy is being consulted.
    strategies: [Option<Box<dyn Strategy>>; 2],

    /// Wrapped in RefCell so hooks can run while the state is borrowed
    /// immutably for the view handed to them
    presenter: RefCell<Box<dyn Presenter>>,

    active_player: Side,
    turn_number: u32,
    phase: TurnPhase,

    /// Drawn this turn and not yet placed
    pending_card: Option<Card>,

    /// Drawn this turn, kept after placement
    drawn_card: Option<Card>,

    board: Board,

    /// Seed both decks were shuffled with
    seed: u64,

    /// Centralized logger for game events
    pub logger: GameLogger,
}

impl Gamestate {
    /// New game with decks shuffled from a random seed
    pub fn new(
        strategy0: Box<dyn Strategy>,
        strategy1: Box<dyn Strategy>,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        Self::with_seed(strategy0, strategy1, presenter, rand::random())
    }

    /// New game with both decks shuffled by one ChaCha stream seeded by `seed`
    pub fn with_seed(
        strategy0: Box<dyn Strategy>,
        strategy1: Box<dyn Strategy>,
        presenter: Box<dyn Presenter>,
        seed: u64,
    ) -> Self {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        let ebb = Deck::shuffled(Side::Ebb, &mut rng);
        let flow = Deck::shuffled(Side::Flow, &mut rng);
        let mut game = Self::with_decks(strategy0, strategy1, presenter, [ebb, flow]);
        game.seed = seed;
        game
    }

    /// New game with prearranged decks
    pub fn with_decks(
        strategy0: Box<dyn Strategy>,
        strategy1: Box<dyn Strategy>,
        presenter: Box<dyn Presenter>,
        decks: [Deck; 2],
    ) -> Self {
        let [ebb, flow] = decks;
        Gamestate {
            players: [Player::new(Side::Ebb, ebb), Player::new(Side::Flow, flow)],
            strategies: [Some(strategy0), Some(strategy1)],
            presenter: RefCell::new(presenter),
            // Flipped to Flow by the first new_turn
            active_player: Side::Ebb,
            turn_number: 0,
            phase: TurnPhase::AwaitingDraw,
            pending_card: None,
            drawn_card: None,
            board: Board::new(),
            seed: 0,
            logger: GameLogger::new(),
        }
    }

    /// Begin the next turn: flip the active player and draw for them
    pub fn new_turn(&mut self) -> Result<()> {
        self.phase.check_new_turn()?;

        let next = self.active_player.opponent();
        // Draw first so an exhausted deck leaves the state untouched
        let card = self.players[next.index()].deck.draw()?;

        self.turn_number += 1;
        self.active_player = next;
        self.pending_card = Some(card);
        self.drawn_card = Some(card);
        self.phase = TurnPhase::AwaitingPlacement;

        log_if_verbose!(
            self.logger,
            "Turn {}: {} draws {} ({} left)",
            self.turn_number,
            next,
            card,
            self.cards_left()
        );
        self.notify(|p, view| p.start_of_turn(view));
        Ok(())
    }

    /// Place the drawn card on entry cell `(i, j)` of the active player's frame
    pub fn set_card(&mut self, i: u8, j: u8) -> Result<()> {
        self.phase.check_placement()?;
        let pos = Pos::new(i, j);
        if !ENTRY_CELLS.contains(&pos) {
            return Err(Violation::NotEntryCell(pos).into());
        }
        let card = self.pending_card.take().ok_or(Violation::NothingDrawn)?;

        let side = self.active_player;
        let target = pos.to_absolute(side);
        self.board.push(target, card);
        self.phase = TurnPhase::AwaitingMove;

        log_if_verbose!(self.logger, "{} places {} at {}", side, card, target);
        self.notify(|p, view| p.after_card_set(view));
        Ok(())
    }

    /// Execute one forced move, given in the active player's frame
    pub fn make_move(&mut self, mv: Move) -> Result<()> {
        self.phase.check_move()?;
        if !self.move_is_legal(&mv) {
            return Err(Violation::IllegalMove(mv).into());
        }

        let side = self.active_player;
        let from = mv.start().to_absolute(side);
        let top = self.board.top_card(from);
        if top.is_placeholder() {
            return Err(Violation::EmptySource(mv.start()).into());
        }
        if !top.is_owned_by(side) {
            return Err(Violation::ForeignSource {
                pos: mv.start(),
                owner: top.side(),
            }
            .into());
        }
        let card = self.board.pop(from).ok_or(Violation::EmptySource(mv.start()))?;

        match mv.landing() {
            Landing::Goal => {
                self.players[side.index()].win_card(card);
                self.logger.score(&format!("{side} scores {card} ({})", self.points()));
            }
            Landing::Exit => {
                let opponent = side.opponent();
                self.players[opponent.index()].win_card(card);
                self.logger.score(&format!(
                    "{card} leaves the board, {opponent} scores ({})",
                    self.points()
                ));
            }
            Landing::Cell(end) => {
                let target = end.to_absolute(side);
                self.board.push(target, card);
                log_if_verbose!(self.logger, "{} moves {} from {} to {}", side, card, from, target);
            }
        }
        self.phase = TurnPhase::Moved;

        self.notify(|p, view| p.after_move(view));
        Ok(())
    }

    /// Build a move from raw indices in the caller's frame
    pub fn create_move(&self, si: u8, sj: u8, ei: u8, ej: u8) -> Result<Move> {
        Move::create(si, sj, ei, ej)
    }

    /// Top cards as seen by the active player
    pub fn get_field(&self) -> Field {
        self.field_for(self.active_player)
    }

    pub fn field_for(&self, side: Side) -> Field {
        self.board.visible(side)
    }

    /// Forced moves of the active player, in the active player's frame
    pub fn possible_moves(&self) -> BTreeSet<Move> {
        movegen::possible_moves(&self.get_field(), self.active_player)
    }

    pub fn move_is_legal(&self, mv: &Move) -> bool {
        self.possible_moves().contains(mv)
    }

    /// The card drawn this turn, placed or not
    pub fn drawn_card(&self) -> Option<Card> {
        self.drawn_card
    }

    /// The drawn card while it still waits for placement
    pub fn pending_card(&self) -> Option<Card> {
        self.pending_card
    }

    /// Cards left in the active player's deck
    pub fn cards_left(&self) -> usize {
        self.cards_left_for(self.active_player)
    }

    pub fn cards_left_for(&self, side: Side) -> usize {
        self.players[side.index()].cards_left()
    }

    pub fn points(&self) -> Score {
        Score::new(self.players[0].score(), self.players[1].score())
    }

    /// Real cards in decks, on the board, in won piles and in hand.
    /// Always 50.
    pub fn card_count(&self) -> usize {
        let decks: usize = self.players.iter().map(|p| p.cards_left()).sum();
        let won: usize = self.players.iter().map(|p| p.score()).sum();
        decks + won + self.board.card_count() + usize::from(self.pending_card.is_some())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn active_player(&self) -> Side {
        self.active_player
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn strategy_name(&self, side: Side) -> Option<&str> {
        self.strategies[side.index()].as_deref().map(|s| s.name())
    }

    pub fn view(&self, perspective: Side) -> GameStateView<'_> {
        GameStateView::new(self, perspective)
    }

    /// Ask the active player's strategy to place the drawn card
    pub fn request_placement(&mut self) -> Result<()> {
        let side = self.active_player;
        self.consult(side, |strategy, turn| strategy.set_card(turn))?;
        if self.phase == TurnPhase::AwaitingPlacement {
            return Err(Violation::PlacementSkipped(side).into());
        }
        Ok(())
    }

    /// Ask the active player's strategy to move.
    ///
    /// Returns `false` without consulting the strategy when no forced move
    /// exists.
    pub fn request_move(&mut self) -> Result<bool> {
        let side = self.active_player;
        let moves = self.possible_moves();
        if moves.is_empty() {
            log_if_verbose!(self.logger, "{} has no forced move", side);
            return Ok(false);
        }
        self.logger.verbose(&format!(
            "{} forced moves for {}: {}",
            moves.len(),
            side,
            moves.iter().map(Move::to_string).collect::<Vec<_>>().join(" ")
        ));
        self.consult(side, |strategy, turn| strategy.make_move(turn))?;
        if self.phase != TurnPhase::Moved {
            return Err(Violation::MoveSkipped(side).into());
        }
        Ok(true)
    }

    /// Tell both strategies and the presenter that the game is over
    pub fn finish_game(&mut self, result: &GameResult) {
        for side in Side::BOTH {
            if let Some(mut strategy) = self.strategies[side.index()].take() {
                strategy.on_game_end(&self.view(side), result);
                self.strategies[side.index()] = Some(strategy);
            }
        }
        let view = self.view(self.active_player);
        self.presenter.borrow_mut().game_over(&view, result);
    }

    /// Run `decide` with the strategy of `side` temporarily taken out of its
    /// slot, so it can hold a mutable handle on the game
    fn consult<F>(&mut self, side: Side, decide: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Strategy, &mut PlayerTurn<'_>) -> Result<()>,
    {
        let mut strategy = self.strategies[side.index()]
            .take()
            .ok_or(TideError::MissingStrategy(side))?;
        let outcome = decide(strategy.as_mut(), &mut PlayerTurn::new(self));
        self.strategies[side.index()] = Some(strategy);
        outcome
    }

    fn notify<F>(&self, hook: F)
    where
        F: FnOnce(&mut dyn Presenter, &GameStateView<'_>),
    {
        let view = self.view(self.active_player);
        let mut presenter = self.presenter.borrow_mut();
        hook(&mut **presenter, &view);
    }
}

impl std::fmt::Debug for Gamestate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gamestate")
            .field("turn_number", &self.turn_number)
            .field("active_player", &self.active_player)
            .field("phase", &self.phase)
            .field("points", &self.points())
            .field("seed", &self.seed)
            .finish()
    }
}
