//! Strategy trait and the views handed to strategies and presenters
//!
//! The engine asks the active player's strategy to place the drawn card and
//! then to move. A strategy only ever sees the game through a `PlayerTurn`,
//! which exposes read accessors plus the two mutations a player may make.
//! Presenters and end-of-game callbacks get a read-only `GameStateView`.

use crate::core::{Board, Card, Field, Move, Score, Side};
use crate::game::{GameResult, Gamestate, TurnPhase};
use crate::Result;
use std::collections::BTreeSet;

/// Read-only view of the game from one side's perspective
pub struct GameStateView<'a> {
    game: &'a Gamestate,
    perspective: Side,
}

impl<'a> GameStateView<'a> {
    pub fn new(game: &'a Gamestate, perspective: Side) -> Self {
        GameStateView { game, perspective }
    }

    /// The side this view is oriented for
    pub fn perspective(&self) -> Side {
        self.perspective
    }

    pub fn active_player(&self) -> Side {
        self.game.active_player()
    }

    pub fn turn_number(&self) -> u32 {
        self.game.turn_number()
    }

    pub fn phase(&self) -> TurnPhase {
        self.game.phase()
    }

    /// Top cards in this view's frame
    pub fn field(&self) -> Field {
        self.game.field_for(self.perspective)
    }

    /// Full board in absolute coordinates
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Forced moves of the active player, in the active player's frame
    pub fn possible_moves(&self) -> BTreeSet<Move> {
        self.game.possible_moves()
    }

    pub fn drawn_card(&self) -> Option<Card> {
        self.game.drawn_card()
    }

    pub fn cards_left(&self, side: Side) -> usize {
        self.game.cards_left_for(side)
    }

    pub fn points(&self) -> Score {
        self.game.points()
    }

    pub fn strategy_name(&self, side: Side) -> Option<&str> {
        self.game.strategy_name(side)
    }
}

/// The active player's handle on the game during its own turn
///
/// Coordinates passed in and returned are in the active player's own frame.
pub struct PlayerTurn<'a> {
    game: &'a mut Gamestate,
}

impl<'a> PlayerTurn<'a> {
    pub(crate) fn new(game: &'a mut Gamestate) -> Self {
        PlayerTurn { game }
    }

    pub fn side(&self) -> Side {
        self.game.active_player()
    }

    pub fn turn_number(&self) -> u32 {
        self.game.turn_number()
    }

    /// Top cards in the active player's frame
    pub fn field(&self) -> Field {
        self.game.get_field()
    }

    pub fn possible_moves(&self) -> BTreeSet<Move> {
        self.game.possible_moves()
    }

    pub fn move_is_legal(&self, mv: &Move) -> bool {
        self.game.move_is_legal(mv)
    }

    pub fn drawn_card(&self) -> Option<Card> {
        self.game.drawn_card()
    }

    /// Cards left in the active player's deck
    pub fn cards_left(&self) -> usize {
        self.game.cards_left()
    }

    pub fn points(&self) -> Score {
        self.game.points()
    }

    pub fn create_move(&self, si: u8, sj: u8, ei: u8, ej: u8) -> Result<Move> {
        self.game.create_move(si, sj, ei, ej)
    }

    /// Place the drawn card on entry cell `(i, j)`
    pub fn set_card(&mut self, i: u8, j: u8) -> Result<()> {
        self.game.set_card(i, j)
    }

    pub fn make_move(&mut self, mv: Move) -> Result<()> {
        self.game.make_move(mv)
    }

    /// Record a decision in the game log
    pub fn log_choice(&self, strategy_name: &str, message: &str) {
        self.game.logger.strategy_choice(strategy_name, message);
    }

    pub fn view(&self) -> GameStateView<'_> {
        GameStateView::new(self.game, self.side())
    }
}

/// Decision-making for one side
///
/// `set_card` must place the drawn card through `PlayerTurn::set_card`.
/// `make_move` is only called when at least one forced move exists and must
/// commit one of them through `PlayerTurn::make_move`. Returning without
/// doing so is reported by the engine as a violation.
pub trait Strategy {
    /// Registry name of this strategy
    fn name(&self) -> &str;

    fn set_card(&mut self, turn: &mut PlayerTurn<'_>) -> Result<()>;

    fn make_move(&mut self, turn: &mut PlayerTurn<'_>) -> Result<()>;

    /// Called once when the game ends
    fn on_game_end(&mut self, _view: &GameStateView<'_>, _result: &GameResult) {}
}
