//! Game loop implementation
//!
//! Drives a `Gamestate` turn by turn: draw, ask the active strategy to place,
//! ask it to move when a forced move exists. The game ends when the next
//! player's deck is exhausted. Cards still on the board are not scored.

use crate::core::{Score, Side};
use crate::game::Gamestate;
use crate::{Result, TideError};
use serde::{Deserialize, Serialize};

/// Verbosity level for game output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - scoring and game outcome
    Minimal = 1,
    /// Normal - draws, placements and moves (default)
    #[default]
    Normal = 2,
    /// Verbose - everything, including strategy internals
    Verbose = 3,
}

/// Result of running a game to completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// Side with more won cards, None on a draw
    pub winner: Option<Side>,
    /// Number of turns started
    pub turns_played: u32,
    pub end_reason: GameEndReason,
    pub score: Score,
}

/// Reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEndReason {
    /// The side due to draw had no cards left
    DeckExhausted(Side),
    /// Game reached maximum turn limit
    TurnLimit,
    /// Game was stopped by the caller
    Manual,
}

/// Game loop manager
pub struct GameLoop<'a> {
    pub game: &'a mut Gamestate,
    /// Maximum turns before stopping
    max_turns: u32,
    turns_elapsed: u32,
    pub verbosity: VerbosityLevel,
}

impl<'a> GameLoop<'a> {
    pub fn new(game: &'a mut Gamestate) -> Self {
        let verbosity = game.logger.verbosity();
        GameLoop {
            game,
            max_turns: 1000,
            turns_elapsed: 0,
            verbosity,
        }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set verbosity on both the loop and the game's logger
    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self.game.logger.set_verbosity(verbosity);
        self
    }

    pub fn turns_elapsed(&self) -> u32 {
        self.turns_elapsed
    }

    /// Run turns until the game ends, then notify strategies and presenter
    pub fn run_game(&mut self) -> Result<GameResult> {
        loop {
            if let Some(result) = self.run_turn_once()? {
                self.report(&result);
                self.game.finish_game(&result);
                return Ok(result);
            }
        }
    }

    /// Run at most `turns_to_run` turns.
    ///
    /// Returns the outcome if the game ended, otherwise a result with
    /// `GameEndReason::Manual` reflecting the current score.
    pub fn run_turns(&mut self, turns_to_run: u32) -> Result<GameResult> {
        for _ in 0..turns_to_run {
            if let Some(result) = self.run_turn_once()? {
                return Ok(result);
            }
        }
        Ok(self.result(GameEndReason::Manual))
    }

    /// Play one full turn. Returns `Some` when the game is over.
    pub fn run_turn_once(&mut self) -> Result<Option<GameResult>> {
        if self.turns_elapsed >= self.max_turns {
            return Ok(Some(self.result(GameEndReason::TurnLimit)));
        }

        match self.game.new_turn() {
            Ok(()) => {}
            Err(TideError::DeckExhausted(side)) => {
                return Ok(Some(self.result(GameEndReason::DeckExhausted(side))));
            }
            Err(e) => return Err(e),
        }

        self.game.request_placement()?;
        self.game.request_move()?;
        self.turns_elapsed += 1;
        Ok(None)
    }

    fn result(&self, end_reason: GameEndReason) -> GameResult {
        let score = self.game.points();
        GameResult {
            winner: score.leader(),
            turns_played: self.game.turn_number(),
            end_reason,
            score,
        }
    }

    fn report(&self, result: &GameResult) {
        let logger = &self.game.logger;
        match result.end_reason {
            GameEndReason::DeckExhausted(side) => logger.minimal(&format!(
                "{side} has no cards left after {} turns",
                result.turns_played
            )),
            GameEndReason::TurnLimit => {
                logger.minimal(&format!("Turn limit {} reached", self.max_turns))
            }
            GameEndReason::Manual => {}
        }
        match result.winner {
            Some(side) => logger.minimal(&format!("{side} wins, {}", result.score)),
            None => logger.minimal(&format!("Draw, {}", result.score)),
        }
    }
}
