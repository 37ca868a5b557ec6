//! Scripted strategy for testing and reproducing games
//!
//! Follows predetermined placements and moves in order. When the script runs
//! out the strategy does nothing, which the engine reports as a skipped
//! placement or move.

use crate::core::{Move, Pos};
use crate::game::controller::{PlayerTurn, Strategy};
use crate::notation::{parse_script, ScriptStep};
use crate::Result;
use std::collections::VecDeque;

/// A strategy that follows a fixed list of decisions
#[derive(Debug, Clone, Default)]
pub struct ScriptedStrategy {
    placements: VecDeque<Pos>,
    moves: VecDeque<Move>,
}

impl ScriptedStrategy {
    pub fn new(placements: Vec<Pos>, moves: Vec<Move>) -> Self {
        ScriptedStrategy {
            placements: placements.into(),
            moves: moves.into(),
        }
    }

    /// Build from notation such as `"0,0; 1,0; 0,0>1,0"`
    pub fn from_script(script: &str) -> Result<Self> {
        let mut strategy = ScriptedStrategy::default();
        for step in parse_script(script)? {
            match step {
                ScriptStep::Place(pos) => strategy.placements.push_back(pos),
                ScriptStep::Move(mv) => strategy.moves.push_back(mv),
            }
        }
        Ok(strategy)
    }

    /// Decisions not yet used, as (placements, moves)
    pub fn remaining(&self) -> (usize, usize) {
        (self.placements.len(), self.moves.len())
    }
}

impl Strategy for ScriptedStrategy {
    fn name(&self) -> &str {
        "scripted"
    }

    fn set_card(&mut self, turn: &mut PlayerTurn<'_>) -> Result<()> {
        match self.placements.pop_front() {
            Some(pos) => turn.set_card(pos.i, pos.j),
            None => Ok(()),
        }
    }

    fn make_move(&mut self, turn: &mut PlayerTurn<'_>) -> Result<()> {
        match self.moves.pop_front() {
            Some(mv) => turn.make_move(mv),
            None => Ok(()),
        }
    }
}
