//! First-choice strategy for testing and automation
//!
//! Always places on the first entry cell (0,0) and makes the smallest
//! forced move. Games between two of these are fully determined by the
//! deck seed, which makes them handy for benchmarks and regression tests.

use crate::core::ENTRY_CELLS;
use crate::game::controller::{PlayerTurn, Strategy};
use crate::Result;

/// A strategy that always picks the first option
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstStrategy;

impl FirstStrategy {
    pub fn new() -> Self {
        FirstStrategy
    }
}

impl Strategy for FirstStrategy {
    fn name(&self) -> &str {
        "first"
    }

    fn set_card(&mut self, turn: &mut PlayerTurn<'_>) -> Result<()> {
        let cell = ENTRY_CELLS[0];
        turn.set_card(cell.i, cell.j)
    }

    fn make_move(&mut self, turn: &mut PlayerTurn<'_>) -> Result<()> {
        match turn.possible_moves().into_iter().next() {
            Some(mv) => turn.make_move(mv),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;
    use crate::game::{GameLoop, Gamestate, NullPresenter};

    #[test]
    fn test_first_strategy_is_deterministic() {
        let run = || {
            let mut game = Gamestate::with_seed(
                Box::new(FirstStrategy::new()),
                Box::new(FirstStrategy::new()),
                Box::new(NullPresenter),
                2024,
            );
            game.logger.enable_capture();
            let result = GameLoop::new(&mut game).run_game().unwrap();
            (result, game.player(Side::Ebb).won.clone())
        };
        assert_eq!(run(), run());
    }
}
