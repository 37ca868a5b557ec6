//! Random strategy for testing and baseline gameplay
//!
//! Places on a random entry cell and picks a random forced move.

use crate::core::{Move, ENTRY_CELLS};
use crate::game::controller::{PlayerTurn, Strategy};
use crate::Result;
use rand::Rng;

/// A strategy that makes uniformly random choices
pub struct RandomStrategy {
    rng: Box<dyn rand::RngCore>,
}

impl RandomStrategy {
    /// Create a random strategy with a thread-local RNG
    pub fn new() -> Self {
        RandomStrategy {
            rng: Box::new(rand::thread_rng()),
        }
    }

    /// Create a random strategy with a seeded RNG (for deterministic testing)
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        RandomStrategy {
            rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn set_card(&mut self, turn: &mut PlayerTurn<'_>) -> Result<()> {
        let cell = ENTRY_CELLS[self.rng.gen_range(0..ENTRY_CELLS.len())];
        turn.log_choice(self.name(), &format!("places at {cell}"));
        turn.set_card(cell.i, cell.j)
    }

    fn make_move(&mut self, turn: &mut PlayerTurn<'_>) -> Result<()> {
        // BTreeSet iteration order keeps seeded games reproducible
        let moves: Vec<Move> = turn.possible_moves().into_iter().collect();
        if moves.is_empty() {
            return Ok(());
        }
        let mv = moves[self.rng.gen_range(0..moves.len())];
        turn.log_choice(self.name(), &format!("moves {mv} (of {})", moves.len()));
        turn.make_move(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;
    use crate::game::{GameLoop, Gamestate, NullPresenter};

    #[test]
    fn test_random_strategy_name() {
        assert_eq!(RandomStrategy::with_seed(1).name(), "random");
    }

    #[test]
    fn test_random_placement_is_entry_cell() {
        let mut game = Gamestate::with_seed(
            Box::new(RandomStrategy::with_seed(1)),
            Box::new(RandomStrategy::with_seed(2)),
            Box::new(NullPresenter),
            0,
        );
        game.logger.enable_capture();
        game.new_turn().unwrap();
        game.request_placement().unwrap();

        let field = game.get_field();
        let placed: Vec<_> = field.owned_by(Side::Flow).collect();
        assert_eq!(placed.len(), 1);
        assert!(ENTRY_CELLS.contains(&placed[0]));
    }

    #[test]
    fn test_random_games_complete() {
        for seed in 0..5 {
            let mut game = Gamestate::with_seed(
                Box::new(RandomStrategy::with_seed(seed)),
                Box::new(RandomStrategy::with_seed(seed * 31 + 1)),
                Box::new(NullPresenter),
                seed,
            );
            game.logger.enable_capture();
            let result = GameLoop::new(&mut game).run_game().unwrap();
            assert_eq!(result.turns_played, 50);
            assert_eq!(game.card_count(), 50);
        }
    }
}
