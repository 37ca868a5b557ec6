//! Batch simulation: many games in parallel, aggregated statistics
//!
//! Games run concurrently on rayon's pool. Each game gets its own seed drawn
//! from a master Xoshiro stream, so a report is reproducible from
//! `SimulationConfig::seed` regardless of scheduling.

use crate::core::Side;
use crate::game::{
    GameLoop, GameResult, Gamestate, NullPresenter, StrategyOptions, StrategyRegistry,
    VerbosityLevel,
};
use crate::Result;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// What to simulate
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    /// Strategy names for Ebb and Flow
    pub strategies: [String; 2],
    /// Master seed
    pub seed: u64,
    pub max_turns: u32,
}

impl SimulationConfig {
    pub fn new(games: usize, ebb: &str, flow: &str) -> Self {
        SimulationConfig {
            games,
            strategies: [ebb.to_string(), flow.to_string()],
            seed: 0,
            max_turns: 1000,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Aggregated outcome of a simulation
#[derive(Debug, Clone, Default)]
pub struct SimulationReport {
    pub games: usize,
    pub side_wins: [usize; 2],
    pub draws: usize,
    /// Wins per strategy name
    pub strategy_wins: FxHashMap<String, usize>,
    /// Sum of final points per side
    pub total_points: [usize; 2],
    pub total_turns: u64,
    pub elapsed: Duration,
}

impl SimulationReport {
    fn record(&mut self, result: &GameResult, strategies: &[String; 2]) {
        self.games += 1;
        self.total_turns += u64::from(result.turns_played);
        for side in Side::BOTH {
            self.total_points[side.index()] += result.score.get(side);
        }
        match result.winner {
            Some(side) => {
                self.side_wins[side.index()] += 1;
                *self
                    .strategy_wins
                    .entry(strategies[side.index()].clone())
                    .or_insert(0) += 1;
            }
            None => self.draws += 1,
        }
    }

    pub fn wins(&self, side: Side) -> usize {
        self.side_wins[side.index()]
    }

    pub fn average_points(&self, side: Side) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_points[side.index()] as f64 / self.games as f64
    }

    pub fn games_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.games as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Simulation Complete ===")?;
        writeln!(f, "Games played: {}", self.games)?;
        writeln!(f, "Elapsed time: {:.2}s", self.elapsed.as_secs_f64())?;
        writeln!(f, "Games per second: {:.2}", self.games_per_second())?;
        for side in Side::BOTH {
            let wins = self.wins(side);
            let pct = if self.games > 0 {
                100.0 * wins as f64 / self.games as f64
            } else {
                0.0
            };
            writeln!(
                f,
                "{side} wins: {wins} ({pct:.1}%), average points {:.2}",
                self.average_points(side)
            )?;
        }
        writeln!(f, "Draws: {}", self.draws)?;

        let mut by_strategy: Vec<_> = self.strategy_wins.iter().collect();
        by_strategy.sort();
        for (name, wins) in by_strategy {
            writeln!(f, "  {name}: {wins} wins")?;
        }
        Ok(())
    }
}

/// Per-game seeds derived from the master seed
fn game_seeds(master: u64, games: usize) -> Vec<u64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(master);
    (0..games).map(|_| rng.next_u64()).collect()
}

fn play_one(
    registry: &StrategyRegistry,
    config: &SimulationConfig,
    seed: u64,
) -> Result<GameResult> {
    let options = |salt: u64| StrategyOptions {
        seed: Some(seed ^ salt),
        script: None,
    };
    let ebb = registry.create(&config.strategies[0], &options(0x1234_5678_9ABC_DEF0))?;
    let flow = registry.create(&config.strategies[1], &options(0xFEDC_BA98_7654_3210))?;

    let mut game = Gamestate::with_seed(ebb, flow, Box::new(NullPresenter), seed);
    GameLoop::new(&mut game)
        .with_verbosity(VerbosityLevel::Silent)
        .with_max_turns(config.max_turns)
        .run_game()
}

/// Play `config.games` games in parallel and aggregate the results
pub fn run_simulation(
    registry: &StrategyRegistry,
    config: &SimulationConfig,
) -> Result<SimulationReport> {
    let start = Instant::now();

    let results = game_seeds(config.seed, config.games)
        .into_par_iter()
        .map(|seed| play_one(registry, config, seed))
        .collect::<Result<Vec<_>>>()?;

    let mut report = SimulationReport::default();
    for result in &results {
        report.record(result, &config.strategies);
    }
    report.elapsed = start.elapsed();
    Ok(report)
}
