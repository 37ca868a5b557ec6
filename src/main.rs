//! Tide - Main Binary
//!
//! Play Ebb & Flow in the terminal or simulate many games between strategies

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tide_rs::{
    core::{Deck, Side},
    game::{
        GameLoop, Gamestate, NullPresenter, OutputFormat, Presenter, StrategyOptions,
        StrategyRegistry, TerminalPresenter, VerbosityLevel,
    },
    notation::parse_card_list,
    tournament::{run_simulation, SimulationConfig},
};

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "tide")]
#[command(about = "Tide - Ebb & Flow card placement game engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game
    Play {
        /// Strategy for Ebb (player 0)
        #[arg(long, default_value = "random")]
        p1: String,

        /// Strategy for Flow (player 1, moves first)
        #[arg(long, default_value = "random")]
        p2: String,

        /// Script for a scripted Ebb, e.g. "0,0; 1,0>2,0"
        #[arg(long, value_name = "SCRIPT")]
        p1_script: Option<String>,

        /// Script for a scripted Flow
        #[arg(long, value_name = "SCRIPT")]
        p2_script: Option<String>,

        /// Set random seed for deterministic games
        #[arg(long)]
        seed: Option<u64>,

        /// First cards Ebb draws, e.g. "A3,B2" (the rest of the deck follows unshuffled)
        #[arg(long, value_name = "CARDS")]
        ebb_top: Option<String>,

        /// First cards Flow draws (the rest of the deck follows unshuffled)
        #[arg(long, value_name = "CARDS")]
        flow_top: Option<String>,

        /// Maximum number of turns
        #[arg(long, default_value_t = 1000)]
        max_turns: u32,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Emit log lines as JSON
        #[arg(long)]
        json: bool,

        /// Draw the board after every step
        #[arg(long)]
        board: bool,

        /// Wait for Enter after every step (implies --board)
        #[arg(long)]
        pause: bool,

        /// Clear the screen before drawing the board
        #[arg(long)]
        clear: bool,
    },

    /// Play many games in parallel and print statistics
    Simulate {
        /// Number of games to run
        #[arg(long, short = 'g', default_value_t = 1000)]
        games: usize,

        /// Strategy for Ebb
        #[arg(long, default_value = "random")]
        p1: String,

        /// Strategy for Flow
        #[arg(long, default_value = "random")]
        p2: String,

        /// Master seed for the simulation
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Maximum number of turns per game
        #[arg(long, default_value_t = 1000)]
        max_turns: u32,
    },

    /// List the available strategies
    Strategies,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let registry = StrategyRegistry::with_builtin();

    match cli.command {
        Commands::Play {
            p1,
            p2,
            p1_script,
            p2_script,
            seed,
            ebb_top,
            flow_top,
            max_turns,
            verbosity,
            json,
            board,
            pause,
            clear,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            println!("Using seed: {seed}");

            let ebb_options = StrategyOptions {
                seed: Some(seed.wrapping_add(1)),
                script: p1_script,
            };
            let flow_options = StrategyOptions {
                seed: Some(seed.wrapping_add(2)),
                script: p2_script,
            };
            let ebb = registry
                .create(&p1, &ebb_options)
                .with_context(|| format!("cannot seat '{p1}' for Ebb"))?;
            let flow = registry
                .create(&p2, &flow_options)
                .with_context(|| format!("cannot seat '{p2}' for Flow"))?;

            let presenter: Box<dyn Presenter> = if board || pause {
                let terminal = TerminalPresenter::stdout().with_clear_screen(clear);
                if pause {
                    let input = std::io::BufReader::new(std::io::stdin());
                    Box::new(terminal.with_pause(Box::new(input)))
                } else {
                    Box::new(terminal)
                }
            } else {
                Box::new(NullPresenter)
            };

            let mut game = if ebb_top.is_some() || flow_top.is_some() {
                let ebb_deck = stacked_deck(Side::Ebb, ebb_top.as_deref())?;
                let flow_deck = stacked_deck(Side::Flow, flow_top.as_deref())?;
                Gamestate::with_decks(ebb, flow, presenter, [ebb_deck, flow_deck])
            } else {
                Gamestate::with_seed(ebb, flow, presenter, seed)
            };
            if json {
                game.logger.set_output_format(OutputFormat::Json);
            }

            let result = GameLoop::new(&mut game)
                .with_verbosity(verbosity.into())
                .with_max_turns(max_turns)
                .run_game()
                .context("game aborted")?;

            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                let turns = result.turns_played;
                match result.winner {
                    Some(side) => println!("{side} wins after {turns} turns ({})", result.score),
                    None => println!("Draw after {turns} turns ({})", result.score),
                }
            }
        }

        Commands::Simulate {
            games,
            p1,
            p2,
            seed,
            max_turns,
        } => {
            for name in [&p1, &p2] {
                if name.eq_ignore_ascii_case("human") {
                    bail!("the human strategy cannot be used in simulations");
                }
            }
            println!("=== Tide - Simulation Mode ===");
            println!("Strategies: Ebb={p1}, Flow={p2}, seed {seed}\n");

            let config = SimulationConfig::new(games, &p1, &p2)
                .with_seed(seed)
                .with_max_turns(max_turns);
            let report = run_simulation(&registry, &config).context("simulation failed")?;
            print!("{report}");
        }

        Commands::Strategies => {
            for name in registry.names() {
                println!("{name:<10} {}", registry.describe(name).unwrap_or_default());
            }
        }
    }

    Ok(())
}

fn stacked_deck(side: Side, top: Option<&str>) -> anyhow::Result<Deck> {
    let cards = match top {
        Some(list) => parse_card_list(list, side)?,
        None => Vec::new(),
    };
    Deck::with_top(side, &cards).with_context(|| format!("invalid deck for {side}"))
}
