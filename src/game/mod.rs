//! Game state, turn structure, strategies and the game loop

/// Macro for conditional logging that avoids allocation when feature is disabled
///
/// When the verbose-logging feature is disabled this expands to nothing, so
/// the `format!` arguments are never evaluated.
macro_rules! log_if_verbose {
    ($logger:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $logger.normal(&format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$logger;
        }
    };
}

pub mod controller;
pub mod game_loop;
pub mod interactive_controller;
pub mod logger;
pub mod movegen;
pub mod phase;
pub mod presenter;
pub mod random_controller;
pub mod registry;
pub mod scripted_controller;
pub mod state;
pub mod zero_controller;

pub use controller::{GameStateView, PlayerTurn, Strategy};
pub use game_loop::{GameEndReason, GameLoop, GameResult, VerbosityLevel};
pub use interactive_controller::HumanStrategy;
pub use logger::{GameLogger, LogEntry, OutputFormat, OutputMode};
pub use movegen::possible_moves;
pub use phase::TurnPhase;
pub use presenter::{render_field, NullPresenter, Presenter, TerminalPresenter};
pub use random_controller::RandomStrategy;
pub use registry::{StrategyOptions, StrategyRegistry};
pub use scripted_controller::ScriptedStrategy;
pub use state::Gamestate;
pub use zero_controller::FirstStrategy;
