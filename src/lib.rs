//! Tide - rules engine for the Ebb & Flow card-placement game
//!
//! Two players take turns drawing a card, placing it on one of their three
//! entry cells of a 5x5 board, and pushing their own cards whenever two of
//! them clash in a row or column. Cards pushed into the opponent's corner
//! score for the mover; cards pushed off the board score for the opponent.

pub mod core;
pub mod error;
pub mod game;
pub mod notation;
pub mod tournament;

pub use error::{Result, TideError, Violation};
