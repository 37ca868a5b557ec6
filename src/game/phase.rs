//! Turn phases

use crate::error::Violation;
use serde::{Deserialize, Serialize};

/// Where the active player stands within the current turn
///
/// A turn runs draw, place, then at most one move:
/// `AwaitingDraw -> AwaitingPlacement -> AwaitingMove -> Moved`.
/// The next `new_turn` may start from `AwaitingMove` (no move was possible)
/// or from `Moved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TurnPhase {
    /// Before the first turn of the game
    #[default]
    AwaitingDraw,
    /// A card has been drawn and must be placed on an entry cell
    AwaitingPlacement,
    /// The drawn card is on the board, a move may follow
    AwaitingMove,
    /// The move for this turn has been made
    Moved,
}

impl TurnPhase {
    /// Has the drawn card been placed this turn?
    pub fn card_played(&self) -> bool {
        matches!(self, TurnPhase::AwaitingMove | TurnPhase::Moved)
    }

    /// Has a card been drawn this turn?
    pub fn card_drawn(&self) -> bool {
        !matches!(self, TurnPhase::AwaitingDraw)
    }

    /// Check that a new turn may begin
    pub fn check_new_turn(&self) -> Result<(), Violation> {
        match self {
            TurnPhase::AwaitingPlacement => Err(Violation::TurnNotFinished),
            _ => Ok(()),
        }
    }

    /// Check that the drawn card may be placed
    pub fn check_placement(&self) -> Result<(), Violation> {
        match self {
            TurnPhase::AwaitingPlacement => Ok(()),
            TurnPhase::AwaitingDraw => Err(Violation::NothingDrawn),
            TurnPhase::AwaitingMove | TurnPhase::Moved => Err(Violation::AlreadyPlaced),
        }
    }

    /// Check that a move may be made
    pub fn check_move(&self) -> Result<(), Violation> {
        match self {
            TurnPhase::AwaitingMove => Ok(()),
            TurnPhase::AwaitingDraw | TurnPhase::AwaitingPlacement => {
                Err(Violation::MoveBeforePlacement)
            }
            TurnPhase::Moved => Err(Violation::AlreadyMoved),
        }
    }
}
