//! Error types for the tide engine

use crate::core::{Move, Pos, Side};
use thiserror::Error;

/// A broken turn-order or ownership invariant.
///
/// These are programmer or strategy errors. The game loop aborts on the first
/// one instead of retrying or correcting the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("a new turn was requested before the drawn card was placed")]
    TurnNotFinished,

    #[error("no card has been drawn this turn")]
    NothingDrawn,

    #[error("the drawn card was already placed this turn")]
    AlreadyPlaced,

    #[error("cell {0} is not an entry cell")]
    NotEntryCell(Pos),

    #[error("a move was requested before the drawn card was placed")]
    MoveBeforePlacement,

    #[error("a move was already made this turn")]
    AlreadyMoved,

    #[error("move {0} is not in the set of legal moves")]
    IllegalMove(Move),

    #[error("cell {0} holds no card to move")]
    EmptySource(Pos),

    #[error("cell {pos} is topped by a card of {owner:?}, not of the active player")]
    ForeignSource { pos: Pos, owner: Option<Side> },

    #[error("strategy for {0} returned without placing the drawn card")]
    PlacementSkipped(Side),

    #[error("strategy for {0} returned without moving although moves were available")]
    MoveSkipped(Side),
}

#[derive(Error, Debug)]
pub enum TideError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Invalid side index: {0}")]
    InvalidSide(u8),

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Contract violation: {0}")]
    Violation(#[from] Violation),

    #[error("Deck of {0} is exhausted")]
    DeckExhausted(Side),

    #[error("No strategy is seated for {0}")]
    MissingStrategy(Side),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Strategy already registered: {0}")]
    DuplicateStrategy(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TideError {
    /// The violated invariant, if this error is a contract violation
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            TideError::Violation(v) => Some(v),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TideError>;
