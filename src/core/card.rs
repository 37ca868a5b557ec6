//! Card values
//!
//! A card is either a real card (character, rank and owning side all set) or
//! the placeholder used as bottom-of-stack filler for empty cells. Mixed
//! combinations cannot be constructed.

use crate::core::Side;
use crate::{Result, TideError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card character (the "suit" of the game)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Character {
    A,
    B,
    C,
    D,
    E,
}

impl Character {
    pub const ALL: [Character; 5] = [
        Character::A,
        Character::B,
        Character::C,
        Character::D,
        Character::E,
    ];

    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Character::A),
            'B' => Ok(Character::B),
            'C' => Ok(Character::C),
            'D' => Ok(Character::D),
            'E' => Ok(Character::E),
            _ => Err(TideError::InvalidCard(format!("character must be A-E, got '{c}'"))),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Character::A => 'A',
            Character::B => 'B',
            Character::C => 'C',
            Character::D => 'D',
            Character::E => 'E',
        }
    }
}

/// Card rank, 1 through 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rank(value))
        } else {
            Err(TideError::InvalidCard(format!("rank must be 1-5, got {value}")))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }
}

/// A card on the board, in a deck, or in a won pile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    character: Option<Character>,
    rank: Option<Rank>,
    side: Option<Side>,
}

impl Card {
    /// Filler for an empty cell
    pub const PLACEHOLDER: Card = Card {
        character: None,
        rank: None,
        side: None,
    };

    pub const fn new(character: Character, rank: Rank, side: Side) -> Self {
        Card {
            character: Some(character),
            rank: Some(rank),
            side: Some(side),
        }
    }

    /// Build a card from raw parts.
    ///
    /// Either all three parts are present and in range, or all are absent
    /// (placeholder). Anything else is rejected.
    pub fn from_parts(character: Option<char>, rank: Option<u8>, side: Option<u8>) -> Result<Self> {
        match (character, rank, side) {
            (None, None, None) => Ok(Card::PLACEHOLDER),
            (Some(c), Some(r), Some(s)) => Ok(Card::new(
                Character::from_char(c)?,
                Rank::new(r)?,
                Side::from_index(s)?,
            )),
            _ => Err(TideError::InvalidCard(format!(
                "character {character:?}, rank {rank:?} and side {side:?} must be all set or all unset"
            ))),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.side.is_none()
    }

    pub fn character(&self) -> Option<Character> {
        self.character
    }

    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn is_owned_by(&self, side: Side) -> bool {
        self.side == Some(side)
    }

    /// Two real cards clash when they share character or rank
    pub fn clashes_with(&self, other: &Card) -> bool {
        if self.is_placeholder() || other.is_placeholder() {
            return false;
        }
        self.character == other.character || self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.character, self.rank, self.side) {
            (Some(c), Some(r), Some(s)) => write!(f, "{}{}/{}", c.as_char(), r.value(), s.index()),
            _ => write!(f, "----"),
        }
    }
}
