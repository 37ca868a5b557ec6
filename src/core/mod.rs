//! Core game types: cards, decks, the board, players and coordinates

pub mod board;
pub mod card;
pub mod deck;
pub mod player;
pub mod score;
pub mod types;

pub use board::{Board, CellStack, Field};
pub use card::{Card, Character, Rank};
pub use deck::Deck;
pub use player::Player;
pub use score::Score;
pub use types::{mirror, Landing, Move, Pos, Side, BOARD_SIZE, ENTRY_CELLS, GOAL_CELLS, OFF_BOARD};
