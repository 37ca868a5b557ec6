//! Player representation

use crate::core::{Card, Deck, Side};
use serde::Serialize;

/// One seat at the table: a deck to draw from and the pile of won cards
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub side: Side,

    /// Cards still to be drawn
    pub deck: Deck,

    /// Cards this player has scored
    pub won: Vec<Card>,
}

impl Player {
    pub fn new(side: Side, deck: Deck) -> Self {
        Player {
            side,
            deck,
            won: Vec::new(),
        }
    }

    pub fn score(&self) -> usize {
        self.won.len()
    }

    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    /// Credit a card to this player's won pile
    pub fn win_card(&mut self, card: Card) {
        self.won.push(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(Side::Flow, Deck::ordered(Side::Flow));
        assert_eq!(player.side, Side::Flow);
        assert_eq!(player.cards_left(), 25);
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_win_card() {
        let mut player = Player::new(Side::Ebb, Deck::ordered(Side::Ebb));
        let card = player.deck.draw().unwrap();
        player.win_card(card);
        assert_eq!(player.score(), 1);
        assert_eq!(player.won, vec![card]);
        assert_eq!(player.cards_left(), 24);
    }
}
