//! Per-player decks

use crate::core::{Card, Character, Rank, Side};
use crate::{Result, TideError};
use serde::Serialize;

/// The 25 cards of one side, drawn from the top one at a time
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    side: Side,
    /// Top of the deck is the last element
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in a full deck
    pub const SIZE: usize = 25;

    /// Full deck in A1..E5 order (E5 on top)
    pub fn ordered(side: Side) -> Self {
        let cards = Character::ALL
            .iter()
            .flat_map(|&character| Rank::all().map(move |rank| Card::new(character, rank, side)))
            .collect();
        Deck { side, cards }
    }

    /// Full deck in uniformly random order
    pub fn shuffled(side: Side, rng: &mut impl rand::Rng) -> Self {
        use rand::seq::SliceRandom;
        let mut deck = Deck::ordered(side);
        deck.cards.shuffle(rng);
        deck
    }

    /// Remove the top card
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(TideError::DeckExhausted(self.side))
    }

    /// Look at the top card without removing it
    pub fn peek_top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Full deck whose first draws are `top`, in that order.
    ///
    /// The remaining cards follow in A1..E5 order beneath them. Every card in
    /// `top` must be a distinct real card of `side`.
    pub fn with_top(side: Side, top: &[Card]) -> Result<Self> {
        let mut rest = Deck::ordered(side).cards;
        for card in top {
            if !card.is_owned_by(side) {
                return Err(TideError::InvalidCard(format!("{card} does not belong to {side}")));
            }
            let index = rest
                .iter()
                .position(|c| c == card)
                .ok_or_else(|| TideError::InvalidCard(format!("{card} listed twice")))?;
            rest.remove(index);
        }
        rest.extend(top.iter().rev());
        Ok(Deck { side, cards: rest })
    }
}
