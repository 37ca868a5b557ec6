//! The 5x5 board of card stacks

use crate::core::{Card, Pos, Side, BOARD_SIZE};
use serde::Serialize;
use smallvec::{smallvec, SmallVec};
use std::ops::Index;

/// Cards on one cell, bottom first. The bottom entry is always the placeholder.
pub type CellStack = SmallVec<[Card; 4]>;

/// Absolute board: `cells[i][j]` is column `i`, row `j`
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    cells: [[CellStack; 5]; 5],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| smallvec![Card::PLACEHOLDER])),
        }
    }

    pub fn stack(&self, pos: Pos) -> &[Card] {
        &self.cells[pos.i as usize][pos.j as usize]
    }

    /// The visible card of a cell
    pub fn top_card(&self, pos: Pos) -> Card {
        self.stack(pos).last().copied().unwrap_or(Card::PLACEHOLDER)
    }

    pub fn push(&mut self, pos: Pos, card: Card) {
        self.cells[pos.i as usize][pos.j as usize].push(card);
    }

    /// Remove the top card if it is a real card. The placeholder never moves.
    pub fn pop(&mut self, pos: Pos) -> Option<Card> {
        let stack = &mut self.cells[pos.i as usize][pos.j as usize];
        match stack.last() {
            Some(card) if !card.is_placeholder() => stack.pop(),
            _ => None,
        }
    }

    /// Top cards as seen by `perspective`.
    ///
    /// Ebb sees the absolute layout. Flow's cell (i,j) reads the absolute
    /// cell `mirror(i,j)`, so both players find their home corner at (0,0).
    pub fn visible(&self, perspective: Side) -> Field {
        let mut cells = [[Card::PLACEHOLDER; 5]; 5];
        for pos in Pos::all() {
            cells[pos.i as usize][pos.j as usize] = self.top_card(pos.to_absolute(perspective));
        }
        Field { cells }
    }

    /// All real cards on the board, bottom to top per cell
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cells
            .iter()
            .flatten()
            .flat_map(|stack| stack.iter().copied())
            .filter(|card| !card.is_placeholder())
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the top card of every cell, in some player's frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    cells: [[Card; 5]; 5],
}

impl Field {
    pub fn at(&self, pos: Pos) -> Card {
        self.cells[pos.i as usize][pos.j as usize]
    }

    /// Row `j`, left to right
    pub fn row(&self, j: u8) -> impl Iterator<Item = Card> + '_ {
        (0..BOARD_SIZE).map(move |i| self.at(Pos::new(i, j)))
    }

    /// Positions topped by a card of `side`
    pub fn owned_by(&self, side: Side) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.at(pos).is_owned_by(side))
    }
}

impl Index<Pos> for Field {
    type Output = Card;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.i as usize][pos.j as usize]
    }
}
