//! Forced-move generation
//!
//! Moves come from clashes between the active player's own top cards. Two
//! cells clash when they share a row or a column, both show a card of the
//! active player, and the cards share character or rank. Every cell of a
//! clashing row pair is pushed one step right; every cell of a clashing
//! column pair one step down. The result is always recomputed from the
//! visible field and never cached.

use crate::core::{Field, Move, Pos, Side, BOARD_SIZE};
use std::collections::BTreeSet;

/// All forced moves for `active`, with `field` in `active`'s own frame
pub fn possible_moves(field: &Field, active: Side) -> BTreeSet<Move> {
    let mut moves = BTreeSet::new();

    for pos in field.owned_by(active) {
        let card = field.at(pos);

        let row_clash = (0..BOARD_SIZE)
            .filter(|&i| i != pos.i)
            .map(|i| field.at(Pos::new(i, pos.j)))
            .any(|other| other.is_owned_by(active) && card.clashes_with(&other));
        if row_clash {
            moves.insert(Move::step_right(pos));
        }

        let column_clash = (0..BOARD_SIZE)
            .filter(|&j| j != pos.j)
            .map(|j| field.at(Pos::new(pos.i, j)))
            .any(|other| other.is_owned_by(active) && card.clashes_with(&other));
        if column_clash {
            moves.insert(Move::step_down(pos));
        }
    }

    moves
}
