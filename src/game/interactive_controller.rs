//! Interactive strategy for human players
//!
//! Shows the board in the player's own frame and reads decisions line by
//! line. Placements are typed as `i,j`; moves either as their number in the
//! listed options or as `i,j>i,j`. Invalid input is rejected and re-prompted.

use crate::core::{Move, ENTRY_CELLS};
use crate::game::controller::{PlayerTurn, Strategy};
use crate::game::presenter::render_field;
use crate::notation::{parse_move, parse_pos};
use crate::{Result, TideError};
use std::io::{self, BufRead, Write};

/// A strategy that prompts a human for decisions
pub struct HumanStrategy {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl HumanStrategy {
    /// Read from stdin, write to stdout
    pub fn new() -> Self {
        Self::with_io(Box::new(io::BufReader::new(io::stdin())), Box::new(io::stdout()))
    }

    pub fn with_io(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        HumanStrategy { input, output }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TideError::IoError(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a decision",
            )));
        }
        Ok(line.trim().to_string())
    }

    fn show(&mut self, turn: &PlayerTurn<'_>) -> Result<()> {
        writeln!(self.output, "{} to play, turn {}", turn.side(), turn.turn_number())?;
        write!(self.output, "{}", render_field(&turn.field()))?;
        Ok(())
    }

    fn choose_move(&mut self, options: &[Move]) -> Result<Move> {
        for (index, mv) in options.iter().enumerate() {
            writeln!(self.output, "  [{index}] {mv}")?;
        }
        loop {
            let line = self.read_line("Move (number or i,j>i,j):")?;
            if let Ok(index) = line.parse::<usize>() {
                if let Some(&mv) = options.get(index) {
                    return Ok(mv);
                }
            } else if let Ok(mv) = parse_move(&line) {
                if options.contains(&mv) {
                    return Ok(mv);
                }
            }
            writeln!(self.output, "Not one of the listed moves: {line}")?;
        }
    }
}

impl Default for HumanStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HumanStrategy {
    fn name(&self) -> &str {
        "human"
    }

    fn set_card(&mut self, turn: &mut PlayerTurn<'_>) -> Result<()> {
        self.show(turn)?;
        if let Some(card) = turn.drawn_card() {
            writeln!(self.output, "You drew {card} ({} left)", turn.cards_left())?;
        }
        loop {
            let line = self.read_line("Place on 0,0 / 1,0 / 0,1:")?;
            match parse_pos(&line) {
                Ok(pos) if ENTRY_CELLS.contains(&pos) => return turn.set_card(pos.i, pos.j),
                _ => writeln!(self.output, "Not an entry cell: {line}")?,
            }
        }
    }

    fn make_move(&mut self, turn: &mut PlayerTurn<'_>) -> Result<()> {
        let options: Vec<Move> = turn.possible_moves().into_iter().collect();
        if options.is_empty() {
            return Ok(());
        }
        self.show(turn)?;
        let mv = self.choose_move(&options)?;
        turn.make_move(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Character, Deck, Pos, Rank, Side};
    use crate::game::{FirstStrategy, Gamestate, NullPresenter};
    use std::io::Cursor;

    fn human(input: &str) -> Box<HumanStrategy> {
        Box::new(HumanStrategy::with_io(
            Box::new(Cursor::new(input.to_string())),
            Box::new(io::sink()),
        ))
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        let mut game = Gamestate::with_seed(
            Box::new(FirstStrategy::new()),
            human("2,2\nhello\n0,1\n"),
            Box::new(NullPresenter),
            8,
        );
        game.logger.enable_capture();
        game.new_turn().unwrap();
        game.request_placement().unwrap();
        assert!(game.board().top_card(Pos::new(0, 1).mirrored()).is_owned_by(Side::Flow));
    }

    #[test]
    fn test_move_by_number_and_notation() {
        let a1 = Card::new(Character::A, Rank::new(1).unwrap(), Side::Flow);
        let a2 = Card::new(Character::A, Rank::new(2).unwrap(), Side::Flow);
        let mut game = Gamestate::with_decks(
            Box::new(FirstStrategy::new()),
            human("1,0\n0,0\n7\n0,0>1,0\n"),
            Box::new(NullPresenter),
            [Deck::ordered(Side::Ebb), Deck::with_top(Side::Flow, &[a1, a2]).unwrap()],
        );
        game.logger.enable_capture();
        for _ in 0..3 {
            game.new_turn().unwrap();
            game.request_placement().unwrap();
            game.request_move().unwrap();
        }
        assert_eq!(game.board().stack(Pos::new(3, 4)), &[Card::PLACEHOLDER, a1, a2]);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut game = Gamestate::with_seed(
            Box::new(FirstStrategy::new()),
            human(""),
            Box::new(NullPresenter),
            8,
        );
        game.logger.enable_capture();
        game.new_turn().unwrap();
        assert!(matches!(game.request_placement(), Err(TideError::IoError(_))));
    }
}
