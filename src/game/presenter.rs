//! Presentation hooks
//!
//! The engine calls a `Presenter` synchronously at fixed points of every
//! turn. A presenter may block (for instance waiting for Enter) before the
//! game continues.

use crate::core::{Field, Pos, Side, BOARD_SIZE};
use crate::game::{GameResult, GameStateView};
use std::io::{self, BufRead, Write};

pub trait Presenter {
    /// A card has been drawn for the new active player
    fn start_of_turn(&mut self, _view: &GameStateView<'_>) {}

    /// The drawn card has been placed
    fn after_card_set(&mut self, _view: &GameStateView<'_>) {}

    /// A move has been executed
    fn after_move(&mut self, _view: &GameStateView<'_>) {}

    /// The game loop finished
    fn game_over(&mut self, _view: &GameStateView<'_>, _result: &GameResult) {}
}

/// Presenter that shows nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// Draw a field as a 5x5 table, row 0 at the top
pub fn render_field(field: &Field) -> String {
    let rule = format!("+{}\n", "------+".repeat(BOARD_SIZE as usize));
    let mut out = String::new();
    out.push_str(&rule);
    for j in 0..BOARD_SIZE {
        out.push('|');
        for i in 0..BOARD_SIZE {
            out.push_str(&format!(" {} |", field[Pos::new(i, j)]));
        }
        out.push('\n');
        out.push_str(&rule);
    }
    out
}

/// Text presenter for a terminal
///
/// Redraws the header, turn, points and the absolute board after every
/// hook. With `pause` set it waits for a line on the input before
/// continuing.
pub struct TerminalPresenter<W: Write> {
    out: W,
    input: Option<Box<dyn BufRead>>,
    clear_screen: bool,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalPresenter {
            out: io::stdout(),
            input: None,
            clear_screen: false,
        }
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        TerminalPresenter {
            out,
            input: None,
            clear_screen: false,
        }
    }

    /// Wait for a line from `input` after each redraw
    pub fn with_pause(mut self, input: Box<dyn BufRead>) -> Self {
        self.input = Some(input);
        self
    }

    /// Clear the terminal before each redraw
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn redraw(&mut self, view: &GameStateView<'_>, status: &str) -> io::Result<()> {
        if self.clear_screen {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        writeln!(self.out, "Ebb & Flow")?;
        writeln!(self.out, "Turn {} ({} to play)", view.turn_number(), view.active_player())?;
        writeln!(self.out, "Points: {}", view.points())?;
        if let Some(card) = view.drawn_card() {
            writeln!(self.out, "Drawn: {card}")?;
        }
        write!(self.out, "{}", render_field(&view.board().visible(Side::Ebb)))?;
        writeln!(self.out, "{status}")?;
        self.out.flush()?;

        if let Some(input) = self.input.as_mut() {
            let mut line = String::new();
            input.read_line(&mut line)?;
        }
        Ok(())
    }

    fn show(&mut self, view: &GameStateView<'_>, status: &str) {
        if let Err(e) = self.redraw(view, status) {
            eprintln!("display error: {e}");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn start_of_turn(&mut self, view: &GameStateView<'_>) {
        self.show(view, "New turn");
    }

    fn after_card_set(&mut self, view: &GameStateView<'_>) {
        self.show(view, "Card placed");
    }

    fn after_move(&mut self, view: &GameStateView<'_>) {
        self.show(view, "Card moved");
    }

    fn game_over(&mut self, view: &GameStateView<'_>, result: &GameResult) {
        let status = match result.winner {
            Some(side) => format!("Game over: {side} wins ({})", result.score),
            None => format!("Game over: draw ({})", result.score),
        };
        self.show(view, &status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Card, Character, Rank};

    #[test]
    fn test_render_empty_field() {
        let field = Board::new().visible(Side::Ebb);
        let text = render_field(&field);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "+------+------+------+------+------+");
        assert_eq!(lines[1], "| ---- | ---- | ---- | ---- | ---- |");
    }

    #[test]
    fn test_render_places_cards_by_column() {
        let mut board = Board::new();
        let card = Card::new(Character::B, Rank::new(2).unwrap(), Side::Flow);
        board.push(Pos::new(2, 0), card);
        let text = render_field(&board.visible(Side::Ebb));
        assert_eq!(text.lines().nth(1), Some("| ---- | ---- | B2/1 | ---- | ---- |"));
    }

    #[test]
    fn test_terminal_presenter_writes_status() {
        use crate::game::{FirstStrategy, Gamestate};

        let mut game = Gamestate::with_seed(
            Box::new(FirstStrategy::new()),
            Box::new(FirstStrategy::new()),
            Box::new(NullPresenter),
            11,
        );
        game.logger.enable_capture();
        game.new_turn().unwrap();

        let mut presenter = TerminalPresenter::new(Vec::new())
            .with_pause(Box::new(io::Cursor::new("\n")));
        presenter.start_of_turn(&game.view(Side::Flow));
        let text = String::from_utf8(presenter.into_inner()).unwrap();

        assert!(text.starts_with("Ebb & Flow\nTurn 1 (Flow to play)\n"));
        assert!(text.contains("Points: Ebb 0 : 0 Flow"));
        assert!(text.contains("Drawn: "));
        assert!(text.trim_end().ends_with("New turn"));
    }
}
