//! Text notation for cells, moves and cards
//!
//! - cell: `i,j` with each index 0-5
//! - move: `i,j>i,j`
//! - card: `A3`, or `A3/1` with the owning side
//! - script: cells and moves separated by `;`
//!
//! The forms match the `Display` output of `Pos`, `Move` and `Card`.

use crate::core::{Card, Character, Move, Pos, Rank, Side};
use crate::{Result, TideError};
use nom::{
    branch::alt,
    character::complete::{char, multispace0, one_of, space0, space1},
    combinator::{all_consuming, map, map_res, opt, value},
    multi::{separated_list0, separated_list1},
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    IResult,
};
use std::str::FromStr;

/// One decision in a script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Place(Pos),
    Move(Move),
}

fn digit(c: char) -> u8 {
    c as u8 - b'0'
}

fn coord(input: &str) -> IResult<&str, u8> {
    map(one_of("012345"), digit)(input)
}

fn pos(input: &str) -> IResult<&str, Pos> {
    map(
        separated_pair(coord, delimited(space0, char(','), space0), coord),
        |(i, j)| Pos::new(i, j),
    )(input)
}

fn step_move(input: &str) -> IResult<&str, Move> {
    map_res(
        separated_pair(pos, delimited(space0, char('>'), space0), pos),
        |(start, end)| Move::new(start, end),
    )(input)
}

fn card_parts(input: &str) -> IResult<&str, (Character, Rank, Option<Side>)> {
    tuple((
        map_res(one_of("ABCDEabcde"), Character::from_char),
        map_res(one_of("12345"), |c| Rank::new(digit(c))),
        opt(preceded(
            char('/'),
            map_res(one_of("01"), |c| Side::from_index(digit(c))),
        )),
    ))(input)
}

fn script_step(input: &str) -> IResult<&str, ScriptStep> {
    // Moves first: every move starts with a cell
    alt((map(step_move, ScriptStep::Move), map(pos, ScriptStep::Place)))(input)
}

fn step_separator(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(';'), multispace0)(input)
}

fn card_separator(input: &str) -> IResult<&str, ()> {
    alt((value((), delimited(space0, char(','), space0)), value((), space1)))(input)
}

fn script(input: &str) -> IResult<&str, Vec<ScriptStep>> {
    delimited(
        multispace0,
        terminated(separated_list0(step_separator, script_step), opt(step_separator)),
        multispace0,
    )(input)
}

fn finish<T>(what: &str, input: &str, result: IResult<&str, T>) -> Result<T> {
    result
        .map(|(_, parsed)| parsed)
        .map_err(|e| TideError::ParseError(format!("invalid {what} '{input}': {e}")))
}

pub fn parse_pos(input: &str) -> Result<Pos> {
    finish("cell", input, all_consuming(delimited(space0, pos, space0))(input))
}

pub fn parse_move(input: &str) -> Result<Move> {
    finish("move", input, all_consuming(delimited(space0, step_move, space0))(input))
}

/// Parse a card, using `default_side` when the side is not written
pub fn parse_card(input: &str, default_side: Side) -> Result<Card> {
    let (character, rank, side) =
        finish("card", input, all_consuming(delimited(space0, card_parts, space0))(input))?;
    Ok(Card::new(character, rank, side.unwrap_or(default_side)))
}

/// Parse a list of cards of `side`, separated by commas or spaces
pub fn parse_card_list(input: &str, side: Side) -> Result<Vec<Card>> {
    let list = separated_list1(card_separator, card_parts);
    let parts = finish("card list", input, all_consuming(delimited(space0, list, space0))(input))?;
    parts
        .into_iter()
        .map(|(character, rank, written)| match written {
            Some(other) if other != side => Err(TideError::InvalidCard(format!(
                "{}{} is marked for {other}, expected {side}",
                character.as_char(),
                rank.value()
            ))),
            _ => Ok(Card::new(character, rank, side)),
        })
        .collect()
}

pub fn parse_script(input: &str) -> Result<Vec<ScriptStep>> {
    finish("script", input, all_consuming(script)(input))
}

impl FromStr for Pos {
    type Err = TideError;

    fn from_str(s: &str) -> Result<Self> {
        parse_pos(s)
    }
}

impl FromStr for Move {
    type Err = TideError;

    fn from_str(s: &str) -> Result<Self> {
        parse_move(s)
    }
}

/// Requires the full `A3/1` form
impl FromStr for Card {
    type Err = TideError;

    fn from_str(s: &str) -> Result<Self> {
        let (character, rank, side) =
            finish("card", s, all_consuming(delimited(space0, card_parts, space0))(s))?;
        let side = side.ok_or_else(|| TideError::ParseError(format!("card '{s}' has no side")))?;
        Ok(Card::new(character, rank, side))
    }
}
