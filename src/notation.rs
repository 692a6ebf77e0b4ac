//! Text form of a game: square names, move tokens, the game file and the final report.
//!
//! A game file holds the white pieces on its first line, the black pieces on the
//! second, then one line per turn with White's move and optionally Black's.
//! `c3-d4` is a simple move, `c3:e5:c7` a capture chain. In the piece lists an
//! upper-case file letter marks a king (`E5`).

use crate::core::definitions::{Color, Move, PieceKind, Placement};
use crate::core::engine::Board;
use crate::core::error::{DraughtsError, Result};
use crate::core::utils::Square;

const LINE_BREAK: &str = "\r\n";

/// Initial layout read from the first two lines of a game file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Setup {
    pub white: Vec<Placement>,
    pub black: Vec<Placement>,
}

/// Two-character square token; the case of the file letter decides man or king.
pub fn parse_placement(token: &str) -> Result<Placement> {
    let invalid = || DraughtsError::InvalidSquare {
        token: token.to_string(),
    };
    let mut chars = token.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let kind = if file.is_ascii_uppercase() {
        PieceKind::King
    } else {
        PieceKind::Man
    };
    let square = Square::parse(file.to_ascii_lowercase(), rank).map_err(|_| invalid())?;
    Ok(Placement { square, kind })
}

pub fn parse_square(token: &str) -> Result<Square> {
    parse_placement(token).map(|placement| placement.square)
}

pub fn parse_squares(line: &str) -> Result<Vec<Placement>> {
    line.split_whitespace().map(parse_placement).collect()
}

pub fn parse_move(token: &str) -> Result<Move> {
    let malformed = || DraughtsError::MalformedMove {
        token: token.to_string(),
    };
    if token.contains('-') {
        let parts: Vec<_> = token.split('-').collect();
        let [from, to] = parts.as_slice() else {
            return Err(malformed());
        };
        Ok(Move::Simple {
            from: parse_square(from)?,
            to: parse_square(to)?,
        })
    } else if token.contains(':') {
        let squares = token
            .split(':')
            .map(parse_square)
            .collect::<Result<Vec<_>>>()?;
        Ok(Move::CaptureChain { squares })
    } else {
        Err(malformed())
    }
}

/// Splits a turn line into White's token and, if present, Black's.
pub fn split_turn(line: &str) -> Result<Vec<(Color, &str)>> {
    let tokens: Vec<_> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [white] => Ok(vec![(Color::White, *white)]),
        [white, black] => Ok(vec![(Color::White, *white), (Color::Black, *black)]),
        _ => Err(DraughtsError::MalformedMove {
            token: line.to_string(),
        }),
    }
}

/** Reads the piece lists and returns them with the remaining non-blank turn lines.
 * A missing second line means Black has no pieces. */
pub fn parse_game(text: &str) -> Result<(Setup, Vec<&str>)> {
    let mut lines = text.lines().map(str::trim);
    let white = lines.next().ok_or(DraughtsError::EmptyInput)?;
    let black = lines.next().unwrap_or_default();
    let setup = Setup {
        white: parse_squares(white)?,
        black: parse_squares(black)?,
    };
    Ok((setup, lines.filter(|line| !line.is_empty()).collect()))
}

fn render_side(board: &Board, side: Color) -> String {
    let squares: Vec<_> = board
        .pieces_of(side)
        .iter()
        .map(Square::to_string)
        .collect();
    squares.join(" ")
}

/// White squares, a line break, then black squares, each sorted by file then rank.
pub fn render(board: &Board) -> String {
    format!(
        "{}{LINE_BREAK}{}",
        render_side(board, Color::White),
        render_side(board, Color::Black)
    )
}
