use std::fmt::Display;
use std::str::FromStr;

use crate::core::error::{DraughtsError, Result};

pub const BOARD_SIZE: u8 = 8;

const FILES: &[u8; 8] = b"abcdefgh";

/** Playable (dark) square of the board.
 * `file` is zero-based (`a` = 0), `rank` runs 1..=8.
 * Ordering goes by file first, then by rank. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

/// Dark squares are the ones where the one-based file and the rank share parity.
#[inline]
fn is_dark(file: u8, rank: u8) -> bool {
    (file + 1 + rank) % 2 == 0
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Result<Square> {
        if file < BOARD_SIZE && (1..=BOARD_SIZE).contains(&rank) && is_dark(file, rank) {
            Ok(Square { file, rank })
        } else {
            let token = match FILES.get(file as usize) {
                Some(&letter) => format!("{}{rank}", letter as char),
                None => format!("({file}, {rank})"),
            };
            Err(DraughtsError::InvalidSquare { token })
        }
    }

    /// Lower-case file letter and rank digit, e.g. `('d', '4')`.
    pub fn parse(file: char, rank: char) -> Result<Square> {
        let invalid = || DraughtsError::InvalidSquare {
            token: format!("{file}{rank}"),
        };
        let file_index = FILES
            .iter()
            .position(|&letter| letter as char == file)
            .ok_or_else(invalid)?;
        let rank_index = rank
            .to_digit(10)
            .filter(|digit| (1..=BOARD_SIZE as u32).contains(digit))
            .ok_or_else(invalid)?;
        Square::new(file_index as u8, rank_index as u8).map_err(|_| invalid())
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn file_char(&self) -> char {
        FILES[self.file as usize] as char
    }

    /// `(row, col)` in the stored grid: row 0 holds rank 8, col 0 holds file `a`.
    #[inline]
    pub fn to_grid_index(self) -> (usize, usize) {
        ((BOARD_SIZE - self.rank) as usize, self.file as usize)
    }

    /// Inverse of [`Square::to_grid_index`]; `None` off the board or on a light square.
    pub fn from_grid_index(row: usize, col: usize) -> Option<Square> {
        let size = BOARD_SIZE as usize;
        if row >= size || col >= size {
            return None;
        }
        Square::new(col as u8, (size - row) as u8).ok()
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}

impl FromStr for Square {
    type Err = DraughtsError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Square::parse(file, rank),
            _ => Err(DraughtsError::InvalidSquare {
                token: s.to_string(),
            }),
        }
    }
}

/// Diagonal directions as seen on the printed board, "up" being towards rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

impl Direction {
    /// Row and column steps in grid space.
    #[inline]
    fn steps(self) -> (isize, isize) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// The direction leading from `from` to `to`, if both share a diagonal.
    pub fn towards(from: Square, to: Square) -> Option<Direction> {
        let (from_row, from_col) = from.to_grid_index();
        let (to_row, to_col) = to.to_grid_index();
        if from_row == to_row || from_row.abs_diff(to_row) != from_col.abs_diff(to_col) {
            return None;
        }
        Some(match (to_row < from_row, to_col < from_col) {
            (true, true) => Direction::UpLeft,
            (true, false) => Direction::UpRight,
            (false, true) => Direction::DownLeft,
            (false, false) => Direction::DownRight,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DirectionIterator {
    row: usize,
    col: usize,
    direction: Direction,
}

impl Iterator for DirectionIterator {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (row_step, col_step) = self.direction.steps();
        let row = self.row.checked_add_signed(row_step)?;
        let col = self.col.checked_add_signed(col_step)?;
        let square = Square::from_grid_index(row, col)?;
        self.row = row;
        self.col = col;
        Some(square)
    }
}

/// Squares from `position` (exclusive) to the board edge.
pub fn in_direction(position: Square, direction: Direction) -> DirectionIterator {
    let (row, col) = position.to_grid_index();
    DirectionIterator {
        row,
        col,
        direction,
    }
}

/** Full diagonal ray from `from` towards `to`, running to the edge.
 * Empty when the two squares share no diagonal. */
pub fn diagonal(from: Square, to: Square) -> Vec<Square> {
    match Direction::towards(from, to) {
        Some(direction) => in_direction(from, direction).collect(),
        None => Vec::new(),
    }
}

/// Prefix of `ray` up to and including `to`; empty if `to` is not on it.
pub fn truncate_at(mut ray: Vec<Square>, to: Square) -> Vec<Square> {
    match ray.iter().position(|&square| square == to) {
        Some(index) => {
            ray.truncate(index + 1);
            ray
        }
        None => Vec::new(),
    }
}

/// Squares walked from `from` to `to`, landing square last.
#[inline]
pub fn path(from: Square, to: Square) -> Vec<Square> {
    truncate_at(diagonal(from, to), to)
}
