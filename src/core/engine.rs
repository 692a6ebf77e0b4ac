use std::collections::BTreeSet;
use std::fmt::Display;

use crate::core::definitions::{Color, Occupant, Placement};
use crate::core::error::{DraughtsError, Result, Violation};
use crate::core::utils::{in_direction, path, Square, BOARD_SIZE, DIRECTIONS};

const SIZE: usize = BOARD_SIZE as usize;

/** 8x8 grid addressed through [`Square::to_grid_index`].
 * Light squares are kept empty forever: no `Square` can reach them. */
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    grid: [[Occupant; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// Board holding exactly the given pieces. A square listed twice is rejected.
    pub fn from_placements<W, B>(white: W, black: B) -> Result<Board>
    where
        W: IntoIterator,
        W::Item: Into<Placement>,
        B: IntoIterator,
        B::Item: Into<Placement>,
    {
        let mut board = Board::new();
        let pieces = white
            .into_iter()
            .map(|placement| (Color::White, Into::<Placement>::into(placement)))
            .chain(
                black
                    .into_iter()
                    .map(|placement| (Color::Black, Into::<Placement>::into(placement))),
            );
        for (color, Placement { square, kind }) in pieces {
            if !board.at(square).is_empty() {
                return Err(DraughtsError::DuplicatePlacement { square });
            }
            board.place(square, Occupant::new(kind, color));
        }
        Ok(board)
    }

    #[inline]
    pub fn at(&self, square: Square) -> Occupant {
        let (row, col) = square.to_grid_index();
        self.grid[row][col]
    }

    #[inline]
    pub(crate) fn place(&mut self, square: Square, occupant: Occupant) {
        let (row, col) = square.to_grid_index();
        self.grid[row][col] = occupant;
    }

    #[inline]
    pub(crate) fn clear(&mut self, square: Square) {
        self.place(square, Occupant::Empty);
    }

    /// All 32 playable squares, top row first.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..SIZE).flat_map(|row| (0..SIZE).filter_map(move |col| Square::from_grid_index(row, col)))
    }

    pub fn iter_pieces<'a>(&'a self) -> impl Iterator<Item = (Square, Occupant)> + 'a {
        Board::squares()
            .map(|square| (square, self.at(square)))
            .filter(|(_, occupant)| !occupant.is_empty())
    }

    pub fn pieces_of(&self, side: Color) -> BTreeSet<Square> {
        self.iter_pieces()
            .filter(|(_, occupant)| occupant.belongs_to(side))
            .map(|(square, _)| square)
            .collect()
    }

    /** Crowns a man standing on its side's far row.
     * Returns `true` if a promotion happened. */
    pub(crate) fn promote(&mut self, square: Square) -> bool {
        let (row, _) = square.to_grid_index();
        match self.at(square) {
            Occupant::Man(color) if color.crowning_row() == row => {
                self.place(square, Occupant::King(color));
                true
            }
            _ => false,
        }
    }

    /// Checks a non-capturing move. Men step to any adjacent diagonal square.
    pub fn check_simple(&self, side: Color, from: Square, to: Square) -> Result<()> {
        let illegal = |violation: Violation| DraughtsError::illegal(from, to, violation);
        if from == to {
            return Err(illegal(Violation::SameSquare));
        }
        let mover = self.at(from);
        if !mover.belongs_to(side) {
            return Err(illegal(Violation::NotOwnPiece));
        }
        let path = path(from, to);
        let Some((&landing, before)) = path.split_last() else {
            return Err(illegal(Violation::NotDiagonal));
        };
        if !self.at(landing).is_empty() {
            return Err(illegal(Violation::Occupied));
        }
        match mover {
            Occupant::Man(_) if !before.is_empty() => Err(illegal(Violation::TooFar)),
            Occupant::King(_) if before.iter().any(|&square| !self.at(square).is_empty()) => {
                Err(illegal(Violation::Blocked))
            }
            _ => Ok(()),
        }
    }

    /// Executes a non-capturing move after validating it.
    pub fn move_piece(&mut self, side: Color, from: Square, to: Square) -> Result<()> {
        self.check_simple(side, from, to)?;
        let mover = self.at(from);
        self.clear(from);
        self.place(to, mover);
        self.promote(to);
        Ok(())
    }

    /** Checks a single jump `from -> to` and returns the square of the captured piece.
     * A man jumps exactly one adjacent enemy. A king may fly over empty squares
     * before and after the single enemy piece it takes. */
    pub fn check_capture(&self, side: Color, from: Square, to: Square) -> Result<Square> {
        let illegal = |violation: Violation| DraughtsError::illegal(from, to, violation);
        if from == to {
            return Err(illegal(Violation::SameSquare));
        }
        let mover = self.at(from);
        if !mover.belongs_to(side) {
            return Err(illegal(Violation::NotOwnPiece));
        }
        let path = path(from, to);
        let Some((&landing, before)) = path.split_last() else {
            return Err(illegal(Violation::NotDiagonal));
        };
        if !self.at(landing).is_empty() {
            return Err(illegal(Violation::Occupied));
        }
        if matches!(mover, Occupant::Man(_)) && before.len() > 1 {
            return Err(illegal(Violation::TooFar));
        }
        let mut occupied = before
            .iter()
            .copied()
            .filter(|&square| !self.at(square).is_empty());
        let over = occupied
            .next()
            .ok_or_else(|| illegal(Violation::NothingToCapture))?;
        if !self.at(over).is_enemy_of(side) {
            return Err(illegal(Violation::OwnPiece));
        }
        if occupied.next().is_some() {
            return Err(illegal(Violation::TwoPieces));
        }
        Ok(over)
    }

    fn jump(&mut self, side: Color, from: Square, to: Square) -> Result<()> {
        let captured = self.check_capture(side, from, to)?;
        let mover = self.at(from);
        self.clear(captured);
        self.clear(from);
        self.place(to, mover);
        self.promote(to);
        Ok(())
    }

    /** Executes a capture chain `squares[0] : squares[1] : ...`.
     * Every segment is validated against the board left by the previous one,
     * so a man crowned mid-chain carries on as a king. Nothing is written
     * back unless the whole chain is legal. */
    pub fn capture_chain(&mut self, side: Color, squares: &[Square]) -> Result<()> {
        if squares.len() < 2 {
            let squares: Vec<_> = squares.iter().map(Square::to_string).collect();
            return Err(DraughtsError::MalformedMove {
                token: squares.join(":"),
            });
        }
        let mut scratch = self.clone();
        for segment in squares.windows(2) {
            scratch.jump(side, segment[0], segment[1])?;
        }
        *self = scratch;
        Ok(())
    }

    /// Whether the piece on `square` could capture something right now.
    pub fn can_capture_from(&self, square: Square) -> bool {
        let mover = self.at(square);
        let Some(side) = mover.color() else {
            return false;
        };
        DIRECTIONS.iter().any(|&direction| {
            let mut ray = in_direction(square, direction).map(|square| (square, self.at(square)));
            let reached = match mover {
                Occupant::King(_) => ray.by_ref().find(|(_, occupant)| !occupant.is_empty()),
                _ => ray.next(),
            };
            matches!(reached, Some((_, occupant)) if occupant.is_enemy_of(side))
                && matches!(ray.next(), Some((_, occupant)) if occupant.is_empty())
        })
    }

    /// Mandatory-capture predicate: does any piece of `side` have a jump available?
    pub fn has_capture(&self, side: Color) -> bool {
        self.iter_pieces()
            .filter(|(_, occupant)| occupant.belongs_to(side))
            .any(|(square, _)| self.can_capture_from(square))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "{}|", SIZE - row)?;
            for occupant in cells {
                let symbol = match occupant {
                    Occupant::Empty => ' ',
                    Occupant::Man(Color::White) => 'w',
                    Occupant::King(Color::White) => 'W',
                    Occupant::Man(Color::Black) => 'b',
                    Occupant::King(Color::Black) => 'B',
                };
                write!(f, "{symbol}|")?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for file in 'a'..='h' {
            write!(f, "|{file}")?;
        }
        writeln!(f)
    }
}
