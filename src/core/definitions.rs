use std::fmt::Display;

use crate::core::utils::{Square, BOARD_SIZE};

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Grid row where men of this side are crowned.
    pub fn crowning_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE as usize - 1,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub enum PieceKind {
    #[default]
    Man,
    King,
}

/// Content of a single square.
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub enum Occupant {
    #[default]
    Empty,
    Man(Color),
    King(Color),
}

impl Occupant {
    pub fn new(kind: PieceKind, color: Color) -> Occupant {
        match kind {
            PieceKind::Man => Occupant::Man(color),
            PieceKind::King => Occupant::King(color),
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Occupant::Empty => None,
            Occupant::Man(color) | Occupant::King(color) => Some(color),
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Occupant::Empty => None,
            Occupant::Man(_) => Some(PieceKind::Man),
            Occupant::King(_) => Some(PieceKind::King),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    #[inline]
    pub fn belongs_to(self, side: Color) -> bool {
        self.color() == Some(side)
    }

    #[inline]
    pub fn is_enemy_of(self, side: Color) -> bool {
        self.color() == Some(side.opposite())
    }
}

/// Piece of the initial layout; the side is given by the list it comes in.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Placement {
    pub square: Square,
    pub kind: PieceKind,
}

impl From<Square> for Placement {
    fn from(square: Square) -> Self {
        Placement {
            square,
            kind: PieceKind::Man,
        }
    }
}

/// One side's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    /** starting square, then the landing square */
    Simple { from: Square, to: Square },
    /** origin first, then every landing square in order */
    CaptureChain { squares: Vec<Square> },
}

impl Move {
    pub fn origin(&self) -> Option<Square> {
        match self {
            Move::Simple { from, .. } => Some(*from),
            Move::CaptureChain { squares } => squares.first().copied(),
        }
    }

    pub fn destination(&self) -> Option<Square> {
        match self {
            Move::Simple { to, .. } => Some(*to),
            Move::CaptureChain { squares } => squares.last().copied(),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Simple { from, to } => write!(f, "{from}-{to}"),
            Move::CaptureChain { squares } => {
                let squares: Vec<_> = squares.iter().map(Square::to_string).collect();
                f.write_str(&squares.join(":"))
            }
        }
    }
}
