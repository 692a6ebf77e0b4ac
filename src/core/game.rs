use log::{debug, trace};

use crate::core::definitions::{Color, Move, Placement};
use crate::core::engine::Board;
use crate::core::error::{DraughtsError, Result, Violation};

/// A single game session: the board plus the moves applied to it so far.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    history: Vec<(Color, Move)>,
}

impl Game {
    pub fn new(board: Board) -> Game {
        Game {
            board,
            history: Vec::new(),
        }
    }

    pub fn from_placements<W, B>(white: W, black: B) -> Result<Game>
    where
        W: IntoIterator,
        W::Item: Into<Placement>,
        B: IntoIterator,
        B::Item: Into<Placement>,
    {
        Board::from_placements(white, black).map(Game::new)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn history(&self) -> &[(Color, Move)] {
        &self.history
    }

    /** Applies one move of `side`.
     * A simple move is refused while `side` has any capture on the board.
     * Alternation of sides is left to the caller. */
    pub fn apply(&mut self, side: Color, _move: &Move) -> Result<&Board> {
        let outcome = match _move {
            Move::Simple { from, to } => {
                if self.board.has_capture(side) {
                    Err(DraughtsError::illegal(
                        *from,
                        *to,
                        Violation::CaptureAvailable,
                    ))
                } else {
                    self.board.move_piece(side, *from, *to)
                }
            }
            Move::CaptureChain { squares } => self.board.capture_chain(side, squares),
        };
        if let Err(err) = outcome {
            debug!("{side} {_move} rejected: {err}");
            return Err(err);
        }
        debug!("{side} played {_move}");
        trace!("\n{}", self.board);
        self.history.push((side, _move.clone()));
        Ok(&self.board)
    }

    /// Applies `moves` in order, stopping at the first failure.
    pub fn play<'a, I>(&mut self, moves: I) -> Result<&Board>
    where
        I: IntoIterator<Item = (Color, &'a Move)>,
    {
        for (side, _move) in moves {
            self.apply(side, _move)?;
        }
        Ok(&self.board)
    }
}
