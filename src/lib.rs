use log::warn;

pub mod core;
pub mod notation;

// module re-exports
pub use crate::core::definitions::{Color, Move, Occupant, PieceKind, Placement};
pub use crate::core::engine::Board;
pub use crate::core::error::{DraughtsError, Result, Violation};
pub use crate::core::game::Game;
pub use crate::core::utils::Square;


/// Plays a whole game file and returns the final board. The first failure ends the game.
pub fn run(text: &str) -> Result<Board> {
    let (setup, turns) = notation::parse_game(text)?;
    let mut game = Game::from_placements(setup.white, setup.black)?;
    for line in turns {
        for (side, token) in notation::split_turn(line)? {
            game.apply(side, &notation::parse_move(token)?)?;
        }
    }
    Ok(game.into_board())
}

/// [`run`] followed by [`notation::render`].
pub fn play(text: &str) -> Result<String> {
    run(text).map(|board| notation::render(&board))
}

/// What the driver writes out: the final position, or only the diagnostic of the
/// first failure.
pub fn report(text: &str) -> String {
    play(text).unwrap_or_else(|err| {
        warn!("Game rejected: {err}");
        err.to_string()
    })
}
