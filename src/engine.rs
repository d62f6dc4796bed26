use cozy_chess::Move;
use log::debug;
use thiserror::Error;

use crate::position::Position;
use crate::searcher::{SearchResult, Searcher, DEFAULT_DEPTH};


#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// Not a failure, a signal: there is no move to make in a finished game.
    #[error("the game is already over")]
    GameOver,
    /// The rules engine reported an ongoing position with no legal moves.
    /// That contradiction is surfaced rather than guessing a move.
    #[error("no legal moves in a position reported as ongoing")]
    NoLegalMoves,
}

pub struct Engine {
    searcher: Searcher,
    depth: u8
}

impl Engine {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        Engine { searcher: Searcher::new(), depth }
    }

    /// Search for the side to move and commit the chosen move to the
    /// position. This is the one call that mutates the position for good;
    /// everything below it in the search restores what it touches.
    pub fn make_move(&self, position: &mut Position) -> Result<Move, EngineError> {
        if position.is_terminal() {
            return Err(EngineError::GameOver)
        }
        let SearchResult { best_move, best_score } =
            self.searcher.get_best_move(position, position.side_to_move(), self.depth);
        let chosen = best_move.ok_or(EngineError::NoLegalMoves)?;
        debug!("engine plays {} (score {})", chosen, best_score);
        position.apply_move(chosen);
        Ok(chosen)
    }
}
