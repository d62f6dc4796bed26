use cozy_chess::{Color, Move};
use log::trace;
use rand::seq::SliceRandom;

use crate::evaluator::Evaluator;
use crate::position::Position;


pub const DEFAULT_DEPTH: u8 = 3;

#[derive(Debug)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32
}

pub struct Searcher {
    evaluator: Evaluator,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher { evaluator: Evaluator::new() }
    }

    /// Minimax with alpha-beta pruning. `for_color` is the side the whole
    /// search maximizes for and stays fixed while the maximizing flag flips
    /// every ply. The position is mutated during recursion but restored
    /// before returning, so the caller observes no net change.
    fn alpha_beta(
        &self,
        position: &mut Position,
        for_color: Color,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        depth: u8,
    ) -> SearchResult {
        if depth == 0 {
            return SearchResult {
                best_move: None,
                best_score: self.evaluator.static_evaluate(position.board(), for_color)
            }
        }

        let mut possible_moves = position.legal_moves();
        // Terminal node above the depth horizon, score it where it stands
        if possible_moves.is_empty() {
            return SearchResult {
                best_move: None,
                best_score: self.evaluator.static_evaluate(position.board(), for_color)
            }
        }

        // Shuffle so ties between equal-value moves don't always resolve to
        // the same pick. Variety, not speed.
        possible_moves.shuffle(&mut rand::thread_rng());

        let mut best_move: Option<Move> = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for &current_move in &possible_moves {
            // Make the move, recurse, and undo it again no matter what the
            // child returned. Undo must happen before the pruning break.
            position.apply_move(current_move);
            let score = self
                .alpha_beta(position, for_color, alpha, beta, !maximizing, depth - 1)
                .best_score;
            position.undo_last_move();

            trace!(
                "{} depth={} move={} score={} best={:?}/{}",
                if maximizing { "max" } else { "min" },
                depth, current_move, score, best_move, best_score
            );

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(current_move);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(current_move);
                }
                beta = beta.min(score);
            }

            // Beta cut-off
            if beta <= alpha {
                trace!("prune depth={} alpha={} beta={}", depth, alpha, beta);
                break;
            }
        }

        // If no move ever beat the sentinel, fall back to the first move in
        // shuffled order so the caller always gets a playable move when any
        // exist.
        SearchResult {
            best_move: best_move.or_else(|| possible_moves.first().copied()),
            best_score
        }
    }

    pub fn get_best_move(&self, position: &mut Position, for_color: Color, depth: u8) -> SearchResult {
        self.alpha_beta(position, for_color, i32::MIN, i32::MAX, true, depth)
    }
}
