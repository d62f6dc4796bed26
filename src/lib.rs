//! Chess against a depth-limited minimax engine with alpha-beta pruning.

pub mod engine;
pub mod evaluator;
pub mod game;
pub mod position;
pub mod searcher;
