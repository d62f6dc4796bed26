use std::collections::HashSet;

use cozy_chess::Color;
use minimax_chess::evaluator::Evaluator;
use minimax_chess::position::Position;
use minimax_chess::searcher::Searcher;

fn position(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid FEN")
}

/// Plain minimax without pruning, used as the reference the pruned search
/// must agree with.
fn minimax(position: &mut Position, for_color: Color, maximizing: bool, depth: u8) -> i32 {
    if depth == 0 {
        return Evaluator::new().static_evaluate(position.board(), for_color);
    }
    let moves = position.legal_moves();
    if moves.is_empty() {
        return Evaluator::new().static_evaluate(position.board(), for_color);
    }
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for chess_move in moves {
        position.apply_move(chess_move);
        let score = minimax(position, for_color, !maximizing, depth - 1);
        position.undo_last_move();
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

#[test]
fn opening_move_comes_from_the_twenty_legal_ones() {
    let mut pos = Position::startpos();
    let legal = pos.legal_moves();
    assert_eq!(legal.len(), 20);

    let searcher = Searcher::new();
    let result = searcher.get_best_move(&mut pos, Color::White, 1);
    let chosen = result.best_move.expect("a move from a live position");
    assert!(legal.contains(&chosen));
    // One ply from the start no material can change hands
    assert_eq!(result.best_score, 0);
}

#[test]
fn search_leaves_the_position_untouched() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        "3q3k/8/8/8/8/8/8/3R3K w - - 0 1",
    ];
    let searcher = Searcher::new();
    for fen in fens {
        let mut pos = position(fen);
        let before = pos.fen();
        let moves_before = pos.move_count();
        let for_color = pos.side_to_move();
        searcher.get_best_move(&mut pos, for_color, 3);
        assert_eq!(pos.fen(), before, "mutated: {fen}");
        assert_eq!(pos.move_count(), moves_before);
    }
}

#[test]
fn pruning_never_changes_the_root_score() {
    // Positions with captures in the air, where pruning actually fires
    let cases = [
        ("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4", 2),
        ("3q3k/8/8/8/8/8/8/3R3K w - - 0 1", 3),
        ("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2", 2),
        ("8/5k2/8/8/8/4P3/8/4K3 b - - 0 1", 3),
    ];
    let searcher = Searcher::new();
    for (fen, depth) in cases {
        let mut pos = position(fen);
        let for_color = pos.side_to_move();
        let expected = minimax(&mut pos, for_color, true, depth);
        let pruned = searcher.get_best_move(&mut pos, for_color, depth).best_score;
        assert_eq!(pruned, expected, "score diverged for {fen} at depth {depth}");
    }
}

#[test]
fn equal_moves_are_not_always_resolved_the_same_way() {
    // Every opening move scores 0 at depth 1, so over enough runs the
    // shuffle must surface more than one pick.
    let searcher = Searcher::new();
    let mut seen = HashSet::new();
    for _ in 0..40 {
        let mut pos = Position::startpos();
        let result = searcher.get_best_move(&mut pos, Color::White, 1);
        seen.insert(result.best_move.expect("a move from a live position"));
    }
    assert!(
        seen.len() > 1,
        "40 searches all picked the same opening move, shuffle looks inert"
    );
}

#[test]
fn depth_two_search_keeps_a_defended_target_untaken() {
    // Black pawn d5 is defended by the e6 pawn. At depth 2 white sees the
    // recapture and scores exd5 as an even trade, not a pawn win.
    let mut pos = position("rnbqkbnr/ppp2ppp/4p3/3p4/3PP3/8/PPP2PPP/RNBQKBNR w KQkq - 0 3");
    let searcher = Searcher::new();
    let result = searcher.get_best_move(&mut pos, Color::White, 2);
    assert_eq!(result.best_score, 0);
}

#[test]
fn the_bigger_of_two_free_captures_wins() {
    // The queen can take a loose rook on d7 or a loose pawn on a4. The rook
    // is strictly better, so no shuffle outcome may change the pick.
    let mut pos = position("7k/3r4/8/8/p7/8/8/3Q3K w - - 0 1");
    let searcher = Searcher::new();
    for _ in 0..5 {
        let result = searcher.get_best_move(&mut pos, Color::White, 2);
        assert_eq!(result.best_move, Some("d1d7".parse().expect("parseable move")));
        // Queen and king against king and pawn
        assert_eq!(result.best_score, 900);
    }
}
