use cozy_chess::{Board, Color, Piece};


// All measured in centipawns
const PAWN_SCORE: i32 = 100;
const KNIGHT_SCORE: i32 = 350;
const BISHOP_SCORE: i32 = 350;
const ROOK_SCORE: i32 = 525;
const QUEEN_SCORE: i32 = 1000;
const KING_SCORE: i32 = 10000;

pub fn piece_score(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_SCORE,
        Piece::Knight => KNIGHT_SCORE,
        Piece::Bishop => BISHOP_SCORE,
        Piece::Rook => ROOK_SCORE,
        Piece::Queen => QUEEN_SCORE,
        Piece::King => KING_SCORE,
    }
}

pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    /// Material balance of the board from `perspective`'s point of view.
    /// Own pieces count positive, enemy pieces negative, empty squares zero.
    pub fn static_evaluate(&self, board: &Board, perspective: Color) -> i32 {
        let mut score = 0;
        for color in Color::ALL {
            let sign = if color == perspective { 1 } else { -1 };
            for piece in Piece::ALL {
                let count = (board.colors(color) & board.pieces(piece)).len() as i32;
                score += sign * piece_score(piece) * count;
            }
        }
        return score
    }
}
