use cozy_chess::{Board, Color, GameStatus, Move, Square};
use thiserror::Error;


#[derive(Debug, PartialEq)]
pub enum GameOver {
    Checkmate,
    Draw
}

impl GameOver {
    pub fn display(&self, winning_player: Option<Color>) -> String {
        match (self, winning_player) {
            (GameOver::Checkmate, Some(winner)) => format!("Checkmate, {:?} wins!", winner),
            (GameOver::Checkmate, None) => format!("Checkmate!"),
            (GameOver::Draw, _) => format!("Draw!")
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MoveError {
    #[error("illegal move {0}")]
    Illegal(Move),
}

#[derive(Debug, Error)]
#[error("could not parse FEN: {0}")]
pub struct ParseFenError(#[from] cozy_chess::FenParseError);

/// Live game state: the current board plus the history needed to undo moves
/// and to detect repetition. The rules engine (cozy-chess) owns legality;
/// this type only adapts its surface to what the search and the UI consume.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    history: Vec<Board>,
}

impl Position {
    pub fn startpos() -> Self {
        Position { board: Board::default(), history: Vec::new() }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ParseFenError> {
        let board = Board::from_fen(fen, false)?;
        Ok(Position { board, history: Vec::new() })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        self.board.generate_moves(|batch| {
            moves.extend(batch);
            false
        });
        return moves
    }

    /// Legal moves restricted to one origin square, for UI highlighting.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        self.board.generate_moves_for(square.bitboard(), |batch| {
            moves.extend(batch);
            false
        });
        return moves
    }

    /// Apply a move already known to be legal (drawn from `legal_moves`).
    pub fn apply_move(&mut self, chess_move: Move) {
        self.history.push(self.board.clone());
        self.board.play_unchecked(chess_move);
    }

    /// Restore the state exactly as it was before the last `apply_move`.
    pub fn undo_last_move(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.board = previous;
        }
    }

    /// Validated entry point for human input. Illegal moves are rejected
    /// without touching the position.
    pub fn try_apply_move(&mut self, chess_move: Move) -> Result<(), MoveError> {
        if self.legal_moves().contains(&chess_move) {
            self.apply_move(chess_move);
            Ok(())
        } else {
            Err(MoveError::Illegal(chess_move))
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.game_over().is_some()
    }

    /// Checkmate and stalemate come from the rules engine; the fifty-move
    /// rule and threefold repetition are adjudicated here from the halfmove
    /// clock and the history stack.
    pub fn game_over(&self) -> Option<GameOver> {
        match self.board.status() {
            GameStatus::Won => Some(GameOver::Checkmate),
            GameStatus::Drawn => Some(GameOver::Draw),
            GameStatus::Ongoing => {
                if self.board.halfmove_clock() >= 100 || self.is_repetition_draw() {
                    Some(GameOver::Draw)
                } else {
                    None
                }
            }
        }
    }

    /// On checkmate the side to move is the one that got mated.
    pub fn winner(&self) -> Option<Color> {
        match self.board.status() {
            GameStatus::Won => Some(!self.board.side_to_move()),
            _ => None
        }
    }

    fn is_repetition_draw(&self) -> bool {
        let repeats = self.history
            .iter()
            .filter(|earlier| earlier.same_position(&self.board))
            .count();
        repeats >= 2
    }
}
