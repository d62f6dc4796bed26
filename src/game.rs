use std::{io, thread, time::Duration};

use cozy_chess::{Color, File, Move, Piece, Rank, Square};
use itertools::Itertools;
use log::info;
use thiserror::Error;

use crate::engine::{Engine, EngineError};
use crate::position::Position;


/// Pause before the engine replies. Presentation pacing only, the search
/// itself has no notion of time.
const ENGINE_REPLY_DELAY: Duration = Duration::from_millis(250);

pub struct Game {
    pub engine: Engine,
    pub are_players_cpu: [bool; 2],
    pub current_position: Position
}

impl Game {
    pub fn new(are_players_cpu: [bool; 2]) -> Self {
        Game {
            engine: Engine::new(),
            are_players_cpu,
            current_position: Position::startpos()
        }
    }

    pub fn play_game(&mut self) {
        loop {
            clearscreen::clear().expect("failed to clear screen");
            println!("{}", display_board(&self.current_position));
            println!("FEN: {}", self.current_position.fen());

            if let Some(result) = self.current_position.game_over() {
                println!("{}", result.display(self.current_position.winner()));
                break;
            }

            let active_player = self.current_position.side_to_move();
            if self.are_players_cpu[active_player as usize] {
                thread::sleep(ENGINE_REPLY_DELAY);
                match self.engine.make_move(&mut self.current_position) {
                    Ok(chess_move) => info!("{:?} played {}", active_player, chess_move),
                    Err(EngineError::GameOver) => continue,
                    Err(err) => {
                        eprintln!("{err}");
                        break;
                    }
                }
            } else if !self.get_human_move() {
                break;
            }
        }
    }

    /// Prompt until a legal move is applied. Returns false when the player
    /// quits instead of moving.
    fn get_human_move(&mut self) -> bool {
        loop {
            println!("Enter a move like e2e4 (castle by king-takes-rook, e.g. e1h1),");
            println!("'moves <square>' to list targets, or 'quit':");

            let mut player_input = String::new();
            io::stdin().read_line(&mut player_input)
                .expect("Failed to read line");
            let player_input = player_input.trim();

            if player_input.is_empty() {
                continue
            }
            if player_input == "quit" {
                return false
            }
            if let Some(square) = player_input.strip_prefix("moves ") {
                match parse_square(square) {
                    Ok(square) => self.print_targets(square),
                    Err(err) => println!("{err}")
                }
                continue
            }

            let chess_move = match player_input.parse::<Move>() {
                Ok(m) => resolve_promotion(&self.current_position, m),
                Err(err) => {
                    println!("{}", MoveInputError::from(err));
                    continue
                }
            };
            match self.current_position.try_apply_move(chess_move) {
                Ok(()) => {
                    info!("{:?} played {}", !self.current_position.side_to_move(), chess_move);
                    return true
                }
                Err(err) => println!("{err}, try again")
            }
        }
    }

    fn print_targets(&self, square: Square) {
        let moves = self.current_position.legal_moves_from(square);
        if moves.is_empty() {
            println!("No moves from {square}");
        } else {
            println!("{square}: {}", moves.iter().map(|m| m.to.to_string()).join(", "));
        }
    }
}

#[derive(Debug, Error)]
pub enum MoveInputError {
    #[error("could not read move: {0}")]
    Move(#[from] cozy_chess::MoveParseError),
    #[error("unknown square '{0}'")]
    Square(String),
}

fn parse_square(arg: &str) -> Result<Square, MoveInputError> {
    arg.parse::<Square>()
        .map_err(|_| MoveInputError::Square(arg.to_string()))
}

/// Pawn moves to the last rank entered without a promotion piece get a queen.
fn resolve_promotion(position: &Position, chess_move: Move) -> Move {
    if chess_move.promotion.is_some() || position.legal_moves().contains(&chess_move) {
        return chess_move
    }
    let queened = Move { promotion: Some(Piece::Queen), ..chess_move };
    match position.legal_moves().contains(&queened) {
        true => queened,
        false => chess_move
    }
}

pub fn display_board(position: &Position) -> String {
    let mut output = String::new();
    for &rank in Rank::ALL.iter().rev() {
        output.push_str(&format!("{} ", rank as usize + 1));
        for &file in File::ALL.iter() {
            let square = Square::new(file, rank);
            let board = position.board();
            let symbol = match (board.piece_on(square), board.color_on(square)) {
                (Some(piece), Some(color)) => piece_symbol(piece, color),
                _ => '.'
            };
            output.push(symbol);
            output.push(' ');
        }
        output.push('\n');
    }
    output.push_str("  a b c d e f g h");
    return output
}

fn piece_symbol(piece: Piece, color: Color) -> char {
    let symbol = match piece {
        Piece::King => 'k',
        Piece::Queen => 'q',
        Piece::Rook => 'r',
        Piece::Bishop => 'b',
        Piece::Knight => 'n',
        Piece::Pawn => 'p'
    };
    match color {
        Color::White => symbol.to_ascii_uppercase(),
        Color::Black => symbol
    }
}
