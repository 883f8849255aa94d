use std::fmt;
use std::str::FromStr;

use cozy_chess::util::parse_uci_move;
use cozy_chess::{Board, Color, Move, Piece, Square};
use log::warn;
use thiserror::Error;

use crate::material::has_insufficient_material;
use crate::moves::{collect_legal_moves, has_check, has_legal_moves};
use crate::position::{MoveList, Position};

/// Occurrences of one position that end the game without a claim.
const FIVEFOLD: usize = 5;

/// Plies without a capture or pawn move that end the game without a claim.
const SEVENTY_FIVE_MOVES: u16 = 150;

/// Highest halfmove clock cozy-chess stores.
const MAX_BOARD_CLOCK: u16 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid FEN '{0}'")]
    InvalidFen(String),
    #[error("illegal move '{0}'")]
    IllegalMove(String),
}

/// A cozy-chess board with an undo stack, exposed through [`Position`].
///
/// cozy-chess stops counting the halfmove clock at 100, so the full count
/// is kept alongside the board.
#[derive(Debug, Clone, PartialEq)]
pub struct GameBoard {
    board: Board,
    halfmove_clock: u16,
    history: Vec<(Board, u16)>,
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl GameBoard {
    pub fn new(board: Board) -> Self {
        let halfmove_clock = u16::from(board.halfmove_clock());
        Self {
            board,
            halfmove_clock,
            history: Vec::new(),
        }
    }

    /// Parse a FEN, accepting halfmove clocks above the 100 cozy-chess allows.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let invalid = || BoardError::InvalidFen(fen.to_string());

        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        let mut halfmove_clock = None;
        if fields.len() == 6 {
            let clock = fields[4].parse::<u16>().map_err(|_| invalid())?;
            if clock > MAX_BOARD_CLOCK {
                fields[4] = "100";
            }
            halfmove_clock = Some(clock);
        }

        let board = Board::from_str(&fields.join(" ")).map_err(|_| invalid())?;
        let mut game = Self::new(board);
        if let Some(clock) = halfmove_clock {
            game.halfmove_clock = clock;
        }
        Ok(game)
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plies since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Number of moves that can currently be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Parse a move in UCI notation and apply it if it is legal here.
    pub fn play_uci(&mut self, notation: &str) -> Result<Move, BoardError> {
        let mv = parse_uci_move(&self.board, notation.trim())
            .map_err(|_| BoardError::IllegalMove(notation.to_string()))?;
        if !self.board.is_legal(mv) {
            return Err(BoardError::IllegalMove(notation.to_string()));
        }
        self.apply(mv);
        Ok(mv)
    }

    pub fn is_stalemate(&self) -> bool {
        !has_check(&self.board) && !has_legal_moves(&self.board)
    }

    fn is_fivefold_repetition(&self) -> bool {
        let hash = self.board.hash();
        let earlier = self
            .history
            .iter()
            .filter(|(board, _)| board.hash() == hash)
            .count();
        earlier + 1 >= FIVEFOLD
    }
}

impl Position for GameBoard {
    type Move = Move;

    #[inline(always)]
    fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline(always)]
    fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some((piece, color))
    }

    fn legal_moves(&self) -> MoveList<Move> {
        collect_legal_moves(&self.board)
    }

    fn is_game_over(&self) -> bool {
        // Mate or stalemate
        !has_legal_moves(&self.board)
            || self.halfmove_clock >= SEVENTY_FIVE_MOVES
            || has_insufficient_material(&self.board)
            || self.is_fivefold_repetition()
    }

    fn is_checkmate(&self) -> bool {
        has_check(&self.board) && !has_legal_moves(&self.board)
    }

    fn apply(&mut self, mv: Move) {
        self.history.push((self.board.clone(), self.halfmove_clock));
        self.board.play_unchecked(mv);

        // The board clock only reads zero right after a capture or pawn move
        self.halfmove_clock = match self.board.halfmove_clock() {
            0 => 0,
            _ => self.halfmove_clock + 1,
        };
    }

    fn undo(&mut self) {
        match self.history.pop() {
            Some((board, halfmove_clock)) => {
                self.board = board;
                self.halfmove_clock = halfmove_clock;
            }
            None => warn!("undo called with no move to take back"),
        }
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_undo_restores_board() {
        let mut game = GameBoard::default();
        let before = game.clone();

        for mv in game.legal_moves() {
            game.apply(mv);
            assert_ne!(game.board(), before.board());
            game.undo();
            assert_eq!(game, before);
        }
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut game = GameBoard::default();
        game.undo();
        assert_eq!(game, GameBoard::default());
    }

    #[test]
    fn test_piece_at() {
        let game = GameBoard::default();
        assert_eq!(game.piece_at(Square::E1), Some((Piece::King, Color::White)));
        assert_eq!(game.piece_at(Square::D8), Some((Piece::Queen, Color::Black)));
        assert_eq!(game.piece_at(Square::E4), None);
    }

    #[test]
    fn test_play_uci() {
        let mut game = GameBoard::default();
        game.play_uci("e2e4").unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.piece_at(Square::E4), Some((Piece::Pawn, Color::White)));
        assert_eq!(game.history_len(), 1);

        assert_eq!(
            game.play_uci("e2e4"),
            Err(BoardError::IllegalMove("e2e4".to_string()))
        );
        assert!(game.play_uci("not-a-move").is_err());
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn test_play_uci_castling() {
        let mut game =
            GameBoard::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        game.play_uci("e1g1").unwrap();
        assert_eq!(game.piece_at(Square::G1), Some((Piece::King, Color::White)));
        assert_eq!(game.piece_at(Square::F1), Some((Piece::Rook, Color::White)));
    }

    #[test]
    fn test_invalid_fen() {
        assert!(matches!(
            GameBoard::from_fen("not a fen"),
            Err(BoardError::InvalidFen(_))
        ));
    }

    #[test]
    fn test_checkmate() {
        let game =
            GameBoard::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert!(game.is_checkmate());
        assert!(game.is_game_over());
        assert!(!game.is_stalemate());
    }

    #[test]
    fn test_stalemate() {
        let game = GameBoard::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(game.is_stalemate());
        assert!(!game.is_checkmate());
        assert!(game.is_game_over());
    }

    #[test]
    fn test_game_over_by_material() {
        assert!(GameBoard::from_fen("k7/8/8/8/8/8/8/KN6 w - - 0 1")
            .unwrap()
            .is_game_over());
        assert!(!GameBoard::default().is_game_over());
    }

    #[test]
    fn test_seventy_five_move_rule() {
        for (clock, over) in [(99, false), (100, false), (149, false), (150, true)] {
            let fen = format!("k7/8/8/8/8/8/8/KR6 w - - {} 120", clock);
            let game = GameBoard::from_fen(&fen).unwrap();
            assert_eq!(game.halfmove_clock(), clock);
            assert_eq!(game.is_game_over(), over, "halfmove clock {}", clock);
        }
    }

    #[test]
    fn test_halfmove_clock_counts_past_board_limit() {
        let mut game = GameBoard::from_fen("k7/8/8/8/8/8/8/KR6 w - - 149 120").unwrap();
        assert!(!game.is_game_over());

        game.play_uci("b1c1").unwrap();
        assert_eq!(game.halfmove_clock(), 150);
        assert!(game.is_game_over());

        game.undo();
        assert_eq!(game.halfmove_clock(), 149);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_halfmove_clock_resets_on_pawn_move_and_capture() {
        let mut game = GameBoard::from_fen("k7/8/8/3p4/4P3/8/8/K7 w - - 120 80").unwrap();
        game.play_uci("a1b1").unwrap();
        assert_eq!(game.halfmove_clock(), 121);
        game.play_uci("d5e4").unwrap();
        assert_eq!(game.halfmove_clock(), 0);
        game.play_uci("b1c1").unwrap();
        assert_eq!(game.halfmove_clock(), 1);

        game.undo();
        game.undo();
        assert_eq!(game.halfmove_clock(), 121);
    }

    #[test]
    fn test_fivefold_repetition() {
        let mut game = GameBoard::default();
        for _ in 0..4 {
            for mv in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                assert!(!game.is_game_over());
                game.play_uci(mv).unwrap();
            }
        }
        // The starting position has now occurred five times.
        assert!(game.is_game_over());
    }
}
