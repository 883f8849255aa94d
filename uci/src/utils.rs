// cozy-chess uses "king captures rook" notation for castling internally (e.g., e1h1),
// but UCI expects standard notation (e.g., e1g1).

use cozy_chess::{util::display_uci_move, Board, Move};

#[inline]
pub fn move_to_uci(board: &Board, mv: Move) -> String {
    display_uci_move(board, mv).to_string()
}
