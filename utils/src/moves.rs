use cozy_chess::{Board, Move};

use crate::position::MoveList;

/// Collect all legal moves in generation order.
#[inline(always)]
pub fn collect_legal_moves(board: &Board) -> MoveList<Move> {
    let mut moves = MoveList::new();
    board.generate_moves(|batch| {
        moves.extend(batch);
        false
    });
    moves
}

/// Check if there are any legal moves in the position.
#[inline(always)]
pub fn has_legal_moves(board: &Board) -> bool {
    board.generate_moves(|_| true)
}

/// Check if the side to move is in check.
#[inline(always)]
pub fn has_check(board: &Board) -> bool {
    !board.checkers().is_empty()
}
