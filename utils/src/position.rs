use std::fmt::Debug;

use arrayvec::ArrayVec;
use cozy_chess::{Color, Piece, Square};

/// Upper bound on the number of legal moves in any reachable chess position.
pub const MAX_MOVES: usize = 218;

/// Legal moves in the order the rules engine produced them.
pub type MoveList<M> = ArrayVec<M, MAX_MOVES>;

/// The surface of the rules engine that search and evaluation consume.
///
/// Implementors own legality. Callers only query the position and mutate it
/// through paired `apply`/`undo` calls: every `apply` is followed by exactly
/// one `undo`, and `undo` must restore the exact prior state.
pub trait Position {
    type Move: Copy + Eq + Debug;

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, square: Square) -> Option<(Piece, Color)>;

    /// Legal moves for the side to move. The order must be deterministic.
    fn legal_moves(&self) -> MoveList<Self::Move>;

    fn is_game_over(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn apply(&mut self, mv: Self::Move);

    fn undo(&mut self);
}
