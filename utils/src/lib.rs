mod board;
mod material;
mod moves;
mod position;

pub use board::{BoardError, GameBoard};
pub use material::has_insufficient_material;
pub use moves::{collect_legal_moves, has_check, has_legal_moves};
pub use position::{MoveList, Position, MAX_MOVES};
