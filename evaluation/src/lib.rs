pub mod def;
pub mod hce;
pub mod piece_values;
pub mod scores;

pub use def::Evaluator;
pub use piece_values::PieceValues;
pub use scores::{Score, MATE_VALUE, NEG_INFINITY, POS_INFINITY};
