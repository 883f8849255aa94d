use utils::Position;

use crate::scores::Score;

/// Static evaluation interface.
pub trait Evaluator<P: Position> {
    fn name(&self) -> String;
    /// Evaluate position from White's perspective. Positive = White advantage.
    fn evaluate(&self, position: &P) -> Score;
}
