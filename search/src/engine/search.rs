use evaluation::Score;
use log::debug;
use utils::Position;

use super::guard::AppliedMove;
use super::perspective::Perspective;
use super::Engine;

impl<P: Position> Engine<P> {
    /// Fixed-depth minimax over every legal move, without pruning.
    ///
    /// Returns the best score for `perspective` and the first move that
    /// reached it, or no move at a cutoff or terminal node. `ply` counts
    /// moves played since the search root.
    pub(crate) fn minimax(
        &mut self,
        position: &mut P,
        depth: u8,
        ply: u8,
        perspective: Perspective,
    ) -> (Score, Option<P::Move>) {
        if depth == 0 || position.is_game_over() {
            self.nodes += 1;
            return (self.evaluator.evaluate(position), None);
        }

        let mut best_score = perspective.worst();
        let mut best_move = None;

        for mv in position.legal_moves() {
            let score = {
                let mut child = AppliedMove::new(position, mv);
                self.minimax(&mut child, depth - 1, ply + 1, perspective.opposite())
                    .0
            };

            if ply == 0 {
                debug!("Move: {:?}, Score: {}", mv, score);
            }

            if perspective.improves(score, best_score) {
                best_score = score;
                best_move = Some(mv);
            }
        }

        (best_score, best_move)
    }
}
