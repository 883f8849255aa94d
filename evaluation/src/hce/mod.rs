mod config;
mod eval_material;
mod eval_mobility;

pub use config::HCEConfig;

use crate::def;
use crate::piece_values::PieceValues;
use crate::scores::{Score, MATE_VALUE};
use cozy_chess::Color;
use utils::Position;

/// Hand-crafted evaluation: checkmate override, material, center and mobility.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    piece_values: PieceValues,
    config: HCEConfig,
}

impl Evaluator {
    pub fn new(piece_values: PieceValues, config: HCEConfig) -> Self {
        Self {
            piece_values,
            config,
        }
    }

    /// Center occupation and mobility term on its own.
    pub fn evaluate_mobility<P: Position>(&self, position: &P) -> Score {
        eval_mobility::evaluate(position, &self.config)
    }
}

impl<P: Position> def::Evaluator<P> for Evaluator {
    fn name(&self) -> String {
        "HCE".to_string()
    }

    fn evaluate(&self, position: &P) -> Score {
        if position.is_checkmate() {
            // The side to move has been mated
            return match position.side_to_move() {
                Color::White => -MATE_VALUE,
                Color::Black => MATE_VALUE,
            };
        }

        let mut cp = eval_material::evaluate(position, &self.piece_values);
        cp += self.evaluate_mobility(position);
        cp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def::Evaluator as _;
    use utils::GameBoard;

    fn evaluate(fen: &str) -> Score {
        let board = GameBoard::from_fen(fen).unwrap();
        Evaluator::default().evaluate(&board)
    }

    #[test]
    fn test_starting_position() {
        // Balanced material, empty center, 20 legal moves
        assert_eq!(Evaluator::default().evaluate(&GameBoard::default()), 200);
    }

    #[test]
    fn test_center_and_mobility_after_e4() {
        let mut board = GameBoard::default();
        board.play_uci("e2e4").unwrap();
        // White pawn on e4, Black has 20 replies
        assert_eq!(Evaluator::default().evaluate(&board), 250);
    }

    #[test]
    fn test_center_occupants_cancel() {
        // White pawn e4, Black pawn d5; White has 5 king moves, e5 and exd5
        assert_eq!(evaluate("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1"), 70);
    }

    #[test]
    fn test_mobility_is_not_signed_by_side() {
        // White: rook 10 moves + king 5 moves
        assert_eq!(evaluate("4k3/8/8/8/8/8/8/R3K3 w - - 0 1"), 500 + 150);
        // Black: king 5 moves, still added to the score
        assert_eq!(evaluate("4k3/8/8/8/8/8/8/R3K3 b - - 0 1"), 500 + 50);
    }

    #[test]
    fn test_black_material_is_negative() {
        // Black is a queen up; at most 28 moves for king and queen together
        let score = evaluate("3qk3/8/8/8/8/8/8/4K3 b - - 0 1");
        assert!(score < 0);
        assert_eq!(score % 10, 0);
        assert!(score <= -900 + 28 * 10);
    }

    #[test]
    fn test_checkmate_overrides_material() {
        // Fool's mate: White to move and mated
        assert_eq!(
            evaluate("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
            -MATE_VALUE
        );
    }

    #[test]
    fn test_mating_move_scores_for_white() {
        let mut board =
            GameBoard::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
                .unwrap();
        let evaluator = Evaluator::default();
        assert!(evaluator.evaluate(&board).abs() < MATE_VALUE);

        board.play_uci("h5f7").unwrap();
        assert!(board.is_checkmate());
        assert_eq!(evaluator.evaluate(&board), MATE_VALUE);
    }

    #[test]
    fn test_injected_values() {
        let values = PieceValues {
            pawn: 1,
            knight: 3,
            bishop: 3,
            rook: 5,
            queen: 9,
            king: 0,
        };
        let config = HCEConfig {
            center_bonus: 0,
            mobility_weight: 0,
        };
        let evaluator = Evaluator::new(values, config);
        let board = GameBoard::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(evaluator.evaluate(&board), 5);
    }

    #[test]
    fn test_evaluation_is_pure() {
        let board = GameBoard::from_fen(
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        )
        .unwrap();
        let before = board.clone();
        let evaluator = Evaluator::default();
        let first = evaluator.evaluate(&board);
        assert_eq!(evaluator.evaluate(&board), first);
        assert_eq!(board, before);
    }
}
