use cozy_chess::{Color, Square};
use utils::Position;

use crate::piece_values::PieceValues;
use crate::scores::Score;

/// Material balance over every square: White pieces add, Black pieces subtract.
#[inline(always)]
pub(super) fn evaluate<P: Position>(position: &P, piece_values: &PieceValues) -> Score {
    Square::ALL
        .iter()
        .filter_map(|&square| position.piece_at(square))
        .map(|(piece, color)| match color {
            Color::White => piece_values.get(piece),
            Color::Black => -piece_values.get(piece),
        })
        .sum()
}
