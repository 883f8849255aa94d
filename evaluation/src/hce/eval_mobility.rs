use cozy_chess::{Color, Square};
use utils::Position;

use super::HCEConfig;
use crate::scores::Score;

const CENTER_SQUARES: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// Center occupation plus a mobility bonus.
///
/// The mobility term counts the legal moves of the side to move and is added
/// unsigned, whichever side that is.
#[inline(always)]
pub(super) fn evaluate<P: Position>(position: &P, config: &HCEConfig) -> Score {
    let mut bonus = 0;

    for square in CENTER_SQUARES {
        match position.piece_at(square) {
            Some((_, Color::White)) => bonus += config.center_bonus,
            Some((_, Color::Black)) => bonus -= config.center_bonus,
            None => {}
        }
    }

    bonus += position.legal_moves().len() as Score * config.mobility_weight;
    bonus
}
