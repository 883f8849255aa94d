use cozy_chess::Color;
use evaluation::{Score, NEG_INFINITY, POS_INFINITY};

/// Which way a node optimises the shared White-positive score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Perspective {
    Maximizing,
    Minimizing,
}

impl Perspective {
    #[inline(always)]
    pub fn for_side(color: Color) -> Self {
        match color {
            Color::White => Perspective::Maximizing,
            Color::Black => Perspective::Minimizing,
        }
    }

    #[inline(always)]
    pub fn opposite(self) -> Self {
        match self {
            Perspective::Maximizing => Perspective::Minimizing,
            Perspective::Minimizing => Perspective::Maximizing,
        }
    }

    /// Initial best score, beaten by any evaluated score.
    #[inline(always)]
    pub fn worst(self) -> Score {
        match self {
            Perspective::Maximizing => NEG_INFINITY,
            Perspective::Minimizing => POS_INFINITY,
        }
    }

    /// Strict comparison: equal scores never replace the incumbent.
    #[inline(always)]
    pub fn improves(self, candidate: Score, best: Score) -> bool {
        match self {
            Perspective::Maximizing => candidate > best,
            Perspective::Minimizing => candidate < best,
        }
    }
}
