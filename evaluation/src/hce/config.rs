use crate::scores::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HCEConfig {
    /// Per occupied center square, signed by the occupant's colour.
    pub center_bonus: Score,
    /// Per legal move of the side to move.
    pub mobility_weight: Score,
}

impl Default for HCEConfig {
    fn default() -> Self {
        Self {
            center_bonus: 50,
            mobility_weight: 10,
        }
    }
}
