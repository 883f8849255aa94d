// Score bounds and special values for minimax search.
pub type Score = i32;

/// Search-initialisation sentinels. Every evaluated score lies strictly between them.
pub const POS_INFINITY: Score = Score::MAX;
pub const NEG_INFINITY: Score = -Score::MAX;

/// Score of a checkmated position, negated when Black is the side mated.
pub const MATE_VALUE: Score = 10_000;
