use std::ops::{Deref, DerefMut};

use utils::Position;

/// A move applied for the lifetime of the guard; dropping it undoes the move.
///
/// Every exit from a move trial, including unwinding, passes through `Drop`,
/// so the position is restored exactly once per applied move.
pub(crate) struct AppliedMove<'a, P: Position> {
    position: &'a mut P,
}

impl<'a, P: Position> AppliedMove<'a, P> {
    #[inline(always)]
    pub fn new(position: &'a mut P, mv: P::Move) -> Self {
        position.apply(mv);
        Self { position }
    }
}

impl<P: Position> Deref for AppliedMove<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.position
    }
}

impl<P: Position> DerefMut for AppliedMove<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.position
    }
}

impl<P: Position> Drop for AppliedMove<'_, P> {
    #[inline(always)]
    fn drop(&mut self) {
        self.position.undo();
    }
}
