//! Scoped make/unmake.

use std::ops::{Deref, DerefMut};

use crate::rules::Rules;

/// A move that stays applied for as long as the guard lives.
///
/// [`MoveGuard::apply`] plays the move; dropping the guard undoes it. Because
/// the undo lives in [`Drop`], the position is restored on every exit path:
/// normal return, early `break` on a cutoff, or a panic unwinding through the
/// search.
pub struct MoveGuard<'a, R: Rules + ?Sized> {
    position: &'a mut R,
}

impl<'a, R: Rules + ?Sized> MoveGuard<'a, R> {
    /// Apply `mv` to `position` and return the guard that will undo it.
    #[inline]
    pub fn apply(position: &'a mut R, mv: &R::Move) -> Self {
        position.apply_move(mv);
        Self { position }
    }
}

impl<R: Rules + ?Sized> Deref for MoveGuard<'_, R> {
    type Target = R;

    #[inline]
    fn deref(&self) -> &R {
        self.position
    }
}

impl<R: Rules + ?Sized> DerefMut for MoveGuard<'_, R> {
    #[inline]
    fn deref_mut(&mut self) -> &mut R {
        self.position
    }
}

impl<R: Rules + ?Sized> Drop for MoveGuard<'_, R> {
    #[inline]
    fn drop(&mut self) {
        self.position.undo_last_move();
    }
}
