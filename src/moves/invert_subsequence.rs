//! This module contains [`InvertSubsequence`], a [`ManaMove`] that reverses a contiguous (and
//! possibly wrapping) run of positions of a [`PermutationProblem`].

use std::marker::PhantomData;

use super::{ManaMove, Move};
use crate::solution::PermutationProblem;

/// A move that inverts the subsequence of positions from `from` to `to` (inclusive).
///
/// Unlike [`SwapElements`][super::SwapElements], `InvertSubsequence` is *not* canonicalized:
/// `(from, to)` and `(to, from)` are distinct moves, because inverting `from..=to` is not the
/// same transformation as inverting `to..=from` unless the two coincide. Its wrap-around policy
/// (`from > to`) is documented on [`Permutation::invert_subsequence`][crate::solution::Permutation::invert_subsequence].
pub struct InvertSubsequence<S> {
    from: usize,
    to: usize,
    _solution: PhantomData<fn(&S)>,
}

impl<S> std::fmt::Debug for InvertSubsequence<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvertSubsequence")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl<S> Clone for InvertSubsequence<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for InvertSubsequence<S> {}

impl<S> PartialEq for InvertSubsequence<S> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl<S> Eq for InvertSubsequence<S> {}

impl<S> InvertSubsequence<S> {
    /// Creates a move that inverts the subsequence from `from` to `to` (inclusive).
    pub fn new(from: usize, to: usize) -> Self {
        InvertSubsequence {
            from,
            to,
            _solution: PhantomData,
        }
    }

    /// The starting position.
    pub fn from(&self) -> usize {
        self.from
    }

    /// The ending position.
    pub fn to(&self) -> usize {
        self.to
    }
}

impl<S: PermutationProblem> Move<S> for InvertSubsequence<S> {
    fn apply(&self, solution: &mut S) {
        solution
            .permutation_mut()
            .invert_subsequence(self.from, self.to);
    }
}

impl<S: PermutationProblem + Clone + Send + Sync + 'static> ManaMove<S> for InvertSubsequence<S> {
    fn box_clone(&self) -> Box<dyn ManaMove<S>> {
        Box::new(*self)
    }

    fn equals(&self, other: &dyn ManaMove<S>) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn hash_value(&self) -> u64 {
        ((self.from as u64) << 16) ^ self.to as u64
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
