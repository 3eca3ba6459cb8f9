//! This module contains [`SwapElements`], a [`ManaMove`] that swaps two positions of a
//! [`PermutationProblem`].

use std::marker::PhantomData;

use super::{canonical_pair, ManaMove, Move};
use crate::solution::PermutationProblem;

/// A move that swaps the elements at two positions of a permutation.
///
/// The constructor canonicalizes `(from, to)` to `(p1, p2)` with `p1 = min(from, to)` and
/// `p2 = max(from, to)`, so `SwapElements::new(a, b) == SwapElements::new(b, a)` and their hashes
/// agree: swapping `i` and `j` is the same move regardless of argument order.
///
/// `apply` dispatches to [`PermutationProblem::swap`]; a `SwapElements<S>` can therefore only be
/// offered to a permutation-shaped solution of type `S` — the pairing is enforced by the compiler
/// rather than by a runtime downcast.
pub struct SwapElements<S> {
    p1: usize,
    p2: usize,
    _solution: PhantomData<fn(&S)>,
}

impl<S> std::fmt::Debug for SwapElements<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapElements")
            .field("p1", &self.p1)
            .field("p2", &self.p2)
            .finish()
    }
}

impl<S> Clone for SwapElements<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SwapElements<S> {}

impl<S> SwapElements<S> {
    /// Creates a canonicalized swap of `from` and `to`.
    pub fn new(from: usize, to: usize) -> Self {
        let (p1, p2) = canonical_pair(from, to);
        SwapElements {
            p1,
            p2,
            _solution: PhantomData,
        }
    }

    /// The smaller of the two canonicalized positions.
    pub fn p1(&self) -> usize {
        self.p1
    }

    /// The larger of the two canonicalized positions.
    pub fn p2(&self) -> usize {
        self.p2
    }
}

impl<S> PartialEq for SwapElements<S> {
    fn eq(&self, other: &Self) -> bool {
        self.p1 == other.p1 && self.p2 == other.p2
    }
}

impl<S> Eq for SwapElements<S> {}

impl<S: PermutationProblem> Move<S> for SwapElements<S> {
    fn apply(&self, solution: &mut S) {
        solution.swap(self.p1, self.p2);
    }
}

impl<S: PermutationProblem + Clone + Send + Sync + 'static> ManaMove<S> for SwapElements<S> {
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
        ((self.p1 as u64) << 16) ^ self.p2 as u64
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
