//! This module contains the [`Move`] and [`ManaMove`] traits defining prospective, applicable
//! transformations of a solution, and the two concrete moves for permutation problems:
//! [`SwapElements`] and [`InvertSubsequence`].

mod invert_subsequence;
mod swap_elements;

pub use invert_subsequence::InvertSubsequence;
pub use swap_elements::SwapElements;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::solution::FeasibleSolution;

/// A prospective transformation of a solution of type `S`.
///
/// * `apply` mutates `solution` in place.
/// * `evaluate` returns the cost `solution` *would* have after `apply`, without mutating it.
///
/// For any move `m` and solution `s`: if `s2` is obtained by cloning `s` and calling
/// `m.apply(&mut s2)`, then `s2.cost() == m.evaluate(&s)` (computed against the pre-apply `s`).
/// Concrete search strategies rely on `evaluate` being *significantly cheaper* than
/// apply-then-cost-then-revert for non-trivial problems; this is a performance contract, not a
/// correctness one, so the default implementation below (clone, apply, compute cost) is only a
/// correct baseline — problems with expensive `Clone`/`cost` should override `evaluate` with a
/// delta computation.
pub trait Move<S: FeasibleSolution>: Send + Sync {
    /// Mutates `solution` to reflect this move.
    fn apply(&self, solution: &mut S);

    /// Returns the cost `solution` would have after [`apply`][Move::apply], without mutating it.
    fn evaluate(&self, solution: &S) -> S::Cost
    where
        S: Clone,
    {
        let mut after = solution.clone();
        self.apply(&mut after);
        after.cost()
    }
}

/// A [`Move`] additionally suitable for tabu-search bookkeeping: it can be deep-cloned, it has a
/// structural identity (equality/hash) independent of any particular solution instance, and it
/// can produce an "opposite" move (used by strategies that want to forbid immediately undoing the
/// last move).
///
/// `Clone`, `PartialEq`, `Eq` and `Hash` are not object-safe, so they cannot be supertraits of a
/// trait used as `dyn ManaMove<S>`. Instead this trait exposes object-safe equivalents
/// (`box_clone`, `equals`, `hash_value`); [`Clone`], [`PartialEq`], [`Eq`] and [`Hash`] are then
/// implemented for `Box<dyn ManaMove<S>>` itself (below), built on top of those methods, so a
/// `Box<dyn ManaMove<S>>` behaves exactly like a concrete tabu-compatible move everywhere a
/// `HashSet`/`HashMap` of moves is needed.
pub trait ManaMove<S: FeasibleSolution>: Move<S> + std::fmt::Debug {
    /// Deep-clones this move into a fresh boxed instance.
    fn box_clone(&self) -> Box<dyn ManaMove<S>>;

    /// Returns a semantically "opposite" move, used by strategies that want to forbid
    /// undoing the last move. Defaults to a plain clone.
    fn opposite_of(&self) -> Box<dyn ManaMove<S>> {
        self.box_clone()
    }

    /// Structural equality against another `dyn ManaMove<S>`.
    fn equals(&self, other: &dyn ManaMove<S>) -> bool;

    /// A stable hash value, consistent with [`equals`][ManaMove::equals]:
    /// `a.equals(b) implies a.hash_value() == b.hash_value()`.
    fn hash_value(&self) -> u64;

    /// Type-erased self, used by [`equals`][ManaMove::equals] implementations to downcast
    /// `other` back to a concrete move type before comparing fields.
    fn as_any(&self) -> &dyn std::any::Any;
}

impl<S: FeasibleSolution> Clone for Box<dyn ManaMove<S>> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

impl<S: FeasibleSolution> PartialEq for Box<dyn ManaMove<S>> {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref().equals(other.as_ref())
    }
}

impl<S: FeasibleSolution> Eq for Box<dyn ManaMove<S>> {}

impl<S: FeasibleSolution> Hash for Box<dyn ManaMove<S>> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().hash_value().hash(state);
    }
}

/// Canonicalizes a pair of indices so that `(from, to)` and `(to, from)` are identified: returns
/// `(min(from, to), max(from, to))`.
pub(crate) fn canonical_pair(from: usize, to: usize) -> (usize, usize) {
    match from.cmp(&to) {
        Ordering::Less | Ordering::Equal => (from, to),
        Ordering::Greater => (to, from),
    }
}
