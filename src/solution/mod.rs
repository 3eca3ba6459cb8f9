//! This module contains the [`FeasibleSolution`] and [`CopyableSolution`] traits, which define
//! the contract every searched-over solution type must satisfy, and the
//! [`permutation`][self::permutation] submodule, a specialization for permutation-shaped
//! problems such as assignment or the travelling salesman problem.

pub mod permutation;

pub use permutation::{Permutation, PermutationProblem};

/// A point in the search space of a combinatorial optimization problem.
///
/// * `cost()` must be a pure function of the solution's state: calling it twice without any
///   mutation in between must return the same value.
/// * `copy_from` overwrites `self`'s state with `other`'s. Because every move, recorder and
///   search driver in this crate is generic over a single concrete `S`, there is no dynamic-kind
///   mismatch to guard against at runtime — the compiler already guarantees `other` has the same
///   shape as `self`.
pub trait FeasibleSolution {
    /// The scalar cost type to minimize. Real-valued (`f64`) by default for most problems;
    /// problems for which an integer cost suffices can use `i64` (or any other
    /// `PartialOrd + Copy + Debug` type) instead by choosing it here.
    type Cost: PartialOrd + Copy + std::fmt::Debug;

    /// Computes the scalar cost of this solution.
    fn cost(&self) -> Self::Cost;

    /// Overwrites this solution's state with `other`'s state.
    fn copy_from(&mut self, other: &Self);
}

/// A refinement of [`FeasibleSolution`] whose state can be snapshotted cheaply, e.g. for
/// best-ever tracking in [`BestEverSolution`][crate::recorder::BestEverSolution].
///
/// Any type that is both [`FeasibleSolution`] and [`Clone`] automatically satisfies this, since
/// `Clone::clone` already guarantees the snapshot is independent of its source.
pub trait CopyableSolution: FeasibleSolution + Clone {}

impl<S: FeasibleSolution + Clone> CopyableSolution for S {}
