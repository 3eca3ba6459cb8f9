#![warn(missing_docs)]
//! This library provides a reusable substrate for local-search metaheuristics over combinatorial
//! optimization problems (assignment, travelling salesman, quadratic assignment, ...).
//!
//! # Overview
//! It provides the machinery that every local-search metaheuristic needs, generic across three
//! independent axes — problem, move type, and search strategy:
//! - [solutions][solution]: the [`FeasibleSolution`][solution::FeasibleSolution] /
//!   [`CopyableSolution`][solution::CopyableSolution] contracts and the
//!   [`PermutationProblem`][solution::PermutationProblem] specialization.
//! - [moves][moves]: the [`Move`][moves::Move] / [`ManaMove`][moves::ManaMove] (tabu-compatible)
//!   contracts, and [`SwapElements`][moves::SwapElements] /
//!   [`InvertSubsequence`][moves::InvertSubsequence] for permutation problems.
//! - [move managers][manager]: the [`MoveManager`][manager::MoveManager] neighborhood-generator
//!   contract, a fixed [`ConstantNeighborhood`][manager::ConstantNeighborhood], and the
//!   stochastic [`SwapNeighborhood`][manager::SwapNeighborhood].
//! - [solution recorders][recorder]: the [`SolutionRecorder`][recorder::SolutionRecorder] chain
//!   of responsibility and [`BestEverSolution`][recorder::BestEverSolution].
//! - [observer/subject plumbing][observer]: [`SearchListener`][observer::SearchListener] and
//!   [`Subject`][observer::Subject].
//! - [the abstract search driver][search]: [`AbstractSearch`][search::AbstractSearch], the shared
//!   state every concrete strategy (tabu search, simulated annealing, local-search descent, ...)
//!   is built on.
//!
//! Concrete search strategies are deliberately **not** part of this crate: they own the outer
//! loop, the move-selection policy, the acceptance policy, and termination, and they raise
//! [`NoMovesError`][error::NoMovesError] themselves when a refreshed neighborhood comes back
//! empty. This crate only gives them the substrate to build on.
//!
//! # How to use this library (step-by-step example)
//! Suppose you want to minimize the total absolute displacement of a permutation from the
//! identity — an artificial but complete example of wiring the substrate together.
//!
//! #### 1. Define your solution type around [`Permutation`][solution::Permutation].
//! ```rust
//! use local_search_substrate::solution::{FeasibleSolution, Permutation, PermutationProblem};
//!
//! #[derive(Debug, Clone)]
//! struct Displacement(Permutation);
//!
//! impl FeasibleSolution for Displacement {
//!     type Cost = i64;
//!     fn cost(&self) -> i64 {
//!         self.0
//!             .order()
//!             .iter()
//!             .enumerate()
//!             .map(|(i, &v)| (i as i64 - v as i64).abs())
//!             .sum()
//!     }
//!     fn copy_from(&mut self, other: &Self) {
//!         *self = other.clone();
//!     }
//! }
//!
//! impl PermutationProblem for Displacement {
//!     fn permutation(&self) -> &Permutation {
//!         &self.0
//!     }
//!     fn permutation_mut(&mut self) -> &mut Permutation {
//!         &mut self.0
//!     }
//! }
//! ```
//!
//! #### 2. Pick a [`MoveManager`][manager::MoveManager] — here, the stochastic
//! [`SwapNeighborhood`][manager::SwapNeighborhood].
//! ```rust
//! use local_search_substrate::manager::SwapNeighborhood;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! # use local_search_substrate::solution::{FeasibleSolution, Permutation, PermutationProblem};
//! # #[derive(Debug, Clone)]
//! # struct Displacement(Permutation);
//! # impl FeasibleSolution for Displacement {
//! #     type Cost = i64;
//! #     fn cost(&self) -> i64 { 0 }
//! #     fn copy_from(&mut self, other: &Self) { *self = other.clone(); }
//! # }
//! # impl PermutationProblem for Displacement {
//! #     fn permutation(&self) -> &Permutation { &self.0 }
//! #     fn permutation_mut(&mut self) -> &mut Permutation { &mut self.0 }
//! # }
//!
//! let rng = StdRng::seed_from_u64(0);
//! let mut manager: SwapNeighborhood<Displacement, _> = SwapNeighborhood::new(10, rng);
//! ```
//!
//! #### 3. Record the best solution seen with [`BestEverSolution`][recorder::BestEverSolution],
//! and drive the search with [`AbstractSearch`][search::AbstractSearch]. A concrete strategy
//! (e.g. a take-first local search) owns the outer loop; see the `abstract_search` module tests
//! for a complete minimal strategy.

pub mod error;
pub mod manager;
pub mod moves;
pub mod observer;
pub mod recorder;
pub mod search;
pub mod solution;
