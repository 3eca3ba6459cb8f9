//! This module contains the [`MoveManager`] trait, which materializes and refreshes the
//! *neighborhood* (the set of moves applicable to the current solution at an iteration), and two
//! implementations: [`ConstantNeighborhood`] (a fixed list of moves) and the stochastic
//! [`SwapNeighborhood`].

mod swap_neighborhood;

pub use swap_neighborhood::SwapNeighborhood;

use crate::moves::ManaMove;
use crate::solution::FeasibleSolution;

/// Owns the current neighborhood (an ordered sequence of moves) for solutions of type `S`.
///
/// `refresh` is called by the search driver before each scan of the neighborhood; a manager with
/// a fixed move list (e.g. [`ConstantNeighborhood`]) implements it as a no-op. The manager owns
/// the moves it publishes: a move reference handed out by [`iter`][MoveManager::iter] is only
/// valid until the next call to `refresh`.
pub trait MoveManager<S: FeasibleSolution> {
    /// Refreshes the neighborhood against `solution`. Before the first call, the neighborhood is
    /// empty (i.e. `len() == 0`) for managers that build their list lazily.
    fn refresh(&mut self, solution: &S);

    /// The number of moves currently in the neighborhood.
    fn len(&self) -> usize;

    /// Whether the neighborhood is currently empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the current neighborhood in the manager's insertion order.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn ManaMove<S>> + '_>;
}

/// A [`MoveManager`] whose neighborhood is fixed at construction time; `refresh` is a no-op.
pub struct ConstantNeighborhood<S: FeasibleSolution> {
    moves: Vec<Box<dyn ManaMove<S>>>,
}

impl<S: FeasibleSolution> ConstantNeighborhood<S> {
    /// Creates a manager with the given fixed list of moves.
    pub fn new(moves: Vec<Box<dyn ManaMove<S>>>) -> Self {
        ConstantNeighborhood { moves }
    }

    /// Creates a manager with an empty neighborhood; useful to exercise `no_moves_error` paths.
    pub fn empty() -> Self {
        ConstantNeighborhood { moves: Vec::new() }
    }
}

impl<S: FeasibleSolution> MoveManager<S> for ConstantNeighborhood<S> {
    fn refresh(&mut self, _solution: &S) {}

    fn len(&self) -> usize {
        self.moves.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn ManaMove<S>> + '_> {
        Box::new(self.moves.iter().map(|mv| mv.as_ref()))
    }
}
