//! This module contains [`SwapNeighborhood`], a stochastic [`MoveManager`] that publishes a
//! fixed-size sample of random swaps on every refresh.

use rand::Rng;

use super::MoveManager;
use crate::moves::{ManaMove, SwapElements};
use crate::solution::PermutationProblem;

/// A stochastic [`MoveManager`] over [`SwapElements`] moves.
///
/// On [`refresh`][MoveManager::refresh], the neighborhood is resized to exactly `count` swaps.
/// Each slot is reused across refreshes (rather than reallocated) and assigned a freshly drawn
/// pair `(i, j)` with `i != j`, both in `[0, solution.size())`. The manager may draw the same pair
/// for more than one slot in a single refresh (duplicates across slots are accepted by design;
/// strategies that require distinct moves must dedupe themselves). A solution of size `< 2` has no
/// valid swap at all, so the published neighborhood is empty regardless of `count`.
pub struct SwapNeighborhood<S, R> {
    moves: Vec<SwapElements<S>>,
    count: usize,
    rng: R,
}

impl<S, R: Rng> SwapNeighborhood<S, R> {
    /// Creates a manager that publishes `count` random swaps per refresh, drawn from `rng`.
    pub fn new(count: usize, rng: R) -> Self {
        SwapNeighborhood {
            moves: Vec::with_capacity(count),
            count,
            rng,
        }
    }
}

impl<S, R> MoveManager<S> for SwapNeighborhood<S, R>
where
    S: PermutationProblem + Clone + Send + Sync + 'static,
    R: Rng,
{
    fn refresh(&mut self, solution: &S) {
        let n = solution.size();
        if n < 2 {
            self.moves.clear();
            return;
        }
        self.moves
            .resize_with(self.count, || SwapElements::new(0, 0));
        for slot in self.moves.iter_mut() {
            let i = self.rng.gen_range(0..n);
            let mut j = self.rng.gen_range(0..n);
            while j == i {
                j = self.rng.gen_range(0..n);
            }
            *slot = SwapElements::new(i, j);
        }
    }

    fn len(&self) -> usize {
        self.moves.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn ManaMove<S>> + '_> {
        Box::new(self.moves.iter().map(|mv| mv as &dyn ManaMove<S>))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::{FeasibleSolution, Permutation};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone)]
    struct Seq(Permutation);

    impl FeasibleSolution for Seq {
        type Cost = i64;
        fn cost(&self) -> i64 {
            0
        }
        fn copy_from(&mut self, other: &Self) {
            self.0 = other.0.clone();
        }
    }

    impl PermutationProblem for Seq {
        fn permutation(&self) -> &Permutation {
            &self.0
        }
        fn permutation_mut(&mut self) -> &mut Permutation {
            &mut self.0
        }
    }

    #[test]
    fn refresh_publishes_exactly_m_valid_moves() {
        let rng = StdRng::seed_from_u64(11);
        let mut manager: SwapNeighborhood<Seq, _> = SwapNeighborhood::new(5, rng);
        let solution = Seq(Permutation::identity(10));
        manager.refresh(&solution);
        assert_eq!(manager.len(), 5);
        for mv in manager.iter() {
            let swap = mv
                .as_any()
                .downcast_ref::<SwapElements<Seq>>()
                .expect("manager only ever publishes SwapElements");
            assert_ne!(swap.p1(), swap.p2());
            assert!(swap.p2() < 10);
        }
    }

    #[test]
    fn repeated_refreshes_change_the_neighborhood() {
        let rng = StdRng::seed_from_u64(99);
        let mut manager: SwapNeighborhood<Seq, _> = SwapNeighborhood::new(5, rng);
        let solution = Seq(Permutation::identity(10));
        manager.refresh(&solution);
        let first: Vec<_> = manager
            .iter()
            .map(|mv| mv.as_any().downcast_ref::<SwapElements<Seq>>().cloned())
            .collect();
        manager.refresh(&solution);
        let second: Vec<_> = manager
            .iter()
            .map(|mv| mv.as_any().downcast_ref::<SwapElements<Seq>>().cloned())
            .collect();
        assert_eq!(manager.len(), 5);
        assert_ne!(first, second);
    }

    #[test]
    fn refresh_publishes_an_empty_neighborhood_for_a_degenerate_solution() {
        let rng = StdRng::seed_from_u64(3);
        let mut manager: SwapNeighborhood<Seq, _> = SwapNeighborhood::new(5, rng);
        let solution = Seq(Permutation::identity(1));
        manager.refresh(&solution);
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
    }
}
