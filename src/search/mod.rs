//! This module contains [`AbstractSearch`], the shared state and plumbing every concrete search
//! strategy (tabu search, simulated annealing, local-search descent, ...) builds on: a working
//! solution, a move manager, a solution recorder, the currently-applied move, a step code, and
//! listener notification.
//!
//! Concrete strategies are *not* part of this crate's public surface (see the crate-level
//! documentation); they are responsible for the outer loop, the move-selection policy, the
//! acceptance policy, and termination, and raise [`NoMovesError`] themselves when
//! [`MoveManager::refresh`] leaves the neighborhood empty.

use std::rc::Rc;

use crate::error::NoMovesError;
use crate::manager::MoveManager;
use crate::moves::ManaMove;
use crate::observer::{ListenerId, SearchListener, SearchProgress, Subject};
use crate::recorder::SolutionRecorder;
use crate::solution::FeasibleSolution;

/// The step code published by [`AbstractSearch`] after each iteration.
///
/// `Initialized` is this crate's own addition for the state before the first move is applied;
/// `MoveMade` and `ImprovementMade` are the two codes spec.md requires "at minimum".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCode {
    /// No move has been applied yet.
    Initialized,
    /// A move was applied this iteration.
    MoveMade,
    /// A move was applied and the recorder reported it as an improvement.
    ImprovementMade,
}

/// Aggregates the state shared by every concrete search strategy: the working solution (owned
/// exclusively by the search for the duration of the search, per the resource model), a borrowed
/// move manager and solution recorder, the currently-applied move, the step code, and listener
/// notification.
pub struct AbstractSearch<'a, S: FeasibleSolution> {
    working_solution: S,
    manager: &'a mut dyn MoveManager<S>,
    recorder: &'a mut dyn SolutionRecorder<S>,
    current_move: Option<Box<dyn ManaMove<S>>>,
    step: StepCode,
    iteration_count: u32,
    listeners: Subject<AbstractSearch<'a, S>>,
}

impl<'a, S: FeasibleSolution> AbstractSearch<'a, S> {
    /// Creates a search driver over `initial_solution`, borrowing `manager` and `recorder` for
    /// the duration of the search.
    pub fn new(
        initial_solution: S,
        manager: &'a mut dyn MoveManager<S>,
        recorder: &'a mut dyn SolutionRecorder<S>,
    ) -> Self {
        AbstractSearch {
            working_solution: initial_solution,
            manager,
            recorder,
            current_move: None,
            step: StepCode::Initialized,
            iteration_count: 0,
            listeners: Subject::new(),
        }
    }

    /// The current working solution.
    pub fn working_solution(&self) -> &S {
        &self.working_solution
    }

    /// Consumes the search, returning the final working solution.
    pub fn into_working_solution(self) -> S {
        self.working_solution
    }

    /// Mutable access to the move manager, used by a concrete strategy to refresh and scan the
    /// neighborhood.
    pub fn manager_mut(&mut self) -> &mut dyn MoveManager<S> {
        self.manager
    }

    /// The move applied by the most recent call to [`apply_move`][Self::apply_move], if any.
    pub fn current_move(&self) -> Option<&dyn ManaMove<S>> {
        self.current_move.as_deref()
    }

    /// The step code published after the most recent iteration.
    pub fn step(&self) -> StepCode {
        self.step
    }

    /// The number of moves applied so far.
    pub fn iteration(&self) -> u32 {
        self.iteration_count
    }

    /// Refreshes the move manager's neighborhood against the current working solution. Returns
    /// [`NoMovesError`] if the refreshed neighborhood is empty.
    pub fn refresh_neighborhood(&mut self) -> Result<(), NoMovesError> {
        self.manager.refresh(&self.working_solution);
        if self.manager.is_empty() {
            Err(NoMovesError)
        } else {
            Ok(())
        }
    }

    /// Applies `mv` to the working solution, offers the result to the recorder, advances the
    /// iteration counter and step code, and notifies listeners. Returns whether the recorder
    /// reported an improvement.
    pub fn apply_move(&mut self, mv: Box<dyn ManaMove<S>>) -> bool {
        mv.apply(&mut self.working_solution);
        let improved = self.recorder.accept(&self.working_solution);
        self.current_move = Some(mv);
        self.iteration_count += 1;
        self.step = if improved {
            StepCode::ImprovementMade
        } else {
            StepCode::MoveMade
        };
        self.notify();
        improved
    }

    /// Attaches a listener, returning an id usable with [`detach`][Self::detach].
    pub fn attach(&self, listener: Rc<dyn SearchListener<Self>>) -> ListenerId {
        self.listeners.attach(listener)
    }

    /// Detaches a previously attached listener.
    pub fn detach(&self, id: ListenerId) {
        self.listeners.detach(id);
    }

    /// Notifies every attached listener, in attachment order, exactly once.
    pub fn notify(&self) {
        self.listeners.notify(self);
    }
}

impl<'a, S: FeasibleSolution> SearchProgress for AbstractSearch<'a, S> {
    fn iteration(&self) -> u32 {
        self.iteration_count
    }

    fn step_description(&self) -> String {
        format!("{:?}", self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::ConstantNeighborhood;
    use crate::moves::SwapElements;
    use crate::recorder::BestEverSolution;
    use crate::solution::{Permutation, PermutationProblem};
    use std::cell::RefCell;

    #[derive(Debug, Clone)]
    struct Seq(Permutation);

    impl FeasibleSolution for Seq {
        type Cost = i64;
        fn cost(&self) -> i64 {
            self.0
                .order()
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as i64 - v as i64).abs())
                .sum()
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

    struct CountingListener(RefCell<u32>);

    impl<'a> SearchListener<AbstractSearch<'a, Seq>> for CountingListener {
        fn update(&self, _subject: &AbstractSearch<'a, Seq>) {
            *self.0.borrow_mut() += 1;
        }
    }

    /// A minimal "take any improving swap" strategy, used only to exercise [`AbstractSearch`]
    /// end to end; it is not part of the crate's public surface.
    fn run_minimal_strategy(
        search: &mut AbstractSearch<'_, Seq>,
        moves: Vec<Box<dyn ManaMove<Seq>>>,
        max_iterations: u32,
    ) -> Result<(), NoMovesError> {
        for _ in 0..max_iterations {
            search.refresh_neighborhood()?;
            let mv = moves
                .iter()
                .min_by(|a, b| {
                    a.evaluate(search.working_solution())
                        .partial_cmp(&b.evaluate(search.working_solution()))
                        .unwrap()
                })
                .expect("neighborhood checked non-empty by refresh_neighborhood")
                .box_clone();
            search.apply_move(mv);
        }
        Ok(())
    }

    #[test]
    fn empty_manager_raises_no_moves_error() {
        let mut manager: ConstantNeighborhood<Seq> = ConstantNeighborhood::empty();
        let mut best = Seq(Permutation::identity(4));
        let mut recorder = BestEverSolution::new(&mut best);
        let mut search = AbstractSearch::new(Seq(Permutation::identity(4)), &mut manager, &mut recorder);
        assert_eq!(search.refresh_neighborhood(), Err(NoMovesError));
    }

    #[test]
    fn listener_receives_exactly_one_update_per_iteration() {
        let moves: Vec<Box<dyn ManaMove<Seq>>> = vec![
            Box::new(SwapElements::new(0, 3)),
            Box::new(SwapElements::new(1, 2)),
        ];
        let mut manager = ConstantNeighborhood::new(moves.clone());
        let mut best = Seq(Permutation::identity(4));
        let mut recorder = BestEverSolution::new(&mut best);
        let mut search = AbstractSearch::new(Seq(Permutation::identity(4)), &mut manager, &mut recorder);

        let counter = Rc::new(CountingListener(RefCell::new(0)));
        search.attach(counter.clone());

        run_minimal_strategy(&mut search, moves, 100).unwrap();

        assert_eq!(*counter.0.borrow(), 100);
        assert_eq!(search.iteration(), 100);
    }
}
