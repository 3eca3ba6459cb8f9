//! This module contains the [`Permutation`] skeleton, a bare permutation of `{0, ..., n-1}`
//! meant to be embedded by a problem-specific solution type, and the [`PermutationProblem`]
//! trait which such a solution type implements on top of [`FeasibleSolution`].

use rand::Rng;

use super::FeasibleSolution;

/// A permutation of `{0, ..., n-1}`, with no notion of cost attached to it.
///
/// Problem-specific solution types embed a `Permutation` as a field and implement
/// [`PermutationProblem`] by delegating `size`/`swap`/`permutation` to it; the default
/// [`PermutationProblem`] methods do exactly that delegation, so a problem only has to override
/// them if it wants to keep some derived state (e.g. a running cost) in sync with every swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    order: Vec<usize>,
}

impl Permutation {
    /// Creates the identity permutation `[0, 1, ..., n-1]`.
    pub fn identity(n: usize) -> Self {
        Permutation {
            order: (0..n).collect(),
        }
    }

    /// Creates a permutation from an already-permuted sequence.
    ///
    /// # Panics
    /// Panics if `order` is not a permutation of `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Self {
        let n = order.len();
        let mut seen = vec![false; n];
        for &value in &order {
            assert!(value < n, "permutation entry {value} out of range for size {n}");
            assert!(!seen[value], "permutation entry {value} repeated");
            seen[value] = true;
        }
        Permutation { order }
    }

    /// The size `n` of the permutation.
    pub fn size(&self) -> usize {
        self.order.len()
    }

    /// Read-only access to the permutation's entries.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Swaps the elements at positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.order.swap(i, j);
    }

    /// Inverts the subsequence `order[p1..=p2]`.
    ///
    /// If `p1 <= p2` the subsequence from `p1` to `p2` (inclusive) is reversed in place. If
    /// `p1 > p2` the subsequence wraps around the end of the permutation: positions
    /// `p1, p1+1, ..., n-1, 0, ..., p2` (in that cyclic order) are reversed among themselves. This
    /// is the wrap-around policy flagged as an open question in the design notes; it is chosen
    /// here because it lets `invert_subsequence` be used symmetrically regardless of whether the
    /// caller happens to pick `p1 < p2` or `p1 > p2` for a given pair of cut points.
    pub fn invert_subsequence(&mut self, p1: usize, p2: usize) {
        let n = self.order.len();
        if n < 2 {
            return;
        }
        let span = if p1 <= p2 {
            p2 - p1 + 1
        } else {
            n - p1 + p2 + 1
        };
        let mut lo = p1;
        let mut hi = p2;
        for _ in 0..span / 2 {
            self.order.swap(lo, hi);
            lo = (lo + 1) % n;
            hi = (hi + n - 1) % n;
        }
    }

    /// Resets `self` to the identity permutation.
    pub fn initialize_identity(&mut self) {
        for (i, slot) in self.order.iter_mut().enumerate() {
            *slot = i;
        }
    }

    /// Shuffles the permutation uniformly at random using the given RNG (Fisher-Yates).
    pub fn random_shuffle(&mut self, rng: &mut impl Rng) {
        let n = self.order.len();
        for i in (1..n).rev() {
            let j = rng.gen_range(0..=i);
            self.order.swap(i, j);
        }
    }

    /// Performs `k` independent random swaps, redrawing the second index until it differs from
    /// the first. At most `2k` positions differ from the permutation before this call.
    pub fn perturbate(&mut self, k: usize, rng: &mut impl Rng) {
        let n = self.order.len();
        if n < 2 {
            return;
        }
        for _ in 0..k {
            let i = rng.gen_range(0..n);
            let mut j = rng.gen_range(0..n);
            while j == i {
                j = rng.gen_range(0..n);
            }
            self.swap(i, j);
        }
    }
}

/// A [`FeasibleSolution`] specialization holding a permutation of `{0, ..., n-1}`.
///
/// Default method bodies delegate to an embedded [`Permutation`] (via
/// [`permutation`][PermutationProblem::permutation] /
/// [`permutation_mut`][PermutationProblem::permutation_mut]); override `swap` directly if the
/// problem needs to keep derived state (e.g. a running cost) in sync with every swap rather than
/// recomputing it from scratch.
pub trait PermutationProblem: FeasibleSolution {
    /// Read-only access to the underlying permutation.
    fn permutation(&self) -> &Permutation;

    /// Mutable access to the underlying permutation.
    fn permutation_mut(&mut self) -> &mut Permutation;

    /// The size `n` of the permutation.
    fn size(&self) -> usize {
        self.permutation().size()
    }

    /// Resets the permutation to the identity.
    fn initialize_identity(&mut self) {
        self.permutation_mut().initialize_identity();
    }

    /// Swaps the elements at positions `i` and `j`.
    fn swap(&mut self, i: usize, j: usize) {
        self.permutation_mut().swap(i, j);
    }

    /// Shuffles the permutation uniformly at random.
    fn random_shuffle(&mut self, rng: &mut impl Rng) {
        self.permutation_mut().random_shuffle(rng);
    }

    /// Performs `k` random swaps, each with distinct indices.
    fn perturbate(&mut self, k: usize, rng: &mut impl Rng) {
        self.permutation_mut().perturbate(k, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_permutation(order: &[usize]) -> bool {
        let n = order.len();
        let mut seen = vec![false; n];
        for &value in order {
            if value >= n || seen[value] {
                return false;
            }
            seen[value] = true;
        }
        true
    }

    #[test]
    fn identity_is_0_to_n_minus_1() {
        let p = Permutation::identity(5);
        assert_eq!(p.order(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn swap_keeps_permutation_property() {
        let mut p = Permutation::identity(4);
        p.swap(1, 3);
        assert_eq!(p.order(), &[0, 3, 2, 1]);
        assert!(is_permutation(p.order()));
    }

    #[test]
    fn random_shuffle_preserves_multiset() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut p = Permutation::identity(20);
        p.random_shuffle(&mut rng);
        assert!(is_permutation(p.order()));
    }

    #[test]
    fn perturbate_changes_at_most_2k_positions() {
        let mut rng = StdRng::seed_from_u64(7);
        let before = Permutation::identity(10);
        let mut after = before.clone();
        let k = 3;
        after.perturbate(k, &mut rng);
        assert!(is_permutation(after.order()));
        let changed = before
            .order()
            .iter()
            .zip(after.order().iter())
            .filter(|(a, b)| a != b)
            .count();
        assert!(changed <= 2 * k);
    }

    #[test]
    fn invert_subsequence_without_wrap() {
        let mut p = Permutation::from_order(vec![0, 1, 2, 3, 4]);
        p.invert_subsequence(1, 3);
        assert_eq!(p.order(), &[0, 3, 2, 1, 4]);
    }

    #[test]
    fn invert_subsequence_wraps_when_p1_greater_than_p2() {
        let mut p = Permutation::from_order(vec![0, 1, 2, 3, 4]);
        // positions 3,4,0 (cyclic) reversed among themselves: [3,4,0] -> [0,4,3].
        p.invert_subsequence(3, 0);
        assert_eq!(p.order(), &[3, 1, 2, 0, 4]);
    }
}
