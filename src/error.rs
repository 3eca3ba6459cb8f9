//! This module contains [`NoMovesError`], the only declared failure kind of a search invocation.

use std::fmt;

/// Raised by a concrete search strategy — never by the core traits themselves — when
/// [`MoveManager::refresh`][crate::manager::MoveManager::refresh] leaves the neighborhood empty
/// and the strategy cannot make a move.
///
/// Contract violations (e.g. a [`SwapElements`][crate::moves::SwapElements] offered to a
/// non-permutation solution, or an out-of-range index in a caller-constructed move) and numerical
/// artifacts (NaN/overflow in a cost function) are not represented as `Result`s: the former are
/// either compile errors (this crate uses generics, not downcasts, to pair moves with solution
/// types) or programmer errors, and the latter are outside the core's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMovesError;

impl fmt::Display for NoMovesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no moves available: the move manager published an empty neighborhood")
    }
}

impl std::error::Error for NoMovesError {}
