//! Error types that cross the crate's public boundary.
//!
//! Only two conditions are ever returned as a [`Result::Err`] from [`crate::solve`] or
//! [`crate::generate`]: the puzzle has no solution, or the caller handed over malformed
//! input. A third condition exists in the design this crate implements — an invariant
//! violation, meaning the placer observed a state the grammar should have made
//! impossible — but that one is deliberately *not* a variant here. It is raised as a
//! panic (see the `panic!` call sites in [`crate::board`]) so that it can never be
//! pattern-matched away by a caller.
use thiserror::Error;

/// Errors surfaced by [`crate::solve`] and [`crate::generate`].
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// The search backtracked past its last candidate: no board satisfies the given
    /// hints, clues and ship multiset.
    #[error("no solution satisfies the given hints, clues and ship multiset")]
    NoSolution,

    /// The caller's input was malformed independently of whether a solution exists:
    /// bad dimensions, mismatched clue lengths, an out-of-board hint, contradictory
    /// hints at the same cell, or a ship multiset that cannot possibly fit the board.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
