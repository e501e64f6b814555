//! A constraint-propagation engine for the Battleship Solitaire puzzle family: solving a
//! fully specified instance and generating new ones from a target ship multiset.
//!
//! The crate is split into the pieces a wave-function-collapse search needs, leaves
//! first: [`grammar`] (the tile adjacency rules), [`board`] (the superposition grid and
//! its ship-instance bookkeeping), [`propagate`] (arc-consistency restoration),
//! [`constraints`] (row/column/ship-multiset predicates, soft and hard), [`hint`] (the
//! richer external hint alphabet), and finally [`solver`] and [`generator`], which wire
//! the rest together behind [`solve`] and [`generate`].
//!
//! This crate ships as a library only. Parsing a puzzle file, rendering a board, or
//! seeding an RNG policy are a caller's concerns.
pub mod board;
pub mod constraints;
pub mod error;
pub mod generator;
pub mod grammar;
pub mod hint;
pub mod label;
pub mod position;
pub mod propagate;
pub mod solver;
pub mod superposition;

pub use error::Error;
pub use generator::generate;
pub use hint::{Hint, HintLabel};
pub use label::Tile;
pub use solver::solve;
