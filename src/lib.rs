//! # grid-pairing
//!
//! A library for deriving admissible pairings on a rectangular grid of
//! colored, valued cells.
//!
//! Each cell carries a color from a fixed five-entry palette and an integer
//! value. Two orthogonally adjacent cells may be paired when they share a
//! color and neither is black; the cost of a pair is the absolute difference
//! of the two values. A solver then picks disjoint pairs to minimize the
//! score: pair costs plus the values of the cells left unpaired.
//!
//! ## Features
//!
//! - **Grid model**: Immutable row-major color and value storage
//! - **Text format**: Parse and write the `rows cols` / colors / values format
//! - **Pair enumeration**: Every admissible pair exactly once, in scan order
//! - **Solvers**: An empty baseline and a greedy solver behind a common trait
//! - **Rendering**: Draw a grid to any writer, optionally with ANSI colors
//!
//! ## Example
//!
//! ```rust
//! use grid_pairing::{Grid, Pair};
//! use grid_pairing::parsing::grid::parse_grid_text;
//!
//! let grid = parse_grid_text("2 3\n0 0 1\n0 1 1\n", false).unwrap();
//!
//! let pairs = grid.enumerate_pairs();
//! assert!(pairs.contains(&Pair::new((0, 0), (0, 1))));
//! assert!(pairs.iter().all(|p| grid.pair_cost(p) == 0));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Grid, palette, cell and pair types
//! - [`parsing`]: Reader and writer for the textual grid format
//! - [`solver`]: Solver trait, matchings and scoring
//! - [`render`]: Rendering capability
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod render;
pub mod solver;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::grid::{Grid, GridError};
pub use crate::core::types::*;
pub use parsing::grid::ParseError;
pub use solver::{Matching, Solver};
