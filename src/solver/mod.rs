//! Solvers that turn the candidate pairing graph into a matching.
//!
//! A solver consumes [`Grid::enumerate_pairs`], [`Grid::pair_cost`] and
//! [`Grid::is_forbidden`] and returns a [`Matching`] of disjoint pairs.
//!
//! ## Scoring
//!
//! The score of a matching is the sum of its pair costs plus the values of
//! every non-forbidden cell left unpaired. Lower is better.
//!
//! ## Example
//!
//! ```rust
//! use grid_pairing::parsing::grid::parse_grid_text;
//! use grid_pairing::solver::{GreedySolver, Solver};
//!
//! let grid = parse_grid_text("1 2\n0 0\n3 5\n", true).unwrap();
//! let matching = GreedySolver::new().solve(&grid);
//!
//! assert_eq!(matching.len(), 1);
//! assert_eq!(matching.score(&grid), 2);
//! ```

pub mod greedy;
pub mod matching;

pub use greedy::{EmptySolver, GreedyConfig, GreedySolver};
pub use matching::{Matching, MatchingError};

use crate::core::grid::Grid;

/// Strategy for choosing pairs on a grid
pub trait Solver {
    /// Short name used in reports
    fn name(&self) -> &'static str;

    /// Compute a matching; the result must pass [`Matching::validate`]
    fn solve(&self, grid: &Grid) -> Matching;
}

/// Solvers selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SolverKind {
    /// Pair nothing
    Empty,
    /// Take pairs by decreasing gain
    #[default]
    Greedy,
}

impl SolverKind {
    #[must_use]
    pub fn build(self, config: GreedyConfig) -> Box<dyn Solver> {
        match self {
            Self::Empty => Box::new(EmptySolver),
            Self::Greedy => Box::new(GreedySolver::with_config(config)),
        }
    }
}
