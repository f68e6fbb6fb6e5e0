use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::core::grid::Grid;
use crate::core::types::{Cell, Pair};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    #[error("Pair {0} is not an admissible pairing for this grid")]
    IllegalPair(Pair),

    #[error("Cell {0} is used by more than one pair")]
    CellReused(Cell),
}

/// A set of disjoint pairs chosen by a solver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Matching {
    pub pairs: Vec<Pair>,
}

impl Matching {
    #[must_use]
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Cells covered by some pair
    #[must_use]
    pub fn matched_cells(&self) -> HashSet<Cell> {
        self.pairs
            .iter()
            .flat_map(|p| [p.first, p.second])
            .collect()
    }

    /// Check that every pair is admissible and no cell is used twice
    ///
    /// # Errors
    ///
    /// Returns `MatchingError::IllegalPair` for a pair that is not produced by
    /// [`Grid::enumerate_pairs`] in either orientation, or
    /// `MatchingError::CellReused` if two pairs share a cell.
    pub fn validate(&self, grid: &Grid) -> Result<(), MatchingError> {
        let admissible: HashSet<Pair> = grid.enumerate_pairs().into_iter().collect();
        let mut used = HashSet::new();

        for pair in &self.pairs {
            if !admissible.contains(&pair.canonical()) {
                return Err(MatchingError::IllegalPair(*pair));
            }
            for cell in [pair.first, pair.second] {
                if !used.insert(cell) {
                    return Err(MatchingError::CellReused(cell));
                }
            }
        }

        Ok(())
    }

    /// Sum of the costs of all pairs
    #[must_use]
    pub fn cost(&self, grid: &Grid) -> u64 {
        self.pairs
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(grid.pair_cost(p)))
    }

    /// Score of the matching; lower is better
    ///
    /// The sum of pair costs plus the values of every non-forbidden cell left
    /// out of all pairs.
    #[must_use]
    pub fn score(&self, grid: &Grid) -> i64 {
        let matched = self.matched_cells();
        let unmatched: i64 = grid
            .cells()
            .filter(|c| !grid.is_forbidden(*c) && !matched.contains(c))
            .fold(0i64, |acc, c| acc.saturating_add(grid.value(c)));

        unmatched.saturating_add_unsigned(self.cost(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valued_grid() -> Grid {
        Grid::from_cells(
            2,
            3,
            vec![vec![0, 0, 4], vec![1, 1, 0]],
            vec![vec![5, 8, 100], vec![2, 3, 4]],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_matching_score() {
        let grid = valued_grid();
        let matching = Matching::default();
        assert!(matching.validate(&grid).is_ok());
        // Black cell (0, 2) never counts
        assert_eq!(matching.score(&grid), 5 + 8 + 2 + 3 + 4);
        assert_eq!(matching.cost(&grid), 0);
    }

    #[test]
    fn test_score_with_pairs() {
        let grid = valued_grid();
        let matching = Matching::new(vec![Pair::new((0, 0), (0, 1)), Pair::new((1, 0), (1, 1))]);
        assert!(matching.validate(&grid).is_ok());
        assert_eq!(matching.cost(&grid), 3 + 1);
        assert_eq!(matching.score(&grid), 3 + 1 + 4);
    }

    #[test]
    fn test_reversed_pair_is_valid() {
        let grid = valued_grid();
        let matching = Matching::new(vec![Pair::new((0, 1), (0, 0))]);
        assert!(matching.validate(&grid).is_ok());
    }

    #[test]
    fn test_illegal_pair() {
        let grid = valued_grid();
        // Different colors
        let matching = Matching::new(vec![Pair::new((0, 0), (1, 0))]);
        assert_eq!(
            matching.validate(&grid),
            Err(MatchingError::IllegalPair(Pair::new((0, 0), (1, 0))))
        );
        // Not adjacent
        let matching = Matching::new(vec![Pair::new((0, 0), (1, 2))]);
        assert!(matches!(
            matching.validate(&grid),
            Err(MatchingError::IllegalPair(_))
        ));
    }

    #[test]
    fn test_cell_reused() {
        let grid = Grid::new(1, 3).unwrap();
        let matching = Matching::new(vec![Pair::new((0, 0), (0, 1)), Pair::new((0, 1), (0, 2))]);
        assert_eq!(
            matching.validate(&grid),
            Err(MatchingError::CellReused(Cell::new(0, 1)))
        );
    }
}
