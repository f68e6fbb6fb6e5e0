use std::collections::HashSet;
use tracing::debug;

use crate::core::grid::Grid;
use crate::core::types::Pair;
use crate::solver::matching::Matching;
use crate::solver::Solver;

/// Default minimum gain a pair must bring to be selected
pub const DEFAULT_MIN_GAIN: i64 = 0;

/// Configuration for the greedy solver
#[derive(Debug, Clone)]
pub struct GreedyConfig {
    /// Pairs whose gain does not exceed this are never selected
    pub min_gain: i64,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            min_gain: DEFAULT_MIN_GAIN,
        }
    }
}

/// Selects no pairs at all; the baseline every other solver should beat
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySolver;

impl Solver for EmptySolver {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn solve(&self, _grid: &Grid) -> Matching {
        Matching::default()
    }
}

/// Picks pairs by decreasing gain while both cells are still free
///
/// Pairing two cells removes both values from the score and adds the pair
/// cost, so the gain of a pair is `v1 + v2 - |v1 - v2|`, i.e. twice the
/// smaller value. No optimality is claimed.
#[derive(Debug, Clone, Default)]
pub struct GreedySolver {
    config: GreedyConfig,
}

impl GreedySolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: GreedyConfig) -> Self {
        Self { config }
    }
}

/// Score reduction obtained by selecting a pair
#[must_use]
pub fn pair_gain(grid: &Grid, pair: &Pair) -> i64 {
    grid.value(pair.first)
        .min(grid.value(pair.second))
        .saturating_mul(2)
}

impl Solver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, grid: &Grid) -> Matching {
        let mut candidates: Vec<(i64, Pair)> = grid
            .enumerate_pairs()
            .into_iter()
            .map(|p| (pair_gain(grid, &p), p))
            .filter(|(gain, _)| *gain > self.config.min_gain)
            .collect();

        // Stable sort keeps enumeration order among equal gains
        candidates.sort_by(|a, b| b.0.cmp(&a.0));

        debug!(
            "Greedy solver considering {} candidate pairs",
            candidates.len()
        );

        let mut used = HashSet::new();
        let mut pairs = Vec::new();
        for (_, pair) in candidates {
            if used.contains(&pair.first) || used.contains(&pair.second) {
                continue;
            }
            used.insert(pair.first);
            used.insert(pair.second);
            pairs.push(pair);
        }

        Matching::new(pairs)
    }
}
