use serde::Serialize;
use thiserror::Error;

use crate::core::types::{Cell, Color, Pair, PALETTE_SIZE};

/// Default value of a cell when no value grid is supplied
pub const DEFAULT_VALUE: i64 = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions {rows} x {cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("{what} grid has shape mismatch: {detail}")]
    ShapeMismatch { what: &'static str, detail: String },

    #[error("Invalid color {value} at cell ({row}, {col}): must be in [0, {PALETTE_SIZE})")]
    InvalidColor { row: usize, col: usize, value: u8 },
}

/// A rectangular grid of colored, valued cells
///
/// Dimensions, colors and values are fixed at construction. Storage is
/// row-major and owned by each grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    colors: Vec<Color>,
    values: Vec<i64>,
}

impl Grid {
    /// Create an all-white grid where every cell has value 1
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        let size = rows * cols;
        Ok(Self {
            rows,
            cols,
            colors: vec![Color::White; size],
            values: vec![DEFAULT_VALUE; size],
        })
    }

    /// Create a grid from explicit color indices and values, row by row
    ///
    /// An empty `colors` or `values` falls back to the defaults of [`Grid::new`].
    /// Non-empty arrays are validated eagerly.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` for a zero dimension,
    /// `GridError::ShapeMismatch` if a supplied array is not `rows` x `cols`,
    /// or `GridError::InvalidColor` for an index outside the palette.
    pub fn from_cells(
        rows: usize,
        cols: usize,
        colors: Vec<Vec<u8>>,
        values: Vec<Vec<i64>>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;

        if !colors.is_empty() {
            check_shape("Color", &colors, rows, cols)?;
            for (row, line) in colors.into_iter().enumerate() {
                for (col, index) in line.into_iter().enumerate() {
                    let color = Color::from_index(index).ok_or(GridError::InvalidColor {
                        row,
                        col,
                        value: index,
                    })?;
                    grid.colors[row * cols + col] = color;
                }
            }
        }

        if !values.is_empty() {
            check_shape("Value", &values, rows, cols)?;
            grid.values = values.into_iter().flatten().collect();
        }

        Ok(grid)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; grids have positive dimensions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    fn offset(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "cell {cell} outside {} x {} grid",
            self.rows,
            self.cols
        );
        cell.row * self.cols + cell.col
    }

    /// Color of a cell
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    #[must_use]
    pub fn color(&self, cell: Cell) -> Color {
        self.colors[self.offset(cell)]
    }

    /// Value of a cell
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    #[must_use]
    pub fn value(&self, cell: Cell) -> i64 {
        self.values[self.offset(cell)]
    }

    /// Color and value of a cell, or `None` when out of bounds
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<(Color, i64)> {
        let cell = Cell::new(row, col);
        self.contains(cell).then(|| {
            let offset = row * self.cols + col;
            (self.colors[offset], self.values[offset])
        })
    }

    /// Colors of one row, left to right
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below [`Grid::rows`].
    #[must_use]
    pub fn color_row(&self, row: usize) -> &[Color] {
        &self.colors[row * self.cols..(row + 1) * self.cols]
    }

    /// Values of one row, left to right
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below [`Grid::rows`].
    #[must_use]
    pub fn value_row(&self, row: usize) -> &[i64] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    /// In-bounds orthogonal neighbours, in the order up, down, left, right
    pub fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        let Cell { row, col } = cell;
        let (rows, cols) = (self.rows, self.cols);
        [
            row.checked_sub(1).map(|r| Cell::new(r, col)),
            (row + 1 < rows).then(|| Cell::new(row + 1, col)),
            col.checked_sub(1).map(|c| Cell::new(row, c)),
            (col + 1 < cols).then(|| Cell::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// True iff the cell is black. Forbidden cells never start a pair.
    #[must_use]
    pub fn is_forbidden(&self, cell: Cell) -> bool {
        self.color(cell) == Color::Black
    }

    /// Number of black cells
    #[must_use]
    pub fn forbidden_count(&self) -> usize {
        self.colors.iter().filter(|&&c| c == Color::Black).count()
    }

    /// Cost of a pair: absolute difference of the two cell values
    ///
    /// # Panics
    ///
    /// Panics if either cell is outside the grid.
    #[must_use]
    pub fn pair_cost(&self, pair: &Pair) -> u64 {
        self.value(pair.first).abs_diff(self.value(pair.second))
    }

    /// All admissible adjacent pairs
    ///
    /// Cells are scanned in row-major order. From each non-forbidden cell the
    /// neighbours are tried up, down, left, right; only neighbours the scan
    /// has not reached yet and that share the cell's color are emitted. Each
    /// unordered pair therefore appears exactly once, earlier cell first.
    #[must_use]
    pub fn enumerate_pairs(&self) -> Vec<Pair> {
        let mut pairs = Vec::new();

        for cell in self.cells() {
            if self.is_forbidden(cell) {
                continue;
            }
            let color = self.color(cell);
            for neighbour in self.neighbours(cell) {
                if neighbour > cell && self.color(neighbour) == color {
                    pairs.push(Pair {
                        first: cell,
                        second: neighbour,
                    });
                }
            }
        }

        pairs
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "The grid is {} x {}. It has the following colors:",
            self.rows, self.cols
        )?;
        for row in 0..self.rows {
            let symbols: Vec<String> = self
                .color_row(row)
                .iter()
                .map(|c| c.symbol().to_string())
                .collect();
            writeln!(f, "{}", symbols.join(" "))?;
        }
        writeln!(f, "and the following values:")?;
        for row in 0..self.rows {
            let values: Vec<String> = self.value_row(row).iter().map(i64::to_string).collect();
            writeln!(f, "{}", values.join(" "))?;
        }
        Ok(())
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

fn check_shape<T>(
    what: &'static str,
    lines: &[Vec<T>],
    rows: usize,
    cols: usize,
) -> Result<(), GridError> {
    if lines.len() != rows {
        return Err(GridError::ShapeMismatch {
            what,
            detail: format!("expected {rows} rows, found {}", lines.len()),
        });
    }
    if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
        return Err(GridError::ShapeMismatch {
            what,
            detail: format!("row {row} has {} entries, expected {cols}", line.len()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn scenario_grid() -> Grid {
        Grid::from_cells(2, 3, vec![vec![0, 0, 1], vec![0, 1, 1]], vec![]).unwrap()
    }

    #[test]
    fn test_default_grid() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.len(), 12);
        for cell in grid.cells() {
            assert_eq!(grid.color(cell), Color::White);
            assert_eq!(grid.value(cell), 1);
        }
    }

    #[test]
    fn test_defaults_are_not_shared() {
        let a = Grid::new(2, 2).unwrap();
        let b = Grid::from_cells(2, 2, vec![], vec![vec![5, 6], vec![7, 8]]).unwrap();
        assert_eq!(a.value(Cell::new(0, 0)), 1);
        assert_eq!(b.value(Cell::new(0, 0)), 5);
        assert_eq!(b.color(Cell::new(1, 1)), Color::White);
    }

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(GridError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert!(Grid::new(3, 0).is_err());
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Grid::from_cells(2, 2, vec![vec![0, 0], vec![0]], vec![]).unwrap_err();
        assert!(matches!(err, GridError::ShapeMismatch { what: "Color", .. }));

        let err = Grid::from_cells(2, 2, vec![], vec![vec![1, 1]]).unwrap_err();
        assert!(matches!(err, GridError::ShapeMismatch { what: "Value", .. }));
    }

    #[test]
    fn test_invalid_color_index() {
        let err = Grid::from_cells(1, 2, vec![vec![0, 5]], vec![]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidColor {
                row: 0,
                col: 1,
                value: 5
            }
        );
    }

    #[test]
    fn test_is_forbidden() {
        let grid = Grid::from_cells(1, 5, vec![vec![0, 1, 2, 3, 4]], vec![]).unwrap();
        for cell in grid.cells() {
            assert_eq!(grid.is_forbidden(cell), grid.color(cell).index() == 4);
        }
        assert_eq!(grid.forbidden_count(), 1);
    }

    #[test]
    fn test_pair_cost_symmetric() {
        let grid =
            Grid::from_cells(2, 2, vec![], vec![vec![-3, 7], vec![i64::MIN, i64::MAX]]).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        for &a in &cells {
            for &b in &cells {
                let pair = Pair::new(a, b);
                assert_eq!(grid.pair_cost(&pair), grid.pair_cost(&pair.reversed()));
            }
        }
        assert_eq!(grid.pair_cost(&Pair::new((0, 0), (0, 1))), 10);
        assert_eq!(grid.pair_cost(&Pair::new((1, 0), (1, 1))), u64::MAX);
    }

    #[test]
    fn test_neighbour_order() {
        let grid = Grid::new(3, 3).unwrap();
        let around: Vec<Cell> = grid.neighbours(Cell::new(1, 1)).collect();
        assert_eq!(
            around,
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2)
            ]
        );
        let corner: Vec<Cell> = grid.neighbours(Cell::new(2, 2)).collect();
        assert_eq!(corner, vec![Cell::new(1, 2), Cell::new(2, 1)]);
    }

    #[test]
    fn test_scenario_pairs() {
        let grid = scenario_grid();
        let pairs = grid.enumerate_pairs();

        assert!(pairs.contains(&Pair::new((0, 0), (0, 1))));
        assert!(pairs.contains(&Pair::new((1, 1), (1, 2))));
        assert!(pairs.contains(&Pair::new((0, 0), (1, 0))));
        assert!(pairs.contains(&Pair::new((0, 2), (1, 2))));
        assert!(!pairs
            .iter()
            .any(|p| p.canonical() == Pair::new((0, 1), (0, 2))));
        assert_eq!(pairs.len(), 4);

        for pair in &pairs {
            assert_eq!(grid.pair_cost(pair), 0);
            assert_eq!(grid.color(pair.first), grid.color(pair.second));
        }
    }

    #[test]
    fn test_pair_order_is_scan_order() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(
            grid.enumerate_pairs(),
            vec![
                Pair::new((0, 0), (1, 0)),
                Pair::new((0, 0), (0, 1)),
                Pair::new((0, 1), (1, 1)),
                Pair::new((1, 0), (1, 1)),
            ]
        );
    }

    #[test]
    fn test_pairs_are_unique_and_in_bounds() {
        let grid = Grid::from_cells(
            3,
            4,
            vec![vec![0, 0, 4, 2], vec![1, 0, 4, 2], vec![1, 1, 2, 2]],
            vec![],
        )
        .unwrap();
        let pairs = grid.enumerate_pairs();
        let unique: HashSet<Pair> = pairs.iter().map(|p| p.canonical()).collect();
        assert_eq!(unique.len(), pairs.len());

        for pair in &pairs {
            assert!(grid.contains(pair.first) && grid.contains(pair.second));
            assert!(!grid.is_forbidden(pair.first));
            assert!(!grid.is_forbidden(pair.second));
            assert_eq!(grid.color(pair.first), grid.color(pair.second));
            assert!(pair.first < pair.second);
        }
    }

    #[test]
    fn test_all_black_has_no_pairs() {
        let grid = Grid::from_cells(2, 2, vec![vec![4, 4], vec![4, 4]], vec![]).unwrap();
        assert!(grid.enumerate_pairs().is_empty());
    }

    #[test]
    fn test_single_cell() {
        let grid = Grid::new(1, 1).unwrap();
        assert!(grid.enumerate_pairs().is_empty());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = scenario_grid();
        assert_eq!(grid.get(1, 2), Some((Color::Red, 1)));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_rows_slices() {
        let grid = scenario_grid();
        assert_eq!(grid.color_row(1), &[Color::White, Color::Red, Color::Red]);
        assert_eq!(grid.value_row(0), &[1, 1, 1]);
    }

    #[test]
    #[should_panic]
    fn test_color_row_out_of_range() {
        let _ = scenario_grid().color_row(2);
    }

    #[test]
    #[should_panic]
    fn test_value_row_out_of_range() {
        let _ = scenario_grid().value_row(2);
    }

    #[test]
    fn test_display_dump() {
        let grid =
            Grid::from_cells(2, 2, vec![vec![0, 4], vec![2, 3]], vec![vec![1, 2], vec![3, 4]])
                .unwrap();
        let expected = "The grid is 2 x 2. It has the following colors:\n\
                        w k\n\
                        b g\n\
                        and the following values:\n\
                        1 2\n\
                        3 4\n";
        assert_eq!(grid.to_string(), expected);
    }
}
