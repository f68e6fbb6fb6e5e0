//! Parsers for the textual grid format.
//!
//! ## Format
//!
//! | Lines | Content | Required |
//! |-------|---------|----------|
//! | 1 | `rows cols` | Yes |
//! | 2 ..= rows + 1 | `cols` color indices in [0, 4] per line | Yes |
//! | rows + 2 ..= 2 * rows + 1 | `cols` integer values per line | Only with `read_values` |
//!
//! Tokens are whitespace-separated and each grid row occupies exactly one line.
//!
//! ## Example
//!
//! ```rust
//! use grid_pairing::parsing::grid::{parse_grid_text, to_grid_text};
//!
//! let grid = parse_grid_text("2 3\n0 0 1\n0 1 1\n", false).unwrap();
//! assert_eq!(grid.enumerate_pairs().len(), 4);
//! assert_eq!(to_grid_text(&grid, false), "2 3\n0 0 1\n0 1 1\n");
//! ```

pub mod grid;
