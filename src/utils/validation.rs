//! Centralized validation and helper functions.

/// Maximum number of cells allowed in a single grid (DOS protection)
pub const MAX_GRID_CELLS: usize = 1_000_000;

/// Check whether a grid of the given dimensions fits within [`MAX_GRID_CELLS`].
///
/// Call this BEFORE allocating any cell storage.
/// Returns an error message if the grid is too large, None if safe to allocate.
///
/// # Examples
///
/// ```
/// use grid_pairing::utils::validation::check_grid_size;
///
/// assert!(check_grid_size(100, 100).is_none());
/// assert!(check_grid_size(usize::MAX, 2).is_some());
/// ```
#[must_use]
pub fn check_grid_size(rows: usize, cols: usize) -> Option<String> {
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_GRID_CELLS => None,
        _ => Some(format!(
            "Grid of {rows} x {cols} exceeds maximum of {MAX_GRID_CELLS} cells"
        )),
    }
}

/// Split a line into whitespace-separated integer tokens.
///
/// Returns the offending token on failure.
pub fn parse_int_tokens(line: &str) -> Result<Vec<i64>, String> {
    line.split_whitespace()
        .map(|token| token.parse::<i64>().map_err(|_| token.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_limit() {
        assert!(check_grid_size(1, 1).is_none());
        assert!(check_grid_size(1000, 1000).is_none());
        assert!(check_grid_size(1000, 1001).is_some());
        assert!(check_grid_size(usize::MAX, usize::MAX).is_some());
    }

    #[test]
    fn test_parse_int_tokens() {
        assert_eq!(parse_int_tokens(" 1\t-2  3 "), Ok(vec![1, -2, 3]));
        assert_eq!(parse_int_tokens(""), Ok(vec![]));
        assert_eq!(parse_int_tokens("1 x 3"), Err("x".to_string()));
    }
}
