//! Parser and writer for the textual grid format.
//!
//! ```text
//! <rows> <cols>
//! <rows lines of cols color indices in [0, 4]>
//! [<rows lines of cols integer values>]
//! ```

use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::grid::{Grid, GridError};
use crate::core::types::{Color, PALETTE_SIZE};
use crate::utils::validation::{check_grid_size, parse_int_tokens};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Incorrect grid format: {0}")]
    Format(String),

    #[error("Invalid color {value} on line {line}, column {column}: must be in [0, {PALETTE_SIZE})")]
    InvalidColor {
        line: usize,
        column: usize,
        value: i64,
    },

    #[error("Grid too large: {0}")]
    TooLarge(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parse a grid file from disk, or from stdin when the path is `-`
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, or any error from
/// [`parse_grid_text`].
pub fn parse_grid_file(path: &Path, read_values: bool) -> Result<Grid, ParseError> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    debug!("Read {} bytes from {}", content.len(), path.display());
    parse_grid_text(&content, read_values)
}

/// Parse a grid from text
///
/// When `read_values` is false every cell gets the default value of 1.
/// Lines after the last expected row are ignored.
///
/// # Errors
///
/// Returns `ParseError::Format` if the header is not two positive integers,
/// a row is missing, a row does not hold exactly `cols` integer tokens;
/// `ParseError::InvalidColor` if a color is outside the palette; or
/// `ParseError::TooLarge` if the grid exceeds the cell limit.
pub fn parse_grid_text(text: &str, read_values: bool) -> Result<Grid, ParseError> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| ParseError::Format("missing dimensions line".to_string()))?;
    let (rows, cols) = parse_dimensions(header)?;

    if let Some(msg) = check_grid_size(rows, cols) {
        return Err(ParseError::TooLarge(msg));
    }

    // Line numbers in errors are 1-based; the header is line 1
    let raw_colors = read_section(&mut lines, rows, cols, 2, "color", check_palette)?;
    let colors: Vec<Vec<u8>> = raw_colors
        .into_iter()
        .map(|row| row.into_iter().filter_map(color_index).collect())
        .collect();

    let values = if read_values {
        read_section(&mut lines, rows, cols, rows + 2, "value", |_, _| Ok(()))?
    } else {
        Vec::new()
    };

    let trailing = lines.filter(|l| !l.trim().is_empty()).count();
    if trailing > 0 {
        debug!("Ignoring {trailing} trailing line(s) after grid");
    }

    let grid = Grid::from_cells(rows, cols, colors, values)?;
    debug!(
        "Parsed {} x {} grid ({} forbidden cells)",
        rows,
        cols,
        grid.forbidden_count()
    );
    Ok(grid)
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(ParseError::Format(format!(
            "dimensions line must hold 2 integers, found {}",
            fields.len()
        )));
    }

    let parse = |s: &str| {
        s.parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| ParseError::Format(format!("invalid dimension '{s}'")))
    };

    Ok((parse(fields[0])?, parse(fields[1])?))
}

fn color_index(value: i64) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .and_then(Color::from_index)
        .map(Color::index)
}

fn check_palette(line: usize, tokens: &[i64]) -> Result<(), ParseError> {
    match tokens.iter().position(|&v| color_index(v).is_none()) {
        Some(j) => Err(ParseError::InvalidColor {
            line,
            column: j + 1,
            value: tokens[j],
        }),
        None => Ok(()),
    }
}

/// Read `rows` lines of `cols` integers, running `check` on each row as soon
/// as its token count is confirmed
fn read_section<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    rows: usize,
    cols: usize,
    first_line: usize,
    what: &str,
    check: impl Fn(usize, &[i64]) -> Result<(), ParseError>,
) -> Result<Vec<Vec<i64>>, ParseError> {
    let mut section = Vec::with_capacity(rows);

    for i in 0..rows {
        let line_num = first_line + i;
        let line = lines.next().ok_or_else(|| {
            ParseError::Format(format!(
                "missing {what} row {i} (line {line_num}): expected {rows} rows"
            ))
        })?;

        let tokens = parse_int_tokens(line).map_err(|token| {
            ParseError::Format(format!("invalid {what} '{token}' on line {line_num}"))
        })?;

        if tokens.len() != cols {
            return Err(ParseError::Format(format!(
                "{what} row on line {line_num} has {} entries, expected {cols}",
                tokens.len()
            )));
        }
        check(line_num, &tokens)?;

        section.push(tokens);
    }

    Ok(section)
}

/// Serialize a grid back into the textual format
#[must_use]
pub fn to_grid_text(grid: &Grid, include_values: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", grid.rows(), grid.cols());

    for row in 0..grid.rows() {
        let line: Vec<String> = grid
            .color_row(row)
            .iter()
            .map(|c| c.index().to_string())
            .collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }

    if include_values {
        for row in 0..grid.rows() {
            let line: Vec<String> = grid.value_row(row).iter().map(i64::to_string).collect();
            let _ = writeln!(out, "{}", line.join(" "));
        }
    }

    out
}

/// Write a grid to disk in the textual format
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be written.
pub fn write_grid_file(path: &Path, grid: &Grid, include_values: bool) -> Result<(), ParseError> {
    std::fs::write(path, to_grid_text(grid, include_values))?;
    Ok(())
}
