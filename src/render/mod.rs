//! Grid rendering.
//!
//! Rendering is a capability handed a grid to draw; the grid itself owns no
//! drawing code. Renderers read only the dimensions and cell colors.

use std::io::Write;
use thiserror::Error;

use crate::core::grid::Grid;
use crate::core::types::Color;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can draw a grid
pub trait Renderer {
    /// Draw the grid
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the output sink fails.
    fn render(&mut self, grid: &Grid) -> Result<(), RenderError>;
}

const ANSI_RESET: &str = "\x1b[0m";

/// ANSI background escape for a palette entry
fn ansi_background(color: Color) -> &'static str {
    match color {
        Color::White => "\x1b[30;47m",
        Color::Red => "\x1b[30;41m",
        Color::Blue => "\x1b[37;44m",
        Color::Green => "\x1b[30;42m",
        Color::Black => "\x1b[37;40m",
    }
}

/// Draws a grid as a box of cells, one palette symbol per cell
///
/// ```text
/// +---+---+
/// | w | k |
/// +---+---+
/// ```
pub struct TextRenderer<W: Write> {
    out: W,
    ansi: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, ansi: false }
    }

    /// Paint each cell background with its palette color
    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn separator(&mut self, cols: usize) -> std::io::Result<()> {
        writeln!(self.out, "+{}", "---+".repeat(cols))
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, grid: &Grid) -> Result<(), RenderError> {
        self.separator(grid.cols())?;
        for row in 0..grid.rows() {
            write!(self.out, "|")?;
            for &color in grid.color_row(row) {
                if self.ansi {
                    write!(
                        self.out,
                        "{} {} {ANSI_RESET}|",
                        ansi_background(color),
                        color.symbol()
                    )?;
                } else {
                    write!(self.out, " {} |", color.symbol())?;
                }
            }
            writeln!(self.out)?;
            self.separator(grid.cols())?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(grid: &Grid, ansi: bool) -> String {
        let mut renderer = TextRenderer::new(Vec::new()).with_ansi(ansi);
        renderer.render(grid).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_render() {
        let grid = Grid::from_cells(2, 2, vec![vec![0, 4], vec![1, 3]], vec![]).unwrap();
        let expected = "+---+---+\n\
                        | w | k |\n\
                        +---+---+\n\
                        | r | g |\n\
                        +---+---+\n";
        assert_eq!(render_to_string(&grid, false), expected);
    }

    #[test]
    fn test_ansi_render() {
        let grid = Grid::from_cells(1, 1, vec![vec![2]], vec![]).unwrap();
        let out = render_to_string(&grid, true);
        assert!(out.contains("\x1b[37;44m b \x1b[0m|"));
        assert!(out.starts_with("+---+\n"));
    }
}
