//! Command-line interface for grid-pairing.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **show**: Print the dimensions, colors and values of a grid
//! - **render**: Draw the grid as a box of colored cells
//! - **pairs**: List every admissible pair with its cost
//! - **solve**: Run a solver and report the chosen pairs and score
//!
//! ## Usage
//!
//! ```text
//! # Dump a grid with its values
//! grid-pairing show input/grid00.in --values
//!
//! # Read the grid from stdin
//! cat input/grid01.in | grid-pairing pairs -
//!
//! # JSON output for scripting
//! grid-pairing solve input/grid00.in --values --format json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::grid::Grid;
use crate::parsing::grid::parse_grid_file;

pub mod pairs;
pub mod render;
pub mod show;
pub mod solve;

#[derive(Parser)]
#[command(name = "grid-pairing")]
#[command(version)]
#[command(about = "Enumerate and solve adjacent-cell pairings on colored grids")]
#[command(
    long_about = "grid-pairing reads a grid of colored, valued cells and derives the pairs of adjacent cells that may be matched together.\n\nBlack cells are forbidden; two cells pair only when they share a color. The cost of a pair is the absolute difference of its values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a grid's dimensions, colors and values
    Show(show::ShowArgs),

    /// Draw a grid as a box of cells
    Render(render::RenderArgs),

    /// List admissible pairs and their costs
    Pairs(pairs::PairsArgs),

    /// Choose pairs with a solver and report the score
    Solve(solve::SolveArgs),
}

/// Grid input shared by every command
#[derive(Args)]
pub struct GridInput {
    /// Grid file; use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Read the value rows that follow the color rows
    #[arg(long)]
    pub values: bool,
}

impl GridInput {
    /// Load the grid named on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid grid.
    pub fn load(&self, verbose: bool) -> anyhow::Result<Grid> {
        let grid = parse_grid_file(&self.input, self.values)?;

        if verbose {
            eprintln!(
                "Loaded {} x {} grid from {} ({} forbidden cells)",
                grid.rows(),
                grid.cols(),
                self.input.display(),
                grid.forbidden_count()
            );
        }

        Ok(grid)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
