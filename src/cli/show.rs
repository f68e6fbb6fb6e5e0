use clap::Args;

use crate::cli::{GridInput, OutputFormat};
use crate::core::grid::Grid;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub grid: GridInput,
}

/// Execute show subcommand
///
/// # Errors
///
/// Returns an error if the grid cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ShowArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let grid = args.grid.load(verbose)?;

    match format {
        OutputFormat::Text => print!("{grid}"),
        OutputFormat::Json => print_json(&grid)?,
        OutputFormat::Tsv => print_tsv(&grid),
    }

    Ok(())
}

fn print_json(grid: &Grid) -> anyhow::Result<()> {
    let colors: Vec<String> = (0..grid.rows())
        .map(|row| grid.color_row(row).iter().map(|c| c.symbol()).collect())
        .collect();
    let values: Vec<&[i64]> = (0..grid.rows()).map(|row| grid.value_row(row)).collect();

    let output = serde_json::json!({
        "rows": grid.rows(),
        "cols": grid.cols(),
        "forbidden_cells": grid.forbidden_count(),
        "colors": colors,
        "values": values,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(grid: &Grid) {
    println!("row\tcol\tcolor\tvalue");
    for cell in grid.cells() {
        println!(
            "{}\t{}\t{}\t{}",
            cell.row,
            cell.col,
            grid.color(cell),
            grid.value(cell)
        );
    }
}
