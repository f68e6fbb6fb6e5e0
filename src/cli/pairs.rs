use clap::Args;

use crate::cli::{GridInput, OutputFormat};
use crate::core::grid::Grid;
use crate::core::types::Pair;

#[derive(Args)]
pub struct PairsArgs {
    #[command(flatten)]
    pub grid: GridInput,
}

/// Execute pairs subcommand
///
/// # Errors
///
/// Returns an error if the grid cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PairsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let grid = args.grid.load(verbose)?;
    let pairs = grid.enumerate_pairs();

    if verbose {
        eprintln!("Found {} admissible pairs", pairs.len());
    }

    match format {
        OutputFormat::Text => print_text(&grid, &pairs),
        OutputFormat::Json => print_json(&grid, &pairs)?,
        OutputFormat::Tsv => print_tsv(&grid, &pairs),
    }

    Ok(())
}

fn print_text(grid: &Grid, pairs: &[Pair]) {
    println!("Admissible pairs: {}", pairs.len());
    for pair in pairs {
        println!(
            "  {pair}  color={}  cost={}",
            grid.color(pair.first),
            grid.pair_cost(pair)
        );
    }
}

fn print_json(grid: &Grid, pairs: &[Pair]) -> anyhow::Result<()> {
    let pairs: Vec<serde_json::Value> = pairs
        .iter()
        .map(|p| {
            serde_json::json!({
                "first": p.first,
                "second": p.second,
                "color": grid.color(p.first),
                "cost": grid.pair_cost(p),
            })
        })
        .collect();

    let output = serde_json::json!({
        "rows": grid.rows(),
        "cols": grid.cols(),
        "pair_count": pairs.len(),
        "pairs": pairs,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(grid: &Grid, pairs: &[Pair]) {
    println!("row1\tcol1\trow2\tcol2\tcost");
    for pair in pairs {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            pair.first.row,
            pair.first.col,
            pair.second.row,
            pair.second.col,
            grid.pair_cost(pair)
        );
    }
}
