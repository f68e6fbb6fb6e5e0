use clap::Args;
use tracing::debug;

use crate::cli::{GridInput, OutputFormat};
use crate::core::grid::Grid;
use crate::solver::greedy::DEFAULT_MIN_GAIN;
use crate::solver::{GreedyConfig, Matching, SolverKind};

#[derive(Args)]
pub struct SolveArgs {
    #[command(flatten)]
    pub grid: GridInput,

    /// Solver used to choose pairs
    #[arg(long, value_enum, default_value = "greedy")]
    pub solver: SolverKind,

    /// Minimum gain for the greedy solver to take a pair
    #[arg(long, default_value_t = DEFAULT_MIN_GAIN, allow_negative_numbers = true)]
    pub min_gain: i64,
}

/// Execute solve subcommand
///
/// # Errors
///
/// Returns an error if the grid cannot be loaded or the solver returns an
/// invalid matching.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let grid = args.grid.load(verbose)?;

    let config = GreedyConfig {
        min_gain: args.min_gain,
    };
    let solver = args.solver.build(config);
    let matching = solver.solve(&grid);
    matching.validate(&grid)?;

    debug!(
        "{} solver selected {} pairs",
        solver.name(),
        matching.len()
    );

    match format {
        OutputFormat::Text => print_text(solver.name(), &grid, &matching),
        OutputFormat::Json => print_json(solver.name(), &grid, &matching)?,
        OutputFormat::Tsv => print_tsv(solver.name(), &grid, &matching),
    }

    Ok(())
}

fn print_text(name: &str, grid: &Grid, matching: &Matching) {
    println!("Solver: {name}");
    println!("Pairs: {}", matching.len());
    for pair in &matching.pairs {
        println!("  {pair}  cost={}", grid.pair_cost(pair));
    }
    println!("Total cost: {}", matching.cost(grid));
    println!("The final score of {name} is: {}", matching.score(grid));
}

fn print_json(name: &str, grid: &Grid, matching: &Matching) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "solver": name,
        "pairs": matching.pairs,
        "pair_count": matching.len(),
        "cost": matching.cost(grid),
        "score": matching.score(grid),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(name: &str, grid: &Grid, matching: &Matching) {
    println!("solver\tpair_count\tcost\tscore");
    println!(
        "{name}\t{}\t{}\t{}",
        matching.len(),
        matching.cost(grid),
        matching.score(grid)
    );
}
