use clap::Parser;
use tracing_subscriber::EnvFilter;

use grid_pairing::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("grid_pairing=debug,info")
    } else {
        EnvFilter::new("grid_pairing=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Show(args) => {
            cli::show::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Render(args) => {
            cli::render::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Pairs(args) => {
            cli::pairs::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Solve(args) => {
            cli::solve::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
