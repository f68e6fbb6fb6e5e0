use clap::Args;

use crate::cli::{GridInput, OutputFormat};
use crate::render::{Renderer, TextRenderer};

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub grid: GridInput,

    /// Color cell backgrounds with ANSI escapes
    #[arg(long)]
    pub ansi: bool,
}

/// Execute render subcommand
///
/// Drawing is text only; `--format` is ignored.
///
/// # Errors
///
/// Returns an error if the grid cannot be loaded or stdout fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RenderArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if !matches!(format, OutputFormat::Text) {
        tracing::warn!("render only produces text output; ignoring --format {format:?}");
    }

    let grid = args.grid.load(verbose)?;

    let stdout = std::io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock()).with_ansi(args.ansi);
    renderer.render(&grid)?;

    Ok(())
}
