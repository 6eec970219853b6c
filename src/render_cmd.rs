use anyhow::{Context, Result};
use tracing::info;

use annum_io::read_csv;
use annum_render::render_document;

use crate::cli::RenderArgs;
use crate::config::AnnumConfig;
use crate::convert;

/// Run the `render` subcommand: CSV in, heatmap SVG out.
pub fn run(args: RenderArgs) -> Result<()> {
    let config = AnnumConfig::load(&args.config)?;

    // Resolve paths: CLI flags override the config file; the output path
    // defaults to the input path with an .svg extension.
    let input = args.input.or_else(|| config.io.input.clone()).ok_or_else(|| {
        anyhow::anyhow!("no input path: set [io].input in config or use --input")
    })?;
    let output = args
        .output
        .or_else(|| config.io.output.clone())
        .unwrap_or_else(|| input.with_extension("svg"));

    let reader_cfg = convert::build_reader_config(&config.io);

    info!(path = %input.display(), "reading daily series");
    let series = read_csv(&input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;
    info!(
        n_days = series.len(),
        n_years = series.years().len(),
        "daily series loaded"
    );

    let scale = convert::build_scale(&config.scale, &series)?;
    let render_cfg = convert::build_render_config(&config.render)?;

    let document = render_document(&series, &scale, &render_cfg).context("rendering failed")?;

    std::fs::write(&output, &document)
        .with_context(|| format!("failed to write SVG: {}", output.display()))?;
    info!(path = %output.display(), bytes = document.len(), "heatmap written");

    Ok(())
}
