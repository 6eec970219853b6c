//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use annum_io::{DailySeries, ReaderConfig};
use annum_render::{Palette, RenderConfig};
use annum_scale::QuantizeScale;

use crate::config::{IoToml, RenderToml, ScaleToml};

/// Parses a palette name string into the corresponding enum variant.
pub fn parse_palette(s: &str) -> Result<Palette> {
    match s.to_lowercase().as_str() {
        "greens" => Ok(Palette::Greens),
        "rdylgn" => Ok(Palette::RdYlGn),
        other => bail!("unknown palette: {other:?}"),
    }
}

/// Builds a reader configuration from the `[io]` table.
pub fn build_reader_config(io: &IoToml) -> ReaderConfig {
    ReaderConfig::default()
        .with_date_col(&io.date_col)
        .with_value_col(&io.value_col)
        .with_label_col(io.label_col.as_deref())
}

/// Builds the quantization scale from the `[scale]` table, deriving the
/// domain from the loaded series when it is not given explicitly.
pub fn build_scale(scale: &ScaleToml, series: &DailySeries) -> Result<QuantizeScale> {
    let built = match (scale.domain_min, scale.domain_max) {
        (Some(lo), Some(hi)) => QuantizeScale::new(lo, hi)?,
        (None, None) => QuantizeScale::from_extent(&series.values())?,
        _ => bail!("set both domain_min and domain_max, or neither"),
    };
    match scale.buckets {
        Some(n) => Ok(built.with_buckets(n)?),
        None => Ok(built),
    }
}

/// Builds a render configuration from the `[render]` table.
pub fn build_render_config(render: &RenderToml) -> Result<RenderConfig> {
    let config = RenderConfig::default()
        .with_cell_size(render.cell_size)
        .with_neutral_fill(&render.neutral_fill)
        .with_palette(parse_palette(&render.palette)?)
        .with_year_labels(render.year_labels);
    config.validate()?;
    Ok(config)
}
