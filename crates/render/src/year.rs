//! Year grid assembly.

use annum_calendar::{CivilDate, year_sequence};
use annum_grid::{MonthOutline, cell_origin, month_outline, week_index};
use annum_io::DailySeries;
use annum_scale::QuantizeScale;
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::svg::{SvgBuilder, num};

/// Number of week columns needed to show the given year.
fn n_weeks(year: i32) -> u16 {
    week_index(CivilDate::year_end(year)) + 1
}

/// Converts an outline into SVG path data (`M x,y L ... Z`).
fn outline_path_data(outline: &MonthOutline) -> String {
    let mut d = String::new();
    for (i, &(x, y)) in outline.vertices().iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{cmd}{},{}", num(x), num(y)));
    }
    d.push('Z');
    d
}

/// Emits one year grid into the builder at the current origin: a cell per
/// day, then the twelve month outlines on top.
fn render_year_into(
    svg: &mut SvgBuilder,
    year: i32,
    series: &DailySeries,
    scale: &QuantizeScale,
    config: &RenderConfig,
) {
    let cs = config.cell_size();
    let mut n_present = 0usize;

    for date in year_sequence(year) {
        let (x, y) = cell_origin(date, cs);
        match series.get(date) {
            Some(day) => {
                n_present += 1;
                let fill = config.palette().color(scale.bucket(day.value));
                let title = if day.label.is_empty() {
                    format!("{date}: {}", day.value)
                } else {
                    format!("{}: {}", day.label, day.value)
                };
                svg.rect(x, y, cs, cs, fill, config.cell_stroke(), Some(&title));
            }
            None => {
                let title = date.to_string();
                svg.rect(
                    x,
                    y,
                    cs,
                    cs,
                    config.neutral_fill(),
                    config.cell_stroke(),
                    Some(&title),
                );
            }
        }
    }

    for month in 1..=12u8 {
        let outline = month_outline(year, month, cs).expect("months 1..=12 are valid");
        svg.path(
            &outline_path_data(&outline),
            "none",
            config.outline_stroke(),
            config.outline_width(),
        );
    }

    debug!(year, n_present, "year grid rendered");
}

/// Renders a single year grid as a standalone SVG fragment (one `<g>`,
/// no envelope).
pub fn render_year(
    year: i32,
    series: &DailySeries,
    scale: &QuantizeScale,
    config: &RenderConfig,
) -> String {
    let mut svg = SvgBuilder::new();
    svg.open_group(0.0, 0.0);
    render_year_into(&mut svg, year, series, scale, config);
    svg.close_group();
    svg.markup()
}

/// Renders the complete heatmap document: one grid per year spanned by
/// the series (min year through max year inclusive, so gap years show as
/// all-neutral grids), stacked vertically.
///
/// # Errors
///
/// Returns [`RenderError::NoYears`] for an empty series and
/// [`RenderError::InvalidCellSize`] for an unusable configuration.
pub fn render_document(
    series: &DailySeries,
    scale: &QuantizeScale,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    config.validate()?;

    let years = series.years();
    let (first, last) = match (years.first(), years.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(RenderError::NoYears),
    };

    let cs = config.cell_size();
    let n_years = (last - first + 1) as usize;
    let max_weeks = (first..=last).map(n_weeks).max().unwrap_or(53) as f64;
    let grid_height = 7.0 * cs;

    let width = config.margin_left() * 2.0 + max_weeks * cs;
    let height =
        config.margin_top() * 2.0 + n_years as f64 * grid_height
            + (n_years as f64 - 1.0) * config.year_gap();

    info!(first, last, n_years, "rendering heatmap document");

    let mut svg = SvgBuilder::new();
    for (i, year) in (first..=last).enumerate() {
        let ty = config.margin_top() + i as f64 * (grid_height + config.year_gap());
        svg.open_group(config.margin_left(), ty);
        if config.show_year_labels() {
            svg.text_end_anchored(-8.0, grid_height / 2.0 + 5.0, 14.0, &year.to_string());
        }
        render_year_into(&mut svg, year, series, scale, config);
        svg.close_group();
    }

    Ok(svg.finish(width, height))
}
