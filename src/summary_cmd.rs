use anyhow::{Context, Result};
use tracing::info;

use annum_io::{DailySeries, read_csv};
use annum_scale::QuantizeScale;

use crate::cli::SummaryArgs;
use crate::config::AnnumConfig;
use crate::convert;

/// Run the `summary` subcommand: per-year statistics on stdout.
pub fn run(args: SummaryArgs) -> Result<()> {
    let config = AnnumConfig::load(&args.config)?;

    let input = args.input.or_else(|| config.io.input.clone()).ok_or_else(|| {
        anyhow::anyhow!("no input path: set [io].input in config or use --input")
    })?;

    let reader_cfg = convert::build_reader_config(&config.io);
    let series = read_csv(&input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;
    info!(n_days = series.len(), "daily series loaded");

    let scale = convert::build_scale(&config.scale, &series)?;

    println!(
        "domain [{}, {}) in {} buckets",
        scale.lo(),
        scale.hi(),
        scale.buckets()
    );
    for year in series.years() {
        print_year(year, &series, &scale);
    }

    Ok(())
}

/// Prints one year's line: day count, value extent, bucket histogram.
fn print_year(year: i32, series: &DailySeries, scale: &QuantizeScale) {
    let mut n_days = 0usize;
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut histogram = vec![0usize; scale.buckets()];

    for (date, day) in series.iter() {
        if date.year() != year {
            continue;
        }
        n_days += 1;
        histogram[scale.bucket(day.value)] += 1;
        if day.value.is_finite() {
            lo = lo.min(day.value);
            hi = hi.max(day.value);
        }
    }

    if lo > hi {
        println!("{year}: {n_days} days, no finite values");
    } else {
        println!("{year}: {n_days} days, min {lo}, max {hi}, buckets {histogram:?}");
    }
}
