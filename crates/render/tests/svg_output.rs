//! Integration tests: document structure of rendered heatmaps.

use annum_io::DailySeries;
use annum_render::{Palette, RenderConfig, RenderError, render_document, render_year};
use annum_scale::QuantizeScale;

fn sample_series() -> DailySeries {
    let mut series = DailySeries::new();
    series.insert_first("2016-01-04".parse().unwrap(), 0.01, "Mon");
    series.insert_first("2016-01-05".parse().unwrap(), -0.02, "Tue");
    series.insert_first("2016-07-15".parse().unwrap(), 0.04, "Jul");
    series
}

#[test]
fn document_is_valid_svg_envelope() {
    let series = sample_series();
    let scale = QuantizeScale::new(-0.05, 0.05).unwrap();
    let doc = render_document(&series, &scale, &RenderConfig::default()).unwrap();

    assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(doc.trim_end().ends_with("</svg>"));
}

#[test]
fn one_cell_per_day_and_twelve_outlines() {
    let series = sample_series();
    let scale = QuantizeScale::new(-0.05, 0.05).unwrap();
    let doc = render_document(&series, &scale, &RenderConfig::default()).unwrap();

    // 2016 is a leap year: 366 day cells, 12 month outline paths.
    assert_eq!(doc.matches("<rect ").count(), 366);
    assert_eq!(doc.matches("<path ").count(), 12);
}

#[test]
fn spanned_years_render_even_when_empty() {
    let mut series = sample_series();
    series.insert_first("2018-03-03".parse().unwrap(), 0.0, "");
    let scale = QuantizeScale::new(-0.05, 0.05).unwrap();
    let doc = render_document(&series, &scale, &RenderConfig::default()).unwrap();

    // 2016..=2018 inclusive: 366 + 365 + 365 cells, 36 outlines.
    assert_eq!(doc.matches("<rect ").count(), 366 + 365 + 365);
    assert_eq!(doc.matches("<path ").count(), 36);
    // Year labels for all three years, including the data-free 2017.
    for year in ["2016", "2017", "2018"] {
        assert!(doc.contains(&format!(">{year}</text>")), "missing {year}");
    }
}

#[test]
fn present_days_are_colored_and_titled() {
    let series = sample_series();
    let scale = QuantizeScale::new(-0.05, 0.05).unwrap();
    let config = RenderConfig::default().with_palette(Palette::RdYlGn);
    let doc = render_document(&series, &scale, &config).unwrap();

    // 0.01 on [-0.05, 0.05) falls in bucket 6 of the RdYlGn ramp.
    assert!(doc.contains(Palette::RdYlGn.color(6)));
    assert!(doc.contains("<title>Mon: 0.01</title>"));
    // A date without data keeps the neutral fill and a bare date title.
    assert!(doc.contains("fill=\"#eeeeee\""));
    assert!(doc.contains("<title>2016-02-14</title>"));
}

#[test]
fn missing_label_falls_back_to_date() {
    let mut series = DailySeries::new();
    series.insert_first("2016-06-01".parse().unwrap(), 1.0, "");
    let scale = QuantizeScale::new(0.0, 2.0).unwrap();
    let doc = render_document(&series, &scale, &RenderConfig::default()).unwrap();
    assert!(doc.contains("<title>2016-06-01: 1</title>"));
}

#[test]
fn render_year_fragment_has_no_envelope() {
    let series = sample_series();
    let scale = QuantizeScale::new(-0.05, 0.05).unwrap();
    let fragment = render_year(2016, &series, &scale, &RenderConfig::default());

    assert!(!fragment.contains("<svg"));
    assert!(fragment.starts_with("<g "));
    assert_eq!(fragment.matches("<rect ").count(), 366);
}

#[test]
fn empty_series_is_an_error() {
    let scale = QuantizeScale::new(0.0, 1.0).unwrap();
    let err = render_document(&DailySeries::new(), &scale, &RenderConfig::default()).unwrap_err();
    assert_eq!(err, RenderError::NoYears);
}

#[test]
fn invalid_cell_size_is_an_error() {
    let series = sample_series();
    let scale = QuantizeScale::new(0.0, 1.0).unwrap();
    let config = RenderConfig::default().with_cell_size(0.0);
    let err = render_document(&series, &scale, &config).unwrap_err();
    assert!(matches!(err, RenderError::InvalidCellSize { .. }));
}

#[test]
fn year_labels_can_be_disabled() {
    let series = sample_series();
    let scale = QuantizeScale::new(-0.05, 0.05).unwrap();
    let config = RenderConfig::default().with_year_labels(false);
    let doc = render_document(&series, &scale, &config).unwrap();
    assert!(!doc.contains("<text"));
}
