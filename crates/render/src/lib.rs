//! # annum-render
//!
//! Assembles calendar heatmap SVG documents from a daily series: one grid
//! per year, one colored cell per day, month boundary outlines on top.
//! Output is a plain SVG string with no external references.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `svg` | Minimal SVG element builder |
//! | `palette` | Ten-step color ramps |
//! | `config` | Geometry and styling configuration |
//! | `year` | Year grid and document assembly |
//! | `error` | Error types |

mod config;
mod error;
mod palette;
mod svg;
mod year;

pub use config::RenderConfig;
pub use error::RenderError;
pub use palette::Palette;
pub use svg::SvgBuilder;
pub use year::{render_document, render_year};
