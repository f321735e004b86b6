//! chartjs-rs: typed builders for Chart.js configuration documents.
//!
//! The crate assembles the `type`/`data`/`options` document consumed by a
//! Chart.js rendering widget. Rendering itself and remote data clients live
//! outside the crate; market data enters through [`api::MarketDataSource`].

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{Chart, TimeSeriesSettings, time_series_chart};
pub use crate::core::{ChartConfig, ChartKind, color_rgb};
pub use error::{ChartError, ChartResult};
