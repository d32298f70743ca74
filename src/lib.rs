//! bar-chart-rs: bar dataset controller for a scale-driven charting engine.
//!
//! A `BarController` binds one dataset of a `Chart` to its x/y scales, keeps
//! one `RectangleElement` per value, resolves bar geometry and styles into
//! element models and draws them into a backend-agnostic `RenderFrame`.

pub mod controllers;
pub mod core;
pub mod elements;
pub mod error;
pub mod render;
pub mod telemetry;

pub use controllers::BarController;
pub use crate::core::{Chart, ChartData, ChartOptions, Dataset};
pub use error::{ChartError, ChartResult};
