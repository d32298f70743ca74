pub mod category_scale;
pub mod chart;
pub mod color;
pub mod dataset;
pub mod linear_scale;
pub mod scale;
pub mod types;

pub use category_scale::CategoryScale;
pub use chart::{
    AxisConfig, Chart, ChartConfig, ChartData, ChartOptions, ElementOptions, RectangleDefaults,
    ScalesConfig,
};
pub use color::Color;
pub use dataset::{ChartType, Dataset, StyleValue, value_at_index_or};
pub use linear_scale::LinearScale;
pub use scale::{BarContext, BarScale};
pub use types::Viewport;
