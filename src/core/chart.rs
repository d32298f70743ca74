use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BarContext, BarScale, ChartType, Color, Dataset};
use crate::error::{ChartError, ChartResult};

/// Datasets plus the category labels shared by every dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl ChartData {
    #[must_use]
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Self {
            datasets,
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn value(&self, dataset_index: usize, index: usize) -> ChartResult<f64> {
        let dataset = self
            .datasets
            .get(dataset_index)
            .ok_or(ChartError::DatasetOutOfRange {
                index: dataset_index,
                len: self.datasets.len(),
            })?;
        dataset
            .data
            .get(index)
            .copied()
            .ok_or(ChartError::ElementOutOfRange {
                index,
                len: dataset.data.len(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type", default)]
    pub chart_type: ChartType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub id: String,
}

impl AxisConfig {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalesConfig {
    #[serde(rename = "xAxes", default)]
    pub x_axes: Vec<AxisConfig>,
    #[serde(rename = "yAxes", default)]
    pub y_axes: Vec<AxisConfig>,
}

/// Chart-wide rectangle style used when neither element nor dataset override it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleDefaults {
    #[serde(default = "default_rectangle_color")]
    pub background_color: Color,
    #[serde(default = "default_rectangle_color")]
    pub border_color: Color,
    #[serde(default)]
    pub border_width: f64,
}

impl Default for RectangleDefaults {
    fn default() -> Self {
        Self {
            background_color: default_rectangle_color(),
            border_color: default_rectangle_color(),
            border_width: 0.0,
        }
    }
}

fn default_rectangle_color() -> Color {
    Color::rgba(0, 0, 0, 0.1)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementOptions {
    #[serde(default)]
    pub rectangle: RectangleDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub elements: ElementOptions,
    #[serde(default)]
    pub scales: ScalesConfig,
}

impl ChartOptions {
    #[must_use]
    pub fn with_axes(mut self, x_axis_id: impl Into<String>, y_axis_id: impl Into<String>) -> Self {
        self.scales.x_axes.push(AxisConfig::new(x_axis_id));
        self.scales.y_axes.push(AxisConfig::new(y_axis_id));
        self
    }

    #[must_use]
    pub fn with_rectangle_defaults(mut self, rectangle: RectangleDefaults) -> Self {
        self.elements.rectangle = rectangle;
        self
    }
}

/// Serialized form of a chart definition.
#[derive(Debug, Deserialize)]
struct ChartDocument {
    #[serde(rename = "type", default)]
    chart_type: ChartType,
    #[serde(default)]
    data: ChartData,
    #[serde(default)]
    options: ChartOptions,
}

/// Chart aggregate handed to dataset controllers.
///
/// Scales are resolved objects keyed by axis id; elements refer to them by id
/// rather than holding references, so the chart stays the single owner.
#[derive(Debug, Default)]
pub struct Chart {
    pub data: ChartData,
    pub config: ChartConfig,
    pub options: ChartOptions,
    scales: IndexMap<String, Box<dyn BarScale>>,
}

impl Chart {
    #[must_use]
    pub fn new(data: ChartData, config: ChartConfig, options: ChartOptions) -> Self {
        Self {
            data,
            config,
            options,
            scales: IndexMap::new(),
        }
    }

    /// Builds a chart from a JSON definition (`{"type", "data", "options"}`).
    ///
    /// Scales are not part of the document and must be attached afterwards.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let document: ChartDocument = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("chart definition: {err}")))?;
        debug!(
            chart_type = ?document.chart_type,
            datasets = document.data.datasets.len(),
            "chart loaded from json"
        );
        Ok(Self::new(
            document.data,
            ChartConfig {
                chart_type: document.chart_type,
            },
            document.options,
        ))
    }

    #[must_use]
    pub fn with_scale(mut self, id: impl Into<String>, scale: impl BarScale + 'static) -> Self {
        self.set_scale(id, scale);
        self
    }

    /// Registers or replaces the scale resolved for `id`.
    pub fn set_scale(&mut self, id: impl Into<String>, scale: impl BarScale + 'static) {
        self.scales.insert(id.into(), Box::new(scale));
    }

    #[must_use]
    pub fn scale(&self, id: &str) -> Option<&dyn BarScale> {
        self.scales.get(id).map(|scale| scale.as_ref())
    }

    /// View of the data that scale calculators measure bars against.
    #[must_use]
    pub fn bar_context(&self) -> BarContext<'_> {
        BarContext::new(&self.data, self.config.chart_type)
    }

    pub fn scale_ids(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }
}
