use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::elements::RectangleElement;

/// Chart type, either chart-wide or overridden per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Radar,
    Pie,
    Doughnut,
    PolarArea,
}

/// A style that is either shared by every bar or given per data index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue<T> {
    Single(T),
    PerIndex(Vec<T>),
}

impl<T: Clone> StyleValue<T> {
    /// Value for `index`; `None` when a per-index list is too short.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<T> {
        match self {
            Self::Single(value) => Some(value.clone()),
            Self::PerIndex(values) => values.get(index).cloned(),
        }
    }
}

impl From<Color> for StyleValue<Color> {
    fn from(value: Color) -> Self {
        Self::Single(value)
    }
}

impl From<f64> for StyleValue<f64> {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl<T> From<Vec<T>> for StyleValue<T> {
    fn from(values: Vec<T>) -> Self {
        Self::PerIndex(values)
    }
}

/// Resolves one level of a style override chain.
///
/// Absent values and per-index lists without an entry for `index` fall back
/// to `default`.
pub fn value_at_index_or<T: Clone>(value: Option<&StyleValue<T>>, index: usize, default: T) -> T {
    value.and_then(|value| value.at(index)).unwrap_or(default)
}

/// One series of values plus its styling and per-point elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
    #[serde(default, rename = "xAxisID", skip_serializing_if = "Option::is_none")]
    pub x_axis_id: Option<String>,
    #[serde(default, rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<StyleValue<Color>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<StyleValue<Color>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<StyleValue<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<StyleValue<Color>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<StyleValue<Color>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_border_width: Option<StyleValue<f64>>,
    /// Runtime elements, one per data value once a controller is attached.
    #[serde(skip)]
    pub meta_data: Vec<RectangleElement>,
}

impl Dataset {
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = Some(chart_type);
        self
    }

    #[must_use]
    pub fn with_axes(mut self, x_axis_id: impl Into<String>, y_axis_id: impl Into<String>) -> Self {
        self.x_axis_id = Some(x_axis_id.into());
        self.y_axis_id = Some(y_axis_id.into());
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<StyleValue<Color>>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_border(
        mut self,
        color: impl Into<StyleValue<Color>>,
        width: impl Into<StyleValue<f64>>,
    ) -> Self {
        self.border_color = Some(color.into());
        self.border_width = Some(width.into());
        self
    }

    /// Effective type: the dataset override, else the chart-wide type.
    #[must_use]
    pub fn resolved_type(&self, chart_type: ChartType) -> ChartType {
        self.chart_type.unwrap_or(chart_type)
    }
}
