use serde::{Deserialize, Serialize};

use crate::core::{BarContext, BarScale};
use crate::error::{ChartError, ChartResult};

/// Horizontal axis of evenly spaced categories, one slot per label.
///
/// Bars of different datasets sit side by side inside a slot, or on top of
/// each other when `stacked` is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CategoryScaleConfig")]
pub struct CategoryScale {
    left: f64,
    right: f64,
    label_count: usize,
    #[serde(default)]
    category_spacing: f64,
    #[serde(default)]
    spacing: f64,
    #[serde(default)]
    stacked: bool,
}

#[derive(Deserialize)]
struct CategoryScaleConfig {
    left: f64,
    right: f64,
    label_count: usize,
    #[serde(default)]
    category_spacing: f64,
    #[serde(default)]
    spacing: f64,
    #[serde(default)]
    stacked: bool,
}

impl TryFrom<CategoryScaleConfig> for CategoryScale {
    type Error = ChartError;

    fn try_from(config: CategoryScaleConfig) -> ChartResult<Self> {
        Ok(Self::new(config.left, config.right, config.label_count)?
            .with_category_spacing(config.category_spacing)?
            .with_spacing(config.spacing)?
            .with_stacked(config.stacked))
    }
}

impl CategoryScale {
    pub fn new(left: f64, right: f64, label_count: usize) -> ChartResult<Self> {
        if !left.is_finite() || !right.is_finite() || right <= left {
            return Err(ChartError::InvalidData(
                "category scale bounds must be finite with right > left".to_owned(),
            ));
        }
        if label_count == 0 {
            return Err(ChartError::InvalidData(
                "category scale needs at least one label".to_owned(),
            ));
        }

        Ok(Self {
            left,
            right,
            label_count,
            category_spacing: 0.0,
            spacing: 0.0,
            stacked: false,
        })
    }

    /// Gap kept free on each side of a category slot.
    pub fn with_category_spacing(mut self, category_spacing: f64) -> ChartResult<Self> {
        if !category_spacing.is_finite() || category_spacing < 0.0 {
            return Err(ChartError::InvalidData(
                "category spacing must be finite and >= 0".to_owned(),
            ));
        }
        self.category_spacing = category_spacing;
        Ok(self)
    }

    /// Gap between neighbouring bars of one slot.
    pub fn with_spacing(mut self, spacing: f64) -> ChartResult<Self> {
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(ChartError::InvalidData(
                "bar spacing must be finite and >= 0".to_owned(),
            ));
        }
        self.spacing = spacing;
        Ok(self)
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn slot_width(&self) -> f64 {
        (self.right - self.left) / self.label_count as f64
    }

    /// Center of the slot for category `index`.
    #[must_use]
    pub fn pixel_for_index(&self, index: usize) -> f64 {
        let slot = self.slot_width();
        self.left + slot * index as f64 + slot / 2.0
    }

    /// Width available to all bars of one slot.
    #[must_use]
    pub fn base_width(&self) -> f64 {
        self.slot_width() - 2.0 * self.category_spacing
    }

    fn bar_width(&self, bar_count: usize) -> f64 {
        let bar_count = bar_count.max(1) as f64;
        let available = self.base_width() - (bar_count - 1.0) * self.spacing;
        if self.stacked {
            available
        } else {
            available / bar_count
        }
    }
}

impl BarScale for CategoryScale {
    fn min(&self) -> f64 {
        0.0
    }

    fn max(&self) -> f64 {
        (self.label_count - 1) as f64
    }

    fn pixel_for_value(&self, value: f64) -> f64 {
        let slot = self.slot_width();
        self.left + slot * value + slot / 2.0
    }

    fn calculate_bar_width(
        &self,
        _context: &BarContext<'_>,
        bar_count: usize,
    ) -> ChartResult<f64> {
        Ok(self.bar_width(bar_count))
    }

    /// Center of the bar for `dataset_index` in category `index`. Grouped
    /// bars take slots in dataset order, skipping datasets not drawn as bars.
    fn calculate_bar_x(
        &self,
        context: &BarContext<'_>,
        bar_count: usize,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<f64> {
        let slot_left = self.pixel_for_index(index) - self.base_width() / 2.0;
        let bar_width = self.bar_width(bar_count);
        if self.stacked {
            return Ok(slot_left + bar_width / 2.0);
        }

        let position = context.bar_position(dataset_index) as f64;
        Ok(slot_left + bar_width * position + self.spacing * position + bar_width / 2.0)
    }
}
