use serde::{Deserialize, Serialize};

use crate::core::{BarContext, BarScale, ChartData};
use crate::error::{ChartError, ChartResult};

/// Vertical value axis mapping `[min, max]` onto pixel rows `[bottom, top]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinearScaleConfig")]
pub struct LinearScale {
    min: f64,
    max: f64,
    top: f64,
    bottom: f64,
    #[serde(default)]
    begin_at_zero: bool,
    #[serde(default)]
    stacked: bool,
}

#[derive(Deserialize)]
struct LinearScaleConfig {
    min: f64,
    max: f64,
    top: f64,
    bottom: f64,
    #[serde(default)]
    begin_at_zero: bool,
    #[serde(default)]
    stacked: bool,
}

impl TryFrom<LinearScaleConfig> for LinearScale {
    type Error = ChartError;

    fn try_from(config: LinearScaleConfig) -> ChartResult<Self> {
        Ok(Self::new(config.min, config.max, config.top, config.bottom)?
            .with_begin_at_zero(config.begin_at_zero)
            .with_stacked(config.stacked))
    }
}

impl LinearScale {
    pub fn new(min: f64, max: f64, top: f64, bottom: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(
                "linear scale range must be finite with max > min".to_owned(),
            ));
        }
        if !top.is_finite() || !bottom.is_finite() || top == bottom {
            return Err(ChartError::InvalidData(
                "linear scale pixel extent must be finite and non-empty".to_owned(),
            ));
        }

        Ok(Self {
            min,
            max,
            top,
            bottom,
            begin_at_zero: false,
            stacked: false,
        })
    }

    /// Fits the range to the values of `datasets`, always including zero.
    pub fn fit(data: &ChartData, top: f64, bottom: f64) -> ChartResult<Self> {
        let (min, max) = data
            .datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().copied())
            .filter(|value| value.is_finite())
            .fold((0.0_f64, 0.0_f64), |(min, max), value| {
                (min.min(value), max.max(value))
            });
        let max = if min == max { min + 1.0 } else { max };
        Self::new(min, max, top, bottom)
    }

    /// Always anchor bars on the zero value, even when it lies off range.
    #[must_use]
    pub fn with_begin_at_zero(mut self, begin_at_zero: bool) -> Self {
        self.begin_at_zero = begin_at_zero;
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Sums of positive and negative values of the bar datasets stacked
    /// below `dataset_index` on the same axis.
    fn stacked_sums(
        &self,
        context: &BarContext<'_>,
        dataset_index: usize,
        index: usize,
    ) -> (f64, f64) {
        let datasets = &context.data.datasets;
        let axis_id = datasets
            .get(dataset_index)
            .and_then(|dataset| dataset.y_axis_id.as_deref());

        datasets
            .iter()
            .take(dataset_index)
            .filter(|dataset| context.is_bar(dataset))
            .filter(|dataset| axis_id.is_none() || dataset.y_axis_id.as_deref() == axis_id)
            .filter_map(|dataset| dataset.data.get(index).copied())
            .fold((0.0, 0.0), |(positive, negative), value| {
                if value < 0.0 {
                    (positive, negative + value)
                } else {
                    (positive + value, negative)
                }
            })
    }
}

impl BarScale for LinearScale {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn pixel_for_value(&self, value: f64) -> f64 {
        let ratio = (value - self.min) / (self.max - self.min);
        self.bottom - ratio * (self.bottom - self.top)
    }

    fn calculate_bar_base(
        &self,
        context: &BarContext<'_>,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<f64> {
        if self.stacked {
            let value = context.value(dataset_index, index)?;
            let (positive, negative) = self.stacked_sums(context, dataset_index, index);
            let base = if value < 0.0 { negative } else { positive };
            return Ok(self.pixel_for_value(base));
        }

        let spans_zero = self.min <= 0.0 && self.max >= 0.0;
        let base = if self.begin_at_zero || spans_zero {
            self.pixel_for_value(0.0)
        } else if self.max < 0.0 {
            self.pixel_for_value(self.max)
        } else {
            self.pixel_for_value(self.min)
        };
        Ok(base)
    }

    fn calculate_bar_y(
        &self,
        context: &BarContext<'_>,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<f64> {
        let value = context.value(dataset_index, index)?;
        if !self.stacked {
            return Ok(self.pixel_for_value(value));
        }

        let (positive, negative) = self.stacked_sums(context, dataset_index, index);
        let top = if value < 0.0 {
            negative + value
        } else {
            positive + value
        };
        Ok(self.pixel_for_value(top))
    }
}
