use std::fmt::Debug;

use crate::core::{ChartData, ChartType, Dataset};
use crate::error::{ChartError, ChartResult};

/// Chart state a scale measures bars against: the data plus the chart-wide
/// type that untyped datasets inherit.
#[derive(Debug, Clone, Copy)]
pub struct BarContext<'a> {
    pub data: &'a ChartData,
    pub chart_type: ChartType,
}

impl<'a> BarContext<'a> {
    #[must_use]
    pub fn new(data: &'a ChartData, chart_type: ChartType) -> Self {
        Self { data, chart_type }
    }

    pub fn value(&self, dataset_index: usize, index: usize) -> ChartResult<f64> {
        self.data.value(dataset_index, index)
    }

    #[must_use]
    pub fn is_bar(&self, dataset: &Dataset) -> bool {
        dataset.resolved_type(self.chart_type) == ChartType::Bar
    }

    /// Number of datasets drawn as bars.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.data
            .datasets
            .iter()
            .filter(|dataset| self.is_bar(dataset))
            .count()
    }

    /// Slot of `dataset_index` among the bar datasets, counting only the bar
    /// datasets before it.
    #[must_use]
    pub fn bar_position(&self, dataset_index: usize) -> usize {
        self.data
            .datasets
            .iter()
            .take(dataset_index)
            .filter(|dataset| self.is_bar(dataset))
            .count()
    }
}

/// Bar geometry capability of a resolved axis.
///
/// Controllers ask the x axis for bar width and center, and the y axis for
/// bar top and base, all in pixels. Calculators receive a `BarContext` over
/// the chart they measure so implementations never hold a reference back
/// into the chart. An axis only implements the side it serves; the defaults
/// report the missing capability as an error.
pub trait BarScale: Debug + Send + Sync {
    fn min(&self) -> f64;

    fn max(&self) -> f64;

    fn pixel_for_value(&self, value: f64) -> f64;

    fn calculate_bar_width(
        &self,
        context: &BarContext<'_>,
        bar_count: usize,
    ) -> ChartResult<f64> {
        let _ = (context, bar_count);
        Err(unsupported("calculate_bar_width"))
    }

    fn calculate_bar_x(
        &self,
        context: &BarContext<'_>,
        bar_count: usize,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<f64> {
        let _ = (context, bar_count, dataset_index, index);
        Err(unsupported("calculate_bar_x"))
    }

    fn calculate_bar_base(
        &self,
        context: &BarContext<'_>,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<f64> {
        let _ = (context, dataset_index, index);
        Err(unsupported("calculate_bar_base"))
    }

    fn calculate_bar_y(
        &self,
        context: &BarContext<'_>,
        dataset_index: usize,
        index: usize,
    ) -> ChartResult<f64> {
        let _ = (context, dataset_index, index);
        Err(unsupported("calculate_bar_y"))
    }

    /// Pixel row a bar collapses onto before it animates in: the zero line,
    /// or the bound closest to zero when the range does not contain it.
    fn reset_baseline(&self) -> f64 {
        let (min, max) = (self.min(), self.max());
        if min < 0.0 && max < 0.0 {
            self.pixel_for_value(max)
        } else if min > 0.0 && max > 0.0 {
            self.pixel_for_value(min)
        } else {
            self.pixel_for_value(0.0)
        }
    }
}

fn unsupported(operation: &str) -> ChartError {
    ChartError::InvalidData(format!("scale does not provide `{operation}`"))
}
