use tracing::{debug, trace};

use crate::core::{BarScale, Chart, Color, Dataset, value_at_index_or};
use crate::elements::{RectangleElement, RectangleModel};
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

/// Drives the bars of one dataset.
///
/// The controller only remembers which dataset it serves. Every operation
/// takes the chart explicitly; elements live in the dataset's `meta_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarController {
    index: usize,
}

impl BarController {
    /// Binds to `dataset_index`, links missing axis ids to the first
    /// configured axes and creates one element per value.
    pub fn new(chart: &mut Chart, dataset_index: usize) -> ChartResult<Self> {
        let controller = Self {
            index: dataset_index,
        };
        controller.link_scales(chart)?;
        controller.add_elements(chart)?;
        let elements = controller.dataset(chart)?.meta_data.len();
        debug!(dataset_index, elements, "bar controller created");
        Ok(controller)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rebinds after datasets were reordered or removed.
    pub fn update_index(&mut self, dataset_index: usize) {
        debug!(from = self.index, to = dataset_index, "bar controller reindexed");
        self.index = dataset_index;
    }

    pub fn dataset<'a>(&self, chart: &'a Chart) -> ChartResult<&'a Dataset> {
        let len = chart.data.datasets.len();
        chart
            .data
            .datasets
            .get(self.index)
            .ok_or(ChartError::DatasetOutOfRange {
                index: self.index,
                len,
            })
    }

    pub fn dataset_mut<'a>(&self, chart: &'a mut Chart) -> ChartResult<&'a mut Dataset> {
        let len = chart.data.datasets.len();
        chart
            .data
            .datasets
            .get_mut(self.index)
            .ok_or(ChartError::DatasetOutOfRange {
                index: self.index,
                len,
            })
    }

    pub fn scale_for_id<'a>(&self, chart: &'a Chart, id: &str) -> ChartResult<&'a dyn BarScale> {
        chart
            .scale(id)
            .ok_or_else(|| ChartError::UnknownScale(id.to_owned()))
    }

    /// Assigns the first configured x/y axis to a dataset that names none.
    pub fn link_scales(&self, chart: &mut Chart) -> ChartResult<()> {
        let first_x = chart.options.scales.x_axes.first().map(|axis| axis.id.clone());
        let first_y = chart.options.scales.y_axes.first().map(|axis| axis.id.clone());
        let dataset = self.dataset_mut(chart)?;

        if dataset.x_axis_id.is_none() {
            let id = first_x.ok_or(ChartError::MissingAxis { axis: "x" })?;
            debug!(dataset_index = self.index, axis_id = %id, "linked default x axis");
            dataset.x_axis_id = Some(id);
        }
        if dataset.y_axis_id.is_none() {
            let id = first_y.ok_or(ChartError::MissingAxis { axis: "y" })?;
            debug!(dataset_index = self.index, axis_id = %id, "linked default y axis");
            dataset.y_axis_id = Some(id);
        }
        Ok(())
    }

    /// Number of datasets drawn as bars, which share each category slot.
    #[must_use]
    pub fn get_bar_count(&self, chart: &Chart) -> usize {
        chart.bar_context().bar_count()
    }

    /// Creates elements for every value that has none yet.
    pub fn add_elements(&self, chart: &mut Chart) -> ChartResult<()> {
        let dataset_index = self.index;
        let dataset = self.dataset_mut(chart)?;
        let existing = dataset.meta_data.len();
        dataset.meta_data.extend(
            (existing..dataset.data.len()).map(|index| RectangleElement::new(dataset_index, index)),
        );
        Ok(())
    }

    /// Inserts an element at `index` collapsed onto the baseline, ready to
    /// animate towards its value on the next update.
    pub fn add_element_and_reset(&self, chart: &mut Chart, index: usize) -> ChartResult<()> {
        let dataset_index = self.index;
        let dataset = self.dataset_mut(chart)?;
        let len = dataset.meta_data.len();
        if index > len {
            return Err(ChartError::ElementOutOfRange { index, len });
        }

        dataset
            .meta_data
            .insert(index, RectangleElement::new(dataset_index, index));
        renumber_from(&mut dataset.meta_data, index + 1);

        if let Err(err) = self.update_element(chart, index, true) {
            let dataset = self.dataset_mut(chart)?;
            dataset.meta_data.remove(index);
            renumber_from(&mut dataset.meta_data, index);
            return Err(err);
        }
        Ok(())
    }

    /// Brings the element count in line with the data after values were
    /// added or removed. A failed grow leaves the elements as they were.
    pub fn build_or_update_elements(&self, chart: &mut Chart) -> ChartResult<()> {
        let dataset = self.dataset_mut(chart)?;
        let values = dataset.data.len();
        let elements = dataset.meta_data.len();

        if values < elements {
            dataset.meta_data.truncate(values);
            debug!(
                dataset_index = self.index,
                removed = elements - values,
                "dropped surplus bar elements"
            );
        } else if values > elements {
            for index in elements..values {
                if let Err(err) = self.add_element_and_reset(chart, index) {
                    self.dataset_mut(chart)?.meta_data.truncate(elements);
                    return Err(err);
                }
            }
            debug!(
                dataset_index = self.index,
                added = values - elements,
                "added bar elements"
            );
        }
        Ok(())
    }

    /// Removes the element at `index`; later elements shift down by one.
    pub fn remove_element(&self, chart: &mut Chart, index: usize) -> ChartResult<()> {
        let dataset = self.dataset_mut(chart)?;
        let len = dataset.meta_data.len();
        if index >= len {
            return Err(ChartError::ElementOutOfRange { index, len });
        }

        dataset.meta_data.remove(index);
        renumber_from(&mut dataset.meta_data, index);
        debug!(dataset_index = self.index, index, "removed bar element");
        Ok(())
    }

    /// Recomputes every element model from scales, labels and styles.
    pub fn update(&self, chart: &mut Chart) -> ChartResult<()> {
        self.update_elements(chart, false)
    }

    /// Like `update`, but collapses every bar onto the scale baseline.
    pub fn reset(&self, chart: &mut Chart) -> ChartResult<()> {
        self.update_elements(chart, true)
    }

    fn update_elements(&self, chart: &mut Chart, reset: bool) -> ChartResult<()> {
        let count = self.dataset(chart)?.meta_data.len();
        for index in 0..count {
            self.update_element(chart, index, reset)?;
        }
        trace!(dataset_index = self.index, count, reset, "updated bar elements");
        Ok(())
    }

    pub fn update_element(&self, chart: &mut Chart, index: usize, reset: bool) -> ChartResult<()> {
        let bar_count = self.get_bar_count(chart);
        let dataset = self.dataset(chart)?;
        let element = dataset
            .meta_data
            .get(index)
            .ok_or(ChartError::ElementOutOfRange {
                index,
                len: dataset.meta_data.len(),
            })?;

        let x_axis_id = dataset
            .x_axis_id
            .clone()
            .ok_or(ChartError::MissingAxis { axis: "x" })?;
        let y_axis_id = dataset
            .y_axis_id
            .clone()
            .ok_or(ChartError::MissingAxis { axis: "y" })?;
        let x_scale = self.scale_for_id(chart, &x_axis_id)?;
        let y_scale = self.scale_for_id(chart, &y_axis_id)?;

        let custom = element.custom.unwrap_or_default();
        let defaults = chart.options.elements.rectangle;
        let context = chart.bar_context();

        let y = if reset {
            y_scale.reset_baseline()
        } else {
            y_scale.calculate_bar_y(&context, self.index, index)?
        };
        let model = RectangleModel {
            x: x_scale.calculate_bar_x(&context, bar_count, self.index, index)?,
            y,
            label: chart.data.labels.get(index).cloned(),
            dataset_label: dataset.label.clone(),
            base: y_scale.calculate_bar_base(&context, self.index, index)?,
            width: x_scale.calculate_bar_width(&context, bar_count)?,
            background_color: custom.background_color.unwrap_or_else(|| {
                value_at_index_or(
                    dataset.background_color.as_ref(),
                    index,
                    defaults.background_color,
                )
            }),
            border_color: custom.border_color.unwrap_or_else(|| {
                value_at_index_or(dataset.border_color.as_ref(), index, defaults.border_color)
            }),
            border_width: custom.border_width.unwrap_or_else(|| {
                value_at_index_or(dataset.border_width.as_ref(), index, defaults.border_width)
            }),
        };

        let dataset_index = self.index;
        let element = &mut self.dataset_mut(chart)?.meta_data[index];
        element.dataset_index = dataset_index;
        element.index = index;
        element.x_scale_id = Some(x_axis_id);
        element.y_scale_id = Some(y_axis_id);
        element.model = model;
        element.pivot();
        Ok(())
    }

    /// Advances every element's transition by `ease` and draws it, in index
    /// order, into `frame`.
    pub fn draw(&self, chart: &mut Chart, ease: f64, frame: &mut RenderFrame) -> ChartResult<()> {
        let dataset = self.dataset_mut(chart)?;
        for element in &mut dataset.meta_data {
            element.transition(ease).draw(frame);
        }
        trace!(
            dataset_index = self.index,
            count = dataset.meta_data.len(),
            ease,
            "drew bar elements"
        );
        Ok(())
    }

    /// Applies hover styling to the element at `index`.
    ///
    /// Each field resolves custom hover override, then the dataset hover
    /// style, then a derived default: colors saturated and darkened from the
    /// current model, border width unchanged.
    pub fn set_hover_style(&self, chart: &mut Chart, index: usize) -> ChartResult<()> {
        let dataset = self.dataset_mut(chart)?;
        let len = dataset.meta_data.len();
        let element = dataset
            .meta_data
            .get(index)
            .ok_or(ChartError::ElementOutOfRange { index, len })?;
        let custom = element.custom.unwrap_or_default();
        let style_index = element.index;
        let model = &element.model;

        let background_color = custom.hover_background_color.unwrap_or_else(|| {
            value_at_index_or(
                dataset.hover_background_color.as_ref(),
                style_index,
                hover_color(model.background_color),
            )
        });
        let border_color = custom.hover_border_color.unwrap_or_else(|| {
            value_at_index_or(
                dataset.hover_border_color.as_ref(),
                style_index,
                hover_color(model.border_color),
            )
        });
        let border_width = custom.hover_border_width.unwrap_or_else(|| {
            value_at_index_or(
                dataset.hover_border_width.as_ref(),
                style_index,
                model.border_width,
            )
        });

        let model = &mut dataset.meta_data[index].model;
        model.background_color = background_color;
        model.border_color = border_color;
        model.border_width = border_width;
        trace!(dataset_index = self.index, index, "hover style set");
        Ok(())
    }

    /// Restores the non-hover style of the element at `index`: custom
    /// override, then dataset style, then chart rectangle defaults.
    pub fn remove_hover_style(&self, chart: &mut Chart, index: usize) -> ChartResult<()> {
        let defaults = chart.options.elements.rectangle;
        let dataset = self.dataset_mut(chart)?;
        let len = dataset.meta_data.len();
        let element = dataset
            .meta_data
            .get(index)
            .ok_or(ChartError::ElementOutOfRange { index, len })?;
        let custom = element.custom.unwrap_or_default();
        let style_index = element.index;

        let background_color = custom.background_color.unwrap_or_else(|| {
            value_at_index_or(
                dataset.background_color.as_ref(),
                style_index,
                defaults.background_color,
            )
        });
        let border_color = custom.border_color.unwrap_or_else(|| {
            value_at_index_or(
                dataset.border_color.as_ref(),
                style_index,
                defaults.border_color,
            )
        });
        let border_width = custom.border_width.unwrap_or_else(|| {
            value_at_index_or(
                dataset.border_width.as_ref(),
                style_index,
                defaults.border_width,
            )
        });

        let model = &mut dataset.meta_data[index].model;
        model.background_color = background_color;
        model.border_color = border_color;
        model.border_width = border_width;
        trace!(dataset_index = self.index, index, "hover style removed");
        Ok(())
    }

    /// Indices of the elements drawn under the pointer at `(x, y)`.
    pub fn elements_at(&self, chart: &Chart, x: f64, y: f64) -> ChartResult<Vec<usize>> {
        Ok(self
            .dataset(chart)?
            .meta_data
            .iter()
            .enumerate()
            .filter(|(_, element)| element.in_range(x, y))
            .map(|(position, _)| position)
            .collect())
    }
}

fn hover_color(color: Color) -> Color {
    color.saturate(0.5).darken(0.1)
}

fn renumber_from(elements: &mut [RectangleElement], start: usize) {
    for (position, element) in elements.iter_mut().enumerate().skip(start) {
        element.index = position;
    }
}
