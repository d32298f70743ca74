use serde::{Deserialize, Serialize};

use crate::core::{Color, RectangleDefaults};
use crate::render::{RectPrimitive, RenderFrame};

/// Resolved visual state of one bar, in pixels.
///
/// `x` is the horizontal center, `y` the value end of the bar and `base` the
/// end it grows from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleModel {
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
    pub dataset_label: Option<String>,
    pub base: f64,
    pub width: f64,
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl Default for RectangleModel {
    fn default() -> Self {
        let defaults = RectangleDefaults::default();
        Self {
            x: 0.0,
            y: 0.0,
            label: None,
            dataset_label: None,
            base: 0.0,
            width: 0.0,
            background_color: defaults.background_color,
            border_color: defaults.border_color,
            border_width: defaults.border_width,
        }
    }
}

impl RectangleModel {
    /// Interpolates geometry and colors; labels switch to `target` at once.
    #[must_use]
    pub fn interpolate(start: &Self, target: &Self, ease: f64) -> Self {
        let lerp = |from: f64, to: f64| from + (to - from) * ease;
        Self {
            x: lerp(start.x, target.x),
            y: lerp(start.y, target.y),
            label: target.label.clone(),
            dataset_label: target.dataset_label.clone(),
            base: lerp(start.base, target.base),
            width: lerp(start.width, target.width),
            background_color: start.background_color.mix(target.background_color, ease),
            border_color: start.border_color.mix(target.border_color, ease),
            border_width: lerp(start.border_width, target.border_width),
        }
    }
}

/// Per-element style overrides; they win over dataset and chart styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleCustomStyle {
    #[serde(default)]
    pub background_color: Option<Color>,
    #[serde(default)]
    pub border_color: Option<Color>,
    #[serde(default)]
    pub border_width: Option<f64>,
    #[serde(default)]
    pub hover_background_color: Option<Color>,
    #[serde(default)]
    pub hover_border_color: Option<Color>,
    #[serde(default)]
    pub hover_border_width: Option<f64>,
}

/// Drawable element for one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleElement {
    pub dataset_index: usize,
    pub index: usize,
    pub x_scale_id: Option<String>,
    pub y_scale_id: Option<String>,
    pub model: RectangleModel,
    pub custom: Option<RectangleCustomStyle>,
    view: Option<RectangleModel>,
    start: Option<RectangleModel>,
}

impl RectangleElement {
    #[must_use]
    pub fn new(dataset_index: usize, index: usize) -> Self {
        Self {
            dataset_index,
            index,
            x_scale_id: None,
            y_scale_id: None,
            model: RectangleModel::default(),
            custom: None,
            view: None,
            start: None,
        }
    }

    /// What is currently on screen; the model until a transition ran.
    #[must_use]
    pub fn view(&self) -> &RectangleModel {
        self.view.as_ref().unwrap_or(&self.model)
    }

    /// Freezes the current view as the start of the next transition.
    pub fn pivot(&mut self) -> &mut Self {
        let view = self.view.get_or_insert_with(|| self.model.clone()).clone();
        self.start = Some(view);
        self
    }

    /// Moves the view `ease` (0..=1) of the way from the pivot to the model.
    pub fn transition(&mut self, ease: f64) -> &mut Self {
        if self.view.is_none() || ease >= 1.0 {
            self.view = Some(self.model.clone());
            self.start = None;
            return self;
        }

        let ease = ease.max(0.0);
        let start = match (&self.start, &self.view) {
            (Some(start), _) | (None, Some(start)) => start.clone(),
            (None, None) => self.model.clone(),
        };
        self.start = Some(start.clone());
        self.view = Some(RectangleModel::interpolate(&start, &self.model, ease));
        self
    }

    /// Appends this bar to `frame`, inset so the border stays inside the bar.
    pub fn draw(&self, frame: &mut RenderFrame) {
        let view = self.view();
        let half_width = view.width / 2.0;
        let mut left = view.x - half_width;
        let mut right = view.x + half_width;
        let mut top = view.y;

        if view.border_width > 0.0 {
            // Never inset past the opposite edge of a thin bar.
            let half_stroke = view.border_width / 2.0;
            let horizontal = half_stroke.min(half_width.abs());
            let vertical = half_stroke.min((view.base - top).abs() / 2.0);
            left += horizontal;
            right -= horizontal;
            if top <= view.base {
                top += vertical;
            } else {
                top -= vertical;
            }
        }

        let rect = RectPrimitive::new(
            left,
            top.min(view.base),
            (right - left).max(0.0),
            (view.base - top).abs(),
            view.background_color,
        )
        .with_border(view.border_color, view.border_width);
        frame.push_rect(rect);
    }

    /// Whether a pointer at `(x, y)` is over the drawn bar.
    #[must_use]
    pub fn in_range(&self, x: f64, y: f64) -> bool {
        let view = self.view();
        let half_width = view.width / 2.0;
        let (top, bottom) = if view.y <= view.base {
            (view.y, view.base)
        } else {
            (view.base, view.y)
        };
        (view.x - half_width..=view.x + half_width).contains(&x) && (top..=bottom).contains(&y)
    }

    #[must_use]
    pub fn tooltip_position(&self) -> (f64, f64) {
        let view = self.view();
        (view.x, view.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{RectangleElement, RectangleModel};
    use crate::core::{Color, Viewport};
    use crate::render::RenderFrame;

    fn bar(y: f64, base: f64) -> RectangleElement {
        let mut element = RectangleElement::new(0, 0);
        element.model = RectangleModel {
            x: 50.0,
            y,
            base,
            width: 20.0,
            ..RectangleModel::default()
        };
        element
    }

    #[test]
    fn transition_interpolates_from_pivot() {
        let mut element = bar(100.0, 100.0);
        element.pivot();
        element.model.y = 20.0;
        element.model.background_color = Color::rgb(200, 0, 0);

        element.transition(0.5);
        assert_eq!(element.view().y, 60.0);
        assert_eq!(element.view().background_color.red, 100);

        element.transition(1.0);
        assert_eq!(element.view(), &element.model);
    }

    #[test]
    fn border_inset_stays_inside_flat_bars() {
        let mut element = bar(100.0, 100.0);
        element.model.border_width = 4.0;
        let mut frame = RenderFrame::new(Viewport::new(200, 200));
        element.draw(&mut frame);

        let rect = frame.rects[0];
        assert_eq!(rect.y, 100.0);
        assert_eq!(rect.height, 0.0);
        assert_eq!(rect.x, 42.0);
    }

    #[test]
    fn hit_testing_covers_negative_bars() {
        let element = bar(150.0, 100.0);
        assert!(element.in_range(45.0, 120.0));
        assert!(!element.in_range(45.0, 90.0));
        assert!(!element.in_range(61.0, 120.0));
    }
}
