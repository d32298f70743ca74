pub mod rectangle;

pub use rectangle::{RectangleCustomStyle, RectangleElement, RectangleModel};
