pub mod bar;

pub use bar::BarController;
