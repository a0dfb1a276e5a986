//! Styling primitives shared by slides and charts.

pub mod color;

pub use color::RGBColor;
