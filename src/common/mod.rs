//! Common types and utilities shared by the package writer, the chart
//! renderer and the deck builder.

pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

pub use error::{Error, Result};
pub use style::RGBColor;
pub use unit::{Emu, inches, points};
