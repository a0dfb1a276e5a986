//! Shared OOXML package helpers.

pub mod properties;

pub use properties::DocumentProperties;
