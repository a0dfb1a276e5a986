//! Unified error type for deck generation.
//!
//! Errors raised while building slides, rendering charts or writing the
//! package all surface as [`Error`], so callers only ever match on one type.

pub mod types;

pub use types::{Error, Result};
