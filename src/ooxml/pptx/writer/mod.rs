//! Mutable presentation writer components for PPTX.

pub mod pres;
pub(crate) mod relmap;
pub mod shape;
pub mod slide;
pub mod text;

// Re-export main types
pub use pres::MutablePresentation;
pub use shape::{Bounds, Geometry, LineStyle, MutableShape, PlaceholderKind};
pub use slide::{MutableSlide, SlideLayout};
pub use text::{Paragraph, TextBody};
