//! PowerPoint (.pptx) presentation support.
//!
//! - [`writer`]: a mutable presentation model (slides, text boxes, auto
//!   shapes, connectors, pictures, layout placeholders) serialized to a
//!   PresentationML package
//! - [`reader`]: read-back of saved files for verification
//! - [`template`]: the fixed slide master, layouts and theme every deck uses

pub mod format;
pub mod reader;
pub mod template;
pub mod writer;

pub use format::{Alignment, ImageFormat, TextFormat};
pub use reader::{PresentationSummary, SlideSummary};
pub use writer::{
    Bounds, Geometry, LineStyle, MutablePresentation, MutableShape, MutableSlide, Paragraph,
    PlaceholderKind, SlideLayout, TextBody,
};
