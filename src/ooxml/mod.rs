//! Office Open XML (OOXML) presentation writing.
//!
//! The module is organized into layers:
//!
//! 1. **OPC Layer** (`opc`): package assembly (parts, relationships, ZIP)
//! 2. **Shared Utilities** (`common`, `error`): document properties and errors
//! 3. **PresentationML** (`pptx`): a mutable slide model serialized to
//!    `.pptx`, plus a small reader for inspecting saved files
//!
//! # Example
//!
//! ```rust,no_run
//! use nokia_deck::ooxml::pptx::{MutablePresentation, SlideLayout};
//! use nokia_deck::common::inches;
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(SlideLayout::Blank);
//! slide
//!     .add_text_box(inches(1.0), inches(1.0), inches(4.0), inches(1.0))
//!     .set_text("Hello")
//!     .font_size(24.0);
//! pres.save("hello.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod common;
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
