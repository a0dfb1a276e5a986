//! Chart Renderer.
//!
//! Turns a labelled data series into a bar, line or pie chart image. Charts
//! are first laid out as a [`Figure`], a flat list of drawing marks, and then
//! rasterized onto an RGBA canvas and encoded as PNG for embedding in a
//! slide.
//!
//! # Examples
//!
//! ```rust
//! use nokia_deck::charts::{Chart, ChartRenderer};
//!
//! let chart = Chart::pie("2014 Smartphone Market Share",
//!     &["Samsung", "Apple", "Nokia", "Huawei", "Others"],
//!     &[28.0, 23.0, 3.0, 8.0, 38.0]);
//!
//! let renderer = ChartRenderer::default();
//! assert_eq!(renderer.layout(&chart).unwrap().wedge_count(), 5);
//!
//! let png = renderer.render_png(&chart).unwrap();
//! assert!(png.starts_with(b"\x89PNG"));
//! ```

mod canvas;
pub mod chart;
pub mod figure;
pub mod glyphs;
pub mod layout;
pub mod renderer;

pub use chart::{Chart, ChartKind};
pub use figure::{Figure, Mark, TextAlign, TextStyle};
pub use renderer::{ChartRenderOptions, ChartRenderer};
