//! nokia-deck - generates the "Nokia: Why Did It Fail?" case-study deck
//!
//! The crate writes a thirteen-slide PowerPoint (.pptx) presentation with
//! embedded bar, line and pie charts. It carries its own small
//! PresentationML writer and a raster chart renderer.
//!
//! # Modules
//!
//! - [`deck`]: the Deck Builder, one builder routine per slide
//! - [`charts`]: the Chart Renderer (layout, rasterization, PNG encoding)
//! - [`ooxml`]: the OPC package and PresentationML writer, plus read-back
//! - [`common`]: errors, units, colors and XML helpers
//! - [`cli`]: command-line arguments
//!
//! # Example
//!
//! ```no_run
//! use nokia_deck::deck::{DeckBuilder, DeckConfig};
//!
//! # fn main() -> nokia_deck::Result<()> {
//! let config = DeckConfig::default().with_output("nokia.pptx");
//! let report = DeckBuilder::new(config).generate(&mut std::io::stdout())?;
//! println!("{} slides, {} charts", report.slide_count, report.chart_count);
//! # Ok(())
//! # }
//! ```

pub mod charts;
pub mod cli;
pub mod common;
pub mod deck;
pub mod ooxml;

pub use common::{Error, Result};
pub use deck::{DeckBuilder, DeckConfig, GenerationReport};
