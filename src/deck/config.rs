//! Deck generation settings.

use crate::charts::ChartRenderOptions;
use crate::common::{Emu, inches};
use std::path::PathBuf;

/// Default output file, written to the working directory.
pub const DEFAULT_OUTPUT: &str = "Nokia_Failure_Analysis_PowerPynt.pptx";

/// Default logo image, looked up in the working directory.
pub const DEFAULT_LOGO: &str = "nokia_logo.png";

/// Configuration for [`DeckBuilder`](super::DeckBuilder).
///
/// The defaults reproduce the fixed deck; the command line can override the
/// paths.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    /// Where the `.pptx` file is written
    pub output_path: PathBuf,
    /// Logo embedded on the title slide when the file exists
    pub logo_path: PathBuf,
    /// Slide width in EMUs
    pub slide_width: Emu,
    /// Slide height in EMUs
    pub slide_height: Emu,
    /// Pixel size of rendered charts
    pub chart: ChartRenderOptions,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            logo_path: PathBuf::from(DEFAULT_LOGO),
            slide_width: inches(13.33),
            slide_height: inches(7.5),
            chart: ChartRenderOptions::default(),
        }
    }
}

impl DeckConfig {
    /// Builder method: set the output path.
    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = path.into();
        self
    }

    /// Builder method: set the logo path.
    pub fn with_logo<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.logo_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeckConfig::default();
        assert_eq!(config.output_path, PathBuf::from("Nokia_Failure_Analysis_PowerPynt.pptx"));
        assert_eq!(config.logo_path, PathBuf::from("nokia_logo.png"));
        assert_eq!((config.slide_width, config.slide_height), (12_188_952, 6_858_000));
        assert_eq!((config.chart.width, config.chart.height), (1500, 900));
    }

    #[test]
    fn test_overrides() {
        let config = DeckConfig::default().with_output("out/deck.pptx").with_logo("/tmp/logo.png");
        assert_eq!(config.output_path, PathBuf::from("out/deck.pptx"));
        assert_eq!(config.logo_path, PathBuf::from("/tmp/logo.png"));
    }
}
