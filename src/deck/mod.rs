//! Deck Builder.
//!
//! Builds the "Nokia: Why Did It Fail?" presentation: thirteen slides of
//! literal content in a fixed order, three of them with rendered charts.
//!
//! # Examples
//!
//! ```no_run
//! use nokia_deck::deck::{DeckBuilder, DeckConfig};
//!
//! # fn main() -> nokia_deck::Result<()> {
//! let mut builder = DeckBuilder::new(DeckConfig::default());
//! let report = builder.generate(&mut std::io::stdout())?;
//! assert_eq!(report.slide_count, 13);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod palette;
pub mod slides;

pub use config::DeckConfig;
pub use slides::LOGO_PLACEHOLDER_TEXT;

use crate::charts::ChartRenderer;
use crate::common::{Error, Result};
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::pptx::{MutablePresentation, PresentationSummary};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

type SlideBuilder = fn(&mut DeckBuilder) -> Result<()>;

/// Slide builders in deck order, with the name used in progress lines.
pub const SLIDE_BUILDERS: [(&str, SlideBuilder); 13] = [
    ("Title", DeckBuilder::add_title_slide),
    ("Agenda", DeckBuilder::add_agenda_slide),
    ("Company background", DeckBuilder::add_company_background_slide),
    ("Peak and decline", DeckBuilder::add_peak_decline_slide),
    ("Market trends", DeckBuilder::add_market_trends_slide),
    ("Competitive analysis", DeckBuilder::add_competitive_analysis_slide),
    ("Software strategy failures", DeckBuilder::add_software_strategy_failures_slide),
    ("SWOT analysis", DeckBuilder::add_swot_analysis_slide),
    ("Financial collapse", DeckBuilder::add_financial_collapse_slide),
    ("Product gallery", DeckBuilder::add_product_gallery_slide),
    ("Lessons learned", DeckBuilder::add_lessons_learned_slide),
    ("Future outlook", DeckBuilder::add_future_outlook_slide),
    ("Thank you", DeckBuilder::add_thank_you_slide),
];

/// Feature lines printed after saving.
const SUMMARY_FEATURES: [&str; 5] = [
    "Professional Nokia-branded design",
    "Comprehensive failure analysis",
    "Interactive charts and diagrams",
    "SWOT analysis and lessons learned",
    "Future outlook and Q&A",
];

/// Outcome of a successful [`DeckBuilder::generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub slide_count: usize,
    pub chart_count: usize,
}

/// Builds the deck slide by slide and saves it.
#[derive(Debug)]
pub struct DeckBuilder {
    prs: MutablePresentation,
    config: DeckConfig,
    renderer: ChartRenderer,
    chart_count: usize,
}

impl DeckBuilder {
    /// Create a builder with an empty 16:9 presentation.
    pub fn new(config: DeckConfig) -> Self {
        Self {
            prs: Self::empty_presentation(&config),
            renderer: ChartRenderer::new(config.chart.clone()),
            config,
            chart_count: 0,
        }
    }

    fn empty_presentation(config: &DeckConfig) -> MutablePresentation {
        let mut prs = MutablePresentation::new();
        prs.set_slide_size(config.slide_width, config.slide_height);
        prs.set_properties(
            DocumentProperties::new()
                .title("Nokia: Why Did It Fail?")
                .subject("Industry Analysis & Lessons Learned")
                .creator("nokia-deck")
                .stamped_now(),
        );
        prs
    }

    /// Build every slide in order, save to the configured output path and
    /// write progress and summary lines to `out`.
    ///
    /// Starts from an empty presentation, so calling it again rebuilds the
    /// same deck.
    pub fn generate<W: Write>(&mut self, out: &mut W) -> Result<GenerationReport> {
        self.prs = Self::empty_presentation(&self.config);
        self.chart_count = 0;

        writeln!(out, "Generating Nokia Failure Analysis Presentation...")?;
        for (name, build) in SLIDE_BUILDERS {
            build(self)?;
            debug!(slide = self.prs.slide_count(), name, "slide built");
            writeln!(out, "✓ {} slide created", name)?;
        }

        let output_path = self.config.output_path.clone();
        self.save(&output_path)?;

        writeln!(out, "\n🎉 Presentation saved as '{}'", output_path.display())?;
        writeln!(out, "📊 Total slides: {}", self.prs.slide_count())?;
        writeln!(out, "\n📋 Presentation includes:")?;
        for feature in SUMMARY_FEATURES {
            writeln!(out, "   • {}", feature)?;
        }

        Ok(GenerationReport {
            output_path,
            slide_count: self.prs.slide_count(),
            chart_count: self.chart_count,
        })
    }

    /// Write the presentation as a `.pptx` file, replacing any existing file.
    ///
    /// The saved file is read back and must list every slide.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.prs.save(path)?;

        let saved = PresentationSummary::open(path)?;
        if saved.slide_count() != self.prs.slide_count() {
            return Err(Error::Other(format!(
                "{} lists {} slides, expected {}",
                path.display(),
                saved.slide_count(),
                self.prs.slide_count()
            )));
        }

        info!(
            path = %path.display(),
            slides = saved.slide_count(),
            pictures = saved.picture_count(),
            media = saved.media_count,
            "presentation saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartRenderOptions;

    fn small_config(dir: &Path, output: &str) -> DeckConfig {
        let mut config = DeckConfig::default()
            .with_output(dir.join(output))
            .with_logo(dir.join("missing.png"));
        config.chart = ChartRenderOptions {
            width: 240,
            height: 144,
            ..ChartRenderOptions::default()
        };
        config
    }

    #[test]
    fn test_slide_order() {
        let names: Vec<&str> = SLIDE_BUILDERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.first(), Some(&"Title"));
        assert_eq!(names.last(), Some(&"Thank you"));
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn test_generate_writes_progress_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deck.pptx");
        let mut builder = DeckBuilder::new(small_config(dir.path(), "deck.pptx"));
        let mut log = Vec::new();
        let report = builder.generate(&mut log).unwrap();

        assert_eq!(report.slide_count, 13);
        assert_eq!(report.chart_count, 4);
        assert_eq!(report.output_path, output);

        let log = String::from_utf8(log).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines[0], "Generating Nokia Failure Analysis Presentation...");
        assert_eq!(lines[1], "✓ Title slide created");
        assert_eq!(lines[13], "✓ Thank you slide created");
        assert!(log.contains("📊 Total slides: 13"));
        assert!(log.contains("   • Future outlook and Q&A"));

        let summary = PresentationSummary::open(&output).unwrap();
        assert_eq!(summary.slide_count(), 13);
        assert_eq!(summary.media_count, 4);
    }

    #[test]
    fn test_generate_twice_rebuilds() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = DeckBuilder::new(small_config(dir.path(), "deck.pptx"));
        builder.generate(&mut std::io::sink()).unwrap();
        let report = builder.generate(&mut std::io::sink()).unwrap();
        assert_eq!(report.slide_count, 13);
        assert_eq!(report.chart_count, 4);
    }

    #[test]
    fn test_save_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = DeckBuilder::new(small_config(dir.path(), "no/such/dir/deck.pptx"));
        assert!(builder.generate(&mut std::io::sink()).is_err());
    }
}
