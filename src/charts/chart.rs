/// Chart input: a kind, a title and one labelled data series.
use crate::common::{Error, RGBColor, Result};

/// Title color and line color.
pub const CHART_BLUE: RGBColor = RGBColor::new(0x12, 0x41, 0x91);

/// Bar fill colors, cycled per bar.
pub const BAR_COLORS: [RGBColor; 4] = [
    CHART_BLUE,
    RGBColor::new(0x00, 0x77, 0xCC),
    RGBColor::new(0xFF, 0x6B, 0x35),
    RGBColor::new(0x4C, 0xAF, 0x50),
];

/// Wedge colors, cycled per wedge.
pub const PIE_COLORS: [RGBColor; 5] = [
    CHART_BLUE,
    RGBColor::new(0x00, 0x77, 0xCC),
    RGBColor::new(0xFF, 0x6B, 0x35),
    RGBColor::new(0x4C, 0xAF, 0x50),
    RGBColor::new(0xFF, 0xC1, 0x07),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
        }
    }
}

/// A chart to render.
///
/// For bar and pie charts `labels` name the bars or wedges; for line charts
/// they are the x-axis categories (years), evenly spaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Chart {
    pub fn new<L: ToString>(kind: ChartKind, title: &str, labels: &[L], values: &[f64]) -> Self {
        Self {
            kind,
            title: title.to_string(),
            labels: labels.iter().map(ToString::to_string).collect(),
            values: values.to_vec(),
        }
    }

    pub fn bar<L: ToString>(title: &str, labels: &[L], values: &[f64]) -> Self {
        Self::new(ChartKind::Bar, title, labels, values)
    }

    pub fn line<L: ToString>(title: &str, labels: &[L], values: &[f64]) -> Self {
        Self::new(ChartKind::Line, title, labels, values)
    }

    pub fn pie<L: ToString>(title: &str, labels: &[L], values: &[f64]) -> Self {
        Self::new(ChartKind::Pie, title, labels, values)
    }

    /// Reject data that cannot be plotted.
    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(Error::InvalidChart(format!(
                "{} chart '{}' has no values",
                self.kind.name(),
                self.title
            )));
        }
        if self.labels.len() != self.values.len() {
            return Err(Error::InvalidChart(format!(
                "{} chart '{}' has {} labels but {} values",
                self.kind.name(),
                self.title,
                self.labels.len(),
                self.values.len()
            )));
        }
        if let Some(bad) = self.values.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidChart(format!(
                "{} chart '{}' has non-finite value {}",
                self.kind.name(),
                self.title,
                bad
            )));
        }
        if self.kind == ChartKind::Pie {
            if let Some(negative) = self.values.iter().find(|v| **v < 0.0) {
                return Err(Error::InvalidChart(format!(
                    "pie chart '{}' has negative value {}",
                    self.title, negative
                )));
            }
            if self.values.iter().sum::<f64>() <= 0.0 {
                return Err(Error::InvalidChart(format!(
                    "pie chart '{}' values sum to zero",
                    self.title
                )));
            }
        }
        Ok(())
    }
}
