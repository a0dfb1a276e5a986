//! Resolution-independent drawing list produced by chart layout.
//!
//! Coordinates are pixels with the origin at the top-left corner and y
//! growing downwards. Angles are degrees, counter-clockwise from the
//! positive x axis (screen right).

use crate::common::RGBColor;

/// Horizontal anchoring of a text mark relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Text appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Pixel size of one font cell
    pub scale: u32,
    pub color: RGBColor,
    pub bold: bool,
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Filled axis-aligned rectangle (a bar)
    Bar {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: RGBColor,
    },
    /// Straight stroke (axis, tick)
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: RGBColor,
        width: f64,
    },
    /// Connected data line
    Polyline {
        points: Vec<(f64, f64)>,
        color: RGBColor,
        width: f64,
    },
    /// Filled circle on a data point
    Marker {
        center: (f64, f64),
        radius: f64,
        color: RGBColor,
    },
    /// Filled pie wedge; a zero sweep draws nothing but still counts
    Wedge {
        center: (f64, f64),
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        color: RGBColor,
    },
    /// Single line of text; `position` is the anchor point, vertically
    /// centered. Vertical text reads bottom to top and is centered on
    /// `position` along both axes.
    Text {
        position: (f64, f64),
        text: String,
        style: TextStyle,
        align: TextAlign,
        vertical: bool,
    },
}

/// A laid-out chart ready for rasterization.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub marks: Vec<Mark>,
}

impl Figure {
    pub fn new(width: u32, height: u32, background: RGBColor) -> Self {
        Self {
            width,
            height,
            background,
            marks: Vec::new(),
        }
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn wedge_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| matches!(m, Mark::Wedge { .. }))
            .count()
    }

    pub fn bar_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| matches!(m, Mark::Bar { .. }))
            .count()
    }

    pub fn marker_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| matches!(m, Mark::Marker { .. }))
            .count()
    }

    /// All text drawn on the figure, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.marks
            .iter()
            .filter_map(|m| match m {
                Mark::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
