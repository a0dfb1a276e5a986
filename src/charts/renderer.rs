/// Chart rendering to PNG.
use super::canvas::Canvas;
use super::chart::Chart;
use super::figure::Figure;
use super::layout;
use crate::common::{RGBColor, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use tracing::debug;

/// Options for chart rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRenderOptions {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Background color
    pub background: RGBColor,
}

impl Default for ChartRenderOptions {
    fn default() -> Self {
        // 10x6 inches at 150 dpi
        Self {
            width: 1500,
            height: 900,
            background: RGBColor::WHITE,
        }
    }
}

/// Renders charts into in-memory PNG images.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    options: ChartRenderOptions,
}

impl ChartRenderer {
    pub fn new(options: ChartRenderOptions) -> Self {
        Self { options }
    }

    /// Lay out a chart without drawing it.
    pub fn layout(&self, chart: &Chart) -> Result<Figure> {
        layout::layout(
            chart,
            self.options.width,
            self.options.height,
            self.options.background,
        )
    }

    /// Draw every mark of a figure.
    pub fn rasterize(&self, figure: &Figure) -> RgbaImage {
        let mut canvas = Canvas::new(figure.width, figure.height, figure.background);
        for mark in &figure.marks {
            canvas.draw_mark(mark);
        }
        canvas.into_image()
    }

    /// Render a chart as PNG bytes.
    pub fn render_png(&self, chart: &Chart) -> Result<Vec<u8>> {
        let figure = self.layout(chart)?;
        let image = self.rasterize(&figure);

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(image).write_to(&mut buffer, ImageFormat::Png)?;
        let png = buffer.into_inner();

        debug!(
            kind = chart.kind.name(),
            title = %chart.title,
            marks = figure.marks.len(),
            bars = figure.bar_count(),
            markers = figure.marker_count(),
            wedges = figure.wedge_count(),
            bytes = png.len(),
            "rendered chart"
        );
        Ok(png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::chart::CHART_BLUE;

    fn small() -> ChartRenderer {
        ChartRenderer::new(ChartRenderOptions {
            width: 300,
            height: 180,
            background: RGBColor::WHITE,
        })
    }

    #[test]
    fn test_render_png() {
        let chart = Chart::line(
            "Global Smartphone Adoption (%)",
            &[2007, 2008, 2009, 2010],
            &[19.0, 23.0, 31.0, 42.0],
        );
        let png = small().render_png(&chart).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (300, 180));
    }

    #[test]
    fn test_default_size() {
        let options = ChartRenderOptions::default();
        assert_eq!((options.width, options.height), (1500, 900));
    }

    #[test]
    fn test_pie_is_drawn() {
        let renderer = small();
        let chart = Chart::pie("Share", &["Nokia", "Others"], &[50.0, 50.0]);
        let image = renderer.rasterize(&renderer.layout(&chart).unwrap());
        let blue = image
            .pixels()
            .filter(|p| p.0 == CHART_BLUE.to_rgba().0)
            .count();
        assert!(blue > 100);
    }

    #[test]
    fn test_invalid_chart_is_error() {
        let chart = Chart::bar("Broken", &["a", "b"], &[1.0]);
        assert!(small().render_png(&chart).is_err());
    }
}
