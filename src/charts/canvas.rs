/// Pixel canvas for chart rasterization.
///
/// Every primitive writes opaque pixels directly into an [`RgbaImage`] and
/// clips to the image bounds, so marks partly outside the figure are safe.
use super::figure::{Mark, TextAlign, TextStyle};
use super::glyphs::{self, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::common::RGBColor;
use image::{Rgba, RgbaImage};

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: RGBColor) -> Self {
        Self {
            image: RgbaImage::from_pixel(width.max(1), height.max(1), background.to_rgba()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Pixel rows/columns covered by `[from, to)`, clipped to `limit`.
    fn span(from: f64, to: f64, limit: u32) -> std::ops::Range<i64> {
        let start = from.floor().max(0.0) as i64;
        let end = to.ceil().min(limit as f64) as i64;
        start..end.max(start)
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: RGBColor) {
        let rgba = color.to_rgba();
        let (x0, x1) = (x.round(), (x + width).round());
        let (y0, y1) = (y.round(), (y + height).round());
        for py in Self::span(y0, y1, self.height()) {
            for px in Self::span(x0, x1, self.width()) {
                self.plot(px, py, rgba);
            }
        }
    }

    pub fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: RGBColor) {
        let rgba = color.to_rgba();
        let (cx, cy) = center;
        let r2 = radius * radius;
        for py in Self::span(cy - radius, cy + radius, self.height()) {
            for px in Self::span(cx - radius, cx + radius, self.width()) {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.plot(px, py, rgba);
                }
            }
        }
    }

    /// Stroke a segment of the given width with flat ends.
    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: RGBColor) {
        let rgba = color.to_rgba();
        let half = (width / 2.0).max(0.5);
        let (ax, ay) = from;
        let (bx, by) = to;
        let (vx, vy) = (bx - ax, by - ay);
        let len2 = vx * vx + vy * vy;

        let min_x = ax.min(bx) - half;
        let max_x = ax.max(bx) + half;
        let min_y = ay.min(by) - half;
        let max_y = ay.max(by) + half;

        for py in Self::span(min_y, max_y, self.height()) {
            for px in Self::span(min_x, max_x, self.width()) {
                let qx = px as f64 + 0.5;
                let qy = py as f64 + 0.5;
                let t = if len2 == 0.0 {
                    0.0
                } else {
                    ((qx - ax) * vx + (qy - ay) * vy) / len2
                };
                if !(0.0..=1.0).contains(&t) && len2 != 0.0 {
                    continue;
                }
                let (nx, ny) = (ax + t * vx, ay + t * vy);
                let (dx, dy) = (qx - nx, qy - ny);
                if dx * dx + dy * dy <= half * half {
                    self.plot(px, py, rgba);
                }
            }
        }
    }

    /// Stroke connected segments with round joins.
    pub fn draw_polyline(&mut self, points: &[(f64, f64)], width: f64, color: RGBColor) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], width, color);
        }
        for point in points {
            self.fill_circle(*point, width / 2.0, color);
        }
    }

    /// Fill a pie wedge. Angles are degrees counter-clockwise from screen
    /// right; a sweep of zero draws nothing.
    pub fn fill_wedge(
        &mut self,
        center: (f64, f64),
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        color: RGBColor,
    ) {
        if sweep_deg <= 0.0 {
            return;
        }
        let rgba = color.to_rgba();
        let (cx, cy) = center;
        let r2 = radius * radius;
        for py in Self::span(cy - radius, cy + radius, self.height()) {
            for px in Self::span(cx - radius, cx + radius, self.width()) {
                let dx = px as f64 + 0.5 - cx;
                let dy = cy - (py as f64 + 0.5);
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let angle = dy.atan2(dx).to_degrees();
                let relative = (angle - start_deg).rem_euclid(360.0);
                if sweep_deg >= 360.0 || relative < sweep_deg {
                    self.plot(px, py, rgba);
                }
            }
        }
    }

    /// Draw one line of text with the built-in bitmap font.
    ///
    /// `position` is the anchor: `align` picks which end of the line it
    /// marks, and the line is vertically centered on it. Vertical text is
    /// rotated a quarter turn counter-clockwise and centered on `position`.
    pub fn draw_text(
        &mut self,
        position: (f64, f64),
        text: &str,
        style: &TextStyle,
        align: TextAlign,
        vertical: bool,
    ) {
        let scale = style.scale.max(1);
        let width = glyphs::text_width(text, scale) as f64;
        let height = glyphs::text_height(scale) as f64;
        let rgba = style.color.to_rgba();

        // Top-left corner of the unrotated text box.
        let origin_x = match align {
            TextAlign::Left => position.0,
            TextAlign::Center => position.0 - width / 2.0,
            TextAlign::Right => position.0 - width,
        };
        let origin_y = position.1 - height / 2.0;

        let left = (position.0 - height / 2.0).round() as i64;
        let bottom = (position.1 + width / 2.0).round() as i64;
        let (origin_x, origin_y) = (origin_x.round() as i64, origin_y.round() as i64);

        let passes: &[i64] = if style.bold { &[0, 1] } else { &[0] };
        let scale = scale as i64;

        for (index, c) in text.chars().enumerate() {
            let glyph = glyphs::glyph(c);
            let char_x = index as i64 * GLYPH_ADVANCE as i64 * scale;
            for col in 0..GLYPH_WIDTH {
                for row in 0..GLYPH_HEIGHT {
                    if !glyphs::is_set(glyph, col, row) {
                        continue;
                    }
                    for &shift in passes {
                        let gx = char_x + col as i64 * scale + shift * (scale / 2).max(1);
                        let gy = row as i64 * scale;
                        for sy in 0..scale {
                            for sx in 0..scale {
                                let (tx, ty) = (gx + sx, gy + sy);
                                if vertical {
                                    self.plot(left + ty, bottom - tx, rgba);
                                } else {
                                    self.plot(origin_x + tx, origin_y + ty, rgba);
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Rasterize one figure mark.
    pub fn draw_mark(&mut self, mark: &Mark) {
        match mark {
            Mark::Bar {
                x,
                y,
                width,
                height,
                color,
            } => self.fill_rect(*x, *y, *width, *height, *color),
            Mark::Line {
                from,
                to,
                color,
                width,
            } => self.draw_line(*from, *to, *width, *color),
            Mark::Polyline {
                points,
                color,
                width,
            } => self.draw_polyline(points, *width, *color),
            Mark::Marker {
                center,
                radius,
                color,
            } => self.fill_circle(*center, *radius, *color),
            Mark::Wedge {
                center,
                radius,
                start_deg,
                sweep_deg,
                color,
            } => self.fill_wedge(*center, *radius, *start_deg, *sweep_deg, *color),
            Mark::Text {
                position,
                text,
                style,
                align,
                vertical,
            } => self.draw_text(*position, text, style, *align, *vertical),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: RGBColor = RGBColor::new(255, 0, 0);

    fn pixel(canvas: &Canvas, x: u32, y: u32) -> RGBColor {
        let p = canvas.image.get_pixel(x, y);
        RGBColor::new(p[0], p[1], p[2])
    }

    #[test]
    fn test_background_and_rect() {
        let mut canvas = Canvas::new(20, 10, RGBColor::WHITE);
        canvas.fill_rect(2.0, 2.0, 4.0, 3.0, RED);
        assert_eq!(pixel(&canvas, 0, 0), RGBColor::WHITE);
        assert_eq!(pixel(&canvas, 2, 2), RED);
        assert_eq!(pixel(&canvas, 5, 4), RED);
        assert_eq!(pixel(&canvas, 6, 4), RGBColor::WHITE);
    }

    #[test]
    fn test_clipping() {
        let mut canvas = Canvas::new(10, 10, RGBColor::WHITE);
        canvas.fill_rect(-5.0, -5.0, 100.0, 100.0, RED);
        canvas.fill_circle((50.0, 50.0), 3.0, RED);
        canvas.draw_line((-10.0, 5.0), (30.0, 5.0), 2.0, RED);
        assert_eq!(pixel(&canvas, 9, 9), RED);
    }

    #[test]
    fn test_wedge_quadrants() {
        let mut canvas = Canvas::new(100, 100, RGBColor::WHITE);
        // Upper-left quarter: from 12 o'clock counter-clockwise to 9 o'clock.
        canvas.fill_wedge((50.0, 50.0), 40.0, 90.0, 90.0, RED);
        assert_eq!(pixel(&canvas, 30, 30), RED);
        assert_eq!(pixel(&canvas, 70, 30), RGBColor::WHITE);
        assert_eq!(pixel(&canvas, 30, 70), RGBColor::WHITE);

        canvas.fill_wedge((50.0, 50.0), 40.0, 0.0, 0.0, RGBColor::BLACK);
        assert_eq!(pixel(&canvas, 70, 49), RGBColor::WHITE);
    }

    #[test]
    fn test_line_and_text() {
        let mut canvas = Canvas::new(60, 20, RGBColor::WHITE);
        canvas.draw_line((0.0, 10.0), (59.0, 10.0), 3.0, RED);
        assert_eq!(pixel(&canvas, 30, 10), RED);
        assert_eq!(pixel(&canvas, 30, 2), RGBColor::WHITE);

        let style = TextStyle {
            scale: 1,
            color: RGBColor::BLACK,
            bold: false,
        };
        let mut canvas = Canvas::new(20, 20, RGBColor::WHITE);
        canvas.draw_text((10.0, 10.0), "I", &style, TextAlign::Center, false);
        // Middle column of 'I' is fully set.
        let column: Vec<RGBColor> = (0..20).map(|y| pixel(&canvas, 10, y)).collect();
        assert_eq!(column.iter().filter(|c| **c == RGBColor::BLACK).count(), 7);
    }

    #[test]
    fn test_descender_below_baseline() {
        let style = TextStyle {
            scale: 1,
            color: RGBColor::BLACK,
            bold: false,
        };
        // Text box rows 6..14; the baseline row is 12 and row 13 is the descender.
        let ink_in_last_row = |text: &str| {
            let mut canvas = Canvas::new(20, 20, RGBColor::WHITE);
            canvas.draw_text((0.0, 10.0), text, &style, TextAlign::Left, false);
            (0..20).any(|x| pixel(&canvas, x, 13) == RGBColor::BLACK)
        };
        assert!(ink_in_last_row("p"));
        assert!(ink_in_last_row("y"));
        assert!(!ink_in_last_row("o"));
    }
}
