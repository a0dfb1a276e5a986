use image::Rgba;
use std::fmt;

/// RGB color representation.
///
/// Slides serialize it as a DrawingML `srgbClr` hex value; the chart
/// renderer converts it to an opaque RGBA pixel.
///
/// # Examples
///
/// ```rust
/// use nokia_deck::common::RGBColor;
///
/// let blue = RGBColor::new(18, 65, 145);
/// assert_eq!(blue.to_hex(), "124191");
/// assert_eq!(blue.to_string(), "#124191");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);
    pub const BLACK: RGBColor = RGBColor::new(0, 0, 0);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to hex string (without # prefix), as used by `<a:srgbClr val="..."/>`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Opaque RGBA pixel for raster drawing.
    #[inline]
    pub const fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_uppercase_without_prefix() {
        assert_eq!(RGBColor::new(255, 107, 53).to_hex(), "FF6B35");
        assert_eq!(RGBColor::new(0, 119, 204).to_hex(), "0077CC");
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::new(76, 175, 80).to_string(), "#4CAF50");
    }

    #[test]
    fn test_rgba() {
        assert_eq!(RGBColor::new(1, 2, 3).to_rgba(), Rgba([1, 2, 3, 255]));
    }
}
