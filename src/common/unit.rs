//! Unit conversion utilities.
//!
//! DrawingML positions everything in English Metric Units (EMU). Layout
//! constants in the deck are written in inches and points and converted here.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// A length in English Metric Units.
pub type Emu = i64;

/// Convert inches to EMU, rounding to the nearest unit.
#[inline]
pub fn inches(value: f64) -> Emu {
    (value * EMUS_PER_INCH as f64).round() as Emu
}

/// Convert points to EMU, rounding to the nearest unit.
#[inline]
pub fn points(value: f64) -> Emu {
    (value * EMUS_PER_PT as f64).round() as Emu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(0.5), 457_200);
        // 16:9 width used by the deck
        assert_eq!(inches(13.33), 12_188_952);
        assert_eq!(inches(7.5), 6_858_000);
    }

    #[test]
    fn test_points() {
        assert_eq!(points(1.0), 12_700);
        assert_eq!(points(4.0), 50_800);
    }
}
