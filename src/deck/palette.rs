//! Brand and accent colors used across the slides.

use crate::common::RGBColor;

pub const NOKIA_BLUE: RGBColor = RGBColor::new(18, 65, 145);
pub const NOKIA_LIGHT_BLUE: RGBColor = RGBColor::new(0, 119, 204);
pub const NOKIA_WHITE: RGBColor = RGBColor::WHITE;
pub const NOKIA_GRAY: RGBColor = RGBColor::new(102, 102, 102);
pub const NOKIA_DARK_GRAY: RGBColor = RGBColor::new(51, 51, 51);

// Accents
pub const GREEN: RGBColor = RGBColor::new(76, 175, 80);
pub const RED: RGBColor = RGBColor::new(244, 67, 54);
pub const BLUE: RGBColor = RGBColor::new(33, 150, 243);
pub const ORANGE: RGBColor = RGBColor::new(255, 152, 0);

// Panel fills
pub const ALICE_BLUE: RGBColor = RGBColor::new(240, 248, 255);
pub const PALE_GREEN: RGBColor = RGBColor::new(230, 255, 230);
pub const PALE_RED: RGBColor = RGBColor::new(255, 230, 230);
pub const BLUSH: RGBColor = RGBColor::new(255, 240, 240);
pub const SMOKE: RGBColor = RGBColor::new(245, 245, 245);
pub const LIGHT_GRAY: RGBColor = RGBColor::new(240, 240, 240);
