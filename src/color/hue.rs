//! Hue to RGB conversion on a reduced hue circle
//!
//! The regular HSV wheel has 360 degrees, which does not fit into a byte.
//! This converter uses a 252 unit circle instead: 252 divides evenly into
//! the six color segments, so every channel ramp is an exact integer.
//!
//! | Segment | Color     | Hue (360) | Hue (252) |
//! |---------|-----------|-----------|-----------|
//! | 0       | red       | 0         | 0         |
//! | 1       | yellow    | 60        | 42        |
//! | 2       | green     | 120       | 84        |
//! | 3       | turquoise | 180       | 126       |
//! | 4       | blue      | 240       | 168       |
//! | 5       | pink      | 300       | 210       |

use super::Rgb;

/// Size of the hue circle
pub const HUE_CIRCLE: u8 = 252;

/// Width of a single color segment
pub const HUE_SEGMENT: u8 = HUE_CIRCLE / 6;

/// Highest intensity produced by the converter
pub const CHANNEL_MAX: u8 = 252;

pub const HUE_RED: u8 = 0;
pub const HUE_YELLOW: u8 = HUE_SEGMENT;
pub const HUE_GREEN: u8 = HUE_SEGMENT * 2;
pub const HUE_TURQUOISE: u8 = HUE_SEGMENT * 3;
pub const HUE_BLUE: u8 = HUE_SEGMENT * 4;
pub const HUE_PINK: u8 = HUE_SEGMENT * 5;

/// Convert a hue into channel intensities.
///
/// Within each segment one channel is held at [`CHANNEL_MAX`] or 0, one
/// ramps up and one ramps down. Hues outside of the circle are wrapped
/// back onto it, so every `u8` is a valid input.
pub const fn hue_to_rgb(hue: u8) -> Rgb {
    let hue = hue % HUE_CIRCLE;
    let segment = hue / HUE_SEGMENT;
    // 0..42 stretched back to 0..252
    let ramp = (hue % HUE_SEGMENT) * 6;

    let (r, g, b) = match segment {
        0 => (CHANNEL_MAX, ramp, 0),
        1 => (CHANNEL_MAX - ramp, CHANNEL_MAX, 0),
        2 => (0, CHANNEL_MAX, ramp),
        3 => (0, CHANNEL_MAX - ramp, CHANNEL_MAX),
        4 => (ramp, 0, CHANNEL_MAX),
        _ => (CHANNEL_MAX, 0, CHANNEL_MAX - ramp),
    };

    Rgb { r, g, b }
}
