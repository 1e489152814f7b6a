mod hue;

use smart_leds::RGB8;

pub use hue::{
    CHANNEL_MAX, HUE_BLUE, HUE_CIRCLE, HUE_GREEN, HUE_PINK, HUE_RED, HUE_SEGMENT, HUE_TURQUOISE,
    HUE_YELLOW, hue_to_rgb,
};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
