use crate::color::HUE_BLUE;

/// Upper bound of the nervousness level
pub const NERVOUSNESS_MAX: u8 = HUE_BLUE;

/// Added for a peer flash that arrives out of phase
pub const OUT_OF_PHASE_STEP: u8 = 10;

/// Removed for a peer flash that arrives in phase
pub const IN_PHASE_RELIEF: u8 = 5;

/// Removed for every own flash
pub const SELF_FLASH_RELIEF: u8 = 3;

/// How out of phase observed peer flashes have been lately.
///
/// Always within `0..=NERVOUSNESS_MAX`. The level is shown as the flash
/// color: a calm node flashes blue, a nervous one shifts towards red.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nervousness(u8);

impl Nervousness {
    pub const CALM: Self = Self(0);

    /// Create a level, clamped to the valid range
    pub const fn new(level: u8) -> Self {
        if level > NERVOUSNESS_MAX {
            Self(NERVOUSNESS_MAX)
        } else {
            Self(level)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Increase by `step`, saturating at [`NERVOUSNESS_MAX`]
    pub fn raise(&mut self, step: u8) {
        self.0 = self.0.saturating_add(step).min(NERVOUSNESS_MAX);
    }

    /// Decrease by `step`, but only if the level stays above zero.
    ///
    /// Levels at or below `step` are left untouched.
    pub fn relax(&mut self, step: u8) {
        if self.0 > step {
            self.0 -= step;
        }
    }

    /// Hue of the next own flash
    pub const fn hue(self) -> u8 {
        HUE_BLUE - self.0
    }
}
