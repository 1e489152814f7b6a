//! Ambient light sampler
//!
//! The converter runs free and retriggers itself, so there is always a
//! fresh reading and the control loop never waits for one. The completion
//! handler does nothing but overwrite [`LightLevel`]; the handler must stay
//! this short because it fires far more often than the control loop runs.

use crate::shared::LightLevel;

/// Completion handler side of the light sensor
#[derive(Clone, Copy)]
pub struct AmbientSampler<'a> {
    level: &'a LightLevel,
}

impl<'a> AmbientSampler<'a> {
    pub const fn new(level: &'a LightLevel) -> Self {
        Self { level }
    }

    /// Publish an 8-bit conversion result.
    ///
    /// Use with a left adjusted converter where only the high byte is read.
    #[inline]
    pub fn on_conversion(&self, sample: u8) {
        self.level.publish(sample);
    }

    /// Publish a right aligned 10-bit conversion result, keeping the 8 most
    /// significant bits.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn on_conversion_10bit(&self, raw: u16) {
        self.level.publish(((raw & 0x03FF) >> 2) as u8);
    }

    /// Level this sampler writes to
    pub const fn level(&self) -> &'a LightLevel {
        self.level
    }
}
