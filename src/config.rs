use embassy_time::Duration;

use crate::color::Rgb;
use crate::sync::free_running_iterations;

/// Tunables of the synchronization engine.
///
/// Built once at startup and never changed afterwards. Counts (`blind_*`)
/// are measured in control loop iterations, one iteration lasting at least
/// `loop_period`.
#[derive(Debug, Clone)]
pub struct FireflyConfig {
    /// Power level above which the node flashes
    pub flash_power: u16,
    /// Power added for every detected peer flash
    pub power_boost: u16,
    /// How long a flash stays visible
    pub flash_hold: Duration,
    /// Readings above this are treated as daylight
    pub daylight_level: u8,
    /// Pause after daylight was detected
    pub daylight_pause: Duration,
    /// Color shown during the daylight pause
    pub daylight_color: Rgb,
    /// Iterations without peer detection after a peer flash
    pub blind_after_peer: u16,
    /// Iterations without peer detection after an own flash
    pub blind_after_self: u16,
    /// Added to the calibrated ambient average
    pub threshold_margin: u16,
    /// Minimum duration of one control loop iteration
    pub loop_period: Duration,
    /// Exclusive power range in which a peer flash counts as out of phase
    pub phase_window: (u16, u16),
    /// Readiness signal shown before calibration
    pub intro_color: Rgb,
    pub intro_blinks: u8,
    pub intro_period: Duration,
    /// Number of ambient readings averaged into the threshold
    pub calibration_samples: u8,
    pub calibration_interval: Duration,
    /// Low bits of the first reading used as the startup sleep count
    pub desync_mask: u8,
    pub desync_unit: Duration,
}

impl FireflyConfig {
    pub const DEFAULT: Self = Self {
        flash_power: 8000,
        power_boost: 400,
        flash_hold: Duration::from_millis(200),
        daylight_level: 240,
        daylight_pause: Duration::from_secs(10),
        daylight_color: Rgb { r: 0, g: 32, b: 0 },
        blind_after_peer: 800,
        blind_after_self: 100,
        threshold_margin: 20,
        loop_period: Duration::from_micros(500),
        phase_window: (2000, 7000),
        intro_color: Rgb { r: 255, g: 0, b: 0 },
        intro_blinks: 5,
        intro_period: Duration::from_millis(100),
        calibration_samples: 4,
        calibration_interval: Duration::from_millis(500),
        desync_mask: 0b11,
        desync_unit: Duration::from_secs(1),
    };

    /// Flash period of a node that never sees a peer: the climb to
    /// `flash_power` plus the flash itself
    pub fn free_running_period(&self) -> Duration {
        self.loop_period * free_running_iterations(self.flash_power) + self.flash_hold
    }
}

impl Default for FireflyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
