//! Pulse coupled oscillator state machine
//!
//! Pure decision logic of the synchronization engine, without any timing or
//! output. [`crate::engine::Firefly`] drives it once per loop iteration:
//!
//! 1. [`SyncState::accumulate`]
//! 2. [`SyncState::observe`] with the current light level
//! 3. [`SyncState::flash_due`], then [`SyncState::complete_flash`] after the
//!    flash was shown
//!
//! There is no explicit phase or frequency. Entrainment emerges from the
//! nonlinear power curve combined with the asymmetric handling of peer
//! flashes (boost, long blindness) and own flashes (reset, short blindness).

mod calibration;
mod nervousness;
mod power;

pub use calibration::{Calibrator, desync_slots};
pub use nervousness::{
    IN_PHASE_RELIEF, NERVOUSNESS_MAX, Nervousness, OUT_OF_PHASE_STEP, SELF_FLASH_RELIEF,
};
pub use power::{free_running_iterations, power_step};

use crate::config::FireflyConfig;

/// Result of looking at the light level in one iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Still blind after a flash, the reading was ignored
    Blind,
    /// Sensor saturated, no peer can be seen
    Daylight,
    /// Nothing above the threshold
    Quiet,
    /// A peer flashed. `in_phase` is false if it arrived in the middle of our
    /// own cycle.
    PeerFlash { in_phase: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncState {
    /// Readiness to flash
    pub power: u16,
    pub nervousness: Nervousness,
    /// Remaining iterations without peer detection
    pub blind: u16,
    /// Calibrated peer flash threshold, fixed after calibration
    pub(crate) threshold: u16,
}

impl SyncState {
    pub const fn new(threshold: u16) -> Self {
        Self {
            power: 0,
            nervousness: Nervousness::CALM,
            blind: 0,
            threshold,
        }
    }

    pub const fn threshold(&self) -> u16 {
        self.threshold
    }

    pub const fn is_blind(&self) -> bool {
        self.blind > 0
    }

    /// Advance power along the curve
    pub fn accumulate(&mut self) {
        self.power = self.power.saturating_add(power_step(self.power));
    }

    /// Interpret the current light level.
    ///
    /// While blind only the blind counter moves. Daylight is reported
    /// without touching the state; the caller decides how to wait it out.
    pub fn observe(&mut self, light: u8, config: &FireflyConfig) -> Observation {
        if self.is_blind() {
            self.blind -= 1;
            return Observation::Blind;
        }

        if light > config.daylight_level {
            return Observation::Daylight;
        }

        if u16::from(light) <= self.threshold {
            return Observation::Quiet;
        }

        let (low, high) = config.phase_window;
        let in_phase = !(self.power > low && self.power < high);
        if in_phase {
            self.nervousness.relax(IN_PHASE_RELIEF);
        } else {
            self.nervousness.raise(OUT_OF_PHASE_STEP);
        }
        self.power = self.power.saturating_add(config.power_boost);
        self.blind = config.blind_after_peer;

        Observation::PeerFlash { in_phase }
    }

    /// Whether enough power has built up to flash.
    ///
    /// Blindness does not hold back an own flash, it only hides peers.
    pub const fn flash_due(&self, config: &FireflyConfig) -> bool {
        self.power > config.flash_power
    }

    /// Hue of the flash for the current nervousness
    pub const fn flash_hue(&self) -> u8 {
        self.nervousness.hue()
    }

    /// Start a new cycle after an own flash was shown
    pub fn complete_flash(&mut self, config: &FireflyConfig) {
        self.power = 0;
        self.blind = config.blind_after_self;
        self.nervousness.relax(SELF_FLASH_RELIEF);
    }
}
