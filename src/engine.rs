//! Synchronization engine - the foreground control loop
//!
//! Owns the [`SyncState`], reads the shared light level and writes the
//! shared channel targets. All waiting goes through a blocking
//! [`DelayNs`]; the sampler and timer interrupts keep firing meanwhile, so
//! the light level stays fresh and flashes keep being rendered.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::hue_to_rgb;
use crate::config::FireflyConfig;
use crate::events::{EventSink, FireflyEvent};
use crate::shared::{ChannelTargets, LightLevel};
use crate::sync::{Calibrator, Observation, SyncState, desync_slots};

/// Lifecycle of the engine. `Running` is never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Calibrating,
    DesyncSleep,
    Running,
}

/// A single firefly
pub struct Firefly<'a, D: DelayNs, E: EventSink = ()> {
    // External dependencies and configuration
    config: FireflyConfig,
    light: &'a LightLevel,
    targets: &'a ChannelTargets,
    delay: D,
    events: E,

    // Internal state
    state: SyncState,
    phase: Phase,
}

impl<'a, D: DelayNs> Firefly<'a, D> {
    /// Create an engine that does not report events
    pub fn new(
        config: FireflyConfig,
        light: &'a LightLevel,
        targets: &'a ChannelTargets,
        delay: D,
    ) -> Self {
        Self {
            config,
            light,
            targets,
            delay,
            events: (),
            state: SyncState::new(0),
            phase: Phase::Calibrating,
        }
    }
}

impl<'a, D: DelayNs, E: EventSink> Firefly<'a, D, E> {
    /// Report engine events to `events`
    pub fn with_events<S: EventSink>(self, events: S) -> Firefly<'a, D, S> {
        Firefly {
            config: self.config,
            light: self.light,
            targets: self.targets,
            delay: self.delay,
            events,
            state: self.state,
            phase: self.phase,
        }
    }

    /// Start up and run the control loop forever
    pub fn run(mut self) -> ! {
        self.start();
        loop {
            self.step();
        }
    }

    /// Startup sequence: readiness blink, calibration, randomized sleep
    pub fn start(&mut self) {
        self.signal_ready();
        self.calibrate();
        self.desync_sleep();
    }

    /// Blink the intro color to show the node is alive
    pub fn signal_ready(&mut self) {
        self.phase = Phase::Calibrating;
        for _ in 0..self.config.intro_blinks {
            self.targets.set(self.config.intro_color);
            self.pause(self.config.intro_period);
            self.targets.clear();
            self.pause(self.config.intro_period);
        }
    }

    /// Measure the ambient light and derive the peer flash threshold
    pub fn calibrate(&mut self) -> u16 {
        self.phase = Phase::Calibrating;
        let mut calibrator = Calibrator::new();
        for _ in 0..self.config.calibration_samples {
            calibrator.add(self.light.current());
            self.pause(self.config.calibration_interval);
        }

        let threshold = calibrator.threshold(self.config.threshold_margin);
        self.state.threshold = threshold;
        #[cfg(feature = "esp32-log")]
        println!(
            "[Firefly.calibrate] ambient {}, threshold {}, free running period {} ms",
            calibrator.average(),
            threshold,
            self.config.free_running_period().as_millis()
        );
        self.events.publish(FireflyEvent::Calibrated { threshold });
        threshold
    }

    /// Sleep a few units picked from the low bits of the light level
    pub fn desync_sleep(&mut self) {
        self.phase = Phase::DesyncSleep;
        let slots = desync_slots(self.light.current(), self.config.desync_mask);
        #[cfg(feature = "esp32-log")]
        println!("[Firefly.desync_sleep] sleeping {} units", slots);
        for _ in 0..slots {
            self.pause(self.config.desync_unit);
        }
        self.phase = Phase::Running;
    }

    /// Run one iteration of the control loop
    pub fn step(&mut self) -> Observation {
        self.pause(self.config.loop_period);
        self.state.accumulate();

        let light = self.light.current();
        let observation = self.state.observe(light, &self.config);
        match observation {
            Observation::Daylight => self.wait_out_daylight(light),
            Observation::PeerFlash { in_phase } => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Firefly.step] peer flash at power {}, in phase: {}, nervousness {}",
                    self.state.power,
                    in_phase,
                    self.state.nervousness.get()
                );
                self.events.publish(FireflyEvent::PeerFlash {
                    power: self.state.power,
                    in_phase,
                    nervousness: self.state.nervousness.get(),
                });
            }
            Observation::Blind | Observation::Quiet => {}
        }

        if self.state.flash_due(&self.config) {
            self.flash();
        }

        observation
    }

    fn wait_out_daylight(&mut self, light: u8) {
        #[cfg(feature = "esp32-log")]
        println!("[Firefly.step] daylight ({}), pausing", light);
        self.events.publish(FireflyEvent::Daylight { light });
        self.targets.set(self.config.daylight_color);
        self.pause(self.config.daylight_pause);
        self.targets.clear();
    }

    fn flash(&mut self) {
        let hue = self.state.flash_hue();
        self.targets.set(hue_to_rgb(hue));
        self.events.publish(FireflyEvent::SelfFlash { hue });
        self.pause(self.config.flash_hold);
        self.targets.clear();
        self.state.complete_flash(&self.config);
    }

    /// Block for the full duration, in chunks the delay can take
    fn pause(&mut self, duration: Duration) {
        let mut remaining = duration.as_micros();
        while remaining > 0 {
            let chunk = u32::try_from(remaining).unwrap_or(u32::MAX);
            self.delay.delay_us(chunk);
            remaining -= u64::from(chunk);
        }
    }

    pub const fn state(&self) -> &SyncState {
        &self.state
    }

    /// Replace the whole synchronization state, threshold included.
    ///
    /// Meant for warm starts from a known state and for tests. Normal
    /// operation never calls it: the threshold is only set by
    /// [`Firefly::calibrate`] and stays fixed afterwards.
    pub fn set_state(&mut self, state: SyncState) {
        self.state = state;
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn config(&self) -> &FireflyConfig {
        &self.config
    }

    /// Give the delay back
    pub fn release(self) -> D {
        self.delay
    }
}
