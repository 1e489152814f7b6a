#![no_std]

pub mod color;
pub mod config;
pub mod engine;
pub mod events;
pub mod pwm;
pub mod sampler;
pub mod shared;
pub mod sync;

pub use config::FireflyConfig;
pub use engine::{Firefly, Phase};
pub use events::{EventChannel, EventSink, FireflyEvent};
pub use pwm::{Line, PinLines, SoftPwm};
pub use sampler::AmbientSampler;
pub use shared::{ChannelTargets, LightLevel};
pub use sync::{Calibrator, Nervousness, Observation, SyncState};

pub use color::{Rgb, hue_to_rgb};
pub use embassy_time::Duration;

/// Abstract output line driver
///
/// Implement this trait to support different hardware platforms.
/// The soft PWM driver is generic over this trait and calls it from the
/// timer handler, so implementations must not block.
pub trait LineDriver {
    /// Drive a single color line high (`on`) or low
    fn set_line(&mut self, line: Line, on: bool);
}
