//! Values shared between the interrupt handlers and the control loop.
//!
//! Every value is a single byte wide atomic with exactly one writer and one
//! reader:
//!
//! | Cell               | Writer                  | Reader                  |
//! |--------------------|-------------------------|-------------------------|
//! | [`LightLevel`]     | sampler handler         | synchronization engine  |
//! | [`ChannelTargets`] | synchronization engine  | soft PWM timer handler  |
//!
//! Readers only ever need the latest value of a single field, never a
//! consistent snapshot across fields, so relaxed ordering is enough.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::color::{BLACK, Rgb};
use crate::pwm::Line;

/// Most recent ambient light reading.
pub struct LightLevel {
    value: AtomicU8,
}

impl LightLevel {
    pub const fn new() -> Self {
        Self {
            value: AtomicU8::new(0),
        }
    }

    /// Overwrite the reading. Sampler handler only.
    #[inline]
    pub fn publish(&self, sample: u8) {
        self.value.store(sample, Ordering::Relaxed);
    }

    /// Latest reading.
    #[inline]
    pub fn current(&self) -> u8 {
        self.value.load(Ordering::Relaxed)
    }
}

impl Default for LightLevel {
    fn default() -> Self {
        Self::new()
    }
}

/// Target intensity of each color line.
///
/// Written by the engine when a flash starts or ends, latched by the soft
/// PWM driver once per cycle.
pub struct ChannelTargets {
    red: AtomicU8,
    green: AtomicU8,
    blue: AtomicU8,
}

impl ChannelTargets {
    pub const fn new() -> Self {
        Self {
            red: AtomicU8::new(0),
            green: AtomicU8::new(0),
            blue: AtomicU8::new(0),
        }
    }

    const fn cell(&self, line: Line) -> &AtomicU8 {
        match line {
            Line::Red => &self.red,
            Line::Green => &self.green,
            Line::Blue => &self.blue,
        }
    }

    /// Set a single line
    #[inline]
    pub fn set_line(&self, line: Line, intensity: u8) {
        self.cell(line).store(intensity, Ordering::Relaxed);
    }

    /// Intensity of a single line
    #[inline]
    pub fn line(&self, line: Line) -> u8 {
        self.cell(line).load(Ordering::Relaxed)
    }

    /// Set all three lines from a color
    pub fn set(&self, color: Rgb) {
        self.set_line(Line::Red, color.r);
        self.set_line(Line::Green, color.g);
        self.set_line(Line::Blue, color.b);
    }

    /// Switch all lines off
    pub fn clear(&self) {
        self.set(BLACK);
    }

    /// Read all three lines.
    ///
    /// The fields are read one after another, a concurrent `set` may be
    /// observed half applied.
    pub fn color(&self) -> Rgb {
        Rgb {
            r: self.line(Line::Red),
            g: self.line(Line::Green),
            b: self.line(Line::Blue),
        }
    }
}

impl Default for ChannelTargets {
    fn default() -> Self {
        Self::new()
    }
}
