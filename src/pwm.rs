//! Software PWM for three color lines
//!
//! The target has fewer hardware PWM channels than colors, so brightness is
//! produced by toggling plain digital outputs from a free-running timer
//! interrupt. One PWM cycle is 256 timer ticks: every line is switched on at
//! the start of the cycle and switched off again once the tick counter
//! reaches its intensity.

use embedded_hal::digital::OutputPin;

use crate::LineDriver;
use crate::shared::ChannelTargets;

/// Number of timer ticks in one PWM cycle
pub const PWM_STEPS: u32 = 256;

/// Color output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Red,
    Green,
    Blue,
}

impl Line {
    pub const ALL: [Line; 3] = [Line::Red, Line::Green, Line::Blue];

    const fn index(self) -> usize {
        match self {
            Line::Red => 0,
            Line::Green => 1,
            Line::Blue => 2,
        }
    }
}

/// Soft PWM driver state, owned by the timer handler
#[derive(Debug, Clone, Default)]
pub struct SoftPwm {
    counter: u8,
    /// Intensities taken over at the start of the current cycle
    latched: [u8; 3],
}

impl SoftPwm {
    pub const fn new() -> Self {
        Self {
            counter: 0,
            latched: [0; 3],
        }
    }

    /// Resulting PWM refresh rate for a given timer tick frequency.
    ///
    /// A 37.5 kHz overflow tick gives roughly 146 Hz.
    pub const fn refresh_rate(tick_hz: u32) -> u32 {
        tick_hz / PWM_STEPS
    }

    /// Advance by one timer tick.
    ///
    /// Call once from every timer overflow interrupt. New targets only take
    /// effect at the start of the next cycle.
    pub fn tick<L: LineDriver>(&mut self, targets: &ChannelTargets, lines: &mut L) {
        self.counter = self.counter.wrapping_add(1);

        if self.counter == 0 {
            for line in Line::ALL {
                let intensity = targets.line(line);
                self.latched[line.index()] = intensity;
                if intensity > 0 {
                    lines.set_line(line, true);
                }
            }
        }

        for line in Line::ALL {
            if self.latched[line.index()] == self.counter {
                lines.set_line(line, false);
            }
        }
    }

    /// Current position within the cycle
    pub const fn counter(&self) -> u8 {
        self.counter
    }

    /// Intensity latched for the running cycle
    pub const fn latched(&self, line: Line) -> u8 {
        self.latched[line.index()]
    }
}

/// [`LineDriver`] over three `embedded-hal` output pins
pub struct PinLines<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> PinLines<R, G, B> {
    pub const fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    /// Give the pins back
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) {
    // Nothing to report to from inside the timer interrupt
    let _ = if on { pin.set_high() } else { pin.set_low() };
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> LineDriver for PinLines<R, G, B> {
    fn set_line(&mut self, line: Line, on: bool) {
        match line {
            Line::Red => drive(&mut self.red, on),
            Line::Green => drive(&mut self.green, on),
            Line::Blue => drive(&mut self.blue, on),
        }
    }
}
