/// Averages ambient readings into the peer flash threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calibrator {
    sum: u16,
    count: u8,
}

impl Calibrator {
    pub const fn new() -> Self {
        Self { sum: 0, count: 0 }
    }

    pub fn add(&mut self, sample: u8) {
        self.sum = self.sum.saturating_add(u16::from(sample));
        self.count = self.count.saturating_add(1);
    }

    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Average of all readings so far
    pub fn average(&self) -> u16 {
        if self.count == 0 {
            return 0;
        }
        self.sum / u16::from(self.count)
    }

    /// Threshold a reading has to exceed to count as a peer flash
    pub fn threshold(&self, margin: u16) -> u16 {
        self.average().saturating_add(margin)
    }
}

/// Number of startup sleep units derived from the low bits of a reading.
///
/// Nodes powered on together would otherwise start in lockstep.
pub const fn desync_slots(sample: u8, mask: u8) -> u8 {
    sample & mask
}
