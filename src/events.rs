//! Engine events for diagnostics.
//!
//! The engine hands every event to an [`EventSink`]. [`EventChannel`] is the
//! stock sink: a bounded queue behind a critical section, so it can be
//! drained from another context. The engine never waits on it, events that
//! do not fit are dropped.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Something the synchronization engine did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireflyEvent {
    /// Calibration finished with the given peer flash threshold
    Calibrated { threshold: u16 },
    /// A peer flash was seen at the given power level
    PeerFlash {
        power: u16,
        in_phase: bool,
        nervousness: u8,
    },
    /// Daylight guard kicked in
    Daylight { light: u8 },
    /// Own flash with the given hue
    SelfFlash { hue: u8 },
}

/// Receiver of engine events
pub trait EventSink {
    fn publish(&mut self, event: FireflyEvent);
}

/// Discards everything
impl EventSink for () {
    fn publish(&mut self, _event: FireflyEvent) {}
}

/// Bounded event queue, oldest event first
pub struct EventChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<FireflyEvent, SIZE>>>,
}

impl<const SIZE: usize> EventChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Hands the event back if the queue is full
    pub fn try_send(&self, event: FireflyEvent) -> Result<(), FireflyEvent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().push_back(event))
    }

    pub fn try_receive(&self) -> Option<FireflyEvent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for EventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> EventSink for &EventChannel<SIZE> {
    fn publish(&mut self, event: FireflyEvent) {
        let _ = self.try_send(event);
    }
}
