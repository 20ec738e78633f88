//! Wake-event signalling between interrupt handlers and the control loop.
//!
//! Interrupt handlers do nothing beyond pushing a [`WakeSource`] here; the
//! control loop drains the queue after the halt instruction returns. Built on
//! `critical-section` and `heapless::Deque`, so signalling is safe from
//! interrupt context.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// What woke the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeSource {
    /// The periodic hardware wake timer fired.
    WakeTimer,
    /// The button pin changed level.
    ButtonEdge,
}

/// A bounded wake-event queue.
pub struct WakeQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<WakeSource, SIZE>>>,
}

impl<const SIZE: usize> WakeQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for interrupt handlers.
    ///
    /// Multiple senders can coexist; they share the same queue.
    pub const fn sender(&self) -> WakeSender<'_, SIZE> {
        WakeSender { queue: self }
    }

    /// Get the receiver handle for the control loop.
    pub const fn receiver(&self) -> WakeReceiver<'_, SIZE> {
        WakeReceiver { queue: self }
    }
}

impl<const SIZE: usize> Default for WakeQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Interrupt-side handle: signal and return, nothing else.
#[derive(Clone, Copy)]
pub struct WakeSender<'a, const SIZE: usize> {
    queue: &'a WakeQueue<SIZE>,
}

impl<const SIZE: usize> WakeSender<'_, SIZE> {
    /// Record a wake source. Non-blocking; a full queue drops the event.
    pub fn signal(&self, source: WakeSource) {
        critical_section::with(|cs| {
            let _ = self.queue.inner.borrow(cs).borrow_mut().push_back(source);
        });
    }
}

/// Loop-side handle for draining pending wake events.
#[derive(Clone, Copy)]
pub struct WakeReceiver<'a, const SIZE: usize> {
    queue: &'a WakeQueue<SIZE>,
}

impl<const SIZE: usize> WakeReceiver<'_, SIZE> {
    /// Take the oldest pending wake event, if any.
    pub fn take(&self) -> Option<WakeSource> {
        critical_section::with(|cs| self.queue.inner.borrow(cs).borrow_mut().pop_front())
    }
}
