#![no_std]

//! Lighting-mode controller for a button-driven wearable RGB light.
//!
//! One push-button drives a single RGB output through a cycle of lighting
//! modes. The crate is the complete control core: a debounced edge detector
//! turns raw pin samples into clean button transitions, a mode state machine
//! arms and disarms animation channels, bounded cursors sweep hue,
//! saturation, value and the inter-frame delay, and a power manager drops the
//! duty cycle into a hardware halt when the button has been idle.
//!
//! Hardware stays behind four small traits ([`PwmDriver`], [`ButtonInput`],
//! [`power::SleepControl`], [`rng::EntropySource`]); all timing is injected
//! as [`embassy_time::Instant`] values, so every state machine runs unchanged
//! on the host in tests.

pub mod button;
pub mod color;
pub mod controller;
pub mod cursor;
pub mod device;
pub mod mode;
pub mod power;
pub mod rng;
pub mod signal;

pub use button::{ButtonState, DEBOUNCE_WINDOW, Debouncer, Polarity};
pub use color::{BLACK, Hsv, Rgb, hsv2rgb};
pub use controller::{Frame, LONG_PRESS, ModeController};
pub use cursor::{BoundaryPolicy, Cursor, CursorConfig, StepCurve};
pub use device::{Lamp, LampConfig, TickOutcome};
pub use mode::{AnimationPlan, ChannelPlan, LightingMode, MODE_CYCLE};
pub use power::{PowerManager, PowerState, SleepControl, WakeInterval};
pub use rng::{EntropySource, XorShift32};
pub use signal::{WakeQueue, WakeReceiver, WakeSender, WakeSource};

pub use embassy_time::{Duration, Instant};

/// Abstract PWM output trait
///
/// Implement this for the three color channels of your board. One write per
/// tick carries all three duty cycles (0-255 each); the write is stateless
/// and cannot fail.
pub trait PwmDriver {
    /// Drive the red, green and blue duty cycles.
    fn write(&mut self, color: Rgb);
}

/// Abstract button pin trait
///
/// One raw digital level read per tick. Polarity mapping is handled by the
/// debouncer configuration, not the implementation.
pub trait ButtonInput {
    /// Read the raw pin level (true = electrically high).
    fn level(&mut self) -> bool;
}
