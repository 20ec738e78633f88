//! Power state and sleep policy.
//!
//! The duty cycle drops into a hardware halt once the button has been idle
//! for the configured window, waking periodically on a coarse hardware timer
//! to re-sample the button. While asleep the display is blanked, not frozen.

use embassy_time::Duration;

/// Hardware-supported wake timer interval classes.
///
/// The wake timer is keyed to a small fixed set of intervals, not an
/// arbitrary duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeInterval {
    Ms250,
    Ms500,
    /// Default class for the idle duty cycle.
    S1,
    S2,
}

impl WakeInterval {
    pub const fn as_duration(self) -> Duration {
        match self {
            Self::Ms250 => Duration::from_millis(250),
            Self::Ms500 => Duration::from_millis(500),
            Self::S1 => Duration::from_secs(1),
            Self::S2 => Duration::from_secs(2),
        }
    }
}

/// Low-power hardware primitives.
///
/// `halt` is the only suspension point in the control loop: it blocks the
/// processor until the wake timer or an external interrupt fires. Wake-up
/// resumes exactly where the call returned.
pub trait SleepControl {
    /// Disable peripherals that draw current while asleep (ADC, comparator).
    fn power_down(&mut self);
    /// Arm the periodic hardware wake timer.
    fn arm_wake_timer(&mut self, interval: WakeInterval);
    /// Enter the low-power halt. Returns when a wake interrupt fires.
    fn halt(&mut self);
    /// Re-enable peripherals after waking.
    fn power_up(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Awake,
    Asleep,
}

/// Decides when the duty cycle enters and leaves the low-power halt.
pub struct PowerManager {
    state: PowerState,
    idle_window: Duration,
    wake_interval: WakeInterval,
}

impl PowerManager {
    pub const fn new(idle_window: Duration, wake_interval: WakeInterval) -> Self {
        Self {
            state: PowerState::Awake,
            idle_window,
            wake_interval,
        }
    }

    pub const fn state(&self) -> PowerState {
        self.state
    }

    pub const fn wake_interval(&self) -> WakeInterval {
        self.wake_interval
    }

    /// True when an idle button has earned the sleep transition.
    ///
    /// `idle_for` is the steady-`Up` duration from the debouncer, `None`
    /// while the button is pressed or mid-edge.
    pub fn should_sleep(&self, idle_for: Option<Duration>) -> bool {
        matches!(self.state, PowerState::Awake)
            && matches!(idle_for, Some(idle) if idle >= self.idle_window)
    }

    pub fn sleep(&mut self) {
        self.state = PowerState::Asleep;
    }

    pub fn wake(&mut self) {
        self.state = PowerState::Awake;
    }
}
