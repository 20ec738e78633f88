//! Push-button debouncing and edge detection.
//!
//! Raw pin samples come in once per tick; out comes a five-state signal with
//! one-tick `Falling`/`Rising` pulses and timestamps for long-press and idle
//! queries. A level change is only accepted once the new level has held for
//! the full debounce window, so contact chatter never reaches the mode
//! controller.

use embassy_time::{Duration, Instant};

/// Time a raw level must persist before the change is accepted.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(25);

/// Electrical polarity of the button pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Pressed reads as logical low (pull-up wiring).
    #[default]
    ActiveLow,
    /// Pressed reads as logical high.
    ActiveHigh,
}

impl Polarity {
    /// Map a raw pin level to "is the button pressed".
    pub const fn pressed(self, raw: bool) -> bool {
        match self {
            Self::ActiveLow => !raw,
            Self::ActiveHigh => raw,
        }
    }
}

/// Debounced button signal.
///
/// `Falling` and `Rising` are transient one-tick pulses; they resolve to
/// `Down`/`Up` on the following tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// No sample accepted yet (boot only).
    Unknown,
    /// Steadily released.
    Up,
    /// Just pressed (single tick).
    Falling,
    /// Steadily pressed.
    Down,
    /// Just released (single tick).
    Rising,
}

/// Converts raw pin samples into [`ButtonState`] transitions.
pub struct Debouncer {
    state: ButtonState,
    polarity: Polarity,
    /// Debounced logical level (true = pressed).
    pressed: bool,
    /// When the emitted state last changed.
    last_change: Instant,
    /// Start of a raw level flip that has not survived the window yet.
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub const fn new(polarity: Polarity) -> Self {
        Self {
            state: ButtonState::Unknown,
            polarity,
            pressed: false,
            last_change: Instant::from_millis(0),
            pending_since: None,
        }
    }

    /// Feed one raw pin sample and return the state for this tick.
    pub fn sample(&mut self, raw: bool, now: Instant) -> ButtonState {
        let pressed = self.polarity.pressed(raw);
        let next = match self.state {
            ButtonState::Unknown => {
                self.pressed = pressed;
                if pressed { ButtonState::Down } else { ButtonState::Up }
            }
            // Transient pulses resolve unconditionally on the next tick.
            ButtonState::Falling => ButtonState::Down,
            ButtonState::Rising => ButtonState::Up,
            ButtonState::Up | ButtonState::Down => self.settle(pressed, now),
        };

        if next != self.state {
            self.last_change = now;
        }
        self.state = next;
        next
    }

    /// Accept a level flip only once it has held for the full window.
    fn settle(&mut self, pressed: bool, now: Instant) -> ButtonState {
        if pressed == self.pressed {
            self.pending_since = None;
            return self.state;
        }
        match self.pending_since {
            None => {
                self.pending_since = Some(now);
                self.state
            }
            Some(since) if now.duration_since(since) >= DEBOUNCE_WINDOW => {
                self.pending_since = None;
                self.pressed = pressed;
                if pressed { ButtonState::Falling } else { ButtonState::Rising }
            }
            Some(_) => self.state,
        }
    }

    /// The state emitted by the most recent sample.
    pub const fn state(&self) -> ButtonState {
        self.state
    }

    /// True iff the button has been continuously `Down` for at least
    /// `duration`. False immediately after any release.
    pub fn is_pressed_for(&self, duration: Duration, now: Instant) -> bool {
        matches!(self.state, ButtonState::Down)
            && now.duration_since(self.last_change) >= duration
    }

    /// How long the button has been steadily `Up`, if it is.
    pub fn idle_for(&self, now: Instant) -> Option<Duration> {
        matches!(self.state, ButtonState::Up).then(|| now.duration_since(self.last_change))
    }

    /// Re-seat the debouncer as pressed without emitting an edge.
    ///
    /// Used after a wake-by-press: the press has already been acted on, so no
    /// `Falling` pulse must reach the mode controller.
    pub fn sync_pressed(&mut self, now: Instant) {
        self.state = ButtonState::Down;
        self.pressed = true;
        self.pending_since = None;
        self.last_change = now;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Polarity::ActiveLow)
    }
}
