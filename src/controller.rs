//! Mode state machine driving the animation channels.
//!
//! Button edges from the debouncer are the only input: a release cycles to
//! the next mode, a long press in the default mode opens direct hue editing.
//! Every other tick advances whatever channels the current mode armed and
//! materializes the result as an RGB frame.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::button::{ButtonState, Debouncer};
use crate::color::{Hsv, Rgb, hsv2rgb};
use crate::cursor::Cursor;
use crate::mode::{AnimationPlan, ChannelPlan, LightingMode, MODE_CYCLE};
use crate::rng::EntropySource;

/// Hold time that switches the default mode into hue editing.
pub const LONG_PRESS: Duration = Duration::from_millis(500);

/// One rendered frame: the PWM color and the delay until the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub color: Rgb,
    pub delay: Duration,
}

/// One animated channel: a cursor plus its armed flag.
struct Channel {
    cursor: Cursor,
    active: bool,
}

impl Channel {
    fn new(value: u8) -> Self {
        Self {
            cursor: Cursor::parked(value),
            active: false,
        }
    }

    fn apply(&mut self, plan: ChannelPlan) {
        match plan {
            ChannelPlan::Hold => self.active = false,
            ChannelPlan::Force(value) => {
                self.cursor.set(value);
                self.active = false;
            }
            ChannelPlan::Animate(config) => {
                self.cursor.reconfigure(config);
                self.active = true;
            }
        }
    }

    fn advance(&mut self, tick: u32) {
        if self.active {
            self.cursor.advance(tick);
        }
    }

    fn value(&self) -> u8 {
        self.cursor.value()
    }
}

/// The lighting-mode state machine.
///
/// Owns the mode, the four animated channels and the cycle position. All
/// state lives here explicitly; the controller is driven purely by ticks and
/// the injected button/time/rng values.
pub struct ModeController {
    mode: LightingMode,
    /// Mode to return to when hue editing ends.
    resume: LightingMode,
    cycle_index: usize,
    tick: u32,
    hue: Channel,
    sat: Channel,
    val: Channel,
    delay: Channel,
    /// Swallow the release edge of a press that only woke the device.
    swallow_release: bool,
}

impl ModeController {
    pub fn new(initial: Hsv) -> Self {
        let mut controller = Self {
            mode: MODE_CYCLE[0],
            resume: MODE_CYCLE[0],
            cycle_index: 0,
            tick: 0,
            hue: Channel::new(initial.hue),
            sat: Channel::new(initial.sat),
            val: Channel::new(initial.val),
            delay: Channel::new(crate::mode::FRAME_DELAY_MS),
            swallow_release: false,
        };
        controller.arm(&MODE_CYCLE[0].plan());
        controller
    }

    /// Run one tick: evaluate button-driven transitions, then animate.
    ///
    /// The debouncer must have been fed this tick's sample already.
    pub fn tick(&mut self, button: &Debouncer, now: Instant, rng: &mut dyn EntropySource) -> Frame {
        self.tick = self.tick.wrapping_add(1);

        let edge = button.state();
        // A release that only ended a wake-press is consumed here, whatever
        // mode it lands in.
        let swallowed = edge == ButtonState::Rising && core::mem::take(&mut self.swallow_release);

        // Long press in the default mode opens hue editing. Checked before
        // any edge handling so the threshold tick itself starts editing.
        if self.mode == LightingMode::Solid && button.is_pressed_for(LONG_PRESS, now) {
            self.resume = self.mode;
            self.enter(LightingMode::ManualColorEdit, rng);
        }

        if self.mode == LightingMode::ManualColorEdit {
            self.edit_tick(edge, rng);
        } else {
            match edge {
                ButtonState::Rising => {
                    if !swallowed {
                        self.next_mode(rng);
                    }
                }
                _ => self.animate(),
            }
        }

        self.frame()
    }

    /// Hue editing: one unit per held tick, bypassing the cursors.
    fn edit_tick(&mut self, edge: ButtonState, rng: &mut dyn EntropySource) {
        match edge {
            ButtonState::Down => {
                let hue = self.hue.value().wrapping_add(1);
                self.hue.cursor.set(hue);
            }
            ButtonState::Rising => self.enter(self.resume, rng),
            _ => {}
        }
    }

    /// Advance to the next mode in the configured cycle.
    fn next_mode(&mut self, rng: &mut dyn EntropySource) {
        self.cycle_index = (self.cycle_index + 1) % MODE_CYCLE.len();
        self.enter(MODE_CYCLE[self.cycle_index], rng);
    }

    /// Activate a mode: arm its plan and randomize where it asks for it.
    fn enter(&mut self, mode: LightingMode, rng: &mut dyn EntropySource) {
        self.mode = mode;
        let plan = mode.plan();
        self.arm(&plan);
        if plan.randomize {
            for channel in [&mut self.hue, &mut self.sat, &mut self.val, &mut self.delay] {
                if channel.active {
                    channel.cursor.randomize(rng);
                }
            }
        }

        #[cfg(feature = "esp32-log")]
        println!("mode: {:?}", mode);
    }

    fn arm(&mut self, plan: &AnimationPlan) {
        self.hue.apply(plan.hue);
        self.sat.apply(plan.sat);
        self.val.apply(plan.val);
        self.delay.apply(plan.delay);
    }

    fn animate(&mut self) {
        self.hue.advance(self.tick);
        self.sat.advance(self.tick);
        self.val.advance(self.tick);
        self.delay.advance(self.tick);
    }

    fn frame(&self) -> Frame {
        Frame {
            color: hsv2rgb(self.hsv()),
            delay: Duration::from_millis(u64::from(self.delay.value())),
        }
    }

    pub const fn mode(&self) -> LightingMode {
        self.mode
    }

    /// The current channel values as one HSV triple.
    pub fn hsv(&self) -> Hsv {
        Hsv {
            hue: self.hue.value(),
            sat: self.sat.value(),
            val: self.val.value(),
        }
    }

    /// The last active color at full brightness, shown on wake.
    pub fn wake_color(&self) -> Rgb {
        hsv2rgb(Hsv {
            hue: self.hue.value(),
            sat: self.sat.value(),
            val: 255,
        })
    }

    /// Mark the next release as already consumed by a wake-by-press.
    pub fn notify_wake(&mut self) {
        self.swallow_release = true;
    }
}
