//! The single control loop owning all device state.
//!
//! [`Lamp`] wires the debouncer, mode controller and power manager to the
//! hardware boundary traits and runs the per-tick order: sample pin →
//! debounce → mode evaluation → channel advance → color conversion → PWM
//! write → sleep decision. The caller drives `tick` and sleeps for the
//! returned delay between calls; there are no ambient globals and no
//! busy-waits.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::button::{Debouncer, Polarity};
use crate::color::{BLACK, Hsv, Rgb};
use crate::controller::ModeController;
use crate::power::{PowerManager, PowerState, SleepControl, WakeInterval};
use crate::rng::EntropySource;
use crate::signal::{WakeReceiver, WakeSource};
use crate::{ButtonInput, PwmDriver};

/// Power-on check colors, shown for 500 ms each before the mode loop starts.
const BOOT_CHECK: [Rgb; 4] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
    Rgb { r: 0, g: 255, b: 0 },
    BLACK,
];

const BOOT_CHECK_STEP: Duration = Duration::from_millis(500);

/// Static configuration for one lamp.
#[derive(Clone, Copy)]
pub struct LampConfig {
    pub polarity: Polarity,
    /// Steady-`Up` time before the duty cycle drops into the halt.
    pub idle_window: Duration,
    pub wake_interval: WakeInterval,
    /// Color the mode loop starts with.
    pub initial: Hsv,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            polarity: Polarity::ActiveLow,
            idle_window: Duration::from_secs(2),
            wake_interval: WakeInterval::S1,
            initial: Hsv {
                hue: 0,
                sat: 255,
                val: 255,
            },
        }
    }
}

/// Outcome of one tick: how long to wait and the resulting power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub delay: Duration,
    pub power: PowerState,
}

/// Outer-loop phase: the power-on check runs first, then the mode loop.
#[derive(Clone, Copy)]
enum Phase {
    BootCheck(usize),
    Run,
}

/// The whole wearable: debouncer, mode controller and power manager wired to
/// the hardware boundary traits.
pub struct Lamp<'w, B, P, S, R, const WAKE_DEPTH: usize>
where
    B: ButtonInput,
    P: PwmDriver,
    S: SleepControl,
    R: EntropySource,
{
    button: B,
    pwm: P,
    sleep: S,
    rng: R,
    wake: WakeReceiver<'w, WAKE_DEPTH>,
    config: LampConfig,
    debouncer: Debouncer,
    controller: ModeController,
    power: PowerManager,
    phase: Phase,
}

impl<'w, B, P, S, R, const WAKE_DEPTH: usize> Lamp<'w, B, P, S, R, WAKE_DEPTH>
where
    B: ButtonInput,
    P: PwmDriver,
    S: SleepControl,
    R: EntropySource,
{
    pub fn new(
        button: B,
        pwm: P,
        sleep: S,
        rng: R,
        wake: WakeReceiver<'w, WAKE_DEPTH>,
        config: LampConfig,
    ) -> Self {
        Self {
            button,
            pwm,
            sleep,
            rng,
            wake,
            debouncer: Debouncer::new(config.polarity),
            controller: ModeController::new(config.initial),
            power: PowerManager::new(config.idle_window, config.wake_interval),
            phase: Phase::BootCheck(0),
            config,
        }
    }

    /// Drive one tick of the control loop.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        match self.power.state() {
            PowerState::Awake => self.awake_tick(now),
            PowerState::Asleep => self.asleep_tick(now),
        }
    }

    fn awake_tick(&mut self, now: Instant) -> TickOutcome {
        let raw = self.button.level();
        self.debouncer.sample(raw, now);

        if let Phase::BootCheck(step) = self.phase {
            // Button edges are sampled but not acted on until the check ends.
            self.pwm.write(BOOT_CHECK[step]);
            self.phase = if step + 1 < BOOT_CHECK.len() {
                Phase::BootCheck(step + 1)
            } else {
                Phase::Run
            };
            return TickOutcome {
                delay: BOOT_CHECK_STEP,
                power: PowerState::Awake,
            };
        }

        let frame = self.controller.tick(&self.debouncer, now, &mut self.rng);
        self.pwm.write(frame.color);

        // The sleep decision comes last in the tick ordering.
        if self.power.should_sleep(self.debouncer.idle_for(now)) {
            self.enter_sleep();
            return TickOutcome {
                delay: Duration::from_millis(0),
                power: PowerState::Asleep,
            };
        }

        TickOutcome {
            delay: frame.delay,
            power: PowerState::Awake,
        }
    }

    fn enter_sleep(&mut self) {
        // Display off while asleep; the last frame is not held.
        self.pwm.write(BLACK);
        self.sleep.power_down();
        self.power.sleep();

        #[cfg(feature = "esp32-log")]
        println!("power: asleep");
    }

    /// One arm/halt/re-sample round of the idle duty cycle.
    fn asleep_tick(&mut self, now: Instant) -> TickOutcome {
        self.sleep.arm_wake_timer(self.power.wake_interval());
        self.sleep.halt();

        let mut button_edge = false;
        while let Some(source) = self.wake.take() {
            if source == WakeSource::ButtonEdge {
                button_edge = true;
            }
        }

        // One sample after every wake decides whether to stay down.
        let raw = self.button.level();
        if button_edge || self.config.polarity.pressed(raw) {
            self.wake_up(now);
            return TickOutcome {
                delay: Duration::from_millis(0),
                power: PowerState::Awake,
            };
        }

        TickOutcome {
            delay: Duration::from_millis(0),
            power: PowerState::Asleep,
        }
    }

    fn wake_up(&mut self, now: Instant) {
        self.sleep.power_up();
        self.power.wake();
        // The wake press is consumed: no edge reaches the mode controller
        // and its release does not cycle the mode.
        self.debouncer.sync_pressed(now);
        self.controller.notify_wake();
        self.pwm.write(self.controller.wake_color());

        #[cfg(feature = "esp32-log")]
        println!("power: awake");
    }

    pub fn controller(&self) -> &ModeController {
        &self.controller
    }

    pub const fn power_state(&self) -> PowerState {
        self.power.state()
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}
