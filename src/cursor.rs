//! Bounded animated value driver.
//!
//! A cursor carries one animated channel (hue, saturation, value or the
//! inter-frame delay) and advances it on a fixed tick period, either by a
//! constant step or under a sinusoidal speed envelope. Circular channels wrap
//! at their bound, the rest reverse direction there.

use core::f32::consts::TAU;

use libm::{roundf, sinf};

use crate::rng::EntropySource;

/// What happens when a step would leave the value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Value is taken modulo the bound (circular quantities such as hue).
    Wrap,
    /// Direction flips at the edge; the flipping step is not applied, so a
    /// reversal costs one tick of stasis.
    Bounce,
}

/// Shape of the per-step magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCurve {
    /// Constant `accel` per step.
    Linear,
    /// `accel` scaled by the sine of a slowly running phase, so the speed
    /// itself swells and fades. The position stays a running sum, not a
    /// direct sine sample.
    Sine,
}

/// Static configuration for one cursor.
#[derive(Debug, Clone, Copy)]
pub struct CursorConfig {
    /// Starting value, or `None` to keep the current value on re-arm.
    pub start: Option<u8>,
    /// Step magnitude.
    pub accel: u8,
    /// Step once every `period` ticks.
    pub period: u32,
    /// Wrap modulus (at most 256), or inclusive maximum (at most 255) for
    /// bounce channels. Values live in the u8 channel domain.
    pub bound: u16,
    pub policy: BoundaryPolicy,
    pub curve: StepCurve,
    /// Range `accel` is redrawn from on [`Cursor::randomize`].
    pub accel_range: (u8, u8),
    /// Range `period` is redrawn from on [`Cursor::randomize`].
    pub period_range: (u32, u32),
}

/// Configuration of a cursor that holds its value until reconfigured.
const HOLD: CursorConfig = CursorConfig {
    start: None,
    accel: 0,
    period: 1,
    bound: 255,
    policy: BoundaryPolicy::Bounce,
    curve: StepCurve::Linear,
    accel_range: (0, 0),
    period_range: (1, 1),
};

/// A bounded value advanced on a schedule.
#[derive(Debug, Clone)]
pub struct Cursor {
    config: CursorConfig,
    value: u8,
    accel: u8,
    period: u32,
    /// true = increasing.
    direction: bool,
    /// Sine envelope phase, one increment per step.
    phase: u8,
}

impl Cursor {
    pub const fn new(config: CursorConfig) -> Self {
        let value = match config.start {
            Some(start) => start,
            None => 0,
        };
        Self {
            value,
            accel: config.accel,
            period: config.period,
            direction: true,
            phase: 0,
            config,
        }
    }

    /// A motionless cursor holding `value` until reconfigured.
    pub const fn parked(value: u8) -> Self {
        Self {
            config: HOLD,
            value,
            accel: 0,
            period: 1,
            direction: true,
            phase: 0,
        }
    }

    /// Re-arm for a fresh mode activation.
    ///
    /// Pins the value when the config declares a start, otherwise keeps it;
    /// motion state (direction, phase, rates) always resets.
    pub fn reconfigure(&mut self, config: CursorConfig) {
        if let Some(start) = config.start {
            self.value = start;
        }
        self.accel = config.accel;
        self.period = config.period;
        self.direction = true;
        self.phase = 0;
        self.config = config;
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Pin the value directly, bypassing the stepping machinery.
    pub fn set(&mut self, value: u8) {
        self.value = value;
    }

    /// Current step magnitude (may differ from config after [`Self::randomize`]).
    pub const fn accel(&self) -> u8 {
        self.accel
    }

    /// Current step period (may differ from config after [`Self::randomize`]).
    pub const fn period(&self) -> u32 {
        self.period
    }

    /// Advance one tick. Returns true when a scheduled step occurred.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance(&mut self, tick: u32) -> bool {
        if tick % self.period.max(1) != 0 {
            return false;
        }

        let magnitude = self.step_magnitude();
        let step = if self.direction { magnitude } else { -magnitude };
        match self.config.policy {
            BoundaryPolicy::Wrap => {
                let next = (i32::from(self.value) + i32::from(step))
                    .rem_euclid(i32::from(self.config.bound));
                self.value = next as u8;
            }
            BoundaryPolicy::Bounce => {
                let next = i32::from(self.value) + i32::from(step);
                if next < 0 || next > i32::from(self.config.bound) {
                    self.direction = !self.direction;
                } else {
                    self.value = next as u8;
                }
            }
        }
        true
    }

    #[allow(clippy::cast_possible_truncation)]
    fn step_magnitude(&mut self) -> i16 {
        match self.config.curve {
            StepCurve::Linear => i16::from(self.accel),
            StepCurve::Sine => {
                let angle = f32::from(self.phase) * (TAU / 255.0);
                self.phase = self.phase.wrapping_add(1);
                roundf(f32::from(self.accel) * sinf(angle)) as i16
            }
        }
    }

    /// Redraw `accel` and `period` from the configured ranges.
    ///
    /// Called once per mode activation, never per tick.
    #[allow(clippy::cast_possible_truncation)]
    pub fn randomize(&mut self, rng: &mut dyn EntropySource) {
        let (lo, hi) = self.config.accel_range;
        self.accel = rng.next_in_range(u32::from(lo), u32::from(hi)) as u8;
        let (lo, hi) = self.config.period_range;
        self.period = rng.next_in_range(lo, hi).max(1);
    }
}
