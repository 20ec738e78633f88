//! Lighting modes and their animation plans.
//!
//! Each mode carries a fixed plan describing what happens to every animated
//! channel on entry. The plan is selected by one match at mode activation
//! instead of re-deriving behavior from feature flags every tick.

use crate::cursor::{BoundaryPolicy, CursorConfig, StepCurve};

/// Inter-frame delay (milliseconds) of the fixed-rate modes.
pub const FRAME_DELAY_MS: u8 = 5;

/// Modes the button cycles through, plus the long-press edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingMode {
    /// Steady color at full saturation and brightness.
    Solid,
    /// Hue sweeps the wheel continuously.
    Rainbow,
    /// Hue, saturation and value all animate under sinusoidal speed
    /// envelopes with re-randomized rates; the frame delay drifts too.
    Crazy,
    /// Long-press hue editing; returns to the previous mode on release.
    ManualColorEdit,
}

/// The order short presses cycle through. `ManualColorEdit` sits outside the
/// cycle and is reached by long press only.
pub const MODE_CYCLE: [LightingMode; 3] = [
    LightingMode::Solid,
    LightingMode::Rainbow,
    LightingMode::Crazy,
];

/// What a mode does to one channel on entry.
#[derive(Debug, Clone, Copy)]
pub enum ChannelPlan {
    /// Keep the current value, no animation.
    Hold,
    /// Pin the value, no animation.
    Force(u8),
    /// Arm the channel with this cursor configuration.
    Animate(CursorConfig),
}

/// Per-channel plans armed by a mode.
#[derive(Debug, Clone, Copy)]
pub struct AnimationPlan {
    pub hue: ChannelPlan,
    pub sat: ChannelPlan,
    pub val: ChannelPlan,
    pub delay: ChannelPlan,
    /// Redraw accel/period of the armed channels once on activation.
    pub randomize: bool,
}

const RAINBOW_HUE: CursorConfig = CursorConfig {
    start: None,
    accel: 1,
    period: 1,
    bound: 256,
    policy: BoundaryPolicy::Wrap,
    curve: StepCurve::Linear,
    accel_range: (1, 1),
    period_range: (1, 1),
};

const CRAZY_HUE: CursorConfig = CursorConfig {
    start: None,
    accel: 3,
    period: 1,
    bound: 256,
    policy: BoundaryPolicy::Wrap,
    curve: StepCurve::Sine,
    accel_range: (1, 8),
    period_range: (1, 4),
};

const CRAZY_SAT: CursorConfig = CursorConfig {
    start: Some(255),
    accel: 2,
    period: 2,
    bound: 255,
    policy: BoundaryPolicy::Bounce,
    curve: StepCurve::Sine,
    accel_range: (1, 6),
    period_range: (1, 6),
};

const CRAZY_VAL: CursorConfig = CursorConfig {
    start: Some(255),
    accel: 10,
    period: 1,
    bound: 255,
    policy: BoundaryPolicy::Bounce,
    curve: StepCurve::Sine,
    accel_range: (4, 16),
    period_range: (1, 3),
};

const CRAZY_DELAY: CursorConfig = CursorConfig {
    start: Some(FRAME_DELAY_MS),
    accel: 2,
    period: 4,
    bound: 30,
    policy: BoundaryPolicy::Bounce,
    curve: StepCurve::Linear,
    accel_range: (1, 4),
    period_range: (2, 8),
};

impl LightingMode {
    /// The fixed animation plan of this mode.
    ///
    /// A pure function of the mode: plans are never mutated independently.
    pub const fn plan(self) -> AnimationPlan {
        match self {
            Self::Solid => AnimationPlan {
                hue: ChannelPlan::Hold,
                sat: ChannelPlan::Force(255),
                val: ChannelPlan::Force(255),
                delay: ChannelPlan::Force(FRAME_DELAY_MS),
                randomize: false,
            },
            Self::Rainbow => AnimationPlan {
                hue: ChannelPlan::Animate(RAINBOW_HUE),
                sat: ChannelPlan::Force(255),
                val: ChannelPlan::Force(255),
                delay: ChannelPlan::Force(FRAME_DELAY_MS),
                randomize: false,
            },
            Self::Crazy => AnimationPlan {
                hue: ChannelPlan::Animate(CRAZY_HUE),
                sat: ChannelPlan::Animate(CRAZY_SAT),
                val: ChannelPlan::Animate(CRAZY_VAL),
                delay: ChannelPlan::Animate(CRAZY_DELAY),
                randomize: true,
            },
            // Editing drives hue directly; everything else stays put.
            Self::ManualColorEdit => AnimationPlan {
                hue: ChannelPlan::Hold,
                sat: ChannelPlan::Hold,
                val: ChannelPlan::Hold,
                delay: ChannelPlan::Hold,
                randomize: false,
            },
        }
    }
}
