//! Six-step trapezoidal commutation table.

use crate::driver::Phase;

/// One of the six commutation steps, numbered 1..=6 like the shield
/// documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CommutationStep {
    Step1 = 1,
    Step2 = 2,
    Step3 = 3,
    Step4 = 4,
    Step5 = 5,
    Step6 = 6,
}

/// Energization pattern of one commutation step.
///
/// The enable flags are the inhibitor levels (true = half-bridge awake).
/// `driven` carries the BLDC duty cycle; the other two inputs are driven to
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPattern {
    pub enable_u: bool,
    pub enable_v: bool,
    pub enable_w: bool,
    pub driven: Phase,
}

impl CommutationStep {
    /// Advance by one step, wrapping 6 -> 1. Steps are never skipped.
    pub fn next(self) -> Self {
        match self {
            Self::Step1 => Self::Step2,
            Self::Step2 => Self::Step3,
            Self::Step3 => Self::Step4,
            Self::Step4 => Self::Step5,
            Self::Step5 => Self::Step6,
            Self::Step6 => Self::Step1,
        }
    }

    /// Step number (1..=6).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The fixed energization table. Pure data, no computation.
    pub fn pattern(self) -> StepPattern {
        match self {
            // U carries the duty, W half-bridge asleep
            Self::Step1 => StepPattern {
                enable_u: true,
                enable_v: true,
                enable_w: false,
                driven: Phase::U,
            },
            // U carries the duty, V half-bridge asleep
            Self::Step2 => StepPattern {
                enable_u: true,
                enable_v: false,
                enable_w: true,
                driven: Phase::U,
            },
            // V carries the duty, U half-bridge asleep
            Self::Step3 => StepPattern {
                enable_u: false,
                enable_v: true,
                enable_w: true,
                driven: Phase::V,
            },
            // V carries the duty, W half-bridge asleep
            Self::Step4 => StepPattern {
                enable_u: true,
                enable_v: true,
                enable_w: false,
                driven: Phase::V,
            },
            // W carries the duty, V half-bridge asleep
            Self::Step5 => StepPattern {
                enable_u: true,
                enable_v: false,
                enable_w: true,
                driven: Phase::W,
            },
            // W carries the duty, U half-bridge asleep
            Self::Step6 => StepPattern {
                enable_u: false,
                enable_v: true,
                enable_w: true,
                driven: Phase::W,
            },
        }
    }
}
