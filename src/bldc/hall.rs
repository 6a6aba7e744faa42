//! Hall sensor sampling and open-loop startup accounting.

use crate::bldc::LoopMode;

/// Result of one Hall sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallSample {
    /// The freshly composed 3-bit position code (0..=7).
    pub code: u8,
    /// The code differs from the immediately preceding sample.
    pub changed: bool,
    /// The startup ramp is still consuming its step budget; the speed
    /// regulator must hold off while this is set.
    pub ramp_active: bool,
}

/// Tracks the rotor position code and decides when position feedback is
/// trusted.
///
/// Each detected transition during startup consumes one step of the
/// open-loop budget. Once the budget is spent the sampler switches to
/// [`LoopMode::ClosedLoop`], permanently until it is reset.
pub struct HallSampler {
    /// Code from the immediately preceding sample.
    old: u8,
    /// Most recent code.
    latest: u8,
    /// Remaining open-loop budget.
    open_loop_steps: u16,
    mode: LoopMode,
}

impl HallSampler {
    pub fn new(open_loop_steps: u16) -> Self {
        Self {
            old: 0,
            latest: 0,
            open_loop_steps,
            mode: LoopMode::OpenLoop,
        }
    }

    /// Pack three sensor readings into the 3-bit position code
    /// (bit2 = sensor C, bit1 = sensor B, bit0 = sensor A).
    pub fn compose(a: bool, b: bool, c: bool) -> u8 {
        ((c as u8) << 2) | ((b as u8) << 1) | (a as u8)
    }

    /// Record a freshly read position code.
    ///
    /// Rotates the previous latest code into `old`, updates the startup
    /// accounting and reports what happened.
    pub fn update(&mut self, code: u8) -> HallSample {
        debug_assert!(code <= 7);
        self.old = self.latest;
        self.latest = code;
        let changed = self.old != self.latest;

        let ramp_active = self.open_loop_steps > 0;
        if ramp_active {
            if changed {
                self.open_loop_steps -= 1;
            }
        } else if self.mode == LoopMode::OpenLoop {
            self.mode = LoopMode::ClosedLoop;
            debug!("hall: open-loop budget spent, handing over to closed loop");
        }

        HallSample {
            code,
            changed,
            ramp_active,
        }
    }

    pub fn mode(&self) -> LoopMode {
        self.mode
    }

    /// Most recent position code.
    pub fn latest(&self) -> u8 {
        self.latest
    }

    /// Position code from the sample before the latest one.
    pub fn old(&self) -> u8 {
        self.old
    }

    /// Restore the startup state with a fresh open-loop budget.
    pub fn reset(&mut self, open_loop_steps: u16) {
        self.old = 0;
        self.latest = 0;
        self.open_loop_steps = open_loop_steps;
        self.mode = LoopMode::OpenLoop;
    }
}
