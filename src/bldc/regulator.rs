//! PI speed regulator.

use crate::config::{DUTY_MAX, DUTY_MIN, REGULATOR_PERIOD_MS};

/// PI controller deriving the BLDC duty cycle from the speed error.
///
/// The regulator is deadline-gated: [`SpeedRegulator::update`] only computes
/// once the sampling window (10 ms) has elapsed, and the Hall sampler pushes
/// the deadline forward while the open-loop startup ramp runs, so regulation
/// effectively begins with closed-loop operation.
///
/// The integral accumulator is unbounded by default, matching the shield's
/// reference firmware; [`SpeedRegulator::set_integral_limit`] installs a
/// symmetric anti-windup clamp for callers that want one.
pub struct SpeedRegulator {
    reference_rpm: f32,
    kp: f32,
    ki: f32,
    integral: f32,
    integral_limit: Option<f32>,
    /// Speed measured in the last completed window \[RPM\].
    last_rpm: u16,
    /// Next update deadline on the backend's monotonic clock \[ms\].
    deadline_ms: u64,
    pole_count: u8,
}

impl SpeedRegulator {
    pub fn new(kp: f32, ki: f32, reference_rpm: f32, pole_count: u8) -> Self {
        Self {
            reference_rpm,
            kp,
            ki,
            integral: 0.0,
            integral_limit: None,
            last_rpm: 0,
            // Disarmed until the first hold_off from the Hall sampler.
            deadline_ms: u64::MAX,
            pole_count,
        }
    }

    /// Run one regulator tick.
    ///
    /// `transitions` is the Hall transition count accumulated since the last
    /// completed window; it is consumed (reset to zero) when the window
    /// closes. Returns the new clamped duty cycle, or `None` while the
    /// deadline has not passed.
    pub fn update(&mut self, now_ms: u64, transitions: &mut u16) -> Option<u8> {
        if now_ms <= self.deadline_ms {
            return None;
        }

        // Transition count over the 10 ms window, scaled to one minute and
        // divided by the pole count.
        let rpm = (*transitions as u32 * 100 * 60 / self.pole_count as u32) as u16;
        self.last_rpm = rpm;

        let error = self.reference_rpm - rpm as f32;
        self.integral += error;
        if let Some(limit) = self.integral_limit {
            self.integral = self.integral.clamp(-limit, limit);
        }

        let raw = self.kp * error + self.ki * self.integral;
        let duty = raw.clamp(DUTY_MIN as f32, DUTY_MAX as f32) as u8;

        *transitions = 0;
        self.deadline_ms = now_ms + REGULATOR_PERIOD_MS;

        trace!(
            "regulator: measured {} rpm, reference {} rpm, duty {}",
            rpm,
            self.reference_rpm,
            duty
        );
        Some(duty)
    }

    /// Push the update deadline one window past `now_ms`.
    ///
    /// Called on every Hall sample while the startup ramp runs.
    pub fn hold_off(&mut self, now_ms: u64) {
        self.deadline_ms = now_ms + REGULATOR_PERIOD_MS;
    }

    /// Shift the reference speed by `delta_rpm`.
    pub fn adjust_reference(&mut self, delta_rpm: f32) {
        self.reference_rpm += delta_rpm;
    }

    pub fn set_reference_rpm(&mut self, rpm: f32) {
        self.reference_rpm = rpm;
    }

    pub fn reference_rpm(&self) -> f32 {
        self.reference_rpm
    }

    /// Speed measured in the last completed window \[RPM\].
    pub fn last_rpm(&self) -> u16 {
        self.last_rpm
    }

    pub fn set_gains(&mut self, kp: f32, ki: f32) {
        self.kp = kp;
        self.ki = ki;
    }

    /// Install (or remove) a symmetric clamp on the integral accumulator.
    pub fn set_integral_limit(&mut self, limit: Option<f32>) {
        self.integral_limit = limit;
    }

    pub fn integral(&self) -> f32 {
        self.integral
    }

    /// Clear the accumulator and measurement state and disarm the deadline.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.last_rpm = 0;
        self.deadline_ms = u64::MAX;
    }
}
