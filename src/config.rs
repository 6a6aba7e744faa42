//! Driver tuning constants.
//!
//! Values match the reference motor shipped with the shield; runtime knobs
//! (open-loop delay, stall timeout, gains, reference speed) have setters on
//! the driver and regulator.

/// Rotor pole count of the reference motor.
pub const MOTOR_POLES: u8 = 8;

/// Proportional gain of the speed regulator.
pub const SPEED_KP: f32 = 0.01;

/// Integral gain of the speed regulator.
pub const SPEED_KI: f32 = 0.001;

/// Reference speed the regulator targets until adjusted \[RPM\].
pub const DEFAULT_REFERENCE_RPM: f32 = 6500.0;

/// Regulator sampling window \[ms\].
pub const REGULATOR_PERIOD_MS: u64 = 10;

/// Lower bound of the BLDC duty cycle.
pub const DUTY_MIN: u8 = 30;

/// Upper bound of the BLDC duty cycle.
pub const DUTY_MAX: u8 = 200;

/// Hall transitions consumed by the open-loop startup ramp before the drive
/// hands over to closed-loop commutation.
pub const OPEN_LOOP_STEPS: u16 = 100;

/// Fixed commutation delay during the open-loop ramp \[µs\].
pub const OPEN_LOOP_DELAY_US: u32 = 3000;

/// Longest wait for a Hall transition in closed loop before the rotor is
/// reported stalled \[ms\].
pub const STALL_TIMEOUT_MS: u64 = 100;

/// Reference-speed change per recognized command byte \[RPM\].
pub const RPM_COMMAND_STEP: f32 = 100.0;

/// Divisors accepted by the timer0/timer1 PWM pins (5, 6, 9, 10).
pub const TIMER01_DIVISORS: [u16; 5] = [1, 8, 64, 256, 1024];

/// Divisors accepted by the timer2 PWM pins (3, 11).
pub const TIMER2_DIVISORS: [u16; 7] = [1, 8, 32, 64, 128, 256, 1024];

/// Whether the timer behind `pin` supports the given carrier divisor.
pub fn divisor_supported(pin: u8, divisor: u16) -> bool {
    match pin {
        5 | 6 | 9 | 10 => TIMER01_DIVISORS.contains(&divisor),
        3 | 11 => TIMER2_DIVISORS.contains(&divisor),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisor_tables() {
        assert!(divisor_supported(9, 64));
        assert!(!divisor_supported(9, 32)); // timer1 has no /32
        assert!(divisor_supported(11, 32)); // timer2 does
        assert!(divisor_supported(3, 1024));
        assert!(!divisor_supported(3, 2048));
    }

    #[test]
    fn test_non_pwm_pin_rejected() {
        assert!(!divisor_supported(7, 1));
        assert!(!divisor_supported(13, 8));
    }
}
