//! GPIO/PWM backend capability consumed by the driver.
//!
//! The shield logic never touches registers directly; everything it needs
//! from the platform is collected in the [`Backend`] trait. An implementation
//! wraps whatever HAL owns the pins (on the original shield an Arduino-class
//! 8-bit part). Pin directions are fixed at wiring time, so configuring them
//! is the implementor's construction-time concern and not part of the
//! capability.

use embedded_hal::digital::PinState;

/// Platform services required by the driver.
///
/// Pins are addressed by the board-level numbers carried in
/// [`crate::pins::PinMap`]. All methods are infallible: the driver targets
/// plain push-pull outputs and pulled-up inputs, where writes cannot fail.
pub trait Backend {
    /// Drive a digital output pin to the given level.
    fn write_digital(&mut self, pin: u8, state: PinState);

    /// Output a PWM waveform with the given duty cycle (0..=255) on a pin.
    ///
    /// A duty of 0 must leave the pin statically low.
    fn write_pwm(&mut self, pin: u8, duty: u8);

    /// Program the carrier-frequency divisor of the timer behind a PWM pin.
    ///
    /// Divisors are validated by the driver before this is called; the
    /// backend may assume the value is one its timer supports.
    fn set_pwm_frequency(&mut self, pin: u8, divisor: u16);

    /// Read a digital input pin.
    fn read_digital(&mut self, pin: u8) -> bool;

    /// Monotonic milliseconds since some fixed epoch.
    fn millis(&mut self) -> u64;

    /// Busy-wait for the given number of microseconds.
    fn delay_us(&mut self, us: u32);
}
