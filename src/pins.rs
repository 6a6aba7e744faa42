//! Shield pin assignment.

use crate::driver::Phase;

/// Board-level pin numbers of the IFX007T shield.
///
/// Each phase half-bridge has an inhibitor pin (`inh_*`, high = awake) and an
/// input pin (`in_*`, carries the PWM waveform). The three Hall sensor inputs
/// deliver the 3-bit rotor position code.
///
/// The `Default` mapping is the shield stacked on an Arduino Uno form-factor
/// board, where the Hall inputs sit on A1..A3 (digital numbers 15..17).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    pub inh_u: u8,
    pub inh_v: u8,
    pub inh_w: u8,
    pub in_u: u8,
    pub in_v: u8,
    pub in_w: u8,
    pub hall_a: u8,
    pub hall_b: u8,
    pub hall_c: u8,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            inh_u: 6,
            inh_v: 5,
            inh_w: 3,
            in_u: 11,
            in_v: 10,
            in_w: 9,
            hall_a: 15,
            hall_b: 16,
            hall_c: 17,
        }
    }
}

impl PinMap {
    /// Inhibitor pin of a phase.
    pub fn inhibit(&self, phase: Phase) -> u8 {
        match phase {
            Phase::U => self.inh_u,
            Phase::V => self.inh_v,
            Phase::W => self.inh_w,
        }
    }

    /// Input (PWM) pin of a phase.
    pub fn input(&self, phase: Phase) -> u8 {
        match phase {
            Phase::U => self.in_u,
            Phase::V => self.in_v,
            Phase::W => self.in_w,
        }
    }
}
