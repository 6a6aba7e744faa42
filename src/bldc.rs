// BLDC control core
// Hall-commutated six-step drive with an open-loop startup ramp and a PI
// speed regulator.

pub mod commutation;
pub mod hall;
pub mod regulator;

// Re-export main types for easier access
pub use commutation::{CommutationStep, StepPattern};
pub use hall::{HallSample, HallSampler};
pub use regulator::SpeedRegulator;

/// Drive loop mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopMode {
    /// Timed forced commutation during startup.
    OpenLoop,
    /// Commutation synchronized to actual Hall transitions.
    ClosedLoop,
}
