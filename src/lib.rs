//! Driver for the Infineon IFX007T three-phase motor control shield.
//!
//! The shield carries three IFX007T half-bridges with a shared inhibitor/input
//! pin pair per phase and three Hall sensor inputs. This crate drives it in
//! two ways:
//!
//! - plain unidirectional PWM on any of the three phases, and
//! - a Hall-commutated six-step BLDC mode with an open-loop startup ramp and
//!   a PI speed regulator once position feedback is trusted.
//!
//! All hardware access goes through the [`Backend`] trait, so the control
//! logic runs unchanged on any GPIO/PWM provider and is testable on the host.
//! The driver is single-context and polling-driven: the caller owns it
//! exclusively and invokes [`driver::Ifx007tMotorControl::start`] once per
//! control-loop iteration.

#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod backend;
pub mod bldc;
pub mod config;
pub mod driver;
pub mod pins;

pub use backend::Backend;
pub use bldc::LoopMode;
pub use driver::{Error, Ifx007tMotorControl, Output, Phase, PhasePwm};
pub use pins::PinMap;
