// SPDX-License-Identifier: MIT

//! # Device Drivers
//!
//! This module contains the hardware-facing drivers that sit between
//! `embedded-hal` pin resources and the control logic.
//!
//! ## Existing drivers
//!
//! - [`hbridge`] – PWM-enabled H-bridge motor driver (L298-style EN/IN1/IN2)
//! - [`potentiometer`] – Analog position feedback with safe-range classification

pub mod hbridge;
pub mod potentiometer;

pub use hbridge::{Direction, HBridge, MAX_DRIVE};
pub use potentiometer::{Potentiometer, SafetyClassification};
