// SPDX-License-Identifier: MIT

//! # Control Algorithms
//!
//! This module provides reusable building blocks for closed-loop motor control.
//!
//! ## Modules
//!
//! - [`pid`] - General-purpose PID controller implementation.
//! - [`position_controller`] - Closed-loop position controller for a
//!   potentiometer-feedback actuator.

pub mod pid;
pub mod position_controller;

pub use pid::Pid;
pub use position_controller::{ControlMode, PositionController};
