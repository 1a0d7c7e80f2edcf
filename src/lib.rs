// SPDX-License-Identifier: MIT

//! # servopot
//!
//! Closed-loop position control for a single DC actuator with potentiometer
//! feedback: sample a bounded analog position, classify it against a safe
//! window, compute a corrective command with a discrete PID step, and apply
//! it through a deadzone-aware H-bridge driver.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`drivers`] | Hardware-facing drivers (H-bridge, potentiometer feedback) |
//! | [`control`] | Control algorithms (PID, closed-loop position controller) |
//!
//! ## Hardware model
//!
//! The crate is `no_std` and platform-agnostic: actuator pins are any
//! `embedded-hal` 1.x [`OutputPin`](embedded_hal::digital::OutputPin) /
//! [`SetDutyCycle`](embedded_hal::pwm::SetDutyCycle) implementations, and the
//! position sense is a `FnMut() -> u16` sampler, typically a captured ADC
//! channel read. Each channel is moved into exactly one driver at
//! construction; unit tests substitute simulated channels.
//!
//! Board bring-up, pin assignment and the periodic tick that supplies `dt`
//! belong to the surrounding firmware, not to this crate.
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.

#![no_std]

pub mod control;
pub mod drivers;

#[cfg(test)]
pub(crate) mod testutil;
