// SPDX-License-Identifier: MIT

//! Closed-loop position control for a potentiometer-feedback actuator.
//!
//! This controller wires one [`Potentiometer`], one [`Pid`] and one
//! [`HBridge`] and provides a periodic `step()` function that runs the
//! sample → classify → compute → drive sequence. Timing stays with the
//! caller, who invokes `step(dt)` from its own loop or timer interrupt.
//!
//! Typical usage pattern:
//!
//! ```no_run
//! # use servopot::control::{Pid, PositionController};
//! # use servopot::drivers::{HBridge, Potentiometer};
//! # fn demo<A, B, C, R>(motor: HBridge<A, B, C>, pot: Potentiometer<R>, dt_seconds: f32)
//! # where
//! #     A: embedded_hal::pwm::SetDutyCycle,
//! #     B: embedded_hal::digital::OutputPin,
//! #     C: embedded_hal::digital::OutputPin,
//! #     R: FnMut() -> u16,
//! # {
//! let mut controller = PositionController::new(motor, pot, Pid::new());
//! controller.set_target(600.0);
//!
//! loop {
//!     controller.step(dt_seconds);
//!     // delay one tick
//! }
//! # }
//! ```

use micromath::F32Ext as _;

use crate::control::Pid;
use crate::drivers::hbridge::HBridge;
use crate::drivers::potentiometer::{Potentiometer, SafetyClassification};

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Operating mode of the position controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMode {
    /// Regular closed-loop control toward the position target.
    Position,

    /// Motor is held stopped until re-enabled.
    Disabled,
}

/// Controller state and configuration.
pub struct PositionController<Ena, In1, In2, ReadRaw> {
    motor: HBridge<Ena, In1, In2>,
    sensor: Potentiometer<ReadRaw>,
    pid: Pid,
    mode: ControlMode,

    /// Commanded position (raw sensor counts)
    target: f32,

    /// Reseed the PID before the next compute (startup, resume after a
    /// fault or disable). Keeps the derivative term quiet across gaps.
    needs_reset: bool,
}

impl<Ena, In1, In2, ReadRaw> PositionController<Ena, In1, In2, ReadRaw>
where
    Ena: SetDutyCycle,
    In1: OutputPin,
    In2: OutputPin,
    ReadRaw: FnMut() -> u16,
{
    /// Create a position controller.
    ///
    /// The target is seeded from the current sensor reading, so an enabled
    /// controller holds position until told otherwise.
    pub fn new(motor: HBridge<Ena, In1, In2>, mut sensor: Potentiometer<ReadRaw>, pid: Pid) -> Self {
        let initial = sensor.read() as f32;
        Self {
            motor,
            sensor,
            pid,
            mode: ControlMode::Position,
            target: initial,
            needs_reset: true,
        }
    }

    /// Set a new position target in raw sensor counts, clamped to the
    /// sensor's safe window.
    ///
    /// The PID is deliberately not reset here: derivative-on-measurement
    /// already suppresses setpoint kicks, and the integral history is still
    /// valid for the unchanged plant.
    pub fn set_target(&mut self, raw: f32) {
        let (min_safe, max_safe) = self.sensor.safe_range();
        self.target = raw.clamp(min_safe as f32, max_safe as f32);
    }

    /// The current position target in raw sensor counts.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Replace the PID gain coefficients without resetting state.
    pub fn set_tunings(&mut self, kp: f32, ki: f32, kd: f32) {
        self.pid.set_tunings(kp, ki, kd);
    }

    /// Stop the motor and hold it stopped until [`enable`](Self::enable).
    pub fn disable(&mut self) {
        self.mode = ControlMode::Disabled;
        self.motor.stop();
    }

    /// Resume closed-loop control from the next `step`.
    pub fn enable(&mut self) {
        self.mode = ControlMode::Position;
    }

    #[inline]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Absolute distance from target at the latest sample, in raw counts.
    pub fn error_abs(&mut self) -> f32 {
        (self.target - self.sensor.read() as f32).abs()
    }

    /// Access the wrapped PID, e.g. for windup monitoring.
    #[inline]
    pub fn pid(&self) -> &Pid {
        &self.pid
    }

    /// Run one control step.
    ///
    /// Sequence per tick: classify the sensor; if the controller is disabled
    /// or the reading is outside the safe window, stop the motor and skip
    /// the compute; otherwise compute a drive command from a fresh sample
    /// and apply it. Returns the tick's safety classification so the caller
    /// can escalate persistent faults.
    pub fn step(&mut self, dt: f32) -> SafetyClassification {
        let classification = self.sensor.classify();

        if self.mode == ControlMode::Disabled || classification != SafetyClassification::Safe {
            self.motor.stop();
            self.needs_reset = true;
            return classification;
        }

        let measurement = self.sensor.read() as f32;
        if self.needs_reset {
            self.pid.reset(measurement);
            self.needs_reset = false;
        }

        let command = self.pid.compute(self.target, measurement, dt);
        self.motor.drive(command);

        classification
    }

    /// Stop the motor and release the wrapped motor and sensor.
    pub fn free(mut self) -> (HBridge<Ena, In1, In2>, Potentiometer<ReadRaw>) {
        self.motor.stop();
        (self.motor, self.sensor)
    }
}
