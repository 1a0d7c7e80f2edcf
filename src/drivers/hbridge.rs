// SPDX-License-Identifier: MIT

//! Generic driver for PWM-enabled H-bridge motor drivers (L298, DRV887x EN/PH
//! wiring, and similar).
//!
//! Wiring:
//! - `ena`: PWM input controlling drive magnitude
//! - `in1` / `in2`: direction inputs (IN1 high, IN2 low = forward)
//!
//! Commands are signed 8-bit-style magnitudes in −255..=255, matching the
//! classic `analogWrite` range. The magnitude is rescaled onto the PWM
//! channel's native resolution, so the driver works unchanged with 8-, 12- or
//! 16-bit timers.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Hard ceiling on command magnitude.
pub const MAX_DRIVE: i16 = 255;

/// Logical drive direction of the bridge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Backward,
    Stopped,
}

impl Direction {
    /// Map a signed command to a direction, applying deadzone suppression.
    ///
    /// A nonzero command whose magnitude is below `deadzone` maps to
    /// `Stopped` rather than a weak drive that would stall the motor. Pure
    /// function of the latest command; no previous-direction state exists.
    pub fn from_command(command: i16, deadzone: u8) -> Self {
        if command != 0 && command.unsigned_abs() < deadzone as u16 {
            return Direction::Stopped;
        }
        if command > 0 {
            Direction::Forward
        } else if command < 0 {
            Direction::Backward
        } else {
            Direction::Stopped
        }
    }
}

/// H-bridge bound to one PWM channel and two direction pins.
///
/// Each [`drive`](Self::drive) call fully determines the physical output
/// state; the struct does not mirror it. Pin errors are swallowed — the
/// intended pin types are infallible, and a failed write on a fallible one
/// degrades to a stale output rather than a panic.
pub struct HBridge<Ena, In1, In2> {
    ena: Ena,
    in1: In1,
    in2: In2,
    deadzone: u8,
}

impl<Ena, In1, In2> HBridge<Ena, In1, In2>
where
    Ena: SetDutyCycle,
    In1: OutputPin,
    In2: OutputPin,
{
    /// Construct an H-bridge driver and immediately drive the stopped state.
    ///
    /// `deadzone` is the minimum useful command magnitude; commands below it
    /// are treated as zero. Use 0 to disable suppression.
    pub fn new(ena: Ena, in1: In1, in2: In2, deadzone: u8) -> Self {
        let mut bridge = Self {
            ena,
            in1,
            in2,
            deadzone,
        };
        bridge.stop();
        bridge
    }

    /// Apply a signed drive command.
    ///
    /// - `command > 0`: forward, magnitude `min(command, 255)`
    /// - `command < 0`: backward, magnitude `min(|command|, 255)`
    /// - zero (or inside the deadzone): [`stop`](Self::stop)
    ///
    /// Over-range commands clamp to [`MAX_DRIVE`], never reject.
    pub fn drive(&mut self, command: i16) {
        match Direction::from_command(command, self.deadzone) {
            Direction::Forward => {
                self.in1.set_high().ok();
                self.in2.set_low().ok();
                self.set_magnitude(command.unsigned_abs());
            }
            Direction::Backward => {
                self.in1.set_low().ok();
                self.in2.set_high().ok();
                self.set_magnitude(command.unsigned_abs());
            }
            Direction::Stopped => self.stop(),
        }
    }

    /// Stop: both direction pins inactive, zero duty.
    ///
    /// Idempotent and always safe to call.
    pub fn stop(&mut self) {
        self.in1.set_low().ok();
        self.in2.set_low().ok();
        self.ena.set_duty_cycle_fully_off().ok();
    }

    /// The configured deadzone threshold.
    #[inline]
    pub fn deadzone(&self) -> u8 {
        self.deadzone
    }

    /// Release the PWM channel and direction pins.
    pub fn free(self) -> (Ena, In1, In2) {
        (self.ena, self.in1, self.in2)
    }

    /// Scale a 0..=255 magnitude onto the PWM channel's native resolution.
    fn set_magnitude(&mut self, magnitude: u16) {
        let magnitude = magnitude.min(MAX_DRIVE as u16);
        self.ena
            .set_duty_cycle_fraction(magnitude, MAX_DRIVE as u16)
            .ok();
    }
}
