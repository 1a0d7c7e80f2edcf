// SPDX-License-Identifier: MIT

//! Simulated hardware channels for unit tests.

use core::convert::Infallible;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

/// Push-pull output pin that records its logical level.
pub struct MockPin {
    high: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self { high: false }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

/// PWM channel with a configurable resolution that records its last duty.
pub struct MockPwm {
    duty: u16,
    max_duty: u16,
}

impl MockPwm {
    pub fn new(max_duty: u16) -> Self {
        Self { duty: 0, max_duty }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }
}

impl pwm::ErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}
