// SPDX-License-Identifier: MIT

//! Potentiometer position feedback with safe-range classification.
//!
//! Wraps a raw analog sampler (typically an ADC channel wired to the wiper of
//! a feedback potentiometer) and classifies each sample against an
//! operator-declared safe window. Readings near the electrical ends of the
//! track usually mean a broken wire or a mechanically over-travelled
//! actuator, so the window defaults to a band well inside the ADC range.

/// Three-way safety judgment on a raw sensor sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyClassification {
    /// Sample below the safe window.
    TooLow,
    /// Sample inside the safe window (boundaries included).
    Safe,
    /// Sample above the safe window.
    TooHigh,
}

/// Default safe window, in raw ADC counts.
///
/// Chosen for a 10-bit sampler (0..1023): anything under 20 or over 1000 is
/// treated as a wiring fault or mechanical over-travel.
pub const DEFAULT_MIN_SAFE: u16 = 20;
pub const DEFAULT_MAX_SAFE: u16 = 1000;

/// Potentiometer feedback channel.
///
/// `ReadRaw` is a closure that returns one fresh raw ADC sample. Every public
/// method re-samples; nothing is cached, so two back-to-back calls may
/// legitimately disagree if the signal moved between them.
pub struct Potentiometer<ReadRaw> {
    read_raw: ReadRaw,
    min_safe: u16,
    max_safe: u16,
}

impl<ReadRaw> Potentiometer<ReadRaw>
where
    ReadRaw: FnMut() -> u16,
{
    /// Construct a feedback channel with an explicit safe window.
    ///
    /// `min_safe` and `max_safe` are inclusive bounds in raw counts.
    pub fn new(read_raw: ReadRaw, min_safe: u16, max_safe: u16) -> Self {
        debug_assert!(min_safe <= max_safe);
        Self {
            read_raw,
            min_safe,
            max_safe,
        }
    }

    /// Construct with the default safe window
    /// ([`DEFAULT_MIN_SAFE`]..=[`DEFAULT_MAX_SAFE`]).
    pub fn with_default_range(read_raw: ReadRaw) -> Self {
        Self::new(read_raw, DEFAULT_MIN_SAFE, DEFAULT_MAX_SAFE)
    }

    /// Take one fresh raw sample.
    #[inline]
    pub fn read(&mut self) -> u16 {
        (self.read_raw)()
    }

    /// Sample and check the safe window (inclusive on both ends).
    pub fn is_safe(&mut self) -> bool {
        self.classify() == SafetyClassification::Safe
    }

    /// Sample and classify against the safe window.
    pub fn classify(&mut self) -> SafetyClassification {
        let raw = self.read();
        if raw < self.min_safe {
            SafetyClassification::TooLow
        } else if raw > self.max_safe {
            SafetyClassification::TooHigh
        } else {
            SafetyClassification::Safe
        }
    }

    /// The configured safe window as `(min_safe, max_safe)`.
    #[inline]
    pub fn safe_range(&self) -> (u16, u16) {
        (self.min_safe, self.max_safe)
    }

    /// Release the underlying sampler.
    pub fn free(self) -> ReadRaw {
        self.read_raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    fn fixed(raw: u16) -> Potentiometer<impl FnMut() -> u16> {
        Potentiometer::new(move || raw, 20, 1000)
    }

    #[test]
    fn in_range_is_safe() {
        assert_eq!(fixed(512).classify(), SafetyClassification::Safe);
        assert!(fixed(512).is_safe());
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(fixed(20).classify(), SafetyClassification::Safe);
        assert_eq!(fixed(1000).classify(), SafetyClassification::Safe);
    }

    #[test]
    fn below_range_is_too_low() {
        assert_eq!(fixed(19).classify(), SafetyClassification::TooLow);
        assert_eq!(fixed(0).classify(), SafetyClassification::TooLow);
        assert!(!fixed(19).is_safe());
    }

    #[test]
    fn above_range_is_too_high() {
        assert_eq!(fixed(1001).classify(), SafetyClassification::TooHigh);
        assert_eq!(fixed(u16::MAX).classify(), SafetyClassification::TooHigh);
    }

    #[test]
    fn every_call_resamples() {
        let raw = Cell::new(512u16);
        let mut pot = Potentiometer::new(|| raw.replace(5), 20, 1000);

        // First call sees the live value, second sees the changed one.
        assert_eq!(pot.classify(), SafetyClassification::Safe);
        assert_eq!(pot.classify(), SafetyClassification::TooLow);
    }

    #[test]
    fn default_range_matches_constants() {
        let pot = Potentiometer::with_default_range(|| 0);
        assert_eq!(pot.safe_range(), (DEFAULT_MIN_SAFE, DEFAULT_MAX_SAFE));
    }
}
