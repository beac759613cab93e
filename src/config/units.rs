//! Unit and policy types for channel configuration.
//!
//! Provides the microstep divisor, the physical unit of a capture channel,
//! and the float-to-step rounding policy.

use serde::Deserialize;

use crate::error::ConfigError;

/// Physical unit of a capture channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelUnit {
    /// Linear travel in metres, driven through a belt pulley.
    Metres,
    /// Rotation in degrees, driven directly by the motor shaft.
    Degrees,
}

/// Policy for mapping a fractional step count to an integer.
///
/// Existing firmware tables were generated with linear channels rounded to
/// the nearest step and rotational channels truncated toward zero. Both
/// policies are kept as explicit variants rather than silently unified;
/// each channel picks one (or inherits the default for its unit, see
/// [`ChannelConfig::effective_rounding`](super::ChannelConfig::effective_rounding)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to the nearest step, ties to even.
    Nearest,
    /// Truncate toward zero.
    Truncate,
}

impl RoundingMode {
    /// Apply the policy to a fractional step count.
    #[inline]
    pub fn apply(self, steps: f64) -> i64 {
        match self {
            RoundingMode::Nearest => steps.round_ties_even() as i64,
            RoundingMode::Truncate => steps.trunc() as i64,
        }
    }
}

/// Microstep divisor (1, 2, 4, 8, 16, 32, 64, 128, 256).
///
/// Validated at construction to be a power of 2 within the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Microsteps(u16);

impl Microsteps {
    /// Full step (no microstepping).
    pub const FULL: Self = Self(1);
    /// Half step.
    pub const HALF: Self = Self(2);
    /// Quarter step.
    pub const QUARTER: Self = Self(4);
    /// Eighth step.
    pub const EIGHTH: Self = Self(8);
    /// Sixteenth step.
    pub const SIXTEENTH: Self = Self(16);
    /// Thirty-second step.
    pub const THIRTY_SECOND: Self = Self(32);
    /// Sixty-fourth step.
    pub const SIXTY_FOURTH: Self = Self(64);
    /// 128th step.
    pub const ONE_TWENTY_EIGHTH: Self = Self(128);
    /// 256th step (maximum resolution).
    pub const TWO_FIFTY_SIXTH: Self = Self(256);

    /// Valid microstep values.
    const VALID_VALUES: [u16; 9] = [1, 2, 4, 8, 16, 32, 64, 128, 256];

    /// Create a new Microsteps value with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMicrosteps` if the value is not a valid power of 2.
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        if Self::VALID_VALUES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidMicrosteps(value))
        }
    }

    /// Get the raw divisor value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check if a value is valid.
    #[inline]
    pub fn is_valid(value: u16) -> bool {
        Self::VALID_VALUES.contains(&value)
    }
}

impl Default for Microsteps {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<u16> for Microsteps {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Microsteps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u16::deserialize(deserializer)?;
        Microsteps::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microsteps_valid_values() {
        for &v in &Microsteps::VALID_VALUES {
            assert!(Microsteps::new(v).is_ok());
        }
    }

    #[test]
    fn test_microsteps_invalid_values() {
        assert!(Microsteps::new(0).is_err());
        assert!(Microsteps::new(3).is_err());
        assert!(Microsteps::new(17).is_err());
        assert!(Microsteps::new(512).is_err());
    }

    #[test]
    fn test_nearest_rounds_ties_to_even() {
        // Ties land on the even neighbour, so 0.5 stays at 0
        assert_eq!(RoundingMode::Nearest.apply(0.5), 0);
        assert_eq!(RoundingMode::Nearest.apply(1.5), 2);
        assert_eq!(RoundingMode::Nearest.apply(2.5), 2);
        assert_eq!(RoundingMode::Nearest.apply(-0.5), 0);
        assert_eq!(RoundingMode::Nearest.apply(0.6), 1);
        assert_eq!(RoundingMode::Nearest.apply(-0.6), -1);
    }

    #[test]
    fn test_truncate_is_toward_zero() {
        assert_eq!(RoundingMode::Truncate.apply(0.9), 0);
        assert_eq!(RoundingMode::Truncate.apply(-0.9), 0);
        assert_eq!(RoundingMode::Truncate.apply(10.999), 10);
        assert_eq!(RoundingMode::Truncate.apply(-10.999), -10);
    }
}
