//! Drive train configuration and derived geometry.

use serde::Deserialize;

use super::units::{Microsteps, RoundingMode};

/// Drive train configuration from TOML.
///
/// Describes the belt pulley and motor that the exported tables will drive.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveConfig {
    /// Number of teeth on the drive pulley (e.g. 20 or 36 for GT2).
    pub pulley_teeth: u16,

    /// Belt pitch in millimetres (2.0 for GT2).
    pub belt_pitch_mm: f64,

    /// Base steps per revolution (typically 200 for 1.8° motors).
    pub steps_per_revolution: u16,

    /// Microstep setting (1, 2, 4, 8, 16, 32, etc.).
    #[serde(default)]
    pub microsteps: Microsteps,

    /// Gear ratio (output:input, e.g., 5.0 means 5:1 reduction).
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: f64,
}

fn default_gear_ratio() -> f64 {
    1.0
}

impl DriveConfig {
    /// Calculate total steps per output shaft revolution.
    pub fn total_steps_per_revolution(&self) -> u32 {
        (self.steps_per_revolution as f64 * self.microsteps.value() as f64 * self.gear_ratio)
            as u32
    }

    /// Calculate the pulley circumference in metres.
    pub fn circumference_m(&self) -> f64 {
        self.pulley_teeth as f64 * self.belt_pitch_mm / 1000.0
    }
}

/// Derived drive geometry computed from [`DriveConfig`].
///
/// Computed once at startup and used for all unit conversions.
#[derive(Debug, Clone)]
pub struct DriveGeometry {
    /// Total steps per output revolution (steps × microsteps × gear_ratio).
    pub steps_per_revolution: u32,

    /// Steps per degree of output rotation.
    pub steps_per_degree: f64,

    /// Pulley circumference in metres (belt travel per revolution).
    pub circumference_m: f64,

    /// Steps per metre of belt travel.
    pub steps_per_metre: f64,
}

impl DriveGeometry {
    /// Compute drive geometry from configuration.
    pub fn from_config(config: &DriveConfig) -> Self {
        let steps_per_revolution = config.total_steps_per_revolution();
        let circumference_m = config.circumference_m();

        Self {
            steps_per_revolution,
            steps_per_degree: steps_per_revolution as f64 / 360.0,
            circumference_m,
            steps_per_metre: steps_per_revolution as f64 / circumference_m,
        }
    }

    /// Convert metres of belt travel to steps under the given rounding policy.
    #[inline]
    pub fn metres_to_steps(&self, metres: f64, mode: RoundingMode) -> i64 {
        mode.apply(metres * self.steps_per_metre)
    }

    /// Convert steps to metres of belt travel.
    #[inline]
    pub fn steps_to_metres(&self, steps: i64) -> f64 {
        steps as f64 / self.steps_per_metre
    }

    /// Convert degrees of output rotation to steps under the given rounding policy.
    #[inline]
    pub fn degrees_to_steps(&self, degrees: f64, mode: RoundingMode) -> i64 {
        mode.apply(degrees / 360.0 * self.steps_per_revolution as f64)
    }

    /// Convert steps to degrees of output rotation.
    #[inline]
    pub fn steps_to_degrees(&self, steps: i64) -> f64 {
        steps as f64 / self.steps_per_degree
    }
}
