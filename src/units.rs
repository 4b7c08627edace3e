//! Angle units and geographic conversion constants.

use std::f64::consts::PI;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One nautical mile in meters.
pub const NM_TO_METERS: f64 = 1852.0;

/// Equatorial earth radius in meters, used by the spherical shift formula.
pub const EARTH_RADIUS_METERS: f64 = 6_378_100.0;

/// A full turn in radians.
pub const TWO_PI: f64 = 2.0 * PI;

/// Unit of the angular inputs accepted by the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Convert `value` from this unit into radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_radians(),
        }
    }
}

impl Default for AngleUnit {
    fn default() -> Self {
        AngleUnit::Radians
    }
}

impl FromStr for AngleUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "radians" | "rad" => Ok(AngleUnit::Radians),
            "degrees" | "deg" => Ok(AngleUnit::Degrees),
            _ => Err(format!("Unknown angle unit: {}", s)),
        }
    }
}

/// Wrap an angle into [0, 2*pi).
pub fn wrap_two_pi(angle: f64) -> f64 {
    angle.rem_euclid(TWO_PI)
}

/// Wrap an angle into [-pi, pi).
pub fn wrap_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TWO_PI) - PI
}
