//! Unit selection from the optional config string.
//!
//! Matching is exact and case-sensitive. Anything that is not a known literal, including no
//! config at all or an empty string, resolves to the default unit. This is a fallback, not
//! validation: no string is ever rejected.

use serde::{Deserialize, Serialize};
use telem_units::{Angle, Distance};

/// Config literals understood by the distance mapping.
pub mod distance_config {
    pub const INCHES: &str = "inches";
    pub const METERS: &str = "meters";
}

/// Config literals understood by the rotation mappings.
pub mod rotation_config {
    pub const DEGREES: &str = "degrees";
    pub const RADIANS: &str = "radians";
    pub const ROTATIONS: &str = "rotations";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Inches,
    Meters,
    /// The canonical base unit, sent as a bare magnitude.
    #[default]
    Base,
}

impl DistanceUnit {
    pub fn from_config(config: Option<&str>) -> Self {
        match config.unwrap_or_default() {
            distance_config::INCHES => DistanceUnit::Inches,
            distance_config::METERS => DistanceUnit::Meters,
            _ => DistanceUnit::Base,
        }
    }

    /// The config literal selecting this unit. The base unit has none.
    pub const fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Inches => distance_config::INCHES,
            DistanceUnit::Meters => distance_config::METERS,
            DistanceUnit::Base => "",
        }
    }

    pub fn magnitude(self, distance: Distance) -> f64 {
        match self {
            DistanceUnit::Inches => distance.in_inches(),
            DistanceUnit::Meters => distance.in_meters(),
            DistanceUnit::Base => distance.base_unit_magnitude(),
        }
    }

    pub fn distance(self, magnitude: f64) -> Distance {
        match self {
            DistanceUnit::Inches => Distance::inches(magnitude),
            DistanceUnit::Meters => Distance::meters(magnitude),
            DistanceUnit::Base => Distance::of_base_units(magnitude),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
    /// Full turns.
    Rotations,
}

impl AngleUnit {
    pub fn from_config(config: Option<&str>) -> Self {
        match config.unwrap_or_default() {
            rotation_config::RADIANS => AngleUnit::Radians,
            rotation_config::ROTATIONS => AngleUnit::Rotations,
            _ => AngleUnit::Degrees,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AngleUnit::Degrees => rotation_config::DEGREES,
            AngleUnit::Radians => rotation_config::RADIANS,
            AngleUnit::Rotations => rotation_config::ROTATIONS,
        }
    }

    pub fn magnitude(self, angle: Angle) -> f64 {
        match self {
            AngleUnit::Degrees => angle.in_degrees(),
            AngleUnit::Radians => angle.in_radians(),
            AngleUnit::Rotations => angle.in_rotations(),
        }
    }

    pub fn angle(self, magnitude: f64) -> Angle {
        match self {
            AngleUnit::Degrees => Angle::degrees(magnitude),
            AngleUnit::Radians => Angle::radians(magnitude),
            AngleUnit::Rotations => Angle::rotations(magnitude),
        }
    }
}
