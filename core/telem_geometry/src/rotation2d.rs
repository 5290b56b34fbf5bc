use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};
use telem_units::Angle;

/// A rotation in the plane.
///
/// The angle is kept as given: 270 degrees stays 270 degrees and is not folded into
/// (-180, 180].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Rotation2d {
    angle: Angle,
}

impl Rotation2d {
    pub fn new(angle: Angle) -> Self {
        Self { angle }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::new(Angle::degrees(degrees))
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::new(Angle::radians(radians))
    }

    pub fn from_rotations(rotations: f64) -> Self {
        Self::new(Angle::rotations(rotations))
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn degrees(&self) -> f64 {
        self.angle.in_degrees()
    }

    pub fn radians(&self) -> f64 {
        self.angle.in_radians()
    }

    pub fn rotations(&self) -> f64 {
        self.angle.in_rotations()
    }

    pub fn cos(&self) -> f64 {
        self.radians().cos()
    }

    pub fn sin(&self) -> f64 {
        self.radians().sin()
    }

    pub fn tan(&self) -> f64 {
        self.radians().tan()
    }

    /// Applies `other` after this rotation.
    pub fn rotate_by(&self, other: &Rotation2d) -> Self {
        Self::new(self.angle + other.angle)
    }
}

impl From<Angle> for Rotation2d {
    fn from(angle: Angle) -> Self {
        Self::new(angle)
    }
}

impl Add for Rotation2d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.rotate_by(&rhs)
    }
}

impl Sub for Rotation2d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.rotate_by(&-rhs)
    }
}

impl Neg for Rotation2d {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.angle)
    }
}
