use crate::Rotation3d;
use bincode::{Decode, Encode};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};
use telem_units::Distance;

/// A point or offset in 3D space. Components are kept as [`Distance`]s, so their magnitudes are
/// always in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Translation3d {
    x: Distance,
    y: Distance,
    z: Distance,
}

impl Translation3d {
    /// Components in meters.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_distances(Distance::meters(x), Distance::meters(y), Distance::meters(z))
    }

    pub fn from_distances(x: Distance, y: Distance, z: Distance) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x.in_meters()
    }

    pub fn y(&self) -> f64 {
        self.y.in_meters()
    }

    pub fn z(&self) -> f64 {
        self.z.in_meters()
    }

    pub fn measure_x(&self) -> Distance {
        self.x
    }

    pub fn measure_y(&self) -> Distance {
        self.y
    }

    pub fn measure_z(&self) -> Distance {
        self.z
    }

    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Euclidean distance to `other`, in meters.
    pub fn distance(&self, other: &Translation3d) -> f64 {
        (*other - *self).norm()
    }

    pub fn rotate_by(&self, rotation: &Rotation3d) -> Self {
        (rotation.quaternion() * self.to_vector()).into()
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x(), self.y(), self.z())
    }
}

impl From<Vector3<f64>> for Translation3d {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Translation3d> for Vector3<f64> {
    fn from(t: Translation3d) -> Self {
        t.to_vector()
    }
}

impl Add for Translation3d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_distances(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Translation3d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_distances(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Translation3d {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_distances(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_meters() {
        let t = Translation3d::from_distances(
            Distance::inches(39.37007874015748),
            Distance::meters(2.0),
            Distance::meters(-3.0),
        );
        assert!((t.x() - 1.0).abs() < 1e-12);
        assert_eq!(t.y(), 2.0);
        assert_eq!(t.z(), -3.0);
    }

    #[test]
    fn norm_and_distance() {
        let a = Translation3d::new(3.0, 4.0, 0.0);
        assert!((a.norm() - 5.0).abs() < 1e-12);
        let b = Translation3d::new(3.0, 4.0, 12.0);
        assert!((a.distance(&b) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn rotate_about_z() {
        let t = Translation3d::new(1.0, 0.0, 0.0);
        let r = Rotation3d::new(0.0, 0.0, std::f64::consts::FRAC_PI_2);
        let rotated = t.rotate_by(&r);
        assert!(rotated.x().abs() < 1e-12);
        assert!((rotated.y() - 1.0).abs() < 1e-12);
        assert!(rotated.z().abs() < 1e-12);
    }

    #[test]
    fn vector_interop() {
        let v: Vector3<f64> = Translation3d::new(1.0, 2.0, 3.0).into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Translation3d::from(v), Translation3d::new(1.0, 2.0, 3.0));
    }
}
