use bincode::{Decode, Encode};
use nalgebra::{Quaternion, UnitQuaternion};
use serde::{Deserialize, Serialize};
use std::ops::{Mul, Neg};
use telem_units::Angle;

/// A rotation in 3D space, stored as a unit quaternion.
///
/// The per-axis view is roll (x), pitch (y) and yaw (z), applied extrinsically in that order.
/// Extraction is only unique for pitch strictly inside (-90, 90) degrees. At exactly +/-90 degrees
/// (gimbal lock) roll and yaw act about the same axis; the combined angle is reported as roll and
/// yaw reads 0. Systems that fold it into yaw instead will see a different triple for the same
/// orientation.
#[derive(Debug, Clone, Copy)]
pub struct Rotation3d {
    q: UnitQuaternion<f64>,
}

impl Rotation3d {
    /// Builds the rotation from roll, pitch and yaw, in radians.
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            q: UnitQuaternion::from_euler_angles(roll, pitch, yaw),
        }
    }

    pub fn from_angles(roll: Angle, pitch: Angle, yaw: Angle) -> Self {
        Self::new(roll.in_radians(), pitch.in_radians(), yaw.in_radians())
    }

    pub fn identity() -> Self {
        Self {
            q: UnitQuaternion::identity(),
        }
    }

    /// Roll, in radians.
    pub fn x(&self) -> f64 {
        self.q.euler_angles().0
    }

    /// Pitch, in radians.
    pub fn y(&self) -> f64 {
        self.q.euler_angles().1
    }

    /// Yaw, in radians.
    pub fn z(&self) -> f64 {
        self.q.euler_angles().2
    }

    pub fn measure_x(&self) -> Angle {
        Angle::radians(self.x())
    }

    pub fn measure_y(&self) -> Angle {
        Angle::radians(self.y())
    }

    pub fn measure_z(&self) -> Angle {
        Angle::radians(self.z())
    }

    pub fn quaternion(&self) -> UnitQuaternion<f64> {
        self.q
    }

    /// Applies `other` after this rotation.
    pub fn rotate_by(&self, other: &Rotation3d) -> Self {
        Self { q: other.q * self.q }
    }

    pub fn inverse(&self) -> Self {
        Self {
            q: self.q.inverse(),
        }
    }

    /// Smallest angle, in radians, between the two orientations.
    pub fn angle_to(&self, other: &Rotation3d) -> f64 {
        self.q.angle_to(&other.q)
    }

    fn to_wxyz(self) -> [f64; 4] {
        let q = self.q.quaternion();
        [q.w, q.i, q.j, q.k]
    }

    /// `None` when the quaternion has a zero or non-finite norm and so names no orientation.
    fn from_wxyz([w, i, j, k]: [f64; 4]) -> Option<Self> {
        let q = Quaternion::new(w, i, j, k);
        let norm = q.norm();
        if !norm.is_finite() || norm == 0.0 {
            return None;
        }
        Some(Self {
            q: UnitQuaternion::from_quaternion(q),
        })
    }
}

impl Default for Rotation3d {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<UnitQuaternion<f64>> for Rotation3d {
    fn from(q: UnitQuaternion<f64>) -> Self {
        Self { q }
    }
}

impl From<Rotation3d> for UnitQuaternion<f64> {
    fn from(r: Rotation3d) -> Self {
        r.q
    }
}

// q and -q are the same orientation.
impl PartialEq for Rotation3d {
    fn eq(&self, other: &Self) -> bool {
        (self.q.coords.dot(&other.q.coords).abs() - 1.0).abs() < 1e-9
    }
}

impl Mul for Rotation3d {
    type Output = Self;

    /// `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: Self) -> Self::Output {
        rhs.rotate_by(&self)
    }
}

impl Neg for Rotation3d {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.inverse()
    }
}

const DEGENERATE_QUATERNION: &str = "rotation quaternion must have a finite, nonzero norm";

// Manual implementations for serialization
impl Serialize for Rotation3d {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_wxyz().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rotation3d {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wxyz: [f64; 4] = Deserialize::deserialize(deserializer)?;
        Self::from_wxyz(wxyz).ok_or_else(|| serde::de::Error::custom(DEGENERATE_QUATERNION))
    }
}

impl Encode for Rotation3d {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        self.to_wxyz().encode(encoder)
    }
}

impl<Context> Decode<Context> for Rotation3d {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let wxyz: [f64; 4] = Decode::decode(decoder)?;
        Self::from_wxyz(wxyz).ok_or(bincode::error::DecodeError::Other(DEGENERATE_QUATERNION))
    }
}
