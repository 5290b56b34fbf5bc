//! Bus-side primitives.
//!
//! The telemetry bus only carries unit-less primitives. [`WireType`] is the tag the transport
//! uses to pick an encoding, [`WireValue`] is a value of one of those types, and
//! [`WirePrimitive`] ties a plain Rust type to its tag.

use bincode::{Decode, Encode};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Number of elements every array-typed wire value carries, ordered (x, y, z).
pub const XYZ_LEN: usize = 3;

/// How a value is encoded on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum WireType {
    Double,
    DoubleArray,
}

impl WireType {
    /// Type string used by the transport.
    pub const fn type_string(self) -> &'static str {
        match self {
            WireType::Double => "double",
            WireType::DoubleArray => "double[]",
        }
    }
}

impl Display for WireType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_string())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Encode, Decode)]
pub enum WireValue {
    Double(f64),
    DoubleArray(Vec<f64>),
}

impl WireValue {
    pub fn wire_type(&self) -> WireType {
        match self {
            WireValue::Double(_) => WireType::Double,
            WireValue::DoubleArray(_) => WireType::DoubleArray,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            WireValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double_array(&self) -> Option<&[f64]> {
        match self {
            WireValue::DoubleArray(v) => Some(v),
            _ => None,
        }
    }
}

impl Display for WireValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WireValue::Double(v) => write!(f, "{v}"),
            WireValue::DoubleArray(v) => {
                write!(f, "[")?;
                for (i, v) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Hash for WireValue {
    fn hash<H>(&self, hasher: &mut H)
    where
        H: Hasher,
    {
        self.wire_type().hash(hasher);
        match self {
            WireValue::Double(v) => OrderedFloat(*v).hash(hasher),
            WireValue::DoubleArray(v) => {
                v.len().hash(hasher);
                for x in v {
                    OrderedFloat(*x).hash(hasher);
                }
            }
        }
    }
}

impl PartialEq for WireValue {
    fn eq(&self, rhs: &Self) -> bool {
        match (self, rhs) {
            (WireValue::Double(v0), WireValue::Double(v1)) => OrderedFloat(*v0) == OrderedFloat(*v1),
            (WireValue::DoubleArray(v0), WireValue::DoubleArray(v1)) => {
                v0.len() == v1.len()
                    && v0
                        .iter()
                        .zip(v1)
                        .all(|(a, b)| OrderedFloat(*a) == OrderedFloat(*b))
            }
            _ => false,
        }
    }
}

impl Eq for WireValue {}

impl From<f64> for WireValue {
    fn from(value: f64) -> Self {
        WireValue::Double(value)
    }
}

impl From<[f64; XYZ_LEN]> for WireValue {
    fn from(value: [f64; XYZ_LEN]) -> Self {
        WireValue::DoubleArray(value.to_vec())
    }
}

impl From<Vec<f64>> for WireValue {
    fn from(value: Vec<f64>) -> Self {
        WireValue::DoubleArray(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WireValueError {
    #[error("Expected a {expected} wire value but got {found}")]
    TypeMismatch { expected: WireType, found: WireType },
}

/// A Rust primitive that has a fixed representation on the bus.
pub trait WirePrimitive: Sized {
    const WIRE_TYPE: WireType;

    fn into_wire_value(self) -> WireValue;

    /// Fails on a variant mismatch. Panics if an array value does not have the exact length
    /// the primitive requires.
    fn from_wire_value(value: WireValue) -> Result<Self, WireValueError>;
}

impl WirePrimitive for f64 {
    const WIRE_TYPE: WireType = WireType::Double;

    fn into_wire_value(self) -> WireValue {
        WireValue::Double(self)
    }

    fn from_wire_value(value: WireValue) -> Result<Self, WireValueError> {
        match value {
            WireValue::Double(v) => Ok(v),
            other => Err(WireValueError::TypeMismatch {
                expected: Self::WIRE_TYPE,
                found: other.wire_type(),
            }),
        }
    }
}

impl WirePrimitive for [f64; XYZ_LEN] {
    const WIRE_TYPE: WireType = WireType::DoubleArray;

    fn into_wire_value(self) -> WireValue {
        self.into()
    }

    fn from_wire_value(value: WireValue) -> Result<Self, WireValueError> {
        match value {
            WireValue::DoubleArray(v) => Ok(expect_xyz(&v)),
            other => Err(WireValueError::TypeMismatch {
                expected: Self::WIRE_TYPE,
                found: other.wire_type(),
            }),
        }
    }
}

/// Reads an (x, y, z) triple out of a bus array.
///
/// # Panics
/// If `values` does not hold exactly three elements. The slice is never truncated or padded.
pub fn expect_xyz(values: &[f64]) -> [f64; XYZ_LEN] {
    match values {
        [x, y, z] => [*x, *y, *z],
        _ => panic!(
            "double array wire value must have exactly {XYZ_LEN} elements (x, y, z), got {}",
            values.len()
        ),
    }
}
