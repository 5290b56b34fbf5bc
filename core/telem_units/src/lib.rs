//! Field-side scalar quantities.
//!
//! Each quantity is a transparent wrapper around the matching `uom` f64 SI quantity and always
//! stores its magnitude in the canonical base unit (meter for [`Distance`], radian for [`Angle`]).
//! Unit selection only happens at the edges, through the named constructors and accessors or the
//! generic `new::<U>` / `get::<U>` pair.

pub use uom;

/// The units the mappings know how to put on the wire.
pub mod units {
    pub use uom::si::angle::{degree, radian, revolution};
    pub use uom::si::length::{inch, meter};
}

macro_rules! define_quantity {
    ($unit_mod:ident, $uom_quantity:ident, $quantity:ident) => {
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
        pub struct $quantity(uom::si::f64::$uom_quantity);

        impl $quantity {
            #[inline]
            pub fn new<U>(value: f64) -> Self
            where
                U: uom::si::$unit_mod::Conversion<f64>,
            {
                Self(uom::si::f64::$uom_quantity::new::<U>(value))
            }

            #[inline]
            pub fn get<U>(&self) -> f64
            where
                U: uom::si::$unit_mod::Conversion<f64>,
            {
                self.0.get::<U>()
            }

            /// Builds the quantity directly from a magnitude in the canonical base unit.
            #[inline]
            pub fn of_base_units(value: f64) -> Self {
                Self(Self::from_base_value(value))
            }

            /// Magnitude in the canonical base unit, with no unit attached.
            #[inline]
            pub fn base_unit_magnitude(&self) -> f64 {
                self.0.value
            }

            #[inline]
            fn from_base_value(value: f64) -> uom::si::f64::$uom_quantity {
                uom::si::f64::$uom_quantity {
                    dimension: core::marker::PhantomData,
                    units: core::marker::PhantomData,
                    value,
                }
            }
        }

        impl Default for $quantity {
            fn default() -> Self {
                Self::of_base_units(0.0)
            }
        }

        impl From<uom::si::f64::$uom_quantity> for $quantity {
            fn from(value: uom::si::f64::$uom_quantity) -> Self {
                Self(value)
            }
        }

        impl From<$quantity> for uom::si::f64::$uom_quantity {
            fn from(value: $quantity) -> Self {
                value.0
            }
        }

        impl core::ops::Add for $quantity {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self::of_base_units(self.base_unit_magnitude() + rhs.base_unit_magnitude())
            }
        }

        impl core::ops::AddAssign for $quantity {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::Sub for $quantity {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self::of_base_units(self.base_unit_magnitude() - rhs.base_unit_magnitude())
            }
        }

        impl core::ops::SubAssign for $quantity {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::Mul<f64> for $quantity {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self::Output {
                Self::of_base_units(self.base_unit_magnitude() * rhs)
            }
        }

        impl core::ops::Div<f64> for $quantity {
            type Output = Self;

            fn div(self, rhs: f64) -> Self::Output {
                Self::of_base_units(self.base_unit_magnitude() / rhs)
            }
        }

        impl core::ops::Neg for $quantity {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self::of_base_units(-self.base_unit_magnitude())
            }
        }

        impl serde::Serialize for $quantity {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.base_unit_magnitude().serialize(serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $quantity {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = f64::deserialize(deserializer)?;
                Ok(Self::of_base_units(value))
            }
        }

        impl bincode::Encode for $quantity {
            fn encode<E: bincode::enc::Encoder>(
                &self,
                encoder: &mut E,
            ) -> Result<(), bincode::error::EncodeError> {
                bincode::Encode::encode(&self.base_unit_magnitude(), encoder)
            }
        }

        impl<Context> bincode::Decode<Context> for $quantity {
            fn decode<D: bincode::de::Decoder<Context = Context>>(
                decoder: &mut D,
            ) -> Result<Self, bincode::error::DecodeError> {
                let value: f64 = bincode::Decode::decode(decoder)?;
                Ok(Self::of_base_units(value))
            }
        }

        impl<'de, Context> bincode::BorrowDecode<'de, Context> for $quantity {
            fn borrow_decode<D: bincode::de::BorrowDecoder<'de, Context = Context>>(
                decoder: &mut D,
            ) -> Result<Self, bincode::error::DecodeError> {
                <Self as bincode::Decode<Context>>::decode(decoder)
            }
        }
    };
}

define_quantity!(length, Length, Distance);
define_quantity!(angle, Angle, Angle);

impl Distance {
    pub fn meters(value: f64) -> Self {
        Self::new::<units::meter>(value)
    }

    pub fn inches(value: f64) -> Self {
        Self::new::<units::inch>(value)
    }

    pub fn in_meters(&self) -> f64 {
        self.get::<units::meter>()
    }

    pub fn in_inches(&self) -> f64 {
        self.get::<units::inch>()
    }
}

impl Angle {
    pub fn degrees(value: f64) -> Self {
        Self::new::<units::degree>(value)
    }

    pub fn radians(value: f64) -> Self {
        Self::new::<units::radian>(value)
    }

    /// Full turns; 1.0 is 360 degrees.
    pub fn rotations(value: f64) -> Self {
        Self::new::<units::revolution>(value)
    }

    pub fn in_degrees(&self) -> f64 {
        self.get::<units::degree>()
    }

    pub fn in_radians(&self) -> f64 {
        self.get::<units::radian>()
    }

    pub fn in_rotations(&self) -> f64 {
        self.get::<units::revolution>()
    }
}
