//! Mappings between the field types an application works with and the primitives the telemetry
//! bus carries.
//!
//! | Field type      | Wire       | Config literals            | Default          |
//! |-----------------|------------|----------------------------|------------------|
//! | `Distance`      | `double`   | `inches`, `meters`         | base unit        |
//! | `Rotation2d`    | `double`   | `rotations`, `radians`     | degrees          |
//! | `Rotation3d`    | `double[]` | `rotations`, `radians`     | degrees          |
//! | `Translation3d` | `double[]` | none                       | meters, always   |
//!
//! Array wire values are always `[x, y, z]`.

mod distance;
pub mod entry;
pub mod registry;
mod rotation2d;
mod rotation3d;
mod translation3d;
pub mod unit;

pub use distance::DistanceMapping;
pub use entry::{ConfigValue, EntryConfig};
pub use registry::{registry, MappingRegistry, BUILTIN_MAPPINGS};
pub use rotation2d::Rotation2dMapping;
pub use rotation3d::Rotation3dMapping;
pub use translation3d::Translation3dMapping;
pub use unit::{distance_config, rotation_config, AngleUnit, DistanceUnit};

pub use telem_traits::{DynMapping, Mapping, TelemError, TelemResult};
pub use telem_value::{WireType, WireValue};

pub static DISTANCE_MAPPING: DistanceMapping = DistanceMapping;
pub static ROTATION_2D_MAPPING: Rotation2dMapping = Rotation2dMapping;
pub static TRANSLATION_3D_MAPPING: Translation3dMapping = Translation3dMapping;
pub static ROTATION_3D_MAPPING: Rotation3dMapping = Rotation3dMapping;
