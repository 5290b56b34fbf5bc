//! Geometry field types: planar rotation, 3D translation and 3D rotation.
//!
//! These are the strongly typed values application code keeps in its state. They are converted
//! to and from bus primitives by the mappings in `telem-mappings`; nothing here knows about the
//! wire.

mod rotation2d;
mod rotation3d;
mod translation3d;

pub use rotation2d::Rotation2d;
pub use rotation3d::Rotation3d;
pub use translation3d::Translation3d;

pub use telem_units::{Angle, Distance};
