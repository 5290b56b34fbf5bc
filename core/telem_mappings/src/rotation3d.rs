use crate::unit::AngleUnit;
use telem_geometry::Rotation3d;
use telem_traits::Mapping;
use telem_value::{expect_xyz, XYZ_LEN};

/// 3D rotation to a `[x, y, z]` double array of per-axis angles.
///
/// The unit is selected like [`crate::Rotation2dMapping`] and applied to all three elements.
/// On the way back every element is brought to radians first and the rotation is rebuilt from
/// those, so there is a single reconstruction path whatever the unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotation3dMapping;

impl Rotation3dMapping {
    /// Same as [`Mapping::to_field`] for an array read straight off the bus.
    ///
    /// # Panics
    /// If `wire` does not have exactly three elements.
    pub fn to_field_slice(&self, wire: &[f64], config: Option<&str>) -> Rotation3d {
        self.to_field(&expect_xyz(wire), config)
    }
}

impl Mapping for Rotation3dMapping {
    type Field = Rotation3d;
    type Wire = [f64; XYZ_LEN];

    fn to_wire(&self, field: &Rotation3d, config: Option<&str>) -> [f64; XYZ_LEN] {
        let unit = AngleUnit::from_config(config);
        [field.measure_x(), field.measure_y(), field.measure_z()].map(|a| unit.magnitude(a))
    }

    fn to_field(&self, wire: &[f64; XYZ_LEN], config: Option<&str>) -> Rotation3d {
        let unit = AngleUnit::from_config(config);
        let [x, y, z] = wire.map(|v| unit.angle(v).in_radians());
        Rotation3d::new(x, y, z)
    }
}
