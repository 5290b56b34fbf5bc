use telem_geometry::Translation3d;
use telem_traits::Mapping;
use telem_value::{expect_xyz, XYZ_LEN};

/// Translation to a `[x, y, z]` double array, always in meters. The config is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translation3dMapping;

impl Translation3dMapping {
    /// Same as [`Mapping::to_field`] for an array read straight off the bus.
    ///
    /// # Panics
    /// If `wire` does not have exactly three elements.
    pub fn to_field_slice(&self, wire: &[f64], config: Option<&str>) -> Translation3d {
        self.to_field(&expect_xyz(wire), config)
    }
}

impl Mapping for Translation3dMapping {
    type Field = Translation3d;
    type Wire = [f64; XYZ_LEN];

    fn to_wire(&self, field: &Translation3d, _config: Option<&str>) -> [f64; XYZ_LEN] {
        [field.x(), field.y(), field.z()]
    }

    fn to_field(&self, wire: &[f64; XYZ_LEN], _config: Option<&str>) -> Translation3d {
        let [x, y, z] = *wire;
        Translation3d::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xyz_order() {
        let t = Translation3d::new(1.0, 2.0, 3.0);
        assert_eq!(Translation3dMapping.to_wire(&t, None), [1.0, 2.0, 3.0]);
        assert_eq!(
            Translation3dMapping.to_wire(&t, Some("inches")),
            [1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn from_slice() {
        let t = Translation3dMapping.to_field_slice(&[4.0, -5.0, 6.5], None);
        assert_eq!(t, Translation3d::new(4.0, -5.0, 6.5));
    }

    #[test]
    #[should_panic]
    fn two_elements() {
        Translation3dMapping.to_field_slice(&[1.0, 2.0], None);
    }

    #[test]
    #[should_panic]
    fn four_elements() {
        Translation3dMapping.to_field_slice(&[1.0, 2.0, 3.0, 4.0], None);
    }
}
