use crate::unit::AngleUnit;
use telem_geometry::Rotation2d;
use telem_traits::Mapping;

/// Planar rotation to a scalar double.
///
/// Config `"rotations"` or `"radians"` selects the wire unit; everything else sends degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotation2dMapping;

impl Mapping for Rotation2dMapping {
    type Field = Rotation2d;
    type Wire = f64;

    fn to_wire(&self, field: &Rotation2d, config: Option<&str>) -> f64 {
        AngleUnit::from_config(config).magnitude(field.angle())
    }

    fn to_field(&self, wire: &f64, config: Option<&str>) -> Rotation2d {
        Rotation2d::new(AngleUnit::from_config(config).angle(*wire))
    }
}
