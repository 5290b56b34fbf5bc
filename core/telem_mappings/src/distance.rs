use crate::unit::DistanceUnit;
use telem_traits::Mapping;
use telem_units::Distance;

/// Distance to a scalar double.
///
/// Config `"inches"` or `"meters"` selects the wire unit. Any other config sends the base unit
/// magnitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceMapping;

impl Mapping for DistanceMapping {
    type Field = Distance;
    type Wire = f64;

    fn to_wire(&self, field: &Distance, config: Option<&str>) -> f64 {
        DistanceUnit::from_config(config).magnitude(*field)
    }

    fn to_field(&self, wire: &f64, config: Option<&str>) -> Distance {
        DistanceUnit::from_config(config).distance(*wire)
    }
}
