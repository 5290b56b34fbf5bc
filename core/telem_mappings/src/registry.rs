//! Field type to mapping lookup.
//!
//! The table is explicit: it is built from a fixed list of mapping singletons and never changes
//! after construction.

use crate::entry::EntryConfig;
use crate::{DISTANCE_MAPPING, ROTATION_2D_MAPPING, ROTATION_3D_MAPPING, TRANSLATION_3D_MAPPING};
use log::debug;
use once_cell::sync::Lazy;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use telem_traits::{DynMapping, TelemError, TelemResult};
use telem_value::WireValue;

/// Every mapping this crate ships.
pub static BUILTIN_MAPPINGS: [&dyn DynMapping; 4] = [
    &DISTANCE_MAPPING,
    &ROTATION_2D_MAPPING,
    &TRANSLATION_3D_MAPPING,
    &ROTATION_3D_MAPPING,
];

static REGISTRY: Lazy<MappingRegistry> = Lazy::new(|| {
    let registry = MappingRegistry::builtin();
    debug!("Mapping registry ready with {} mappings", registry.len());
    registry
});

/// The process-wide registry of the builtin mappings. Built on first use.
pub fn registry() -> &'static MappingRegistry {
    &REGISTRY
}

pub struct MappingRegistry {
    mappings: HashMap<TypeId, &'static dyn DynMapping>,
}

impl MappingRegistry {
    pub fn builtin() -> Self {
        let mappings = BUILTIN_MAPPINGS
            .iter()
            .map(|mapping| (mapping.field_type_id(), *mapping))
            .collect();
        Self { mappings }
    }

    /// Builds a registry from an arbitrary set of mappings. Two mappings for the same field type
    /// are rejected.
    pub fn with_mappings<I>(mappings: I) -> TelemResult<Self>
    where
        I: IntoIterator<Item = &'static dyn DynMapping>,
    {
        let mut table = HashMap::new();
        for mapping in mappings {
            let name = mapping.field_type_name();
            if table.insert(mapping.field_type_id(), mapping).is_some() {
                return Err(TelemError::DuplicateMapping(name));
            }
            debug!("Registered {} mapping for {}", mapping.wire_type(), name);
        }
        Ok(Self { mappings: table })
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static dyn DynMapping> + '_ {
        self.mappings.values().copied()
    }

    pub fn get<F: Any>(&self) -> Option<&'static dyn DynMapping> {
        self.get_by_type_id(TypeId::of::<F>())
    }

    pub fn get_by_type_id(&self, id: TypeId) -> Option<&'static dyn DynMapping> {
        self.mappings.get(&id).copied()
    }

    /// Looks a mapping up by field type name, either fully qualified
    /// (`telem_units::Distance`) or bare (`Distance`).
    pub fn get_by_name(&self, name: &str) -> Option<&'static dyn DynMapping> {
        self.iter().find(|mapping| {
            let full = mapping.field_type_name();
            full == name || full.rsplit("::").next() == Some(name)
        })
    }

    fn require<F: Any>(&self) -> TelemResult<&'static dyn DynMapping> {
        self.get::<F>()
            .ok_or_else(|| TelemError::MappingNotFound(type_name::<F>().to_string()))
    }

    pub fn to_wire<F: Any>(&self, field: &F, config: Option<&str>) -> TelemResult<WireValue> {
        self.require::<F>()?.to_wire_value(field, config)
    }

    pub fn to_field<F: Any>(&self, wire: WireValue, config: Option<&str>) -> TelemResult<F> {
        self.require::<F>()?
            .to_field_value(wire, config)?
            .downcast::<F>()
            .map(|field| *field)
            .map_err(|_| TelemError::FieldTypeMismatch {
                expected: type_name::<F>(),
            })
    }

    /// [`Self::to_wire`] with the unit taken from an entry config.
    pub fn to_wire_for_entry<F: Any>(
        &self,
        field: &F,
        entry: &EntryConfig,
    ) -> TelemResult<WireValue> {
        let unit = entry.unit()?;
        self.to_wire(field, unit.as_deref())
    }

    /// [`Self::to_field`] with the unit taken from an entry config.
    pub fn to_field_for_entry<F: Any>(
        &self,
        wire: WireValue,
        entry: &EntryConfig,
    ) -> TelemResult<F> {
        let unit = entry.unit()?;
        self.to_field(wire, unit.as_deref())
    }
}
