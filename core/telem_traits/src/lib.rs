//! The contract every field-to-bus converter implements.

use std::any::{type_name, Any, TypeId};
use telem_value::{WirePrimitive, WireType, WireValue, WireValueError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelemError {
    #[error(transparent)]
    Wire(#[from] WireValueError),

    #[error("Expected a field value of type {expected}")]
    FieldTypeMismatch { expected: &'static str },

    #[error("No mapping registered for field type '{0}'")]
    MappingNotFound(String),

    #[error("Field type '{0}' already has a mapping")]
    DuplicateMapping(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type TelemResult<T> = Result<T, TelemError>;

/// Bidirectional converter between one field type and one bus primitive.
///
/// `config` optionally selects the unit used on the wire. `None` behaves exactly like
/// `Some("")`, and a string the mapping does not recognize selects its default unit instead of
/// failing. Both directions are pure functions.
pub trait Mapping: Send + Sync {
    type Field;
    type Wire: WirePrimitive;

    /// How the transport should encode [`Self::Wire`].
    const WIRE_TYPE: WireType = <Self::Wire as WirePrimitive>::WIRE_TYPE;

    fn to_wire(&self, field: &Self::Field, config: Option<&str>) -> Self::Wire;

    fn to_field(&self, wire: &Self::Wire, config: Option<&str>) -> Self::Field;
}

/// Type-erased [`Mapping`], so mappings for different field types can live in one table.
///
/// Implemented for every [`Mapping`] whose field type is `'static`.
pub trait DynMapping: Send + Sync {
    fn field_type_id(&self) -> TypeId;

    fn field_type_name(&self) -> &'static str;

    fn wire_type(&self) -> WireType;

    fn to_wire_value(&self, field: &dyn Any, config: Option<&str>) -> TelemResult<WireValue>;

    /// Panics if an array value has the wrong length, like [`Mapping::to_field`] would on a
    /// malformed bus array.
    fn to_field_value(
        &self,
        wire: WireValue,
        config: Option<&str>,
    ) -> TelemResult<Box<dyn Any + Send>>;
}

impl<M> DynMapping for M
where
    M: Mapping,
    M::Field: Any + Send,
{
    fn field_type_id(&self) -> TypeId {
        TypeId::of::<M::Field>()
    }

    fn field_type_name(&self) -> &'static str {
        type_name::<M::Field>()
    }

    fn wire_type(&self) -> WireType {
        M::WIRE_TYPE
    }

    fn to_wire_value(&self, field: &dyn Any, config: Option<&str>) -> TelemResult<WireValue> {
        let field = field
            .downcast_ref::<M::Field>()
            .ok_or(TelemError::FieldTypeMismatch {
                expected: type_name::<M::Field>(),
            })?;
        Ok(self.to_wire(field, config).into_wire_value())
    }

    fn to_field_value(
        &self,
        wire: WireValue,
        config: Option<&str>,
    ) -> TelemResult<Box<dyn Any + Send>> {
        let wire = M::Wire::from_wire_value(wire)?;
        Ok(Box::new(self.to_field(&wire, config)))
    }
}
