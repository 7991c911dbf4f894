use catalog_types::ValueObject;
use std::any::TypeId;
use std::fmt;

/// A mutable domain object with a stable identity.
///
/// Two entities are interchangeable for lookups iff their ids are equal as
/// value objects; every other field may change across updates.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The identity value object.
    type Id: ValueObject + Clone + fmt::Display + Send + Sync;

    /// Human-readable type name used in errors and logs.
    const NAME: &'static str;

    /// Returns the identity of this entity.
    fn entity_id(&self) -> &Self::Id;

    /// Projects the entity to a plain JSON record.
    fn to_json(&self) -> serde_json::Value;

    /// Returns the static descriptor for this entity type.
    fn entity_type() -> EntityType
    where
        Self: Sized,
    {
        EntityType::of::<Self>()
    }
}

/// Static descriptor of a concrete entity type.
///
/// Stands in for runtime type inspection: repositories hand it out so
/// generic code can build errors and messages naming the bound entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityType {
    name: &'static str,
    type_id: TypeId,
}

impl EntityType {
    /// Returns the descriptor of `E`.
    #[must_use]
    pub fn of<E: Entity>() -> Self {
        Self {
            name: E::NAME,
            type_id: TypeId::of::<E>(),
        }
    }

    /// Returns the entity's type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns whether this descriptor belongs to `E`.
    #[must_use]
    pub fn is<E: Entity>(&self) -> bool {
        self.type_id == TypeId::of::<E>()
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
