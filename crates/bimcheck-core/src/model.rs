use std::path::Path;

use crate::types::{AttributeGroup, DefinedBy, Entity, ModelError, TypeDefinition};

/// Read-only handle over a loaded building model.
///
/// Every method is a single adjacency lookup; multi-hop traversal lives in the
/// resolver. Lookups of relations that do not exist return empty results. An
/// `Err` means the provider itself failed and callers must abort the run.
pub trait BuildingModel {
    /// All entities in model order.
    fn entities(&self) -> Result<Vec<Entity>, ModelError>;

    /// Defined-by relation edges of an entity, in declaration order.
    fn defined_by(&self, entity_id: u64) -> Result<Vec<DefinedBy>, ModelError>;

    /// Id of the type definition an entity is typed by, if any.
    fn typed_by(&self, entity_id: u64) -> Result<Option<u64>, ModelError>;

    /// Look up a type definition by id.
    fn type_definition(&self, type_id: u64) -> Result<Option<TypeDefinition>, ModelError>;

    /// Look up a property set or quantity set by id.
    fn group(&self, group_id: u64) -> Result<Option<AttributeGroup>, ModelError>;
}

/// Acquires model handles from a source path.
///
/// The returned handle owns everything it needs; dropping it releases the
/// model on every exit path.
pub trait ModelProvider {
    fn open(&self, path: &Path) -> Result<Box<dyn BuildingModel>, ModelError>;
}
