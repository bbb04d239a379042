//! Attribute-group resolution over the building model graph.
//!
//! Two passes, always in this order:
//! 1. instance pass — entity → defined-by relations (property kind only) → group
//! 2. type pass — entity → typed-by → type definition → declared groups
//!
//! Union lookups walk the instance pass first, so a group defined at both
//! levels resolves to the instance copy. Missing links at any hop yield empty
//! results; only provider faults are returned as errors.

use bimcheck_core::model::BuildingModel;
use bimcheck_core::types::{AttributeGroup, Entity, GroupKind, ModelError, RelationKind};

use crate::types::IssueSource;

/// Which pass a group was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Instance,
    Type,
}

/// A group together with the level that supplied it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGroup {
    pub level: Level,
    pub group: AttributeGroup,
}

impl ResolvedGroup {
    /// Issue source for a value read from this group.
    pub fn source(&self) -> IssueSource {
        match (self.group.kind, self.level) {
            (GroupKind::PropertySet, Level::Instance) => IssueSource::PsetInstance,
            (GroupKind::PropertySet, Level::Type) => IssueSource::PsetType,
            (GroupKind::QuantitySet, Level::Instance) => IssueSource::QtoInstance,
            (GroupKind::QuantitySet, Level::Type) => IssueSource::QtoType,
        }
    }
}

/// Read-only resolver borrowing a model handle for the duration of a rule.
#[derive(Clone, Copy)]
pub struct AttributeResolver<'m> {
    model: &'m dyn BuildingModel,
}

impl<'m> AttributeResolver<'m> {
    pub fn new(model: &'m dyn BuildingModel) -> Self {
        Self { model }
    }

    /// Groups of one kind attached directly to the entity.
    pub fn instance_groups(
        &self,
        entity: &Entity,
        kind: GroupKind,
    ) -> Result<Vec<AttributeGroup>, ModelError> {
        let mut out = Vec::new();
        for rel in self.model.defined_by(entity.id)? {
            if rel.kind != RelationKind::DefinesByProperties {
                continue;
            }
            let Some(group_id) = rel.relating else { continue };
            let Some(group) = self.model.group(group_id)? else { continue };
            if group.kind == kind {
                out.push(group);
            }
        }
        Ok(out)
    }

    /// Groups of one kind declared on the entity's type definition.
    pub fn type_groups(
        &self,
        entity: &Entity,
        kind: GroupKind,
    ) -> Result<Vec<AttributeGroup>, ModelError> {
        let Some(type_id) = self.model.typed_by(entity.id)? else {
            return Ok(vec![]);
        };
        let Some(definition) = self.model.type_definition(type_id)? else {
            return Ok(vec![]);
        };
        let mut out = Vec::new();
        for group_id in definition.group_ids {
            let Some(group) = self.model.group(group_id)? else { continue };
            if group.kind == kind {
                out.push(group);
            }
        }
        Ok(out)
    }

    pub fn instance_property_sets(
        &self,
        entity: &Entity,
    ) -> Result<Vec<AttributeGroup>, ModelError> {
        self.instance_groups(entity, GroupKind::PropertySet)
    }

    pub fn instance_quantity_sets(
        &self,
        entity: &Entity,
    ) -> Result<Vec<AttributeGroup>, ModelError> {
        self.instance_groups(entity, GroupKind::QuantitySet)
    }

    pub fn type_property_sets(
        &self,
        entity: &Entity,
    ) -> Result<Vec<AttributeGroup>, ModelError> {
        self.type_groups(entity, GroupKind::PropertySet)
    }

    pub fn type_quantity_sets(
        &self,
        entity: &Entity,
    ) -> Result<Vec<AttributeGroup>, ModelError> {
        self.type_groups(entity, GroupKind::QuantitySet)
    }

    /// Instance groups followed by type groups, both of one kind.
    pub fn all_definitions(
        &self,
        entity: &Entity,
        kind: GroupKind,
    ) -> Result<Vec<ResolvedGroup>, ModelError> {
        let mut out: Vec<ResolvedGroup> = self
            .instance_groups(entity, kind)?
            .into_iter()
            .map(|group| ResolvedGroup {
                level: Level::Instance,
                group,
            })
            .collect();
        out.extend(
            self.type_groups(entity, kind)?
                .into_iter()
                .map(|group| ResolvedGroup {
                    level: Level::Type,
                    group,
                }),
        );
        Ok(out)
    }

    pub fn all_property_set_definitions(
        &self,
        entity: &Entity,
    ) -> Result<Vec<ResolvedGroup>, ModelError> {
        self.all_definitions(entity, GroupKind::PropertySet)
    }

    pub fn all_quantity_set_definitions(
        &self,
        entity: &Entity,
    ) -> Result<Vec<ResolvedGroup>, ModelError> {
        self.all_definitions(entity, GroupKind::QuantitySet)
    }

    /// First property set with this exact name, instance level first.
    pub fn find_pset(
        &self,
        entity: &Entity,
        name: &str,
    ) -> Result<Option<ResolvedGroup>, ModelError> {
        Ok(self
            .all_property_set_definitions(entity)?
            .into_iter()
            .find(|r| r.group.is_named(name)))
    }

    /// First quantity set with this exact name, instance level first.
    pub fn find_qto(
        &self,
        entity: &Entity,
        name: &str,
    ) -> Result<Option<ResolvedGroup>, ModelError> {
        Ok(self
            .all_quantity_set_definitions(entity)?
            .into_iter()
            .find(|r| r.group.is_named(name)))
    }

    pub fn has_pset(&self, entity: &Entity, name: &str) -> Result<bool, ModelError> {
        Ok(self.find_pset(entity, name)?.is_some())
    }

    pub fn has_qto(&self, entity: &Entity, name: &str) -> Result<bool, ModelError> {
        Ok(self.find_qto(entity, name)?.is_some())
    }
}

/// First group named `name` in a single-level sequence.
pub fn first_named<'a>(groups: &'a [AttributeGroup], name: &str) -> Option<&'a AttributeGroup> {
    groups.iter().find(|g| g.is_named(name))
}
