//! In-memory building model backed by a petgraph directed graph.
//!
//! Layout mirrors the IFC relationship objects:
//!
//! ```text
//! Entity --IsDefinedBy--> Relation(DefinesBy*) --Relating--> Group
//! Entity --IsTypedBy----> Relation(Type)       --Relating--> Type --HasPropertySets--> Group
//! ```
//!
//! Object ids are unique across all node kinds, like STEP instance ids.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::model::BuildingModel;
use crate::types::{
    AttributeGroup, DefinedBy, Entity, ModelError, RelationKind, TypeDefinition,
};

#[derive(Debug, Clone)]
enum ModelNode {
    Entity(Entity),
    DefinesRelation { id: u64, kind: RelationKind },
    TypeRelation { id: u64 },
    Group(AttributeGroup),
    Type {
        id: u64,
        type_name: String,
        name: Option<String>,
    },
}

impl ModelNode {
    fn object_id(&self) -> u64 {
        match self {
            ModelNode::Entity(e) => e.id,
            ModelNode::DefinesRelation { id, .. } => *id,
            ModelNode::TypeRelation { id } => *id,
            ModelNode::Group(g) => g.id,
            ModelNode::Type { id, .. } => *id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModelEdge {
    IsDefinedBy,
    IsTypedBy,
    Relating,
    HasPropertySets,
}

/// petgraph-backed [`BuildingModel`] populated through a small builder API.
#[derive(Debug, Default)]
pub struct MemoryModel {
    graph: DiGraph<ModelNode, ModelEdge>,
    index: HashMap<u64, NodeIndex>,
    max_id: u64,
}

impl MemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity_count(&self) -> usize {
        self.graph
            .node_weights()
            .filter(|n| matches!(n, ModelNode::Entity(_)))
            .count()
    }

    /// An object id not used by any node yet. Saturates at `u64::MAX`, where
    /// inserting it fails as a duplicate id.
    pub fn fresh_id(&self) -> u64 {
        self.max_id.saturating_add(1)
    }

    pub fn add_entity(&mut self, entity: Entity) -> Result<(), ModelError> {
        self.insert(ModelNode::Entity(entity)).map(|_| ())
    }

    pub fn add_group(&mut self, group: AttributeGroup) -> Result<(), ModelError> {
        self.insert(ModelNode::Group(group)).map(|_| ())
    }

    pub fn add_type(
        &mut self,
        id: u64,
        type_name: &str,
        name: Option<&str>,
    ) -> Result<(), ModelError> {
        self.insert(ModelNode::Type {
            id,
            type_name: type_name.to_string(),
            name: name.map(str::to_string),
        })
        .map(|_| ())
    }

    /// Declare a group on a type definition. An unknown group id is kept out
    /// of the graph and resolves as absent.
    pub fn declare_group(&mut self, type_id: u64, group_id: u64) -> Result<(), ModelError> {
        let type_ix = self.node_of(type_id, |n| matches!(n, ModelNode::Type { .. }))?;
        match self.group_index(group_id) {
            Some(group_ix) => {
                self.graph
                    .add_edge(type_ix, group_ix, ModelEdge::HasPropertySets);
            }
            None => {
                tracing::debug!(type_id, group_id, "dangling type group reference dropped");
            }
        }
        Ok(())
    }

    /// Add a defined-by relation from each related entity to an optional
    /// relating group.
    pub fn add_defines_relation(
        &mut self,
        relation_id: u64,
        kind: RelationKind,
        related: &[u64],
        relating: Option<u64>,
    ) -> Result<(), ModelError> {
        let related_ix = self.entity_indices(related)?;
        let rel_ix = self.insert(ModelNode::DefinesRelation {
            id: relation_id,
            kind,
        })?;
        for ix in related_ix {
            self.graph.add_edge(ix, rel_ix, ModelEdge::IsDefinedBy);
        }
        match relating.and_then(|id| self.group_index(id)) {
            Some(group_ix) => {
                self.graph.add_edge(rel_ix, group_ix, ModelEdge::Relating);
            }
            None => {
                tracing::debug!(relation_id, ?relating, "defined-by relation has no target");
            }
        }
        Ok(())
    }

    /// Add a typed-by relation. An entity may be typed by at most one type.
    pub fn add_type_relation(
        &mut self,
        relation_id: u64,
        related: &[u64],
        relating_type: Option<u64>,
    ) -> Result<(), ModelError> {
        let related_ix = self.entity_indices(related)?;
        let type_ix = relating_type.and_then(|id| {
            self.index
                .get(&id)
                .copied()
                .filter(|ix| matches!(self.graph[*ix], ModelNode::Type { .. }))
        });
        // Targetless typed-by relations name no type and never conflict.
        if type_ix.is_some() {
            for (&id, &ix) in related.iter().zip(&related_ix) {
                if self.type_of(ix).is_some() {
                    return Err(ModelError::Malformed(format!(
                        "entity {} is typed by more than one type definition",
                        id
                    )));
                }
            }
        }
        let rel_ix = self.insert(ModelNode::TypeRelation { id: relation_id })?;
        for ix in related_ix {
            self.graph.add_edge(ix, rel_ix, ModelEdge::IsTypedBy);
        }
        if let Some(type_ix) = type_ix {
            self.graph.add_edge(rel_ix, type_ix, ModelEdge::Relating);
        }
        Ok(())
    }

    /// Shorthand: relate one group to one entity through a fresh relation.
    pub fn define_by_properties(
        &mut self,
        entity_id: u64,
        group_id: u64,
    ) -> Result<u64, ModelError> {
        let relation_id = self.fresh_id();
        self.add_defines_relation(
            relation_id,
            RelationKind::DefinesByProperties,
            &[entity_id],
            Some(group_id),
        )?;
        Ok(relation_id)
    }

    /// Shorthand: a non-property definition, ignored by attribute resolution.
    pub fn define_by_other(&mut self, entity_id: u64, target_id: u64) -> Result<u64, ModelError> {
        let relation_id = self.fresh_id();
        self.add_defines_relation(
            relation_id,
            RelationKind::DefinesByOther,
            &[entity_id],
            Some(target_id),
        )?;
        Ok(relation_id)
    }

    /// Shorthand: type one entity through a fresh relation.
    pub fn type_entity(&mut self, entity_id: u64, type_id: u64) -> Result<u64, ModelError> {
        let relation_id = self.fresh_id();
        self.add_type_relation(relation_id, &[entity_id], Some(type_id))?;
        Ok(relation_id)
    }

    fn insert(&mut self, node: ModelNode) -> Result<NodeIndex, ModelError> {
        let id = node.object_id();
        if self.index.contains_key(&id) {
            return Err(ModelError::Malformed(format!("duplicate object id {}", id)));
        }
        let ix = self.graph.add_node(node);
        self.index.insert(id, ix);
        self.max_id = self.max_id.max(id);
        Ok(ix)
    }

    fn node_of(
        &self,
        id: u64,
        accept: impl Fn(&ModelNode) -> bool,
    ) -> Result<NodeIndex, ModelError> {
        self.index
            .get(&id)
            .copied()
            .filter(|ix| accept(&self.graph[*ix]))
            .ok_or(ModelError::UnknownObject(id))
    }

    fn entity_indices(&self, ids: &[u64]) -> Result<Vec<NodeIndex>, ModelError> {
        ids.iter()
            .map(|&id| self.node_of(id, |n| matches!(n, ModelNode::Entity(_))))
            .collect()
    }

    fn group_index(&self, id: u64) -> Option<NodeIndex> {
        self.index
            .get(&id)
            .copied()
            .filter(|ix| matches!(self.graph[*ix], ModelNode::Group(_)))
    }

    /// Targets of outgoing edges of one kind, in insertion order.
    fn outgoing(&self, ix: NodeIndex, kind: ModelEdge) -> impl Iterator<Item = NodeIndex> {
        // petgraph walks adjacency lists newest-first; sort to restore declaration order.
        let mut edges: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges_directed(ix, Direction::Outgoing)
            .filter(|e| *e.weight() == kind)
            .map(|e| (e.id(), e.target()))
            .collect();
        edges.sort_by_key(|(edge, _)| *edge);
        edges.into_iter().map(|(_, target)| target)
    }

    /// Type id of the first typed-by relation of an entity that has a target.
    fn type_of(&self, entity_ix: NodeIndex) -> Option<u64> {
        self.outgoing(entity_ix, ModelEdge::IsTypedBy)
            .find_map(|rel_ix| self.relating_id(rel_ix))
    }

    fn relating_id(&self, relation_ix: NodeIndex) -> Option<u64> {
        self.outgoing(relation_ix, ModelEdge::Relating)
            .next()
            .map(|ix| self.graph[ix].object_id())
    }
}

impl BuildingModel for MemoryModel {
    fn entities(&self) -> Result<Vec<Entity>, ModelError> {
        Ok(self
            .graph
            .node_weights()
            .filter_map(|n| match n {
                ModelNode::Entity(e) => Some(e.clone()),
                _ => None,
            })
            .collect())
    }

    fn defined_by(&self, entity_id: u64) -> Result<Vec<DefinedBy>, ModelError> {
        let ix = self.node_of(entity_id, |n| matches!(n, ModelNode::Entity(_)))?;
        let mut out = Vec::new();
        for rel_ix in self.outgoing(ix, ModelEdge::IsDefinedBy) {
            match &self.graph[rel_ix] {
                ModelNode::DefinesRelation { id, kind } => out.push(DefinedBy {
                    relation_id: *id,
                    kind: *kind,
                    relating: self.relating_id(rel_ix),
                }),
                other => {
                    return Err(ModelError::Internal(format!(
                        "IsDefinedBy edge points at object {} which is not a relation",
                        other.object_id()
                    )))
                }
            }
        }
        Ok(out)
    }

    fn typed_by(&self, entity_id: u64) -> Result<Option<u64>, ModelError> {
        let ix = self.node_of(entity_id, |n| matches!(n, ModelNode::Entity(_)))?;
        Ok(self.type_of(ix))
    }

    fn type_definition(&self, type_id: u64) -> Result<Option<TypeDefinition>, ModelError> {
        let Some(&ix) = self.index.get(&type_id) else {
            return Ok(None);
        };
        let ModelNode::Type { id, type_name, name } = &self.graph[ix] else {
            return Ok(None);
        };
        let group_ids = self
            .outgoing(ix, ModelEdge::HasPropertySets)
            .map(|g| self.graph[g].object_id())
            .collect();
        Ok(Some(TypeDefinition {
            id: *id,
            type_name: type_name.clone(),
            name: name.clone(),
            group_ids,
        }))
    }

    fn group(&self, group_id: u64) -> Result<Option<AttributeGroup>, ModelError> {
        Ok(self.group_index(group_id).and_then(|ix| match &self.graph[ix] {
            ModelNode::Group(g) => Some(g.clone()),
            _ => None,
        }))
    }
}
