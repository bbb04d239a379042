//! JSON model snapshots.
//!
//! A snapshot is the entity/relation graph an IFC parser produced, flattened
//! to JSON so it can be checked without the parser in-process:
//!
//! ```json
//! {
//!   "schema": "IFC4",
//!   "entities": [{ "id": 1, "type": "IfcWall", "globalId": "2O2Fr$t4X7Zf8NOew3FLOH", "name": "W-01" }],
//!   "groups": [{ "id": 10, "name": "Pset_WallCommon", "kind": "property_set",
//!                "attributes": [{ "name": "IsExternal", "value": true }] }],
//!   "types": [{ "id": 20, "type": "IfcWallType", "name": "Basic 200", "groups": [10] }],
//!   "relations": [
//!     { "kind": "defines_by_properties", "id": 30, "related": [1], "relating": 10 },
//!     { "kind": "defines_by_type", "id": 31, "related": [1], "relating": 20 }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::memory::MemoryModel;
use crate::model::{BuildingModel, ModelProvider};
use crate::types::{AttributeGroup, Entity, ModelError, RelationKind};

/// Top-level snapshot document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSnapshot {
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub entities: Vec<SnapshotEntity>,
    #[serde(default)]
    pub groups: Vec<AttributeGroup>,
    #[serde(default)]
    pub types: Vec<SnapshotType>,
    #[serde(default)]
    pub relations: Vec<SnapshotRelation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEntity {
    pub id: u64,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(rename = "globalId")]
    pub global_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotType {
    pub id: u64,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub groups: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnapshotRelation {
    DefinesByProperties {
        id: u64,
        related: Vec<u64>,
        #[serde(default)]
        relating: Option<u64>,
    },
    DefinesByOther {
        id: u64,
        related: Vec<u64>,
        #[serde(default)]
        relating: Option<u64>,
    },
    DefinesByType {
        id: u64,
        related: Vec<u64>,
        #[serde(default)]
        relating: Option<u64>,
    },
}

impl ModelSnapshot {
    pub fn from_json(content: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the in-memory graph. Nodes are inserted before relations so
    /// relation order in the document is the resolution order.
    pub fn into_model(self) -> Result<MemoryModel, ModelError> {
        let mut model = MemoryModel::new();
        for e in self.entities {
            model.add_entity(Entity {
                id: e.id,
                type_name: e.type_name,
                global_id: e.global_id,
                name: e.name,
            })?;
        }
        for g in self.groups {
            model.add_group(g)?;
        }
        for t in &self.types {
            model.add_type(t.id, &t.type_name, t.name.as_deref())?;
        }
        for t in &self.types {
            for &group_id in &t.groups {
                model.declare_group(t.id, group_id)?;
            }
        }
        for rel in self.relations {
            match rel {
                SnapshotRelation::DefinesByProperties { id, related, relating } => {
                    model.add_defines_relation(
                        id,
                        RelationKind::DefinesByProperties,
                        &related,
                        relating,
                    )?;
                }
                SnapshotRelation::DefinesByOther { id, related, relating } => {
                    model.add_defines_relation(
                        id,
                        RelationKind::DefinesByOther,
                        &related,
                        relating,
                    )?;
                }
                SnapshotRelation::DefinesByType { id, related, relating } => {
                    model.add_type_relation(id, &related, relating)?;
                }
            }
        }
        Ok(model)
    }
}

/// Loads `.json` snapshots from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotProvider;

impl ModelProvider for SnapshotProvider {
    fn open(&self, path: &Path) -> Result<Box<dyn BuildingModel>, ModelError> {
        if !path.is_file() {
            return Err(ModelError::InputNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let snapshot = ModelSnapshot::from_json(&content).map_err(|e| match e {
            ModelError::Malformed(msg) => {
                ModelError::Malformed(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        let model = snapshot.into_model()?;
        tracing::debug!(
            path = %path.display(),
            entities = model.entity_count(),
            "loaded model snapshot"
        );
        Ok(Box::new(model))
    }
}
