/// Shared test helpers for all bimcheck integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use bimcheck_core::memory::MemoryModel;
use bimcheck_core::types::{Attribute, AttributeGroup, Entity, GroupKind};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Builds a `MemoryModel` one element at a time, allocating ids as it goes.
#[allow(dead_code)]
pub struct ModelBuilder {
    pub model: MemoryModel,
}

#[allow(dead_code)]
impl ModelBuilder {
    pub fn new() -> Self {
        Self {
            model: MemoryModel::new(),
        }
    }

    pub fn entity(&mut self, type_name: &str, global_id: &str, name: Option<&str>) -> Entity {
        let entity = Entity {
            id: self.model.fresh_id(),
            type_name: type_name.to_string(),
            global_id: global_id.to_string(),
            name: name.map(str::to_string),
        };
        self.model.add_entity(entity.clone()).unwrap();
        entity
    }

    fn group(&mut self, name: &str, kind: GroupKind, attributes: Vec<Attribute>) -> u64 {
        let id = self.model.fresh_id();
        self.model
            .add_group(AttributeGroup {
                id,
                name: Some(name.to_string()),
                kind,
                attributes,
            })
            .unwrap();
        id
    }

    pub fn pset(&mut self, entity: &Entity, name: &str, attributes: Vec<Attribute>) -> u64 {
        let id = self.group(name, GroupKind::PropertySet, attributes);
        self.model.define_by_properties(entity.id, id).unwrap();
        id
    }

    pub fn qto(&mut self, entity: &Entity, name: &str, attributes: Vec<Attribute>) -> u64 {
        let id = self.group(name, GroupKind::QuantitySet, attributes);
        self.model.define_by_properties(entity.id, id).unwrap();
        id
    }

    /// A type definition carrying one property set, assigned to `entities`.
    pub fn typed_pset(
        &mut self,
        type_name: &str,
        entities: &[&Entity],
        pset: &str,
        attributes: Vec<Attribute>,
    ) -> u64 {
        let type_id = self.model.fresh_id();
        self.model.add_type(type_id, type_name, None).unwrap();
        let group = self.group(pset, GroupKind::PropertySet, attributes);
        self.model.declare_group(type_id, group).unwrap();
        for entity in entities {
            self.model.type_entity(entity.id, type_id).unwrap();
        }
        type_id
    }

    pub fn typed_qto(
        &mut self,
        type_name: &str,
        entities: &[&Entity],
        qto: &str,
        attributes: Vec<Attribute>,
    ) -> u64 {
        let type_id = self.model.fresh_id();
        self.model.add_type(type_id, type_name, None).unwrap();
        let group = self.group(qto, GroupKind::QuantitySet, attributes);
        self.model.declare_group(type_id, group).unwrap();
        for entity in entities {
            self.model.type_entity(entity.id, type_id).unwrap();
        }
        type_id
    }
}

/// A snapshot with one fully compliant wall, one wall with problems, a door
/// and a space.
#[allow(dead_code)]
pub fn office_snapshot() -> Value {
    json!({
        "schema": "IFC4",
        "entities": [
            { "id": 1, "type": "IfcWall", "globalId": "0w6Kd1M$T5xhTl3Q0F9uLa", "name": "W-01" },
            { "id": 2, "type": "IfcWallStandardCase", "globalId": "1aYQm7vD9FfA0lJv8c$3tP", "name": "  " },
            { "id": 3, "type": "IfcDoor", "globalId": "2Zl8eVq4H1_uPBc6N0rXgE", "name": "D-01" },
            { "id": 4, "type": "IfcSpace", "globalId": "3Jt4nWb0K7yQw2Ms9Hd5Cf", "name": "Office 1.01" }
        ],
        "groups": [
            { "id": 10, "name": "Pset_WallCommon", "kind": "property_set",
              "attributes": [
                  { "name": "IsExternal", "value": true },
                  { "name": "LoadBearing", "value": false },
                  { "name": "FireRating", "value": "EI60" }
              ] },
            { "id": 11, "name": "Qto_WallBaseQuantities", "kind": "quantity_set",
              "attributes": [{ "name": "Length", "value": 5.4 }] },
            { "id": 12, "name": "Pset_WallCommon", "kind": "property_set",
              "attributes": [
                  { "name": "IsExternal", "value": "yes" },
                  { "name": "FireRating", "value": "EI30" }
              ] },
            { "id": 13, "name": "Qto_WallBaseQuantities", "kind": "quantity_set",
              "attributes": [{ "name": "Length", "value": 0 }] },
            { "id": 14, "name": "Pset_WallCommon", "kind": "property_set",
              "attributes": [{ "name": "FireRating", "value": "ei60" }] },
            { "id": 15, "name": "Pset_DoorCommon", "kind": "property_set",
              "attributes": [{ "name": "Reference", "value": "DT-90" }] },
            { "id": 16, "name": "Pset_ManufacturerTypeInformation", "kind": "property_set",
              "attributes": [{ "name": "ModelReference", "value": "DT-91" }] },
            { "id": 17, "name": "Pset_SpaceCommon", "kind": "property_set",
              "attributes": [{ "name": "Reference", "value": "1.01" }] }
        ],
        "types": [
            { "id": 20, "type": "IfcWallType", "name": "Basic 200", "groups": [14] }
        ],
        "relations": [
            { "kind": "defines_by_properties", "id": 30, "related": [1], "relating": 10 },
            { "kind": "defines_by_properties", "id": 31, "related": [1], "relating": 11 },
            { "kind": "defines_by_properties", "id": 32, "related": [2], "relating": 12 },
            { "kind": "defines_by_properties", "id": 33, "related": [2], "relating": 13 },
            { "kind": "defines_by_type", "id": 34, "related": [1, 2], "relating": 20 },
            { "kind": "defines_by_properties", "id": 35, "related": [3], "relating": 15 },
            { "kind": "defines_by_properties", "id": 36, "related": [3], "relating": 16 },
            { "kind": "defines_by_properties", "id": 37, "related": [4], "relating": 17 }
        ]
    })
}

/// Write a snapshot into `dir` and return its path.
#[allow(dead_code)]
pub fn write_snapshot(dir: &Path, file_name: &str, snapshot: &Value) -> PathBuf {
    let path = dir.join(file_name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, serde_json::to_string_pretty(snapshot).unwrap()).unwrap();
    path
}

/// A temp directory holding the office snapshot as `office.json`.
///
/// Returns (TempDir, snapshot_path). Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn office_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(dir.path(), "office.json", &office_snapshot());
    (dir, path)
}

/// Get path to compiled bimcheck binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn bimcheck_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("bimcheck");
    if path.exists() {
        return path;
    }
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let status = Command::new("cargo")
        .args(["build", "-p", "bimcheck-cli"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build bimcheck");
    assert!(status.success(), "Failed to build bimcheck binary");
    path
}
