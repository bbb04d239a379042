use serde::{Deserialize, Serialize};

/// A building element instance under validation (wall, door, space, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u64,
    /// IFC class name as written in the model, e.g. `IfcWallStandardCase`.
    pub type_name: String,
    pub global_id: String,
    pub name: Option<String>,
}

/// Kind tag of an attribute group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    PropertySet,
    QuantitySet,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::PropertySet => "property_set",
            GroupKind::QuantitySet => "quantity_set",
        }
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nominal value carried by a single attribute.
///
/// Snapshots encode this untagged: JSON strings, integers, floats and booleans
/// map directly onto the variants below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NominalValue {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl std::fmt::Display for NominalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NominalValue::Boolean(true) => f.write_str("TRUE"),
            NominalValue::Boolean(false) => f.write_str("FALSE"),
            NominalValue::Integer(v) => write!(f, "{}", v),
            NominalValue::Real(v) => write!(f, "{}", v),
            NominalValue::Text(s) => f.write_str(s),
        }
    }
}

/// A named attribute inside a property set or quantity set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// `None` is an absent value, which is not the same as an empty string.
    #[serde(default)]
    pub value: Option<NominalValue>,
}

impl Attribute {
    pub fn new(name: &str, value: Option<NominalValue>) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    pub fn text(name: &str, value: &str) -> Self {
        Self::new(name, Some(NominalValue::Text(value.to_string())))
    }

    pub fn real(name: &str, value: f64) -> Self {
        Self::new(name, Some(NominalValue::Real(value)))
    }
}

/// A property set or quantity set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeGroup {
    pub id: u64,
    /// Unnamed groups exist in real models; they never match a name lookup.
    pub name: Option<String>,
    pub kind: GroupKind,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl AttributeGroup {
    /// First attribute with exactly this name, if any.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

/// A type object (e.g. `IfcWallType`) whose groups are shared by every
/// entity typed by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub id: u64,
    pub type_name: String,
    pub name: Option<String>,
    /// Declared group ids in declaration order. Ids may dangle.
    pub group_ids: Vec<u64>,
}

/// Kind of a defined-by relation hanging off an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// `IfcRelDefinesByProperties` — relates a property or quantity set.
    DefinesByProperties,
    /// Any other defined-by relation (templates, objects). Never carries attribute groups.
    DefinesByOther,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::DefinesByProperties => "defines_by_properties",
            RelationKind::DefinesByOther => "defines_by_other",
        }
    }
}

/// A defined-by relation edge as seen from one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinedBy {
    pub relation_id: u64,
    pub kind: RelationKind,
    /// Relating group id; `None` when the relation has no target.
    pub relating: Option<u64>,
}

/// Errors that can occur while acquiring or traversing a model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Input not found: {0}")]
    InputNotFound(String),

    #[error("Failed to read model: {0}")]
    Io(String),

    #[error("Malformed model: {0}")]
    Malformed(String),

    #[error("Unknown object id: {0}")]
    UnknownObject(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for ModelError {
    fn from(e: std::io::Error) -> Self {
        ModelError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Malformed(e.to_string())
    }
}
