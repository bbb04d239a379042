//! Quality rules for parsed IFC building models.
//!
//! Resolves property sets and quantity sets through the model graph and
//! checks them against a fixed, ordered rule list:
//! - IFC.NAME.MISSING: entity has no display name
//! - IFC.GLOBALID.DUPLICATE: global id reused by several entities
//! - IFC.WALL.PSET_WALLCOMMON: wall lacks `Pset_WallCommon`
//! - IFC.WALL.QTO_BASEQUANTITIES: wall lacks `Qto_WallBaseQuantities`
//! - IFC.WALL.ISEXTERNAL.ALLOWED / IFC.WALL.LOADBEARING.ALLOWED: boolean labels
//! - IFC.DOOR.REFERENCE.EQUAL: door reference matches the manufacturer's
//! - IFC.WALL.FIRERATING.TYPE_CONSISTENT: instance fire rating agrees with the type
//! - IFC.WALL.QTO.LENGTH: wall length is a positive number
//! - IFC.SPACE.SURVEY.REFERENCE: records space references (Info)

pub mod coercion;
pub mod engine;
pub mod resolver;
pub mod rules;
pub mod types;
