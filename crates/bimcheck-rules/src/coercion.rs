//! Normalization of raw attribute values.
//!
//! Absence (no attribute, or an attribute without a value) is kept apart from
//! a value that is present but cannot be read as the requested kind.

use bimcheck_core::types::{Attribute, NominalValue};

/// Outcome of reading an attribute as a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    /// No attribute, or the attribute carries no value.
    Absent,
    /// A value is present but is not a finite number. Holds the trimmed text.
    NotNumeric(String),
    Number(f64),
}

/// Trimmed string form of an attribute's value, or `None` if absent.
///
/// An empty string is present, not absent.
pub fn as_string(attribute: Option<&Attribute>) -> Option<String> {
    let value = attribute?.value.as_ref()?;
    Some(value.to_string().trim().to_string())
}

/// Numeric form of an attribute's value.
pub fn as_number(attribute: Option<&Attribute>) -> Numeric {
    let Some(value) = attribute.and_then(|a| a.value.as_ref()) else {
        return Numeric::Absent;
    };
    match value {
        NominalValue::Integer(v) => Numeric::Number(*v as f64),
        NominalValue::Real(v) if v.is_finite() => Numeric::Number(*v),
        NominalValue::Real(v) => Numeric::NotNumeric(v.to_string()),
        NominalValue::Boolean(_) => Numeric::NotNumeric(value.to_string()),
        NominalValue::Text(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => Numeric::Number(v),
                _ => Numeric::NotNumeric(trimmed.to_string()),
            }
        }
    }
}
