//! Core type definitions shared by entities, statements and the fluent builder

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traverse edges against their direction
pub const DIRECTION_REVERSELY: &str = "REVERSELY";

/// Traverse edges in both directions
pub const DIRECTION_BIDIRECT: &str = "BIDIRECT";

/// Default row limit applied by neighbourhood selects
pub const DEFAULT_LIMIT: usize = 1000;

/// Alias used for vertex columns in generated selects
pub const V: &str = "v";

/// Alias used for edge columns in generated selects
pub const E: &str = "e";

/// Identifier encoding policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Policy {
    /// Use the identifier literal as is
    #[default]
    None,
    /// Wrap the identifier literal in `hash(...)`
    HashEncode,
}

/// The current value of an identifier or a mapped field.
///
/// Identifiers are untyped on the entity side: a vertex id may be an integer
/// or a string depending on the space's vid type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    /// Anything else, kept in its default text form
    Other(String),
}

impl FieldValue {
    /// Whether the value renders as a bare number
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::UInt(_) | FieldValue::Float(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Timestamp(ts) => write!(f, "{}", ts),
            FieldValue::Other(s) => write!(f, "{}", s),
        }
    }
}

// Convenience conversions
impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(ts: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(ts)
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}
