//! Conversion of wire values into native Rust values

use super::value::{self, Value};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A decoded cell: scalars become Rust values, composites stay as wire values
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Native {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    /// Vertex, edge, path, list, map or set, left for the caller to destructure
    Composite(Value),
}

/// One decoded row, keyed by column name in column order
pub type ValueMap = IndexMap<String, Native>;

/// One decoded row keeping only the text-valued columns
pub type StringMap = HashMap<String, String>;

impl Native {
    pub fn is_null(&self) -> bool {
        matches!(self, Native::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Native::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Native::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Native::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Native::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&Value> {
        match self {
            Native::Composite(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Native::Null => write!(f, "null"),
            Native::Bool(b) => write!(f, "{}", b),
            Native::Int(i) => write!(f, "{}", i),
            Native::Float(fl) => write!(f, "{}", fl),
            Native::String(s) => write!(f, "{}", s),
            Native::Date(d) => write!(f, "{}", d),
            Native::Time(t) => write!(f, "{}", t),
            Native::DateTime(dt) => write!(f, "{}", dt),
            Native::Composite(v) => write!(f, "{}", v),
        }
    }
}

impl From<&Value> for Native {
    fn from(value: &Value) -> Self {
        to_native(value)
    }
}

/// Convert one wire value.
///
/// Scalars map to their Rust counterparts. Date and time values that do not
/// form a valid calendar value are kept as composites, as are all nested
/// values.
pub fn to_native(value: &Value) -> Native {
    match value {
        Value::Null => Native::Null,
        Value::Bool(b) => Native::Bool(*b),
        Value::Int(i) => Native::Int(*i),
        Value::Float(f) => Native::Float(*f),
        Value::Text(bytes) => Native::String(String::from_utf8_lossy(bytes).into_owned()),
        Value::Date(d) => date(d)
            .map(Native::Date)
            .unwrap_or_else(|| Native::Composite(value.clone())),
        Value::Time(t) => time(t)
            .map(Native::Time)
            .unwrap_or_else(|| Native::Composite(value.clone())),
        Value::DateTime(dt) => datetime(dt)
            .map(Native::DateTime)
            .unwrap_or_else(|| Native::Composite(value.clone())),
        Value::Vertex(_)
        | Value::Edge(_)
        | Value::Path(_)
        | Value::List(_)
        | Value::Map(_)
        | Value::Set(_) => Native::Composite(value.clone()),
    }
}

fn date(d: &value::Date) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        i32::from(d.year),
        u32::try_from(d.month).ok()?,
        u32::try_from(d.day).ok()?,
    )
}

fn time(t: &value::Time) -> Option<NaiveTime> {
    NaiveTime::from_hms_micro_opt(
        u32::try_from(t.hour).ok()?,
        u32::try_from(t.minute).ok()?,
        u32::try_from(t.sec).ok()?,
        u32::try_from(t.microsec).ok()?,
    )
}

fn datetime(dt: &value::DateTime) -> Option<NaiveDateTime> {
    let d = date(&value::Date {
        year: dt.year,
        month: dt.month,
        day: dt.day,
    })?;
    let t = time(&value::Time {
        hour: dt.hour,
        minute: dt.minute,
        sec: dt.sec,
        microsec: dt.microsec,
    })?;
    Some(NaiveDateTime::new(d, t))
}
