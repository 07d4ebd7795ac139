//! Mapped field declarations
//!
//! Rust has no struct tags, so each entity declares its mapped fields once
//! (normally through the [`mapped!`](crate::mapped) macro). The declaration
//! keeps source order, which is what ties generated column lists to value
//! lists and result columns back to field positions.

use super::types::FieldValue;
use crate::error::{OgmError, OgmResult};
use crate::result::Value;
use chrono::{DateTime, Utc};

/// Column annotation that excludes a field from mapping
pub const SKIP_COLUMN: &str = "-";

/// One declared field of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Rust field name
    pub field: &'static str,
    /// Target column, `"-"` or empty when the field is not mapped
    pub column: &'static str,
}

impl FieldSpec {
    pub const fn new(field: &'static str, column: &'static str) -> Self {
        Self { field, column }
    }

    /// Whether this field takes part in statements and decoding
    pub fn is_mapped(&self) -> bool {
        !self.column.is_empty() && self.column != SKIP_COLUMN
    }
}

/// Read access to an entity's declared fields.
///
/// `field_values()` must return exactly one value per spec, in spec order.
pub trait Mapped {
    /// Declared fields in source order
    fn field_specs(&self) -> &'static [FieldSpec];

    /// Current value of every declared field, in source order
    fn field_values(&self) -> Vec<FieldValue>;
}

/// Positional write access used by the struct decoders
pub trait FromRow: Default + 'static {
    /// Declared fields in source order
    fn specs() -> &'static [FieldSpec];

    /// Assign a result value to the field at `pos`
    fn set_field(&mut self, pos: usize, value: &Value) -> OgmResult<()>;
}

/// A Rust type usable as a mapped field.
///
/// `assign` performs the per-kind coercion from a result value: booleans,
/// integers, floats and strings read their own variant (falling back to the
/// zero value when the variant differs), timestamps read the integer variant
/// as Unix seconds. Types that keep the default `assign` are written into
/// statements but silently left alone when decoding.
///
/// The server stores integers as `int64`. A `u64` or `usize` above
/// `i64::MAX` is still written as its decimal literal, which the server
/// cannot hold, and no result value can decode back into it.
pub trait FieldType {
    /// Current value as a statement literal source
    fn to_field_value(&self) -> FieldValue;

    /// Overwrite `self` from a result value
    fn assign(&mut self, value: &Value) -> OgmResult<()> {
        let _ = value;
        Ok(())
    }
}

impl FieldType for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }

    fn assign(&mut self, value: &Value) -> OgmResult<()> {
        *self = value.as_bool().unwrap_or_default();
        Ok(())
    }
}

macro_rules! impl_signed_field {
    ($($t:ty),*) => {
        $(
            impl FieldType for $t {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Int(*self as i64)
                }

                fn assign(&mut self, value: &Value) -> OgmResult<()> {
                    let raw = value.as_int().unwrap_or_default();
                    *self = <$t>::try_from(raw).map_err(|_| {
                        OgmError::Conversion(format!("{} out of range for {}", raw, stringify!($t)))
                    })?;
                    Ok(())
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_field {
    ($($t:ty),*) => {
        $(
            impl FieldType for $t {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::UInt(*self as u64)
                }

                fn assign(&mut self, value: &Value) -> OgmResult<()> {
                    let raw = value.as_int().unwrap_or_default();
                    *self = <$t>::try_from(raw).map_err(|_| {
                        OgmError::Conversion(format!("{} out of range for {}", raw, stringify!($t)))
                    })?;
                    Ok(())
                }
            }
        )*
    };
}

impl_signed_field!(i8, i16, i32, i64, isize);
impl_unsigned_field!(u8, u16, u32, u64, usize);

impl FieldType for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }

    fn assign(&mut self, value: &Value) -> OgmResult<()> {
        *self = value.as_float().unwrap_or_default();
        Ok(())
    }
}

impl FieldType for f32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self as f64)
    }

    fn assign(&mut self, value: &Value) -> OgmResult<()> {
        *self = value.as_float().unwrap_or_default() as f32;
        Ok(())
    }
}

impl FieldType for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn assign(&mut self, value: &Value) -> OgmResult<()> {
        *self = value
            .as_text()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default();
        Ok(())
    }
}

impl FieldType for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Timestamp(*self)
    }

    fn assign(&mut self, value: &Value) -> OgmResult<()> {
        let secs = value.as_int().unwrap_or_default();
        *self = DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| {
            OgmError::Conversion(format!("{} is not a valid unix timestamp", secs))
        })?;
        Ok(())
    }
}
