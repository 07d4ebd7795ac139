//! Result decoding into caller destinations
//!
//! The destination type picks the shape:
//!
//! | Destination | Zero rows | Otherwise |
//! |---|---|---|
//! | integer | `0` | row 0, column 0 |
//! | [`ValueMap`] / [`StringMap`] | `RecordNotFound` | row 0 |
//! | `Vec<ValueMap>` / `Vec<StringMap>` | empty | one map per row |
//! | mapped struct | `RecordNotFound` | row 0 |
//! | `Vec<mapped struct>` | empty | one struct per row |
//! | `Option<T>` | as `T` | `None` is `NilTarget` |

use super::native::{to_native, StringMap, ValueMap};
use super::result_set::ResultSet;
use super::value::Value;
use crate::error::{OgmError, OgmResult};
use crate::mapping::column_map;
use crate::model::FromRow;

/// A destination a [`ResultSet`] can be decoded into
pub trait Decode {
    /// Overwrite `self` with the decoded result
    fn decode_into(&mut self, rs: &ResultSet) -> OgmResult<()>;
}

/// Row-wise decoding, used by `Vec<T>` destinations
pub trait DecodeRow: Sized {
    /// Decode every row, in row order
    fn decode_rows(rs: &ResultSet) -> OgmResult<Vec<Self>>;
}

impl<T: DecodeRow> Decode for Vec<T> {
    fn decode_into(&mut self, rs: &ResultSet) -> OgmResult<()> {
        *self = T::decode_rows(rs)?;
        Ok(())
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode_into(&mut self, rs: &ResultSet) -> OgmResult<()> {
        match self {
            Some(inner) => inner.decode_into(rs),
            None => Err(OgmError::NilTarget),
        }
    }
}

macro_rules! impl_scalar_decode {
    ($($t:ty),*) => {
        $(
            impl Decode for $t {
                fn decode_into(&mut self, rs: &ResultSet) -> OgmResult<()> {
                    let raw = first_int(rs)?;
                    *self = <$t>::try_from(raw).map_err(|_| {
                        OgmError::Conversion(format!("{} out of range for {}", raw, stringify!($t)))
                    })?;
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar_decode!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn first_int(rs: &ResultSet) -> OgmResult<i64> {
    if rs.is_empty() {
        return Ok(0);
    }
    let value = rs.value(0, 0)?;
    value.as_int().ok_or_else(|| {
        OgmError::Conversion(format!("expected int, found {}", value.type_name()))
    })
}

fn cell<'a>(row: &'a [Value], index: usize, column: &str) -> OgmResult<&'a Value> {
    row.get(index).ok_or_else(|| {
        OgmError::MalformedResult(format!(
            "row has {} values, column {} ({}) missing",
            row.len(),
            index,
            column
        ))
    })
}

fn value_map(columns: &[String], row: &[Value]) -> OgmResult<ValueMap> {
    let mut map = ValueMap::with_capacity(columns.len());
    for (i, column) in columns.iter().enumerate() {
        map.insert(column.clone(), to_native(cell(row, i, column)?));
    }
    Ok(map)
}

fn string_map(columns: &[String], row: &[Value]) -> OgmResult<StringMap> {
    let mut map = StringMap::with_capacity(columns.len());
    for (i, column) in columns.iter().enumerate() {
        if let Some(s) = cell(row, i, column)?.as_string() {
            map.insert(column.clone(), s);
        }
    }
    Ok(map)
}

impl Decode for ValueMap {
    fn decode_into(&mut self, rs: &ResultSet) -> OgmResult<()> {
        if rs.is_empty() {
            return Err(OgmError::RecordNotFound);
        }
        *self = value_map(rs.columns(), rs.row(0)?)?;
        Ok(())
    }
}

impl DecodeRow for ValueMap {
    fn decode_rows(rs: &ResultSet) -> OgmResult<Vec<Self>> {
        rs.rows()
            .iter()
            .map(|row| value_map(rs.columns(), row))
            .collect()
    }
}

impl Decode for StringMap {
    fn decode_into(&mut self, rs: &ResultSet) -> OgmResult<()> {
        if rs.is_empty() {
            return Err(OgmError::RecordNotFound);
        }
        *self = string_map(rs.columns(), rs.row(0)?)?;
        Ok(())
    }
}

impl DecodeRow for StringMap {
    fn decode_rows(rs: &ResultSet) -> OgmResult<Vec<Self>> {
        rs.rows()
            .iter()
            .map(|row| string_map(rs.columns(), row))
            .collect()
    }
}

/// Field position for every result column, `None` when the column is unmapped
fn plan<T: FromRow>(rs: &ResultSet) -> Vec<Option<usize>> {
    let map = column_map::<T>();
    rs.columns().iter().map(|c| map.position(c)).collect()
}

fn fill<T: FromRow>(
    target: &mut T,
    plan: &[Option<usize>],
    columns: &[String],
    row: &[Value],
) -> OgmResult<()> {
    for (i, pos) in plan.iter().enumerate() {
        if let Some(pos) = pos {
            target.set_field(*pos, cell(row, i, &columns[i])?)?;
        }
    }
    Ok(())
}

/// Fill a mapped struct from row 0; used by [`mapped!`](crate::mapped)
pub fn decode_struct<T: FromRow>(target: &mut T, rs: &ResultSet) -> OgmResult<()> {
    if rs.is_empty() {
        return Err(OgmError::RecordNotFound);
    }
    let plan = plan::<T>(rs);
    fill(target, &plan, rs.columns(), rs.row(0)?)
}

/// One mapped struct per row; used by [`mapped!`](crate::mapped)
pub fn decode_structs<T: FromRow>(rs: &ResultSet) -> OgmResult<Vec<T>> {
    let plan = plan::<T>(rs);
    rs.rows()
        .iter()
        .map(|row| {
            let mut item = T::default();
            fill(&mut item, &plan, rs.columns(), row)?;
            Ok(item)
        })
        .collect()
}

/// Vertex property maps per row.
///
/// Each row yields the props of every tag of every vertex found in it,
/// looking through lists. A row without vertices yields an empty list.
pub fn vertex_layers(rs: &ResultSet) -> OgmResult<Vec<Vec<ValueMap>>> {
    if rs.is_empty() {
        return Err(OgmError::RecordNotFound);
    }
    Ok(rs
        .rows()
        .iter()
        .map(|row| {
            let mut layer = Vec::new();
            for value in row {
                collect_vertex_props(value, &mut layer);
            }
            layer
        })
        .collect())
}

fn collect_vertex_props(value: &Value, out: &mut Vec<ValueMap>) {
    match value {
        Value::Vertex(node) => {
            for tag in &node.tags {
                out.push(
                    tag.props
                        .iter()
                        .map(|(k, v)| (k.clone(), to_native(v)))
                        .collect(),
                );
            }
        }
        Value::List(items) => {
            for item in items {
                collect_vertex_props(item, out);
            }
        }
        _ => {}
    }
}
