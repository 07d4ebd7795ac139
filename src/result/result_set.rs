//! Tabular query results

use super::decode::{self, Decode};
use super::native::ValueMap;
use super::value::Value;
use crate::error::{OgmError, OgmResult};
use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

/// One row: positional values matching the column list
pub type Row = Vec<Value>;

/// Result of executing one statement
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl ResultSet {
    /// Create an empty result with the given columns
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Builder-style [`push_row`](Self::push_row)
    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the result has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Row by index
    pub fn row(&self, index: usize) -> OgmResult<&Row> {
        self.rows.get(index).ok_or_else(|| {
            OgmError::MalformedResult(format!(
                "row {} out of range ({} rows)",
                index,
                self.rows.len()
            ))
        })
    }

    /// Cell by row and column index
    pub fn value(&self, row: usize, column: usize) -> OgmResult<&Value> {
        self.row(row)?.get(column).ok_or_else(|| {
            OgmError::MalformedResult(format!("row {} has no column {}", row, column))
        })
    }

    /// Decode this result into `dest`.
    ///
    /// The destination type selects the shape (see [`Decode`]). A panic raised
    /// while filling the destination is caught here and returned as
    /// [`OgmError::Conversion`].
    pub fn unmarshal<D>(&self, dest: &mut D) -> OgmResult<()>
    where
        D: Decode + ?Sized,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| dest.decode_into(self))) {
            Ok(result) => result,
            Err(payload) => Err(OgmError::Conversion(panic_message(payload.as_ref()))),
        }
    }

    /// Vertex properties per row: one map per tag of every vertex found in
    /// the row, descending into lists.
    ///
    /// Zero rows is reported as [`OgmError::RecordNotFound`].
    pub fn to_vertex_props(&self) -> OgmResult<Vec<Vec<ValueMap>>> {
        decode::vertex_layers(self)
    }

    /// Row 0 as a map, or an empty map when decoding fails.
    ///
    /// Zero rows count as a failure here, as for any single-map decode.
    pub fn to_map_lossy(&self) -> ValueMap {
        let mut map = ValueMap::new();
        match self.unmarshal(&mut map) {
            Ok(()) => map,
            Err(e) => {
                warn!("Failed to decode result set as a map: {}", e);
                ValueMap::new()
            }
        }
    }

    /// Every row as a map, rendered as pretty JSON
    pub fn to_json_pretty(&self) -> OgmResult<String> {
        let mut rows: Vec<ValueMap> = Vec::new();
        self.unmarshal(&mut rows)?;
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    /// Print the JSON rendering to stdout under a label
    pub fn print_result(&self, label: &str) -> OgmResult<()> {
        println!("{}: {}", label, self.to_json_pretty()?);
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic during decode: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic during decode: {}", s)
    } else {
        "panic during decode".to_string()
    }
}
