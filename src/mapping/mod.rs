//! Entity to statement-fragment mapping
//!
//! - [`encode`]: identifier and value literals
//! - [`reflect`]: column/value extraction, projection clauses, cached column maps
//! - [`mapped!`](crate::mapped): per-type field declarations

pub mod encode;
mod macros;
pub mod reflect;

pub use encode::encode;
pub use reflect::{column_map, columns, extract, vertex_return_clause, yield_clause, ColumnMap};
