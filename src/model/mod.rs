//! Entity model
//!
//! Vertex/edge contracts, identifier keys, field declarations and the
//! value types that flow into generated statements.

pub mod entity;
pub mod field;
pub mod types;

pub use entity::{Edge, EdgeKey, Vertex, VertexKey};
pub use field::{FieldSpec, FieldType, FromRow, Mapped, SKIP_COLUMN};
pub use types::{FieldValue, Policy, DEFAULT_LIMIT, DIRECTION_BIDIRECT, DIRECTION_REVERSELY, E, V};
