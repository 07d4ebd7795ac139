//! Nebula Graph OGM
//!
//! Maps typed vertices and edges to nGQL statements and decodes query
//! results back into maps and structs.
//!
//! # Layers
//!
//! - [`model`]: `Vertex`/`Edge` contracts, identifier keys, field values
//! - [`mapping`]: literal encoding, field extraction, the [`mapped!`] macro
//! - [`statement`]: insert / update / upsert / delete / neighbourhood templates
//! - [`result`]: wire values, result sets and decoding
//! - [`db`]: the [`Db`] handle and the fluent [`Chain`] builder
//!
//! The network side is not part of this crate. Plug in any driver by
//! implementing [`Executor`].
//!
//! ## Example Usage
//!
//! ```rust
//! use nebula_ogm::model::{FieldValue, Policy, Vertex, VertexKey};
//! use nebula_ogm::{mapped, statement};
//!
//! #[derive(Debug, Default)]
//! pub struct Person {
//!     pub key: VertexKey,
//!     pub name: String,
//!     pub age: i64,
//! }
//!
//! mapped!(Person {
//!     name => "name",
//!     age => "age",
//! });
//!
//! impl Vertex for Person {
//!     fn tag_name(&self) -> &str {
//!         "person"
//!     }
//!     fn vid(&self) -> FieldValue {
//!         self.key.vid.clone()
//!     }
//!     fn policy(&self) -> Policy {
//!         self.key.policy
//!     }
//! }
//!
//! let alice = Person {
//!     key: VertexKey::new("alice"),
//!     name: "Alice".into(),
//!     age: 30,
//! };
//!
//! assert_eq!(
//!     statement::insert_vertex(&alice),
//!     "insert vertex person(name,age) values 'alice':('Alice',30)"
//! );
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod db;
pub mod error;
pub mod executor;
pub mod mapping;
pub mod model;
pub mod result;
pub mod statement;

// Re-export main types for convenience
pub use config::Config;
pub use db::{Chain, Db};
pub use error::{check_status, OgmError, OgmResult};
pub use executor::{Executor, Logger, TracingLogger};
pub use model::{Edge, EdgeKey, FieldValue, Policy, Vertex, VertexKey};
pub use result::{Decode, Native, ResultSet, StringMap, Value, ValueMap};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
