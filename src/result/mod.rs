//! Query results and their decoding
//!
//! A [`ResultSet`] holds wire [`Value`]s. [`ResultSet::unmarshal`] decodes it
//! into any [`Decode`] destination; [`ResultSet::to_vertex_props`] flattens
//! traversal results into per-row vertex property maps.

pub mod decode;
pub mod native;
pub mod result_set;
pub mod value;

pub use decode::{Decode, DecodeRow};
pub use native::{to_native, Native, StringMap, ValueMap};
pub use result_set::{ResultSet, Row};
pub use value::{Node, Path, Relationship, Step, Tag, Value};
