//! Vertex and edge contracts
//!
//! Every concrete entity names its own tag or edge type. There is no shared
//! default: a type that forgets `tag_name`/`edge_name` does not compile.

use super::field::Mapped;
use super::types::{FieldValue, Policy};

/// A vertex entity: one tag of one vertex
pub trait Vertex: Mapped + Sync {
    /// Tag name this entity is stored under
    fn tag_name(&self) -> &str;

    /// Vertex id
    fn vid(&self) -> FieldValue;

    /// Encoding policy for the vertex id
    fn policy(&self) -> Policy;
}

/// A directed edge entity
pub trait Edge: Mapped + Sync {
    /// Edge type name
    fn edge_name(&self) -> &str;

    /// Source vertex id
    fn src(&self) -> FieldValue;

    /// Encoding policy for the source vertex id
    fn src_policy(&self) -> Policy;

    /// Destination vertex id
    fn dst(&self) -> FieldValue;

    /// Encoding policy for the destination vertex id
    fn dst_policy(&self) -> Policy;
}

/// Identity of a vertex, embedded in entity structs.
///
/// Not a mapped field: it is never written as a property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexKey {
    pub vid: FieldValue,
    pub policy: Policy,
}

impl VertexKey {
    /// Key with a plain id
    pub fn new(vid: impl Into<FieldValue>) -> Self {
        Self {
            vid: vid.into(),
            policy: Policy::None,
        }
    }

    /// Key whose id is wrapped in `hash(...)`
    pub fn hashed(vid: impl Into<FieldValue>) -> Self {
        Self {
            vid: vid.into(),
            policy: Policy::HashEncode,
        }
    }
}

/// Identity of an edge (source and destination), embedded in entity structs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeKey {
    pub src: FieldValue,
    pub src_policy: Policy,
    pub dst: FieldValue,
    pub dst_policy: Policy,
}

impl EdgeKey {
    /// Key with plain endpoint ids
    pub fn new(src: impl Into<FieldValue>, dst: impl Into<FieldValue>) -> Self {
        Self {
            src: src.into(),
            src_policy: Policy::None,
            dst: dst.into(),
            dst_policy: Policy::None,
        }
    }

    /// Key whose endpoint ids are both wrapped in `hash(...)`
    pub fn hashed(src: impl Into<FieldValue>, dst: impl Into<FieldValue>) -> Self {
        Self {
            src: src.into(),
            src_policy: Policy::HashEncode,
            dst: dst.into(),
            dst_policy: Policy::HashEncode,
        }
    }
}
