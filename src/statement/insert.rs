//! Insert statements for vertices and edges
//!
//! A plain insert overwrites every mapped property of an existing id: fields
//! left at their default are written as zero values. The `if not exists`
//! forms only check identity, not property values, and cost the server an
//! extra read.

use crate::error::{OgmError, OgmResult};
use crate::mapping::{encode, extract};
use crate::model::{Edge, Vertex};
use rayon::prelude::*;
use tracing::debug;

fn vertex_values<V: Vertex + ?Sized>(vertex: &V) -> String {
    let (_, values) = extract(vertex);
    format!(
        "{}:({})",
        encode(&vertex.vid(), vertex.policy()),
        values.join(",")
    )
}

fn edge_values<E: Edge + ?Sized>(edge: &E) -> String {
    let (_, values) = extract(edge);
    format!(
        "{} -> {}:({})",
        encode(&edge.src(), edge.src_policy()),
        encode(&edge.dst(), edge.dst_policy()),
        values.join(",")
    )
}

fn insert_vertex_with<V: Vertex + ?Sized>(keyword: &str, vertex: &V) -> String {
    let (columns, _) = extract(vertex);
    format!(
        "{} {}({}) values {}",
        keyword,
        vertex.tag_name(),
        columns.join(","),
        vertex_values(vertex)
    )
}

fn insert_edge_with<E: Edge + ?Sized>(keyword: &str, edge: &E) -> String {
    let (columns, _) = extract(edge);
    format!(
        "{} {}({}) values {}",
        keyword,
        edge.edge_name(),
        columns.join(","),
        edge_values(edge)
    )
}

/// `insert vertex <tag>(<cols>) values <vid>:(<vals>)`
pub fn insert_vertex<V: Vertex + ?Sized>(vertex: &V) -> String {
    insert_vertex_with("insert vertex", vertex)
}

/// `insert vertex if not exists <tag>(<cols>) values <vid>:(<vals>)`
pub fn insert_vertex_if_not_exists<V: Vertex + ?Sized>(vertex: &V) -> String {
    insert_vertex_with("insert vertex if not exists", vertex)
}

/// One insert for many vertices of the tag of `vertices[0]`.
///
/// Columns come from the first vertex. Per-vertex values are built in
/// parallel and joined in input order.
pub fn insert_vertex_batch<V: Vertex>(vertices: &[V]) -> OgmResult<String> {
    let first = vertices.first().ok_or(OgmError::EmptyInput)?;
    let (columns, _) = extract(first);

    let values: Vec<String> = vertices.par_iter().map(|v| vertex_values(v)).collect();
    let stmt = format!(
        "insert vertex {}({}) values {}",
        first.tag_name(),
        columns.join(","),
        values.join(", ")
    );
    debug!("Built vertex batch insert: {} vertices, {} bytes", vertices.len(), stmt.len());
    Ok(stmt)
}

/// `insert edge <type>(<cols>) values <src> -> <dst>:(<vals>)`
pub fn insert_edge<E: Edge + ?Sized>(edge: &E) -> String {
    insert_edge_with("insert edge", edge)
}

/// `insert edge if not exists <type>(<cols>) values <src> -> <dst>:(<vals>)`
pub fn insert_edge_if_not_exists<E: Edge + ?Sized>(edge: &E) -> String {
    insert_edge_with("insert edge if not exists", edge)
}

/// One insert for many edges of the type of `edges[0]`
pub fn insert_edge_batch<E: Edge>(edges: &[E]) -> OgmResult<String> {
    let first = edges.first().ok_or(OgmError::EmptyInput)?;
    let (columns, _) = extract(first);

    let values: Vec<String> = edges.par_iter().map(|e| edge_values(e)).collect();
    let stmt = format!(
        "insert edge {}({}) values {}",
        first.edge_name(),
        columns.join(","),
        values.join(", ")
    );
    debug!("Built edge batch insert: {} edges, {} bytes", edges.len(), stmt.len());
    Ok(stmt)
}
