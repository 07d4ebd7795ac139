//! Delete statements

use crate::error::{OgmError, OgmResult};
use crate::mapping::encode;
use crate::model::{Edge, Vertex};
use rayon::prelude::*;
use tracing::debug;

fn endpoints<E: Edge + ?Sized>(edge: &E) -> String {
    format!(
        "{} -> {}",
        encode(&edge.src(), edge.src_policy()),
        encode(&edge.dst(), edge.dst_policy())
    )
}

/// `delete vertex <vid> with edge`: the vertex and its incident edges
pub fn delete_vertex<V: Vertex + ?Sized>(vertex: &V) -> String {
    format!(
        "delete vertex {} with edge",
        encode(&vertex.vid(), vertex.policy())
    )
}

/// `delete vertex <vid>,<vid>,... with edge`
pub fn delete_vertex_batch<V: Vertex>(vertices: &[V]) -> OgmResult<String> {
    if vertices.is_empty() {
        return Err(OgmError::EmptyInput);
    }

    let vids: Vec<String> = vertices
        .par_iter()
        .map(|v| encode(&v.vid(), v.policy()))
        .collect();
    debug!("Built vertex batch delete: {} vertices", vids.len());
    Ok(format!("delete vertex {} with edge", vids.join(",")))
}

/// `delete edge <type> <src> -> <dst>`
pub fn delete_edge<E: Edge + ?Sized>(edge: &E) -> String {
    format!("delete edge {} {}", edge.edge_name(), endpoints(edge))
}

/// `delete edge <type> <src> -> <dst>, <src> -> <dst>, ...`
///
/// All edges are deleted under the type of `edges[0]`.
pub fn delete_edge_batch<E: Edge>(edges: &[E]) -> OgmResult<String> {
    let first = edges.first().ok_or(OgmError::EmptyInput)?;

    let pairs: Vec<String> = edges.par_iter().map(|e| endpoints(e)).collect();
    debug!("Built edge batch delete: {} edges", pairs.len());
    Ok(format!(
        "delete edge {} {}",
        first.edge_name(),
        pairs.join(", ")
    ))
}
