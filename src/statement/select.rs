//! Neighbourhood query statements

use crate::mapping::{columns, encode, vertex_return_clause};
use crate::model::{Vertex, V};
use std::fmt;

/// Edge direction for subgraph queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubgraphDirection {
    Out,
    In,
    Both,
}

impl SubgraphDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubgraphDirection::Out => "out",
            SubgraphDirection::In => "in",
            SubgraphDirection::Both => "both",
        }
    }
}

impl fmt::Display for SubgraphDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn return_clause<T: Vertex + ?Sized>(vertex: &T) -> String {
    vertex_return_clause(vertex.tag_name(), &columns(vertex))
}

/// `match(v:<tag>) where id(v)==<vid> return v.<tag>.<col> as <col>,...`
pub fn match_vertex<T: Vertex + ?Sized>(vertex: &T) -> String {
    format!(
        "match({}:{}) where id({})=={} return {}",
        V,
        vertex.tag_name(),
        V,
        encode(&vertex.vid(), vertex.policy()),
        return_clause(vertex)
    )
}

/// Vertices reaching `vertex` over `edge` in 1..=`level` hops
pub fn match_next_vertices<T: Vertex + ?Sized>(
    vertex: &T,
    edge: &str,
    level: usize,
    limit: usize,
) -> String {
    format!(
        "match p=({})<-[:{}*1..{}]-(n) where id(n)=={} return {} limit {}",
        V,
        edge,
        level,
        encode(&vertex.vid(), vertex.policy()),
        return_clause(vertex),
        limit
    )
}

/// Vertices reachable from `vertex` over `edge` in 1..=`level` hops
pub fn match_up_vertices<T: Vertex + ?Sized>(
    vertex: &T,
    edge: &str,
    level: usize,
    limit: usize,
) -> String {
    format!(
        "match p=(n)<-[:{}*1..{}]-({}) where id(n)=={} return {} limit {}",
        edge,
        level,
        V,
        encode(&vertex.vid(), vertex.policy()),
        return_clause(vertex),
        limit
    )
}

/// `get subgraph with prop <level+1> steps from <vid> <dir> <edge> yield vertices as v`
///
/// One result row per layer, the first being the origin vertex.
pub fn subgraph<T: Vertex + ?Sized>(
    vertex: &T,
    direction: SubgraphDirection,
    edge: &str,
    level: usize,
) -> String {
    format!(
        "get subgraph with prop {} steps from {} {} {} yield vertices as {}",
        level + 1,
        encode(&vertex.vid(), vertex.policy()),
        direction,
        edge,
        V
    )
}
