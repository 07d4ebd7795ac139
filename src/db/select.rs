//! Neighbourhood reads on [`Db`]
//!
//! The `*_map_*` variants run a subgraph query and return one list of
//! vertex property maps per layer. Layer 0 is the origin vertex.

use super::Db;
use crate::error::OgmResult;
use crate::model::Vertex;
use crate::result::{ResultSet, ValueMap};
use crate::statement::{self, SubgraphDirection};

/// Property maps per traversal layer
pub type Layers = Vec<Vec<ValueMap>>;

impl Db {
    /// The mapped properties of `vertex`, looked up by id
    pub fn get_vertex_by_vid<T: Vertex + ?Sized>(&self, vertex: &T) -> OgmResult<ResultSet> {
        self.execute(&statement::match_vertex(vertex))
    }

    /// Vertices with a path of 1..=`level` `edge` hops into `vertex`
    pub fn get_next_vertex_by_vid<T: Vertex + ?Sized>(
        &self,
        vertex: &T,
        edge: &str,
        level: usize,
    ) -> OgmResult<ResultSet> {
        self.execute(&statement::match_next_vertices(
            vertex,
            edge,
            level,
            self.config.limit,
        ))
    }

    /// Vertices reached from `vertex` over 1..=`level` `edge` hops
    pub fn get_up_vertex_by_vid<T: Vertex + ?Sized>(
        &self,
        vertex: &T,
        edge: &str,
        level: usize,
    ) -> OgmResult<ResultSet> {
        self.execute(&statement::match_up_vertices(
            vertex,
            edge,
            level,
            self.config.limit,
        ))
    }

    fn subgraph_layers<T: Vertex + ?Sized>(
        &self,
        vertex: &T,
        direction: SubgraphDirection,
        edge: &str,
        level: usize,
    ) -> OgmResult<Layers> {
        self.execute(&statement::subgraph(vertex, direction, edge, level))?
            .to_vertex_props()
    }

    /// Outgoing layers 1..=`level`, without the origin
    pub fn get_next_vertex_map_by_vid<T: Vertex + ?Sized>(
        &self,
        vertex: &T,
        edge: &str,
        level: usize,
    ) -> OgmResult<Layers> {
        let layers = self.subgraph_layers(vertex, SubgraphDirection::Out, edge, level)?;
        Ok(without_origin(layers))
    }

    /// Incoming layers 1..=`level`, without the origin
    pub fn get_up_vertex_map_by_vid<T: Vertex + ?Sized>(
        &self,
        vertex: &T,
        edge: &str,
        level: usize,
    ) -> OgmResult<Layers> {
        let layers = self.subgraph_layers(vertex, SubgraphDirection::In, edge, level)?;
        Ok(without_origin(layers))
    }

    /// Layers 0..=`level` following edges either way.
    ///
    /// Empty when the origin vertex itself was not found.
    pub fn get_both_all_vertex_by_vid<T: Vertex + ?Sized>(
        &self,
        vertex: &T,
        edge: &str,
        level: usize,
    ) -> OgmResult<Layers> {
        let layers = self.subgraph_layers(vertex, SubgraphDirection::Both, edge, level)?;
        Ok(drop_if_no_origin(layers))
    }

    /// Outgoing and incoming layers merged by depth.
    ///
    /// Layer 0 is the origin as returned by the outgoing query; deeper layers
    /// hold outgoing vertices followed by incoming ones.
    pub fn get_both_vertex_by_vid<T: Vertex + ?Sized>(
        &self,
        vertex: &T,
        edge: &str,
        level: usize,
    ) -> OgmResult<Layers> {
        let out = self.subgraph_layers(vertex, SubgraphDirection::Out, edge, level)?;
        let inc = self.subgraph_layers(vertex, SubgraphDirection::In, edge, level)?;
        Ok(drop_if_no_origin(merge_layers(out, inc)))
    }
}

fn without_origin(mut layers: Layers) -> Layers {
    if layers.len() <= 1 {
        return Vec::new();
    }
    layers.remove(0);
    layers
}

fn drop_if_no_origin(layers: Layers) -> Layers {
    match layers.first() {
        Some(origin) if origin.is_empty() => Vec::new(),
        _ => layers,
    }
}

fn merge_layers(out: Layers, inc: Layers) -> Layers {
    let depth = out.len().max(inc.len());
    let mut merged: Layers = vec![Vec::new(); depth];
    for (i, layer) in out.into_iter().enumerate() {
        merged[i].extend(layer);
    }
    for (i, layer) in inc.into_iter().enumerate().skip(1) {
        merged[i].extend(layer);
    }
    merged
}
