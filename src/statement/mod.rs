//! Statement generators
//!
//! Pure functions from entities to nGQL text. Nothing here checks names
//! against a live schema; the server reports unknown tags and columns.

pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

pub use delete::{delete_edge, delete_edge_batch, delete_vertex, delete_vertex_batch};
pub use insert::{
    insert_edge, insert_edge_batch, insert_edge_if_not_exists, insert_vertex, insert_vertex_batch,
    insert_vertex_if_not_exists,
};
pub use select::{match_next_vertices, match_up_vertices, match_vertex, subgraph, SubgraphDirection};
pub use update::{update_edge, update_vertex, upsert_edge, upsert_vertex};
