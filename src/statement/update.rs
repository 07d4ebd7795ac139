//! Update and upsert statements
//!
//! `update` only touches an existing vertex/edge and is a no-op otherwise.
//! `upsert` creates the target when it is missing. Both take a raw `set`
//! fragment (required) and an optional `when` condition, and yield the
//! entity's mapped columns so the caller sees the resulting properties.

use crate::error::{OgmError, OgmResult};
use crate::mapping::{columns, encode, yield_clause};
use crate::model::{Edge, Mapped, Vertex};

#[derive(Clone, Copy)]
enum Mode {
    Update,
    Upsert,
}

impl Mode {
    fn keyword(self) -> &'static str {
        match self {
            Mode::Update => "update",
            Mode::Upsert => "upsert",
        }
    }
}

fn finish<M: Mapped + ?Sized>(
    mut stmt: String,
    entity: &M,
    set: &str,
    when: Option<&str>,
) -> OgmResult<String> {
    let set = set.trim();
    if set.is_empty() {
        return Err(OgmError::SetFragmentRequired);
    }
    stmt.push_str(" set ");
    stmt.push_str(set);

    if let Some(cond) = when.map(str::trim).filter(|c| !c.is_empty()) {
        stmt.push_str(" when ");
        stmt.push_str(cond);
    }

    let yields = yield_clause(&columns(entity));
    if !yields.is_empty() {
        stmt.push_str(" yield ");
        stmt.push_str(&yields);
    }
    Ok(stmt)
}

fn vertex_stmt<V: Vertex + ?Sized>(
    mode: Mode,
    vertex: &V,
    set: &str,
    when: Option<&str>,
) -> OgmResult<String> {
    let head = format!(
        "{} vertex on {} {}",
        mode.keyword(),
        vertex.tag_name(),
        encode(&vertex.vid(), vertex.policy())
    );
    finish(head, vertex, set, when)
}

fn edge_stmt<E: Edge + ?Sized>(
    mode: Mode,
    edge: &E,
    set: &str,
    when: Option<&str>,
) -> OgmResult<String> {
    let head = format!(
        "{} edge on {} {} -> {}",
        mode.keyword(),
        edge.edge_name(),
        encode(&edge.src(), edge.src_policy()),
        encode(&edge.dst(), edge.dst_policy())
    );
    finish(head, edge, set, when)
}

/// `update vertex on <tag> <vid> set <set> [when <cond>] yield <cols>`
pub fn update_vertex<V: Vertex + ?Sized>(
    vertex: &V,
    set: &str,
    when: Option<&str>,
) -> OgmResult<String> {
    vertex_stmt(Mode::Update, vertex, set, when)
}

/// `upsert vertex on <tag> <vid> set <set> [when <cond>] yield <cols>`
pub fn upsert_vertex<V: Vertex + ?Sized>(
    vertex: &V,
    set: &str,
    when: Option<&str>,
) -> OgmResult<String> {
    vertex_stmt(Mode::Upsert, vertex, set, when)
}

/// `update edge on <type> <src> -> <dst> set <set> [when <cond>] yield <cols>`
pub fn update_edge<E: Edge + ?Sized>(edge: &E, set: &str, when: Option<&str>) -> OgmResult<String> {
    edge_stmt(Mode::Update, edge, set, when)
}

/// `upsert edge on <type> <src> -> <dst> set <set> [when <cond>] yield <cols>`
pub fn upsert_edge<E: Edge + ?Sized>(edge: &E, set: &str, when: Option<&str>) -> OgmResult<String> {
    edge_stmt(Mode::Upsert, edge, set, when)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::tests::{knows, person};

    #[test]
    fn test_update_vertex() {
        let p = person("p1", "alice", 30);
        assert_eq!(
            update_vertex(&p, "age = age + 1", None).unwrap(),
            "update vertex on person 'p1' set age = age + 1 yield name as name,age as age"
        );
        assert_eq!(
            update_vertex(&p, "age = 31", Some("age < 31")).unwrap(),
            "update vertex on person 'p1' set age = 31 when age < 31 yield name as name,age as age"
        );
    }

    #[test]
    fn test_upsert_vertex() {
        let p = person("p1", "alice", 30);
        assert_eq!(
            upsert_vertex(&p, "name = 'X'", Some("")).unwrap(),
            "upsert vertex on person 'p1' set name = 'X' yield name as name,age as age"
        );
    }

    #[test]
    fn test_set_required() {
        let p = person("p1", "alice", 30);
        assert!(matches!(
            update_vertex(&p, "", None),
            Err(OgmError::SetFragmentRequired)
        ));
        assert!(matches!(
            upsert_edge(&knows("a", "b", 1), "  ", None),
            Err(OgmError::SetFragmentRequired)
        ));
    }

    #[test]
    fn test_edge_statements() {
        let e = knows("a", "b", 1);
        assert_eq!(
            update_edge(&e, "weight = 2", None).unwrap(),
            "update edge on knows hash('a') -> hash('b') set weight = 2 yield weight as weight"
        );
        assert_eq!(
            upsert_edge(&e, "weight = 2", Some("weight > 0")).unwrap(),
            "upsert edge on knows hash('a') -> hash('b') set weight = 2 when weight > 0 yield weight as weight"
        );
    }
}
