//! Write operations on [`Db`]

use super::Db;
use crate::error::OgmResult;
use crate::model::{Edge, Vertex};
use crate::result::ResultSet;
use crate::statement;

impl Db {
    /// Insert a vertex, overwriting every mapped property if it exists
    pub fn insert_vertex<V: Vertex + ?Sized>(&self, vertex: &V) -> OgmResult<()> {
        self.execute(&statement::insert_vertex(vertex))?;
        Ok(())
    }

    /// Insert a vertex only if its id is not present under the tag
    pub fn insert_vertex_ignore<V: Vertex + ?Sized>(&self, vertex: &V) -> OgmResult<()> {
        self.execute(&statement::insert_vertex_if_not_exists(vertex))?;
        Ok(())
    }

    pub fn insert_vertex_batch<V: Vertex>(&self, vertices: &[V]) -> OgmResult<()> {
        self.execute(&statement::insert_vertex_batch(vertices)?)?;
        Ok(())
    }

    /// Insert an edge, overwriting every mapped property if it exists
    pub fn insert_edge<E: Edge + ?Sized>(&self, edge: &E) -> OgmResult<()> {
        self.execute(&statement::insert_edge(edge))?;
        Ok(())
    }

    /// Insert an edge only if it is not present
    pub fn insert_edge_ignore<E: Edge + ?Sized>(&self, edge: &E) -> OgmResult<()> {
        self.execute(&statement::insert_edge_if_not_exists(edge))?;
        Ok(())
    }

    pub fn insert_edge_batch<E: Edge>(&self, edges: &[E]) -> OgmResult<()> {
        self.execute(&statement::insert_edge_batch(edges)?)?;
        Ok(())
    }

    /// Update an existing vertex; returns the yielded properties (no rows if
    /// the vertex does not exist)
    pub fn update_vertex<V: Vertex + ?Sized>(
        &self,
        vertex: &V,
        set: &str,
        when: Option<&str>,
    ) -> OgmResult<ResultSet> {
        self.execute(&statement::update_vertex(vertex, set, when)?)
    }

    /// Update or create a vertex; returns the yielded properties
    pub fn upsert_vertex<V: Vertex + ?Sized>(
        &self,
        vertex: &V,
        set: &str,
        when: Option<&str>,
    ) -> OgmResult<ResultSet> {
        self.execute(&statement::upsert_vertex(vertex, set, when)?)
    }

    pub fn update_edge<E: Edge + ?Sized>(
        &self,
        edge: &E,
        set: &str,
        when: Option<&str>,
    ) -> OgmResult<ResultSet> {
        self.execute(&statement::update_edge(edge, set, when)?)
    }

    pub fn upsert_edge<E: Edge + ?Sized>(
        &self,
        edge: &E,
        set: &str,
        when: Option<&str>,
    ) -> OgmResult<ResultSet> {
        self.execute(&statement::upsert_edge(edge, set, when)?)
    }

    /// Delete a vertex together with its edges
    pub fn delete_vertex<V: Vertex + ?Sized>(&self, vertex: &V) -> OgmResult<()> {
        self.execute(&statement::delete_vertex(vertex))?;
        Ok(())
    }

    pub fn delete_vertex_batch<V: Vertex>(&self, vertices: &[V]) -> OgmResult<()> {
        self.execute(&statement::delete_vertex_batch(vertices)?)?;
        Ok(())
    }

    pub fn delete_edge<E: Edge + ?Sized>(&self, edge: &E) -> OgmResult<()> {
        self.execute(&statement::delete_edge(edge))?;
        Ok(())
    }

    /// Delete edges by endpoints, all under the type of `edges[0]`
    pub fn delete_edge_batch<E: Edge>(&self, edges: &[E]) -> OgmResult<()> {
        self.execute(&statement::delete_edge_batch(edges)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::db::tests::db_with;
    use crate::error::OgmError;
    use crate::statement::tests::{knows, person, Person};

    #[test]
    fn test_writes_issue_statements() {
        let (db, recorder, _) = db_with(Config::default());
        let p = person("p1", "alice", 30);

        db.insert_vertex(&p).unwrap();
        db.insert_vertex_ignore(&p).unwrap();
        db.insert_edge(&knows("p1", "p2", 1)).unwrap();
        db.delete_vertex(&p).unwrap();
        db.delete_edge_batch(&[knows("p1", "p2", 0), knows("p1", "p3", 0)])
            .unwrap();

        assert_eq!(
            recorder.statements(),
            vec![
                "insert vertex person(name,age) values 'p1':('alice',30)",
                "insert vertex if not exists person(name,age) values 'p1':('alice',30)",
                "insert edge knows(weight) values hash('p1') -> hash('p2'):(1)",
                "delete vertex 'p1' with edge",
                "delete edge knows hash('p1') -> hash('p2'), hash('p1') -> hash('p3')",
            ]
        );
    }

    #[test]
    fn test_invalid_input_never_reaches_executor() {
        let (db, recorder, _) = db_with(Config::default());
        let none: Vec<Person> = Vec::new();

        assert!(matches!(
            db.insert_vertex_batch(&none),
            Err(OgmError::EmptyInput)
        ));
        assert!(matches!(
            db.upsert_vertex(&person("p1", "a", 1), "", None),
            Err(OgmError::SetFragmentRequired)
        ));
        assert!(recorder.statements().is_empty());
    }
}
