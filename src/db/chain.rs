//! Fluent statement builder

use super::Db;
use crate::error::OgmResult;
use crate::mapping::encode;
use crate::model::{Vertex, DIRECTION_BIDIRECT, DIRECTION_REVERSELY};
use crate::result::{Decode, ResultSet};

/// One call sequence started from a [`Db`].
///
/// Owns its statement text and settings: methods take `self`, append their
/// fragment and hand the same chain back. Two chains started from the same
/// `Db` never share text. A terminal call (`execute`, `return_row`,
/// `return_into`) consumes the chain.
#[derive(Debug, Clone)]
#[must_use = "a chain does nothing until a terminal method runs it"]
pub struct Chain<'db> {
    db: &'db Db,
    stmt: String,
    debug: bool,
    limit: usize,
}

impl<'db> Chain<'db> {
    pub(crate) fn new(db: &'db Db) -> Self {
        Self {
            db,
            stmt: String::new(),
            debug: db.config().debug_mode,
            limit: db.config().limit,
        }
    }

    /// Statement text accumulated so far
    pub fn statement(&self) -> &str {
        &self.stmt
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Row limit carried by this chain
    pub fn row_limit(&self) -> usize {
        self.limit
    }

    /// Log the statement before it runs
    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// ` match <pattern> `
    pub fn match_(mut self, pattern: &str) -> Self {
        self.stmt.push_str(&format!(" match {} ", pattern));
        self
    }

    /// ` go 1 to <steps> steps ` for more than one step, nothing otherwise
    pub fn go(mut self, steps: usize) -> Self {
        if steps > 1 {
            self.stmt.push_str(&format!(" go 1 to {} steps ", steps));
        }
        self
    }

    /// ` from <vid>,<vid> `, opening with ` go ` when nothing precedes it
    pub fn from<'a, T, I>(mut self, vertices: I) -> Self
    where
        T: Vertex + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let vids: Vec<String> = vertices
            .into_iter()
            .map(|v| encode(&v.vid(), v.policy()))
            .collect();
        if self.stmt.is_empty() {
            self.stmt.push_str(" go ");
        }
        self.stmt.push_str(&format!(" from {} ", vids.join(",")));
        self
    }

    /// ` over <edge>,<edge> `, or ` over * ` for no edges
    pub fn over<I, S>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = edges
            .into_iter()
            .map(|e| e.as_ref().to_string())
            .collect();
        if names.is_empty() {
            self.stmt.push_str(" over * ");
        } else {
            self.stmt.push_str(&format!(" over {} ", names.join(",")));
        }
        self
    }

    pub fn reversely(mut self) -> Self {
        self.stmt.push_str(&format!(" {} ", DIRECTION_REVERSELY));
        self
    }

    pub fn bidirect(mut self) -> Self {
        self.stmt.push_str(&format!(" {} ", DIRECTION_BIDIRECT));
        self
    }

    /// ` where <cond> `
    pub fn where_(mut self, cond: &str) -> Self {
        self.stmt.push_str(&format!(" where {} ", cond));
        self
    }

    /// ` yield <projection> `
    pub fn yield_(mut self, projection: &str) -> Self {
        self.stmt.push_str(&format!(" yield {} ", projection));
        self
    }

    /// ` | group by <keys> `
    pub fn group(mut self, keys: &str) -> Self {
        self.stmt.push_str(&format!(" | group by {} ", keys));
        self
    }

    /// ` limit <n> `, also recorded as the chain's row limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self.stmt.push_str(&format!(" limit {} ", limit));
        self
    }

    /// Run the accumulated statement
    pub fn execute(self) -> OgmResult<ResultSet> {
        self.db.run(self.stmt.trim(), self.debug)
    }

    /// Run the accumulated statement and return the raw rows
    pub fn return_row(self) -> OgmResult<ResultSet> {
        self.execute()
    }

    /// Run the accumulated statement and decode the result into `dest`
    pub fn return_into<D>(self, dest: &mut D) -> OgmResult<()>
    where
        D: Decode + ?Sized,
    {
        self.execute()?.unmarshal(dest)
    }
}
