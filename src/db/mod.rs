//! Database handle
//!
//! [`Db`] owns the executor, the logger and the configuration. It is a
//! root: it never accumulates statement text itself. Every fluent method
//! starts a fresh [`Chain`] that copies the root's settings, so one `Db` can
//! be shared across threads while each call sequence builds its own
//! statement.

mod chain;
mod select;
mod write;

pub use chain::Chain;
pub use select::Layers;

use crate::config::Config;
use crate::error::OgmResult;
use crate::executor::{Executor, Logger, TracingLogger};
use crate::model::Vertex;
use crate::result::{Decode, ResultSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Root handle for issuing statements
#[derive(Clone)]
pub struct Db {
    executor: Arc<dyn Executor>,
    logger: Arc<dyn Logger>,
    config: Config,
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db").field("config", &self.config).finish()
    }
}

impl Db {
    /// Wrap a connected executor
    pub fn new(executor: Arc<dyn Executor>, config: Config) -> Self {
        Self {
            executor,
            logger: Arc::new(TracingLogger),
            config: config.load_default(),
        }
    }

    /// Connect through `connect` and wrap the resulting executor.
    ///
    /// Callers that cannot continue without a database typically `expect`
    /// on the result.
    pub fn open<E, F>(connect: F, config: Config) -> OgmResult<Self>
    where
        E: Executor + 'static,
        F: FnOnce() -> OgmResult<E>,
    {
        let executor = connect()?;
        let db = Self::new(Arc::new(executor), config);
        info!(
            "Opened graph handle (limit: {}, debug: {})",
            db.config.limit, db.config.debug_mode
        );
        Ok(db)
    }

    /// Replace the logger used for debug-mode statement echo
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Turn on debug mode for every chain started from this handle
    pub fn debug_mode(&mut self) {
        self.config.debug_mode = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Close the underlying executor
    pub fn close(&self) -> OgmResult<()> {
        info!("Closing graph handle");
        self.executor.close()
    }

    /// Run a statement as is
    pub fn execute(&self, stmt: &str) -> OgmResult<ResultSet> {
        self.run(stmt, self.config.debug_mode)
    }

    /// Run a statement and decode its result into `dest`
    pub fn execute_and_parse<D>(&self, stmt: &str, dest: &mut D) -> OgmResult<()>
    where
        D: Decode + ?Sized,
    {
        self.execute(stmt)?.unmarshal(dest)
    }

    pub(crate) fn run(&self, stmt: &str, debug_mode: bool) -> OgmResult<ResultSet> {
        if debug_mode {
            self.logger.info(stmt);
        }
        self.executor.execute(stmt).map_err(|e| {
            debug!("Statement failed: {} ({})", stmt, e);
            e
        })
    }

    /// Start an empty chain
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Start a chain with debug mode on
    pub fn debug(&self) -> Chain<'_> {
        self.chain().debug()
    }

    /// Start a chain with ` match <pattern> `
    pub fn match_(&self, pattern: &str) -> Chain<'_> {
        self.chain().match_(pattern)
    }

    /// Start a chain with a step count
    pub fn go(&self, steps: usize) -> Chain<'_> {
        self.chain().go(steps)
    }

    /// Start a chain from the given vertices
    pub fn from<'a, T, I>(&self, vertices: I) -> Chain<'_>
    where
        T: Vertex + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.chain().from(vertices)
    }

    /// Start a chain with an `over` clause
    pub fn over<I, S>(&self, edges: I) -> Chain<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.chain().over(edges)
    }

    pub fn reversely(&self) -> Chain<'_> {
        self.chain().reversely()
    }

    pub fn bidirect(&self) -> Chain<'_> {
        self.chain().bidirect()
    }

    pub fn where_(&self, cond: &str) -> Chain<'_> {
        self.chain().where_(cond)
    }

    pub fn yield_(&self, projection: &str) -> Chain<'_> {
        self.chain().yield_(projection)
    }

    pub fn group(&self, keys: &str) -> Chain<'_> {
        self.chain().group(keys)
    }

    pub fn limit(&self, limit: usize) -> Chain<'_> {
        self.chain().limit(limit)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::OgmError;
    use crate::result::Value;
    use std::sync::Mutex;

    /// Records statements and answers each with a fixed result
    #[derive(Default)]
    pub struct Recorder {
        pub statements: Mutex<Vec<String>>,
        pub responses: Mutex<Vec<OgmResult<ResultSet>>>,
        pub closed: Mutex<bool>,
    }

    impl Recorder {
        pub fn respond(&self, rs: OgmResult<ResultSet>) {
            self.responses.lock().unwrap().push(rs);
        }

        pub fn statements(&self) -> Vec<String> {
            self.statements.lock().unwrap().clone()
        }
    }

    impl Executor for Recorder {
        fn execute(&self, stmt: &str) -> OgmResult<ResultSet> {
            self.statements.lock().unwrap().push(stmt.to_string());
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Ok(ResultSet::default())
            } else {
                responses.remove(0)
            }
        }

        fn close(&self) -> OgmResult<()> {
            *self.closed.lock().unwrap() = true;
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct Lines(pub Mutex<Vec<String>>);

    impl Logger for Lines {
        fn info(&self, msg: &str) {
            self.0.lock().unwrap().push(msg.to_string());
        }
    }

    pub fn db_with(config: Config) -> (Db, Arc<Recorder>, Arc<Lines>) {
        let recorder = Arc::new(Recorder::default());
        let lines = Arc::new(Lines::default());
        let db = Db::new(recorder.clone(), config).with_logger(lines.clone());
        (db, recorder, lines)
    }

    #[test]
    fn test_open_and_close() {
        let db = Db::open(|| Ok(Recorder::default()), Config::default()).unwrap();
        assert_eq!(db.config().limit, 1000);
        db.close().unwrap();

        let failed = Db::open::<Recorder, _>(
            || Err(OgmError::Transport("connection refused".into())),
            Config::default(),
        );
        assert!(matches!(failed, Err(OgmError::Transport(_))));
    }

    #[test]
    fn test_close_reaches_executor() {
        let (db, recorder, _) = db_with(Config::default());
        db.close().unwrap();
        assert!(*recorder.closed.lock().unwrap());
    }

    #[test]
    fn test_execute_and_parse() {
        let (db, recorder, _) = db_with(Config::default());
        recorder.respond(Ok(
            ResultSet::new(["count"]).with_row(vec![Value::Int(3)])
        ));

        let mut count = 0i64;
        db.execute_and_parse("match (v) return count(v)", &mut count)
            .unwrap();
        assert_eq!(count, 3);
        assert_eq!(recorder.statements(), vec!["match (v) return count(v)"]);
    }

    #[test]
    fn test_executor_error_passes_through() {
        let (db, recorder, _) = db_with(Config::default());
        recorder.respond(Err(OgmError::Execution {
            code: -1009,
            message: "SemanticError".into(),
        }));

        let err = db.execute("bad").unwrap_err();
        assert!(matches!(err, OgmError::Execution { code: -1009, .. }));
    }

    #[test]
    fn test_debug_mode_logs_statement() {
        let (mut db, _, lines) = db_with(Config::default());
        db.execute("show tags").unwrap();
        assert!(lines.0.lock().unwrap().is_empty());

        db.debug_mode();
        db.execute("show tags").unwrap();
        assert_eq!(*lines.0.lock().unwrap(), vec!["show tags"]);
    }
}
