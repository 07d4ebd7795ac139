//! Executor and logger contracts
//!
//! The mapping layer never talks to the network itself. A driver (session
//! pool, embedded engine, test double) implements [`Executor`]; debug output
//! goes through [`Logger`].

use crate::error::OgmResult;
use crate::result::ResultSet;
use tracing::info;

/// Runs statements against the graph database.
///
/// Implementations must report every failure as an error, including a
/// non-success status from the server (see
/// [`check_status`](crate::error::check_status)). An empty `ResultSet` always
/// means the statement succeeded and returned no rows.
pub trait Executor: Send + Sync {
    /// Execute one statement
    fn execute(&self, stmt: &str) -> OgmResult<ResultSet>;

    /// Release the underlying connection resources
    fn close(&self) -> OgmResult<()>;
}

/// Sink for debug-mode statement echo
pub trait Logger: Send + Sync {
    fn info(&self, msg: &str);
}

/// Logs through `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, msg: &str) {
        info!(target: "nebula_ogm::statement", "{}", msg);
    }
}
