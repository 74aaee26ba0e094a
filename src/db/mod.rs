//! Database execution boundary for sql-drill.
//!
//! Provides a trait-based interface for running a single SQL statement
//! against an external database, so the session engine is testable with
//! an in-memory fake.

mod mock;
mod postgres;
mod types;

pub use mock::{FailingExecutor, MockExecutor};
pub use postgres::PostgresExecutor;
pub use types::{ColumnInfo, QueryResult, Row, Value};

use crate::config::ConnectionConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Trait defining the query execution boundary.
///
/// Each call owns its connection for the duration of the call: the
/// connection is opened from `config`, used for exactly one statement,
/// and released on every exit path. The config is re-read per call, so
/// settings changes apply to the next execution.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Executes `sql` verbatim as a single row-returning statement and
    /// materializes the full result set.
    ///
    /// Connect failures surface as `QuizError::Connection` without the
    /// query being attempted; database-side failures surface as
    /// `QuizError::Query` carrying the driver's message verbatim.
    async fn execute(&self, sql: &str, config: &ConnectionConfig) -> Result<QueryResult>;

    /// Opens and immediately closes a connection, verifying that the
    /// configuration can reach the database.
    async fn ping(&self, config: &ConnectionConfig) -> Result<()>;
}
