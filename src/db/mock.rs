//! Mock query executors for testing.
//!
//! `MockExecutor` returns scripted results keyed by SQL text;
//! `FailingExecutor` refuses every connection. Both keep the session
//! engine testable without a live database.

use super::{QueryExecutor, QueryResult};
use crate::config::ConnectionConfig;
use crate::error::{QuizError, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// Scripted response for a single SQL string.
#[derive(Debug, Clone)]
enum MockResponse {
    Rows(QueryResult),
    QueryError(String),
    ConnectionError(String),
}

/// A mock executor that returns predefined results.
///
/// Unscripted SQL yields a query error, which doubles as a check that
/// the engine only sends the statements a test expects.
#[derive(Debug, Default)]
pub struct MockExecutor {
    responses: HashMap<String, MockResponse>,
}

impl MockExecutor {
    /// Creates a mock executor with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful result for the given SQL.
    pub fn with_result(mut self, sql: &str, result: QueryResult) -> Self {
        self.responses
            .insert(sql.to_string(), MockResponse::Rows(result));
        self
    }

    /// Scripts a database-side failure for the given SQL.
    pub fn with_query_error(mut self, sql: &str, message: &str) -> Self {
        self.responses
            .insert(sql.to_string(), MockResponse::QueryError(message.to_string()));
        self
    }

    /// Scripts a connection failure for the given SQL.
    pub fn with_connection_error(mut self, sql: &str, message: &str) -> Self {
        self.responses.insert(
            sql.to_string(),
            MockResponse::ConnectionError(message.to_string()),
        );
        self
    }
}

#[async_trait]
impl QueryExecutor for MockExecutor {
    async fn execute(&self, sql: &str, _config: &ConnectionConfig) -> Result<QueryResult> {
        match self.responses.get(sql) {
            Some(MockResponse::Rows(result)) => Ok(result.clone()),
            Some(MockResponse::QueryError(msg)) => Err(QuizError::query(msg.clone())),
            Some(MockResponse::ConnectionError(msg)) => Err(QuizError::connection(msg.clone())),
            None => Err(QuizError::query(format!("no scripted result for: {sql}"))),
        }
    }

    async fn ping(&self, _config: &ConnectionConfig) -> Result<()> {
        Ok(())
    }
}

/// An executor that always fails to connect.
#[derive(Debug, Default)]
pub struct FailingExecutor;

impl FailingExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QueryExecutor for FailingExecutor {
    async fn execute(&self, _sql: &str, _config: &ConnectionConfig) -> Result<QueryResult> {
        Err(QuizError::connection("Could not connect to database"))
    }

    async fn ping(&self, _config: &ConnectionConfig) -> Result<()> {
        Err(QuizError::connection("Could not connect to database"))
    }
}
