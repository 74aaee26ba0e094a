//! Quiz session engine.
//!
//! The controller owns all mutable session state and routes every
//! mutation through its public operations: loading a question caches
//! its reference result, submitting an answer grades the candidate
//! against that cache, and navigation persists the index before
//! reloading. Operations take `&mut self`, so exclusive access during
//! an in-flight operation is a compile-time property.

use crate::catalog::{Catalog, QuestionRecord};
use crate::compare::equivalent;
use crate::config::{ConnectionConfig, SettingsStore};
use crate::db::{QueryExecutor, QueryResult};
use crate::error::{QuizError, Result};
use crate::persistence::ProgressStore;
use tracing::{debug, warn};

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Advance to the next question, wrapping past the last one.
    Next,
    /// Jump to a question by its 1-based display number.
    Jump(usize),
}

/// The outcome of grading a submitted answer.
#[derive(Debug)]
pub struct Verdict {
    /// True when the candidate result is equivalent to the reference.
    pub correct: bool,
    /// The candidate result, kept for display alongside the verdict.
    pub candidate: QueryResult,
}

/// Mutable session state. Owned by the controller; nothing outside it
/// touches the cache or index directly.
#[derive(Debug, Default)]
struct SessionState {
    current_index: usize,
    reference_cache: Option<QueryResult>,
    hint_revealed: bool,
}

/// Orchestrates the quiz session: question traversal, reference
/// execution and caching, answer grading, and progress persistence.
pub struct SessionController {
    catalog: Catalog,
    executor: Box<dyn QueryExecutor>,
    settings: SettingsStore,
    progress: ProgressStore,
    connection: ConnectionConfig,
    state: SessionState,
}

impl SessionController {
    /// Creates a controller, restoring the last question index and the
    /// connection settings from their stores. The restored index is
    /// clamped into the catalog's range in case the corpus shrank.
    ///
    /// Call [`load_question`](Self::load_question) afterwards to run
    /// the first reference query.
    pub fn new(
        catalog: Catalog,
        executor: Box<dyn QueryExecutor>,
        settings: SettingsStore,
        progress: ProgressStore,
    ) -> Self {
        let connection = settings.load_or_init();
        let current_index = progress.load().min(catalog.len() - 1);

        Self {
            catalog,
            executor,
            settings,
            progress,
            connection,
            state: SessionState {
                current_index,
                reference_cache: None,
                hint_revealed: false,
            },
        }
    }

    /// Loads the current question: resets the hint state, drops any
    /// previous reference cache, executes the reference query, and
    /// caches its result.
    ///
    /// On failure the cache stays empty and the error is returned; the
    /// session can still navigate away.
    pub async fn load_question(&mut self) -> Result<()> {
        self.state.hint_revealed = false;
        self.state.reference_cache = None;

        let sql = self.current_question().sql.clone();
        debug!(
            "Loading question {} of {}",
            self.state.current_index + 1,
            self.catalog.len()
        );

        let reference = self.executor.execute(&sql, &self.connection).await?;
        self.state.reference_cache = Some(reference);
        Ok(())
    }

    /// Grades a submitted answer against the cached reference result.
    ///
    /// Blank input is rejected before any query is sent. Executor
    /// failures propagate without a verdict; the session stays ready
    /// for another attempt.
    pub async fn submit_answer(&mut self, sql: &str) -> Result<Verdict> {
        let sql = sql.trim();
        if sql.is_empty() {
            return Err(QuizError::user_input("Please write an SQL query"));
        }

        let Some(reference) = &self.state.reference_cache else {
            return Err(QuizError::ReferenceUnavailable);
        };

        let candidate = self.executor.execute(sql, &self.connection).await?;
        let correct = equivalent(&candidate, reference);

        Ok(Verdict { correct, candidate })
    }

    /// Moves to another question, persisting the new index before the
    /// reference query runs. A failed persist is warned about and the
    /// session continues on in-memory state only.
    pub async fn navigate(&mut self, navigation: Navigation) -> Result<()> {
        let target = match navigation {
            Navigation::Next => (self.state.current_index + 1) % self.catalog.len(),
            Navigation::Jump(n) => {
                if n < 1 || n > self.catalog.len() {
                    return Err(QuizError::user_input(format!(
                        "Please enter a number between 1 and {}",
                        self.catalog.len()
                    )));
                }
                n - 1
            }
        };

        self.state.current_index = target;
        if let Err(e) = self.progress.save(target) {
            warn!("Could not save question progress: {e}");
        }

        self.load_question().await
    }

    /// Marks the hint as revealed and returns its text, if the question
    /// has one. Idempotent; touches neither cache nor index.
    pub fn reveal_hint(&mut self) -> Option<&str> {
        self.state.hint_revealed = true;
        self.current_question().hint.as_deref()
    }

    /// Verifies that the current connection settings can reach the
    /// database, without running a query.
    pub async fn test_connection(&self) -> Result<()> {
        self.executor.ping(&self.connection).await
    }

    /// Replaces the connection settings and overwrites their store.
    /// The in-memory update sticks even when the write fails; the
    /// error is returned so the host can warn.
    pub fn update_connection(&mut self, config: ConnectionConfig) -> Result<()> {
        self.connection = config;
        self.settings.save(&self.connection)
    }

    /// The current question's 0-based index.
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Number of questions in the catalog.
    pub fn question_count(&self) -> usize {
        self.catalog.len()
    }

    /// The current question record.
    pub fn current_question(&self) -> &QuestionRecord {
        self.catalog
            .get(self.state.current_index)
            .expect("current_index is always within the catalog")
    }

    /// The cached reference result, populated between a successful load
    /// and the next navigation.
    pub fn reference_result(&self) -> Option<&QueryResult> {
        self.state.reference_cache.as_ref()
    }

    /// Whether the hint has been revealed for the current question.
    pub fn hint_revealed(&self) -> bool {
        self.state.hint_revealed
    }

    /// The active connection settings.
    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }
}
