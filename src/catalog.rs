//! Question catalog for sql-drill.
//!
//! The corpus is a JSON array of question objects, loaded once at
//! startup and read-only afterwards. A missing or malformed corpus is
//! fatal; there is no degraded mode.

use crate::error::{QuizError, Result};
use serde::Deserialize;
use std::path::Path;

/// A single quiz question. Identity is its 0-based position in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    /// Natural-language prompt shown to the user.
    pub title: String,

    /// The authored reference query whose result grades the answer.
    pub sql: String,

    /// Optional hint, revealed on demand.
    #[serde(default)]
    pub hint: Option<String>,
}

/// Immutable, ordered, non-empty list of questions.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<QuestionRecord>,
}

impl Catalog {
    /// Loads the catalog from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            QuizError::catalog(format!("Failed to read {}: {e}", path.display()))
        })?;

        let questions: Vec<QuestionRecord> = serde_json::from_str(&content).map_err(|e| {
            QuizError::catalog(format!("Malformed question file {}: {e}", path.display()))
        })?;

        Self::from_questions(questions)
    }

    /// Builds a catalog from already-parsed questions.
    pub fn from_questions(questions: Vec<QuestionRecord>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::catalog("Question catalog is empty"));
        }
        Ok(Self { questions })
    }

    /// Number of questions in the catalog. Always at least 1.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// A catalog is never empty; this exists for clippy's sake.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at the given 0-based index.
    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_corpus(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_valid_corpus() {
        let (_dir, path) = write_corpus(
            r#"[
                {"title": "List all employees", "sql": "SELECT * FROM employees", "hint": "No filter needed"},
                {"title": "Count departments", "sql": "SELECT COUNT(*) FROM departments"}
            ]"#,
        );

        let catalog = Catalog::load_from_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = catalog.get(0).unwrap();
        assert_eq!(first.title, "List all employees");
        assert_eq!(first.hint.as_deref(), Some("No filter needed"));

        // hint is optional
        assert!(catalog.get(1).unwrap().hint.is_none());
    }

    #[test]
    fn test_load_missing_file_is_catalog_error() {
        let dir = tempdir().unwrap();
        let err = Catalog::load_from_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, QuizError::Catalog(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_load_malformed_json_is_catalog_error() {
        let (_dir, path) = write_corpus("[{\"title\": ");
        let err = Catalog::load_from_file(&path).unwrap_err();
        assert!(matches!(err, QuizError::Catalog(_)));
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let (_dir, path) = write_corpus("[]");
        let err = Catalog::load_from_file(&path).unwrap_err();
        assert!(matches!(err, QuizError::Catalog(_)));
    }

    #[test]
    fn test_get_out_of_range() {
        let catalog = Catalog::from_questions(vec![QuestionRecord {
            title: "q".to_string(),
            sql: "SELECT 1".to_string(),
            hint: None,
        }])
        .unwrap();

        assert!(catalog.get(0).is_some());
        assert!(catalog.get(1).is_none());
    }
}
