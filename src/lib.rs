//! sql-drill - a SQL practice engine.
//!
//! Presents questions from a fixed corpus, runs the user's free-form
//! SQL against a live database, and grades it by comparing the data it
//! returns against a pre-authored reference query's result. The
//! presentation layer is a host concern; this crate is the session
//! engine only.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod session;

pub use error::{QuizError, Result};
