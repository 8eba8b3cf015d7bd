//! Error module for the word filter.
//!
//! This module provides the error handling framework for the crate: one
//! `thiserror` enum per concern, a top-level [`WordFilterError`] that wraps
//! them, and a small reporting layer that routes errors into `tracing`.
//!
//! Query operations never fail. Everything here is raised while loading
//! configuration, reading a vocabulary, or building the tries.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::data_structures::affix_trie::TrieError;

pub mod config;
pub mod vocabulary;

/// Result type alias used throughout the crate.
pub type WordFilterResult<T> = Result<T, WordFilterError>;

/// Core error enum for the word filter.
#[derive(Error, Debug)]
pub enum WordFilterError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while loading the vocabulary.
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] vocabulary::VocabularyError),

    /// Errors raised while building the tries.
    #[error("Index build error: {0}")]
    Trie(#[from] TrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: WordFilterError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: WordFilterError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Error reporting front end holding an optional reporter.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Creates a front end that forwards to `reporter`.
    pub fn with_reporter(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            reporter: Some(reporter),
        }
    }

    /// Report an error with context.
    pub fn report(&self, context: ErrorContext) {
        if let Some(reporter) = &self.reporter {
            reporter.report(context);
        } else {
            // Fallback to standard error output if no reporter is configured
            eprintln!("Error: {context}");
        }
    }
}

/// Process-wide error reporting, set at most once.
static ERROR_REPORTING: OnceCell<ErrorReporting> = OnceCell::new();

/// Get the global error reporting instance.
///
/// Falls back to a reporter-less instance (stderr) if none was installed.
pub fn get_error_reporting() -> &'static ErrorReporting {
    ERROR_REPORTING.get_or_init(ErrorReporting::default)
}

/// Set the global error reporter.
///
/// Returns `false` if a reporter was already installed or reporting was
/// already used; the existing one is kept.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    let installed = ERROR_REPORTING
        .set(ErrorReporting::with_reporter(reporter))
        .is_ok();
    if !installed {
        tracing::warn!("Error reporter was already initialized, ignoring new reporter");
    }
    installed
}
