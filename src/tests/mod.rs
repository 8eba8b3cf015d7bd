//! Test modules for the word filter.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Vocabulary parsing
//! - Property-based tests of the tries and the filter against a brute-force oracle
//!
//! Unit tests for individual structures live next to the code they cover.

pub mod config_tests;
pub mod vocabulary_tests;
