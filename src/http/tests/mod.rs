//! Unit tests for the HTTP module.

mod actor_tests;
mod error_tests;
