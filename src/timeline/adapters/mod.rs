//! Adapters for the timeline ports.
//!
//! - [`memory`]: thread-safe in-memory stores for tests and local runs
//! - [`postgres`]: `PostgreSQL` persistence using Diesel ORM

pub mod memory;
pub mod postgres;
