//! Unit tests for the timeline module.
//!
//! Tests are organised by domain concept, then by service, with row
//! conversion tests for the `PostgreSQL` adapter kept separate from any
//! database.

mod support;
