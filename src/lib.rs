//! Filingtrail: workflow history for compliance filing assignments.
//!
//! This crate records the history of compliance assignments as they move
//! through a filing workflow, schedules follow-up reminders against them, and
//! serves a status-grouped timeline of everything that happened.
//!
//! # Architecture
//!
//! Filingtrail follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`timeline`]: Event log, reminders, and timeline aggregation
//! - [`http`]: JSON API over the timeline services
//! - [`config`]: Server configuration

pub mod config;
pub mod http;
pub mod timeline;
