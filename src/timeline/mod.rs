//! Assignment workflow history.
//!
//! Records what happened to an assignment (creation, status changes, and
//! department notes) in an append-only event log, keeps follow-up reminders
//! in their own store, and merges both into a status-grouped timeline when
//! read. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
