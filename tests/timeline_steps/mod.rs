//! Step definitions for assignment timeline scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
