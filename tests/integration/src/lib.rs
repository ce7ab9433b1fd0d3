//! Integration test utilities for Flockr
//!
//! Scenario tests drive the service layer end to end over a manual clock.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
