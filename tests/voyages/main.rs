//! Voyage and Cargo Integration Tests
//!
//! End-to-end flows through the public API: building fleets, moving cargo
//! between ports and vessels, and sailing on computed fuel.

#[path = "../common/mod.rs"]
mod common;

mod cargo_flow;
mod scenarios;
