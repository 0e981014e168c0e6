//! Harbor engine for seaway
//!
//! This crate makes the fleet layer safe to drive from many threads:
//! - Harbor: arena-indexed registry of ports and vessels, one lock each
//! - Config: `seaway.toml` settings passed explicitly into the harbor
//!
//! The engine is the only component that knows about:
//! - Lock ordering across vessels and ports
//! - Resolving identifiers to live entities

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod harbor;

pub use config::{SeawayConfig, CONFIG_FILE_NAME};
pub use harbor::{Harbor, LoadFailure};
