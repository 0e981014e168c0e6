//! Seaway - in-memory maritime fleet logistics simulation
//!
//! Seaway models ports, vessels and cargo containers. Containers move between
//! port storage and vessel holds under capacity limits, and vessels sail
//! between ports on fuel computed from great-circle distance and cargo.
//!
//! # Quick Start
//!
//! ```ignore
//! use seaway::{Harbor, Port, PortId, SizeClass, VesselId, ContainerKind, ContainerId, create_container};
//!
//! let harbor = Harbor::new();
//! harbor.add_port(Port::at(PortId::new(1), 34.55, -120.32))?;
//! harbor.add_port(Port::at(PortId::new(2), 34.60, -120.35))?;
//! harbor.commission(SizeClass::Medium, VesselId::new(1), PortId::new(1), 100_000.0)?;
//!
//! let crate_101 = create_container(ContainerKind::Basic, ContainerId::new(101), 1000)?;
//! harbor.load(VesselId::new(1), crate_101)?;
//! let fuel_left = harbor.sail(VesselId::new(1), PortId::new(2))?;
//! ```
//!
//! # Architecture
//!
//! - `seaway-core`: ids, geography, cargo catalog, capacity policy, errors
//! - `seaway-fleet`: single-owner `Port` and `Vessel` values, factory, builder
//! - `seaway-engine`: the thread-safe [`Harbor`] registry and configuration

pub use seaway_core::*;
pub use seaway_engine::{Harbor, LoadFailure, SeawayConfig, CONFIG_FILE_NAME};
pub use seaway_fleet::{voyage_fuel, Port, ShipBuilder, ShipFactory, SizeClass, Vessel, VoyagePlan};
