//! Core types for the seaway fleet simulation
//!
//! This crate defines the foundational types used throughout the system:
//! - Ids: PortId, VesselId, ContainerId, ItemId
//! - Geo: GeoCoordinate and Haversine great-circle distance
//! - Cargo: Container variants, their weight ranges and fuel coefficients
//! - Capacity: CapacityPolicy admission limits
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capacity;
pub mod cargo;
pub mod error;
pub mod geo;
pub mod ids;

pub use capacity::{AdmissionMode, CapacityPolicy, CapacityViolation, CargoSummary, Category};
pub use cargo::{
    create_container, create_container_from_tag, create_item, Container, ContainerKind, Item,
    ItemKind, BASIC_MAX_WEIGHT,
};
pub use error::{Error, LoadRejected, Result};
pub use geo::{haversine_km, GeoCoordinate, EARTH_RADIUS_KM};
pub use ids::{ContainerId, ItemId, PortId, VesselId};
