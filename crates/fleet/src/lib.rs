//! Fleet layer for seaway
//!
//! Provides the entities that move cargo around:
//! - **Port**: stores containers, tracks docked and departed vessels
//! - **Vessel**: carries fuel and cargo under a capacity policy
//! - **Voyage**: fuel planning and the all-or-nothing `sail_to`
//! - **ShipFactory**: fixed size-class configurations
//! - **ShipBuilder**: stepwise configuration with a single `finalize()`
//!
//! Entities here are plain single-owner values. Sharing them across threads
//! is the job of `seaway-engine`, which wraps each one in its own lock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod factory;
pub mod port;
pub mod vessel;
pub mod voyage;

pub use builder::ShipBuilder;
pub use factory::{ShipFactory, SizeClass};
pub use port::Port;
pub use vessel::Vessel;
pub use voyage::{voyage_fuel, VoyagePlan};
