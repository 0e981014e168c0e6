//! Identifier types for the simulation
//!
//! This module defines the integer identifiers used to address entities:
//! - PortId: identifies a port in the harbor registry
//! - VesselId: identifies a vessel in the harbor registry
//! - ContainerId: identifies a cargo container
//! - ItemId: identifies a catalog item packed into a container
//!
//! Identifiers are plain `u64` newtypes. They are ordered so that the engine
//! can derive a global lock-acquisition order from them. Uniqueness of
//! container identifiers is the caller's responsibility.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the raw identifier
            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a port
    PortId,
    "port"
);

define_id!(
    /// Identifier of a vessel
    VesselId,
    "vessel"
);

define_id!(
    /// Identifier of a cargo container
    ContainerId,
    "container"
);

define_id!(
    /// Identifier of a catalog item
    ItemId,
    "item"
);
