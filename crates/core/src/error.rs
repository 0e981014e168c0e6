//! Error types for the seaway simulation
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Taxonomy
//!
//! | Variant            | Nature                                         |
//! |--------------------|------------------------------------------------|
//! | Validation         | permanent, never retried                       |
//! | CapacityExceeded   | retryable with another container or after unloading |
//! | ContainerNotFound  | recoverable caller error                       |
//! | InvalidFuel        | permanent, never retried                       |
//! | InsufficientFuel   | retryable after refuelling                     |
//! | NoOpVoyage         | informational, nothing happened                |
//! | UseAfterFinalize   | programmer error in a builder sequence         |

use crate::capacity::CapacityViolation;
use crate::cargo::{Container, ContainerKind};
use crate::ids::{ContainerId, PortId, VesselId};
use thiserror::Error;

/// Result type alias for seaway operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the seaway simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Container weight is outside its variant's range
    #[error("Validation error: {kind} container weighing {weight}: {reason}")]
    Validation {
        /// Requested variant
        kind: ContainerKind,
        /// Requested weight
        weight: u32,
        /// Which bound was violated
        reason: &'static str,
    },

    /// Variant tag does not name a known container or item kind
    #[error("Unknown variant: {0:?}")]
    UnknownVariant(String),

    /// Size class tag does not name a factory configuration
    #[error("Unknown size class: {0:?}")]
    UnknownSizeClass(String),

    /// Container refused by the vessel's capacity policy
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(CapacityViolation),

    /// No container with this identifier is aboard the vessel
    #[error("Container {container} not found aboard {vessel}")]
    ContainerNotFound {
        /// Vessel searched
        vessel: VesselId,
        /// Container requested
        container: ContainerId,
    },

    /// No container with this identifier is in the port's storage
    #[error("Container {container} not stored at {port}")]
    NotInStorage {
        /// Port searched
        port: PortId,
        /// Container requested
        container: ContainerId,
    },

    /// Fuel amount is negative, NaN or infinite
    #[error("Invalid fuel amount: {amount}")]
    InvalidFuel {
        /// Rejected amount
        amount: f64,
    },

    /// Voyage costs more fuel than the vessel holds
    #[error("Insufficient fuel: required {required:.3}, available {available:.3}")]
    InsufficientFuel {
        /// Fuel the voyage would consume
        required: f64,
        /// Fuel aboard
        available: f64,
    },

    /// Destination is the port the vessel is already at
    #[error("No-op voyage: {vessel} is already at {port}")]
    NoOpVoyage {
        /// Vessel asked to sail
        vessel: VesselId,
        /// Its current port
        port: PortId,
    },

    /// Builder used after `finalize()`
    #[error("Builder used after finalize")]
    UseAfterFinalize,

    /// Port handed to the registry already has vessels docked
    #[error("Port {0} already has docked vessels")]
    PortOccupied(PortId),

    /// Port not registered
    #[error("Port not found: {0}")]
    PortNotFound(PortId),

    /// Vessel not registered
    #[error("Vessel not found: {0}")]
    VesselNotFound(VesselId),

    /// A port with this identifier is already registered
    #[error("Duplicate port: {0}")]
    DuplicatePort(PortId),

    /// A vessel with this identifier is already registered
    #[error("Duplicate vessel: {0}")]
    DuplicateVessel(VesselId),

    /// The origin port handed to a voyage is not the vessel's current port
    #[error("{vessel} is at {actual}, not {expected}")]
    VesselNotAtPort {
        /// Vessel asked to sail
        vessel: VesselId,
        /// Port the caller supplied as origin
        expected: PortId,
        /// Port the vessel is actually at
        actual: PortId,
    },

    /// Configuration could not be read, parsed or written
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for conditions a caller can resolve and retry
    ///
    /// A full vessel is not retryable: nothing fits until something is unloaded.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::CapacityExceeded(violation) => !violation.is_hard_stop(),
            Error::InsufficientFuel { .. }
            | Error::ContainerNotFound { .. }
            | Error::NotInStorage { .. } => true,
            _ => false,
        }
    }

    /// True when the "error" reports that nothing needed doing
    pub fn is_informational(&self) -> bool {
        matches!(self, Error::NoOpVoyage { .. })
    }
}

impl From<CapacityViolation> for Error {
    fn from(violation: CapacityViolation) -> Self {
        Error::CapacityExceeded(violation)
    }
}

/// A refused load, carrying the container back to the caller
///
/// The container is never dropped on refusal. Use
/// [`LoadRejected::into_container`] to recover it, or `?` to convert into
/// [`Error::CapacityExceeded`] when the container is no longer needed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} refused: {violation}", container.id())]
pub struct LoadRejected {
    /// The refused container, unchanged
    pub container: Container,
    /// Why it was refused
    pub violation: CapacityViolation,
}

impl LoadRejected {
    /// Take the container back
    pub fn into_container(self) -> Container {
        self.container
    }

    /// True when the vessel is full, as opposed to this container not fitting
    pub fn is_hard_stop(&self) -> bool {
        self.violation.is_hard_stop()
    }
}

impl From<LoadRejected> for Error {
    fn from(rejected: LoadRejected) -> Self {
        Error::CapacityExceeded(rejected.violation)
    }
}
