//! Harbor: shared registry of ports and vessels
//!
//! Every port and every vessel sits behind its own `parking_lot::Mutex`,
//! indexed by identifier in a `DashMap`. Cross references are identifiers,
//! resolved through the maps on each call, so removing an entity can never
//! leave a dangling pointer behind.
//!
//! ## Lock Order
//!
//! ```text
//! vessel  ->  ports in ascending PortId order
//! ```
//!
//! - A vessel lock is always taken before any port lock.
//! - When two ports are needed they are locked lowest id first.
//! - No operation holds two vessel locks.
//! - DashMap shard guards are dropped before any entity mutex is taken.
//!
//! Two vessels swapping ports therefore acquire the two port locks in the
//! same order and cannot deadlock. Every multi-entity change (load from
//! storage, unload, voyage) runs with all of its locks held, so other threads
//! never observe a half-applied change.

use crate::config::{SeawayConfig, CONFIG_FILE_NAME};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};
use seaway_core::{Container, ContainerId, Error, LoadRejected, PortId, Result, VesselId};
use seaway_fleet::{Port, ShipFactory, SizeClass, Vessel};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// A failed [`Harbor::load`], carrying the container back to the caller
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} not loaded: {error}", container.id())]
pub struct LoadFailure {
    /// The container, unchanged
    pub container: Container,
    /// Why it was not loaded
    pub error: Error,
}

impl LoadFailure {
    /// Take the container back
    pub fn into_container(self) -> Container {
        self.container
    }

    /// True when the vessel is full, as opposed to this container not fitting
    pub fn is_hard_stop(&self) -> bool {
        matches!(&self.error, Error::CapacityExceeded(v) if v.is_hard_stop())
    }
}

impl From<LoadRejected> for LoadFailure {
    fn from(rejected: LoadRejected) -> Self {
        LoadFailure {
            error: Error::CapacityExceeded(rejected.violation),
            container: rejected.container,
        }
    }
}

impl From<LoadFailure> for Error {
    fn from(failure: LoadFailure) -> Self {
        failure.error
    }
}

/// Shared registry of ports and vessels
#[derive(Debug, Default)]
pub struct Harbor {
    ports: DashMap<PortId, Arc<Mutex<Port>>>,
    vessels: DashMap<VesselId, Arc<Mutex<Vessel>>>,
    config: SeawayConfig,
}

impl Harbor {
    /// Create an empty harbor with default configuration
    pub fn new() -> Self {
        Self::with_config(SeawayConfig::default())
    }

    /// Create an empty harbor with explicit configuration
    pub fn with_config(config: SeawayConfig) -> Self {
        Self {
            ports: DashMap::new(),
            vessels: DashMap::new(),
            config,
        }
    }

    /// Create an empty harbor configured from `seaway.toml` in `dir`
    ///
    /// A default config file is written first if none exists.
    pub fn from_config_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        SeawayConfig::write_default_if_missing(&path)?;
        let config = SeawayConfig::from_file(&path)?;
        info!(path = %path.display(), ?config, "Loaded harbor configuration");
        Ok(Self::with_config(config))
    }

    /// Active configuration
    pub fn config(&self) -> &SeawayConfig {
        &self.config
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a port
    ///
    /// Vessels join a port only through [`Harbor::add_vessel`] and
    /// [`Harbor::sail`], so a port must arrive with nobody docked.
    ///
    /// # Errors
    ///
    /// - `PortOccupied` if the port already has docked vessels
    /// - `DuplicatePort` if a port with the same id is registered
    pub fn add_port(&self, port: Port) -> Result<()> {
        let id = port.id();
        if port.docked().next().is_some() {
            return Err(Error::PortOccupied(id));
        }
        match self.ports.entry(id) {
            Entry::Occupied(_) => Err(Error::DuplicatePort(id)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(port)));
                info!(port = %id, "Registered port");
                Ok(())
            }
        }
    }

    /// Register a vessel and dock it at its current port
    ///
    /// # Errors
    ///
    /// - `PortNotFound` if the vessel's port is not registered
    /// - `DuplicateVessel` if a vessel with the same id is registered
    pub fn add_vessel(&self, vessel: Vessel) -> Result<()> {
        let id = vessel.id();
        let port_id = vessel.port();
        let port = self.port_handle(port_id)?;
        let mut port = port.lock();

        // The new vessel is unreachable until inserted, so taking a shard
        // guard under the port lock cannot invert the vessel -> port order.
        match self.vessels.entry(id) {
            Entry::Occupied(_) => return Err(Error::DuplicateVessel(id)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(vessel)));
            }
        }
        port.dock(id);
        info!(vessel = %id, port = %port_id, "Registered vessel");
        Ok(())
    }

    /// Build a vessel from the size-class table and register it
    pub fn commission(
        &self,
        class: SizeClass,
        id: VesselId,
        port: PortId,
        initial_fuel: f64,
    ) -> Result<()> {
        self.add_vessel(ShipFactory.create(class, id, port, initial_fuel)?)
    }

    // ========================================================================
    // Cargo
    // ========================================================================

    /// Load a container the caller holds onto a vessel
    ///
    /// On any failure the container comes back inside [`LoadFailure`].
    pub fn load(
        &self,
        vessel: VesselId,
        container: Container,
    ) -> std::result::Result<(), LoadFailure> {
        let handle = match self.vessel_handle(vessel) {
            Ok(handle) => handle,
            Err(error) => return Err(LoadFailure { container, error }),
        };
        let mut vessel = handle.lock();
        vessel.load_with(container, self.config.admission())?;
        Ok(())
    }

    /// Move a container from the vessel's current port storage onto the vessel
    ///
    /// # Errors
    ///
    /// - `NotInStorage` if the port does not hold the container
    /// - `CapacityExceeded` if the vessel refuses it; the container stays in
    ///   port storage, in place
    pub fn load_from_port(&self, vessel: VesselId, container: ContainerId) -> Result<()> {
        let vessel_handle = self.vessel_handle(vessel)?;
        let mut vessel = vessel_handle.lock();
        let port_handle = self.port_handle(vessel.port())?;
        let mut port = port_handle.lock();

        let candidate = port
            .storage()
            .iter()
            .find(|c| c.id() == container)
            .ok_or(Error::NotInStorage {
                port: port.id(),
                container,
            })?;
        vessel
            .policy()
            .admit(&vessel.cargo_summary(), candidate, self.config.admission())?;

        let taken = port.take(container).ok_or(Error::NotInStorage {
            port: port.id(),
            container,
        })?;
        if let Err(rejected) = vessel.load_with(taken, self.config.admission()) {
            // Admission was checked above under the same locks.
            let violation = rejected.violation;
            port.receive(rejected.into_container());
            return Err(Error::CapacityExceeded(violation));
        }
        debug!(vessel = %vessel.id(), port = %port.id(), container = %container, "Loaded from storage");
        Ok(())
    }

    /// Unload a container from a vessel into a port's storage
    ///
    /// # Errors
    ///
    /// - `ContainerNotFound` if the container is not aboard
    /// - `VesselNotAtPort` if `strict_unload` is set and the vessel is
    ///   docked elsewhere
    pub fn unload(&self, vessel: VesselId, container: ContainerId, port: PortId) -> Result<()> {
        let vessel_handle = self.vessel_handle(vessel)?;
        let mut vessel = vessel_handle.lock();
        if self.config.strict_unload && vessel.port() != port {
            return Err(Error::VesselNotAtPort {
                vessel: vessel.id(),
                expected: port,
                actual: vessel.port(),
            });
        }
        let port_handle = self.port_handle(port)?;
        let mut port = port_handle.lock();
        vessel.unload(container, &mut port)
    }

    /// Unload a container into the vessel's current port
    pub fn unload_here(&self, vessel: VesselId, container: ContainerId) -> Result<()> {
        let vessel_handle = self.vessel_handle(vessel)?;
        let mut vessel = vessel_handle.lock();
        let port_handle = self.port_handle(vessel.port())?;
        let mut port = port_handle.lock();
        vessel.unload(container, &mut port)
    }

    // ========================================================================
    // Fuel and voyages
    // ========================================================================

    /// Add fuel to a vessel, returning the new level
    ///
    /// # Errors
    ///
    /// `InvalidFuel` for a negative or non-finite amount; the level is unchanged.
    pub fn refuel(&self, vessel: VesselId, amount: f64) -> Result<f64> {
        let handle = self.vessel_handle(vessel)?;
        let mut vessel = handle.lock();
        vessel.refuel(amount)
    }

    /// Sail a vessel to `destination`, returning the fuel remaining
    ///
    /// Holds the vessel and both port locks for the whole voyage.
    ///
    /// # Errors
    ///
    /// - `NoOpVoyage` if the vessel is already at `destination`
    /// - `InsufficientFuel` if the voyage costs more than the fuel aboard
    /// - `VesselNotFound` / `PortNotFound` for unregistered ids
    pub fn sail(&self, vessel: VesselId, destination: PortId) -> Result<f64> {
        let vessel_handle = self.vessel_handle(vessel)?;
        let mut vessel = vessel_handle.lock();
        let origin = vessel.port();
        if origin == destination {
            return Err(Error::NoOpVoyage {
                vessel: vessel.id(),
                port: origin,
            });
        }

        let origin_handle = self.port_handle(origin)?;
        let destination_handle = self.port_handle(destination)?;
        let (mut from, mut to) = lock_ordered(
            (origin, &*origin_handle),
            (destination, &*destination_handle),
        );

        let remaining = vessel.sail_to(&mut from, &mut to)?;
        info!(vessel = %vessel.id(), from = %origin, to = %destination, fuel = remaining, "Vessel sailed");
        Ok(remaining)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Snapshot of a port
    pub fn port(&self, id: PortId) -> Result<Port> {
        self.with_port(id, Port::clone)
    }

    /// Snapshot of a vessel
    pub fn vessel(&self, id: VesselId) -> Result<Vessel> {
        self.with_vessel(id, Vessel::clone)
    }

    /// Run `f` against a port under its lock
    pub fn with_port<R>(&self, id: PortId, f: impl FnOnce(&Port) -> R) -> Result<R> {
        let handle = self.port_handle(id)?;
        let port = handle.lock();
        Ok(f(&port))
    }

    /// Run `f` against a vessel under its lock
    pub fn with_vessel<R>(&self, id: VesselId, f: impl FnOnce(&Vessel) -> R) -> Result<R> {
        let handle = self.vessel_handle(id)?;
        let vessel = handle.lock();
        Ok(f(&vessel))
    }

    /// Registered port ids, ascending
    pub fn port_ids(&self) -> Vec<PortId> {
        let mut ids: Vec<PortId> = self.ports.iter().map(|e| *e.key()).collect();
        ids.sort();
        ids
    }

    /// Registered vessel ids, ascending
    pub fn vessel_ids(&self) -> Vec<VesselId> {
        let mut ids: Vec<VesselId> = self.vessels.iter().map(|e| *e.key()).collect();
        ids.sort();
        ids
    }

    fn port_handle(&self, id: PortId) -> Result<Arc<Mutex<Port>>> {
        self.ports
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(Error::PortNotFound(id))
    }

    fn vessel_handle(&self, id: VesselId) -> Result<Arc<Mutex<Vessel>>> {
        self.vessels
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(Error::VesselNotFound(id))
    }
}

/// Lock two distinct ports lowest id first, returning guards in argument order
fn lock_ordered<'a>(
    a: (PortId, &'a Mutex<Port>),
    b: (PortId, &'a Mutex<Port>),
) -> (MutexGuard<'a, Port>, MutexGuard<'a, Port>) {
    debug_assert_ne!(a.0, b.0);
    if a.0 < b.0 {
        let first = a.1.lock();
        let second = b.1.lock();
        (first, second)
    } else {
        let second = b.1.lock();
        let first = a.1.lock();
        (first, second)
    }
}
