//! Ports: fixed locations that store containers and berth vessels
//!
//! A port references vessels by [`VesselId`] only. It owns the containers in
//! its storage; a container unloaded here stays here until it is taken for
//! loading onto a vessel.

use seaway_core::{Container, ContainerId, GeoCoordinate, PortId, VesselId};
use std::collections::BTreeSet;

/// A port
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    id: PortId,
    location: GeoCoordinate,
    storage: Vec<Container>,
    docked: BTreeSet<VesselId>,
    departed: BTreeSet<VesselId>,
}

impl Port {
    /// Create an empty port at `location`
    pub fn new(id: PortId, location: GeoCoordinate) -> Self {
        Self {
            id,
            location,
            storage: Vec::new(),
            docked: BTreeSet::new(),
            departed: BTreeSet::new(),
        }
    }

    /// Convenience constructor from degrees
    pub fn at(id: PortId, latitude: f64, longitude: f64) -> Self {
        Self::new(id, GeoCoordinate::new(latitude, longitude))
    }

    /// Port identifier
    pub fn id(&self) -> PortId {
        self.id
    }

    /// Port location
    pub fn location(&self) -> GeoCoordinate {
        self.location
    }

    /// Great-circle distance to `other` in kilometers
    pub fn distance_to(&self, other: &Port) -> f64 {
        self.location.distance_to(&other.location)
    }

    /// Berth a vessel
    ///
    /// Idempotent: returns `false` if the vessel was already docked.
    pub fn dock(&mut self, vessel: VesselId) -> bool {
        self.docked.insert(vessel)
    }

    /// Release a vessel and record the departure
    ///
    /// Returns `false` and changes nothing if the vessel was not docked.
    pub fn undock(&mut self, vessel: VesselId) -> bool {
        if self.docked.remove(&vessel) {
            self.departed.insert(vessel);
            true
        } else {
            false
        }
    }

    /// True if the vessel is currently docked here
    pub fn is_docked(&self, vessel: VesselId) -> bool {
        self.docked.contains(&vessel)
    }

    /// Vessels currently docked, in identifier order
    pub fn docked(&self) -> impl Iterator<Item = VesselId> + '_ {
        self.docked.iter().copied()
    }

    /// True if the vessel has ever departed from here
    pub fn has_departed(&self, vessel: VesselId) -> bool {
        self.departed.contains(&vessel)
    }

    /// Vessels that have ever departed, in identifier order
    pub fn departed(&self) -> impl Iterator<Item = VesselId> + '_ {
        self.departed.iter().copied()
    }

    /// Take ownership of a container into storage
    pub fn receive(&mut self, container: Container) {
        self.storage.push(container);
    }

    /// Remove a container from storage
    pub fn take(&mut self, container: ContainerId) -> Option<Container> {
        let idx = self.storage.iter().position(|c| c.id() == container)?;
        Some(self.storage.remove(idx))
    }

    /// Containers in storage, in arrival order
    pub fn storage(&self) -> &[Container] {
        &self.storage
    }

    /// True if a container with this identifier is in storage
    pub fn stores(&self, container: ContainerId) -> bool {
        self.storage.iter().any(|c| c.id() == container)
    }
}
