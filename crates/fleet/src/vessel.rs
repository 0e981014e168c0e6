//! Vessels: fuel, capacity policy and owned cargo
//!
//! A vessel refers to its current port by [`PortId`]; ports and vessels never
//! hold references to each other. Cargo is owned by the vessel while aboard
//! and moves by value on load and unload, so a container is never in two
//! places at once.
//!
//! Voyages are implemented in [`crate::voyage`].

use crate::port::Port;
use seaway_core::{
    AdmissionMode, CapacityPolicy, CargoSummary, Container, ContainerId, Error, LoadRejected,
    PortId, Result, VesselId,
};
use tracing::debug;

/// Accept a fuel amount only if it is finite and non-negative
pub(crate) fn check_fuel(amount: f64) -> Result<f64> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(Error::InvalidFuel { amount })
    }
}

/// A vessel
#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    pub(crate) id: VesselId,
    pub(crate) fuel: f64,
    pub(crate) port: PortId,
    pub(crate) policy: CapacityPolicy,
    pub(crate) burn_rate: f64,
    pub(crate) cargo: Vec<Container>,
}

impl Vessel {
    /// Create an empty vessel at `port`
    ///
    /// # Arguments
    /// * `id` - Vessel identifier
    /// * `port` - Port the vessel starts at (the caller docks it there)
    /// * `fuel` - Initial fuel
    /// * `policy` - Capacity policy
    /// * `burn_rate` - Fuel burned per kilometer by the empty hull
    ///
    /// # Errors
    ///
    /// `InvalidFuel` if `fuel` is negative, NaN or infinite.
    pub fn new(
        id: VesselId,
        port: PortId,
        fuel: f64,
        policy: CapacityPolicy,
        burn_rate: f64,
    ) -> Result<Self> {
        Ok(Self {
            id,
            fuel: check_fuel(fuel)?,
            port,
            policy,
            burn_rate,
            cargo: Vec::new(),
        })
    }

    /// Vessel identifier
    pub fn id(&self) -> VesselId {
        self.id
    }

    /// Fuel aboard
    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    /// Current port
    pub fn port(&self) -> PortId {
        self.port
    }

    /// Capacity policy
    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// Fuel burned per kilometer by the empty hull
    pub fn burn_rate(&self) -> f64 {
        self.burn_rate
    }

    /// Containers aboard, in load order
    pub fn cargo(&self) -> &[Container] {
        &self.cargo
    }

    /// Containers aboard, sorted by identifier
    pub fn containers_by_id(&self) -> Vec<&Container> {
        let mut sorted: Vec<&Container> = self.cargo.iter().collect();
        sorted.sort_by_key(|c| c.id());
        sorted
    }

    /// True if a container with this identifier is aboard
    pub fn carries(&self, container: ContainerId) -> bool {
        self.cargo.iter().any(|c| c.id() == container)
    }

    /// Counts and weight of the cargo aboard
    pub fn cargo_summary(&self) -> CargoSummary {
        CargoSummary::of(&self.cargo)
    }

    /// Combined weight of the cargo aboard
    pub fn total_weight(&self) -> u64 {
        self.cargo.iter().map(|c| u64::from(c.weight())).sum()
    }

    /// Fuel per kilometer added by the cargo aboard
    pub fn container_fuel_load(&self) -> f64 {
        self.cargo.iter().map(Container::fuel_coefficient).sum()
    }

    /// Add fuel, returning the new level
    ///
    /// Additive; no tank limit is enforced.
    ///
    /// # Errors
    ///
    /// `InvalidFuel` if `amount` is negative or not finite, or the new level
    /// would overflow to infinity. The fuel aboard is unchanged.
    pub fn refuel(&mut self, amount: f64) -> Result<f64> {
        check_fuel(amount)?;
        self.fuel = check_fuel(self.fuel + amount)?;
        debug!(vessel = %self.id, amount, fuel = self.fuel, "Refuelled");
        Ok(self.fuel)
    }

    /// Load a container, enforcing every limit of the capacity policy
    ///
    /// On refusal the container comes back inside [`LoadRejected`] and the
    /// cargo is unchanged.
    pub fn load(&mut self, container: Container) -> std::result::Result<(), LoadRejected> {
        self.load_with(container, AdmissionMode::Strict)
    }

    /// Load a container under an explicit admission mode
    pub fn load_with(
        &mut self,
        container: Container,
        mode: AdmissionMode,
    ) -> std::result::Result<(), LoadRejected> {
        if let Err(violation) = self.policy.admit(&self.cargo_summary(), &container, mode) {
            debug!(
                vessel = %self.id,
                container = %container.id(),
                %violation,
                "Load refused"
            );
            return Err(LoadRejected {
                container,
                violation,
            });
        }

        debug!(
            vessel = %self.id,
            container = %container.id(),
            weight = container.weight(),
            "Loaded container"
        );
        self.cargo.push(container);
        Ok(())
    }

    /// Unload a container into `destination`'s storage
    ///
    /// # Errors
    ///
    /// `ContainerNotFound` if no container with this identifier is aboard;
    /// cargo and port storage are unchanged.
    pub fn unload(&mut self, container: ContainerId, destination: &mut Port) -> Result<()> {
        let container = self.remove_cargo(container)?;
        debug!(
            vessel = %self.id,
            container = %container.id(),
            port = %destination.id(),
            "Unloaded container"
        );
        destination.receive(container);
        Ok(())
    }

    fn remove_cargo(&mut self, container: ContainerId) -> Result<Container> {
        let idx = self
            .cargo
            .iter()
            .position(|c| c.id() == container)
            .ok_or(Error::ContainerNotFound {
                vessel: self.id,
                container,
            })?;
        Ok(self.cargo.remove(idx))
    }
}
