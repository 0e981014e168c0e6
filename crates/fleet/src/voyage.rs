//! Voyages between ports
//!
//! ## Fuel Model
//!
//! ```text
//! required = distance_km × (burn_rate + Σ container.fuel_coefficient())
//! ```
//!
//! Container coefficients are already weight-scaled, so they are summed as-is.
//!
//! ## Sailing Sequence
//!
//! ```text
//! 1. destination == current port   -> NoOpVoyage (nothing computed)
//! 2. plan: distance and required fuel (read-only)
//! 3. required > fuel, or either
//!    is not a number               -> InsufficientFuel (nothing mutated)
//! 4. deduct fuel
//! 5. origin.undock (records departure)
//! 6. vessel.port = destination
//! 7. destination.dock
//! ```
//!
//! Every check happens before the first mutation, and steps 4-7 cannot fail,
//! so a voyage either applies completely or not at all. The caller holds
//! exclusive access to the vessel and both ports for the whole call.

use crate::port::Port;
use crate::vessel::Vessel;
use seaway_core::{Error, PortId, Result};
use tracing::{debug, warn};

/// Fuel needed to sail `distance_km` with the given hull rate and cargo load
pub fn voyage_fuel(distance_km: f64, burn_rate: f64, container_fuel_load: f64) -> f64 {
    distance_km * (burn_rate + container_fuel_load)
}

/// Distance and fuel for a prospective voyage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoyagePlan {
    /// Departure port
    pub from: PortId,
    /// Arrival port
    pub to: PortId,
    /// Great-circle distance
    pub distance_km: f64,
    /// Fuel the voyage consumes
    pub fuel_required: f64,
}

impl Vessel {
    /// Fuel needed to sail `distance_km` with the current cargo
    pub fn fuel_required(&self, distance_km: f64) -> f64 {
        voyage_fuel(distance_km, self.burn_rate, self.container_fuel_load())
    }

    /// Work out a voyage without changing anything
    ///
    /// # Errors
    ///
    /// - `NoOpVoyage` if `destination` is the vessel's current port
    /// - `VesselNotAtPort` if `origin` is not the vessel's current port
    pub fn plan_voyage(&self, origin: &Port, destination: &Port) -> Result<VoyagePlan> {
        if destination.id() == self.port {
            return Err(Error::NoOpVoyage {
                vessel: self.id,
                port: self.port,
            });
        }
        if origin.id() != self.port {
            return Err(Error::VesselNotAtPort {
                vessel: self.id,
                expected: origin.id(),
                actual: self.port,
            });
        }

        let distance_km = origin.distance_to(destination);
        Ok(VoyagePlan {
            from: origin.id(),
            to: destination.id(),
            distance_km,
            fuel_required: self.fuel_required(distance_km),
        })
    }

    /// Sail from `origin` to `destination`
    ///
    /// Returns the fuel remaining after the voyage.
    ///
    /// # Errors
    ///
    /// - `NoOpVoyage` if `destination` is the current port
    /// - `InsufficientFuel` if the voyage costs more than the fuel aboard
    /// - `VesselNotAtPort` if `origin` is not the current port
    ///
    /// On error the vessel and both ports are unchanged.
    pub fn sail_to(&mut self, origin: &mut Port, destination: &mut Port) -> Result<f64> {
        let plan = self.plan_voyage(origin, destination)?;

        // NaN on either side fails the comparison and is refused.
        let affordable = plan.fuel_required.is_finite() && self.fuel >= plan.fuel_required;
        if !affordable {
            warn!(
                vessel = %self.id,
                from = %plan.from,
                to = %plan.to,
                required = plan.fuel_required,
                available = self.fuel,
                "Not enough fuel for voyage"
            );
            return Err(Error::InsufficientFuel {
                required: plan.fuel_required,
                available: self.fuel,
            });
        }

        self.fuel -= plan.fuel_required;
        origin.undock(self.id);
        self.port = destination.id();
        destination.dock(self.id);

        debug!(
            vessel = %self.id,
            from = %plan.from,
            to = %plan.to,
            distance_km = plan.distance_km,
            burned = plan.fuel_required,
            fuel = self.fuel,
            "Voyage complete"
        );
        Ok(self.fuel)
    }
}
