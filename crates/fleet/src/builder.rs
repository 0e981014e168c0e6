//! Stepwise vessel configuration
//!
//! A [`ShipBuilder`] starts from a size class's factory defaults and lets the
//! caller adjust the identifier, top up fuel and swap the capacity policy
//! before taking the finished vessel with [`ShipBuilder::finalize`].
//!
//! ```ignore
//! let mut builder = ShipBuilder::new(SizeClass::Medium, VesselId::new(2), port, 20_000.0)?;
//! builder
//!     .set_capacity_policy(CapacityPolicy::new(15_000, 10, 5, 2, 1))?
//!     .set_fuel_bank(500.0)?;
//! let vessel = builder.finalize()?;
//! ```
//!
//! A builder yields exactly one vessel. Every call after `finalize()` fails
//! with `UseAfterFinalize`.

use crate::factory::{ShipFactory, SizeClass};
use crate::vessel::Vessel;
use seaway_core::{CapacityPolicy, Error, PortId, Result, VesselId};

/// Stepwise vessel configurator
#[derive(Debug, Clone)]
pub struct ShipBuilder {
    vessel: Option<Vessel>,
}

impl ShipBuilder {
    /// Start from the defaults of `class`
    ///
    /// # Errors
    ///
    /// `InvalidFuel` if `initial_fuel` is negative, NaN or infinite.
    pub fn new(class: SizeClass, id: VesselId, port: PortId, initial_fuel: f64) -> Result<Self> {
        Ok(Self {
            vessel: Some(ShipFactory.create(class, id, port, initial_fuel)?),
        })
    }

    fn vessel_mut(&mut self) -> Result<&mut Vessel> {
        self.vessel.as_mut().ok_or(Error::UseAfterFinalize)
    }

    /// Replace the vessel identifier
    pub fn set_identifier(&mut self, id: VesselId) -> Result<&mut Self> {
        self.vessel_mut()?.id = id;
        Ok(self)
    }

    /// Add fuel to the bank (additive, not absolute)
    ///
    /// Negative or non-finite amounts fail with `InvalidFuel`.
    pub fn set_fuel_bank(&mut self, amount: f64) -> Result<&mut Self> {
        self.vessel_mut()?.refuel(amount)?;
        Ok(self)
    }

    /// Replace the whole capacity policy
    pub fn set_capacity_policy(&mut self, policy: CapacityPolicy) -> Result<&mut Self> {
        self.vessel_mut()?.policy = policy;
        Ok(self)
    }

    /// True once `finalize()` has handed out the vessel
    pub fn is_finalized(&self) -> bool {
        self.vessel.is_none()
    }

    /// Take the configured vessel
    pub fn finalize(&mut self) -> Result<Vessel> {
        self.vessel.take().ok_or(Error::UseAfterFinalize)
    }
}
