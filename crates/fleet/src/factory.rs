//! Fixed vessel configurations
//!
//! | Class  | Weight | Count | Heavy | Refrigerated | Liquid | Burn rate |
//! |--------|--------|-------|-------|--------------|--------|-----------|
//! | Light  | 7500   | 5     | 0     | 0            | 0      | 0.5       |
//! | Medium | 15000  | 5     | 2     | 1            | 1      | 1.2       |
//! | Heavy  | 50000  | 5     | 5     | 5            | 5      | 2.0       |

use crate::vessel::Vessel;
use seaway_core::{CapacityPolicy, Error, PortId, Result, VesselId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vessel size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// Small feeder, basic cargo only
    Light,
    /// Mid-size carrier
    Medium,
    /// Large carrier
    Heavy,
}

impl SizeClass {
    /// All size classes
    pub const ALL: [SizeClass; 3] = [SizeClass::Light, SizeClass::Medium, SizeClass::Heavy];

    /// Capacity policy of this class
    pub const fn policy(&self) -> CapacityPolicy {
        match self {
            SizeClass::Light => CapacityPolicy::new(7500, 5, 0, 0, 0),
            SizeClass::Medium => CapacityPolicy::new(15_000, 5, 2, 1, 1),
            SizeClass::Heavy => CapacityPolicy::new(50_000, 5, 5, 5, 5),
        }
    }

    /// Hull fuel burn per kilometer
    pub const fn burn_rate(&self) -> f64 {
        match self {
            SizeClass::Light => 0.5,
            SizeClass::Medium => 1.2,
            SizeClass::Heavy => 2.0,
        }
    }

    /// Lowercase tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Light => "light",
            SizeClass::Medium => "medium",
            SizeClass::Heavy => "heavy",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SizeClass::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSizeClass(s.to_string()))
    }
}

/// Builds vessels from the fixed size-class table
#[derive(Debug, Clone, Copy, Default)]
pub struct ShipFactory;

impl ShipFactory {
    /// Build a vessel of `class`
    ///
    /// # Errors
    ///
    /// `InvalidFuel` if `initial_fuel` is negative, NaN or infinite.
    pub fn create(
        &self,
        class: SizeClass,
        id: VesselId,
        port: PortId,
        initial_fuel: f64,
    ) -> Result<Vessel> {
        Vessel::new(id, port, initial_fuel, class.policy(), class.burn_rate())
    }

    /// Build a vessel from a size class tag such as `"medium"`
    pub fn create_from_tag(
        &self,
        class: &str,
        id: VesselId,
        port: PortId,
        initial_fuel: f64,
    ) -> Result<Vessel> {
        self.create(class.parse()?, id, port, initial_fuel)
    }
}
