//! Cargo catalog: container variants and packed items
//!
//! ## Containers
//!
//! A [`Container`] is one of four fixed variants. Each variant bounds the
//! container's weight and fixes a fuel rate per unit of weight:
//!
//! | Variant      | Weight (kg)  | Rate |
//! |--------------|--------------|------|
//! | Basic        | 1 ..= 3000   | 2.5  |
//! | Heavy        | > 3000       | 3.0  |
//! | Refrigerated | > 3000       | 5.0  |
//! | Liquid       | > 3000       | 4.0  |
//!
//! Refrigerated and Liquid containers are specializations of Heavy and share
//! its weight floor. The weight bound is checked at construction, so a live
//! `Container` can never hold an out-of-range weight.
//!
//! [`Container::fuel_coefficient`] is already weight-scaled: it is the
//! per-kilometer fuel a container adds to a voyage.
//!
//! ## Items
//!
//! [`Item`] describes goods packed into a container (a unit weight and a
//! count). Items are catalog records only; they do not participate in vessel
//! capacity checks.

use crate::error::{Error, Result};
use crate::ids::{ContainerId, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Heaviest weight a Basic container may carry, and the exclusive floor for
/// the heavy family
pub const BASIC_MAX_WEIGHT: u32 = 3000;

/// Container variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// General cargo up to 3000 kg
    Basic,
    /// Heavy cargo above 3000 kg
    Heavy,
    /// Temperature-controlled heavy cargo
    Refrigerated,
    /// Bulk liquid heavy cargo
    Liquid,
}

impl ContainerKind {
    /// All variants, in catalog order
    pub const ALL: [ContainerKind; 4] = [
        ContainerKind::Basic,
        ContainerKind::Heavy,
        ContainerKind::Refrigerated,
        ContainerKind::Liquid,
    ];

    /// Fuel per kilometer per kilogram of container weight
    pub const fn fuel_rate(&self) -> f64 {
        match self {
            ContainerKind::Basic => 2.5,
            ContainerKind::Heavy => 3.0,
            ContainerKind::Refrigerated => 5.0,
            ContainerKind::Liquid => 4.0,
        }
    }

    /// True for Heavy and its specializations
    pub const fn is_heavy_family(&self) -> bool {
        !matches!(self, ContainerKind::Basic)
    }

    /// Check `weight` against this variant's range
    pub fn validate_weight(&self, weight: u32) -> Result<()> {
        let reason = match self {
            ContainerKind::Basic if weight == 0 => "weight must be positive",
            ContainerKind::Basic if weight > BASIC_MAX_WEIGHT => {
                "basic containers must weigh at most 3000"
            }
            ContainerKind::Heavy | ContainerKind::Refrigerated | ContainerKind::Liquid
                if weight <= BASIC_MAX_WEIGHT =>
            {
                "heavy containers must weigh more than 3000"
            }
            _ => return Ok(()),
        };
        Err(Error::Validation {
            kind: *self,
            weight,
            reason,
        })
    }

    /// Lowercase tag used in configuration and parsing
    pub const fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Basic => "basic",
            ContainerKind::Heavy => "heavy",
            ContainerKind::Refrigerated => "refrigerated",
            ContainerKind::Liquid => "liquid",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ContainerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}

/// A cargo container
///
/// Fields are private: the only way to obtain a `Container` is through
/// [`Container::new`] (or [`create_container`]), which enforces the weight
/// range of its variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Container {
    id: ContainerId,
    kind: ContainerKind,
    weight: u32,
}

impl Container {
    /// Construct a container, validating its weight
    pub fn new(kind: ContainerKind, id: ContainerId, weight: u32) -> Result<Self> {
        kind.validate_weight(weight)?;
        Ok(Self { id, kind, weight })
    }

    /// Container identifier
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Container variant
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Weight in kilograms
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Fuel this container adds per kilometer sailed (weight × variant rate)
    pub fn fuel_coefficient(&self) -> f64 {
        f64::from(self.weight) * self.kind.fuel_rate()
    }

    /// True when both containers are the same variant and weight
    ///
    /// Identifiers are ignored; two containers with the same cargo profile are
    /// interchangeable for capacity and fuel purposes.
    pub fn same_cargo(&self, other: &Container) -> bool {
        self.kind == other.kind && self.weight == other.weight
    }
}

/// Construct a container of the requested variant
pub fn create_container(kind: ContainerKind, id: ContainerId, weight: u32) -> Result<Container> {
    Container::new(kind, id, weight)
}

/// Construct a container from a variant tag such as `"refrigerated"`
///
/// # Errors
///
/// - `UnknownVariant` if the tag does not name a container variant
/// - `Validation` if the weight is out of range for the variant
pub fn create_container_from_tag(tag: &str, id: ContainerId, weight: u32) -> Result<Container> {
    let kind = tag.parse::<ContainerKind>()?;
    Container::new(kind, id, weight)
}

/// Kind of goods packed into a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Small parcel goods
    Small,
    /// Heavy goods
    Heavy,
    /// Goods needing refrigeration
    Refrigerated,
    /// Liquid goods
    Liquid,
}

impl ItemKind {
    /// All variants, in catalog order
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Small,
        ItemKind::Heavy,
        ItemKind::Refrigerated,
        ItemKind::Liquid,
    ];

    /// Catalog tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Small => "Small",
            ItemKind::Heavy => "Heavy",
            ItemKind::Refrigerated => "Refrigerated",
            ItemKind::Liquid => "Liquid",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}

/// Goods packed into a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    pub id: ItemId,
    /// Kind of goods
    pub kind: ItemKind,
    /// Weight of a single unit
    pub unit_weight: f64,
    /// Number of units
    pub count: u32,
    /// Container the item is packed into
    pub container: ContainerId,
}

impl Item {
    /// Combined weight of all units
    pub fn total_weight(&self) -> f64 {
        self.unit_weight * f64::from(self.count)
    }
}

/// Construct an item from a catalog tag such as `"Small"`
pub fn create_item(
    tag: &str,
    id: ItemId,
    unit_weight: f64,
    count: u32,
    container: ContainerId,
) -> Result<Item> {
    let kind = tag.parse::<ItemKind>()?;
    Ok(Item {
        id,
        kind,
        unit_weight,
        count,
        container,
    })
}
