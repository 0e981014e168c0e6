//! Vessel capacity policy
//!
//! A [`CapacityPolicy`] is an immutable set of admission limits. A vessel
//! holds exactly one policy; changing limits means replacing the whole policy,
//! never editing a field in place.
//!
//! ## Admission Order
//!
//! ```text
//! 1. count already at max_containers  -> Full      (hard stop)
//! 2. total weight would exceed limit  -> Weight    (try another container)
//! 3. category count would exceed max  -> Category  (try another container)
//! ```
//!
//! Category limits count the heavy family as a whole (Heavy, Refrigerated and
//! Liquid all count toward `max_heavy`), while `max_refrigerated` and
//! `max_liquid` count only their own variant. Category checks are skipped
//! under [`AdmissionMode::TotalsOnly`].

use crate::cargo::{Container, ContainerKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Admission limits for a vessel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityPolicy {
    total_weight: u64,
    max_containers: usize,
    max_heavy: usize,
    max_refrigerated: usize,
    max_liquid: usize,
}

impl CapacityPolicy {
    /// Create a policy
    ///
    /// # Arguments
    /// * `total_weight` - Maximum combined cargo weight in kilograms
    /// * `max_containers` - Maximum number of containers of any variant
    /// * `max_heavy` - Maximum number of heavy-family containers
    /// * `max_refrigerated` - Maximum number of refrigerated containers
    /// * `max_liquid` - Maximum number of liquid containers
    pub const fn new(
        total_weight: u64,
        max_containers: usize,
        max_heavy: usize,
        max_refrigerated: usize,
        max_liquid: usize,
    ) -> Self {
        Self {
            total_weight,
            max_containers,
            max_heavy,
            max_refrigerated,
            max_liquid,
        }
    }

    /// Maximum combined cargo weight
    pub const fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Maximum number of containers
    pub const fn max_containers(&self) -> usize {
        self.max_containers
    }

    /// Maximum number of containers in `category`
    pub const fn category_limit(&self, category: Category) -> usize {
        match category {
            Category::Heavy => self.max_heavy,
            Category::Refrigerated => self.max_refrigerated,
            Category::Liquid => self.max_liquid,
        }
    }

    /// Decide whether `candidate` may join cargo summarized by `load`
    pub fn admit(
        &self,
        load: &CargoSummary,
        candidate: &Container,
        mode: AdmissionMode,
    ) -> Result<(), CapacityViolation> {
        if load.count >= self.max_containers {
            return Err(CapacityViolation::Full {
                max: self.max_containers,
            });
        }

        let attempted = load.weight + u64::from(candidate.weight());
        if attempted > self.total_weight {
            return Err(CapacityViolation::Weight {
                attempted,
                capacity: self.total_weight,
            });
        }

        if mode == AdmissionMode::Strict {
            for &category in Category::of(candidate.kind()) {
                let max = self.category_limit(category);
                if load.category_count(category) >= max {
                    return Err(CapacityViolation::Category { category, max });
                }
            }
        }

        Ok(())
    }
}

/// Whether per-category limits take part in admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdmissionMode {
    /// Check count, weight and per-category limits
    #[default]
    Strict,
    /// Check count and weight only
    TotalsOnly,
}

/// Per-category limit bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Heavy family (Heavy, Refrigerated, Liquid)
    Heavy,
    /// Refrigerated only
    Refrigerated,
    /// Liquid only
    Liquid,
}

impl Category {
    /// Categories a container of `kind` counts toward
    pub fn of(kind: ContainerKind) -> &'static [Category] {
        match kind {
            ContainerKind::Basic => &[],
            ContainerKind::Heavy => &[Category::Heavy],
            ContainerKind::Refrigerated => &[Category::Heavy, Category::Refrigerated],
            ContainerKind::Liquid => &[Category::Heavy, Category::Liquid],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Heavy => f.write_str("heavy"),
            Category::Refrigerated => f.write_str("refrigerated"),
            Category::Liquid => f.write_str("liquid"),
        }
    }
}

/// Running totals of a cargo set, as seen by admission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CargoSummary {
    /// Number of containers
    pub count: usize,
    /// Combined weight
    pub weight: u64,
    /// Heavy-family containers
    pub heavy: usize,
    /// Refrigerated containers
    pub refrigerated: usize,
    /// Liquid containers
    pub liquid: usize,
}

impl CargoSummary {
    /// Summarize a set of containers
    pub fn of<'a>(containers: impl IntoIterator<Item = &'a Container>) -> Self {
        let mut summary = CargoSummary::default();
        for container in containers {
            summary.add(container);
        }
        summary
    }

    /// Account for one more container
    pub fn add(&mut self, container: &Container) {
        self.count += 1;
        self.weight += u64::from(container.weight());
        for category in Category::of(container.kind()) {
            match category {
                Category::Heavy => self.heavy += 1,
                Category::Refrigerated => self.refrigerated += 1,
                Category::Liquid => self.liquid += 1,
            }
        }
    }

    /// Containers counted toward `category`
    pub fn category_count(&self, category: Category) -> usize {
        match category {
            Category::Heavy => self.heavy,
            Category::Refrigerated => self.refrigerated,
            Category::Liquid => self.liquid,
        }
    }
}

/// Reason a container was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityViolation {
    /// The vessel already carries its maximum number of containers
    #[error("vessel is full: {max} containers aboard")]
    Full {
        /// Container limit
        max: usize,
    },

    /// Admitting the container would exceed the weight limit
    #[error("weight {attempted} would exceed capacity {capacity}")]
    Weight {
        /// Total weight had the container been admitted
        attempted: u64,
        /// Weight limit
        capacity: u64,
    },

    /// The per-category limit is already reached
    #[error("{category} limit of {max} containers reached")]
    Category {
        /// Category that is full
        category: Category,
        /// Category limit
        max: usize,
    },
}

impl CapacityViolation {
    /// True when no container of any kind can be admitted until one is unloaded
    pub fn is_hard_stop(&self) -> bool {
        matches!(self, CapacityViolation::Full { .. })
    }
}
