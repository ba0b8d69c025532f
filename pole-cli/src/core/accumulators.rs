//! Moment accumulators shared between the pole and its dependents.
//!
//! Write windows:
//!
//! - [`NowindAccumulators`] are reset by the pole at commit and rebuilt by dependents on every
//!   step until sync. They are read at postsync to build the stress polynomial.
//! - [`SyncAccumulators`] are reset at presync when a recalculation is pending, added to by
//!   dependents during sync, and read at postsync.

use pole_quantities::{force::Pounds, moment::FootPounds};
use serde::Serialize;

/// Moments per unit of wind pressure.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NowindAccumulators {
    pub equipment_moment: FootPounds,
    pub wire_moment: FootPounds,
    pub wire_load: Pounds,
}

impl NowindAccumulators {
    /// Moment per unit of wind pressure contributed by the dependents.
    pub fn moment(&self) -> FootPounds {
        self.equipment_moment + self.wire_moment
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SyncAccumulators {
    pub pole_moment: FootPounds,
    pub equipment_moment: FootPounds,
    pub wire_moment: FootPounds,
    pub wire_tension: FootPounds,
    pub wire_load: Pounds,
}

impl SyncAccumulators {
    /// Fresh accumulators with the pole's own moment already in.
    pub fn seeded(pole_moment: FootPounds) -> Self {
        Self { pole_moment, ..Self::default() }
    }

    /// Bending moment without the wire tension.
    pub fn bending_moment(&self) -> FootPounds {
        self.pole_moment + self.equipment_moment + self.wire_moment
    }

    pub fn total_moment(&self) -> FootPounds {
        self.bending_moment() + self.wire_tension
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Accumulators {
    pub nowind: NowindAccumulators,
    pub sync: SyncAccumulators,
}
