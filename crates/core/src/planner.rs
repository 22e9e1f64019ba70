//! Planner trait and configuration.

use crate::geometry::{Crate, Truck};
use crate::orientation::Orientation;
use crate::result::LoadingPlan;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for planners.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Orientations the search may try.
    ///
    /// They are always tried in [`Orientation::ALL`] priority order, whatever
    /// order they are listed in here.
    pub orientations: Vec<Orientation>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientations: Orientation::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientations the search may try.
    pub fn with_orientations(mut self, orientations: impl IntoIterator<Item = Orientation>) -> Self {
        self.orientations = orientations.into_iter().collect();
        self
    }

    /// Restricts loading to crates in their original orientation.
    pub fn with_fixed_orientation(self) -> Self {
        self.with_orientations([Orientation::NoRotation])
    }

    /// Returns the configured orientations in priority order, without
    /// duplicates.
    pub fn allowed_orientations(&self) -> Vec<Orientation> {
        let mut orientations = self.orientations.clone();
        orientations.sort();
        orientations.dedup();
        orientations
    }

    /// Checks that the configuration can drive a planning run.
    pub fn validate(&self) -> Result<()> {
        if self.orientations.is_empty() {
            return Err(Error::Config(
                "at least one orientation must be allowed".into(),
            ));
        }
        Ok(())
    }
}

/// Trait for loading planners.
pub trait Planner {
    /// Computes a loading plan for `crates` in `truck`.
    ///
    /// Fails only on inputs that cannot be loaded at all. Crates that find no
    /// spot are reported as unplaced in the returned plan.
    fn plan(&self, truck: &Truck, crates: &[Crate]) -> Result<LoadingPlan>;
}
