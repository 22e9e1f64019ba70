//! Capacity checks run before any placement work.
//!
//! These rule out inputs that can never be loaded. Passing them does not mean
//! every crate will find a spot.

use std::collections::HashSet;
use truck_loader_core::{Crate, Dimension, Error, Result, Truck, Volume};

/// Volumes computed while validating a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    /// Cargo volume of the truck.
    pub truck_volume: Volume,
    /// Summed volume of all crates.
    pub crate_volume: Volume,
}

impl CapacityReport {
    /// Volume left over if every crate were loaded.
    pub fn spare_volume(&self) -> Volume {
        self.truck_volume.saturating_sub(self.crate_volume)
    }
}

/// Validates that `crates` can possibly be loaded into `truck`.
///
/// Checks run in a fixed order and the first failure is returned:
/// 1. each crate dimension (width, then height, then length) against all
///    three truck dimensions
/// 2. truck volume is positive
/// 3. total crate volume is positive
/// 4. total crate volume does not exceed the truck volume
/// 5. crate ids are unique
pub fn validate(truck: &Truck, crates: &[Crate]) -> Result<CapacityReport> {
    for dimension in Dimension::ALL {
        if let Some(item) = crates
            .iter()
            .find(|item| truck.exceeded_on_every_axis(item.dimension(dimension)))
        {
            return Err(Error::CrateTooLarge {
                crate_id: item.id(),
                dimension,
                value: item.dimension(dimension),
            });
        }
    }

    let truck_volume = truck.volume();
    // Saturates instead of wrapping; any saturated total still exceeds the
    // largest possible truck.
    let crate_volume = crates
        .iter()
        .map(Crate::volume)
        .fold(0, Volume::saturating_add);

    if truck_volume == 0 {
        return Err(Error::InvalidCargoVolume);
    }
    if crate_volume == 0 {
        return Err(Error::InvalidCrateVolume);
    }
    if crate_volume > truck_volume {
        return Err(Error::VolumeExceeded {
            crates: crate_volume,
            cargo: truck_volume,
        });
    }

    let mut seen = HashSet::with_capacity(crates.len());
    if let Some(item) = crates.iter().find(|item| !seen.insert(item.id())) {
        return Err(Error::DuplicateCrateId(item.id()));
    }

    Ok(CapacityReport {
        truck_volume,
        crate_volume,
    })
}
