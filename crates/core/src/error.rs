//! Error types for truck loading.

use crate::geometry::{CrateId, Dimension, Volume};
use thiserror::Error;

/// Result type alias for truck loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur before a loading plan is computed.
///
/// All variants are raised up front; once the placement search starts it
/// never fails. A crate that finds no free spot is reported as unplaced in
/// the resulting plan instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A crate extent is larger than every truck dimension.
    #[error("Crate {crate_id} has a {dimension} of {value}, larger than every truck dimension")]
    CrateTooLarge {
        crate_id: CrateId,
        dimension: Dimension,
        value: u32,
    },

    /// The truck has no cargo volume.
    #[error("Volume of cargo truck must be greater than 0")]
    InvalidCargoVolume,

    /// The crates have no volume in total.
    #[error("Volume of crates must be greater than 0")]
    InvalidCrateVolume,

    /// The crates together are larger than the truck.
    #[error("The volume of crates ({crates}) exceeds the volume of cargo ({cargo})")]
    VolumeExceeded { crates: Volume, cargo: Volume },

    /// Two crates share the same identifier.
    #[error("Crate id {0} is used more than once")]
    DuplicateCrateId(CrateId),

    /// The truck volume cannot be held as an in-memory occupancy grid.
    #[error("Truck volume {0} is too large for an occupancy grid")]
    GridTooLarge(Volume),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
