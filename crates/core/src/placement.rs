//! Placement representation for loaded crates.

use crate::geometry::{CrateId, Volume};
use crate::instruction::LoadingInstruction;
use crate::orientation::Orientation;
use nalgebra::Vector3;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A crate committed to a spot in the truck.
///
/// Wraps the [`LoadingInstruction`] together with the full origin and the
/// oriented extents, which the instruction alone does not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Instruction reported to the loading crew.
    pub instruction: LoadingInstruction,

    /// Minimal corner `(x, y, z)` of the crate.
    pub origin: Vector3<u32>,

    /// Orientation the crate was loaded in.
    pub orientation: Orientation,

    /// Extents along the truck's X, Y and Z axes in that orientation.
    pub extents: Vector3<u32>,
}

impl Placement {
    /// Creates a placement for a crate at `origin` with the given extents.
    pub fn new(
        crate_id: CrateId,
        loading_step_number: usize,
        origin: Vector3<u32>,
        orientation: Orientation,
        extents: Vector3<u32>,
    ) -> Self {
        Self {
            instruction: LoadingInstruction::new(
                crate_id,
                loading_step_number,
                origin.x,
                origin.y,
                orientation,
            ),
            origin,
            orientation,
            extents,
        }
    }

    /// Returns the placed crate's id.
    pub fn crate_id(&self) -> CrateId {
        self.instruction.crate_id
    }

    /// Returns the loading step number.
    pub fn loading_step_number(&self) -> usize {
        self.instruction.loading_step_number
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> u32 {
        self.origin.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> u32 {
        self.origin.y
    }

    /// Returns the z coordinate.
    pub fn z(&self) -> u32 {
        self.origin.z
    }

    /// Returns the exclusive upper corner of the occupied box.
    pub fn max_corner(&self) -> Vector3<u64> {
        self.origin.map(u64::from) + self.extents.map(u64::from)
    }

    /// Returns the number of unit cells the crate occupies.
    pub fn volume(&self) -> Volume {
        self.extents.iter().map(|&e| Volume::from(e)).product()
    }

    /// Returns true if the occupied boxes of both placements share a cell.
    pub fn overlaps(&self, other: &Placement) -> bool {
        if self.volume() == 0 || other.volume() == 0 {
            return false;
        }
        let (a_max, b_max) = (self.max_corner(), other.max_corner());
        (0..3).all(|axis| {
            u64::from(self.origin[axis]) < b_max[axis] && u64::from(other.origin[axis]) < a_max[axis]
        })
    }
}

/// What happened to a crate during planning.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum PlacementOutcome {
    /// The crate was loaded.
    Placed(Placement),

    /// No origin and orientation left room for the crate.
    Unplaced {
        /// Rank the crate had in loading order.
        loading_step_number: usize,
    },
}

impl PlacementOutcome {
    /// Returns true if the crate was loaded.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed(_))
    }

    /// Returns the placement, if the crate was loaded.
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            PlacementOutcome::Placed(placement) => Some(placement),
            PlacementOutcome::Unplaced { .. } => None,
        }
    }

    /// Returns the loading instruction, if the crate was loaded.
    pub fn instruction(&self) -> Option<&LoadingInstruction> {
        self.placement().map(|p| &p.instruction)
    }

    /// Returns the rank the crate had in loading order.
    pub fn loading_step_number(&self) -> usize {
        match self {
            PlacementOutcome::Placed(placement) => placement.loading_step_number(),
            PlacementOutcome::Unplaced {
                loading_step_number,
            } => *loading_step_number,
        }
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of placements that needed any turn.
    pub turned_count: usize,
    /// Distribution of orientations used.
    pub orientation_distribution: BTreeMap<Orientation, usize>,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements<'a>(placements: impl IntoIterator<Item = &'a Placement>) -> Self {
        let mut stats = Self::default();

        for p in placements {
            stats.count += 1;
            if p.orientation != Orientation::NoRotation {
                stats.turned_count += 1;
            }
            *stats
                .orientation_distribution
                .entry(p.orientation)
                .or_insert(0) += 1;
        }

        stats
    }
}
