//! Loading instructions handed to the loading crew.

use crate::geometry::CrateId;
use crate::orientation::Orientation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How and where to load a single crate.
///
/// Only the X and Y coordinates of the crate's origin are reported. The
/// length-axis coordinate is available on [`crate::Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct LoadingInstruction {
    /// The crate this instruction is for.
    pub crate_id: CrateId,

    /// 0-based rank of the crate in descending-volume loading order.
    pub loading_step_number: usize,

    /// X coordinate of the crate's origin.
    pub top_left_x: u32,

    /// Y coordinate of the crate's origin.
    pub top_left_y: u32,

    /// Whether the crate is turned horizontally.
    pub turn_horizontal: bool,

    /// Whether the crate is turned vertically.
    pub turn_vertical: bool,
}

impl LoadingInstruction {
    /// Creates an instruction for a crate loaded at `(x, y)` in `orientation`.
    pub fn new(
        crate_id: CrateId,
        loading_step_number: usize,
        top_left_x: u32,
        top_left_y: u32,
        orientation: Orientation,
    ) -> Self {
        Self {
            crate_id,
            loading_step_number,
            top_left_x,
            top_left_y,
            turn_horizontal: orientation.turn_horizontal(),
            turn_vertical: orientation.turn_vertical(),
        }
    }

    /// Returns the orientation selected by the two turn flags.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_turns(self.turn_horizontal, self.turn_vertical)
    }
}
