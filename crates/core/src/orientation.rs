//! Allowed crate orientations.
//!
//! A crate can be turned into one of four fixed orientations. Each one maps the
//! crate's `(width, height, length)` onto the truck's `(X, Y, Z)` axes. The
//! table order is also the order in which the placement search tries them.

use crate::geometry::{Crate, Dimension};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned orientation of a crate inside the truck.
///
/// The derived ordering follows placement priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Width, height and length map directly onto X, Y and Z.
    #[default]
    NoRotation,
    /// Turned 90° about Z: height along X, width along Y.
    Vertical,
    /// Turned 90° about Y: length along X, width along Z.
    Horizontal,
    /// Compound turn: height along X, length along Y, width along Z.
    Both,
}

/// Crate dimension placed along each truck axis, indexed `[X, Y, Z]`.
pub type AxisMapping = [Dimension; 3];

impl Orientation {
    /// All orientations in placement priority order.
    pub const ALL: [Orientation; 4] = [
        Orientation::NoRotation,
        Orientation::Vertical,
        Orientation::Horizontal,
        Orientation::Both,
    ];

    /// Returns which crate dimension lies along the truck's X, Y and Z axes.
    pub const fn axis_mapping(self) -> AxisMapping {
        use Dimension::{Height, Length, Width};
        match self {
            Orientation::NoRotation => [Width, Height, Length],
            Orientation::Vertical => [Height, Width, Length],
            Orientation::Horizontal => [Length, Height, Width],
            Orientation::Both => [Height, Length, Width],
        }
    }

    /// Returns the `TurnHorizontal` flag reported for this orientation.
    pub const fn turn_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal | Orientation::Both)
    }

    /// Returns the `TurnVertical` flag reported for this orientation.
    pub const fn turn_vertical(self) -> bool {
        matches!(self, Orientation::Vertical | Orientation::Both)
    }

    /// Recovers the orientation from its pair of turn flags.
    pub const fn from_turns(turn_horizontal: bool, turn_vertical: bool) -> Self {
        match (turn_horizontal, turn_vertical) {
            (false, false) => Orientation::NoRotation,
            (false, true) => Orientation::Vertical,
            (true, false) => Orientation::Horizontal,
            (true, true) => Orientation::Both,
        }
    }

    /// Returns the extents along the truck's X, Y and Z axes of `item` in
    /// this orientation.
    pub fn extents(self, item: &Crate) -> Vector3<u32> {
        let [x, y, z] = self.axis_mapping();
        Vector3::new(item.dimension(x), item.dimension(y), item.dimension(z))
    }
}
