//! Truck and crate types.

use nalgebra::Vector3;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a crate, unique within one planning run.
pub type CrateId = u32;

/// Count of unit cells. Wide enough for the product of three `u32` extents
/// and for sums of such products.
pub type Volume = u128;

/// One of the three extents of a crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    /// Width, the first component of the dimension vector.
    Width,
    /// Height, the second component.
    Height,
    /// Length, the third component.
    Length,
}

impl Dimension {
    /// All dimensions in vector order.
    pub const ALL: [Dimension; 3] = [Dimension::Width, Dimension::Height, Dimension::Length];

    /// Index of this dimension in a `(width, height, length)` vector.
    pub const fn index(self) -> usize {
        match self {
            Dimension::Width => 0,
            Dimension::Height => 1,
            Dimension::Length => 2,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
            Dimension::Length => "length",
        };
        f.write_str(name)
    }
}

/// The cargo space of a truck, in discrete units.
///
/// Width runs along the X axis, height along Y and length along Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct Truck {
    width: u32,
    height: u32,
    length: u32,
}

impl Truck {
    /// Creates a truck with the given cargo dimensions.
    pub fn new(width: u32, height: u32, length: u32) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Returns the width (X extent).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height (Y extent).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the length (Z extent).
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the dimensions as `(width, height, length)`.
    pub fn dimensions(&self) -> Vector3<u32> {
        Vector3::new(self.width, self.height, self.length)
    }

    /// Returns the cargo volume.
    pub fn volume(&self) -> Volume {
        Volume::from(self.width) * Volume::from(self.height) * Volume::from(self.length)
    }

    /// Returns true if `value` is larger than the width, height and length
    /// at once, so no rotation can seat it along any truck axis.
    pub fn exceeded_on_every_axis(&self, value: u32) -> bool {
        value > self.width && value > self.height && value > self.length
    }

    /// Returns true if a box of `extents` anchored at `origin` lies entirely
    /// inside the cargo space.
    pub fn contains(&self, origin: &Vector3<u32>, extents: &Vector3<u32>) -> bool {
        let dims = self.dimensions();
        (0..3).all(|axis| u64::from(origin[axis]) + u64::from(extents[axis]) <= u64::from(dims[axis]))
    }
}

/// A rectangular crate to be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct Crate {
    #[cfg_attr(feature = "serde", serde(rename = "CrateID", alias = "CrateId"))]
    id: CrateId,
    width: u32,
    height: u32,
    length: u32,
}

impl Crate {
    /// Creates a crate with the given id and dimensions.
    pub fn new(id: CrateId, width: u32, height: u32, length: u32) -> Self {
        Self {
            id,
            width,
            height,
            length,
        }
    }

    /// Returns the crate id.
    pub fn id(&self) -> CrateId {
        self.id
    }

    /// Returns the width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the length.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the extent along a single dimension.
    pub fn dimension(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
            Dimension::Length => self.length,
        }
    }

    /// Returns the dimensions as `(width, height, length)`.
    pub fn dimensions(&self) -> Vector3<u32> {
        Vector3::new(self.width, self.height, self.length)
    }

    /// Returns the crate volume.
    pub fn volume(&self) -> Volume {
        Volume::from(self.width) * Volume::from(self.height) * Volume::from(self.length)
    }
}
