//! Dense occupancy grid over the truck's cargo space.

use bitvec::order::Lsb0;
use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;
use nalgebra::Vector3;
use truck_loader_core::{Crate, Error, Orientation, Result, Truck, Volume};

/// One bit per unit cell of the truck, set once a crate claims the cell.
///
/// Cell `(x, y, z)` lives at `x + width * (y + height * z)`.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    dims: Vector3<u32>,
    cells: BitVec,
}

impl OccupancyGrid {
    /// Creates an empty grid sized to the truck.
    ///
    /// Fails with [`Error::GridTooLarge`] if the cell count does not fit a bit
    /// buffer or the buffer cannot be allocated.
    pub fn new(truck: &Truck) -> Result<Self> {
        let volume = truck.volume();
        let too_large = || Error::GridTooLarge(volume);

        let len = usize::try_from(volume)
            .ok()
            .filter(|&len| len <= BitSlice::<usize, Lsb0>::MAX_BITS)
            .ok_or_else(too_large)?;

        let word_count = len.div_ceil(usize::BITS as usize);
        let mut words: Vec<usize> = Vec::new();
        words.try_reserve_exact(word_count).map_err(|_| too_large())?;
        words.resize(word_count, 0);

        let mut cells = BitVec::from_vec(words);
        cells.truncate(len);

        Ok(Self {
            dims: truck.dimensions(),
            cells,
        })
    }

    /// Returns the grid size as `(width, height, length)`.
    pub fn dimensions(&self) -> Vector3<u32> {
        self.dims
    }

    /// Returns the total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of claimed cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.count_ones()
    }

    /// Returns true if `cell` is inside the grid and claimed.
    pub fn is_occupied(&self, cell: &Vector3<u32>) -> bool {
        self.contains_cell(cell) && self.cells[self.index(cell.x, cell.y, cell.z)]
    }

    /// Returns true if a crate in `orientation` anchored at `origin` stays
    /// inside the grid and touches no claimed cell.
    pub fn fits(&self, item: &Crate, origin: &Vector3<u32>, orientation: Orientation) -> bool {
        self.fits_extents(origin, &orientation.extents(item))
    }

    /// Returns true if a box of `extents` anchored at `origin` stays inside the
    /// grid and touches no claimed cell.
    pub fn fits_extents(&self, origin: &Vector3<u32>, extents: &Vector3<u32>) -> bool {
        // A box without cells has nothing to collide with.
        if extents.iter().any(|&e| e == 0) {
            return true;
        }
        if !self.contains_box(origin, extents) {
            return false;
        }

        for z in origin.z..origin.z + extents.z {
            for y in origin.y..origin.y + extents.y {
                let row = self.index(origin.x, y, z);
                if self.cells[row..row + extents.x as usize].any() {
                    return false;
                }
            }
        }
        true
    }

    /// Claims every cell of a crate in `orientation` anchored at `origin`.
    ///
    /// Callers must check [`OccupancyGrid::fits`] with the same arguments
    /// first; overlaps are not detected here.
    pub fn claim(&mut self, item: &Crate, origin: &Vector3<u32>, orientation: Orientation) {
        self.claim_extents(origin, &orientation.extents(item));
    }

    /// Claims every cell of a box of `extents` anchored at `origin`.
    pub fn claim_extents(&mut self, origin: &Vector3<u32>, extents: &Vector3<u32>) {
        if extents.iter().any(|&e| e == 0) {
            return;
        }
        debug_assert!(self.contains_box(origin, extents));

        for z in origin.z..origin.z + extents.z {
            for y in origin.y..origin.y + extents.y {
                let row = self.index(origin.x, y, z);
                self.cells[row..row + extents.x as usize].fill(true);
            }
        }
    }

    fn contains_cell(&self, cell: &Vector3<u32>) -> bool {
        cell.x < self.dims.x && cell.y < self.dims.y && cell.z < self.dims.z
    }

    fn contains_box(&self, origin: &Vector3<u32>, extents: &Vector3<u32>) -> bool {
        (0..3).all(|axis| {
            u64::from(origin[axis]) + u64::from(extents[axis]) <= u64::from(self.dims[axis])
        })
    }

    fn index(&self, x: u32, y: u32, z: u32) -> usize {
        let (width, height) = (self.dims.x as usize, self.dims.y as usize);
        x as usize + width * (y as usize + height * z as usize)
    }
}
