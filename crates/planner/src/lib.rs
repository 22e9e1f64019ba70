//! # Truck Loader Planner
//!
//! Greedy loading plans for rectangular crates in a cargo truck.
//!
//! A planning run validates the request, sorts the crates largest first and
//! places each one at the first free spot of a dense occupancy grid.

pub mod greedy;
pub mod grid;
pub mod ordering;
pub mod validator;

// Re-exports
pub use greedy::GreedyPlanner;
pub use grid::OccupancyGrid;
pub use ordering::loading_order;
pub use truck_loader_core::{
    Config, Crate, CrateId, Error, LoadingInstruction, LoadingPlan, Orientation, Placement,
    PlacementOutcome, Planner, Result, Truck, Volume,
};
pub use validator::{validate, CapacityReport};

/// Plans a loading with the default greedy planner.
pub fn plan(truck: &Truck, crates: &[Crate]) -> Result<LoadingPlan> {
    GreedyPlanner::default_config().plan(truck, crates)
}
