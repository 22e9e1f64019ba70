//! # Truck Loader
//!
//! Loading plans for rectangular crates in a rectangular cargo truck.
//!
//! ## Quick Start
//!
//! ```rust
//! use truck_loader::{Crate, GreedyPlanner, Planner, Truck};
//!
//! let truck = Truck::new(2, 1, 1);
//! let crates = vec![Crate::new(1, 1, 1, 1), Crate::new(2, 1, 1, 1)];
//!
//! let plan = GreedyPlanner::default_config().plan(&truck, &crates)?;
//! assert!(plan.all_placed());
//! assert_eq!(plan.instruction(2).map(|i| i.top_left_x), Some(1));
//! # Ok::<(), truck_loader::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types and the planner trait.
pub use truck_loader_core as core;

/// Greedy planner, occupancy grid and capacity checks.
pub use truck_loader_planner as planner;

// Re-export commonly used types at root level
pub use truck_loader_core::{
    Config, Crate, CrateId, Dimension, Error, LoadingInstruction, LoadingPlan, Orientation,
    Placement, PlacementOutcome, PlanSummary, Planner, Result, Truck, Volume,
};
pub use truck_loader_planner::{plan, validate, CapacityReport, GreedyPlanner};
