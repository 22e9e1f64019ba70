//! # Truck Loader Core
//!
//! Core types shared by the truck loading planners.
//!
//! ## Core Components
//!
//! - **Geometry**: `Truck`, `Crate` and the `Dimension` axis names
//! - **Orientation**: the fixed table of allowed crate turns
//! - **Results**: `LoadingInstruction`, `Placement`, `PlacementOutcome`, `LoadingPlan`
//! - **Planner trait**: common interface for planning algorithms
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod instruction;
pub mod orientation;
pub mod placement;
pub mod planner;
pub mod result;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Crate, CrateId, Dimension, Truck, Volume};
pub use instruction::LoadingInstruction;
pub use orientation::{AxisMapping, Orientation};
pub use placement::{Placement, PlacementOutcome, PlacementStats};
pub use planner::{Config, Planner};
pub use result::{LoadingPlan, PlanSummary};
