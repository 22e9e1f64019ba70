//! JSON request and response types.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use truck_loader::{
    CapacityReport, Config, Crate, CrateId, LoadingInstruction, LoadingPlan, Placement,
    PlanSummary, Truck, Volume,
};

/// A planning request as read from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    /// Cargo space of the truck.
    pub truck: Truck,

    /// Crates to load.
    pub crates: Vec<Crate>,

    /// Planner configuration.
    #[serde(default)]
    pub config: Config,
}

impl PlanRequest {
    /// Reads a request from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read request {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse request {}", path.display()))
    }

    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Response of the `plan` command.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    /// Instructions for loaded crates, keyed by crate id.
    pub instructions: BTreeMap<CrateId, LoadingInstruction>,

    /// Crates that could not be loaded.
    pub unplaced: Vec<CrateId>,

    /// Plan statistics.
    pub summary: PlanSummary,

    /// Full placements including the length-axis coordinate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placements: Option<Vec<Placement>>,
}

impl PlanResponse {
    /// Builds the response for a finished plan.
    pub fn new(plan: &LoadingPlan, with_placements: bool) -> Self {
        Self {
            instructions: plan.instructions(),
            unplaced: plan.unplaced(),
            summary: PlanSummary::from(plan),
            placements: with_placements.then(|| plan.placements().cloned().collect()),
        }
    }
}

/// Response of the `validate` command.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub truck_volume: Volume,
    pub crate_volume: Volume,
    pub spare_volume: Volume,
}

impl From<CapacityReport> for ValidateResponse {
    fn from(report: CapacityReport) -> Self {
        Self {
            truck_volume: report.truck_volume,
            crate_volume: report.crate_volume,
            spare_volume: report.spare_volume(),
        }
    }
}
