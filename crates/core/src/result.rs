//! Loading plan representation.

use crate::geometry::{CrateId, Volume};
use crate::instruction::LoadingInstruction;
use crate::placement::{Placement, PlacementOutcome, PlacementStats};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a planning run.
///
/// Every input crate has an entry. Crates that could not be loaded are
/// recorded as [`PlacementOutcome::Unplaced`] rather than left out, so a
/// partially packed truck is always visible to the caller.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadingPlan {
    /// Outcome per crate, keyed by crate id.
    outcomes: BTreeMap<CrateId, PlacementOutcome>,

    /// Cargo volume of the truck.
    pub truck_volume: Volume,

    /// Total volume of the loaded crates.
    pub placed_volume: Volume,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Strategy used for planning.
    pub strategy: Option<String>,
}

impl LoadingPlan {
    /// Creates an empty plan for a truck with the given cargo volume.
    pub fn new(truck_volume: Volume) -> Self {
        Self {
            outcomes: BTreeMap::new(),
            truck_volume,
            placed_volume: 0,
            computation_time_ms: 0,
            strategy: None,
        }
    }

    /// Records the outcome for a crate, replacing any earlier one.
    pub fn record(&mut self, crate_id: CrateId, outcome: PlacementOutcome) {
        if let Some(placement) = outcome.placement() {
            self.placed_volume += placement.volume();
        }
        if let Some(old) = self.outcomes.insert(crate_id, outcome) {
            if let Some(placement) = old.placement() {
                self.placed_volume -= placement.volume();
            }
        }
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Returns every recorded outcome, ordered by crate id.
    pub fn outcomes(&self) -> &BTreeMap<CrateId, PlacementOutcome> {
        &self.outcomes
    }

    /// Returns the outcome for a crate.
    pub fn outcome(&self, crate_id: CrateId) -> Option<&PlacementOutcome> {
        self.outcomes.get(&crate_id)
    }

    /// Returns the instruction for a crate, if it was loaded.
    pub fn instruction(&self, crate_id: CrateId) -> Option<&LoadingInstruction> {
        self.outcome(crate_id).and_then(PlacementOutcome::instruction)
    }

    /// Returns the instruction mapping with entries for loaded crates only.
    pub fn instructions(&self) -> BTreeMap<CrateId, LoadingInstruction> {
        self.outcomes
            .iter()
            .filter_map(|(&id, outcome)| outcome.instruction().map(|i| (id, *i)))
            .collect()
    }

    /// Returns all placements, ordered by crate id.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.outcomes.values().filter_map(PlacementOutcome::placement)
    }

    /// Returns the ids of crates that could not be loaded.
    pub fn unplaced(&self) -> Vec<CrateId> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_placed())
            .map(|(&id, _)| id)
            .collect()
    }

    /// Returns true if every crate was loaded.
    pub fn all_placed(&self) -> bool {
        self.outcomes.values().all(PlacementOutcome::is_placed)
    }

    /// Returns the number of loaded crates.
    pub fn placed_count(&self) -> usize {
        self.placements().count()
    }

    /// Returns the number of crates left out.
    pub fn unplaced_count(&self) -> usize {
        self.outcomes.len() - self.placed_count()
    }

    /// Utilization ratio (0.0 - 1.0) of the truck's cargo volume.
    pub fn utilization(&self) -> f64 {
        if self.truck_volume == 0 {
            return 0.0;
        }
        self.placed_volume as f64 / self.truck_volume as f64
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(self.placements())
    }
}

/// Summary statistics for a loading plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSummary {
    /// Total crates requested.
    pub total_requested: usize,
    /// Total crates loaded.
    pub total_placed: usize,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Strategy used.
    pub strategy: String,
}

impl From<&LoadingPlan> for PlanSummary {
    fn from(plan: &LoadingPlan) -> Self {
        Self {
            total_requested: plan.outcomes.len(),
            total_placed: plan.placed_count(),
            utilization_percent: plan.utilization() * 100.0,
            time_ms: plan.computation_time_ms,
            strategy: plan
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
