//! Greedy largest-first loading planner.

use crate::grid::OccupancyGrid;
use crate::ordering::loading_order;
use crate::validator::validate;
use nalgebra::Vector3;
use std::time::Instant;
use truck_loader_core::{
    Config, Crate, LoadingPlan, Orientation, Placement, PlacementOutcome, Planner, Result, Truck,
    Volume,
};

/// Greedy planner that loads the largest crates first.
///
/// Each crate goes to the first origin, scanning X, then Y, then Z in
/// ascending order, at which one of the allowed orientations fits. Nothing is
/// ever moved once placed, and a crate with no room left is reported as
/// unplaced.
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner {
    config: Config,
}

impl GreedyPlanner {
    /// Creates a new planner with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a planner with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the planner configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Finds and claims the first free spot for `item`.
    fn place(
        &self,
        grid: &mut OccupancyGrid,
        item: &Crate,
        step: usize,
        orientations: &[Orientation],
    ) -> Option<Placement> {
        let dims = grid.dimensions();

        for x in 0..dims.x {
            for y in 0..dims.y {
                for z in 0..dims.z {
                    let origin = Vector3::new(x, y, z);
                    for &orientation in orientations {
                        if grid.fits(item, &origin, orientation) {
                            grid.claim(item, &origin, orientation);
                            return Some(Placement::new(
                                item.id(),
                                step,
                                origin,
                                orientation,
                                orientation.extents(item),
                            ));
                        }
                    }
                }
            }
        }

        None
    }
}

impl Planner for GreedyPlanner {
    fn plan(&self, truck: &Truck, crates: &[Crate]) -> Result<LoadingPlan> {
        let start = Instant::now();

        self.config.validate()?;
        let report = validate(truck, crates)?;
        let mut grid = OccupancyGrid::new(truck)?;
        let orientations = self.config.allowed_orientations();

        log::debug!(
            "Planning {} crates ({} of {} units) in {}x{}x{} truck",
            crates.len(),
            report.crate_volume,
            report.truck_volume,
            truck.width(),
            truck.height(),
            truck.length()
        );

        let mut plan = LoadingPlan::new(report.truck_volume).with_strategy("Greedy");

        for (step, item) in loading_order(crates).into_iter().enumerate() {
            match self.place(&mut grid, item, step, &orientations) {
                Some(placement) => {
                    log::trace!(
                        "Step {}: crate {} at ({}, {}, {}) {:?}",
                        step,
                        item.id(),
                        placement.x(),
                        placement.y(),
                        placement.z(),
                        placement.orientation
                    );
                    plan.record(item.id(), PlacementOutcome::Placed(placement));
                }
                None => {
                    log::warn!("Step {}: no room left for crate {}", step, item.id());
                    plan.record(
                        item.id(),
                        PlacementOutcome::Unplaced {
                            loading_step_number: step,
                        },
                    );
                }
            }
        }

        debug_assert_eq!(grid.occupied_cells() as Volume, plan.placed_volume);

        plan.computation_time_ms = start.elapsed().as_millis() as u64;
        log::info!(
            "Loaded {} of {} crates, utilization {}",
            plan.placed_count(),
            crates.len(),
            plan.utilization_percent()
        );

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truck_loader_core::Error;

    fn origin(plan: &LoadingPlan, id: u32) -> Vector3<u32> {
        plan.outcome(id).and_then(|o| o.placement()).unwrap().origin
    }

    #[test]
    fn test_single_crate_fills_truck() {
        let truck = Truck::new(4, 4, 4);
        let crates = vec![Crate::new(1, 4, 4, 4)];

        let plan = GreedyPlanner::default_config().plan(&truck, &crates).unwrap();

        let instructions = plan.instructions();
        assert_eq!(instructions.len(), 1);
        let instruction = instructions[&1];
        assert_eq!(instruction.top_left_x, 0);
        assert_eq!(instruction.top_left_y, 0);
        assert!(!instruction.turn_horizontal);
        assert!(!instruction.turn_vertical);
        assert_eq!(instruction.loading_step_number, 0);
        assert_eq!(plan.strategy.as_deref(), Some("Greedy"));
    }

    #[test]
    fn test_two_cubes_side_by_side() {
        let truck = Truck::new(2, 1, 1);
        let crates = vec![Crate::new(1, 1, 1, 1), Crate::new(2, 1, 1, 1)];

        let plan = GreedyPlanner::default_config().plan(&truck, &crates).unwrap();

        assert!(plan.all_placed());
        assert_eq!(origin(&plan, 1), Vector3::new(0, 0, 0));
        assert_eq!(origin(&plan, 2), Vector3::new(1, 0, 0));
    }

    #[test]
    fn test_z_scanned_before_y() {
        let truck = Truck::new(1, 2, 2);
        let crates = vec![Crate::new(1, 1, 1, 1), Crate::new(2, 1, 1, 1)];

        let plan = GreedyPlanner::default_config().plan(&truck, &crates).unwrap();

        assert_eq!(origin(&plan, 2), Vector3::new(0, 0, 1));
        // The instruction has no Z, so both crates report the same corner.
        assert_eq!(plan.instruction(1).map(|i| (i.top_left_x, i.top_left_y)), Some((0, 0)));
        assert_eq!(plan.instruction(2).map(|i| (i.top_left_x, i.top_left_y)), Some((0, 0)));
    }

    #[test]
    fn test_vertical_turn() {
        // Only fits with its height along the truck's X axis.
        let truck = Truck::new(3, 1, 1);
        let crates = vec![Crate::new(5, 1, 3, 1)];

        let plan = GreedyPlanner::default_config().plan(&truck, &crates).unwrap();
        let instruction = plan.instruction(5).copied().unwrap();
        assert!(!instruction.turn_horizontal);
        assert!(instruction.turn_vertical);
    }

    #[test]
    fn test_horizontal_turn() {
        // Only fits with its length along X and its width along Z.
        let truck = Truck::new(3, 1, 2);
        let crates = vec![Crate::new(5, 2, 1, 3)];

        let plan = GreedyPlanner::default_config().plan(&truck, &crates).unwrap();
        let placement = plan.outcome(5).and_then(|o| o.placement()).unwrap();
        assert_eq!(placement.orientation, Orientation::Horizontal);
        assert_eq!(placement.extents, Vector3::new(3, 1, 2));
    }

    #[test]
    fn test_both_turns() {
        // Height along X, length along Y, width along Z.
        let truck = Truck::new(2, 3, 1);
        let crates = vec![Crate::new(5, 1, 2, 3)];

        let plan = GreedyPlanner::default_config().plan(&truck, &crates).unwrap();
        let instruction = plan.instruction(5).copied().unwrap();
        assert!(instruction.turn_horizontal);
        assert!(instruction.turn_vertical);
    }

    #[test]
    fn test_fixed_orientation_leaves_crate_unplaced() {
        let truck = Truck::new(3, 1, 1);
        let crates = vec![Crate::new(5, 1, 3, 1)];

        let planner = GreedyPlanner::new(Config::new().with_fixed_orientation());
        let plan = planner.plan(&truck, &crates).unwrap();

        assert_eq!(plan.unplaced(), vec![5]);
        assert_eq!(
            plan.outcome(5),
            Some(&PlacementOutcome::Unplaced {
                loading_step_number: 0
            })
        );
        assert!(plan.instructions().is_empty());
    }

    #[test]
    fn test_unplaceable_crate_is_reported() {
        // The first 2x2 crate leaves only a one-unit strip, so the second
        // never fits even though the volumes add up.
        let truck = Truck::new(3, 3, 1);
        let crates = vec![Crate::new(1, 2, 2, 1), Crate::new(2, 2, 2, 1)];

        let plan = GreedyPlanner::default_config().plan(&truck, &crates).unwrap();

        assert_eq!(plan.placed_count(), 1);
        assert_eq!(plan.unplaced(), vec![2]);
        assert_eq!(
            plan.outcome(2),
            Some(&PlacementOutcome::Unplaced {
                loading_step_number: 1
            })
        );
        assert_eq!(plan.instructions().len(), 1);
        assert_eq!(plan.placed_volume, 4);
    }

    #[test]
    fn test_largest_first() {
        let truck = Truck::new(2, 2, 1);
        let crates = vec![
            Crate::new(2, 1, 1, 1),
            Crate::new(1, 1, 2, 1),
            Crate::new(3, 1, 1, 1),
        ];

        let plan = GreedyPlanner::default_config().plan(&truck, &crates).unwrap();

        assert!(plan.all_placed());
        assert_eq!(origin(&plan, 1), Vector3::new(0, 0, 0));
        assert_eq!(origin(&plan, 2), Vector3::new(1, 0, 0));
        assert_eq!(origin(&plan, 3), Vector3::new(1, 1, 0));

        let steps: Vec<_> = [1, 2, 3]
            .iter()
            .map(|&id| plan.instruction(id).unwrap().loading_step_number)
            .collect();
        assert_eq!(steps, vec![0, 1, 2]);
    }

    #[test]
    fn test_errors_propagate() {
        let planner = GreedyPlanner::default_config();

        let err = planner
            .plan(&Truck::new(2, 2, 2), &[Crate::new(1, 3, 1, 1)])
            .unwrap_err();
        assert!(matches!(err, Error::CrateTooLarge { .. }));

        let err = planner
            .plan(
                &Truck::new(1, 1, 1),
                &[Crate::new(1, 1, 1, 1), Crate::new(2, 1, 1, 1)],
            )
            .unwrap_err();
        assert!(matches!(err, Error::VolumeExceeded { .. }));

        let empty = GreedyPlanner::new(Config::new().with_orientations(Vec::<Orientation>::new()));
        let err = empty
            .plan(&Truck::new(1, 1, 1), &[Crate::new(1, 1, 1, 1)])
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_zero_width_crate_takes_first_origin() {
        // The full truck leaves no free cell, but a crate without cells
        // still fits at the first origin scanned.
        let truck = Truck::new(2, 2, 2);
        let crates = vec![Crate::new(7, 0, 1, 1), Crate::new(3, 2, 2, 2)];

        let plan = GreedyPlanner::default_config().plan(&truck, &crates).unwrap();

        assert!(plan.all_placed());
        let flat = plan.outcome(7).and_then(|o| o.placement()).unwrap();
        assert_eq!(flat.loading_step_number(), 1);
        assert_eq!(flat.origin, Vector3::new(0, 0, 0));
        assert_eq!(flat.orientation, Orientation::NoRotation);
        assert_eq!(flat.volume(), 0);
        assert_eq!(plan.instruction(3).unwrap().loading_step_number, 0);
        assert_eq!(plan.placed_volume, 8);
    }

    #[test]
    fn test_huge_trucks_are_rejected() {
        let planner = GreedyPlanner::default_config();
        let side = Volume::from(u32::MAX);

        let err = planner
            .plan(&Truck::new(u32::MAX, u32::MAX, 2), &[Crate::new(1, 1, 1, 1)])
            .unwrap_err();
        assert_eq!(err, Error::GridTooLarge(2 * side * side));

        let err = planner
            .plan(
                &Truck::new(u32::MAX, u32::MAX, 1),
                &[
                    Crate::new(1, u32::MAX, u32::MAX, 1),
                    Crate::new(2, u32::MAX, u32::MAX, 1),
                ],
            )
            .unwrap_err();
        assert!(matches!(err, Error::VolumeExceeded { .. }));

        let err = planner
            .plan(&Truck::new(1 << 20, 1 << 20, 1 << 20), &[Crate::new(1, 1, 1, 1)])
            .unwrap_err();
        assert_eq!(err, Error::GridTooLarge(1 << 60));
    }
}
