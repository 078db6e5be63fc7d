//! Running a guard's patrol through a lab until it exits or loops.

use std::collections::HashSet;

use nalgebra::Point2;

use super::guard::{Facing, Guard};
use super::lab_map::LabMap;

/// How a patrol ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PatrolOutcome {
    /// The guard stepped outside the lab.
    Exited,
    /// The guard returned to a position it already held with the same facing.
    Looping,
}

/// Owns a lab and its guard, and replays the guard's patrol on demand.
///
/// The number of distinct states is bounded by four facings per cell, so every run terminates.
#[derive(Debug, Clone)]
pub(super) struct PatrolEngine {
    map: LabMap,
    guard: Guard,
    visited_states: HashSet<(Point2<i32>, Facing)>,
    visited_cells: HashSet<Point2<i32>>,
    forward_steps: usize,
}

impl PatrolEngine {
    pub(super) fn new(map: LabMap, guard: Guard) -> Self {
        Self {
            map,
            guard,
            visited_states: HashSet::new(),
            visited_cells: HashSet::new(),
            forward_steps: 0,
        }
    }

    /// Run a patrol from the guard's start.
    ///
    /// A tentative step is checked against the lab bounds before obstacles, so stepping off the
    /// edge always exits.
    pub(super) fn run(&mut self) -> PatrolOutcome {
        self.guard.reset();
        self.visited_states.clear();
        self.visited_cells.clear();
        self.forward_steps = 0;

        loop {
            let position = self.guard.position();
            if !self.visited_states.insert((position, self.guard.facing())) {
                return PatrolOutcome::Looping;
            }
            self.visited_cells.insert(position);

            self.guard.step_forward();
            let Ok(blocked) = self.map.is_obstacle(self.guard.position()) else {
                return PatrolOutcome::Exited;
            };
            if blocked {
                self.guard.step_backward();
                self.guard.rotate_clockwise();
            } else {
                self.forward_steps += 1;
            }
        }
    }

    /// Cells the guard stood on during the last run.
    pub(super) fn visited_cells(&self) -> &HashSet<Point2<i32>> {
        &self.visited_cells
    }

    /// Forward steps kept inside the lab during the last run.
    pub(super) fn forward_steps(&self) -> usize {
        self.forward_steps
    }

    pub(super) fn guard(&self) -> &Guard {
        &self.guard
    }

    pub(super) fn map_mut(&mut self) -> &mut LabMap {
        &mut self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::lab_map::LabMapError;

    #[test]
    fn obstacle_free_lab_exits_in_a_straight_line() -> Result<(), LabMapError> {
        let (rows, cols) = (5, 7);
        let map = LabMap::new(rows, cols, [])?;
        let mut engine = PatrolEngine::new(map, Guard::new(Point2::new(0, 2), Facing::Right));

        assert_eq!(engine.run(), PatrolOutcome::Exited);
        let limit = usize::try_from(rows.max(cols)).unwrap_or(usize::MAX);
        assert!(engine.forward_steps() <= limit);
        assert_eq!(engine.visited_cells().len(), 7);
        assert_eq!(engine.guard().position(), Point2::new(7, 2));
        Ok(())
    }

    #[test]
    fn detects_a_hand_built_loop() -> Result<(), LabMapError> {
        // .#..
        // ...#
        // #^..
        // ..#.
        let obstacles = [
            Point2::new(1, 0),
            Point2::new(3, 1),
            Point2::new(0, 2),
            Point2::new(2, 3),
        ];
        let map = LabMap::new(4, 4, obstacles)?;
        let mut engine = PatrolEngine::new(map, Guard::new(Point2::new(1, 2), Facing::Up));

        assert_eq!(engine.run(), PatrolOutcome::Looping);
        let expected: HashSet<_> = [
            Point2::new(1, 1),
            Point2::new(2, 1),
            Point2::new(1, 2),
            Point2::new(2, 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(engine.visited_cells(), &expected);
        Ok(())
    }

    #[test]
    fn without_the_loop_closing_obstacle_the_guard_exits() -> Result<(), LabMapError> {
        let obstacles = [Point2::new(1, 0), Point2::new(3, 1), Point2::new(2, 3)];
        let map = LabMap::new(4, 4, obstacles)?;
        let mut engine = PatrolEngine::new(map, Guard::new(Point2::new(1, 2), Facing::Up));

        assert_eq!(engine.run(), PatrolOutcome::Exited);
        Ok(())
    }

    #[test]
    fn replaying_reproduces_the_same_patrol() -> Result<(), LabMapError> {
        let obstacles = [Point2::new(2, 0), Point2::new(4, 2), Point2::new(0, 3)];
        let map = LabMap::new(5, 5, obstacles)?;
        let mut engine = PatrolEngine::new(map, Guard::new(Point2::new(2, 4), Facing::Up));

        let first_outcome = engine.run();
        let first_cells = engine.visited_cells().clone();
        let first_end = engine.guard().position();

        let second_outcome = engine.run();
        assert_eq!(first_outcome, second_outcome);
        assert_eq!(&first_cells, engine.visited_cells());
        assert_eq!(first_end, engine.guard().position());
        Ok(())
    }

    #[test]
    fn bounds_are_checked_before_obstacles() -> Result<(), LabMapError> {
        // a guard on the top edge facing up leaves without turning
        let map = LabMap::new(2, 2, [Point2::new(1, 0)])?;
        let mut engine = PatrolEngine::new(map, Guard::new(Point2::new(0, 0), Facing::Up));

        assert_eq!(engine.run(), PatrolOutcome::Exited);
        assert_eq!(engine.guard().position(), Point2::new(0, -1));
        assert_eq!(engine.guard().facing(), Facing::Up);
        Ok(())
    }
}
