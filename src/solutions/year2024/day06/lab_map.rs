//! The obstacle map of the lab, with room for one temporary obstacle.

use nalgebra::{DMatrix, Point2};

/// An error building or querying a [`LabMap`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LabMapError {
    #[error("lab of {rows}x{cols} cells is empty or cannot hold its obstacles")]
    InvalidDimension { rows: i32, cols: i32 },

    #[error("position {0} is outside the lab")]
    OutOfBounds(Point2<i32>),

    #[error("position {0} already holds an obstacle")]
    CellOccupied(Point2<i32>),
}

/// A rectangular map of obstacles, indexed by `x` as the column and `y` as the row.
#[derive(Debug, Clone)]
pub(super) struct LabMap {
    /// Permanent obstacles, `rows x cols`.
    obstacles: DMatrix<bool>,
    /// The single temporary obstacle, if placed.
    temporary: Option<Point2<i32>>,
}

impl LabMap {
    /// Build a map of `rows x cols` cells with obstacles at the given positions.
    pub(super) fn new(
        rows: i32,
        cols: i32,
        obstacle_cells: impl IntoIterator<Item = Point2<i32>>,
    ) -> Result<Self, LabMapError> {
        let invalid = LabMapError::InvalidDimension { rows, cols };
        let (Ok(row_count), Ok(col_count)) = (usize::try_from(rows), usize::try_from(cols)) else {
            return Err(invalid);
        };
        if row_count == 0 || col_count == 0 {
            return Err(invalid);
        }

        let mut map = Self {
            obstacles: DMatrix::from_element(row_count, col_count, false),
            temporary: None,
        };
        for cell in obstacle_cells {
            let index = map.matrix_index(cell).ok_or(invalid)?;
            map.obstacles[index] = true;
        }
        Ok(map)
    }

    /// Convert a position into a matrix index if it lies inside the map.
    fn matrix_index(&self, position: Point2<i32>) -> Option<(usize, usize)> {
        let row = usize::try_from(position.y).ok()?;
        let col = usize::try_from(position.x).ok()?;
        (row < self.obstacles.nrows() && col < self.obstacles.ncols()).then_some((row, col))
    }

    pub(super) fn contains(&self, position: Point2<i32>) -> bool {
        self.matrix_index(position).is_some()
    }

    /// Determine if a position is blocked by a permanent or the temporary obstacle.
    pub(super) fn is_obstacle(&self, position: Point2<i32>) -> Result<bool, LabMapError> {
        let index = self
            .matrix_index(position)
            .ok_or(LabMapError::OutOfBounds(position))?;
        Ok(self.obstacles[index] || self.temporary == Some(position))
    }

    /// Place the temporary obstacle, moving it if one was already placed.
    ///
    /// On error the map is left unchanged.
    pub(super) fn set_temporary_obstacle(
        &mut self,
        position: Point2<i32>,
    ) -> Result<(), LabMapError> {
        let index = self
            .matrix_index(position)
            .ok_or(LabMapError::OutOfBounds(position))?;
        if self.obstacles[index] {
            return Err(LabMapError::CellOccupied(position));
        }
        self.temporary = Some(position);
        Ok(())
    }

    pub(super) fn clear_temporary_obstacle(&mut self) {
        self.temporary = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_cells(rows: i32, cols: i32) -> impl Iterator<Item = Point2<i32>> {
        (0..rows).flat_map(move |y| (0..cols).map(move |x| Point2::new(x, y)))
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            LabMap::new(0, 4, []).err(),
            Some(LabMapError::InvalidDimension { rows: 0, cols: 4 })
        );
        assert_eq!(
            LabMap::new(3, -1, []).err(),
            Some(LabMapError::InvalidDimension { rows: 3, cols: -1 })
        );
    }

    #[test]
    fn rejects_obstacles_outside_dimensions() {
        let result = LabMap::new(2, 2, [Point2::new(2, 0)]);
        assert_eq!(
            result.err(),
            Some(LabMapError::InvalidDimension { rows: 2, cols: 2 })
        );
    }

    #[test]
    fn queries_outside_the_map_fail() -> Result<(), LabMapError> {
        let map = LabMap::new(2, 3, [Point2::new(1, 1)])?;
        assert!(map.is_obstacle(Point2::new(1, 1))?);
        assert!(!map.is_obstacle(Point2::new(2, 1))?);
        assert_eq!(
            map.is_obstacle(Point2::new(3, 0)),
            Err(LabMapError::OutOfBounds(Point2::new(3, 0)))
        );
        assert_eq!(
            map.is_obstacle(Point2::new(0, -1)),
            Err(LabMapError::OutOfBounds(Point2::new(0, -1)))
        );
        Ok(())
    }

    #[test]
    fn temporary_obstacle_round_trip_leaves_map_unchanged() -> Result<(), LabMapError> {
        let mut map = LabMap::new(3, 3, [Point2::new(0, 0), Point2::new(2, 1)])?;
        let before: Vec<bool> = all_cells(3, 3)
            .map(|cell| map.is_obstacle(cell))
            .collect::<Result<_, _>>()?;

        map.set_temporary_obstacle(Point2::new(1, 1))?;
        assert!(map.is_obstacle(Point2::new(1, 1))?);
        map.clear_temporary_obstacle();

        let after: Vec<bool> = all_cells(3, 3)
            .map(|cell| map.is_obstacle(cell))
            .collect::<Result<_, _>>()?;
        assert_eq!(before, after);
        Ok(())
    }

    #[test]
    fn setting_temporary_obstacle_relocates_it() -> Result<(), LabMapError> {
        let mut map = LabMap::new(3, 3, [])?;
        map.set_temporary_obstacle(Point2::new(0, 1))?;
        map.set_temporary_obstacle(Point2::new(2, 2))?;
        assert!(!map.is_obstacle(Point2::new(0, 1))?);
        assert!(map.is_obstacle(Point2::new(2, 2))?);
        Ok(())
    }

    #[test]
    fn temporary_obstacle_on_permanent_obstacle_fails() -> Result<(), LabMapError> {
        let mut map = LabMap::new(3, 3, [Point2::new(1, 0)])?;
        map.set_temporary_obstacle(Point2::new(2, 2))?;

        assert_eq!(
            map.set_temporary_obstacle(Point2::new(1, 0)),
            Err(LabMapError::CellOccupied(Point2::new(1, 0)))
        );
        assert_eq!(
            map.set_temporary_obstacle(Point2::new(5, 0)),
            Err(LabMapError::OutOfBounds(Point2::new(5, 0)))
        );
        // the earlier temporary obstacle stays in place
        assert!(map.is_obstacle(Point2::new(2, 2))?);
        Ok(())
    }

    #[test]
    fn clearing_without_temporary_obstacle_is_a_no_op() -> Result<(), LabMapError> {
        let mut map = LabMap::new(1, 1, [])?;
        map.clear_temporary_obstacle();
        assert!(!map.is_obstacle(Point2::origin())?);
        Ok(())
    }
}
