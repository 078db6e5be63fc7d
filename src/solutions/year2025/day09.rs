use std::collections::HashMap;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{DMatrix, Point2};
use tracing::debug;

use crate::grid::{ORTHOGONAL, step};

#[solution_runner(
    name = "2025 Day 9: Movie Theater",
    parsed = RedTiles,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2025<9> {}

/*
Input is the positions of red tiles on a floor, one per line as `X,Y`. Taken in order, and wrapping
back to the first, each red tile is in the same row or column as the next.
*/

struct RedTiles(Vec<Point2<i64>>);

#[derive(thiserror::Error, Debug)]
enum ParseTileError {
    #[error("expected tile as `X,Y`, but found {0:?}")]
    InvalidFormat(String),

    #[error("tiles {0} and {1} are not in the same row or column")]
    DiagonalEdge(Point2<i64>, Point2<i64>),
}

impl ParseData for RedTiles {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let tiles: Vec<Point2<i64>> = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| ParseTileError::InvalidFormat(line.to_owned()))?;
            Ok(Point2::new(
                parse_with_context::<i64>(x.trim())?,
                parse_with_context::<i64>(y.trim())?,
            ))
        })
        .collect::<Result<_, _>>()?;

        for (index, tile) in tiles.iter().enumerate() {
            let next = tiles[(index + 1) % tiles.len()];
            if tile.x != next.x && tile.y != next.y {
                return Err(ParseTileError::DiagonalEdge(*tile, next).into());
            }
        }
        Ok(Self(tiles))
    }
}

/// Tile count of the rectangle with two tiles as opposite corners.
fn rectangle_area(first: Point2<i64>, second: Point2<i64>) -> i64 {
    ((first.x - second.x).abs() + 1) * ((first.y - second.y).abs() + 1)
}

/*
For part 1, find the largest rectangle with red tiles at two opposite corners.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = RedTiles;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let RedTiles(tiles) = input;
        tiles
            .iter()
            .enumerate()
            .flat_map(|(index, &first)| {
                tiles[index + 1..]
                    .iter()
                    .map(move |&second| rectangle_area(first, second))
            })
            .max()
            .ok_or_else(|| "need at least two red tiles".into())
    }
}

/*
The loop of red tiles is joined by green tiles, and every tile inside the loop is green too.

For part 2, find the largest rectangle with red tiles at two opposite corners that only covers red
or green tiles.
*/

/// Distinct coordinate values mapped onto a compressed axis.
///
/// Each value gets its own band, and any run of values between neighbours gets one shared band.
/// The first and last bands are padding outside every value.
struct CompressedAxis {
    bands: HashMap<i64, usize>,
    len: usize,
}

impl CompressedAxis {
    fn new(values: impl IntoIterator<Item = i64>) -> Self {
        let mut values: Vec<i64> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let mut bands = HashMap::with_capacity(values.len());
        let mut next_band = 1;
        for (index, &value) in values.iter().enumerate() {
            bands.insert(value, next_band);
            next_band += 1;
            if values.get(index + 1).is_some_and(|&following| following - value > 1) {
                next_band += 1;
            }
        }
        Self {
            bands,
            len: next_band + 1,
        }
    }

    fn band(&self, value: i64) -> usize {
        self.bands[&value]
    }
}

/// The floor squeezed onto compressed axes, with cells outside the tile loop marked.
struct CompressedFloor {
    columns: CompressedAxis,
    rows: CompressedAxis,
    /// `outside_counts[(r, c)]` counts outside cells in rows `..r` and columns `..c`.
    outside_counts: DMatrix<usize>,
}

impl CompressedFloor {
    fn new(tiles: &[Point2<i64>]) -> Self {
        let columns = CompressedAxis::new(tiles.iter().map(|tile| tile.x));
        let rows = CompressedAxis::new(tiles.iter().map(|tile| tile.y));

        let mut on_loop = DMatrix::from_element(rows.len, columns.len, false);
        for (index, tile) in tiles.iter().enumerate() {
            let next = tiles[(index + 1) % tiles.len()];
            let (row_a, row_b) = (rows.band(tile.y), rows.band(next.y));
            let (col_a, col_b) = (columns.band(tile.x), columns.band(next.x));
            for row in row_a.min(row_b)..=row_a.max(row_b) {
                for col in col_a.min(col_b)..=col_a.max(col_b) {
                    on_loop[(row, col)] = true;
                }
            }
        }

        // the padding corner is always outside the loop
        let mut outside = DMatrix::from_element(rows.len, columns.len, false);
        outside[(0, 0)] = true;
        let mut frontier = vec![(0, 0)];
        while let Some(cell) = frontier.pop() {
            for offset in ORTHOGONAL {
                if let Some(neighbour) = step(&outside, cell, offset)
                    && !on_loop[neighbour]
                    && !outside[neighbour]
                {
                    outside[neighbour] = true;
                    frontier.push(neighbour);
                }
            }
        }

        let mut outside_counts = DMatrix::zeros(rows.len + 1, columns.len + 1);
        for row in 0..rows.len {
            for col in 0..columns.len {
                outside_counts[(row + 1, col + 1)] = usize::from(outside[(row, col)])
                    + outside_counts[(row, col + 1)]
                    + outside_counts[(row + 1, col)]
                    - outside_counts[(row, col)];
            }
        }

        Self {
            columns,
            rows,
            outside_counts,
        }
    }

    /// Whether the rectangle with two tiles as opposite corners stays inside the loop.
    fn encloses(&self, first: Point2<i64>, second: Point2<i64>) -> bool {
        let (row_a, row_b) = (self.rows.band(first.y), self.rows.band(second.y));
        let (col_a, col_b) = (self.columns.band(first.x), self.columns.band(second.x));
        let (top, bottom) = (row_a.min(row_b), row_a.max(row_b) + 1);
        let (left, right) = (col_a.min(col_b), col_a.max(col_b) + 1);

        let counts = &self.outside_counts;
        counts[(bottom, right)] + counts[(top, left)]
            == counts[(top, right)] + counts[(bottom, left)]
    }
}

impl Solution<PartTwo> for Day09 {
    type Input = RedTiles;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let RedTiles(tiles) = input;
        let floor = CompressedFloor::new(tiles);
        debug!(
            rows = floor.rows.len,
            columns = floor.columns.len,
            "floor compressed"
        );

        let mut largest = None;
        for (index, &first) in tiles.iter().enumerate() {
            for &second in &tiles[index + 1..] {
                let area = rectangle_area(first, second);
                if largest.is_none_or(|largest| area > largest) && floor.encloses(first, second) {
                    largest = Some(area);
                }
            }
        }
        largest.ok_or_else(|| "need at least two red tiles".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = RedTiles::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 50);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = RedTiles::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 24);
        Ok(())
    }

    #[test]
    fn enclosure_follows_the_loop() -> DynamicResult<()> {
        let RedTiles(tiles) = RedTiles::parse(EXAMPLE_INPUT)?;
        let floor = CompressedFloor::new(&tiles);
        // 7,3 to 11,1 stays inside
        assert!(floor.encloses(tiles[7], tiles[1]));
        // 2,5 to 11,1 crosses the notch above row 3
        assert!(!floor.encloses(tiles[5], tiles[1]));
        Ok(())
    }

    #[test]
    fn compression_keeps_gaps_between_values() {
        let axis = CompressedAxis::new([2, 3, 7]);
        assert_eq!(axis.band(2), 1);
        assert_eq!(axis.band(3), 2);
        assert_eq!(axis.band(7), 4);
        assert_eq!(axis.len, 6);
    }

    #[test]
    fn parse_rejects_diagonal_edges() {
        let Err(error) = RedTiles::parse("1,1\n3,3\n") else {
            panic!("expected tiles in different rows and columns to fail");
        };
        assert!(error.is::<ParseTileError>());
    }
}
