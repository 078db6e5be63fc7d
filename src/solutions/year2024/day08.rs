use std::collections::{HashMap, HashSet};
use std::convert::Infallible;

use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};

use crate::grid::{indices, parse_char_grid};

#[solution_runner(
    name = "2024 Day 8: Resonant Collinearity",
    parsed = AntennaMap,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2024<8> {}

/*
Input is a map of antennas. Each antenna is tuned to a frequency shown as a single letter or digit;
`.` is empty space.
*/

/// Antenna positions grouped by frequency, with `x` as the column and `y` as the row.
struct AntennaMap {
    width: i32,
    height: i32,
    antennas: HashMap<char, Vec<Point2<i32>>>,
}

impl ParseData for AntennaMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let grid = parse_char_grid(input, Ok::<_, Infallible>)?;
        let height = i32::try_from(grid.nrows())?;
        let width = i32::try_from(grid.ncols())?;

        let mut antennas: HashMap<char, Vec<Point2<i32>>> = HashMap::new();
        for (row, col) in indices(&grid) {
            let frequency = grid[(row, col)];
            if frequency != '.' {
                let position = Point2::new(i32::try_from(col)?, i32::try_from(row)?);
                antennas.entry(frequency).or_default().push(position);
            }
        }

        Ok(Self {
            width,
            height,
            antennas,
        })
    }
}

impl AntennaMap {
    fn contains(&self, position: Point2<i32>) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Iterate every ordered pair of distinct antennas sharing a frequency.
    fn antenna_pairs(&self) -> impl Iterator<Item = (Point2<i32>, Point2<i32>)> + '_ {
        self.antennas.values().flat_map(|positions| {
            positions.iter().flat_map(move |&first| {
                positions
                    .iter()
                    .filter(move |&&second| second != first)
                    .map(move |&second| (first, second))
            })
        })
    }
}

/*
An antinode occurs at any point in line with two antennas of the same frequency, where one antenna
is twice as far away as the other. Each pair has two antinodes, one on either side.

For part 1, count the unique locations within the map that contain an antinode.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = AntennaMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        // each ordered pair contributes the antinode beyond its first antenna
        let antinodes: HashSet<_> = input
            .antenna_pairs()
            .map(|(first, second)| first + (first - second))
            .filter(|&antinode| input.contains(antinode))
            .collect();
        Ok(antinodes.len())
    }
}

/*
Accounting for resonant harmonics, an antinode occurs at any grid position exactly in line with at
least two antennas of the same frequency, regardless of distance. The antennas themselves count.

For part 2, count the unique locations within the map that contain an antinode.
*/

impl AntennaMap {
    /// Walk from a position in steps of an offset until leaving the map, including the start.
    fn positions_along(
        &self,
        start: Point2<i32>,
        offset: Vector2<i32>,
    ) -> impl Iterator<Item = Point2<i32>> + '_ {
        std::iter::successors(Some(start), move |&position| Some(position + offset))
            .take_while(|&position| self.contains(position))
    }
}

impl Solution<PartTwo> for Day08 {
    type Input = AntennaMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let antinodes: HashSet<_> = input
            .antenna_pairs()
            .flat_map(|(first, second)| input.positions_along(first, first - second))
            .collect();
        Ok(antinodes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 14);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 34);
        Ok(())
    }

    #[test]
    fn single_pair_has_two_antinodes() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(
            r"..........
...a......
..........
....a.....
..........
..........
",
        )?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1);
        Ok(())
    }
}
