use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;

use crate::grid::{SURROUNDING, indices, parse_char_grid, step};

#[solution_runner(
    name = "2025 Day 4: Printing Department",
    parsed = PaperGrid,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2025<4> {}

/*
Input is a grid of the printing department's floor: `@` for a roll of paper, `.` for empty floor.
*/

#[derive(Debug, Clone)]
struct PaperGrid(DMatrix<bool>);

#[derive(thiserror::Error, Debug)]
#[error("invalid character in grid: {0:?}")]
struct InvalidChar(char);

impl ParseData for PaperGrid {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rolls = parse_char_grid(input, |character| match character {
            '@' => Ok(true),
            '.' => Ok(false),
            _ => Err(InvalidChar(character)),
        })?;
        Ok(Self(rolls))
    }
}

/*
A forklift can access a roll of paper if fewer than four rolls of paper are in the eight positions
around it.

For part 1, count the rolls of paper that forklifts can access.
*/

const CROWDED_NEIGHBOURS: usize = 4;

impl PaperGrid {
    fn neighbouring_rolls(&self, cell: (usize, usize)) -> usize {
        SURROUNDING
            .into_iter()
            .filter_map(|offset| step(&self.0, cell, offset))
            .filter(|&neighbour| self.0[neighbour])
            .count()
    }

    fn accessible_rolls(&self) -> Vec<(usize, usize)> {
        indices(&self.0)
            .filter(|&cell| self.0[cell] && self.neighbouring_rolls(cell) < CROWDED_NEIGHBOURS)
            .collect()
    }
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = PaperGrid;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.accessible_rolls().len())
    }
}

/*
Once a roll is removed, forklifts may be able to access more rolls. Keep removing every accessible
roll until none are left to access.

For part 2, count how many rolls of paper are removed in total.
*/

impl Solution<PartTwo> for Day04 {
    type Input = PaperGrid;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut grid = input.clone();
        let mut removed = 0;
        loop {
            let accessible = grid.accessible_rolls();
            if accessible.is_empty() {
                return Ok(removed);
            }
            removed += accessible.len();
            for cell in accessible {
                grid.0[cell] = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = PaperGrid::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 13);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = PaperGrid::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 43);
        Ok(())
    }

    #[test]
    fn solid_block_only_exposes_corners() -> DynamicResult<()> {
        let parsed = PaperGrid::parse("@@@\n@@@\n@@@\n")?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }
}
