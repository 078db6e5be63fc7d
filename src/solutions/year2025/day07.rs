use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use nalgebra::DMatrix;

use crate::grid::{indices, parse_char_grid};

#[solution_runner(
    name = "2025 Day 7: Laboratories",
    parsed = Manifold,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2025<7> {}

/*
Input is a diagram of a tachyon manifold: `S` where a tachyon beam enters heading down, `^` for a
splitter, and `.` for empty space.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Splitter,
    Start,
}

#[derive(thiserror::Error, Debug)]
enum ParseManifoldError {
    #[error("invalid character in manifold: {0:?}")]
    InvalidChar(char),

    #[error("expected exactly one beam start, but found {0}")]
    StartCount(usize),
}

struct Manifold {
    cells: DMatrix<Cell>,
    start: (usize, usize),
}

impl ParseData for Manifold {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let cells = parse_char_grid(input, |character| match character {
            '.' => Ok(Cell::Empty),
            '^' => Ok(Cell::Splitter),
            'S' => Ok(Cell::Start),
            _ => Err(ParseManifoldError::InvalidChar(character)),
        })?;
        let starts: Vec<_> = indices(&cells)
            .filter(|&cell| cells[cell] == Cell::Start)
            .collect();
        let [start] = starts[..] else {
            return Err(ParseManifoldError::StartCount(starts.len()).into());
        };
        Ok(Self { cells, start })
    }
}

/// What happened to the beam on its way through the manifold.
#[derive(Debug, PartialEq, Eq)]
struct BeamReport {
    /// Splitters that a beam reached.
    splits: usize,
    /// Paths a single tachyon could take out the bottom.
    timelines: u64,
}

impl Manifold {
    /// Move beams down row by row, tallying how many timelines run through each column.
    ///
    /// A beam reaching a splitter stops; new beams continue down from the columns either side of
    /// it. Beams merging into one column add their timelines.
    fn simulate(&self) -> DynamicResult<BeamReport> {
        let cols = self.cells.ncols();
        let mut timelines = vec![0u64; cols];
        timelines[self.start.1] = 1;
        let mut splits = 0;

        for row in self.start.0 + 1..self.cells.nrows() {
            let mut next = vec![0u64; cols];
            for (col, &count) in timelines.iter().enumerate().filter(|&(_, &count)| count > 0) {
                if self.cells[(row, col)] == Cell::Splitter {
                    splits += 1;
                    let sides = [col.checked_sub(1), Some(col + 1).filter(|&right| right < cols)];
                    for side in sides.into_iter().flatten() {
                        next[side] = next[side]
                            .checked_add(count)
                            .ok_or("timeline count overflowed")?;
                    }
                } else {
                    next[col] = next[col]
                        .checked_add(count)
                        .ok_or("timeline count overflowed")?;
                }
            }
            timelines = next;
        }

        Ok(BeamReport {
            splits,
            timelines: timelines
                .into_iter()
                .checked_sum()
                .ok_or("timeline count overflowed")?,
        })
    }
}

/*
For part 1, count how many times the beam is split.
*/

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Manifold;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.simulate()?.splits)
    }
}

/*
With a quantum tachyon manifold, a single particle takes both paths at every splitter, splitting
time into two timelines.

For part 2, count the timelines a single tachyon particle ends up on.
*/

impl Solution<PartTwo> for Day07 {
    type Input = Manifold;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.simulate()?.timelines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Manifold::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 21);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Manifold::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 40);
        Ok(())
    }

    #[test]
    fn single_splitter_makes_two_timelines() -> DynamicResult<()> {
        let parsed = Manifold::parse(".S.\n.^.\n...\n")?;
        let report = parsed.simulate()?;
        assert_eq!(report, BeamReport { splits: 1, timelines: 2 });
        Ok(())
    }

    #[test]
    fn parse_requires_one_start() {
        assert!(Manifold::parse("...\n.^.\n").is_err());
        assert!(Manifold::parse("S.S\n...\n").is_err());
    }
}
