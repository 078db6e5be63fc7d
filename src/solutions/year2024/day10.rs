use std::collections::HashSet;

use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;

use crate::grid::{ORTHOGONAL, indices, parse_char_grid, step};

#[solution_runner(
    name = "2024 Day 10: Hoof It",
    parsed = TopographicMap,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2024<10> {}

/*
Input is a topographic map: a grid of heights from 0 (lowest) to 9 (highest).
*/

struct TopographicMap(DMatrix<u8>);

#[derive(thiserror::Error, Debug)]
#[error("height must be a digit, but found {0:?}")]
struct InvalidHeight(char);

impl ParseData for TopographicMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let heights = parse_char_grid(input, |character| {
            character
                .to_digit(10)
                .and_then(|digit| u8::try_from(digit).ok())
                .ok_or(InvalidHeight(character))
        })?;
        Ok(Self(heights))
    }
}

/*
A hiking trail starts at height 0, ends at height 9, and always increases by exactly 1 at each step.
Steps are up, down, left, or right. A trailhead is any position that starts a trail.

For part 1, sum the scores of all trailheads: the number of height-9 positions reachable from a
trailhead by hiking trails.
*/

const TRAILHEAD: u8 = 0;
const PEAK: u8 = 9;

impl TopographicMap {
    fn trailheads(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        indices(&self.0).filter(|&cell| self.0[cell] == TRAILHEAD)
    }

    /// Neighbouring cells exactly one higher.
    fn uphill_steps(&self, cell: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        let next_height = self.0[cell] + 1;
        ORTHOGONAL
            .into_iter()
            .filter_map(move |offset| step(&self.0, cell, offset))
            .filter(move |&neighbour| self.0[neighbour] == next_height)
    }

    fn reachable_peaks(&self, trailhead: (usize, usize)) -> usize {
        let mut visited = HashSet::from([trailhead]);
        let mut stack = vec![trailhead];
        let mut peaks = 0;
        while let Some(cell) = stack.pop() {
            if self.0[cell] == PEAK {
                peaks += 1;
                continue;
            }
            for neighbour in self.uphill_steps(cell) {
                if visited.insert(neighbour) {
                    stack.push(neighbour);
                }
            }
        }
        peaks
    }
}

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = TopographicMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .trailheads()
            .map(|trailhead| input.reachable_peaks(trailhead))
            .sum())
    }
}

/*
For part 2, sum the ratings of all trailheads: the number of distinct hiking trails that begin at a
trailhead.
*/

impl TopographicMap {
    fn distinct_trails(&self, cell: (usize, usize)) -> usize {
        if self.0[cell] == PEAK {
            return 1;
        }
        self.uphill_steps(cell)
            .map(|neighbour| self.distinct_trails(neighbour))
            .sum()
    }
}

impl Solution<PartTwo> for Day10 {
    type Input = TopographicMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .trailheads()
            .map(|trailhead| input.distinct_trails(trailhead))
            .sum())
    }
}
