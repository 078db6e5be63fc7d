use std::collections::HashSet;
use std::convert::Infallible;

use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;

use crate::grid::{ORTHOGONAL, indices, parse_char_grid, step};

#[solution_runner(
    name = "2024 Day 12: Garden Groups",
    parsed = Garden,
    part_one = Day12,
    part_two = Day12
)]
impl super::AdventOfCode2024<12> {}

/*
Input is a map of garden plots, each plot a letter for the type of plant it grows.
*/

type Cell = (usize, usize);

/// Plots touching horizontally or vertically with the same plant form a region.
#[derive(Debug)]
struct Region(HashSet<Cell>);

struct Garden {
    plots: DMatrix<char>,
    regions: Vec<Region>,
}

impl ParseData for Garden {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let plots = parse_char_grid(input, Ok::<_, Infallible>)?;
        let regions = find_regions(&plots);
        Ok(Self { plots, regions })
    }
}

/// Flood fill the plots into regions.
fn find_regions(plots: &DMatrix<char>) -> Vec<Region> {
    let mut assigned = DMatrix::from_element(plots.nrows(), plots.ncols(), false);
    let mut regions = Vec::new();

    for seed in indices(plots) {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;
        let plant = plots[seed];
        let mut region = HashSet::from([seed]);
        let mut stack = vec![seed];
        while let Some(cell) = stack.pop() {
            for offset in ORTHOGONAL {
                if let Some(neighbour) = step(plots, cell, offset)
                    && !assigned[neighbour]
                    && plots[neighbour] == plant
                {
                    assigned[neighbour] = true;
                    region.insert(neighbour);
                    stack.push(neighbour);
                }
            }
        }
        regions.push(Region(region));
    }

    regions
}

impl Region {
    fn area(&self) -> usize {
        self.0.len()
    }

    /// Determine if stepping from a cell by an offset stays inside the region.
    fn extends(&self, plots: &DMatrix<char>, cell: Cell, offset: (isize, isize)) -> bool {
        step(plots, cell, offset).is_some_and(|neighbour| self.0.contains(&neighbour))
    }
}

/*
Each region is fenced along every side of its plots that doesn't touch a plot of the same region.
The price of fence for a region is its area multiplied by its perimeter: the number of fence
sections.

For part 1, sum the price of fencing every region.
*/

impl Region {
    fn perimeter(&self, plots: &DMatrix<char>) -> usize {
        self.0
            .iter()
            .map(|&cell| {
                ORTHOGONAL
                    .into_iter()
                    .filter(|&offset| !self.extends(plots, cell, offset))
                    .count()
            })
            .sum()
    }
}

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = Garden;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .regions
            .iter()
            .map(|region| region.area() * region.perimeter(&input.plots))
            .sum())
    }
}

/*
With the bulk discount, a region's price is its area multiplied by its number of sides. Each
straight section of fence counts as one side, however long it is.

For part 2, sum the discounted price of fencing every region.
*/

impl Region {
    /// Count straight fence runs.
    ///
    /// A fence face starts a new side unless the cell beside it (turning clockwise from the face)
    /// is in the region and has a face in the same direction.
    fn sides(&self, plots: &DMatrix<char>) -> usize {
        self.0
            .iter()
            .map(|&cell| {
                ORTHOGONAL
                    .into_iter()
                    .filter(|&offset| {
                        if self.extends(plots, cell, offset) {
                            return false;
                        }
                        let beside = (offset.1, -offset.0);
                        let continues_side = step(plots, cell, beside)
                            .filter(|neighbour| self.0.contains(neighbour))
                            .is_some_and(|neighbour| !self.extends(plots, neighbour, offset));
                        !continues_side
                    })
                    .count()
            })
            .sum()
    }
}

impl Solution<PartTwo> for Day12 {
    type Input = Garden;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .regions
            .iter()
            .map(|region| region.area() * region.sides(&input.plots))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT_1: &str = r"AAAA
BBCD
BBCC
EEEC
";

    const EXAMPLE_INPUT_2: &str = r"OOOOO
OXOXO
OOOOO
OXOXO
OOOOO
";

    const EXAMPLE_INPUT_3: &str = r"RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    const E_SHAPE_INPUT: &str = r"EEEEE
EXXXX
EEEEE
EXXXX
EEEEE
";

    const AB_INPUT: &str = r"AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        for (input, expected) in [
            (EXAMPLE_INPUT_1, 140),
            (EXAMPLE_INPUT_2, 772),
            (EXAMPLE_INPUT_3, 1930),
        ] {
            let parsed = Garden::parse(input)?;
            let result = <Day12 as Solution<PartOne>>::solve(&parsed)?;
            assert_eq!(result, expected);
        }
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        for (input, expected) in [
            (EXAMPLE_INPUT_1, 80),
            (EXAMPLE_INPUT_2, 436),
            (E_SHAPE_INPUT, 236),
            (AB_INPUT, 368),
            (EXAMPLE_INPUT_3, 1206),
        ] {
            let parsed = Garden::parse(input)?;
            let result = <Day12 as Solution<PartTwo>>::solve(&parsed)?;
            assert_eq!(result, expected);
        }
        Ok(())
    }

    #[test]
    fn separated_plots_of_one_plant_are_separate_regions() -> DynamicResult<()> {
        let parsed = Garden::parse(EXAMPLE_INPUT_2)?;
        // one O region and four single X regions
        assert_eq!(parsed.regions.len(), 5);
        Ok(())
    }
}
