use std::collections::HashMap;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point3;
use petgraph::unionfind::UnionFind;
use tracing::debug;

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "2025 Day 8: Playground",
    parsed = Playground,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2025<8> {}

/*
Input is the positions of junction boxes in 3D space, one per line as `X,Y,Z`.
*/

struct Playground {
    boxes: Vec<Point3<i64>>,
    /// Every pair of box indices, closest first.
    pairs_by_distance: Vec<(usize, usize)>,
}

#[derive(thiserror::Error, Debug)]
#[error("expected 3 coordinates, but found {0}")]
struct CoordinateCount(usize);

impl ParseData for Playground {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let boxes: Vec<Point3<i64>> = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let coordinates = line
                .split(',')
                .map(|coordinate| parse_with_context::<i64>(coordinate.trim()))
                .collect::<Result<Vec<_>, _>>()?;
            let [x, y, z] = coordinates[..] else {
                return Err(CoordinateCount(coordinates.len()).into());
            };
            Ok(Point3::new(x, y, z))
        })
        .collect::<Result<_, _>>()?;

        // squared distances order pairs the same as straight-line distances
        let mut distanced_pairs = Vec::with_capacity(boxes.len() * boxes.len() / 2);
        for (first_index, first) in boxes.iter().enumerate() {
            for (second_index, second) in boxes.iter().enumerate().skip(first_index + 1) {
                let distance = (first - second).map(|delta| delta * delta).sum();
                distanced_pairs.push((distance, first_index, second_index));
            }
        }
        distanced_pairs.sort_unstable();

        Ok(Self {
            pairs_by_distance: distanced_pairs
                .into_iter()
                .map(|(_, first, second)| (first, second))
                .collect(),
            boxes,
        })
    }
}

/*
Strings of lights connect pairs of junction boxes, starting with the two closest boxes not already
directly connected. Connected boxes form a circuit; a box on its own is a circuit of one.

For part 1, connect the 1000 pairs of boxes closest together, then multiply the sizes of the three
largest circuits.
*/

const CONNECTIONS: usize = 1000;

impl Playground {
    /// Sizes of the circuits after connecting the closest `connections` pairs, largest first.
    fn circuit_sizes(&self, connections: usize) -> Vec<usize> {
        let mut circuits = UnionFind::new(self.boxes.len());
        for &(first, second) in self.pairs_by_distance.iter().take(connections) {
            circuits.union(first, second);
        }

        let mut sizes: HashMap<usize, usize> = HashMap::new();
        for label in circuits.into_labeling() {
            *sizes.entry(label).or_default() += 1;
        }
        let mut sizes: Vec<usize> = sizes.into_values().collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    fn largest_circuits_product(&self, connections: usize) -> DynamicResult<usize> {
        let sizes = self.circuit_sizes(connections);
        debug!(circuits = sizes.len(), connections, "boxes connected");
        sizes
            .into_iter()
            .take(3)
            .checked_product()
            .ok_or_else(|| "circuit size product overflowed".into())
    }
}

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = Playground;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.largest_circuits_product(CONNECTIONS)
    }
}

/*
For part 2, keep connecting the closest pairs until every box is in one circuit. Multiply the X
coordinates of the last two boxes connected.
*/

impl Playground {
    /// The pair whose connection first joins every box into a single circuit.
    fn final_connection(&self) -> Option<(usize, usize)> {
        let mut circuits = UnionFind::new(self.boxes.len());
        let mut circuit_count = self.boxes.len();
        for &(first, second) in &self.pairs_by_distance {
            if circuits.union(first, second) {
                circuit_count -= 1;
                if circuit_count == 1 {
                    return Some((first, second));
                }
            }
        }
        None
    }
}

impl Solution<PartTwo> for Day08 {
    type Input = Playground;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let (first, second) = input
            .final_connection()
            .ok_or("boxes never form a single circuit")?;
        input.boxes[first]
            .x
            .checked_mul(input.boxes[second].x)
            .ok_or_else(|| "coordinate product overflowed".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Playground::parse(EXAMPLE_INPUT)?;
        // the example only makes the ten shortest connections
        let result = parsed.largest_circuits_product(10)?;
        assert_eq!(result, 40);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Playground::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 25272);
        Ok(())
    }

    #[test]
    fn closest_pair_connects_first() -> DynamicResult<()> {
        let parsed = Playground::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.pairs_by_distance[0], (0, 19));
        assert_eq!(parsed.circuit_sizes(1)[..2], [2, 1]);
        Ok(())
    }

    #[test]
    fn parse_rejects_missing_coordinate() {
        assert!(Playground::parse("1,2\n").is_err());
    }
}
