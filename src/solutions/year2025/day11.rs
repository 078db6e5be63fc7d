use std::collections::HashMap;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "2025 Day 11: Reactor",
    parsed = Devices,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2025<11> {}

/*
Input is a list of devices and where their outputs lead, one per line, like `aaa: you hhh`. Data
only flows along outputs, and never in a cycle.
*/

struct Devices {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
    /// Devices ordered so every output points later in the list.
    order: Vec<NodeIndex>,
}

#[derive(thiserror::Error, Debug)]
enum ParseDevicesError {
    #[error("expected `name: outputs`, but found {0:?}")]
    InvalidFormat(String),

    #[error("device outputs form a cycle through {0:?}")]
    Cycle(String),
}

impl ParseData for Devices {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut graph = DiGraph::new();
        let mut nodes: HashMap<String, NodeIndex> = HashMap::new();
        let mut node_for = |graph: &mut DiGraph<String, ()>, name: &str| {
            *nodes
                .entry(name.to_owned())
                .or_insert_with(|| graph.add_node(name.to_owned()))
        };

        parse_input_lines(input, |_, line| -> DynamicResult<()> {
            let (device, outputs) = line
                .split_once(':')
                .ok_or_else(|| ParseDevicesError::InvalidFormat(line.to_owned()))?;
            let device = node_for(&mut graph, device.trim());
            for output in outputs.split_whitespace() {
                let output = node_for(&mut graph, output);
                graph.add_edge(device, output, ());
            }
            Ok(())
        })
        .collect::<Result<(), _>>()?;

        let order = toposort(&graph, None)
            .map_err(|cycle| ParseDevicesError::Cycle(graph[cycle.node_id()].clone()))?;
        Ok(Self {
            graph,
            nodes,
            order,
        })
    }
}

impl Devices {
    /// Count the distinct paths from one device to another, or 0 if either is missing.
    fn count_paths(&self, from: &str, to: &str) -> DynamicResult<u64> {
        let (Some(&from), Some(&to)) = (self.nodes.get(from), self.nodes.get(to)) else {
            return Ok(0);
        };

        let mut paths: HashMap<NodeIndex, u64> = HashMap::from([(from, 1)]);
        for &node in self.order.iter().skip_while(|&&node| node != from) {
            let Some(&reaching) = paths.get(&node) else {
                continue;
            };
            if node == to {
                return Ok(reaching);
            }
            for next in self.graph.neighbors(node) {
                let total = paths.entry(next).or_default();
                *total = total
                    .checked_add(reaching)
                    .ok_or("path count overflowed")?;
            }
        }
        Ok(0)
    }
}

/*
For part 1, count the paths from `you` to `out`.
*/

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Devices;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.count_paths("you", "out")
    }
}

/*
For part 2, count the paths from the server rack `svr` to `out` that visit both `dac` and `fft`, in
either order.
*/

impl Devices {
    /// Count paths that visit each waypoint in order.
    fn count_paths_through(&self, waypoints: &[&str]) -> DynamicResult<u64> {
        waypoints
            .windows(2)
            .map(|leg| self.count_paths(leg[0], leg[1]))
            .collect::<DynamicResult<Vec<_>>>()?
            .into_iter()
            .checked_product()
            .ok_or_else(|| "path count overflowed".into())
    }
}

impl Solution<PartTwo> for Day11 {
    type Input = Devices;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let dac_first = input.count_paths_through(&["svr", "dac", "fft", "out"])?;
        let fft_first = input.count_paths_through(&["svr", "fft", "dac", "out"])?;
        debug!(dac_first, fft_first, "counted paths through both waypoints");
        dac_first
            .checked_add(fft_first)
            .ok_or_else(|| "path count overflowed".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

    const SERVER_EXAMPLE_INPUT: &str = r"svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Devices::parse(EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 5);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Devices::parse(SERVER_EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn server_example_has_eight_paths_overall() -> DynamicResult<()> {
        let parsed = Devices::parse(SERVER_EXAMPLE_INPUT)?;
        assert_eq!(parsed.count_paths("svr", "out")?, 8);
        Ok(())
    }

    #[test]
    fn missing_devices_have_no_paths() -> DynamicResult<()> {
        let parsed = Devices::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.count_paths("svr", "out")?, 0);
        assert_eq!(parsed.count_paths("out", "you")?, 0);
        assert_eq!(<Day11 as Solution<PartTwo>>::solve(&parsed)?, 0);
        Ok(())
    }

    #[test]
    fn parse_rejects_cycles() {
        let Err(error) = Devices::parse("aaa: bbb\nbbb: aaa\n") else {
            panic!("expected cyclic devices to fail");
        };
        assert!(error.is::<ParseDevicesError>());
    }
}
