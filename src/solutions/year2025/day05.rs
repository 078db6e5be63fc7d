use std::ops::RangeInclusive;

use aoc_framework::parsing::{InputScanner, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "2025 Day 5: Cafeteria",
    parsed = Inventory,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2025<5> {}

/*
Input is two sections separated by an empty line: fresh ingredient ID ranges (inclusive, e.g.
`3-5`), then available ingredient IDs, one per line. Ranges can overlap.
*/

struct Inventory {
    /// Fresh ranges, merged so they are sorted and disjoint.
    fresh: Vec<RangeInclusive<u64>>,
    available: Vec<u64>,
}

#[derive(thiserror::Error, Debug)]
enum ParseInventoryError {
    #[error("fresh range is missing '-' separator: {0:?}")]
    MissingDash(String),

    #[error("fresh range ends before it starts: {0:?}")]
    Backwards(String),
}

impl ParseData for Inventory {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        scanner.skip_empty();
        let ranges = scanner.collect_sequence(|_, line| -> DynamicResult<_> {
            let (start, end) = line
                .split_once('-')
                .ok_or_else(|| ParseInventoryError::MissingDash(line.to_owned()))?;
            let range = parse_with_context::<u64>(start)?..=parse_with_context::<u64>(end)?;
            if range.is_empty() {
                return Err(ParseInventoryError::Backwards(line.to_owned()).into());
            }
            Ok(range)
        })?;

        let mut available = Vec::new();
        while let Some(id) = scanner.next_item(|_, line| parse_with_context::<u64>(line))? {
            available.push(id);
        }

        Ok(Self {
            fresh: merge_ranges(ranges),
            available,
        })
    }
}

/// Merge overlapping or touching ranges into sorted, disjoint ranges.
fn merge_ranges(mut ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges.sort_unstable_by_key(|range| *range.start());
    let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

/*
For part 1, count the available ingredient IDs that fall in any fresh range.
*/

impl Inventory {
    fn is_fresh(&self, id: u64) -> bool {
        // the last range starting at or before the ID is the only one that can hold it
        let candidate = self.fresh.partition_point(|range| *range.start() <= id);
        candidate > 0 && self.fresh[candidate - 1].contains(&id)
    }
}

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = Inventory;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .available
            .iter()
            .filter(|&&id| input.is_fresh(id))
            .count())
    }
}

/*
For part 2, ignore the available IDs and count every ID the fresh ranges consider fresh.
*/

impl Solution<PartTwo> for Day05 {
    type Input = Inventory;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .fresh
            .iter()
            .map(|range| range.end() - range.start() + 1)
            .checked_sum()
            .ok_or_else(|| "fresh ID count overflowed".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"3-5
10-14
16-20
12-18

1
5
8
11
17
32
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Inventory::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Inventory::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 14);
        Ok(())
    }

    #[test]
    fn merges_overlapping_and_touching_ranges() {
        let merged = merge_ranges(vec![10..=14, 3..=5, 16..=20, 12..=18, 6..=6]);
        assert_eq!(merged, [3..=6, 10..=20]);
    }

    #[test]
    fn parse_rejects_backwards_range() {
        assert!(Inventory::parse("5-3\n\n4\n").is_err());
    }
}
