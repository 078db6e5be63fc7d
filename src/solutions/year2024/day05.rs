use std::cmp::Ordering;
use std::collections::HashSet;

use aoc_framework::parsing::{InputScanner, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "2024 Day 5: Print Queue",
    parsed = PrintQueue,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2024<5> {}

/*
Input is two sections separated by an empty line.

The first section has page ordering rules, one per line: `X|Y` means page X must be printed before
page Y whenever both are in the same update.

The second section has updates, one per line, each a comma separated list of page numbers.
*/

struct PrintQueue {
    /// Ordered pairs of pages `(before, after)`.
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

#[derive(thiserror::Error, Debug)]
enum ParsePrintQueueError {
    #[error("ordering rule is missing '|' separator: {0:?}")]
    MissingRuleSeparator(String),
}

impl ParseData for PrintQueue {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);

        scanner.skip_empty();
        let rules = scanner
            .collect_sequence(|_, line| -> DynamicResult<_> {
                let (before, after) = line
                    .split_once('|')
                    .ok_or_else(|| ParsePrintQueueError::MissingRuleSeparator(line.to_owned()))?;
                Ok((
                    parse_with_context::<u32>(before)?,
                    parse_with_context::<u32>(after)?,
                ))
            })?
            .into_iter()
            .collect();

        let mut updates = Vec::new();
        while let Some(update) = scanner.next_item(|_, line| {
            line.split(',')
                .map(parse_with_context)
                .collect::<Result<Vec<u32>, _>>()
        })? {
            updates.push(update);
        }

        Ok(Self { rules, updates })
    }
}

impl PrintQueue {
    /// Order two pages by the rules; pages without a rule between them compare equal.
    fn compare(&self, first: u32, second: u32) -> Ordering {
        if self.rules.contains(&(first, second)) {
            Ordering::Less
        } else if self.rules.contains(&(second, first)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Determine if no page of an update is required to come before a page earlier in the update.
    fn is_ordered(&self, update: &[u32]) -> bool {
        update.iter().enumerate().all(|(index, &page)| {
            update[index + 1..]
                .iter()
                .all(|&later| !self.rules.contains(&(later, page)))
        })
    }
}

fn middle_page(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

/*
For part 1, find the updates already in the right order, then add up their middle page numbers.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = PrintQueue;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .updates
            .iter()
            .filter(|update| input.is_ordered(update))
            .map(|update| middle_page(update))
            .checked_sum()
            .ok_or_else(|| "sum of middle pages overflowed".into())
    }
}

/*
For part 2, put only the incorrectly-ordered updates in order by the rules, then add up their middle
page numbers.
*/

impl Solution<PartTwo> for Day05 {
    type Input = PrintQueue;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input
            .updates
            .iter()
            .filter(|update| !input.is_ordered(update))
            .map(|update| {
                let mut reordered = update.clone();
                reordered.sort_by(|&first, &second| input.compare(first, second));
                middle_page(&reordered)
            })
            .checked_sum()
            .ok_or_else(|| "sum of middle pages overflowed".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = PrintQueue::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 143);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = PrintQueue::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 123);
        Ok(())
    }

    #[test]
    fn rules_order_pages() -> DynamicResult<()> {
        let parsed = PrintQueue::parse(EXAMPLE_INPUT)?;
        let mut update = vec![97, 13, 75, 29, 47];
        update.sort_by(|&first, &second| parsed.compare(first, second));
        assert_eq!(update, [97, 75, 47, 29, 13]);
        Ok(())
    }

    #[test]
    fn parse_rejects_rule_without_separator() {
        assert!(PrintQueue::parse("47-53\n\n47,53\n").is_err());
    }
}
