use aoc_framework::parsing::{Separator, parse_separated_values};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "2025 Day 3: Lobby",
    parsed = BatteryBanks,
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2025<3> {}

/*
Input is one bank of batteries per line, each battery a digit from 1 to 9 for its joltage rating.
*/

struct BatteryBanks(Vec<Vec<u8>>);

impl ParseData for BatteryBanks {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(Self(parse_separated_values(input, Separator::Chars)?))
    }
}

#[derive(thiserror::Error, Debug)]
#[error("bank of {found} batteries can't turn on {wanted}")]
struct TooFewBatteries {
    found: usize,
    wanted: usize,
}

/// The largest joltage from turning on `count` batteries of a bank, keeping their order.
///
/// Each digit is chosen greedily as the largest that still leaves enough batteries after it.
fn max_joltage(bank: &[u8], count: usize) -> DynamicResult<u64> {
    if bank.len() < count {
        return Err(TooFewBatteries {
            found: bank.len(),
            wanted: count,
        }
        .into());
    }

    let mut joltage: u64 = 0;
    let mut start = 0;
    for remaining in (0..count).rev() {
        let window = &bank[start..bank.len() - remaining];
        // the first of equal maxima leaves the most choice afterward
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, digit)| digit)
            .expect("window should hold at least one battery");
        start += offset + 1;
        joltage = joltage
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(u64::from(digit)))
            .ok_or("joltage overflowed")?;
    }
    Ok(joltage)
}

fn total_joltage(banks: &[Vec<u8>], count: usize) -> DynamicResult<u64> {
    banks
        .iter()
        .map(|bank| max_joltage(bank, count))
        .collect::<DynamicResult<Vec<_>>>()?
        .into_iter()
        .checked_sum()
        .ok_or_else(|| "total joltage overflowed".into())
}

/*
Exactly two batteries are turned on in each bank; the bank's joltage is the number their digits form
in order.

For part 1, sum the largest joltage possible from each bank.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = BatteryBanks;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_joltage(&input.0, 2)
    }
}

/*
For part 2, turn on exactly twelve batteries per bank instead, and sum the largest joltages.
*/

impl Solution<PartTwo> for Day03 {
    type Input = BatteryBanks;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_joltage(&input.0, 12)
    }
}
