use aoc_framework::parsing::parse_with_context;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
use regex::Regex;

#[solution_runner(
    name = "2024 Day 3: Mull It Over",
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2024<3> {}

/*
Input is corrupted program memory. Among the noise are intact instructions: `mul(X,Y)` with X and Y
as numbers without leading zeros, `do()`, and `don't()`.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

const INSTRUCTION_PATTERN: &str = r"mul\(([1-9][0-9]*),([1-9][0-9]*)\)|do\(\)|don't\(\)";

/// Scan memory for intact instructions, in order of appearance.
fn scan_instructions(memory: &str) -> DynamicResult<Vec<Instruction>> {
    let re = Regex::new(INSTRUCTION_PATTERN).expect("pattern should be valid");
    re.captures_iter(memory)
        .map(|captures| -> DynamicResult<_> {
            let instruction = match (captures.get(1), captures.get(2)) {
                (Some(x), Some(y)) => Instruction::Mul(
                    parse_with_context(x.as_str())?,
                    parse_with_context(y.as_str())?,
                ),
                _ if &captures[0] == "do()" => Instruction::Do,
                _ => Instruction::Dont,
            };
            Ok(instruction)
        })
        .collect()
}

fn product(x: u64, y: u64) -> DynamicResult<u64> {
    x.checked_mul(y)
        .ok_or_else(|| format!("mul({x},{y}) overflowed").into())
}

/*
For part 1, add up the results of every `mul` instruction.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = str;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        scan_instructions(input)?
            .into_iter()
            .try_fold(0u64, |total, instruction| -> DynamicResult<_> {
                match instruction {
                    Instruction::Mul(x, y) => Ok(total
                        .checked_add(product(x, y)?)
                        .ok_or("sum of products overflowed")?),
                    Instruction::Do | Instruction::Dont => Ok(total),
                }
            })
    }
}

/*
`don't()` disables later `mul` instructions until a `do()` enables them again. Instructions start
enabled, and the state carries across lines of memory.

For part 2, add up the results of only the enabled `mul` instructions.
*/

impl Solution<PartTwo> for Day03 {
    type Input = str;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut enabled = true;
        let mut total: u64 = 0;
        for instruction in scan_instructions(input)? {
            match instruction {
                Instruction::Do => enabled = true,
                Instruction::Dont => enabled = false,
                Instruction::Mul(x, y) if enabled => {
                    total = total
                        .checked_add(product(x, y)?)
                        .ok_or("sum of products overflowed")?;
                }
                Instruction::Mul(..) => {}
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT_1: &str =
        r"xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))
";

    const EXAMPLE_INPUT_2: &str =
        r"xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let result = <Day03 as Solution<PartOne>>::solve(EXAMPLE_INPUT_1)?;
        assert_eq!(result, 161);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let result = <Day03 as Solution<PartTwo>>::solve(EXAMPLE_INPUT_2)?;
        assert_eq!(result, 48);
        Ok(())
    }

    #[test]
    fn disabled_state_carries_across_lines() -> DynamicResult<()> {
        let result = <Day03 as Solution<PartTwo>>::solve("mul(2,3)don't()\nmul(4,5)\n")?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn leading_zeros_are_not_instructions() -> DynamicResult<()> {
        let instructions = scan_instructions("mul(02,3)mul(0,1)mul(7,1)")?;
        assert_eq!(instructions, [Instruction::Mul(7, 1)]);
        Ok(())
    }
}
