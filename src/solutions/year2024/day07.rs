use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "2024 Day 7: Bridge Repair",
    parsed = Calibrations,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2024<7> {}

/*
Input is calibration equations, one per line: a test value, a colon, then the numbers of the
equation with their operators missing, e.g. `190: 10 19`.
*/

#[derive(Debug)]
struct Equation {
    test_value: u64,
    numbers: Vec<u64>,
}

struct Calibrations(Vec<Equation>);

#[derive(thiserror::Error, Debug)]
enum ParseEquationError {
    #[error("equation is missing ':' after the test value")]
    MissingColon,

    #[error("equation has no numbers")]
    NoNumbers,
}

impl ParseData for Calibrations {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let equations = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let (test_value, numbers) = line
                .split_once(':')
                .ok_or(ParseEquationError::MissingColon)?;
            let numbers = numbers
                .split_whitespace()
                .map(parse_with_context)
                .collect::<Result<Vec<u64>, _>>()?;
            if numbers.is_empty() {
                return Err(ParseEquationError::NoNumbers.into());
            }
            Ok(Equation {
                test_value: parse_with_context(test_value.trim())?,
                numbers,
            })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(equations))
    }
}

/*
Operators are evaluated left-to-right, ignoring precedence. The numbers are never rearranged.

For part 1, determine which equations could be true with any combination of add (`+`) and multiply
(`*`) operators. Sum the test values of those equations.
*/

#[derive(Debug, Clone, Copy)]
enum Operator {
    Add,
    Multiply,
    Concatenate,
}

impl Operator {
    /// Apply the operator, returning `None` on overflow.
    fn apply(self, left: u64, right: u64) -> Option<u64> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Multiply => left.checked_mul(right),
            Self::Concatenate => {
                let shift = 10u64.checked_pow(right.checked_ilog10().unwrap_or(0) + 1)?;
                left.checked_mul(shift)?.checked_add(right)
            }
        }
    }
}

impl Equation {
    /// Determine if some choice of operators between the numbers produces the test value.
    fn is_satisfiable(&self, operators: &[Operator]) -> bool {
        match self.numbers.split_first() {
            Some((&first, rest)) => self.reaches_target(first, rest, operators),
            None => false,
        }
    }

    fn reaches_target(&self, running: u64, rest: &[u64], operators: &[Operator]) -> bool {
        // every operator only grows the running value
        if running > self.test_value {
            return false;
        }
        let Some((&next, rest)) = rest.split_first() else {
            return running == self.test_value;
        };
        operators.iter().any(|operator| {
            operator
                .apply(running, next)
                .is_some_and(|value| self.reaches_target(value, rest, operators))
        })
    }
}

fn calibration_result(equations: &[Equation], operators: &[Operator]) -> DynamicResult<u64> {
    equations
        .iter()
        .filter(|equation| equation.is_satisfiable(operators))
        .map(|equation| equation.test_value)
        .checked_sum()
        .ok_or_else(|| "calibration result overflowed".into())
}

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Calibrations;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        calibration_result(&input.0, &[Operator::Add, Operator::Multiply])
    }
}

/*
A third operator is hiding: concatenation (`||`) joins the digits of its left and right inputs into
a single number, e.g. `12 || 345` is `12345`.

For part 2, sum the test values of the equations that could be true with any of the three operators.
*/

impl Solution<PartTwo> for Day07 {
    type Input = Calibrations;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        calibration_result(
            &input.0,
            &[Operator::Add, Operator::Multiply, Operator::Concatenate],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Calibrations::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3749);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Calibrations::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 11387);
        Ok(())
    }

    #[test]
    fn concatenation_joins_digits() {
        assert_eq!(Operator::Concatenate.apply(12, 345), Some(12345));
        assert_eq!(Operator::Concatenate.apply(15, 6), Some(156));
        assert_eq!(Operator::Concatenate.apply(7, 0), Some(70));
    }

    #[test]
    fn single_number_must_equal_test_value() -> DynamicResult<()> {
        let parsed = Calibrations::parse("5: 5\n6: 5\n")?;
        assert!(parsed.0[0].is_satisfiable(&[Operator::Add]));
        assert!(!parsed.0[1].is_satisfiable(&[Operator::Add]));
        Ok(())
    }

    #[test]
    fn parse_rejects_missing_colon() {
        assert!(Calibrations::parse("190 10 19\n").is_err());
    }
}
