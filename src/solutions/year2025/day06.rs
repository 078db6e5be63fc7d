use std::ops::Range;

use aoc_framework::parsing::parse_with_context;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "2025 Day 6: Trash Compactor",
    parsed = Worksheet,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2025<6> {}

/*
Input is a math worksheet of problems arranged side by side. Each problem is a column of numbers with
an operator (`+` or `*`) at the bottom; problems are separated by a full column of spaces.

```text
123 328  51 64
 45 64  387 23
  6 98  215 314
*   +   *   +
```
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Multiply,
}

/// One problem: its operation and the block of characters above it, one row per number line.
#[derive(Debug)]
struct Problem {
    operation: Operation,
    cells: Vec<Vec<char>>,
}

struct Worksheet(Vec<Problem>);

#[derive(thiserror::Error, Debug)]
enum ParseWorksheetError {
    #[error("worksheet has no lines")]
    Empty,

    #[error("problem at column {0} has no operator")]
    MissingOperator(usize),

    #[error("invalid operator: {0:?}")]
    InvalidOperator(char),
}

/// Split columns into the ranges between columns that are blank on every line.
fn problem_columns(lines: &[Vec<char>], width: usize) -> Vec<Range<usize>> {
    let is_blank_column = |column: usize| lines.iter().all(|line| line[column] == ' ');
    let mut ranges = Vec::new();
    let mut start_opt = None;
    for column in 0..width {
        match (is_blank_column(column), start_opt) {
            (true, Some(start)) => {
                ranges.push(start..column);
                start_opt = None;
            }
            (false, None) => start_opt = Some(column),
            _ => {}
        }
    }
    if let Some(start) = start_opt {
        ranges.push(start..width);
    }
    ranges
}

impl ParseData for Worksheet {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let raw_lines: Vec<&str> = input.lines().filter(|line| !line.trim().is_empty()).collect();
        let width = raw_lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .ok_or(ParseWorksheetError::Empty)?;
        // lines may be ragged; pad them to a rectangle
        let lines: Vec<Vec<char>> = raw_lines
            .iter()
            .map(|line| {
                let mut chars: Vec<char> = line.chars().collect();
                chars.resize(width, ' ');
                chars
            })
            .collect();
        let (operator_line, number_lines) = lines.split_last().ok_or(ParseWorksheetError::Empty)?;

        let problems = problem_columns(&lines, width)
            .into_iter()
            .map(|columns| -> DynamicResult<_> {
                let operator = operator_line[columns.clone()]
                    .iter()
                    .find(|character| !character.is_whitespace())
                    .copied()
                    .ok_or(ParseWorksheetError::MissingOperator(columns.start + 1))?;
                let operation = match operator {
                    '+' => Operation::Add,
                    '*' => Operation::Multiply,
                    _ => return Err(ParseWorksheetError::InvalidOperator(operator).into()),
                };
                let cells = number_lines
                    .iter()
                    .map(|line| line[columns.clone()].to_vec())
                    .collect();
                Ok(Problem { operation, cells })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self(problems))
    }
}

impl Operation {
    fn apply(self, numbers: &[u64]) -> Option<u64> {
        match self {
            Self::Add => numbers.iter().copied().checked_sum(),
            Self::Multiply => numbers.iter().copied().checked_product(),
        }
    }
}

fn grand_total(
    problems: &[Problem],
    numbers_of: fn(&Problem) -> DynamicResult<Vec<u64>>,
) -> DynamicResult<u64> {
    problems
        .iter()
        .map(|problem| -> DynamicResult<u64> {
            problem
                .operation
                .apply(&numbers_of(problem)?)
                .ok_or_else(|| "problem answer overflowed".into())
        })
        .collect::<DynamicResult<Vec<u64>>>()?
        .into_iter()
        .checked_sum()
        .ok_or_else(|| "grand total overflowed".into())
}

/*
For part 1, read each problem's numbers across its rows. Solve every problem and add up the answers
for the grand total.
*/

impl Problem {
    fn row_numbers(&self) -> DynamicResult<Vec<u64>> {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>())
            .filter(|row| !row.trim().is_empty())
            .map(|row| -> DynamicResult<u64> { Ok(parse_with_context(row.trim())?) })
            .collect()
    }
}

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = Worksheet;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        grand_total(&input.0, Problem::row_numbers)
    }
}

/*
Cephalopod math is written right-to-left in columns: each number is given in its own column, with the
most significant digit at the top. Reading order of a problem's numbers doesn't change its answer.

For part 2, read each problem's numbers down its columns, and find the new grand total.
*/

impl Problem {
    fn column_numbers(&self) -> DynamicResult<Vec<u64>> {
        let width = self.cells.first().map_or(0, Vec::len);
        (0..width)
            .rev()
            .map(|column| {
                self.cells
                    .iter()
                    .map(|row| row[column])
                    .filter(|character| !character.is_whitespace())
                    .collect::<String>()
            })
            .filter(|digits| !digits.is_empty())
            .map(|digits| -> DynamicResult<u64> { Ok(parse_with_context(&digits)?) })
            .collect()
    }
}

impl Solution<PartTwo> for Day06 {
    type Input = Worksheet;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        grand_total(&input.0, Problem::column_numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"123 328  51 64 
 45 64  387 23 
  6 98  215 314
*   +   *   +  
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Worksheet::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 4_277_556);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Worksheet::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 3_263_827);
        Ok(())
    }

    #[test]
    fn ragged_lines_are_padded() -> DynamicResult<()> {
        let parsed = Worksheet::parse("12 3\n 4 56\n+  *\n")?;
        assert_eq!(parsed.0.len(), 2);
        assert_eq!(parsed.0[0].row_numbers()?, [12, 4]);
        assert_eq!(parsed.0[1].column_numbers()?, [6, 35]);
        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_operator() {
        assert!(Worksheet::parse("1 2\n- +\n").is_err());
    }
}
