use aoc_framework::parsing::{InputScanner, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use nalgebra::Vector2;
use regex::Regex;

#[solution_runner(
    name = "2024 Day 13: Claw Contraption",
    parsed = Arcade,
    part_one = Day13,
    part_two = Day13
)]
impl super::AdventOfCode2024<13> {}

/*
Input is a list of claw machines separated by empty lines. Each machine has three lines: how far
button A moves the claw, how far button B moves the claw, and where the prize is.

```text
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400
```
*/

#[derive(Debug, Clone, Copy)]
struct ClawMachine {
    button_a: Vector2<i64>,
    button_b: Vector2<i64>,
    prize: Vector2<i64>,
}

struct Arcade(Vec<ClawMachine>);

#[derive(thiserror::Error, Debug)]
enum ParseArcadeError {
    #[error("expected a line of the form \"{0}: X+<n>, Y+<n>\"")]
    UnexpectedLine(&'static str),

    #[error("claw machine is missing its {0} line")]
    MissingLine(&'static str),
}

/// Parse one labelled line of a claw machine into its X and Y values.
fn parse_claw_line(re: &Regex, label: &'static str, line: &str) -> DynamicResult<Vector2<i64>> {
    let captures = re
        .captures(line)
        .filter(|captures| &captures[1] == label)
        .ok_or(ParseArcadeError::UnexpectedLine(label))?;
    Ok(Vector2::new(
        parse_with_context(&captures[2])?,
        parse_with_context(&captures[3])?,
    ))
}

impl ParseData for Arcade {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let re = Regex::new(r"^(Button A|Button B|Prize): X[+=](\d+), Y[+=](\d+)$")
            .expect("pattern should be valid");

        let mut scanner = InputScanner::new(input);
        let mut machines = Vec::new();
        while scanner.skip_empty().is_some() {
            let mut next_line = |label: &'static str| -> DynamicResult<Vector2<i64>> {
                scanner
                    .next_in_sequence(|_, line| parse_claw_line(&re, label, line))?
                    .ok_or_else(|| ParseArcadeError::MissingLine(label).into())
            };
            machines.push(ClawMachine {
                button_a: next_line("Button A")?,
                button_b: next_line("Button B")?,
                prize: next_line("Prize")?,
            });
        }

        Ok(Self(machines))
    }
}

/*
Pressing button A costs 3 tokens and pressing button B costs 1 token. A machine is won by moving the
claw exactly onto the prize.

For part 1, find the fewest tokens to win every prize that can be won, and sum them.
*/

const PART_TWO_OFFSET: i64 = 10_000_000_000_000;

impl ClawMachine {
    /// Solve the presses of each button to reach the prize.
    ///
    /// The two button vectors make a 2x2 linear system with at most one solution when they aren't
    /// parallel. Parallel buttons are treated as unwinnable. Only whole, non-negative presses count.
    fn presses(&self) -> Option<(i64, i64)> {
        let (a, b, p) = (self.button_a, self.button_b, self.prize);
        let determinant = a.x.checked_mul(b.y)?.checked_sub(a.y.checked_mul(b.x)?)?;
        if determinant == 0 {
            return None;
        }
        let a_numerator = p.x.checked_mul(b.y)?.checked_sub(p.y.checked_mul(b.x)?)?;
        let b_numerator = a.x.checked_mul(p.y)?.checked_sub(a.y.checked_mul(p.x)?)?;
        if a_numerator % determinant != 0 || b_numerator % determinant != 0 {
            return None;
        }
        let presses = (a_numerator / determinant, b_numerator / determinant);
        (presses.0 >= 0 && presses.1 >= 0).then_some(presses)
    }

    fn tokens_to_win(&self) -> Option<i64> {
        self.presses()
            .and_then(|(a_presses, b_presses)| a_presses.checked_mul(3)?.checked_add(b_presses))
    }

    fn with_prize_offset(self, offset: i64) -> Option<Self> {
        Some(Self {
            prize: Vector2::new(
                self.prize.x.checked_add(offset)?,
                self.prize.y.checked_add(offset)?,
            ),
            ..self
        })
    }
}

fn total_tokens(machines: impl Iterator<Item = ClawMachine>) -> DynamicResult<i64> {
    machines
        .filter_map(|machine| machine.tokens_to_win())
        .checked_sum()
        .ok_or_else(|| "total tokens overflowed".into())
}

struct Day13;

impl Solution<PartOne> for Day13 {
    type Input = Arcade;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_tokens(input.0.iter().copied())
    }
}

/*
Due to a unit conversion error, every prize's X and Y position is actually 10000000000000 higher.

For part 2, find the fewest tokens to win every prize that can be won with the corrected positions,
and sum them.
*/

impl Solution<PartTwo> for Day13 {
    type Input = Arcade;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let machines = input
            .0
            .iter()
            .map(|machine| machine.with_prize_offset(PART_TWO_OFFSET))
            .collect::<Option<Vec<_>>>()
            .ok_or("prize position overflowed")?;
        total_tokens(machines.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Arcade::parse(EXAMPLE_INPUT)?;
        let result = <Day13 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 480);
        Ok(())
    }

    #[test]
    fn part_two_wins_second_and_fourth_machines() -> DynamicResult<()> {
        let parsed = Arcade::parse(EXAMPLE_INPUT)?;
        let winnable: Vec<bool> = parsed
            .0
            .iter()
            .map(|machine| {
                machine
                    .with_prize_offset(PART_TWO_OFFSET)
                    .and_then(|offset| offset.tokens_to_win())
                    .is_some()
            })
            .collect();
        assert_eq!(winnable, [false, true, false, true]);
        Ok(())
    }

    #[test]
    fn first_machine_presses() -> DynamicResult<()> {
        let parsed = Arcade::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.0[0].presses(), Some((80, 40)));
        assert_eq!(parsed.0[0].tokens_to_win(), Some(280));
        Ok(())
    }

    #[test]
    fn parallel_buttons_are_unwinnable() {
        let machine = ClawMachine {
            button_a: Vector2::new(1, 1),
            button_b: Vector2::new(2, 2),
            prize: Vector2::new(4, 4),
        };
        assert_eq!(machine.presses(), None);
    }

    #[test]
    fn parse_rejects_incomplete_machine() {
        assert!(Arcade::parse("Button A: X+94, Y+34\nButton B: X+22, Y+67\n").is_err());
    }
}
