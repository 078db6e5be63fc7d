use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "2025 Day 1: Secret Entrance",
    parsed = Rotations,
    part_one = Day01,
    part_two = Day01
)]
impl super::AdventOfCode2025<1> {}

/*
Input is a sequence of rotations for a safe's dial, one per line: `L` or `R` for the direction
(toward lower or higher numbers), then a distance in clicks, e.g. `L68`.

The dial shows the numbers 0 through 99 in a circle and starts pointing at 50.
*/

const DIAL_SIZE: u32 = 100;
const DIAL_START: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Left(u32),
    Right(u32),
}

struct Rotations(Vec<Rotation>);

#[derive(thiserror::Error, Debug)]
#[error("rotation must start with 'L' or 'R': {0:?}")]
struct InvalidDirection(String);

impl ParseData for Rotations {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rotations = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            if let Some(distance) = line.strip_prefix('L') {
                Ok(Rotation::Left(parse_with_context(distance)?))
            } else if let Some(distance) = line.strip_prefix('R') {
                Ok(Rotation::Right(parse_with_context(distance)?))
            } else {
                Err(InvalidDirection(line.to_owned()).into())
            }
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(rotations))
    }
}

impl Rotation {
    /// Where the dial points after this rotation.
    fn apply(self, position: u32) -> u32 {
        match self {
            Self::Left(distance) => (position + DIAL_SIZE - distance % DIAL_SIZE) % DIAL_SIZE,
            Self::Right(distance) => (position + distance % DIAL_SIZE) % DIAL_SIZE,
        }
    }

    /// How many clicks during this rotation land the dial on 0.
    ///
    /// Full turns are counted apart from the remainder, so no distance overflows.
    fn zero_clicks(self, position: u32) -> u32 {
        let (Self::Left(distance) | Self::Right(distance)) = self;
        let to_zero = match self {
            Self::Left(_) => (DIAL_SIZE - position) % DIAL_SIZE,
            Self::Right(_) => position,
        };
        distance / DIAL_SIZE + (to_zero + distance % DIAL_SIZE) / DIAL_SIZE
    }
}

/*
For part 1, the password is the number of times the dial is left pointing at 0 after any rotation.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = Rotations;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .scan(DIAL_START, |position, rotation| {
                *position = rotation.apply(*position);
                Some(*position)
            })
            .filter(|&position| position == 0)
            .count())
    }
}

/*
For part 2, the password is the number of times any click causes the dial to point at 0, whether
during a rotation or at its end.
*/

impl Solution<PartTwo> for Day01 {
    type Input = Rotations;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut position = DIAL_START;
        let mut zeroes: u32 = 0;
        for rotation in &input.0 {
            zeroes = zeroes
                .checked_add(rotation.zero_clicks(position))
                .ok_or("password overflowed")?;
            position = rotation.apply(position);
        }
        Ok(zeroes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"L68
L30
R48
L5
R60
L55
L1
L99
R14
L82
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Rotations::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Rotations::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn long_rotation_passes_zero_many_times() {
        assert_eq!(Rotation::Right(1000).zero_clicks(50), 10);
        assert_eq!(Rotation::Right(1000).apply(50), 50);
        assert_eq!(Rotation::Left(5).zero_clicks(0), 0);
        assert_eq!(Rotation::Left(100).zero_clicks(0), 1);
    }

    #[test]
    fn longest_rotations_do_not_overflow() {
        assert_eq!(Rotation::Right(u32::MAX).zero_clicks(50), 42_949_673);
        assert_eq!(Rotation::Right(u32::MAX).apply(50), 45);
        assert_eq!(Rotation::Left(u32::MAX).zero_clicks(50), 42_949_673);
        assert_eq!(Rotation::Left(u32::MAX).apply(50), 55);
        assert_eq!(Rotation::Left(u32::MAX).zero_clicks(0), 42_949_672);
    }

    #[test]
    fn parse_rejects_unknown_direction() {
        assert!(Rotations::parse("U10\n").is_err());
    }
}
