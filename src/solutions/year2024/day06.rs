use std::num::TryFromIntError;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;
use tracing::debug;

use guard::{Facing, Guard};
use lab_map::LabMap;
use patrol::{PatrolEngine, PatrolOutcome};

mod guard;
mod lab_map;
mod patrol;

#[solution_runner(
    name = "2024 Day 6: Guard Gallivant",
    parsed = Lab,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2024<6> {}

/*
Input is a character grid of a lab: `#` for an obstacle, `.` for open floor, and exactly one of
`^`, `>`, `v`, `<` for the guard's start and the direction it faces.

The guard walks forward until the next cell holds an obstacle, then turns right, until it walks
out of the lab.
*/

/// A parsed lab: its obstacle map and the guard at its start.
#[derive(Debug)]
struct Lab {
    map: LabMap,
    guard: Guard,
}

#[derive(thiserror::Error, Debug)]
enum ParseLabError {
    #[error("too many lines to represent y coordinate")]
    LineIndexOverflow(#[source] TryFromIntError),

    #[error("too many characters to represent x coordinate")]
    CharIndexOverflow(#[source] TryFromIntError),

    #[error("expected grid width to be {expected} across rows, but found row width {found}")]
    UnequalGridWidth { expected: i32, found: i32 },

    #[error("invalid character in grid: {0:?}")]
    InvalidChar(char),

    #[error("detected a second guard after first (at {first}): {second}")]
    SecondGuard {
        first: Point2<i32>,
        second: Point2<i32>,
    },

    #[error("input is missing a guard")]
    MissingGuard,
}

impl ParseData for Lab {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows = i32::try_from(input.lines().count()).map_err(ParseLabError::LineIndexOverflow)?;
        let mut width_opt = None;
        let mut obstacles = Vec::new();
        let mut guard_opt: Option<Guard> = None;

        parse_input_lines(input, |line_index, line| -> DynamicResult<()> {
            let line_width =
                i32::try_from(line.chars().count()).map_err(ParseLabError::CharIndexOverflow)?;
            match width_opt {
                Some(expected) if expected != line_width => {
                    return Err(ParseLabError::UnequalGridWidth {
                        expected,
                        found: line_width,
                    }
                    .into());
                }
                Some(_) => {}
                None => width_opt = Some(line_width),
            }

            let y = i32::try_from(line_index).expect("validated range conversion earlier for rows");
            for (x, character) in (0..).zip(line.chars()) {
                let position = Point2::new(x, y);
                match character {
                    '.' => {}
                    '#' => obstacles.push(position),
                    '^' | '>' | 'v' | '<' => {
                        if let Some(first) = &guard_opt {
                            return Err(ParseLabError::SecondGuard {
                                first: first.position(),
                                second: position,
                            }
                            .into());
                        }
                        guard_opt = Some(Guard::new(position, Facing::try_from(character)?));
                    }
                    _ => return Err(ParseLabError::InvalidChar(character).into()),
                }
            }
            Ok(())
        })
        .collect::<Result<(), _>>()?;

        let guard = guard_opt.ok_or(ParseLabError::MissingGuard)?;
        let map = LabMap::new(rows, width_opt.unwrap_or(0), obstacles)?;
        Ok(Self { map, guard })
    }
}

/*
For part 1, count the distinct cells the guard stands on before leaving the lab.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = Lab;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut engine = PatrolEngine::new(input.map.clone(), input.guard.clone());
        match engine.run() {
            PatrolOutcome::Exited => {
                debug!(steps = engine.forward_steps(), "guard left the lab");
                Ok(engine.visited_cells().len())
            }
            PatrolOutcome::Looping => Err("guard never leaves the lab".into()),
        }
    }
}

/*
A single new obstacle can trap the guard in a loop. It can't be placed at the guard's start, and
it only changes the patrol when placed somewhere the guard would otherwise walk.

For part 2, count the positions where one new obstacle makes the guard loop forever.
*/

impl Solution<PartTwo> for Day06 {
    type Input = Lab;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut engine = PatrolEngine::new(input.map.clone(), input.guard.clone());
        if engine.run() == PatrolOutcome::Looping {
            return Err("guard never leaves the lab".into());
        }
        let start = engine.guard().start_position();
        let candidates: Vec<_> = engine
            .visited_cells()
            .iter()
            .copied()
            .filter(|&cell| cell != start)
            .collect();

        let mut loops = 0;
        for &candidate in &candidates {
            engine.map_mut().set_temporary_obstacle(candidate)?;
            if engine.run() == PatrolOutcome::Looping {
                loops += 1;
            }
            engine.map_mut().clear_temporary_obstacle();
        }

        debug!(candidates = candidates.len(), loops, "obstacle sweep finished");
        Ok(loops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Lab::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 41);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Lab::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn example_has_forty_obstacle_candidates() -> DynamicResult<()> {
        let parsed = Lab::parse(EXAMPLE_INPUT)?;
        let mut engine = PatrolEngine::new(parsed.map, parsed.guard);
        assert_eq!(engine.run(), PatrolOutcome::Exited);
        let start = engine.guard().start_position();
        assert!(engine.visited_cells().contains(&start));
        assert_eq!(engine.visited_cells().len() - 1, 40);
        Ok(())
    }

    #[test]
    fn known_loop_position_traps_the_guard() -> DynamicResult<()> {
        let parsed = Lab::parse(EXAMPLE_INPUT)?;
        let mut engine = PatrolEngine::new(parsed.map, parsed.guard);
        // next to the guard's start, from the puzzle's first loop example
        engine.map_mut().set_temporary_obstacle(Point2::new(3, 6))?;
        assert_eq!(engine.run(), PatrolOutcome::Looping);
        engine.map_mut().clear_temporary_obstacle();
        assert_eq!(engine.run(), PatrolOutcome::Exited);
        Ok(())
    }

    #[test]
    fn lab_that_already_loops_has_no_answers() -> DynamicResult<()> {
        let parsed = Lab::parse(".#..\n...#\n#^..\n..#.\n")?;
        assert!(<Day06 as Solution<PartOne>>::solve(&parsed).is_err());
        assert!(<Day06 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn parse_rejects_missing_guard() {
        let Err(error) = Lab::parse("..#\n...\n") else {
            panic!("expected a lab without a guard to fail");
        };
        assert!(error.is::<ParseLabError>());
    }

    #[test]
    fn parse_rejects_second_guard() {
        assert!(Lab::parse("^..\n..>\n").is_err());
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert!(Lab::parse("^..\n..\n").is_err());
    }
}
