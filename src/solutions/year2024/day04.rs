use std::convert::Infallible;

use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;

use crate::grid::{SURROUNDING, indices, parse_char_grid, step};

#[solution_runner(
    name = "2024 Day 4: Ceres Search",
    parsed = WordSearch,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2024<4> {}

/*
Input is a word search: a rectangular grid of letters.
*/

struct WordSearch(DMatrix<char>);

impl ParseData for WordSearch {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(Self(parse_char_grid(input, Ok::<_, Infallible>)?))
    }
}

/*
For part 1, count every occurrence of `XMAS`. Words read in any of eight directions: horizontal,
vertical, diagonal, and backwards. Occurrences may overlap.
*/

impl WordSearch {
    /// Determine if the word is spelled from a cell going in a direction.
    fn spells(&self, word: &str, start: (usize, usize), direction: (isize, isize)) -> bool {
        let mut cell_opt = Some(start);
        for letter in word.chars() {
            let Some(cell) = cell_opt else {
                return false;
            };
            if self.0[cell] != letter {
                return false;
            }
            cell_opt = step(&self.0, cell, direction);
        }
        true
    }

    fn letter_at(&self, cell: (usize, usize), offset: (isize, isize)) -> Option<char> {
        step(&self.0, cell, offset).map(|neighbour| self.0[neighbour])
    }

    /// Determine if a cell is the centre `A` of two crossing `MAS`.
    fn is_x_mas_centre(&self, cell: (usize, usize)) -> bool {
        let diagonal_is_mas = |first: (isize, isize), second: (isize, isize)| {
            matches!(
                (self.letter_at(cell, first), self.letter_at(cell, second)),
                (Some('M'), Some('S')) | (Some('S'), Some('M'))
            )
        };
        self.0[cell] == 'A' && diagonal_is_mas((-1, -1), (1, 1)) && diagonal_is_mas((-1, 1), (1, -1))
    }
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(indices(&input.0)
            .map(|cell| {
                SURROUNDING
                    .into_iter()
                    .filter(|&direction| input.spells("XMAS", cell, direction))
                    .count()
            })
            .sum())
    }
}

/*
It turns out the puzzle is to find an X-MAS: two `MAS` crossing in the shape of an X, sharing the
`A`. Either `MAS` may be written backwards.

For part 2, count the X-MAS occurrences.
*/

impl Solution<PartTwo> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(indices(&input.0)
            .filter(|&cell| input.is_x_mas_centre(cell))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 18);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 9);
        Ok(())
    }

    #[test]
    fn words_off_the_edge_are_not_spelled() -> DynamicResult<()> {
        let parsed = WordSearch::parse("XMA\n")?;
        assert!(!parsed.spells("XMAS", (0, 0), (0, 1)));
        assert!(parsed.spells("XMA", (0, 0), (0, 1)));
        Ok(())
    }
}
