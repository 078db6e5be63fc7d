//! Character grids parsed into matrices, and stepping between their cells.
//!
//! Cells are addressed as `(row, col)` matrix indices.

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::{DynamicError, DynamicResult};
use nalgebra::{DMatrix, Scalar};

/// Offsets to the four orthogonal neighbours, clockwise from up.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Offsets to all eight neighbours, clockwise from up.
pub const SURROUNDING: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

#[derive(thiserror::Error, Debug)]
pub enum ParseGridError {
    #[error("expected grid width to be {expected} across rows, but found row width {found}")]
    UnequalGridWidth { expected: usize, found: usize },

    #[error("grid has no rows")]
    Empty,
}

/// Parse a rectangular character grid, converting each character to a cell.
///
/// # Errors
///
/// Errors from converting characters are returned with the line they were found on. Rows of
/// differing width, or an input without rows, are rejected with a [`ParseGridError`].
pub fn parse_char_grid<T, E, F>(input: &str, mut cell: F) -> DynamicResult<DMatrix<T>>
where
    T: Scalar,
    E: Into<DynamicError>,
    F: FnMut(char) -> Result<T, E>,
{
    let mut expected_width = None;
    let rows: Vec<Vec<T>> = parse_input_lines(input, |_, line| -> DynamicResult<_> {
        let row: Vec<T> = line
            .chars()
            .map(&mut cell)
            .collect::<Result<_, _>>()
            .map_err(Into::<DynamicError>::into)?;
        match expected_width {
            Some(expected) if expected != row.len() => {
                return Err(ParseGridError::UnequalGridWidth {
                    expected,
                    found: row.len(),
                }
                .into());
            }
            Some(_) => {}
            None => expected_width = Some(row.len()),
        }
        Ok(row)
    })
    .collect::<Result<_, _>>()?;

    let cols = expected_width.ok_or(ParseGridError::Empty)?;
    Ok(DMatrix::from_row_iterator(
        rows.len(),
        cols,
        rows.into_iter().flatten(),
    ))
}

/// Step from a cell by an offset, returning the new cell if it is inside the matrix.
pub fn step<T>(
    matrix: &DMatrix<T>,
    (row, col): (usize, usize),
    (row_offset, col_offset): (isize, isize),
) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(row_offset)?;
    let col = col.checked_add_signed(col_offset)?;
    (row < matrix.nrows() && col < matrix.ncols()).then_some((row, col))
}

/// Iterate every cell index of a matrix, row by row.
pub fn indices<T>(matrix: &DMatrix<T>) -> impl Iterator<Item = (usize, usize)> + use<T> {
    let cols = matrix.ncols();
    (0..matrix.nrows()).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    #[test]
    fn parses_rows_in_order() -> DynamicResult<()> {
        let grid = parse_char_grid("ab\ncd\nef\n", Ok::<_, Infallible>)?;
        assert_eq!(grid.shape(), (3, 2));
        assert_eq!(grid[(0, 1)], 'b');
        assert_eq!(grid[(2, 0)], 'e');
        Ok(())
    }

    #[test]
    fn rejects_ragged_rows() {
        let Err(error) = parse_char_grid("abc\nde\n", Ok::<_, Infallible>) else {
            panic!("expected ragged rows to fail");
        };
        assert!(error.to_string().contains("line 2"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_char_grid("", Ok::<_, Infallible>).is_err());
    }

    #[test]
    fn steps_stay_inside() {
        let grid = DMatrix::from_element(2, 3, 0u8);
        assert_eq!(step(&grid, (0, 0), (1, 1)), Some((1, 1)));
        assert_eq!(step(&grid, (0, 0), (-1, 0)), None);
        assert_eq!(step(&grid, (1, 2), (0, 1)), None);
        assert_eq!(indices(&grid).count(), 6);
    }
}
