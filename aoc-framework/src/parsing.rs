//! Utility functions and errors for parsing input.
//!
//! Puzzle inputs come in a few recurring shapes, each with a helper here:
//!
//! - one record per line: [`parse_input_lines`] and [`parse_lines_with_offset`];
//! - blocks of lines separated by empty lines: [`InputScanner`];
//! - tables of delimited numbers: [`parse_separated_values`], optionally transposed with
//!   [`into_columns`].

use std::iter::{Enumerate, Peekable};
use std::str::{FromStr, Lines};

use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`] and maps errors to [`ParseContextError`].
///
/// # Errors
///
/// Will return a [`ParseContextError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the string into the desired
/// type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    fn new(line_index: usize, source: impl Into<DynamicError>) -> Self {
        Self {
            line_index,
            source: source.into(),
        }
    }

    /// The zero based index of the line that failed to parse.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.line_index
    }
}

/// Parse lines with a closure, mapping any line's error with an [`InvalidLine`].
///
/// The closure receives the zero based line index and the line.
///
/// # Errors
///
/// If parsing a line fails, an [`InvalidLine`] error is returned in place of that line's item,
/// sourcing the original error.
///
/// ```
/// use aoc_framework::parsing::parse_input_lines;
///
/// let lengths: Vec<usize> = parse_input_lines("ab\ncde\n", |_, line| {
///     Ok::<_, std::convert::Infallible>(line.len())
/// })
/// .collect::<Result<_, _>>()?;
/// assert_eq!(lengths, [2, 3]);
/// # Ok::<(), aoc_framework::parsing::InvalidLine>(())
/// ```
pub fn parse_input_lines<T, E, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &str) -> Result<T, E>,
{
    input.lines().enumerate().map(move |(index, line)| {
        parser(index, line).map_err(|source| InvalidLine::new(index, source))
    })
}

/// Parse lines with a closure, mapping any line's dynamic error with an [`InvalidLine`].
///
/// # Arguments
/// - `input` - The input string to parse.
/// - `offset` - An offset to add to the line index for [`InvalidLine`] errors. Useful when parsing
///   a later slice of input and errors should have any reported line index reflect the offset line
///   position from the original input. Set to `0` if no offset is needed.
/// - `parser` - A closure that takes a line string and returns a [`DynamicResult`].
///
/// # Errors
///
/// If parsing a line fails, an [`InvalidLine`] error is returned, sourcing the original error.
pub fn parse_lines_with_offset<T, F>(
    input: &str,
    offset: usize,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(&str) -> DynamicResult<T>,
{
    input.lines().enumerate().map(move |(index, line)| {
        parser(line).map_err(|source| InvalidLine::new(index.saturating_add(offset), source))
    })
}

/// Determine if a line holds nothing but whitespace.
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A cursor over input lines for inputs formatted in blocks separated by empty lines.
///
/// A *sequence* is a run of consecutive non-empty lines. Parsing closures receive the zero based
/// line index and the line, like [`parse_input_lines`].
///
/// ```
/// use aoc_framework::parsing::InputScanner;
///
/// let mut scanner = InputScanner::new("47|53\n97|13\n\n75,47\n");
/// let rules = scanner.collect_sequence(|_, line| {
///     Ok::<_, std::convert::Infallible>(line.to_owned())
/// })?;
/// assert_eq!(rules, ["47|53", "97|13"]);
///
/// let update = scanner.next_item(|_, line| Ok::<_, std::convert::Infallible>(line.len()))?;
/// assert_eq!(update, Some(5));
/// assert!(scanner.is_finished());
/// # Ok::<(), aoc_framework::parsing::InvalidLine>(())
/// ```
pub struct InputScanner<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> InputScanner<'a> {
    /// Create a scanner at the start of the input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate().peekable(),
        }
    }

    /// Skip any empty lines, returning the index of the next non-empty line if there is one.
    pub fn skip_empty(&mut self) -> Option<usize> {
        while let Some(&(index, line)) = self.lines.peek() {
            if !is_blank(line) {
                return Some(index);
            }
            self.lines.next();
        }
        None
    }

    /// Determine if no non-empty lines remain.
    pub fn is_finished(&mut self) -> bool {
        self.skip_empty().is_none()
    }

    /// Parse the next line if it continues the current sequence.
    ///
    /// Returns `None` without consuming anything when the next line is empty or the input is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// The parser's error is returned as an [`InvalidLine`].
    pub fn next_in_sequence<T, E, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnOnce(usize, &str) -> Result<T, E>,
    {
        match self.lines.peek() {
            Some(&(_, line)) if !is_blank(line) => {}
            _ => return Ok(None),
        }
        let Some((index, line)) = self.lines.next() else {
            return Ok(None);
        };
        parser(index, line)
            .map(Some)
            .map_err(|source| InvalidLine::new(index, source))
    }

    /// Skip empty lines, then parse the next line.
    ///
    /// Returns `None` when the input is exhausted.
    ///
    /// # Errors
    ///
    /// The parser's error is returned as an [`InvalidLine`].
    pub fn next_item<T, E, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnOnce(usize, &str) -> Result<T, E>,
    {
        self.skip_empty();
        self.next_in_sequence(parser)
    }

    /// Parse every line of the current sequence, stopping before the next empty line.
    ///
    /// # Errors
    ///
    /// The first parser error is returned as an [`InvalidLine`].
    pub fn collect_sequence<T, E, F>(&mut self, mut parser: F) -> Result<Vec<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnMut(usize, &str) -> Result<T, E>,
    {
        let mut items = Vec::new();
        while let Some(item) = self.next_in_sequence(&mut parser)? {
            items.push(item);
        }
        Ok(items)
    }
}

/// How values are delimited on a line for [`parse_separated_values`].
#[derive(Debug, Clone, Copy)]
pub enum Separator<'a> {
    /// Values are separated by runs of whitespace.
    Whitespace,
    /// Values are separated by an exact string, such as `","`.
    Str(&'a str),
    /// Every character is its own value, such as a line of digits.
    Chars,
}

/// Parse every non-empty line into a row of values split by the separator.
///
/// # Errors
///
/// If a value fails to parse, an [`InvalidLine`] is returned sourcing a [`ParseContextError`].
///
/// ```
/// use aoc_framework::parsing::{Separator, parse_separated_values};
///
/// let rows: Vec<Vec<u8>> = parse_separated_values("7 6 4\n1 2 7\n", Separator::Whitespace)?;
/// assert_eq!(rows, [[7, 6, 4], [1, 2, 7]]);
///
/// let digits: Vec<Vec<u8>> = parse_separated_values("0123\n", Separator::Chars)?;
/// assert_eq!(digits, [[0, 1, 2, 3]]);
/// # Ok::<(), aoc_framework::parsing::InvalidLine>(())
/// ```
pub fn parse_separated_values<T>(
    input: &str,
    separator: Separator<'_>,
) -> Result<Vec<Vec<T>>, InvalidLine>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let parse_row = |line: &str| -> Result<Vec<T>, ParseContextError<T::Err>> {
        match separator {
            Separator::Whitespace => line.split_whitespace().map(parse_with_context).collect(),
            Separator::Str(delimiter) => line.split(delimiter).map(parse_with_context).collect(),
            Separator::Chars => line
                .char_indices()
                .map(|(index, ch)| parse_with_context(&line[index..index + ch.len_utf8()]))
                .collect(),
        }
    };

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_blank(line))
        .map(|(index, line)| parse_row(line).map_err(|source| InvalidLine::new(index, source)))
        .collect()
}

/// Rows passed to [`into_columns`] had differing lengths.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("expected {expected} values in every row, but row {} has {found}", .row_index.saturating_add(1))]
pub struct RaggedRows {
    expected: usize,
    found: usize,
    row_index: usize,
}

/// Transpose rows of values into columns of values.
///
/// # Errors
///
/// Returns [`RaggedRows`] if the rows differ in length.
///
/// ```
/// use aoc_framework::parsing::into_columns;
///
/// let columns = into_columns(vec![vec![3, 4], vec![4, 3], vec![2, 5]])?;
/// assert_eq!(columns, [[3, 4, 2], [4, 3, 5]]);
/// # Ok::<(), aoc_framework::parsing::RaggedRows>(())
/// ```
pub fn into_columns<T>(rows: Vec<Vec<T>>) -> Result<Vec<Vec<T>>, RaggedRows> {
    let expected = rows.first().map_or(0, Vec::len);
    let mut columns: Vec<Vec<T>> = (0..expected)
        .map(|_| Vec::with_capacity(rows.len()))
        .collect();

    for (row_index, row) in rows.into_iter().enumerate() {
        if row.len() != expected {
            return Err(RaggedRows {
                expected,
                found: row.len(),
                row_index,
            });
        }
        for (column, value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    #[test]
    fn invalid_line_reports_one_based_line() {
        let Err(error) = parse_input_lines("1\nx\n", |_, line| line.parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
        else {
            panic!("second line should fail");
        };
        assert_eq!(error.line_index(), 1);
        assert_eq!(error.to_string(), "failure parsing line 2");
    }

    #[test]
    fn scanner_walks_blocks() -> DynamicResult<()> {
        let mut scanner = InputScanner::new("a\nb\n\n\nc\nd\n");

        let first = scanner.next_in_sequence(|index, line| {
            Ok::<_, Infallible>(format!("{index}{line}"))
        })?;
        assert_eq!(first.as_deref(), Some("0a"));

        let rest = scanner.collect_sequence(|_, line| Ok::<_, Infallible>(line.to_owned()))?;
        assert_eq!(rest, ["b"]);

        // at the block boundary, sequences stop until empty lines are skipped
        let none = scanner.next_in_sequence(|_, _| Ok::<_, Infallible>(()))?;
        assert!(none.is_none());
        assert_eq!(scanner.skip_empty(), Some(4));

        let second_block =
            scanner.collect_sequence(|_, line| Ok::<_, Infallible>(line.to_owned()))?;
        assert_eq!(second_block, ["c", "d"]);
        assert!(scanner.is_finished());
        Ok(())
    }

    #[test]
    fn separated_values_skip_blank_lines() -> DynamicResult<()> {
        let rows: Vec<Vec<u32>> = parse_separated_values("1,2\n\n3,4\n", Separator::Str(","))?;
        assert_eq!(rows, [[1, 2], [3, 4]]);
        Ok(())
    }

    #[test]
    fn separated_values_report_bad_value_line() {
        let Err(error) = parse_separated_values::<u32>("1,2\n3,x\n", Separator::Str(",")) else {
            panic!("x is not a number");
        };
        assert_eq!(error.line_index(), 1);
    }

    #[test]
    fn into_columns_rejects_ragged_rows() {
        let Err(error) = into_columns(vec![vec![1, 2], vec![3]]) else {
            panic!("rows are ragged");
        };
        assert_eq!(
            error,
            RaggedRows {
                expected: 2,
                found: 1,
                row_index: 1
            }
        );
    }
}
