//! Utility functions and errors for parsing input.

use std::str::FromStr;

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
        string: string.to_owned(),
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
    /// The zero-based index of the line that failed to parse.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.line_index
    }
}

/// Parse each line of input with a closure given the line index and line, mapping any error to an
/// [`InvalidLine`].
///
/// # Returns
///
/// An iterator of parsing results for each line. Collect into a `Result` to stop at the first
/// invalid line.
pub fn parse_input_lines<'a, T, E, F>(
    input: &'a str,
    parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &'a str) -> Result<T, E>,
{
    parse_lines_with_offset(input, 0, parser)
}

/// Parse lines with a closure, mapping any line's error to an [`InvalidLine`].
///
/// # Arguments
/// - `input` - The input string to parse.
/// - `offset` - An offset added to line indexes, both those passed to `parser` and those reported
///   by [`InvalidLine`]. Useful when parsing a later slice of input, so errors point at the line
///   position in the original input. Set to `0` if no offset is needed.
/// - `parser` - A closure that takes a line index and line string and returns a result. Results
///   may borrow from the input.
pub fn parse_lines_with_offset<'a, T, E, F>(
    input: &'a str,
    offset: usize,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &'a str) -> Result<T, E>,
{
    input.lines().enumerate().map(move |(index, line)| {
        let line_index = index.saturating_add(offset);
        parser(line_index, line).map_err(|source| InvalidLine {
            line_index,
            source: source.into(),
        })
    })
}

/// A block of consecutive non-empty lines from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBlock<'a> {
    /// The zero-based index of the block's first line in the whole input.
    pub line_offset: usize,
    /// The block's lines, joined with newlines.
    pub text: &'a str,
}

/// Split input into blocks separated by one or more blank lines.
///
/// Lines containing only whitespace count as blank. Leading and trailing blank lines produce no
/// blocks.
///
/// ```
/// use puzzle_kit::parsing::split_blocks;
///
/// let blocks: Vec<_> = split_blocks("a\nb\n\n\nc\n").collect();
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].text, "a\nb");
/// assert_eq!(blocks[1].line_offset, 4);
/// assert_eq!(blocks[1].text, "c");
/// ```
pub fn split_blocks(input: &str) -> impl Iterator<Item = InputBlock<'_>> {
    let mut blocks = Vec::new();
    // byte range and first line index of the block being scanned
    let mut current: Option<(usize, usize, usize)> = None;
    let mut byte_position = 0;

    for (line_index, raw_line) in input.split_inclusive('\n').enumerate() {
        let line_start = byte_position;
        byte_position += raw_line.len();
        let line = raw_line.trim_end_matches(['\n', '\r']);
        let line_end = line_start + line.len();

        if line.trim().is_empty() {
            if let Some((start, end, line_offset)) = current.take() {
                blocks.push(InputBlock {
                    line_offset,
                    text: &input[start..end],
                });
            }
        } else if let Some((_, end, _)) = current.as_mut() {
            *end = line_end;
        } else {
            current = Some((line_start, line_end, line_index));
        }
    }
    if let Some((start, end, line_offset)) = current {
        blocks.push(InputBlock {
            line_offset,
            text: &input[start..end],
        });
    }

    blocks.into_iter()
}

/// Input ended before an expected block.
#[derive(Error, Debug)]
#[error("expected a block for {0}, but input ended")]
pub struct MissingBlock(pub &'static str);

/// Parse an input made of exactly two blank-line separated sections, like a header followed by a
/// body.
///
/// # Errors
///
/// Returns a [`MissingBlock`] error naming `first_name` or `second_name` if that section is absent.
pub fn split_two_sections<'a>(
    input: &'a str,
    first_name: &'static str,
    second_name: &'static str,
) -> DynamicResult<(InputBlock<'a>, Vec<InputBlock<'a>>)> {
    let mut blocks = split_blocks(input);
    let first = blocks.next().ok_or(MissingBlock(first_name))?;
    let rest: Vec<_> = blocks.collect();
    if rest.is_empty() {
        return Err(MissingBlock(second_name).into());
    }
    Ok((first, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_context_keeps_string() {
        let error = parse_with_context::<u8>("300").expect_err("300 does not fit in u8");
        assert_eq!(error.to_string(), "failed to parse string: \"300\"");
    }

    #[test]
    fn invalid_line_reports_one_based_number() {
        let results: Vec<_> = parse_input_lines("1\n2\nx\n4", |_, line| line.parse::<u32>())
            .collect();
        assert!(results[0].is_ok());
        let error = results[2].as_ref().expect_err("third line is not a number");
        assert_eq!(error.line_index(), 2);
        assert_eq!(error.to_string(), "failure parsing line 3");
    }

    #[test]
    fn offset_shifts_line_indexes() -> DynamicResult<()> {
        let indexes: Vec<usize> = parse_lines_with_offset("a\nb", 10, |index, _| {
            Ok::<_, DynamicError>(index)
        })
        .collect::<Result<_, _>>()?;
        assert_eq!(indexes, vec![10, 11]);
        Ok(())
    }

    #[test]
    fn blocks_skip_repeated_blank_lines_and_carriage_returns() {
        let blocks: Vec<_> = split_blocks("\r\nx\r\ny\r\n  \r\n\r\nz").collect();
        assert_eq!(
            blocks,
            vec![
                InputBlock {
                    line_offset: 1,
                    text: "x\r\ny",
                },
                InputBlock {
                    line_offset: 5,
                    text: "z",
                },
            ]
        );
    }

    #[test]
    fn two_sections_require_a_body() {
        let error = split_two_sections("header only\n", "header", "body")
            .expect_err("body block is missing");
        assert_eq!(error.to_string(), "expected a block for body, but input ended");
    }
}
