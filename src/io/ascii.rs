//! Textual grid format.
//!
//! A pattern is a header line `<width> <height>\n` followed by `height`
//! lines of exactly `width` characters each, terminated by `\n`. A space is
//! a dead cell and `#` is a live cell.

use thiserror::Error;

use crate::cell::Cell;
use crate::grid::Grid;

/// Result type returned by fallible ascii routines.
pub type AsciiResult<T> = Result<T, AsciiError>;

/// Error encountered during ascii import.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum AsciiError {
    #[error("missing or malformed size header")]
    BadHeader,
    #[error("grid dimensions {width}x{height} are too large")]
    TooBig { width: usize, height: usize },
    #[error("unexpected cell character {0:?}")]
    UnexpectedChar(char),
    #[error("row {0} is not terminated by a newline where expected")]
    MissingNewline(usize),
    #[error("pattern ended unexpectedly")]
    UnexpectedEof,
    #[error("pattern is not valid UTF-8")]
    NotUtf8,
}

/// Encodes a grid to the ascii pattern format.
pub fn encode(grid: &Grid) -> String {
    let mut ret = format!("{} {}\n", grid.width(), grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            ret.push(grid[(x, y)].to_char());
        }
        ret.push('\n');
    }
    ret
}

/// Decodes a grid from the ascii pattern format.
pub fn decode(s: &str) -> AsciiResult<Grid> {
    let (header, rest) = s.split_once('\n').ok_or(AsciiError::BadHeader)?;
    let mut parts = header.split_whitespace();
    let width: usize = parts
        .next()
        .and_then(|part| part.parse().ok())
        .ok_or(AsciiError::BadHeader)?;
    let height: usize = parts
        .next()
        .and_then(|part| part.parse().ok())
        .ok_or(AsciiError::BadHeader)?;
    if parts.next().is_some() {
        return Err(AsciiError::BadHeader);
    }
    if width.checked_mul(height).is_none() {
        return Err(AsciiError::TooBig { width, height });
    }

    let mut grid = Grid::new(width, height);
    let mut chars = rest.chars();
    for y in 0..height {
        for x in 0..width {
            let ch = chars.next().ok_or(AsciiError::UnexpectedEof)?;
            let cell = Cell::from_char(ch).ok_or(AsciiError::UnexpectedChar(ch))?;
            grid[(x, y)] = cell;
        }
        match chars.next() {
            Some('\n') => (),
            Some(_) => return Err(AsciiError::MissingNewline(y)),
            None => return Err(AsciiError::UnexpectedEof),
        }
    }
    Ok(grid)
}
