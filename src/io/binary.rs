//! Packed-bit binary grid format.
//!
//! A pattern is a 4-byte integer width and a 4-byte integer height in native
//! byte order, followed by `ceil(width * height / 8)` bytes of cells in
//! row-major order. Bits are packed least-significant first within each
//! byte; a 1 bit is a live cell. Trailing unused bits in the final byte are
//! zero on encode and ignored on decode.

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use std::convert::TryFrom;
use thiserror::Error;

use crate::cell::Cell;
use crate::grid::Grid;

/// Length of the width/height header, in bytes.
const HEADER_LEN: usize = 8;

/// Result type returned by fallible binary routines.
pub type BinaryResult<T> = Result<T, BinaryError>;

/// Error encountered during binary import/export.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum BinaryError {
    #[error("pattern ended unexpectedly")]
    UnexpectedEof,
    #[error("grid dimensions {width}x{height} do not fit the binary header")]
    TooBig { width: usize, height: usize },
}

/// Encodes a grid to the binary pattern format.
///
/// Returns [`BinaryError::TooBig`] if either dimension does not fit in the
/// 4-byte header integer.
pub fn encode(grid: &Grid) -> BinaryResult<Vec<u8>> {
    let too_big = || BinaryError::TooBig {
        width: grid.width(),
        height: grid.height(),
    };
    let width = u32::try_from(grid.width()).map_err(|_| too_big())?;
    let height = u32::try_from(grid.height()).map_err(|_| too_big())?;

    let mut ret = Vec::with_capacity(HEADER_LEN + (grid.total_cells() + 7) / 8);
    // Writes into a Vec cannot fail.
    ret.write_u32::<NativeEndian>(width).unwrap();
    ret.write_u32::<NativeEndian>(height).unwrap();

    let mut byte = 0_u8;
    let mut bit = 0;
    for (_, cell) in grid.iter_enumerated() {
        byte |= cell.to_bit() << bit;
        bit += 1;
        if bit == 8 {
            ret.push(byte);
            byte = 0;
            bit = 0;
        }
    }
    if bit > 0 {
        ret.push(byte);
    }
    Ok(ret)
}

/// Decodes a grid from the binary pattern format. Bytes beyond the packed
/// cell payload are ignored.
pub fn decode(mut bytes: &[u8]) -> BinaryResult<Grid> {
    let width = bytes
        .read_u32::<NativeEndian>()
        .map_err(|_| BinaryError::UnexpectedEof)? as usize;
    let height = bytes
        .read_u32::<NativeEndian>()
        .map_err(|_| BinaryError::UnexpectedEof)? as usize;
    let total = width
        .checked_mul(height)
        .ok_or(BinaryError::TooBig { width, height })?;
    if bytes.len() < (total + 7) / 8 {
        return Err(BinaryError::UnexpectedEof);
    }

    let cells = (0..total)
        .map(|idx| Cell::from_bit((bytes[idx / 8] >> (idx % 8)) & 1))
        .collect::<Vec<_>>();
    Ok(Grid::from_flat_slice(width, height, cells))
}
