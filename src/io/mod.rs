//! Flat-file formats for exporting/importing grids.

use log::debug;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod ascii;
pub mod binary;

use crate::grid::Grid;
pub use ascii::{AsciiError, AsciiResult};
pub use binary::{BinaryError, BinaryResult};

/// Format that a grid can be exported to or imported from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PatternFormat {
    /// Textual format: a size header line followed by one line of cell
    /// characters per row (conventionally `.gol` files).
    Ascii,
    /// Packed-bit binary format (conventionally `.bgol` files).
    Binary,
}
impl PatternFormat {
    /// Guesses the format from a path's file extension, returning `None` for
    /// unrecognized extensions.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "gol" => Some(Self::Ascii),
            "bgol" => Some(Self::Binary),
            _ => None,
        }
    }
}
impl fmt::Display for PatternFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternFormat::Ascii => write!(f, "ascii"),
            PatternFormat::Binary => write!(f, "binary"),
        }
    }
}

/// Error produced during grid export/import.
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("ascii pattern error: {0}")]
    Ascii(#[from] AsciiError),
    #[error("binary pattern error: {0}")]
    Binary(#[from] BinaryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot guess pattern format from file extension")]
    UnknownFormat,
}

/// Exports a grid to bytes using a particular format.
pub fn export_grid_to_bytes(grid: &Grid, format: PatternFormat) -> Result<Vec<u8>, PatternError> {
    match format {
        PatternFormat::Ascii => Ok(ascii::encode(grid).into_bytes()),
        PatternFormat::Binary => Ok(binary::encode(grid)?),
    }
}
/// Imports a grid from bytes using a particular format.
pub fn import_grid_from_bytes(bytes: &[u8], format: PatternFormat) -> Result<Grid, PatternError> {
    match format {
        PatternFormat::Ascii => {
            let s = std::str::from_utf8(bytes).map_err(|_| AsciiError::NotUtf8)?;
            Ok(ascii::decode(s)?)
        }
        PatternFormat::Binary => Ok(binary::decode(bytes)?),
    }
}

/// Loads a grid from a file, guessing the format from the file extension
/// (`.gol` is ascii, `.bgol` is binary).
pub fn load_grid_from_file(path: impl AsRef<Path>) -> Result<Grid, PatternError> {
    let path = path.as_ref();
    let format = PatternFormat::from_extension(path).ok_or(PatternError::UnknownFormat)?;
    let bytes = fs::read(path)?;
    let grid = import_grid_from_bytes(&bytes, format)?;
    debug!(
        "loaded {}x{} grid from {} ({} format)",
        grid.width(),
        grid.height(),
        path.display(),
        format,
    );
    Ok(grid)
}

/// Saves a grid to a file, guessing the format from the file extension
/// (`.gol` is ascii, `.bgol` is binary).
pub fn save_grid_to_file(path: impl AsRef<Path>, grid: &Grid) -> Result<(), PatternError> {
    let path = path.as_ref();
    let format = PatternFormat::from_extension(path).ok_or(PatternError::UnknownFormat)?;
    fs::write(path, export_grid_to_bytes(grid, format)?)?;
    debug!(
        "saved {}x{} grid to {} ({} format)",
        grid.width(),
        grid.height(),
        path.display(),
        format,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            Some(PatternFormat::Ascii),
            PatternFormat::from_extension(Path::new("creatures/glider.gol")),
        );
        assert_eq!(
            Some(PatternFormat::Binary),
            PatternFormat::from_extension(Path::new("creatures/glider.bgol")),
        );
        assert_eq!(None, PatternFormat::from_extension(Path::new("glider.txt")));
        assert_eq!(None, PatternFormat::from_extension(Path::new("glider")));
    }

    #[test]
    fn test_bytes_round_trip_both_formats() {
        let mut grid = Grid::new(5, 4);
        grid[(1, 0)] = crate::cell::Cell::Alive;
        grid[(4, 3)] = crate::cell::Cell::Alive;
        for &format in &[PatternFormat::Ascii, PatternFormat::Binary] {
            let bytes = export_grid_to_bytes(&grid, format).unwrap();
            assert_eq!(grid, import_grid_from_bytes(&bytes, format).unwrap());
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join("lifegrid-io-tests");
        fs::create_dir_all(&dir).unwrap();

        let mut grid = Grid::new(3, 3);
        grid[(1, 1)] = crate::cell::Cell::Alive;

        for name in &["pattern.gol", "pattern.bgol"] {
            let path = dir.join(name);
            save_grid_to_file(&path, &grid).unwrap();
            assert_eq!(grid, load_grid_from_file(&path).unwrap());
        }

        assert!(matches!(
            save_grid_to_file(dir.join("pattern.png"), &grid),
            Err(PatternError::UnknownFormat),
        ));
        assert!(matches!(
            load_grid_from_file(dir.join("missing.gol")),
            Err(PatternError::Io(_)),
        ));
    }
}
