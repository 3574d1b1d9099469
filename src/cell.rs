//! The two-state cell type.

use std::fmt;

/// Character representing a dead cell, both in the ascii pattern format and
/// in grid rendering.
pub const DEAD_CHAR: char = ' ';
/// Character representing a live cell, both in the ascii pattern format and
/// in grid rendering.
pub const ALIVE_CHAR: char = '#';

/// Single cell in a Game of Life grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Dead cell.
    Dead,
    /// Live cell.
    Alive,
}
impl Default for Cell {
    fn default() -> Self {
        Self::Dead
    }
}

impl Cell {
    /// Returns `true` if the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    /// Returns the character representing this cell in the ascii pattern
    /// format.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Self::Dead => DEAD_CHAR,
            Self::Alive => ALIVE_CHAR,
        }
    }
    /// Returns the cell represented by a character in the ascii pattern
    /// format, or `None` for any other character.
    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            DEAD_CHAR => Some(Self::Dead),
            ALIVE_CHAR => Some(Self::Alive),
            _ => None,
        }
    }

    /// Returns the bit representing this cell in the binary pattern format.
    #[inline]
    pub fn to_bit(self) -> u8 {
        match self {
            Self::Dead => 0,
            Self::Alive => 1,
        }
    }
    /// Returns the cell represented by a bit in the binary pattern format.
    /// Any nonzero value is alive.
    #[inline]
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            Self::Dead
        } else {
            Self::Alive
        }
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}
impl From<Cell> for bool {
    #[inline]
    fn from(cell: Cell) -> bool {
        cell.is_alive()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
