//! Preset Game of Life creatures.
//!
//! Each constructor returns a grid the size of the creature's bounding box.
//! Creatures are placed onto a larger canvas with [`Grid::merge()`], usually
//! with `alive_only` set so several creatures can share one canvas.

use crate::cell::Cell;
use crate::grid::Grid;

/// Builds a grid from rows of ascii art, `#` for live cells.
fn from_rows(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    let mut grid = Grid::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            grid[(x, y)] = Cell::from(ch == '#');
        }
    }
    grid
}

/// Constructs a 3x3 grid containing a
/// [glider](https://www.conwaylife.com/wiki/Glider).
pub fn glider() -> Grid {
    from_rows(&[
        " # ", //
        "  #", //
        "###",
    ])
}

/// Constructs a 3x3 grid containing an
/// [r-pentomino](https://www.conwaylife.com/wiki/R-pentomino).
pub fn r_pentomino() -> Grid {
    from_rows(&[
        " ##", //
        "## ", //
        " # ",
    ])
}

/// Constructs a 5x4 grid containing a
/// [lightweight spaceship](https://www.conwaylife.com/wiki/Lightweight_spaceship).
pub fn light_weight_spaceship() -> Grid {
    from_rows(&[
        " #  #", //
        "#    ", //
        "#   #", //
        "#### ",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoo_glider() {
        let grid = glider();
        assert_eq!((3, 3), (grid.width(), grid.height()));
        assert_eq!(5, grid.alive_cells());
        assert_eq!("+---+\n| # |\n|  #|\n|###|\n+---+\n", grid.to_string());
    }

    #[test]
    fn test_zoo_r_pentomino() {
        let grid = r_pentomino();
        assert_eq!((3, 3), (grid.width(), grid.height()));
        assert_eq!(5, grid.alive_cells());
        assert_eq!("+---+\n| ##|\n|## |\n| # |\n+---+\n", grid.to_string());
    }

    #[test]
    fn test_zoo_light_weight_spaceship() {
        let grid = light_weight_spaceship();
        assert_eq!((5, 4), (grid.width(), grid.height()));
        assert_eq!(9, grid.alive_cells());
        assert_eq!(
            "+-----+\n| #  #|\n|#    |\n|#   #|\n|#### |\n+-----+\n",
            grid.to_string(),
        );
    }
}
