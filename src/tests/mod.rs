//! Cross-module scenario tests.

use std::collections::HashSet;

use crate::grid::Grid;


/// Returns the set of live cell positions in a grid.
fn live_cell_set(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.iter_enumerated()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(pos, _)| pos)
        .collect()
}
