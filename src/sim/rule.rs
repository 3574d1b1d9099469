//! The standard birth/survival rule (B3/S23).
//!
//! This crate simulates only Conway's Game of Life, so the rule is fixed
//! data rather than a pluggable trait: a dead cell becomes alive iff it has
//! exactly 3 live neighbors, and a live cell stays alive iff it has 2 or 3.

use crate::cell::Cell;

/// Bitmask of neighbor counts that cause a dead cell to become alive.
pub const BIRTH: u16 = 1 << 3;
/// Bitmask of neighbor counts that let a live cell survive.
pub const SURVIVAL: u16 = (1 << 2) | (1 << 3);

/// Applies the rule to a single cell, returning its state in the next
/// generation given the number of live cells among its 8 Moore-neighborhood
/// neighbors.
#[inline]
pub fn transition(cell: Cell, live_neighbors: usize) -> Cell {
    let mask = match cell {
        Cell::Alive => SURVIVAL,
        Cell::Dead => BIRTH,
    };
    Cell::from(mask & (1 << live_neighbors) != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_transition_table() {
        for live_neighbors in 0..=8 {
            let expected_alive = matches!(live_neighbors, 2 | 3);
            assert_eq!(
                Cell::from(expected_alive),
                transition(Cell::Alive, live_neighbors),
            );
            let expected_dead = live_neighbors == 3;
            assert_eq!(
                Cell::from(expected_dead),
                transition(Cell::Dead, live_neighbors),
            );
        }
    }
}
