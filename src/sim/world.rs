//! Double-buffered simulation of a grid world.

use log::trace;
use std::mem;

use super::rule;
use crate::error::{GridResult, LifeError};
use crate::grid::Grid;

/// Relative positions of the 8 Moore-neighborhood neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Simulator that owns the current and the next generation of a grid.
///
/// [`World::step()`] reads every cell of the current generation, writes the
/// next generation into the second buffer, and then exchanges the two, so
/// "current" always names the latest generation and no per-step allocation
/// occurs. The two grids have identical dimensions at all times.
#[derive(Debug, Default, Clone)]
pub struct World {
    current: Grid,
    next: Grid,
}

impl World {
    /// Creates an all-dead world with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_grid(Grid::new(width, height))
    }
    /// Creates an all-dead square world.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }
    /// Creates a world whose current generation is `initial_state`. The
    /// scratch buffer is sized identically.
    pub fn from_grid(initial_state: Grid) -> Self {
        let next = Grid::new(initial_state.width(), initial_state.height());
        Self {
            current: initial_state,
            next,
        }
    }

    /// Returns the width of the world.
    #[inline]
    pub fn width(&self) -> usize {
        self.current.width()
    }
    /// Returns the height of the world.
    #[inline]
    pub fn height(&self) -> usize {
        self.current.height()
    }
    /// Returns the total number of cells in the world.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.current.total_cells()
    }
    /// Returns the number of live cells in the current generation.
    pub fn alive_cells(&self) -> usize {
        self.current.alive_cells()
    }
    /// Returns the number of dead cells in the current generation.
    pub fn dead_cells(&self) -> usize {
        self.current.dead_cells()
    }

    /// Returns a copy of the current generation.
    pub fn get_state(&self) -> Grid {
        self.current.clone()
    }

    /// Replaces the current generation with `grid`.
    ///
    /// Returns [`LifeError::DimensionMismatch`] if the grid's dimensions
    /// differ from the world's; call [`World::resize()`] first.
    pub fn set_state(&mut self, grid: Grid) -> GridResult<()> {
        if (grid.width(), grid.height()) != (self.width(), self.height()) {
            return Err(LifeError::DimensionMismatch {
                expected_width: self.width(),
                expected_height: self.height(),
                width: grid.width(),
                height: grid.height(),
            });
        }
        self.current = grid;
        Ok(())
    }

    /// Resizes the world to a square, resetting every cell to dead.
    pub fn resize_square(&mut self, size: usize) {
        self.resize(size, size);
    }
    /// Resizes the world, resetting every cell to dead and discarding all
    /// simulation history. Both buffers are resized together, so their
    /// dimensions never disagree.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.current.resize(width, height);
        self.next.resize(width, height);
    }

    /// Advances the world by one generation.
    ///
    /// In bounded mode (`toroidal == false`) neighbors beyond the grid edges
    /// do not exist and do not count, so edge and corner cells consider
    /// fewer than 8 neighbors. In toroidal mode coordinates wrap modulo
    /// width/height and every cell has exactly 8 neighbors.
    pub fn step(&mut self, toroidal: bool) {
        assert_eq!(
            (self.current.width(), self.current.height()),
            (self.next.width(), self.next.height()),
            "World's current and next grids must be the same size",
        );
        for y in 0..self.current.height() {
            for x in 0..self.current.width() {
                let live = count_neighbors(&self.current, x, y, toroidal);
                self.next[(x, y)] = rule::transition(self.current[(x, y)], live);
            }
        }
        mem::swap(&mut self.current, &mut self.next);
    }

    /// Advances the world by exactly `steps` generations; 0 is a no-op.
    pub fn advance(&mut self, steps: usize, toroidal: bool) {
        for _ in 0..steps {
            self.step(toroidal);
        }
        trace!(
            "advanced {}x{} world by {} generations ({} live cells)",
            self.width(),
            self.height(),
            steps,
            self.alive_cells(),
        );
    }
}

/// Counts the live cells among the 8 Moore-neighborhood neighbors of `(x,
/// y)`, either ignoring out-of-bounds neighbors or wrapping them around the
/// opposite edge.
fn count_neighbors(grid: &Grid, x: usize, y: usize, toroidal: bool) -> usize {
    let (width, height) = (grid.width() as isize, grid.height() as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            let (mut nx, mut ny) = (x as isize + dx, y as isize + dy);
            if toroidal {
                nx = nx.rem_euclid(width);
                ny = ny.rem_euclid(height);
            } else if nx < 0 || ny < 0 || nx >= width || ny >= height {
                return false;
            }
            grid[(nx as usize, ny as usize)].is_alive()
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    /// 2x2 block of live cells with its top-left corner at `(x, y)`.
    fn block_at(grid: &mut Grid, x: usize, y: usize) {
        for &(dx, dy) in &[(0, 0), (1, 0), (0, 1), (1, 1)] {
            grid[(x + dx, y + dy)] = Cell::Alive;
        }
    }

    #[test]
    fn test_world_dimensions_track_grids() {
        let mut world = World::square(5);
        assert_eq!((5, 5), (world.width(), world.height()));
        assert_eq!(25, world.total_cells());
        world.resize(3, 7);
        assert_eq!((3, 7), (world.width(), world.height()));
        assert_eq!(0, world.alive_cells());
        assert_eq!(21, world.dead_cells());
    }

    #[test]
    fn test_world_set_state_checks_dimensions() {
        let mut world = World::new(4, 4);
        assert_eq!(
            Err(LifeError::DimensionMismatch {
                expected_width: 4,
                expected_height: 4,
                width: 3,
                height: 4,
            }),
            world.set_state(Grid::new(3, 4)),
        );

        let mut grid = Grid::new(4, 4);
        grid[(2, 2)] = Cell::Alive;
        world.set_state(grid.clone()).unwrap();
        assert_eq!(grid, world.get_state());
    }

    #[test]
    fn test_count_neighbors_bounded() {
        let mut grid = Grid::new(3, 3);
        block_at(&mut grid, 0, 0);
        // Corner cell of the block: sees the other 3 block cells.
        assert_eq!(3, count_neighbors(&grid, 0, 0, false));
        // A cell below the block sees two of its cells.
        assert_eq!(2, count_neighbors(&grid, 1, 2, false));
        // Opposite corner: sees only the block's (1, 1).
        assert_eq!(1, count_neighbors(&grid, 2, 2, false));
    }

    #[test]
    fn test_count_neighbors_toroidal_wraps() {
        let mut grid = Grid::new(4, 4);
        grid[(0, 0)] = Cell::Alive;
        // Bounded: the far corner is not adjacent.
        assert_eq!(0, count_neighbors(&grid, 3, 3, false));
        // Toroidal: the grid's corners are mutually adjacent.
        assert_eq!(1, count_neighbors(&grid, 3, 3, true));
        assert_eq!(1, count_neighbors(&grid, 0, 3, true));
        assert_eq!(1, count_neighbors(&grid, 3, 0, true));
    }

    #[test]
    fn test_world_block_still_life() {
        let mut grid = Grid::new(4, 4);
        block_at(&mut grid, 1, 1);
        let mut world = World::from_grid(grid.clone());
        for _ in 0..5 {
            world.step(false);
            assert_eq!(grid, world.get_state());
        }
        for _ in 0..5 {
            world.step(true);
            assert_eq!(grid, world.get_state());
        }
    }

    #[test]
    fn test_world_empty_stays_empty() {
        let mut world = World::new(6, 4);
        world.advance(10, true);
        assert_eq!(0, world.alive_cells());
        world.advance(10, false);
        assert_eq!(0, world.alive_cells());
    }

    #[test]
    fn test_world_advance_zero_is_noop() {
        let mut grid = Grid::new(5, 5);
        grid[(2, 2)] = Cell::Alive;
        let mut world = World::from_grid(grid.clone());
        world.advance(0, false);
        assert_eq!(grid, world.get_state());
    }

    #[test]
    fn test_world_lone_cell_dies() {
        let mut grid = Grid::new(3, 3);
        grid[(1, 1)] = Cell::Alive;
        let mut world = World::from_grid(grid);
        world.step(false);
        assert_eq!(0, world.alive_cells());
    }

    #[test]
    fn test_world_blinker_oscillates() {
        let mut grid = Grid::new(5, 5);
        for x in 1..4 {
            grid[(x, 2)] = Cell::Alive;
        }
        let mut world = World::from_grid(grid.clone());

        world.step(false);
        let vertical = world.get_state();
        assert_eq!(3, vertical.alive_cells());
        for y in 1..4 {
            assert_eq!(Cell::Alive, vertical[(2, y)]);
        }

        world.step(false);
        assert_eq!(grid, world.get_state());
    }
}
