//! Blocked-edge lattice backing a [`WallSet`](crate::board::WallSet).
//!
//! A board of `n` cells per side is stored as a `(2n+1) x (2n+1)` array.
//! Cell `(col, row)` lives at `[[2*row + 1, 2*col + 1]]`, the edge between
//! two neighboring cells lives at the index between them, and the outer ring
//! is pre-marked as wall so the board edge blocks movement exactly like a
//! placed wall does.

use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use crate::board::{Cell, Direction, Orientation, Wall};

pub const CELL_FREE: i8 = -1;
pub const CELL_WALL: i8 = 10;

/// Largest board the fixed-size pathfinding buffers are sized for.
pub const MAX_BOARD_SIZE: u8 = 11;

/// Grid index of a board cell.
#[inline]
pub fn cell_index(cell: Cell) -> (usize, usize) {
    (cell.row as usize * 2 + 1, cell.col as usize * 2 + 1)
}

/// Board size encoded by a lattice of the given shape.
#[inline]
pub fn board_size_of(grid: &ArrayView2<i8>) -> u8 {
    ((grid.nrows() - 1) / 2) as u8
}

/// Create an empty lattice with only the border ring marked as wall.
pub fn create_grid(board_size: u8) -> Array2<i8> {
    let width = board_size as usize * 2 + 1;
    let mut grid = Array2::<i8>::from_elem((width, width), CELL_FREE);
    for k in 0..width {
        grid[[0, k]] = CELL_WALL;
        grid[[width - 1, k]] = CELL_WALL;
        grid[[k, 0]] = CELL_WALL;
        grid[[k, width - 1]] = CELL_WALL;
    }
    grid
}

/// Grid index of the edge leaving `cell` in direction `dir`.
///
/// Always inside the lattice for an on-board cell because of the border ring.
#[inline]
pub fn edge_index(cell: Cell, dir: Direction) -> (usize, usize) {
    let (i, j) = cell_index(cell);
    match dir {
        Direction::Down => (i + 1, j),
        Direction::Up => (i - 1, j),
        Direction::Right => (i, j + 1),
        Direction::Left => (i, j - 1),
    }
}

/// Check whether the edge leaving `cell` in direction `dir` is blocked by a
/// wall or by the board edge.
pub fn is_edge_blocked(grid: &ArrayView2<i8>, cell: Cell, dir: Direction) -> bool {
    let n = board_size_of(grid);
    if cell.col >= n || cell.row >= n {
        return true;
    }
    grid[edge_index(cell, dir)] == CELL_WALL
}

/// Grid index of the edge a wall blocks.
#[inline]
pub fn wall_index(wall: &Wall) -> (usize, usize) {
    match wall.orientation {
        Orientation::Horizontal => edge_index(wall.anchor, Direction::Down),
        Orientation::Vertical => edge_index(wall.anchor, Direction::Right),
    }
}

/// Set the grid cell of the edge blocked by `wall` to the given value.
///
/// The wall must lie inside the board; border cells are never overwritten.
pub fn set_wall_cells(grid: &mut ArrayViewMut2<i8>, wall: &Wall, cell_value: i8) {
    let n = board_size_of(&grid.view());
    assert!(wall.is_within(n), "wall {wall} is outside a {n}x{n} board");
    grid[wall_index(wall)] = cell_value;
}
