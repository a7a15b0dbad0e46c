use ndarray::ArrayView2;

use crate::board::{Cell, WallSet};
use crate::grid::{board_size_of, cell_index, CELL_WALL, MAX_BOARD_SIZE};

/// Calculate the shortest distance from a cell to a target row using BFS.
///
/// Avoids heap allocations by using fixed-size arrays for the visited set and
/// the BFS queue. Only walls are obstacles: pawn occupancy never blocks a
/// path because a pawn can always be passed with a jump.
///
/// # Arguments
/// * `grid` - Blocked-edge lattice (see [`crate::grid`])
/// * `start` - Starting cell
/// * `target_row` - Row to reach
///
/// # Returns
/// The minimum number of steps to reach the target row, or `None` if
/// unreachable or the board is larger than [`MAX_BOARD_SIZE`]
pub fn distance_to_row(grid: &ArrayView2<i8>, start: Cell, target_row: u8) -> Option<u32> {
    let board_size = board_size_of(grid);
    if board_size > MAX_BOARD_SIZE {
        return None;
    }
    if !start.is_within(board_size) || target_row >= board_size {
        return None;
    }

    let (start_i, start_j) = cell_index(start);
    let target_i = target_row as usize * 2 + 1;

    if start_i == target_i {
        return Some(0);
    }

    // Lattice for an 11x11 board is 23x23
    const MAX_GRID_SIZE: usize = 24;
    let mut visited = [[false; MAX_GRID_SIZE]; MAX_GRID_SIZE];
    visited[start_i][start_j] = true;

    // Each cell is enqueued at most once, 121 for an 11x11 board
    const MAX_QUEUE_SIZE: usize = 128;
    let mut queue_i = [0usize; MAX_QUEUE_SIZE];
    let mut queue_j = [0usize; MAX_QUEUE_SIZE];
    let mut queue_steps = [0u32; MAX_QUEUE_SIZE];
    let mut queue_head: usize = 0;
    let mut queue_tail: usize = 0;

    queue_i[queue_tail] = start_i;
    queue_j[queue_tail] = start_j;
    queue_steps[queue_tail] = 0;
    queue_tail = (queue_tail + 1) % MAX_QUEUE_SIZE;

    while queue_head != queue_tail {
        let i = queue_i[queue_head];
        let j = queue_j[queue_head];
        let steps = queue_steps[queue_head];
        queue_head = (queue_head + 1) % MAX_QUEUE_SIZE;

        // Down, up, right, left. The border ring is wall, so an open edge
        // always leads to a real cell.
        for (di, dj) in [(1isize, 0isize), (-1, 0), (0, 1), (0, -1)] {
            let wall_i = (i as isize + di) as usize;
            let wall_j = (j as isize + dj) as usize;
            if grid[[wall_i, wall_j]] == CELL_WALL {
                continue;
            }
            let new_i = (i as isize + 2 * di) as usize;
            let new_j = (j as isize + 2 * dj) as usize;
            if visited[new_i][new_j] {
                continue;
            }
            visited[new_i][new_j] = true;
            if new_i == target_i {
                return Some(steps + 1);
            }
            queue_i[queue_tail] = new_i;
            queue_j[queue_tail] = new_j;
            queue_steps[queue_tail] = steps + 1;
            queue_tail = (queue_tail + 1) % MAX_QUEUE_SIZE;
        }
    }

    // No path found
    None
}

/// Shortest number of steps from `from` to any cell of `goal_row`, given the
/// walls in `walls`.
pub fn shortest_distance(from: Cell, goal_row: u8, walls: &WallSet) -> Option<u32> {
    distance_to_row(&walls.grid(), from, goal_row)
}
