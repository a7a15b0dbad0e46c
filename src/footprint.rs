//! Physical extents of walls and pawns, used for placement overlap checks.
//!
//! Coordinates are integers in twentieths of a cell, with the centre of cell
//! `(col, row)` at `(20*col, 20*row)`. A wall is 0.9 cells long and half a
//! cell thick, centred on the edge it blocks, so two walls that block
//! different edges still collide when they meet at a shared corner at right
//! angles. Collinear neighbors do not touch. A pawn is half a cell square, so
//! its edge lies exactly on the edge of any wall beside it: pawns and walls
//! touch but never overlap.

use crate::board::{Cell, Orientation, Wall};

pub const UNITS_PER_CELL: i32 = 20;
const WALL_HALF_LENGTH: i32 = 9;
const WALL_HALF_THICKNESS: i32 = 5;
const PAWN_HALF_EXTENT: i32 = 5;

/// Axis-aligned rectangle given by centre and half extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    pub cx: i32,
    pub cy: i32,
    pub half_w: i32,
    pub half_h: i32,
}

impl Footprint {
    pub fn of_wall(wall: &Wall) -> Self {
        let x = wall.anchor.col as i32 * UNITS_PER_CELL;
        let y = wall.anchor.row as i32 * UNITS_PER_CELL;
        let half = UNITS_PER_CELL / 2;
        match wall.orientation {
            Orientation::Horizontal => Self {
                cx: x,
                cy: y + half,
                half_w: WALL_HALF_LENGTH,
                half_h: WALL_HALF_THICKNESS,
            },
            Orientation::Vertical => Self {
                cx: x + half,
                cy: y,
                half_w: WALL_HALF_THICKNESS,
                half_h: WALL_HALF_LENGTH,
            },
        }
    }

    pub fn of_pawn(cell: Cell) -> Self {
        Self {
            cx: cell.col as i32 * UNITS_PER_CELL,
            cy: cell.row as i32 * UNITS_PER_CELL,
            half_w: PAWN_HALF_EXTENT,
            half_h: PAWN_HALF_EXTENT,
        }
    }

    /// The playing surface of an `n x n` board.
    pub fn of_board(board_size: u8) -> Self {
        let centre = (board_size as i32 - 1) * UNITS_PER_CELL / 2;
        let half = board_size as i32 * UNITS_PER_CELL / 2;
        Self {
            cx: centre,
            cy: centre,
            half_w: half,
            half_h: half,
        }
    }

    /// Strict overlap: rectangles that only share a boundary do not overlap.
    pub fn overlaps(&self, other: &Footprint) -> bool {
        (self.cx - other.cx).abs() < self.half_w + other.half_w
            && (self.cy - other.cy).abs() < self.half_h + other.half_h
    }

    pub fn contains(&self, other: &Footprint) -> bool {
        other.cx - other.half_w >= self.cx - self.half_w
            && other.cx + other.half_w <= self.cx + self.half_w
            && other.cy - other.half_h >= self.cy - self.half_h
            && other.cy + other.half_h <= self.cy + self.half_h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_wall_overlaps_itself() {
        let w = Footprint::of_wall(&Wall::horizontal(3, 3));
        assert!(w.overlaps(&w));
    }

    #[test]
    fn test_collinear_neighbors_do_not_overlap() {
        let a = Footprint::of_wall(&Wall::horizontal(3, 3));
        let b = Footprint::of_wall(&Wall::horizontal(4, 3));
        assert!(!a.overlaps(&b));

        let c = Footprint::of_wall(&Wall::vertical(3, 3));
        let d = Footprint::of_wall(&Wall::vertical(3, 4));
        assert!(!c.overlaps(&d));
    }

    #[test]
    fn test_parallel_neighbors_do_not_overlap() {
        let a = Footprint::of_wall(&Wall::horizontal(3, 3));
        let b = Footprint::of_wall(&Wall::horizontal(3, 4));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_perpendicular_walls_at_shared_corner_overlap() {
        // Horizontal (3,3) ends at the corner shared by cells (3,3),(4,3),(3,4),(4,4).
        let h = Footprint::of_wall(&Wall::horizontal(3, 3));
        for v in [
            Wall::vertical(3, 3),
            Wall::vertical(3, 4),
            Wall::vertical(2, 3),
            Wall::vertical(2, 4),
        ] {
            assert!(h.overlaps(&Footprint::of_wall(&v)), "expected overlap with {v}");
        }
        assert!(!h.overlaps(&Footprint::of_wall(&Wall::vertical(4, 3))));
    }

    #[test]
    fn test_pawn_does_not_touch_adjacent_wall() {
        let pawn = Footprint::of_pawn(Cell::new(3, 3));
        assert!(!pawn.overlaps(&Footprint::of_wall(&Wall::horizontal(3, 3))));
        assert!(!pawn.overlaps(&Footprint::of_wall(&Wall::vertical(2, 3))));
    }

    #[test]
    fn test_no_wall_overlaps_any_pawn() {
        for wall in Wall::all(5) {
            let footprint = Footprint::of_wall(&wall);
            for col in 0..5 {
                for row in 0..5 {
                    let pawn = Footprint::of_pawn(Cell::new(col, row));
                    assert!(!pawn.overlaps(&footprint), "{wall} overlaps pawn at ({col}, {row})");
                }
            }
        }
    }

    #[test]
    fn test_board_contains_interior_walls_only() {
        let board = Footprint::of_board(9);
        assert!(board.contains(&Footprint::of_wall(&Wall::horizontal(0, 0))));
        assert!(board.contains(&Footprint::of_wall(&Wall::vertical(7, 8))));
        assert!(!board.contains(&Footprint::of_wall(&Wall::horizontal(0, 8))));
        assert!(!board.contains(&Footprint::of_wall(&Wall::vertical(8, 0))));
    }
}
