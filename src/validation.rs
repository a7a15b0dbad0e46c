use crate::board::{Board, Wall};
use crate::footprint::Footprint;
use crate::grid::{set_wall_cells, CELL_WALL};
use crate::pathfinding::distance_to_row;

/// Check that a wall fits on the board and collides with nothing.
///
/// The wall footprint must lie inside the board and must not overlap any
/// placed wall. Footprints are wider than a bare edge, so perpendicular walls
/// meeting at a corner are rejected. With walls centred on edges a wall only
/// ever touches a pawn's footprint, so the pawn check never rejects; it stays
/// as a guard should the extents change.
pub fn is_wall_geometry_free(candidate: &Wall, board: &Board) -> bool {
    if !candidate.is_within(board.size()) {
        return false;
    }

    let footprint = Footprint::of_wall(candidate);
    if !Footprint::of_board(board.size()).contains(&footprint) {
        return false;
    }

    if board
        .walls()
        .iter()
        .any(|placed| Footprint::of_wall(placed).overlaps(&footprint))
    {
        return false;
    }

    !board
        .pawns()
        .iter()
        .any(|pawn| Footprint::of_pawn(pawn.position).overlaps(&footprint))
}

/// Check that both pawns could still reach their goal rows with the wall in
/// place. The board is not modified.
pub fn keeps_goals_reachable(candidate: &Wall, board: &Board) -> bool {
    if !candidate.is_within(board.size()) {
        return false;
    }

    // Copy the lattice and place the wall on the copy
    let mut grid = board.walls().grid().to_owned();
    set_wall_cells(&mut grid.view_mut(), candidate, CELL_WALL);

    board
        .pawns()
        .iter()
        .all(|pawn| distance_to_row(&grid.view(), pawn.position, pawn.goal_row).is_some())
}

/// Validate whether a wall placement is legal: geometrically free and
/// leaving every pawn a path to its goal row.
pub fn is_wall_legal(candidate: &Wall, board: &Board) -> bool {
    is_wall_geometry_free(candidate, board) && keeps_goals_reachable(candidate, board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, PlayerId};

    #[test]
    fn test_is_wall_legal_simple() {
        let board = Board::new(9, 10);
        assert!(is_wall_legal(&Wall::vertical(0, 0), &board));
        assert!(is_wall_legal(&Wall::horizontal(4, 0), &board));
    }

    #[test]
    fn test_out_of_bounds_wall_rejected() {
        let board = Board::new(9, 10);
        assert!(!is_wall_legal(&Wall::horizontal(4, 8), &board));
        assert!(!is_wall_legal(&Wall::vertical(8, 4), &board));
        assert!(!is_wall_legal(&Wall::vertical(9, 4), &board));
    }

    #[test]
    fn test_duplicate_wall_rejected() {
        let board = Board::with_position(
            9,
            10,
            Cell::new(4, 0),
            Cell::new(4, 8),
            &[Wall::horizontal(2, 2)],
        );
        assert!(!is_wall_geometry_free(&Wall::horizontal(2, 2), &board));
    }

    #[test]
    fn test_edge_disjoint_walls_can_still_collide() {
        let board = Board::with_position(
            9,
            10,
            Cell::new(4, 0),
            Cell::new(4, 8),
            &[Wall::horizontal(2, 2)],
        );
        // Blocks a different edge but crosses at the shared corner.
        let crossing = Wall::vertical(2, 2);
        assert!(keeps_goals_reachable(&crossing, &board));
        assert!(!is_wall_geometry_free(&crossing, &board));
        assert!(!is_wall_legal(&crossing, &board));

        // Continuing the same line is fine.
        assert!(is_wall_legal(&Wall::horizontal(3, 2), &board));
    }

    #[test]
    fn test_wall_sealing_goal_rejected() {
        // 3x3 board: two of the three edges between rows 1 and 2 are walled.
        let board = Board::with_position(
            3,
            10,
            Cell::new(1, 0),
            Cell::new(1, 2),
            &[Wall::horizontal(0, 1), Wall::horizontal(1, 1)],
        );
        let sealing = Wall::horizontal(2, 1);
        assert!(is_wall_geometry_free(&sealing, &board));
        assert!(!keeps_goals_reachable(&sealing, &board));
        assert!(!is_wall_legal(&sealing, &board));
        // Nothing was placed.
        assert_eq!(board.walls().len(), 2);
    }

    #[test]
    fn test_wall_cutting_off_one_player_rejected() {
        // Both pawns sit below a nearly complete line between rows 0 and 1.
        // Player 1 still reaches row 2, Player 2 would lose row 0.
        let board = Board::with_position(
            3,
            10,
            Cell::new(2, 1),
            Cell::new(0, 1),
            &[Wall::horizontal(0, 0), Wall::horizontal(1, 0)],
        );
        let lid = Wall::horizontal(2, 0);
        assert!(is_wall_geometry_free(&lid, &board));
        assert!(!keeps_goals_reachable(&lid, &board));
        assert_eq!(board.pawn(PlayerId::Player2).goal_row, 0);
    }

    #[test]
    fn test_two_walls_cannot_box_a_corner() {
        let board = Board::with_position(
            3,
            10,
            Cell::new(2, 0),
            Cell::new(0, 2),
            &[Wall::vertical(0, 2)],
        );
        // The lid meets the placed wall at a right angle and collides with it.
        assert!(!is_wall_geometry_free(&Wall::horizontal(0, 1), &board));
    }
}
