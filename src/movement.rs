//! Legal pawn destinations: ordinary steps, straight jumps and diagonal jumps.

use std::collections::BTreeSet;

use crate::board::{Cell, Direction, Pawn, WallSet};

/// Compute every cell `mover` may move to this turn.
///
/// For each open edge around the mover: an empty neighbor is an ordinary
/// step. If the opponent sits there, the cell behind it is a straight jump
/// when that edge is open. Only when the straight jump is blocked (by a wall
/// or the board edge) are the cells beside the opponent offered as diagonal
/// jumps, each side checked independently.
pub fn legal_destinations(mover: &Pawn, opponent: &Pawn, walls: &WallSet) -> BTreeSet<Cell> {
    let n = walls.board_size();
    let from = mover.position;
    let mut destinations = BTreeSet::new();

    for dir in Direction::ALL {
        if walls.is_blocked(from, dir) {
            continue;
        }
        let Some(next) = from.step(dir, n) else {
            continue;
        };

        if next != opponent.position {
            destinations.insert(next);
            continue;
        }

        if !walls.is_blocked(next, dir) {
            if let Some(beyond) = next.step(dir, n) {
                destinations.insert(beyond);
            }
            continue;
        }

        for side in dir.perpendicular() {
            if walls.is_blocked(next, side) {
                continue;
            }
            if let Some(diagonal) = next.step(side, n) {
                destinations.insert(diagonal);
            }
        }
    }

    destinations
}

/// Ordinary one-cell steps only, in `Direction::ALL` order. Jumps are left out.
pub fn step_destinations(mover: &Pawn, opponent: &Pawn, walls: &WallSet) -> Vec<(Direction, Cell)> {
    let n = walls.board_size();
    Direction::ALL
        .into_iter()
        .filter(|&dir| !walls.is_blocked(mover.position, dir))
        .filter_map(|dir| mover.position.step(dir, n).map(|cell| (dir, cell)))
        .filter(|&(_, cell)| cell != opponent.position)
        .collect()
}

/// Translate a direction intent into a target cell.
///
/// An empty neighbor resolves to itself; an occupied neighbor resolves to the
/// straight jump behind it. Blocked edges and blocked straight jumps resolve
/// to `None`, because a diagonal jump needs an explicit target.
pub fn resolve_direction(
    mover: &Pawn,
    opponent: &Pawn,
    walls: &WallSet,
    dir: Direction,
) -> Option<Cell> {
    let n = walls.board_size();
    if walls.is_blocked(mover.position, dir) {
        return None;
    }
    let next = mover.position.step(dir, n)?;
    if next != opponent.position {
        return Some(next);
    }
    if walls.is_blocked(next, dir) {
        return None;
    }
    next.step(dir, n)
}
