//! Board state: pawns, walls and the coordinate types they are built from.
//!
//! The board performs no rule checks. Callers validate moves with
//! [`crate::movement`] and walls with [`crate::validation`] before mutating.

use std::collections::BTreeSet;
use std::fmt;

use ndarray::{Array2, ArrayView2};

use crate::grid::{create_grid, is_edge_blocked, set_wall_cells, CELL_WALL};

/// A board position, `(col, row)` with both coordinates in `[0, n)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// The neighboring cell in `dir`, or `None` past the board edge.
    pub fn step(self, dir: Direction, board_size: u8) -> Option<Cell> {
        let (dc, dr) = dir.delta();
        self.offset(dc, dr, board_size)
    }

    /// The cell displaced by `(dc, dr)`, or `None` if it leaves the board.
    pub fn offset(self, dc: i16, dr: i16, board_size: u8) -> Option<Cell> {
        let col = self.col as i16 + dc;
        let row = self.row as i16 + dr;
        let n = board_size as i16;
        if (0..n).contains(&col) && (0..n).contains(&row) {
            Some(Cell::new(col as u8, row as u8))
        } else {
            None
        }
    }

    pub fn is_within(self, board_size: u8) -> bool {
        self.col < board_size && self.row < board_size
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Board-absolute step direction. `Down` increases the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// `(dcol, drow)` for one step.
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// The two directions at right angles to this one.
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Down | Direction::Up => [Direction::Left, Direction::Right],
            Direction::Right | Direction::Left => [Direction::Up, Direction::Down],
        }
    }
}

/// Direction as seen by a player sitting behind its own starting edge.
///
/// Player 2 faces Player 1, so its left and right are mirrored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelativeDirection {
    Forward,
    Back,
    Left,
    Right,
}

impl RelativeDirection {
    /// Tie-break order used when several steps are equally good.
    pub const PRIORITY: [RelativeDirection; 4] = [
        RelativeDirection::Forward,
        RelativeDirection::Back,
        RelativeDirection::Left,
        RelativeDirection::Right,
    ];

    pub fn resolve(self, player: PlayerId) -> Direction {
        let as_player1 = match self {
            RelativeDirection::Forward => Direction::Down,
            RelativeDirection::Back => Direction::Up,
            RelativeDirection::Left => Direction::Left,
            RelativeDirection::Right => Direction::Right,
        };
        match player {
            PlayerId::Player1 => as_player1,
            PlayerId::Player2 => as_player1.opposite(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// Lies along a row; blocks `anchor` from the cell below it.
    Horizontal,
    /// Lies along a column; blocks `anchor` from the cell to its right.
    Vertical,
}

/// A wall blocking the single edge between `anchor` and its neighbor below
/// (horizontal) or to the right (vertical).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wall {
    pub anchor: Cell,
    pub orientation: Orientation,
}

impl Wall {
    pub const fn new(anchor: Cell, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    pub const fn horizontal(col: u8, row: u8) -> Self {
        Self::new(Cell::new(col, row), Orientation::Horizontal)
    }

    pub const fn vertical(col: u8, row: u8) -> Self {
        Self::new(Cell::new(col, row), Orientation::Vertical)
    }

    /// The cell on the far side of the blocked edge.
    pub fn neighbor(&self, board_size: u8) -> Option<Cell> {
        let dir = match self.orientation {
            Orientation::Horizontal => Direction::Down,
            Orientation::Vertical => Direction::Right,
        };
        self.anchor.step(dir, board_size)
    }

    /// Whether the blocked edge is an interior edge of the board.
    pub fn is_within(&self, board_size: u8) -> bool {
        self.anchor.is_within(board_size) && self.neighbor(board_size).is_some()
    }

    /// Every wall position on an `n x n` board, in a fixed order.
    pub fn all(board_size: u8) -> impl Iterator<Item = Wall> {
        (0..board_size).flat_map(move |row| {
            (0..board_size).flat_map(move |col| {
                [Orientation::Horizontal, Orientation::Vertical]
                    .into_iter()
                    .map(move |o| Wall::new(Cell::new(col, row), o))
                    .filter(move |w| w.is_within(board_size))
            })
        })
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };
        write!(f, "{}{}", self.anchor, o)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::Player1, PlayerId::Player2];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }

    #[inline]
    pub const fn other(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pawn {
    pub id: PlayerId,
    pub position: Cell,
    pub walls_remaining: u8,
    pub goal_row: u8,
}

impl Pawn {
    pub fn has_reached_goal(&self) -> bool {
        self.position.row == self.goal_row
    }
}

/// The walls placed so far, plus the blocked-edge lattice derived from them.
#[derive(Clone, Debug)]
pub struct WallSet {
    board_size: u8,
    walls: BTreeSet<Wall>,
    grid: Array2<i8>,
}

impl WallSet {
    pub fn new(board_size: u8) -> Self {
        Self {
            board_size,
            walls: BTreeSet::new(),
            grid: create_grid(board_size),
        }
    }

    /// Build a wall set from a list of walls. Off-board walls are dropped.
    pub fn from_walls<I: IntoIterator<Item = Wall>>(board_size: u8, walls: I) -> Self {
        let mut set = Self::new(board_size);
        for wall in walls {
            set.insert(wall);
        }
        set
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn contains(&self, wall: &Wall) -> bool {
        self.walls.contains(wall)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }

    /// Add a wall without any legality check. Returns `false` if the wall is
    /// off the board or already present.
    pub fn insert(&mut self, wall: Wall) -> bool {
        if !wall.is_within(self.board_size) || !self.walls.insert(wall) {
            return false;
        }
        set_wall_cells(&mut self.grid.view_mut(), &wall, CELL_WALL);
        true
    }

    pub fn grid(&self) -> ArrayView2<'_, i8> {
        self.grid.view()
    }

    /// Whether the edge leaving `cell` towards `dir` is blocked by a wall or
    /// the board edge.
    pub fn is_blocked(&self, cell: Cell, dir: Direction) -> bool {
        is_edge_blocked(&self.grid.view(), cell, dir)
    }
}

impl PartialEq for WallSet {
    fn eq(&self, other: &Self) -> bool {
        self.board_size == other.board_size && self.walls == other.walls
    }
}

impl Eq for WallSet {}

/// Authoritative match position: both pawns and every wall placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    pawns: [Pawn; 2],
    walls: WallSet,
}

impl Board {
    /// Fresh board: pawns at the middle of opposite edges, full wall stock.
    pub fn new(size: u8, max_walls: u8) -> Self {
        let mid = size / 2;
        let last = size.saturating_sub(1);
        let pawns = [
            Pawn {
                id: PlayerId::Player1,
                position: Cell::new(mid, 0),
                walls_remaining: max_walls,
                goal_row: last,
            },
            Pawn {
                id: PlayerId::Player2,
                position: Cell::new(mid, last),
                walls_remaining: max_walls,
                goal_row: 0,
            },
        ];
        Self {
            size,
            pawns,
            walls: WallSet::new(size),
        }
    }

    /// Board with explicit pawn positions and walls, for setting up positions.
    pub fn with_position(
        size: u8,
        max_walls: u8,
        player1: Cell,
        player2: Cell,
        walls: &[Wall],
    ) -> Self {
        let mut board = Self::new(size, max_walls);
        board.pawns[0].position = player1;
        board.pawns[1].position = player2;
        board.walls = WallSet::from_walls(size, walls.iter().copied());
        board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn pawn(&self, id: PlayerId) -> &Pawn {
        &self.pawns[id.index()]
    }

    pub fn opponent(&self, id: PlayerId) -> &Pawn {
        &self.pawns[id.other().index()]
    }

    pub fn pawns(&self) -> &[Pawn; 2] {
        &self.pawns
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn apply_move(&mut self, id: PlayerId, to: Cell) {
        self.pawns[id.index()].position = to;
    }

    pub fn apply_wall(&mut self, wall: Wall) {
        self.walls.insert(wall);
    }

    /// Take one wall out of a player's stock.
    pub fn spend_wall(&mut self, id: PlayerId) {
        let pawn = &mut self.pawns[id.index()];
        pawn.walls_remaining = pawn.walls_remaining.saturating_sub(1);
    }

    fn pawn_at(&self, cell: Cell) -> Option<&Pawn> {
        self.pawns.iter().find(|p| p.position == cell)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:^3} ", col)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>2} ", row)?;
            for col in 0..self.size {
                let cell = Cell::new(col, row);
                match self.pawn_at(cell) {
                    Some(p) => write!(f, "P{} ", p.id.index() + 1)?,
                    None => write!(f, " . ")?,
                }
                if col + 1 < self.size {
                    let sep = if self.walls.is_blocked(cell, Direction::Right) {
                        '|'
                    } else {
                        ' '
                    };
                    write!(f, "{sep}")?;
                }
            }
            writeln!(f)?;
            if row + 1 < self.size {
                write!(f, "   ")?;
                for col in 0..self.size {
                    let below = self.walls.is_blocked(Cell::new(col, row), Direction::Down);
                    write!(f, "{} ", if below { "---" } else { "   " })?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
