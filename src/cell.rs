//! Grid cells and their display symbols.

use core::fmt;

use crate::coordinate::Coordinate;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    /// Shot landed here, or the cell lies in a ship's contour.
    Miss,
    ShipIntact,
    ShipDamaged,
}

impl CellState {
    /// One-character symbol used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => 'O',
            CellState::Miss => 'T',
            CellState::ShipIntact => '■',
            CellState::ShipDamaged => 'X',
        }
    }
}

/// A grid position together with its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coord: Coordinate,
    state: CellState,
}

impl Cell {
    pub(crate) fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            state: CellState::Empty,
        }
    }

    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub fn is_empty(&self) -> bool {
        self.state == CellState::Empty
    }

    pub fn holds_intact_ship(&self) -> bool {
        self.state == CellState::ShipIntact
    }

    /// A cell can be fired upon only while it is empty or holds an undamaged
    /// ship segment.
    pub fn is_targetable(&self) -> bool {
        matches!(self.state, CellState::Empty | CellState::ShipIntact)
    }

    pub fn symbol(&self) -> char {
        self.state.symbol()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
