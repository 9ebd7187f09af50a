//! Game board state: the cell grid, placed ships and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::cell::{Cell, CellState};
use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Symbols of a rendered board, indexed `[y][x]`.
pub type RenderedBoard = [[char; GRID_SIZE]; GRID_SIZE];

/// One side's board: grid, ships and the number of ships still afloat.
#[derive(Clone)]
pub struct Board {
    grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    ships: Vec<Ship>,
    alive: usize,
    hidden: bool,
}

impl Board {
    /// Create an empty, visible board.
    pub fn new() -> Self {
        let grid = core::array::from_fn(|y| {
            core::array::from_fn(|x| Cell::new(Coordinate::new(x as i32, y as i32)))
        });
        Board {
            grid,
            ships: Vec::new(),
            alive: 0,
            hidden: false,
        }
    }

    /// Returns `true` when `coord` lies outside the grid.
    pub fn out(coord: Coordinate) -> bool {
        coord.is_out_of_bounds()
    }

    /// Hide intact ship segments when rendering.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn reveal(&mut self) {
        self.hidden = false;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Cell at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        if Self::out(coord) {
            return None;
        }
        Some(&self.grid[coord.y() as usize][coord.x() as usize])
    }

    fn cell_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        if Self::out(coord) {
            return None;
        }
        Some(&mut self.grid[coord.y() as usize][coord.x() as usize])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flat_map(|row| row.iter())
    }

    /// Ships in the order they were placed.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships with health left.
    pub fn alive_count(&self) -> usize {
        self.alive
    }

    /// Returns `true` once every ship has been sunk.
    pub fn is_all_destroyed(&self) -> bool {
        self.alive == 0
    }

    /// Coordinates of every empty cell.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        self.cells()
            .filter(|c| c.is_empty())
            .map(|c| c.coord())
            .collect()
    }

    /// Coordinates of every cell that can still be fired upon.
    pub fn targetable_cells(&self) -> Vec<Coordinate> {
        self.cells()
            .filter(|c| c.is_targetable())
            .map(|c| c.coord())
            .collect()
    }

    /// Place `ship`, marking its footprint and reserving its contour.
    ///
    /// Every segment must be in bounds and on an empty cell; otherwise the
    /// board is left untouched and [`BoardError::InvalidPlacement`] is
    /// returned.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        // Footprint arithmetic is done in i32; no ship longer than the grid fits.
        if !(1..=GRID_SIZE).contains(&ship.length()) {
            return Err(BoardError::InvalidPlacement);
        }
        let fits = ship
            .coords()
            .all(|coord| self.cell(coord).is_some_and(Cell::is_empty));
        if !fits {
            return Err(BoardError::InvalidPlacement);
        }

        for coord in ship.coords() {
            if let Some(cell) = self.cell_mut(coord) {
                cell.set_state(CellState::ShipIntact);
            }
        }
        self.draw_contour(&ship);
        self.ships.push(ship);
        self.alive += 1;
        Ok(())
    }

    /// Mark empty cells around `ship` as misses.
    fn draw_contour(&mut self, ship: &Ship) {
        for coord in ship.contour() {
            if let Some(cell) = self.cell_mut(coord) {
                if cell.is_empty() {
                    cell.set_state(CellState::Miss);
                }
            }
        }
    }

    /// Reset placement contours back to empty water. Run once, after all ships
    /// are placed and before the first shot.
    pub fn clean(&mut self) {
        for cell in self.grid.iter_mut().flat_map(|row| row.iter_mut()) {
            if cell.state() == CellState::Miss {
                cell.set_state(CellState::Empty);
            }
        }
    }

    /// Fire at `target`.
    ///
    /// Sinking a ship marks its contour as misses for the rest of the game.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        let cell = self.cell(target).ok_or(BoardError::OutOfBounds)?;
        if !cell.is_targetable() {
            return Err(BoardError::AlreadyTargeted);
        }

        let Some(index) = self.ships.iter().position(|s| s.contains(target)) else {
            if let Some(cell) = self.cell_mut(target) {
                cell.set_state(CellState::Miss);
            }
            return Ok(ShotOutcome::Miss);
        };

        if let Some(cell) = self.cell_mut(target) {
            cell.set_state(CellState::ShipDamaged);
        }
        if self.ships[index].take_damage() {
            self.alive -= 1;
            let ship = self.ships[index];
            self.draw_contour(&ship);
            log::debug!("ship at {} sunk, {} left", ship.nose(), self.alive);
        }
        Ok(ShotOutcome::Hit)
    }

    /// Symbols for every cell, indexed `[y][x]`. Hidden boards show intact
    /// ship segments as empty water.
    pub fn render(&self) -> RenderedBoard {
        core::array::from_fn(|y| {
            core::array::from_fn(|x| {
                let cell = &self.grid[y][x];
                if self.hidden && cell.holds_intact_ship() {
                    CellState::Empty.symbol()
                } else {
                    cell.symbol()
                }
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ alive: {}, hidden: {}, ships: {:?} }}",
            self.alive, self.hidden, self.ships
        )?;
        for row in self.render() {
            for symbol in row {
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
