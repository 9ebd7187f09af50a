//! Ship definitions: footprint, contour and damage tracking.

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Segments extend along increasing `x` from the nose.
    Horizontal,
    /// Segments extend along increasing `y` from the nose.
    Vertical,
}

impl Distribution<Orientation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A ship anchored at its nose, with remaining health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    nose: Coordinate,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Create an undamaged ship of `length` extending from `nose`.
    pub fn new(nose: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            nose,
            length,
            orientation,
            health: length,
        }
    }

    pub fn nose(&self) -> Coordinate {
        self.nose
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Coordinates occupied by the ship, nose first.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => self.nose.offset(i, 0),
            Orientation::Vertical => self.nose.offset(0, i),
        })
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.coords().any(|c| c == coord)
    }

    /// Every coordinate in the rectangle one unit larger than the footprint on
    /// each side, corners included. May contain out-of-bounds coordinates and
    /// the footprint itself.
    pub fn contour(&self) -> impl Iterator<Item = Coordinate> {
        let len = self.length as i32;
        let (width, height) = match self.orientation {
            Orientation::Horizontal => (len, 1),
            Orientation::Vertical => (1, len),
        };
        let nose = self.nose;
        (-1..=height).flat_map(move |dy| (-1..=width).map(move |dx| nose.offset(dx, dy)))
    }

    /// Remove one point of health. Returns `true` when this hit sank the ship.
    /// A sunk ship never changes again.
    pub(crate) fn take_damage(&mut self) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health -= 1;
        self.health == 0
    }
}
