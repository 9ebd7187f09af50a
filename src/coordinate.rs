use core::fmt;

use crate::config::BOARD_SIZE;

/// A 0-indexed position on the board. `x` runs along the columns, `y` along
/// the rows.
///
/// Components are signed so contour arithmetic can step past the edge of the
/// grid; such coordinates are simply reported as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns `true` when the coordinate falls outside `[0, BOARD_SIZE)` on
    /// either axis.
    pub fn is_out_of_bounds(&self) -> bool {
        let max = BOARD_SIZE as i32;
        !(0..max).contains(&self.x) || !(0..max).contains(&self.y)
    }

    /// Offset this coordinate by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
