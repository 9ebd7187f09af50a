//! Common types for the game: board errors and shot outcomes.

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The shot struck a ship segment.
    Hit,
    /// The shot landed in open water.
    Miss,
}

impl ShotOutcome {
    /// Returns `true` for [`ShotOutcome::Hit`].
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target coordinate lies outside the grid.
    OutOfBounds,
    /// The cell was already fired upon (or sits inside a sunk ship's contour).
    AlreadyTargeted,
    /// Ship leaves the grid or touches an occupied or reserved cell.
    InvalidPlacement,
    /// Random generation ran out of board attempts.
    GenerationExhausted,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            BoardError::AlreadyTargeted => write!(f, "This cell has already been shot at"),
            BoardError::InvalidPlacement => write!(f, "Ship cannot be placed at this position"),
            BoardError::GenerationExhausted => {
                write!(f, "Unable to generate a random board")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
