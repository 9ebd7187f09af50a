/// Width and height of every board.
pub const BOARD_SIZE: u8 = 6;
pub const NUM_SHIPS: usize = 7;
/// Lengths of the ships each side places, in placement order.
pub const SHIP_ROSTER: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random nose/orientation draws tried for a single ship before the whole
/// board attempt is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Fresh boards tried by random generation before giving up.
pub const MAX_BOARD_ATTEMPTS: usize = 10_000;
