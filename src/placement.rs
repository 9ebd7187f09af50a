//! Random board generation.

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{MAX_BOARD_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS, SHIP_ROSTER};
use crate::ship::{Orientation, Ship};

/// Try to place a ship of `length` with its nose on a random empty cell.
///
/// Returns `false` if the board has no empty cells or every attempt was
/// rejected.
pub fn place_random_ship<R: Rng + ?Sized>(rng: &mut R, board: &mut Board, length: usize) -> bool {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return false;
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let nose = empty[rng.random_range(0..empty.len())];
        let orientation: Orientation = rng.random();
        if board.place(Ship::new(nose, length, orientation)).is_ok() {
            return true;
        }
    }
    false
}

/// Build a cleaned board holding the full roster.
///
/// A board that cannot fit some ship is thrown away and generation restarts
/// from scratch, up to [`MAX_BOARD_ATTEMPTS`] times.
pub fn generate_random_board<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, BoardError> {
    generate_board(rng, &SHIP_ROSTER, MAX_BOARD_ATTEMPTS)
}

fn generate_board<R: Rng + ?Sized>(
    rng: &mut R,
    roster: &[usize],
    max_attempts: usize,
) -> Result<Board, BoardError> {
    for attempt in 1..=max_attempts {
        let mut board = Board::new();
        if roster
            .iter()
            .all(|&length| place_random_ship(rng, &mut board, length))
        {
            board.clean();
            log::debug!("generated board after {} attempt(s)", attempt);
            return Ok(board);
        }
        log::trace!("board attempt {} failed, restarting", attempt);
    }
    log::warn!("gave up on board generation after {} attempts", max_attempts);
    Err(BoardError::GenerationExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_unplaceable_roster_exhausts_attempts() {
        let mut rng = SmallRng::seed_from_u64(3);
        // no 7-cell ship fits a 6x6 grid
        assert!(matches!(
            generate_board(&mut rng, &[3, 7], 5),
            Err(BoardError::GenerationExhausted)
        ));
        assert!(matches!(
            generate_board(&mut rng, &[1], 0),
            Err(BoardError::GenerationExhausted)
        ));
    }

    #[test]
    fn test_generate_board_with_custom_roster() {
        let mut rng = SmallRng::seed_from_u64(3);
        let board = generate_board(&mut rng, &[2, 1], 1).unwrap();
        assert_eq!(board.alive_count(), 2);
        assert_eq!(board.empty_cells().len(), 33);
    }
}
