use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coordinate::Coordinate,
};
use rand::rngs::SmallRng;

/// Interface implemented by the different targeting strategies.
pub trait Player {
    /// Choose the next coordinate to fire at. `own` is the player's board and
    /// `enemy` the board under fire.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Board,
        enemy: &Board,
    ) -> anyhow::Result<Coordinate>;

    /// Called once per shot, before the first [`Player::select_target`].
    fn begin_turn(&mut self, _own: &Board, _enemy: &Board) {}

    /// Inform the player that the board refused its last target.
    fn handle_rejected_target(&mut self, _target: Coordinate, _error: BoardError) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Select targets until `enemy` accepts one and return the resolved shot.
    ///
    /// Off-board and repeated targets are input mistakes, not moves: they are
    /// reported back through [`Player::handle_rejected_target`] and the player
    /// is asked again.
    fn fire(
        &mut self,
        rng: &mut SmallRng,
        own: &Board,
        enemy: &mut Board,
    ) -> anyhow::Result<(Coordinate, ShotOutcome)> {
        self.begin_turn(own, enemy);
        loop {
            let target = self.select_target(rng, own, enemy)?;
            match enemy.shoot(target) {
                Ok(outcome) => {
                    self.handle_shot_result(target, outcome);
                    return Ok((target, outcome));
                }
                Err(err @ (BoardError::OutOfBounds | BoardError::AlreadyTargeted)) => {
                    log::trace!("target {} rejected: {}", target, err);
                    self.handle_rejected_target(target, err);
                }
                Err(err) => return Err(anyhow::anyhow!(err)),
            }
        }
    }
}
