use crate::{board::Board, coordinate::Coordinate};
use rand::{rngs::SmallRng, Rng};

use crate::player::Player;

/// Computer player that fires at a uniformly random targetable cell. It keeps
/// no memory between turns.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Board,
        enemy: &Board,
    ) -> anyhow::Result<Coordinate> {
        let targets = enemy.targetable_cells();
        if targets.is_empty() {
            return Err(anyhow::anyhow!("no targetable cells left on the enemy board"));
        }
        Ok(targets[rng.random_range(0..targets.len())])
    }
}
