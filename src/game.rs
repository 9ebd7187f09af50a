use alloc::boxed::Box;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coordinate::Coordinate,
    placement::generate_random_board,
    player::Player,
};
use rand::rngs::SmallRng;

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    User,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::User => Side::Ai,
            Side::Ai => Side::User,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    UserTurn,
    AiTurn,
    UserWon,
    AiWon,
}

impl GameStatus {
    /// Returns `true` once a side has won.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::UserWon | GameStatus::AiWon)
    }

    /// Side whose turn it is, or `None` when the match is over.
    pub fn shooter(self) -> Option<Side> {
        match self {
            GameStatus::UserTurn => Some(Side::User),
            GameStatus::AiTurn => Some(Side::Ai),
            GameStatus::UserWon | GameStatus::AiWon => None,
        }
    }

    /// Winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::UserWon => Some(Side::User),
            GameStatus::AiWon => Some(Side::Ai),
            GameStatus::UserTurn | GameStatus::AiTurn => None,
        }
    }

    /// Status after the current shooter fired with `outcome`, leaving the
    /// defender with `defender_alive` ships. A hit keeps the turn, a miss
    /// passes it, and an emptied fleet ends the match.
    pub fn advance(self, outcome: ShotOutcome, defender_alive: usize) -> Self {
        let Some(shooter) = self.shooter() else {
            return self;
        };
        if defender_alive == 0 {
            return Self::won_by(shooter);
        }
        match outcome {
            ShotOutcome::Hit => self,
            ShotOutcome::Miss => Self::turn_of(shooter.opponent()),
        }
    }

    fn turn_of(side: Side) -> Self {
        match side {
            Side::User => GameStatus::UserTurn,
            Side::Ai => GameStatus::AiTurn,
        }
    }

    fn won_by(side: Side) -> Self {
        match side {
            Side::User => GameStatus::UserWon,
            Side::Ai => GameStatus::AiWon,
        }
    }
}

/// A single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotRecord {
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Status after the shot.
    pub status: GameStatus,
}

/// Core game logic: both boards, both players and the turn state machine.
pub struct GameEngine {
    user_board: Board,
    ai_board: Board,
    user: Box<dyn Player>,
    ai: Box<dyn Player>,
    rng: SmallRng,
    status: GameStatus,
    shots: usize,
}

impl GameEngine {
    /// Generate a random board for each side and start with the user's turn.
    /// The computer's board is hidden.
    pub fn new(
        user: Box<dyn Player>,
        ai: Box<dyn Player>,
        mut rng: SmallRng,
    ) -> Result<Self, BoardError> {
        let user_board = generate_random_board(&mut rng)?;
        let mut ai_board = generate_random_board(&mut rng)?;
        ai_board.hide();
        Ok(Self::from_boards(user_board, ai_board, user, ai, rng))
    }

    /// Start a match on prepared boards.
    pub fn from_boards(
        user_board: Board,
        ai_board: Board,
        user: Box<dyn Player>,
        ai: Box<dyn Player>,
        rng: SmallRng,
    ) -> Self {
        log::info!(
            "match started: user fleet {}, ai fleet {}",
            user_board.alive_count(),
            ai_board.alive_count()
        );
        Self {
            user_board,
            ai_board,
            user,
            ai,
            rng,
            status: GameStatus::UserTurn,
            shots: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn user_board(&self) -> &Board {
        &self.user_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    /// Mutable access to the computer's board, e.g. to reveal it at the end.
    pub fn ai_board_mut(&mut self) -> &mut Board {
        &mut self.ai_board
    }

    /// Number of shots resolved so far.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    /// Let the side to move fire one accepted shot.
    pub fn step(&mut self) -> anyhow::Result<ShotRecord> {
        let shooter = self
            .status
            .shooter()
            .ok_or_else(|| anyhow::anyhow!("match is already over"))?;

        let (target, outcome, defender_alive) = match shooter {
            Side::User => {
                let (target, outcome) =
                    self.user
                        .fire(&mut self.rng, &self.user_board, &mut self.ai_board)?;
                self.ai.handle_opponent_shot(target, outcome);
                (target, outcome, self.ai_board.alive_count())
            }
            Side::Ai => {
                let (target, outcome) =
                    self.ai
                        .fire(&mut self.rng, &self.ai_board, &mut self.user_board)?;
                self.user.handle_opponent_shot(target, outcome);
                (target, outcome, self.user_board.alive_count())
            }
        };

        self.shots += 1;
        let next = self.status.advance(outcome, defender_alive);
        log::trace!("{:?} fired at {}: {:?}", shooter, target, outcome);
        if next != self.status {
            log::debug!("{:?} -> {:?}", self.status, next);
        }
        self.status = next;
        if next.is_over() {
            log::info!("match over: {:?} after {} shots", next, self.shots);
        }

        Ok(ShotRecord {
            shooter,
            target,
            outcome,
            status: next,
        })
    }

    /// Play until one fleet is destroyed and return the final status.
    pub fn run(&mut self) -> anyhow::Result<GameStatus> {
        while !self.status.is_over() {
            self.step()?;
        }
        Ok(self.status)
    }
}
