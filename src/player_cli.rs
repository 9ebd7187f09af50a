#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::string::{String, ToString};
use std::vec::Vec;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coordinate::Coordinate,
    ui::format_board,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Why a line of input could not be read as a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordError {
    /// Expected exactly two tokens.
    WrongTokenCount(usize),
    /// A token was not a non-negative decimal number.
    NotANumber(String),
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::WrongTokenCount(n) => {
                write!(f, "Expected two coordinates separated by a space, got {}", n)
            }
            ParseCoordError::NotANumber(token) => {
                write!(f, "Coordinates must be numbers, got '{}'", token)
            }
        }
    }
}

impl std::error::Error for ParseCoordError {}

/// Parse a 1-indexed `"x y"` pair into a 0-indexed [`Coordinate`]. Bounds are
/// left to the board.
pub fn parse_coord(input: &str) -> Result<Coordinate, ParseCoordError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ParseCoordError::WrongTokenCount(tokens.len()));
    }
    let parse = |token: &str| -> Result<i32, ParseCoordError> {
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseCoordError::NotANumber(token.to_string()));
        }
        token
            .parse::<i32>()
            .map(|v| v - 1)
            .map_err(|_| ParseCoordError::NotANumber(token.to_string()))
    };
    Ok(Coordinate::new(parse(tokens[0])?, parse(tokens[1])?))
}

fn coord_to_string(coord: Coordinate) -> String {
    std::format!("{} {}", coord.x() + 1, coord.y() + 1)
}

/// Interactive player reading targets from `input` and writing prompts and
/// reports to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a line parses as a coordinate.
    fn read_coord(&mut self) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Enter target (x y): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Err(anyhow::anyhow!("input closed"));
            }
            match parse_coord(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn begin_turn(&mut self, own: &Board, enemy: &Board) {
        let _ = write!(
            self.output,
            "Your board:\n{}\nOpponent board:\n{}\n",
            format_board(own),
            format_board(enemy)
        );
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _own: &Board,
        _enemy: &Board,
    ) -> anyhow::Result<Coordinate> {
        self.read_coord()
    }

    fn handle_rejected_target(&mut self, _target: Coordinate, error: BoardError) {
        let msg = match error {
            BoardError::OutOfBounds => "That cell is outside the board.",
            BoardError::AlreadyTargeted => "You have already shot at that cell.",
            _ => "That target is not allowed.",
        };
        let _ = writeln!(self.output, "{}", msg);
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        let _ = writeln!(
            self.output,
            "You fired at {} -> {}",
            coord_to_string(target),
            if outcome.is_hit() { "hit" } else { "miss" }
        );
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        let _ = writeln!(
            self.output,
            "Opponent fired at {} -> {}",
            coord_to_string(target),
            if outcome.is_hit() { "hit" } else { "miss" }
        );
    }
}
