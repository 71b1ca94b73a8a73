//! The authoritative running game.
//!
//! The engine never mutates a game; front-ends ask it for a divisor and then
//! apply that divisor here, the same way a human move is applied.

use log::{debug, info};
use rand::Rng;

use crate::engine::config::*;
use crate::engine::{choose_move, SearchResult};
use crate::error::{NumdivError, Result};
use crate::moves::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    // the number reached the end threshold
    Finished,
    // nothing divides the number; `stuck` was to move and loses
    Stalemate { stuck: Player },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

#[derive(Clone, Debug)]
pub struct Game {
    pos: Position,
    to_move: Player,
    status: Status,
    history: Vec<Divisor>,
}

impl Game {
    /// New game from `start` with `first` to move. A start that is already
    /// finished or stuck ends the game immediately.
    pub fn new(start: Number, first: Player) -> Game {
        let mut game = Game {
            pos: Position::root(start, 0, 0, 0),
            to_move: first,
            status: Status::Ongoing,
            history: Vec::new(),
        };
        game.check_end();
        game
    }

    pub fn number(&self) -> Number {
        self.pos.number
    }

    pub fn score(&self, player: Player) -> Points {
        self.pos.score_of(player)
    }

    pub fn bank(&self) -> Points {
        self.pos.bank
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Ongoing
    }

    pub fn history(&self) -> &[Divisor] {
        &self.history
    }

    pub fn legal_moves(&self) -> Vec<Divisor> {
        if self.is_over() {
            return Vec::new();
        }
        self.pos.legal_moves().collect()
    }

    /// Applies `d` for the player to move. An illegal divisor leaves the
    /// game untouched.
    pub fn apply(&mut self, d: Divisor) -> Result<Status> {
        if self.is_over() {
            return Err(NumdivError::GameOver);
        }
        if !d.divides(self.pos.number) {
            return Err(NumdivError::InvalidMove {
                number: self.pos.number,
                divisor: d.value(),
            });
        }

        let mover = self.to_move;
        self.pos = self.pos.child(d, mover);
        self.history.push(d);
        self.to_move = mover.other();
        debug!(
            "{} divided by {}: number {}, scores {}/{}, bank {}",
            mover, d, self.pos.number, self.pos.score_a, self.pos.score_b, self.pos.bank
        );

        self.check_end();
        Ok(self.status)
    }

    /// Parses and applies a divisor typed by a player.
    pub fn apply_str(&mut self, token: &str) -> Result<Status> {
        let d: Divisor = token.parse()?;
        self.apply(d)
    }

    /// Asks the engine for `computer`'s move in the current state.
    pub fn computer_move(&self, computer: Player, config: &SearchConfig) -> SearchResult {
        debug_assert_eq!(computer, self.to_move);
        choose_move(
            self.pos.number,
            self.pos.score_a,
            self.pos.score_b,
            self.pos.bank,
            computer,
            config.algorithm,
            Some(config.max_depth),
        )
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Ongoing => None,
            Status::Stalemate { stuck } => Some(Outcome::Winner(stuck.other())),
            Status::Finished => {
                let (a, b) = (self.pos.score_a, self.pos.score_b);
                Some(if a > b {
                    Outcome::Winner(Player::A)
                } else if b > a {
                    Outcome::Winner(Player::B)
                } else {
                    Outcome::Draw
                })
            }
        }
    }

    fn check_end(&mut self) {
        if self.pos.is_terminal() {
            self.status = Status::Finished;
        } else if self.pos.legal_moves().is_empty() {
            self.status = Status::Stalemate {
                stuck: self.to_move,
            };
        } else {
            return;
        }

        // the whole bank goes to whoever made the last division
        if !self.history.is_empty() {
            let last = self.to_move.other();
            let bank = self.pos.bank;
            let score = self.pos.score_mut(last);
            *score = score.saturating_add(bank);
            self.pos.bank = 0;
        }
        info!(
            "game over at {}: {:?}, scores {}/{}",
            self.pos.number, self.status, self.pos.score_a, self.pos.score_b
        );
    }
}

/// Checks that `start` is one of the numbers the game may start from.
pub fn validate_start(start: Number) -> Result<Number> {
    if start < START_MIN || start > START_MAX || start % START_DIVISOR != 0 {
        return Err(NumdivError::InvalidStart(start));
    }
    Ok(start)
}

/// Distinct starting numbers in `[START_MIN, START_MAX]`, all divisible by 6.
pub fn generate_start_numbers<R: Rng>(rng: &mut R) -> Vec<Number> {
    let lo = (START_MIN + START_DIVISOR - 1) / START_DIVISOR;
    let hi = START_MAX / START_DIVISOR;
    let mut numbers = Vec::with_capacity(START_CHOICES);
    while numbers.len() < START_CHOICES {
        let n = rng.gen_range(lo, hi + 1) * START_DIVISOR;
        if !numbers.contains(&n) {
            numbers.push(n);
        }
    }
    numbers
}
