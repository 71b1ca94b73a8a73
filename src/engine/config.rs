use crate::engine::{Algorithm, Score};
use crate::moves::Number;

/* GAME RULES */

// the game ends once the number is at or below this
pub const TERMINAL_THRESHOLD: Number = 10;

// a post-division number divisible by this adds one point to the bank
pub const BANK_MODULUS: Number = 5;

// starting numbers offered to the players
pub const START_MIN: Number = 20000;
pub const START_MAX: Number = 30000;
pub const START_DIVISOR: Number = 6;
pub const START_CHOICES: usize = 5;

/* SEARCH PARAMETERS */

pub const DEFAULT_MAX_DEPTH: u32 = 4;

/* EVAL PARAMETERS */

// added to (subtracted from) a won (lost) final score difference
pub const WIN_OFFSET: Score = 1000.0;

// nudge toward smaller numbers: (PROXIMITY_ORIGIN - number) / PROXIMITY_SCALE
pub const PROXIMITY_ORIGIN: Score = 30000.0;
pub const PROXIMITY_SCALE: Score = 1000.0;

// one-ply bonus for a divide-by-3 being available
pub const THREE_BONUS: Score = 3.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub max_depth: u32,
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, max_depth: u32) -> SearchConfig {
        SearchConfig {
            algorithm,
            max_depth,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            algorithm: Algorithm::Minimax,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
