//! Error type shared by the game model, the engine front-ends and the binaries.
//!
//! A position with no legal divisor is not an error: the engine reports it as
//! "no move" and the game reports it as a stalemate.

use crate::moves::Number;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NumdivError {
    /// The divisor does not divide the current number evenly
    #[error("invalid move: {number} is not divisible by {divisor}")]
    InvalidMove { number: Number, divisor: u64 },

    /// Only 2 and 3 are playable
    #[error("invalid divisor {0}: only 2 and 3 are allowed")]
    InvalidDivisor(u64),

    #[error("cannot parse divisor '{0}'")]
    UnknownDivisor(String),

    /// A move was attempted after the game ended
    #[error("the game is already over")]
    GameOver,

    #[error("unknown algorithm '{0}' (expected 'minimax' or 'alpha-beta')")]
    UnknownAlgorithm(String),

    #[error("unknown player '{0}' (expected 'a' or 'b')")]
    UnknownPlayer(String),

    /// Starting number outside the allowed range or not divisible by 6
    #[error("invalid starting number {0}")]
    InvalidStart(Number),
}

pub type Result<T> = std::result::Result<T, NumdivError>;
