pub mod config;
pub mod eval;
pub mod search;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::debug;

use crate::engine::config::*;
use crate::engine::eval::*;
use crate::error::NumdivError;
use crate::moves::*;

pub type Score = f64;

// a trapped side scores these; no heuristic value reaches them
pub(crate) const SCORE_NEG_INF: Score = std::f64::NEG_INFINITY;
pub(crate) const SCORE_POS_INF: Score = std::f64::INFINITY;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    pub fn prunes(self) -> bool {
        self == Algorithm::AlphaBeta
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = NumdivError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "mm" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" | "alpha_beta" | "ab" => Ok(Algorithm::AlphaBeta),
            other => Err(NumdivError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Outcome of one search call.
///
/// `best_move` is `None` when the number is already at or below the end
/// threshold, or when nothing divides it; in the latter case the side to
/// move has lost.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Divisor>,
    pub score: Score,
    // value-function calls made
    pub nodes: u64,
    pub elapsed: Duration,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.best_move {
            Some(d) => write!(f, "best_move={}; ", d)?,
            None => write!(f, "best_move=none; ")?,
        }
        write!(
            f,
            "eval={}; nodes={}; time={:.6}s",
            self.score,
            self.nodes,
            self.elapsed.as_secs_f64()
        )
    }
}

// one worker per search call. Owns the node counter and the move picked
// at the root; positions live only on the recursion stack.
pub struct Worker {
    searcher: Player,
    config: SearchConfig,
    eval_fn: EvalFn,
    nodes: u64,
    root_move: Option<Divisor>,
}

impl Worker {
    pub fn new(searcher: Player, config: SearchConfig) -> Worker {
        Worker {
            searcher,
            config,
            eval_fn: evaluate,
            nodes: 0,
            root_move: None,
        }
    }

    pub fn with_eval(mut self, eval_fn: EvalFn) -> Worker {
        self.eval_fn = eval_fn;
        self
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Searches `pos` for `searcher`, who is to move. Ply and perspective of
/// `pos` are ignored; the search always starts from a fresh root.
pub fn best_move(pos: &Position, searcher: Player, config: &SearchConfig) -> SearchResult {
    search_with(Worker::new(searcher, *config), pos)
}

pub fn search_with(mut worker: Worker, pos: &Position) -> SearchResult {
    let now = Instant::now();
    let root = Position::root(pos.number, pos.score_a, pos.score_b, pos.bank);
    let (best_move, score) = worker.go(&root);
    let elapsed = now.elapsed();

    debug_assert!(best_move.map_or(true, |d| d.divides(root.number)));
    debug!(
        "{} depth {} from {} for {}: move {:?}, eval {}, {} nodes in {:?}",
        worker.config.algorithm,
        worker.config.max_depth,
        root.number,
        worker.searcher,
        best_move,
        score,
        worker.nodes,
        elapsed
    );

    SearchResult {
        best_move,
        score,
        nodes: worker.nodes,
        elapsed,
    }
}

/// Picks the computer's divisor for the given running state.
///
/// `computer` is the absolute player the search plays for; `max_depth`
/// defaults to `DEFAULT_MAX_DEPTH`. Both algorithms return the same move and
/// score for the same inputs.
pub fn choose_move(
    number: Number,
    score_a: Points,
    score_b: Points,
    bank: Points,
    computer: Player,
    algorithm: Algorithm,
    max_depth: Option<u32>,
) -> SearchResult {
    let config = SearchConfig::new(algorithm, max_depth.unwrap_or(DEFAULT_MAX_DEPTH));
    let pos = Position::root(number, score_a, score_b, bank);
    best_move(&pos, computer, &config)
}
