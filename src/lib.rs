pub mod engine;
pub mod error;
pub mod game;
pub mod moves;

pub use crate::engine::{choose_move, Algorithm, SearchResult};
pub use crate::error::{NumdivError, Result};

/// Logger setup shared by the binaries: `info` by default, `debug` with the
/// debug flag, `RUST_LOG` wins over both. Output goes to stderr.
pub fn init_logger(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .target(env_logger::Target::Stderr)
    .format_timestamp(None)
    .try_init();
}
