use clap::Parser;

use numdiv::engine::choose_move;
use numdiv::engine::config::TERMINAL_THRESHOLD;
use numdiv::moves::*;
use numdiv::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "numdiv", version)]
#[command(about = "Pick the computer's divisor for a position of the number division game")]
struct Cli {
    /// Current shared number
    number: Number,

    /// Score of player 1
    #[arg(long, default_value_t = 0)]
    score_a: Points,

    /// Score of player 2
    #[arg(long, default_value_t = 0)]
    score_b: Points,

    /// Points waiting in the bank
    #[arg(long, default_value_t = 0)]
    bank: Points,

    /// Player the computer moves for (a or b)
    #[arg(short, long, default_value = "b")]
    computer: Player,

    /// Search algorithm (minimax or alpha-beta)
    #[arg(short, long, default_value = "minimax")]
    algorithm: Algorithm,

    /// Search depth in plies (defaults to 4)
    #[arg(short, long)]
    depth: Option<u32>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    numdiv::init_logger(cli.debug);

    let res = choose_move(
        cli.number,
        cli.score_a,
        cli.score_b,
        cli.bank,
        cli.computer,
        cli.algorithm,
        cli.depth,
    );
    println!("{}", res);

    if res.best_move.is_none() && cli.number > TERMINAL_THRESHOLD {
        eprintln!("{} has no legal move from {} and loses", cli.computer, cli.number);
    }
}
