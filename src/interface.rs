use std::io::{self, BufRead, Stdin};
use std::process::exit;
use std::str::SplitWhitespace;
use std::time::Duration;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use numdiv::engine::config::*;
use numdiv::engine::Score;
use numdiv::game::*;
use numdiv::moves::*;
use numdiv::{Algorithm, NumdivError};

#[derive(Parser, Debug)]
#[command(name = "interface", version)]
#[command(about = "Play the number division game against the computer")]
struct Cli {
    /// Search algorithm (minimax or alpha-beta)
    #[arg(short, long, default_value = "minimax")]
    algorithm: Algorithm,

    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Let the computer play first (it becomes player 1)
    #[arg(long)]
    computer_first: bool,

    /// Starting number; skips the choice between generated numbers
    #[arg(long)]
    start: Option<Number>,

    /// Seed for the generated starting numbers
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

struct GameContext {
    config: SearchConfig,
    computer: Player,
    eval: Option<Score>,
    think_time: Duration,
    computer_moves: u32,
}

impl GameContext {
    fn new(config: SearchConfig, computer: Player) -> GameContext {
        GameContext {
            config,
            computer,
            eval: None,
            think_time: Duration::default(),
            computer_moves: 0,
        }
    }

    fn tag(&self, player: Player) -> &'static str {
        if player == self.computer {
            "Computer"
        } else {
            "Human"
        }
    }
}

fn next_line(stdin: &mut Stdin) -> String {
    match stdin.lock().lines().next() {
        Some(Ok(line)) => line,
        // stdin closed; nothing more to play
        _ => exit(0),
    }
}

fn command_help(_: &mut SplitWhitespace, _: &mut Game, _: &mut GameContext) -> bool {
    static HELP_TEXT: &'static str = "
COMMANDS
========
h                       Display this message.
p                       Print the current number, scores and bank.
m <2|3>                 Divide the number by 2 or 3.
d [depth]               Change the computer's search depth. If no
                            argument is given, the current depth is printed.
a [algorithm]           Change the search algorithm (minimax, alpha-beta).
                            If no argument is given, the current one is printed.
e                       Print the computer's last evaluation score.
l                       Output move list history.
q                       Quit this program.
";
    println!("{}", HELP_TEXT);
    return false;
}

fn print_state(game: &Game, context: &GameContext) {
    println!("Current number: {}", game.number());
    println!(
        "Player 1 ({}): {}",
        context.tag(Player::A),
        game.score(Player::A)
    );
    println!(
        "Player 2 ({}): {}",
        context.tag(Player::B),
        game.score(Player::B)
    );
    println!("Bank: {}", game.bank());
}

fn command_print(_: &mut SplitWhitespace, game: &mut Game, context: &mut GameContext) -> bool {
    print_state(game, context);
    let moves = game.legal_moves();
    let moves: Vec<String> = moves.iter().map(|d| d.to_string()).collect();
    println!("Legal divisors: {}", moves.join(", "));
    return false;
}

fn command_make_move(tokens: &mut SplitWhitespace, game: &mut Game, _: &mut GameContext) -> bool {
    let token = match tokens.next() {
        Some(val) => val,
        None => {
            println!("ERROR: Need a divisor (2 or 3)!");
            return false;
        }
    };

    match game.apply_str(token) {
        Ok(_) => true,
        Err(err) => {
            println!("ERROR: {}", err);
            false
        }
    }
}

fn command_depth(tokens: &mut SplitWhitespace, _: &mut Game, context: &mut GameContext) -> bool {
    match tokens.next() {
        Some(tok) => {
            let dep: u32 = match tok.parse() {
                Ok(val) => val,
                Err(err) => {
                    println!("ERROR parsing depth: {:?}", err);
                    return false;
                }
            };
            if dep == 0 {
                println!("ERROR: depth must be >= 1");
                return false;
            }
            context.config.max_depth = dep;
        }
        None => println!("{}", context.config.max_depth),
    }
    return false;
}

fn command_algorithm(
    tokens: &mut SplitWhitespace,
    _: &mut Game,
    context: &mut GameContext,
) -> bool {
    match tokens.next() {
        Some(tok) => match tok.parse::<Algorithm>() {
            Ok(algorithm) => context.config.algorithm = algorithm,
            Err(err) => println!("ERROR: {}", err),
        },
        None => println!("{}", context.config.algorithm),
    }
    return false;
}

fn command_evaluate(_: &mut SplitWhitespace, _: &mut Game, context: &mut GameContext) -> bool {
    match context.eval {
        Some(eval) => println!("{}", eval),
        None => println!("The computer has not moved yet."),
    }
    return false;
}

fn history_string(game: &Game) -> String {
    game.history()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

fn command_list(_: &mut SplitWhitespace, game: &mut Game, _: &mut GameContext) -> bool {
    println!("{}", history_string(game));
    return false;
}

fn choose_start(stdin: &mut Stdin, cli: &Cli) -> Result<Number, NumdivError> {
    if let Some(start) = cli.start {
        return validate_start(start);
    }

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let numbers = generate_start_numbers(&mut rng);
    loop {
        println!("Choose a starting number:");
        for (i, n) in numbers.iter().enumerate() {
            println!("  {}) {}", i + 1, n);
        }
        let line = next_line(stdin);
        let choice: Number = match line.trim().parse() {
            Ok(val) => val,
            Err(_) => {
                println!("ERROR: enter a list index or one of the numbers");
                continue;
            }
        };
        if choice >= 1 && choice as usize <= numbers.len() {
            return Ok(numbers[choice as usize - 1]);
        }
        if numbers.contains(&choice) {
            return Ok(choice);
        }
        println!("ERROR: {} is not one of the offered numbers", choice);
    }
}

fn print_result(game: &Game, context: &GameContext) {
    println!("Game over! Final number: {}", game.number());
    if let Status::Stalemate { stuck } = game.status() {
        println!(
            "{} ({}) has no valid move left.",
            stuck,
            context.tag(stuck)
        );
    }
    print_state(game, context);
    match game.outcome() {
        Some(Outcome::Winner(Player::A)) => println!("Player 1 wins!"),
        Some(Outcome::Winner(Player::B)) => println!("Player 2 wins!"),
        Some(Outcome::Draw) => println!("It's a draw!"),
        None => {}
    }
    println!("History: {}", history_string(game));
    if context.computer_moves > 0 {
        let avg = context.think_time.as_secs_f64() / context.computer_moves as f64;
        println!("Average computer move time: {:.4}s", avg);
    }
}

fn main() -> Result<(), NumdivError> {
    let cli = Cli::parse();
    numdiv::init_logger(cli.debug);

    let mut stdin = io::stdin();
    let start = choose_start(&mut stdin, &cli)?;

    // player 1 always moves first
    let computer = if cli.computer_first {
        Player::A
    } else {
        Player::B
    };
    let mut game = Game::new(start, Player::A);
    let mut context = GameContext::new(SearchConfig::new(cli.algorithm, cli.depth), computer);

    while !game.is_over() {
        if game.to_move() != context.computer {
            let mut move_made = false;
            print_state(&game, &context);
            while !move_made {
                println!("Your move ({}).", game.to_move());
                println!("Enter command. 'h' for help.");
                let line = next_line(&mut stdin);
                let mut tokens = line.split_whitespace();
                // function returns true if a move is made
                let func: fn(&mut SplitWhitespace, &mut Game, &mut GameContext) -> bool =
                    match tokens.next() {
                        Some("h") => command_help,
                        Some("p") => command_print,
                        Some("m") => command_make_move,
                        Some("q") => |_, _, _| exit(0),
                        Some("d") => command_depth,
                        Some("a") => command_algorithm,
                        Some("e") => command_evaluate,
                        Some("l") => command_list,
                        Some(_) => command_help,
                        None => |_, _, _| false,
                    };

                move_made = func(&mut tokens, &mut game, &mut context);
            }
        } else {
            println!("Thinking...");
            let res = game.computer_move(context.computer, &context.config);
            context.eval = Some(res.score);
            context.think_time += res.elapsed;
            context.computer_moves += 1;

            let d = match res.best_move {
                Some(d) => d,
                None => {
                    println!("The computer has no valid move.");
                    break;
                }
            };
            game.apply(d)?;
            println!("Your opponent divided by {}", d);
            println!();
        }
    }

    print_result(&game, &context);
    Ok(())
}
