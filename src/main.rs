//! Number Guesser CLI
//!
//! Interactive command-line game against the machine's secret number.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use number_guesser::digit::parse_digits;
use number_guesser::validate::Rule;
use number_guesser::{
    evaluate_guess, validate_guess, GameConfig, GameError, GameState, Guess, GuessValidation,
    Session, TARGET_LENGTH, TURN_LIMIT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const HELP_TEXT: &str = include_str!("text/help.txt");

/// Find the machine's number of distinct digits in a limited number of turns
#[derive(Parser, Debug)]
#[command(name = "number-guesser")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of distinct digits in the secret number
    #[arg(long, env = "NUMBER_GUESSER_DIGITS", default_value_t = TARGET_LENGTH)]
    digits: usize,

    /// Number of guesses allowed
    #[arg(long, env = "NUMBER_GUESSER_TURNS", default_value_t = TURN_LIMIT)]
    turns: usize,

    /// Seed for the secret number generator, for reproducible games
    #[arg(long, env = "NUMBER_GUESSER_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game (default)
    Play,

    /// Check whether an input would be accepted as a guess
    Check {
        /// The raw guess to check
        input: String,
    },

    /// Score a guess against a known target
    Score {
        /// Guessed digits, e.g. 1325
        guess: String,
        /// Target digits, e.g. 1234
        target: String,
    },
}

fn print_checklist(validation: &GuessValidation, required_length: usize) {
    for (i, rule) in Rule::ALL.iter().enumerate() {
        let mark = if validation.passes(*rule) { "✓" } else { "✗" };
        println!("  {}. {} : {}", i + 1, rule.describe(required_length), mark);
    }
}

fn print_history(session: &Session) {
    let history = session.history();
    if history.is_empty() {
        println!("No guesses yet.");
        return;
    }

    let target_length = session.config().target_length();
    println!();
    println!(
        "{:>4}  {:<20} {:>8} {:>9}  Pegs",
        "N°", "Your guesses", "In place", "Misplaced"
    );
    println!("{}", "-".repeat(56));
    for (i, turn) in history.iter().enumerate() {
        println!(
            "{:>4}  {:<20} {:>8} {:>9}  {}",
            i + 1,
            turn.guess.to_string(),
            turn.result.digits_right_placed,
            turn.result.digits_misplaced,
            turn.result.to_peg_string(target_length)
        );
    }
    println!();
}

fn print_intro(config: &GameConfig) {
    println!(
        "Can you find a number of {} distinct digits in no more than {} turns?",
        config.target_length(),
        config.turn_limit()
    );
    println!("Type 'help' for commands.");
    println!();
}

fn print_outcome(session: &Session) {
    match session.state() {
        GameState::Won => {
            println!();
            println!("YOU WIN! Found in {} turns.", session.history().len());
        }
        GameState::Lost => {
            println!();
            println!("YOU LOSE!");
            if let Some(target) = session.revealed_target() {
                println!("Answer = {}", target);
            }
        }
        GameState::Active => return,
    }
    println!("Type 'new' to play again or 'quit' to leave.");
    println!();
}

fn play(config: GameConfig, rng: &mut StdRng) -> Result<()> {
    for line in BANNER_TEXT.lines() {
        println!("{}", line);
    }
    print_intro(&config);

    let mut session = Session::new(config, rng)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if session.state() == GameState::Active {
            print!("[{} left] > ", session.turns_remaining());
        } else {
            print!("> ");
        }
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "help" | "?" => println!("{}", HELP_TEXT),
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "history" | "h" => print_history(&session),
            "new" | "restart" => {
                session = session.restart(rng)?;
                println!();
                print_intro(session.config());
            }
            _ if session.state().is_terminal() => {
                println!("The game is over. Type 'new' to play again.");
            }
            _ => {
                let required_length = session.config().target_length();
                match Guess::parse(input, required_length) {
                    Ok(guess) => {
                        session = session.submit_guess(guess)?;
                        if let Some(turn) = session.history().last() {
                            println!(
                                "{}  {}  ({})",
                                turn.guess,
                                turn.result.to_peg_string(required_length),
                                turn.result
                            );
                        }
                        print_outcome(&session);
                    }
                    Err(GameError::InvalidGuess(validation)) => {
                        println!("Not a valid guess: {}", input);
                        print_checklist(&validation, required_length);
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }

    Ok(())
}

fn check(input: &str, config: &GameConfig) {
    let validation = validate_guess(input, config.target_length());
    print_checklist(&validation, config.target_length());
    if validation.is_submittable() {
        println!("Guess can be submitted.");
    } else {
        println!("Guess cannot be submitted: {}", validation);
    }
}

fn score(guess: &str, target: &str) -> Result<()> {
    let Some(guess_digits) = parse_digits(guess) else {
        bail!("guess must only contain digits 0-9: {}", guess);
    };
    let Some(target_digits) = parse_digits(target) else {
        bail!("target must only contain digits 0-9: {}", target);
    };

    let result = evaluate_guess(&guess_digits, &target_digits);
    println!(
        "{}  ({})",
        result.to_peg_string(target_digits.len()),
        result
    );
    if result.is_winner(target_digits.len()) {
        println!("Winning guess.");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.digits, cli.turns).context("invalid game settings")?;

    let mut rng = match cli.seed {
        Some(seed) => {
            debug!(seed, "seeding target generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            info!("starting interactive game");
            play(config, &mut rng)
        }
        Command::Check { input } => {
            check(&input, &config);
            Ok(())
        }
        Command::Score { guess, target } => score(&guess, &target),
    }
}
