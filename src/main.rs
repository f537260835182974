//! Wordle Minimax CLI
//!
//! Plays a game against a given secret, searches for an opening guess, or
//! benchmarks the solver over the whole answer pool.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_minimax::game::DEFAULT_MAX_ROUNDS;
use wordle_minimax::{find_openers, Dictionary, Game, GameConfig, GameState, Result, Word};

/// Remaining candidates are listed by name up to this many.
const LIST_LIMIT: usize = 5;

#[derive(Parser)]
#[clap(name = "wordle-minimax", version, about)]
struct Cli {
    /// Answer pool, one word per line (defaults to the built-in list)
    #[clap(long, global = true, value_name = "PATH")]
    answers: Option<PathBuf>,

    /// Extra accepted guesses, one word per line (defaults to the built-in list)
    #[clap(long, global = true, value_name = "PATH")]
    guesses: Option<PathBuf>,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[clap(short, long, global = true, action = ArgAction::Count)]
    verbose: u64,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one game against SECRET
    Play {
        secret: String,
        /// Opening guess to use instead of the precomputed one
        first_guess: Option<String>,
        #[clap(flatten)]
        rules: Rules,
    },
    /// Find the best opening guesses by total greens, then yellows
    Opener,
    /// Play every answer in the pool and report how many rounds each took
    Benchmark {
        /// Opening guess to use instead of the precomputed one
        #[clap(long)]
        opener: Option<String>,
        #[clap(flatten)]
        rules: Rules,
    },
}

#[derive(Args)]
struct Rules {
    /// Allow guesses that contradict earlier feedback
    #[clap(long)]
    easy: bool,

    #[clap(long, value_name = "N", default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,
}

impl Rules {
    fn config(&self, opener: Option<&str>) -> Result<GameConfig> {
        let mut config = GameConfig {
            hard_mode: !self.easy,
            max_rounds: self.max_rounds,
            ..GameConfig::default()
        };
        if let Some(opener) = opener {
            config.opener = Word::parse(opener)?;
        }
        Ok(config)
    }
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordle_minimax={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn play(dictionary: &Dictionary, secret: &str, config: GameConfig) -> Result<()> {
    let secret = Word::parse(secret)?;
    let game = Game::with_dictionary(dictionary, config);
    let mut session = game.start(secret)?;

    while let Some(round) = session.step()? {
        println!("Guessing {}", round.guess);
        if round.is_correct {
            break;
        }
        if round.remaining.len() > LIST_LIMIT {
            println!("Remaining candidates: {}", round.remaining.len());
        } else {
            let names: Vec<String> = round.remaining.iter().map(Word::to_string).collect();
            println!("Remaining candidates: {}", names.join(", "));
        }
    }

    match session.state() {
        GameState::Won { rounds } => println!("Done in {} attempts.", rounds),
        _ => println!(
            "Could not guess {} within {} attempts.",
            secret, config.max_rounds
        ),
    }
    Ok(())
}

fn opener(dictionary: &Dictionary) {
    let start = Instant::now();
    let words = find_openers(dictionary.answers());
    let names: Vec<String> = words.iter().map(Word::to_string).collect();
    println!("Best openers: {}", names.join(", "));
    println!("Time: {:.2?}", start.elapsed());
}

fn benchmark(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    println!(
        "Running benchmark on all {} answers...",
        dictionary.answers().len()
    );
    let start = Instant::now();
    let report = Game::with_dictionary(dictionary, config).benchmark()?;
    let elapsed = start.elapsed();

    let total = report.games().max(1);
    println!();
    println!("Guess distribution:");
    for (rounds, count) in &report.wins {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", rounds, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", report.average_rounds());
    println!("Total words: {}", report.games());
    println!("Time elapsed: {:.2?}", elapsed);

    if report.exhausted.is_empty() {
        println!("All words solved within {} guesses.", config.max_rounds);
    } else {
        let names: Vec<String> = report.exhausted.iter().map(Word::to_string).collect();
        println!(
            "Words not solved in {} guesses ({}): {}",
            config.max_rounds,
            names.len(),
            names.join(", ")
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let dictionary = Dictionary::load(cli.answers.as_deref(), cli.guesses.as_deref())?;

    match cli.command {
        Command::Play {
            secret,
            first_guess,
            rules,
        } => play(&dictionary, &secret, rules.config(first_guess.as_deref())?),
        Command::Opener => {
            opener(&dictionary);
            Ok(())
        }
        Command::Benchmark { opener, rules } => {
            benchmark(&dictionary, rules.config(opener.as_deref())?)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
