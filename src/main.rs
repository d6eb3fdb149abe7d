//! Wordle Assist CLI
//!
//! Interactive command-line front end for the solver.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wordle_assist::{
    benchmark, load_sample_corpus, solve_for_target, Feedback, FrequencyCorpus, Round,
    SolverConfig, Suggestion, Word,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

/// Word that ends the session at any prompt
const DONE: &str = "done";

#[derive(Parser)]
#[command(name = "wordle-assist", version, about)]
struct Args {
    /// Guessed word length
    #[arg(long, default_value_t = wordle_assist::DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Path to a `word,count` CSV frequency table (defaults to the built-in sample)
    #[arg(long, value_name = "FILE")]
    corpus: Option<PathBuf>,

    /// Number of suggestions to show each round
    #[arg(long, default_value_t = wordle_assist::DEFAULT_SUGGESTIONS)]
    top: usize,

    /// Guesses allowed in simulated games
    #[arg(long, default_value_t = wordle_assist::DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the opening suggestions and exit
    Suggest,
    /// Simulate a game against a known target word
    Solve { target: String },
    /// Play every corpus word as a target and report the guess distribution
    Bench,
}

impl Args {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            word_length: self.length,
            suggestions: self.top,
            max_rounds: self.max_rounds,
        }
    }

    fn load_corpus(&self) -> Result<FrequencyCorpus> {
        let corpus = match &self.corpus {
            Some(path) => FrequencyCorpus::load(path, self.length)
                .with_context(|| format!("loading corpus from {}", path.display()))?,
            None => load_sample_corpus(self.length).context("loading built-in corpus")?,
        };
        if corpus.is_empty() {
            bail!("the corpus has no {}-letter words", self.length);
        }
        Ok(corpus)
    }
}

fn print_suggestions(suggestions: &[Suggestion]) {
    println!("{:>4} {:>10} {:>8}", "#", "Word", "Score");
    println!("{}", "-".repeat(24));
    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "{:>4} {:>10} {:>8.3}",
            i + 1,
            s.word.as_str().to_uppercase(),
            s.score
        );
    }
}

/// Read one trimmed, lowercased line. `None` on end of input.
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush().context("flushing stdout")?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).context("reading stdin")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

/// Ask for the guess that was played. Blank means the top suggestion.
fn read_guess(config: &SolverConfig, top: &Word) -> Result<Option<Word>> {
    loop {
        let Some(input) = prompt("Enter used guess (blank for the top suggestion) -> ")? else {
            return Ok(None);
        };
        if input == DONE {
            return Ok(None);
        }
        if input.is_empty() {
            return Ok(Some(top.clone()));
        }
        match Word::parse_with_length(&input, config.word_length) {
            Ok(word) => return Ok(Some(word)),
            Err(e) => println!("{}", e),
        }
    }
}

fn read_feedback(config: &SolverConfig) -> Result<Option<Feedback>> {
    loop {
        let Some(input) = prompt("Enter result -> ")? else {
            return Ok(None);
        };
        if input == DONE {
            return Ok(None);
        }
        match Feedback::from_keystrokes(&input, config.word_length) {
            Ok(feedback) => return Ok(Some(feedback)),
            Err(e) => println!("{}", e),
        }
    }
}

fn run_interactive(corpus: &FrequencyCorpus, config: &SolverConfig) -> Result<()> {
    println!("{}", BANNER_TEXT);
    println!("Loaded {} words.", corpus.len());
    println!();

    let mut round = Round::initial(corpus);

    loop {
        if round.remaining_count() == 0 {
            println!("No words match the feedback so far.");
            break;
        }

        let suggestions = round.suggest(corpus, config.suggestions)?;
        println!("Round {}", round.number());
        println!("Possible answers: {}", round.remaining_count());
        print_suggestions(&suggestions);
        println!();

        let top = &suggestions[0].word;
        let Some(guess) = read_guess(config, top)? else {
            break;
        };
        let Some(feedback) = read_feedback(config)? else {
            break;
        };

        println!("{} {}", guess.as_str().to_uppercase(), feedback.to_emoji_string());
        if feedback.is_win() {
            println!("Solved in {} guesses!", round.number());
            break;
        }

        round = round.advance(&guess, &feedback)?;
        println!();
    }

    println!("Goodbye!");
    Ok(())
}

fn run_solve(corpus: &FrequencyCorpus, config: &SolverConfig, target: &str) -> Result<()> {
    let target = Word::parse_with_length(target, config.word_length)?;
    if !corpus.contains(&target) {
        log::warn!("'{}' is not in the corpus; the game cannot be won", target);
    }

    println!("Solving for: {}", target.as_str().to_uppercase());
    println!();

    let outcome = solve_for_target(corpus, config, &target)?;
    for (i, (guess, feedback)) in outcome.guesses.iter().enumerate() {
        println!(
            "Guess {}: {} → {}",
            i + 1,
            guess.as_str().to_uppercase(),
            feedback.to_emoji_string()
        );
    }

    println!();
    if outcome.solved {
        println!("Solved in {} guesses.", outcome.guesses.len());
    } else {
        println!("Failed to solve within {} guesses.", config.max_rounds);
    }
    Ok(())
}

fn run_bench(corpus: &FrequencyCorpus, config: &SolverConfig) -> Result<()> {
    println!("Running benchmark on all {} words...", corpus.len());

    let start = std::time::Instant::now();
    let report = benchmark(corpus, config)?;
    let elapsed = start.elapsed();

    let total = report.total();
    println!();
    println!("Guess distribution:");
    for (guesses, count) in &report.distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", report.average_guesses());
    println!("Total words: {}", total);
    println!("Time elapsed: {:.2?}", elapsed);

    if report.failures.is_empty() {
        println!("All words solved within {} guesses.", config.max_rounds);
    } else {
        println!(
            "Words not solved in {} guesses: {}",
            config.max_rounds,
            report.failures.len()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.config();
    config.validate()?;
    let corpus = args.load_corpus()?;

    match &args.command {
        None => run_interactive(&corpus, &config),
        Some(Command::Suggest) => {
            let round = Round::initial(&corpus);
            print_suggestions(&round.suggest(&corpus, config.suggestions)?);
            Ok(())
        }
        Some(Command::Solve { target }) => run_solve(&corpus, &config, target),
        Some(Command::Bench) => run_bench(&corpus, &config),
    }
}
