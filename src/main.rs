use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::{debug, error, info};

use spellbench::bench::{measure, Reference};
use spellbench::config::Config;
use spellbench::lexer::Lexer;
use spellbench::pipeline::{valid_words, Pipeline};
use spellbench::{BackendKind, Dictionary};

/// Compare word list backends on real texts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dictionary file, one or more words per line
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,
    /// Backend to store the dictionary in
    #[arg(short, long, global = true, value_enum)]
    backend: Option<BackendKind>,
    /// Config file, defaults to <config dir>/spellbench/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report unknown words in each text
    Check { texts: Vec<PathBuf> },
    /// Time lookups of every valid word in each text
    Bench {
        texts: Vec<PathBuf>,
        #[arg(short, long)]
        iterations: Option<usize>,
        /// Backends to compare, all of them when omitted
        #[arg(long = "compare", value_enum)]
        compare: Vec<BackendKind>,
    },
    /// Load the dictionary and print the backend's shape
    Stats,
}

fn load(kind: BackendKind, path: &Path) -> Result<Dictionary, Box<dyn Error>> {
    let mut dictionary = Dictionary::new(kind);
    dictionary.load(path)?;
    Ok(dictionary)
}

fn check(dictionary: &Dictionary, texts: &[PathBuf]) -> Result<(), Box<dyn Error>> {
    for path in texts {
        let text = fs::read_to_string(path)?;
        let report = Pipeline::new(dictionary).run(Lexer::new(&text));
        for token in &report.misspelled {
            println!(
                "{}:{}:{} Unknown word {}",
                path.display(),
                token.start.line(),
                token.start.column(),
                token.lexeme
            );
        }
        println!(
            "{}: {} misspelled, {} valid, {} total",
            path.display(),
            report.misspelled.len(),
            report.valid,
            report.total
        );
    }
    Ok(())
}

fn bench(
    dict_path: &Path,
    texts: &[PathBuf],
    kinds: &[BackendKind],
    iterations: usize,
) -> Result<(), Box<dyn Error>> {
    let reference = Reference::load(dict_path)?;
    let mut words_by_text = Vec::new();
    for path in texts {
        words_by_text.push((path, valid_words(&fs::read_to_string(path)?)));
    }

    for &kind in kinds {
        let started = Instant::now();
        let dictionary = load(kind, dict_path)?;
        println!(
            "{kind}: loaded {} words in {:?}",
            dictionary.size(),
            started.elapsed()
        );

        for (path, words) in &words_by_text {
            let baseline = measure(|w| reference.check(w), words, iterations);
            let measured = measure(|w| dictionary.check(w), words, iterations);
            if measured.misspelled != baseline.misspelled {
                error!(
                    "{kind} found {} misspelled words in {}, reference found {}",
                    measured.misspelled,
                    path.display(),
                    baseline.misspelled
                );
            }
            println!(
                "  {}: {:?} ({:.0}% of reference), {} misspelled",
                path.display(),
                measured.elapsed,
                measured.percent_of(&baseline),
                measured.misspelled
            );
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dict) = cli.dict {
        config.dict_path = Some(dict);
    }
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    debug!("{:?}", config);
    let dict_path = config.dictionary()?;

    match cli.command {
        Command::Check { texts } => check(&load(config.backend, &dict_path)?, &texts),
        Command::Bench {
            texts,
            iterations,
            compare,
        } => {
            let kinds = if compare.is_empty() {
                BackendKind::ALL.to_vec()
            } else {
                compare
            };
            let iterations = iterations.unwrap_or(config.iterations);
            bench(&dict_path, &texts, &kinds, iterations)
        }
        Command::Stats => {
            println!("{}", load(config.backend, &dict_path)?.stats());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    info!("Started spellbench");
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
