//! Madison Words - CLI
//!
//! Converts text corpora to word listings and searches them for words made of
//! strictly shorter dictionary words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use madison_words::{
    commands::{FindConfig, VocabularySource, check_word_in, convert_corpus, find_madison_words},
    output::{print_check_result, print_convert_result, print_find_result},
};
use std::path::{Path, PathBuf};
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "madison",
    about = "Find words that decompose into strictly shorter dictionary words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Worker threads for the search (default: one per core)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a text file into a sorted one-word-per-line listing
    Convert {
        /// Plain text input
        input: PathBuf,

        /// Listing to write
        output: PathBuf,
    },

    /// Find every madison word in a vocabulary and print statistics
    Find {
        /// Text file (or listing with --listing)
        path: PathBuf,

        /// Treat PATH as a one-word-per-line listing
        #[arg(short, long)]
        listing: bool,

        /// Write qualifying words here, one per line
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show this many random madison words
        #[arg(short, long, default_value = "0")]
        sample: usize,

        /// List the first N madison words alphabetically
        #[arg(long, default_value = "0")]
        show: usize,
    },

    /// Check whether a single word is madison
    Check {
        /// Word to decompose
        word: String,

        /// Vocabulary file (text, or listing with --listing)
        #[arg(short = 'w', long)]
        vocab: PathBuf,

        /// Treat the vocabulary file as a one-word-per-line listing
        #[arg(short, long)]
        listing: bool,
    },
}

fn source_for(listing: bool) -> VocabularySource {
    if listing {
        VocabularySource::Listing
    } else {
        VocabularySource::Text
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(level, std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();
}

/// `-v` picks the default level; a `RUST_LOG` value, when present, wins
fn log_filter(level: Level, rust_log: Option<String>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure worker threads")?;
        debug!(threads, "configured worker pool");
    }

    match cli.command {
        Commands::Convert { input, output } => run_convert_command(&input, &output),
        Commands::Find {
            path,
            listing,
            output,
            sample,
            show,
        } => {
            let config = FindConfig {
                source: source_for(listing),
                output,
                sample,
                show_progress: true,
                ..FindConfig::new(path)
            };
            run_find_command(&config, show)
        }
        Commands::Check {
            word,
            vocab,
            listing,
        } => run_check_command(&word, &vocab, source_for(listing)),
    }
}

fn run_convert_command(input: &Path, output: &Path) -> Result<()> {
    let result = convert_corpus(input, output)
        .with_context(|| format!("could not convert {}", input.display()))?;
    print_convert_result(&result);
    Ok(())
}

fn run_find_command(config: &FindConfig, show: usize) -> Result<()> {
    println!("Searching {} for madison words...", config.path.display());
    let result = find_madison_words(config).context("madison search failed")?;
    print_find_result(&result, show);
    Ok(())
}

fn run_check_command(word: &str, vocab: &Path, source: VocabularySource) -> Result<()> {
    let result = check_word_in(word, vocab, source)
        .with_context(|| format!("could not load vocabulary from {}", vocab.display()))?;
    print_check_result(&result);
    Ok(())
}
