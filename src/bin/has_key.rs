//! has_key: answer dictionary membership queries from standard input.
//!
//! Loads a dictionary (one word per line), then reads one query per line
//! from standard input and prints `YES` or `NO` for each, until the
//! sentinel token (`exit` by default) or end of input.
//!
//! # Usage
//!
//! ```bash
//! printf 'apple\nap\nexit\n' | has_key words.txt
//! RUST_LOG=radixdict=debug has_key --dump words.txt
//! ```
//!
//! Exit codes: `1` bad arguments, `2` dictionary could not be loaded,
//! `3` queries could not be read.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use radixdict::radix::owned::Dictionary;
use radixdict::radix::TrieOptions;
use radixdict::session::{run_session, DEFAULT_SENTINEL};

#[derive(Parser, Debug)]
#[command(name = "has_key")]
#[command(about = "Answer exact-match dictionary lookups from standard input")]
#[command(version)]
struct Args {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    dictionary: PathBuf,

    /// Query that ends the session
    #[arg(long, env = "HAS_KEY_SENTINEL", default_value = DEFAULT_SENTINEL)]
    sentinel: String,

    /// Refuse to build a trie with more nodes than this
    #[arg(long, env = "HAS_KEY_MAX_NODES")]
    max_nodes: Option<usize>,

    /// Print the trie to standard error after loading
    #[arg(long, default_value = "false")]
    dump: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let usage_error = err.use_stderr();
            let _ = err.print();
            return if usage_error {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let options = TrieOptions {
        max_nodes: args.max_nodes,
    };
    let dict = match Dictionary::load_with(&args.dictionary, options) {
        Ok(dict) => dict,
        Err(err) => {
            tracing::debug!(error = ?err, "failed to load dictionary");
            eprintln!("Failed to load dictionary from file: {err}");
            return ExitCode::from(2);
        }
    };
    tracing::info!(
        path = %args.dictionary.display(),
        words = dict.word_count(),
        nodes = dict.node_count(),
        "dictionary loaded"
    );

    if args.dump {
        eprint!("{}", dict.dump());
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    match run_session(&dict, stdin, stdout, &args.sentinel) {
        Ok(stats) => {
            tracing::info!(queries = stats.queries, hits = stats.hits, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "failed to answer queries");
            eprintln!("Failed to read query from stdin: {err}");
            ExitCode::from(3)
        }
    }
}
