//! # Virtual TA CLI (`vta`)
//!
//! The `vta` binary is the primary interface for the virtual TA. It loads
//! the corpus described by the configuration file and either serves it over
//! HTTP or answers a single question from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! vta --config ./config/vta.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `vta serve` | Start the HTTP question-answering server |
//! | `vta ask "<question>"` | Answer a question once and print the result |
//! | `vta sources` | List corpus sources and their record counts |

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use virtual_ta::answer::{answer_question, AnswerError};
use virtual_ta::config;
use virtual_ta::server;
use virtual_ta::store::CorpusStore;

/// Virtual TA — answers course questions from forum and course-page corpora.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/vta.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "vta",
    about = "Virtual TA — answers course questions from forum and course-page corpora",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/vta.toml`. Corpus paths, the server bind
    /// address, and answer-composition settings are read from this file.
    #[arg(long, global = true, default_value = "./config/vta.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP question-answering server.
    ///
    /// Loads both corpora into memory, then binds the address configured
    /// in `[server].bind` and serves `POST /api/` until terminated.
    Serve,

    /// Answer a question once and print the result.
    ///
    /// Runs the same matching as the HTTP endpoint and prints the composed
    /// answer followed by its source links. Prints the not-found message
    /// when nothing matches.
    Ask {
        /// The question text.
        question: String,
    },

    /// List corpus sources and their record counts.
    ///
    /// Loads both corpora and reports where each came from and how many
    /// records it holds. Useful for verifying configuration before serving.
    Sources,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;
    let store = CorpusStore::load(&cfg)?;

    match cli.command {
        Commands::Serve => {
            server::run_server(&cfg, Arc::new(store)).await?;
        }
        Commands::Ask { question } => match answer_question(&store, &cfg.answer, &question) {
            Ok(result) => {
                println!("{}", result.answer);
                println!();
                println!("Sources:");
                for link in &result.links {
                    if link.text.is_empty() {
                        println!("  - {}", link.url);
                    } else {
                        println!("  - {} ({})", link.url, link.text);
                    }
                }
            }
            Err(err @ AnswerError::NoMatch) => {
                println!("{err}");
            }
        },
        Commands::Sources => {
            println!(
                "discourse  {}  ({} posts)  OK",
                cfg.corpus.posts_path.display(),
                store.posts().len()
            );
            println!(
                "pages      {}  ({} pages)  OK",
                cfg.corpus.pages_dir.display(),
                store.pages().len()
            );
        }
    }

    Ok(())
}
