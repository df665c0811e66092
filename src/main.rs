//! # PMB Assist CLI (`pmb`)
//!
//! Answers one free-text question about new-student admissions (PMB) at
//! Undiksha per invocation.
//!
//! ## Usage
//!
//! ```bash
//! pmb "Where is the Undiksha campus?"
//! pmb --config ./config/pmb.toml "Kapan pendaftaran dibuka?"
//! ```
//!
//! A missing, empty, or whitespace-only topic prints a usage message and
//! exits with code 1 before any backing service is touched. On success the
//! topic and the pipeline's answer are printed and the exit code is 0.

use clap::Parser;
use std::path::PathBuf;

use pmb_assist::config::load_config_or_default;
use pmb_assist::context::AppContext;
use pmb_assist::{Error, Result};

/// PMB Assist — retrieval-augmented answers about Undiksha new-student
/// admissions, powered by a locally hosted LLM.
#[derive(Parser)]
#[command(
    name = "pmb",
    about = "Ask about new-student admissions (PMB) at Undiksha",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// When omitted, `./config/pmb.toml` is used if it exists; otherwise
    /// built-in defaults apply (local Ollama, llama3, nomic-embed-text,
    /// `dataset.pdf`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// The admissions question to answer.
    topic: Option<String>,
}

/// Reject a missing, empty, or whitespace-only topic before any client is
/// constructed.
fn validate_topic(arg: Option<&str>) -> Result<&str> {
    match arg {
        Some(raw) => {
            let topic = raw.trim();
            if topic.is_empty() {
                Err(Error::Usage("Topic is empty.".to_string()))
            } else {
                Ok(topic)
            }
        }
        None => Err(Error::Usage(
            "Please ask something about new-student admissions (PMB) at Undiksha.".to_string(),
        )),
    }
}

fn print_usage() {
    eprintln!("Usage: pmb \"Where is the Undiksha campus?\"");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let topic = match validate_topic(cli.topic.as_deref()) {
        Ok(t) => t.to_string(),
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    let config = load_config_or_default(cli.config.as_deref())?;

    println!("#### Topic ####");
    println!("{}", topic);

    let ctx = AppContext::from_config(config)?;
    let result = ctx.answer(&topic).await?;

    println!();
    println!("#### Result ####");
    println!("{}", result);

    Ok(())
}
