//! Rednote CLI - generate viral marketing copy for a product.

use clap::Parser;
use rednote::{DEFAULT_MAX_ITERATIONS, LoopResult, NoteAgent, render};
use rednote_models::{DEFAULT_BASE_URL, DeepSeekClient};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the note generator.
#[derive(Parser, Debug)]
#[command(name = "rednote")]
#[command(about = "Generate viral marketing copy with a DeepSeek model")]
#[command(version)]
struct Args {
    /// Product or subject to write about
    subject: String,

    /// Tone and style of the copy
    #[arg(short, long, default_value = "playful and sweet")]
    style: String,

    /// Cap on remote calls before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    /// Model identifier
    #[arg(short, long, default_value = "deepseek-r1:8b")]
    model: String,

    /// Base URL of the chat completions endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!(subject = %args.subject, style = %args.style, "Starting note generation");

    let mut client = DeepSeekClient::from_env(args.model.as_str(), args.base_url.as_str())?;
    if let Some(secs) = args.timeout_secs {
        client = client.with_timeout(Duration::from_secs(secs))?;
    }

    let agent = NoteAgent::new(client).with_max_iterations(args.max_iterations);

    match agent.generate(&args.subject, &args.style).await {
        LoopResult::Success(note) => {
            println!("{}", render(&note));
            Ok(())
        }
        LoopResult::Exhausted => {
            eprintln!("Failed to generate a note: the model never produced a well-formed draft.");
            std::process::exit(1);
        }
        LoopResult::Aborted(e) => {
            eprintln!("Failed to generate a note: the model endpoint was unreachable.");
            Err(e.into())
        }
    }
}
