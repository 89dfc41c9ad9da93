// src/main.rs

//! Announcer CLI entry point.
//!
//! One invocation is one run: load posted IDs, fetch the feed, post
//! anything new to the webhook, persist the updated ID window. Scheduling
//! (cron, systemd timer, CI trigger) lives outside this process.

use clap::Parser;
use env_logger::Env;

use announcer::config::Endpoints;
use announcer::error::Result;
use announcer::models::Config;
use announcer::pipeline;
use announcer::services::{FeedClient, WebhookClient};
use announcer::storage::FileStore;
use announcer::utils::{RetryPolicy, RetryingClient};

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(
    name = "announcer",
    version,
    about = "Announces new Minecraft.net news articles to a Discord webhook"
)]
struct Cli {
    /// Path to the TOML config file (defaults are used if absent)
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the posted-ID state file path
    #[arg(long)]
    state_file: Option<String>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let mut config = Config::load_or_default(&cli.config);
    if let Some(path) = cli.state_file {
        config.state.file = path;
    }
    config.validate()?;

    let endpoints = Endpoints::from_env()?;

    let client = RetryingClient::new(&config.http, RetryPolicy::new(&config.retry))?;
    let feed = FeedClient::new(client.clone(), endpoints.feed_url, config.site.origin);
    let publisher = WebhookClient::new(client, endpoints.webhook_url, config.webhook.username);
    let store = FileStore::new(&config.state.file);

    let summary = pipeline::run(&feed, &publisher, &store).await?;

    log::info!(
        "Run complete: {} articles in feed, {} posted ({:.1}s)",
        summary.fetched,
        summary.posted,
        (summary.finished_at - summary.started_at).num_milliseconds() as f64 / 1000.0
    );

    Ok(())
}
