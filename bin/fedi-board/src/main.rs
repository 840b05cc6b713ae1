//! # fedi-board
//!
//! Command-line front end over the client state rules: replay server views
//! into a cached collection and evaluate vote, ban and nesting state.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fb_config::{AppConfig, LogConfig, LogFormat};
use fb_core::DomainTag;
use fb_state::VoteDirection;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fedi-board", version, about = "Client-side view state for federated discussion boards")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Merge a JSON-lines stream of views into a cached JSON array
    Reconcile {
        /// View type: comment, comment_reply, comment_report, community,
        /// person_mention, post, post_report, private_message
        #[arg(long)]
        tag: DomainTag,
        #[arg(long)]
        collection: PathBuf,
        #[arg(long)]
        incoming: PathBuf,
    },
    /// Vote to send after pressing an arrow
    Vote {
        #[arg(long, value_enum)]
        direction: Direction,
        #[arg(long, allow_negative_numbers = true)]
        current: Option<i64>,
    },
    /// Whether a ban is in force now
    BanStatus {
        #[arg(long)]
        received_at: Option<String>,
        #[arg(long)]
        expires_at: Option<String>,
    },
    /// Nesting depth of a comment path
    Depth {
        #[arg(long)]
        path: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Up,
    Down,
}

impl From<Direction> for VoteDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => VoteDirection::Upvote,
            Direction::Down => VoteDirection::Downvote,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load().context("loading configuration")?;
    init_tracing(&config.log);

    let output = match cli.command {
        Command::Reconcile { tag, collection, incoming } => {
            let cached = std::fs::read_to_string(&collection)
                .with_context(|| format!("reading {}", collection.display()))?;
            let updates = std::fs::read_to_string(&incoming)
                .with_context(|| format!("reading {}", incoming.display()))?;
            commands::reconcile(tag, &cached, &updates)?
        }
        Command::Vote { direction, current } => commands::vote(direction.into(), current)?,
        Command::BanStatus { received_at, expires_at } => {
            commands::ban_status(received_at.as_deref(), expires_at.as_deref())?
        }
        Command::Depth { path } => commands::depth(path.as_deref()),
    };

    let rendered = if config.output.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match log.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
