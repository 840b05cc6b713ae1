//! Subcommand bodies, kept free of I/O so they can be tested directly.

use anyhow::{Context, Result};
use fb_core::time::parse_timestamp;
use fb_core::{DomainTag, VoteValue};
use fb_state::VoteDirection;
use serde_json::Value;
use tracing::info;

/// Replays `updates` (one JSON view per line) into the JSON array `cached`.
pub fn reconcile(tag: DomainTag, cached: &str, updates: &str) -> Result<Value> {
    let mut collection: Vec<Value> =
        serde_json::from_str(cached).context("cached collection must be a JSON array")?;
    let before = collection.len();

    let mut applied = 0usize;
    for (line_no, line) in updates.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let view: Value = serde_json::from_str(line)
            .with_context(|| format!("incoming line {} is not JSON", line_no + 1))?;
        collection = fb_state::reconcile_value(tag, view, &collection)
            .with_context(|| format!("reconciling incoming line {}", line_no + 1))?;
        applied += 1;
    }

    info!(%tag, applied, before, after = collection.len(), "reconciled collection");
    Ok(Value::Array(collection))
}

pub fn vote(direction: VoteDirection, current: Option<i64>) -> Result<Value> {
    let current = current.map(VoteValue::try_from).transpose()?;
    let next = fb_state::next_vote(direction, current);
    Ok(Value::from(next.as_i64()))
}

pub fn ban_status(received_at: Option<&str>, expires_at: Option<&str>) -> Result<Value> {
    let received_at = received_at.map(parse_timestamp).transpose().context("--received-at")?;
    let expires_at = expires_at.map(parse_timestamp).transpose().context("--expires-at")?;
    Ok(Value::Bool(fb_state::is_banned(received_at, expires_at)))
}

pub fn depth(path: Option<&str>) -> Value {
    fb_state::comment_depth(path).map_or(Value::Null, Value::from)
}
