//! Vote toggling.
//!
//! Pressing the direction already voted cancels the vote; pressing the
//! other direction flips it fully. There is no intermediate state.

use fb_core::VoteValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteDirection {
    Upvote,
    Downvote,
}

/// The vote to send after the viewer presses `direction`.
pub fn next_vote(direction: VoteDirection, current: Option<VoteValue>) -> VoteValue {
    let current = current.unwrap_or_default();
    match (direction, current) {
        (VoteDirection::Upvote, VoteValue::Up) => VoteValue::None,
        (VoteDirection::Upvote, _) => VoteValue::Up,
        (VoteDirection::Downvote, VoteValue::Down) => VoteValue::None,
        (VoteDirection::Downvote, _) => VoteValue::Down,
    }
}
