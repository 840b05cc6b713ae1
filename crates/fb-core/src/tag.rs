//! # Domain Tags
//!
//! The closed set of view types the client caches and reconciles.
//! Each tag doubles as the name of the field that holds the view's entity,
//! e.g. a `comment_report` view keeps its id under `comment_report.id`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainTag {
    Comment,
    CommentReply,
    CommentReport,
    Community,
    PersonMention,
    Post,
    PostReport,
    PrivateMessage,
}

impl DomainTag {
    pub const ALL: [DomainTag; 8] = [
        DomainTag::Comment,
        DomainTag::CommentReply,
        DomainTag::CommentReport,
        DomainTag::Community,
        DomainTag::PersonMention,
        DomainTag::Post,
        DomainTag::PostReport,
        DomainTag::PrivateMessage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DomainTag::Comment => "comment",
            DomainTag::CommentReply => "comment_reply",
            DomainTag::CommentReport => "comment_report",
            DomainTag::Community => "community",
            DomainTag::PersonMention => "person_mention",
            DomainTag::Post => "post",
            DomainTag::PostReport => "post_report",
            DomainTag::PrivateMessage => "private_message",
        }
    }
}

impl fmt::Display for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainTag {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| AppError::UnknownDomainTag(s.to_string()))
    }
}
