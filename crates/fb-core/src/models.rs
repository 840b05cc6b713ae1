//! # View Models
//!
//! Read-side snapshots of the entities a federated discussion server
//! delivers. Every `*View` bundles one primary entity with the context a
//! client needs to render it (creator, community, counts, the viewer's own
//! vote). Views are immutable once received; updates arrive as whole new
//! views and are merged by the reconciler.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::tag::DomainTag;
use crate::traits::{Identified, Tombstoned};

macro_rules! id_newtype {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub i32);

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl From<$name> for i64 {
                fn from(id: $name) -> i64 {
                    i64::from(id.0)
                }
            }
        )+
    };
}

id_newtype!(
    CommentId,
    CommentReplyId,
    CommentReportId,
    CommunityId,
    PersonId,
    PersonMentionId,
    PostId,
    PostReportId,
    PrivateMessageId,
);

/// The viewer's vote on one content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum VoteValue {
    Down,
    #[default]
    None,
    Up,
}

impl VoteValue {
    pub fn as_i64(self) -> i64 {
        match self {
            VoteValue::Down => -1,
            VoteValue::None => 0,
            VoteValue::Up => 1,
        }
    }
}

impl TryFrom<i64> for VoteValue {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(VoteValue::Down),
            0 => Ok(VoteValue::None),
            1 => Ok(VoteValue::Up),
            other => Err(AppError::InvalidVote(other)),
        }
    }
}

impl From<VoteValue> for i64 {
    fn from(vote: VoteValue) -> i64 {
        vote.as_i64()
    }
}

/// Optional ban record: when it was received and when it lapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BanWindow {
    pub received_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

// ── Entities ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Set while a site-wide ban is on record
    #[serde(default)]
    pub banned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ban_expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub bot_account: bool,
    pub published: DateTime<Utc>,
}

impl Person {
    pub fn ban_window(&self) -> BanWindow {
        BanWindow {
            received_at: self.banned_at,
            expires_at: self.ban_expires,
        }
    }
}

/// A person's ban from a single community.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityPersonBan {
    pub community_id: CommunityId,
    pub person_id: PersonId,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
}

impl CommunityPersonBan {
    pub fn ban_window(&self) -> BanWindow {
        BanWindow {
            received_at: Some(self.published),
            expires_at: self.expires,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub local: bool,
    pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub creator_id: PersonId,
    pub community_id: CommunityId,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub featured_community: bool,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub creator_id: PersonId,
    pub post_id: PostId,
    pub content: String,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub distinguished: bool,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    /// Materialized path: "0.<ancestor ids>.<own id>"
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReply {
    pub id: CommentReplyId,
    pub recipient_id: PersonId,
    pub comment_id: CommentId,
    #[serde(default)]
    pub read: bool,
    pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonMention {
    pub id: PersonMentionId,
    pub recipient_id: PersonId,
    pub comment_id: CommentId,
    #[serde(default)]
    pub read: bool,
    pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReport {
    pub id: CommentReportId,
    pub creator_id: PersonId,
    pub comment_id: CommentId,
    pub original_comment_text: String,
    pub reason: String,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub resolver_id: Option<PersonId>,
    pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostReport {
    pub id: PostReportId,
    pub creator_id: PersonId,
    pub post_id: PostId,
    pub original_post_name: String,
    #[serde(default)]
    pub original_post_url: Option<String>,
    #[serde(default)]
    pub original_post_body: Option<String>,
    pub reason: String,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub resolver_id: Option<PersonId>,
    pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateMessage {
    pub id: PrivateMessageId,
    pub creator_id: PersonId,
    pub recipient_id: PersonId,
    pub content: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub read: bool,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

// ── Aggregates ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentAggregates {
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    pub child_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostAggregates {
    pub comments: i64,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityAggregates {
    pub subscribers: i64,
    pub posts: i64,
    pub comments: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubscribedType {
    Subscribed,
    #[default]
    NotSubscribed,
    Pending,
}

// ── Views ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    pub comment: Comment,
    pub creator: Person,
    pub post: Post,
    pub community: Community,
    #[serde(default)]
    pub counts: CommentAggregates,
    #[serde(default)]
    pub creator_banned_from_community: bool,
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub my_vote: Option<VoteValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReplyView {
    pub comment_reply: CommentReply,
    pub comment: Comment,
    pub creator: Person,
    pub post: Post,
    pub community: Community,
    pub recipient: Person,
    #[serde(default)]
    pub counts: CommentAggregates,
    #[serde(default)]
    pub my_vote: Option<VoteValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReportView {
    pub comment_report: CommentReport,
    pub comment: Comment,
    pub post: Post,
    pub community: Community,
    pub creator: Person,
    pub comment_creator: Person,
    #[serde(default)]
    pub counts: CommentAggregates,
    #[serde(default)]
    pub my_vote: Option<VoteValue>,
    #[serde(default)]
    pub resolver: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityView {
    pub community: Community,
    #[serde(default)]
    pub subscribed: SubscribedType,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub counts: CommunityAggregates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonMentionView {
    pub person_mention: PersonMention,
    pub comment: Comment,
    pub creator: Person,
    pub post: Post,
    pub community: Community,
    pub recipient: Person,
    #[serde(default)]
    pub counts: CommentAggregates,
    #[serde(default)]
    pub my_vote: Option<VoteValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    pub post: Post,
    pub creator: Person,
    pub community: Community,
    #[serde(default)]
    pub counts: PostAggregates,
    #[serde(default)]
    pub creator_banned_from_community: bool,
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub my_vote: Option<VoteValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostReportView {
    pub post_report: PostReport,
    pub post: Post,
    pub community: Community,
    pub creator: Person,
    pub post_creator: Person,
    #[serde(default)]
    pub counts: PostAggregates,
    #[serde(default)]
    pub my_vote: Option<VoteValue>,
    #[serde(default)]
    pub resolver: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateMessageView {
    pub private_message: PrivateMessage,
    pub creator: Person,
    pub recipient: Person,
}

// ── Identity ────────────────────────────────────────────────────────────────

macro_rules! identified {
    ($($view:ty => $field:ident : $key:ty, $tag:expr;)+) => {
        $(
            impl Identified for $view {
                type Key = $key;
                const TAG: DomainTag = $tag;

                fn key(&self) -> $key {
                    self.$field.id
                }
            }
        )+
    };
}

identified! {
    CommentView => comment: CommentId, DomainTag::Comment;
    CommentReplyView => comment_reply: CommentReplyId, DomainTag::CommentReply;
    CommentReportView => comment_report: CommentReportId, DomainTag::CommentReport;
    CommunityView => community: CommunityId, DomainTag::Community;
    PersonMentionView => person_mention: PersonMentionId, DomainTag::PersonMention;
    PostView => post: PostId, DomainTag::Post;
    PostReportView => post_report: PostReportId, DomainTag::PostReport;
    PrivateMessageView => private_message: PrivateMessageId, DomainTag::PrivateMessage;
}

// ── Tombstones ──────────────────────────────────────────────────────────────

impl Tombstoned for Comment {
    fn is_tombstoned(&self) -> bool {
        self.removed || self.deleted
    }
}

impl Tombstoned for Post {
    fn is_tombstoned(&self) -> bool {
        self.removed || self.deleted
    }
}

impl Tombstoned for Community {
    fn is_tombstoned(&self) -> bool {
        self.removed || self.deleted
    }
}

impl Tombstoned for CommentView {
    fn is_tombstoned(&self) -> bool {
        self.comment.is_tombstoned()
    }
}

impl Tombstoned for CommentReplyView {
    fn is_tombstoned(&self) -> bool {
        self.comment.is_tombstoned()
    }
}

impl Tombstoned for PersonMentionView {
    fn is_tombstoned(&self) -> bool {
        self.comment.is_tombstoned()
    }
}

impl Tombstoned for PostView {
    fn is_tombstoned(&self) -> bool {
        self.post.is_tombstoned()
    }
}

impl Tombstoned for CommunityView {
    fn is_tombstoned(&self) -> bool {
        self.community.is_tombstoned()
    }
}

impl Tombstoned for PrivateMessageView {
    fn is_tombstoned(&self) -> bool {
        self.private_message.deleted
    }
}

// Reports stay visible to moderators even when the reported content is gone.
impl Tombstoned for CommentReportView {
    fn is_tombstoned(&self) -> bool {
        false
    }
}

impl Tombstoned for PostReportView {
    fn is_tombstoned(&self) -> bool {
        false
    }
}
