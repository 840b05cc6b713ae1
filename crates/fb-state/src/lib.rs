//! # fb-state
//!
//! Pure state rules over cached server views: incremental reconciliation of
//! view collections, vote toggling, ban evaluation and comment nesting.

pub mod ban;
pub mod depth;
pub mod identity;
pub mod reconcile;
pub mod tree;
pub mod vote;

pub use ban::{expiry_after_days, is_banned, is_banned_at};
pub use depth::{comment_depth, parent_comment_id};
pub use identity::{resolve_id, resolve_id_str};
pub use reconcile::{reconcile, reconcile_all, reconcile_by, reconcile_value, visible};
pub use tree::{build_comment_tree, CommentNode};
pub use vote::{next_vote, VoteDirection};
