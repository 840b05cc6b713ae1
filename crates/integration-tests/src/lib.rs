//! Shared fixtures for the cross-crate test suites.
//!
//! Builders produce minimal but well-formed views; tests override the
//! fields they care about with struct update syntax.

use chrono::{DateTime, TimeZone, Utc};
use fb_core::{
    Comment, CommentAggregates, CommentId, CommentView, Community, CommunityAggregates,
    CommunityId, CommunityView, Person, PersonId, Post, PostAggregates, PostId, PostView,
    SubscribedType,
};

pub fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn person(id: i32, name: &str) -> Person {
    Person {
        id: PersonId(id),
        name: name.to_string(),
        display_name: None,
        avatar: None,
        banned_at: None,
        ban_expires: None,
        deleted: false,
        bot_account: false,
        published: ts(2023, 1, 1),
    }
}

pub fn community(id: i32, name: &str) -> Community {
    Community {
        id: CommunityId(id),
        name: name.to_string(),
        title: name.to_uppercase(),
        description: None,
        removed: false,
        deleted: false,
        nsfw: false,
        local: true,
        published: ts(2022, 6, 1),
    }
}

pub fn post(id: i32, name: &str) -> Post {
    Post {
        id: PostId(id),
        name: name.to_string(),
        url: None,
        body: None,
        creator_id: PersonId(1),
        community_id: CommunityId(1),
        removed: false,
        deleted: false,
        locked: false,
        nsfw: false,
        featured_community: false,
        published: ts(2024, 1, 1),
        updated: None,
    }
}

pub fn post_view(id: i32, score: i64) -> PostView {
    PostView {
        post: post(id, &format!("post {id}")),
        creator: person(1, "alice"),
        community: community(1, "rust"),
        counts: PostAggregates { score, upvotes: score.max(0), ..Default::default() },
        creator_banned_from_community: false,
        saved: false,
        read: false,
        my_vote: None,
    }
}

pub fn community_view(id: i32, name: &str) -> CommunityView {
    CommunityView {
        community: community(id, name),
        subscribed: SubscribedType::NotSubscribed,
        blocked: false,
        counts: CommunityAggregates::default(),
    }
}

pub fn comment_view(id: i32, path: &str) -> CommentView {
    CommentView {
        comment: Comment {
            id: CommentId(id),
            creator_id: PersonId(1),
            post_id: PostId(1),
            content: format!("comment {id}"),
            removed: false,
            deleted: false,
            distinguished: false,
            published: ts(2024, 1, 2),
            updated: None,
            path: path.to_string(),
        },
        creator: person(1, "alice"),
        post: post(1, "thread"),
        community: community(1, "rust"),
        counts: CommentAggregates::default(),
        creator_banned_from_community: false,
        saved: false,
        my_vote: None,
    }
}
