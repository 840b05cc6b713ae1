//! Vote, ban, nesting and formatting rules as a client renders them.

use chrono::Duration;
use fb_core::time::parse_timestamp;
use fb_core::{CommunityId, CommunityPersonBan, MockClock, PersonId, VoteValue};
use fb_format::{is_image, is_magnet_link, is_video, num_to_si};
use fb_state::{comment_depth, expiry_after_days, is_banned, is_banned_at, next_vote, VoteDirection};
use integration_tests::{person, ts};

#[test]
fn test_vote_table() {
    use VoteDirection::{Downvote, Upvote};

    let cases = [
        (Upvote, VoteValue::None, VoteValue::Up),
        (Upvote, VoteValue::Up, VoteValue::None),
        (Downvote, VoteValue::None, VoteValue::Down),
        (Downvote, VoteValue::Down, VoteValue::None),
        (Upvote, VoteValue::Down, VoteValue::Up),
        (Downvote, VoteValue::Up, VoteValue::Down),
    ];
    for (direction, current, expected) in cases {
        assert_eq!(next_vote(direction, Some(current)), expected, "{direction:?} from {current:?}");
    }
}

#[test]
fn test_ban_boundaries_from_api_strings() {
    let received = Some(parse_timestamp("2024-01-01").unwrap());

    assert!(!is_banned(None, Some(parse_timestamp("2999-01-01").unwrap())));
    assert!(is_banned(received, None));
    assert!(!is_banned(received, Some(parse_timestamp("2020-01-01").unwrap())));
    assert!(is_banned(received, Some(parse_timestamp("2999-01-01").unwrap())));
}

#[test]
fn test_person_ban_lapses_without_an_unban_event() {
    let mut banned = person(9, "mallory");
    banned.banned_at = Some(ts(2024, 1, 1));
    banned.ban_expires = expiry_after_days(ts(2024, 1, 1), Some(7));
    let window = banned.ban_window();

    let mut during = MockClock::new();
    during.expect_now().return_const(ts(2024, 1, 5));
    assert!(is_banned_at(&during, window.received_at, window.expires_at));

    let mut after = MockClock::new();
    after.expect_now().return_const(ts(2024, 1, 8) + Duration::seconds(1));
    assert!(!is_banned_at(&after, window.received_at, window.expires_at));
}

#[test]
fn test_community_ban_window() {
    let ban = CommunityPersonBan {
        community_id: CommunityId(1),
        person_id: PersonId(9),
        published: ts(2024, 1, 1),
        expires: None,
    };
    let window = ban.ban_window();

    let mut clock = MockClock::new();
    clock.expect_now().never();
    assert!(is_banned_at(&clock, window.received_at, window.expires_at));
}

#[test]
fn test_unbanned_person() {
    let window = person(1, "alice").ban_window();
    assert!(!is_banned(window.received_at, window.expires_at));
}

#[test]
fn test_depth_from_paths() {
    assert_eq!(comment_depth(None), None);
    assert_eq!(comment_depth(Some("0.10")), Some(0));
    assert_eq!(comment_depth(Some("0.10.11.12.13")), Some(3));
    assert_eq!(comment_depth(Some("0.3000000000.3000000001")), Some(1));
}

#[test]
fn test_link_sniffing_and_counts() {
    assert!(is_image("https://pics.example/a.gif"));
    assert!(is_video("https://pics.example/a.mp4"));
    assert!(!is_video("https://pics.example/a.gif"));
    assert!(is_magnet_link("magnet:?xt=urn:btih:0123456789abcdef0123456789abcdef01234567"));
    assert_eq!(num_to_si(12_345), "12.3K");
}
