//! Comment nesting derived from materialized paths.
//!
//! A path is the dot-joined chain of ancestor ids behind two fixed root
//! segments, so `"0.12"` is a top-level comment and `"0.12.40"` replies to
//! comment 12. Depth only counts segments; ids are parsed only where one is
//! needed. Malformed paths yield `None`, which callers treat as "cannot be
//! placed", never as depth zero.

use fb_core::CommentId;

const ROOT_SEGMENTS: usize = 2;

/// Nesting depth of the comment at `path`; root comments sit at depth 0.
pub fn comment_depth(path: Option<&str>) -> Option<usize> {
    let segments = split_segments(path?)?;
    segments.len().checked_sub(ROOT_SEGMENTS)
}

/// Id of the comment this one replies to, or `None` for root comments and
/// malformed paths.
pub fn parent_comment_id(path: &str) -> Option<CommentId> {
    let segments = split_segments(path)?;
    if segments.len() <= ROOT_SEGMENTS {
        return None;
    }
    segments[segments.len() - 2].parse().ok().map(CommentId)
}

/// Path segments, or `None` if any segment is empty.
fn split_segments(path: &str) -> Option<Vec<&str>> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments)
}
