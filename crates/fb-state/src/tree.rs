//! Nested comment trees built from a flat, reconciled comment collection.

use std::collections::HashMap;

use fb_core::{CommentId, CommentView};
use tracing::{debug, warn};

use crate::depth::{comment_depth, parent_comment_id};

/// One comment and the replies beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode<'a> {
    pub view: &'a CommentView,
    pub depth: usize,
    pub children: Vec<CommentNode<'a>>,
}

/// Assembles reply trees from `views`, keeping collection order among
/// siblings.
///
/// Comments whose path cannot be placed, and replies whose parent is not in
/// the collection, are left out.
pub fn build_comment_tree(views: &[CommentView]) -> Vec<CommentNode<'_>> {
    let mut depths = HashMap::with_capacity(views.len());
    for view in views {
        match comment_depth(Some(view.comment.path.as_str())) {
            Some(depth) => {
                depths.insert(view.comment.id, depth);
            }
            None => warn!(
                comment_id = %view.comment.id,
                path = %view.comment.path,
                "skipping comment with malformed path"
            ),
        }
    }

    let mut roots = Vec::new();
    let mut children: HashMap<CommentId, Vec<usize>> = HashMap::new();
    for (index, view) in views.iter().enumerate() {
        let Some(&depth) = depths.get(&view.comment.id) else {
            continue;
        };
        if depth == 0 {
            roots.push(index);
            continue;
        }
        match parent_comment_id(&view.comment.path) {
            Some(parent) if depths.contains_key(&parent) => {
                children.entry(parent).or_default().push(index)
            }
            None => warn!(
                comment_id = %view.comment.id,
                path = %view.comment.path,
                "reply path names no parent id, leaving it out of tree"
            ),
            Some(parent) => debug!(
                comment_id = %view.comment.id,
                %parent,
                "parent not loaded, leaving reply out of tree"
            ),
        }
    }

    roots
        .into_iter()
        .map(|index| build_node(views, index, &depths, &children))
        .collect()
}

fn build_node<'a>(
    views: &'a [CommentView],
    index: usize,
    depths: &HashMap<CommentId, usize>,
    children: &HashMap<CommentId, Vec<usize>>,
) -> CommentNode<'a> {
    let view = &views[index];
    let depth = depths.get(&view.comment.id).copied().unwrap_or_default();
    let replies = children
        .get(&view.comment.id)
        .map(|indices| {
            indices
                .iter()
                .map(|&child| build_node(views, child, depths, children))
                .collect()
        })
        .unwrap_or_default();

    CommentNode { view, depth, children: replies }
}
