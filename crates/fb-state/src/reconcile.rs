//! # List Reconciler
//!
//! Merges a single incoming view into a cached, ordered collection of views
//! of the same type. A view whose identity is already cached replaces that
//! entry at the same index; any other view is appended. The cached slice is
//! never touched: every call hands back a fresh `Vec`, so callers can detect
//! change by reference.
//!
//! There is no delete branch. A removed or deleted entity arrives as an
//! ordinary view and replaces its predecessor; renderers drop it through
//! [`visible`].

use std::fmt::Debug;

use fb_core::{DomainTag, Identified, Result, Tombstoned};
use serde_json::Value;
use tracing::{debug, trace};

use crate::identity::resolve_id;

/// Reconciles `incoming` into `existing`, identifying views through `key`.
pub fn reconcile_by<V, K, F>(incoming: V, existing: &[V], key: F) -> Vec<V>
where
    V: Clone,
    K: PartialEq + Debug,
    F: Fn(&V) -> K,
{
    let mut next = Vec::with_capacity(existing.len() + 1);
    next.extend_from_slice(existing);
    merge_into(&mut next, incoming, &key);
    next
}

/// Reconciles a typed view, using its own identity.
pub fn reconcile<V>(incoming: V, existing: &[V]) -> Vec<V>
where
    V: Identified + Clone,
{
    trace!(tag = %V::TAG, "reconciling typed view");
    reconcile_by(incoming, existing, V::key)
}

/// Reconciles a batch of views (a fetched page, a replay of live updates)
/// in arrival order. Equivalent to folding [`reconcile`] over `incoming`.
pub fn reconcile_all<V, I>(incoming: I, existing: &[V]) -> Vec<V>
where
    V: Identified + Clone,
    I: IntoIterator<Item = V>,
{
    let mut next = existing.to_vec();
    let mut merged = 0usize;
    for view in incoming {
        merge_into(&mut next, view, &V::key);
        merged += 1;
    }
    debug!(tag = %V::TAG, merged, before = existing.len(), after = next.len(), "reconciled batch");
    next
}

/// Reconciles an untyped view, resolving identity through `tag`.
///
/// Fails only if the incoming view has no integer id under `<tag>.id`.
/// Cached views without one never match and stay where they are.
pub fn reconcile_value(tag: DomainTag, incoming: Value, existing: &[Value]) -> Result<Vec<Value>> {
    let incoming_id = resolve_id(tag, &incoming)?;
    trace!(%tag, id = incoming_id, "reconciling untyped view");

    let key = |view: &Value| match resolve_id(tag, view) {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(%tag, %err, "cached view has no identity, treating as non-match");
            None
        }
    };

    let mut next = Vec::with_capacity(existing.len() + 1);
    next.extend_from_slice(existing);
    merge_into(&mut next, incoming, &key);
    Ok(next)
}

/// Iterates the views a renderer should show, skipping tombstones.
pub fn visible<V: Tombstoned>(collection: &[V]) -> impl Iterator<Item = &V> {
    collection.iter().filter(|view| !view.is_tombstoned())
}

fn merge_into<V, K, F>(next: &mut Vec<V>, incoming: V, key: &F)
where
    K: PartialEq + Debug,
    F: Fn(&V) -> K,
{
    let incoming_key = key(&incoming);
    match next.iter().position(|cached| key(cached) == incoming_key) {
        Some(index) => {
            trace!(key = ?incoming_key, index, "replacing cached view");
            next[index] = incoming;
        }
        None => {
            trace!(key = ?incoming_key, index = next.len(), "appending view");
            next.push(incoming);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_core::AppError;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        score: i64,
        deleted: bool,
    }

    impl Identified for Item {
        type Key = u32;
        const TAG: DomainTag = DomainTag::Post;

        fn key(&self) -> u32 {
            self.id
        }
    }

    impl Tombstoned for Item {
        fn is_tombstoned(&self) -> bool {
            self.deleted
        }
    }

    fn item(id: u32, score: i64) -> Item {
        Item { id, score, deleted: false }
    }

    #[test]
    fn test_appends_unknown_view() {
        let cached = vec![item(1, 0), item(2, 0)];
        let next = reconcile(item(3, 0), &cached);

        assert_eq!(next, vec![item(1, 0), item(2, 0), item(3, 0)]);
        assert_eq!(cached.len(), 2);
    }

    #[test]
    fn test_replaces_known_view_in_place() {
        let cached = vec![item(1, 0), item(2, 0), item(3, 0)];
        let next = reconcile(item(2, 99), &cached);

        assert_eq!(next, vec![item(1, 0), item(2, 99), item(3, 0)]);
        assert_eq!(cached[1], item(2, 0));
    }

    #[test]
    fn test_into_empty_collection() {
        assert_eq!(reconcile(item(7, 1), &[]), vec![item(7, 1)]);
    }

    #[test]
    fn test_custom_key_extractor() {
        // newest-first feed keyed by score; order is the caller's, not ours
        let cached = vec![item(10, 3), item(11, 2)];
        let next = reconcile_by(item(12, 2), &cached, |v| v.score);
        assert_eq!(next, vec![item(10, 3), item(12, 2)]);
    }

    #[test]
    fn test_batch_matches_fold() {
        let cached = vec![item(1, 0), item(2, 0)];
        let page = vec![item(3, 0), item(1, 5), item(3, 8)];

        let folded = page
            .iter()
            .cloned()
            .fold(cached.clone(), |acc, view| reconcile(view, &acc));

        assert_eq!(reconcile_all(page, &cached), folded);
        assert_eq!(folded, vec![item(1, 5), item(2, 0), item(3, 8)]);
    }

    #[test]
    fn test_deleted_view_is_kept_but_hidden() {
        let cached = vec![item(1, 0), item(2, 0)];
        let gone = Item { deleted: true, ..item(1, 0) };
        let next = reconcile(gone, &cached);

        assert_eq!(next.len(), 2);
        assert!(next[0].deleted);
        let shown: Vec<u32> = visible(&next).map(|v| v.id).collect();
        assert_eq!(shown, vec![2]);
    }

    #[test]
    fn test_untyped_views() {
        let cached = vec![
            json!({ "community": { "id": 1, "name": "rust" } }),
            json!({ "community": { "id": 2, "name": "go" } }),
        ];

        let renamed = json!({ "community": { "id": 2, "name": "golang" } });
        let next = reconcile_value(DomainTag::Community, renamed.clone(), &cached).unwrap();
        assert_eq!(next, vec![cached[0].clone(), renamed]);

        let fresh = json!({ "community": { "id": 3, "name": "zig" } });
        let next = reconcile_value(DomainTag::Community, fresh.clone(), &next).unwrap();
        assert_eq!(next.len(), 3);
        assert_eq!(next[2], fresh);
    }

    #[test]
    fn test_cached_view_without_identity_never_matches() {
        let good = json!({ "post": { "id": 1, "name": "old" } });
        let bad = json!({ "post": { "name": "no id" } });
        let incoming = json!({ "post": { "id": 1, "name": "new" } });

        let forward = reconcile_value(DomainTag::Post, incoming.clone(), &[good.clone(), bad.clone()])
            .unwrap();
        assert_eq!(forward, vec![incoming.clone(), bad.clone()]);

        let reversed = reconcile_value(DomainTag::Post, incoming.clone(), &[bad.clone(), good])
            .unwrap();
        assert_eq!(reversed, vec![bad.clone(), incoming.clone()]);

        let fresh = json!({ "post": { "id": 2 } });
        let appended = reconcile_value(DomainTag::Post, fresh.clone(), &[bad.clone()]).unwrap();
        assert_eq!(appended, vec![bad, fresh]);
    }

    #[test]
    fn test_untyped_view_without_identity_fails() {
        let cached = vec![json!({ "post": { "id": 1 } })];
        let err = reconcile_value(DomainTag::Post, json!({ "comment": { "id": 1 } }), &cached)
            .unwrap_err();
        assert!(matches!(err, AppError::MissingIdentity { .. }));
    }
}
