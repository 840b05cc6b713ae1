//! # Core Traits (Ports)
//!
//! Capabilities the state rules are parameterized over. Typed views plug
//! into the reconciler through `Identified`; the ban evaluator reads time
//! through `Clock` so callers (and tests) decide what "now" is.

use std::fmt::Debug;

use chrono::{DateTime, Utc};

use crate::tag::DomainTag;

/// Identity-extraction contract for a cached view type.
pub trait Identified {
    /// The stable id that makes a view unique within its collection.
    type Key: Copy + Eq + Debug;

    /// The view type this extractor belongs to.
    const TAG: DomainTag;

    fn key(&self) -> Self::Key;
}

/// A view whose entity was removed by a moderator or deleted by its author.
///
/// Reconciliation keeps such views in the collection; renderers skip them.
pub trait Tombstoned {
    fn is_tombstoned(&self) -> bool;
}

/// Wall-clock source.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
