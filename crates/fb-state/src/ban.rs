//! Ban evaluation.
//!
//! Ban status is derived, never stored: a ban lapses on its own once the
//! clock passes its expiry, so the clock is read on every call.

use chrono::{DateTime, Duration, Utc};
use fb_core::{Clock, SystemClock};

/// Whether a ban received at `received_at` is in force right now.
pub fn is_banned(received_at: Option<DateTime<Utc>>, expires_at: Option<DateTime<Utc>>) -> bool {
    is_banned_at(&SystemClock, received_at, expires_at)
}

/// Same as [`is_banned`] against an injected clock.
pub fn is_banned_at<C: Clock + ?Sized>(
    clock: &C,
    received_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
) -> bool {
    match (received_at, expires_at) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(_), Some(expires)) => expires > clock.now(),
    }
}

/// Expiry for a ban lasting `days` from `now`; `None` or zero means permanent.
pub fn expiry_after_days(now: DateTime<Utc>, days: Option<u32>) -> Option<DateTime<Utc>> {
    match days {
        Some(days) if days > 0 => Some(now + Duration::days(i64::from(days))),
        _ => None,
    }
}
