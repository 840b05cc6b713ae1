//! Identity resolution for untyped (JSON) views.
//!
//! Typed views carry their identity through `fb_core::Identified`; this
//! module covers views that are still `serde_json::Value`, where the tag is
//! the only thing saying which nested object holds the id.

use fb_core::{AppError, DomainTag, Result};
use serde_json::Value;

/// Returns the integer id nested at `<tag>.id` in `view`.
pub fn resolve_id(tag: DomainTag, view: &Value) -> Result<i64> {
    let field = tag.as_str();
    view.get(field)
        .and_then(|entity| entity.get("id"))
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::MissingIdentity {
            tag: tag.to_string(),
            path: format!("{field}.id"),
        })
}

/// Same as [`resolve_id`] for a tag still in its string form.
pub fn resolve_id_str(tag: &str, view: &Value) -> Result<i64> {
    resolve_id(tag.parse()?, view)
}
