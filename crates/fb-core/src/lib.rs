//! fedi-board/crates/fb-core/src/lib.rs
//!
//! View models, identity types and ports shared by the fedi-board client core.

pub mod error;
pub mod models;
pub mod tag;
pub mod time;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use tag::DomainTag;
pub use traits::*;
