//! Release listing layer
//!
//! # Modules
//!
//! - [`source`]: Trait for paginated release listing, mockable in tests
//! - [`github`]: GitHub Releases API implementation
//! - [`error`]: Source error classification

pub mod error;
pub mod github;
pub mod source;
