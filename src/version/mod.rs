//! Version layer: tag parsing and per-minor-line selection
//!
//! # Modules
//!
//! - [`tag`]: Release-tag normalization and fallible semver parsing
//! - [`select`]: Pure "latest per major.minor line" selection

pub mod select;
pub mod tag;
