//! Core library for release-scout
//!
//! Resolves, for each `owner/repo,min-version` input line, the highest
//! release at or above the floor for every major.minor line that has one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Spec     │────▶│   Fetcher   │────▶│  Selector   │
//! │  (parse)    │     │ (paginate)  │     │ (per-minor) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Release   │
//!                     │   source    │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`spec`]: Input-line parsing into repository specs
//! - [`version`]: Tag parsing and per-minor-line version selection
//! - [`release`]: Release source trait and the GitHub implementation
//! - [`fetcher`]: Page-by-page driver with bounded early termination
//! - [`batch`]: Line-by-line batch loop with continue-on-failure
//! - [`report`]: Output-line formatting
//! - [`config`]: Pagination constants and options

pub mod batch;
pub mod config;
pub mod fetcher;
pub mod release;
pub mod report;
pub mod spec;
pub mod version;
