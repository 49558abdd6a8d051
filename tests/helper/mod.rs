//! Shared test utilities

mod source;

pub use source::{Page, ScriptedSource};
