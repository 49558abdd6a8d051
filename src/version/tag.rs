//! Release-tag normalization and parsing

use semver::Version;
use thiserror::Error;

/// A release tag that does not normalize to a full semantic version.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid release tag: {0}")]
pub struct InvalidTag(pub String);

/// Strips a single leading `v` from a tag, e.g. "v1.8.0" -> "1.8.0".
pub fn strip_v_prefix(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Parses a raw release tag into a version.
///
/// One leading `v` is stripped before parsing. Partial versions ("1.2") and
/// non-numeric components are rejected; callers skip such tags rather than
/// abort the fetch.
pub fn parse_tag(tag: &str) -> Result<Version, InvalidTag> {
    Version::parse(strip_v_prefix(tag)).map_err(|_| InvalidTag(tag.to_string()))
}
