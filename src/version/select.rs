//! Per-minor-line version selection

use semver::Version;
use std::cmp::Ordering;

/// Returns the highest qualifying version of every major.minor line, in
/// descending order.
///
/// Versions below `floor` are dropped, the rest are sorted descending by
/// semver precedence (pre-releases sort before their release, build metadata
/// is ignored), and a single pass keeps the first version seen for each new
/// (major, minor) line. The globally highest qualifying version is therefore
/// always the first element.
///
/// Returns an empty list when `floor` is absent, `candidates` is empty, or
/// nothing qualifies.
pub fn latest_per_minor(candidates: &[Version], floor: Option<&Version>) -> Vec<Version> {
    let Some(floor) = floor else {
        return Vec::new();
    };

    let mut qualifying: Vec<&Version> = candidates
        .iter()
        .filter(|v| v.cmp_precedence(floor) != Ordering::Less)
        .collect();
    qualifying.sort_unstable_by(|a, b| b.cmp_precedence(a));

    let mut selected: Vec<Version> = Vec::new();
    let mut line: Option<(u64, u64)> = None;
    for version in qualifying {
        match line {
            None => {
                line = Some((version.major, version.minor));
                selected.push(version.clone());
            }
            Some((max_major, _)) if version.major < max_major => {
                // New major line: reset both trackers.
                line = Some((version.major, version.minor));
                selected.push(version.clone());
            }
            Some((max_major, max_minor)) if version.minor < max_minor => {
                line = Some((max_major, version.minor));
                selected.push(version.clone());
            }
            // Same major and an already-represented (or higher) minor.
            Some(_) => {}
        }
    }

    selected
}
