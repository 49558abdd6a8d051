//! Output-line formatting

use semver::Version;

/// Renders a result line for one repository.
///
/// The version list is bracketed and space-separated, e.g.
/// `latest versions of kubernetes/kubernetes: [1.10.1 1.9.6 1.8.11]`.
/// An empty result renders as `[]`.
pub fn result_line(full_name: &str, versions: &[Version]) -> String {
    let rendered: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
    format!(
        "latest versions of {}: [{}]",
        full_name,
        rendered.join(" ")
    )
}
