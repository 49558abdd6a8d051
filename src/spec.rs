//! Input-line parsing into repository specs

use semver::Version;
use thiserror::Error;

use crate::version::tag::strip_v_prefix;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("missing owner/repo separator")]
    MissingRepoSeparator,

    #[error("missing version separator")]
    MissingVersionSeparator,

    #[error("invalid version string")]
    InvalidVersion,
}

/// One parsed input line: `owner/repo,min-version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub owner: String,
    pub repo: String,
    /// Minimum acceptable version; results must be >= it.
    pub floor: Version,
}

impl RepoSpec {
    /// Parses a line of the form `owner/repo,version`, where the version may
    /// carry a leading `v`. Fails without producing a partial spec.
    pub fn parse(line: &str) -> Result<Self, SpecError> {
        let (owner, rest) = line
            .split_once('/')
            .ok_or(SpecError::MissingRepoSeparator)?;
        let (repo, floor) = rest
            .split_once(',')
            .ok_or(SpecError::MissingVersionSeparator)?;

        let floor =
            Version::parse(strip_v_prefix(floor)).map_err(|_| SpecError::InvalidVersion)?;

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            floor,
        })
    }

    /// The `owner/repo` form used in output and request paths.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
