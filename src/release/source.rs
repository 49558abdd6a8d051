//! Release source trait for listing repository releases page by page

#[cfg(test)]
use mockall::automock;

use crate::release::error::SourceError;

/// Trait for listing release tags of a repository, one page at a time.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches one page of release tags for `owner/repo`.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `per_page` - number of releases per page
    ///
    /// # Returns
    /// * `Ok(tags)` - raw tag names, newest release first; empty when the
    ///   repository has no further releases
    /// * `Err(SourceError)` - if the fetch fails
    async fn list_page(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<String>, SourceError>;
}
