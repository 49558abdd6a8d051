//! Paginated fetch driver with bounded early termination

use std::cmp::Ordering;

use semver::Version;
use tracing::{debug, warn};

use crate::config::FetchOptions;
use crate::release::error::SourceError;
use crate::release::source::ReleaseSource;
use crate::spec::RepoSpec;
use crate::version::select::latest_per_minor;
use crate::version::tag::parse_tag;

/// Drives a [`ReleaseSource`] page by page and selects the latest version of
/// each qualifying minor line.
pub struct Fetcher<S> {
    source: S,
    options: FetchOptions,
}

impl<S: ReleaseSource> Fetcher<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, FetchOptions::default())
    }

    pub fn with_options(source: S, options: FetchOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolves one repository spec to its descending per-minor-line result.
    ///
    /// Pages are requested in order starting at 1. Fetching stops as soon as
    /// one of these holds:
    /// - a page contained a valid version at or below the floor (later pages
    ///   cannot add a qualifying version, assuming the source lists releases
    ///   newest-first),
    /// - the source returned an empty page,
    /// - the page cap was reached,
    /// - the source failed after at least one page was read.
    ///
    /// Invalid tags are skipped with a warning. A source error on the very
    /// first page is propagated; the batch caller decides what to do with it.
    pub async fn resolve(&self, spec: &RepoSpec) -> Result<Vec<Version>, SourceError> {
        let mut collected: Vec<Version> = Vec::new();
        let mut pages_read = 0u32;

        for page in 1..=self.options.max_pages {
            let tags = match self
                .source
                .list_page(&spec.owner, &spec.repo, page, self.options.page_size)
                .await
            {
                Ok(tags) => tags,
                Err(err) if pages_read == 0 => return Err(err),
                Err(err) => {
                    warn!(
                        "{}: page {} failed, selecting from versions fetched so far: {}",
                        spec.full_name(),
                        page,
                        err
                    );
                    break;
                }
            };
            pages_read += 1;

            if tags.is_empty() {
                debug!("{}: releases exhausted at page {}", spec.full_name(), page);
                break;
            }

            let mut floor_reached = false;
            for tag in &tags {
                match parse_tag(tag) {
                    Ok(version) => {
                        if version.cmp_precedence(&spec.floor) != Ordering::Greater {
                            floor_reached = true;
                        }
                        collected.push(version);
                    }
                    Err(err) => warn!("{}: skipping tag: {}", spec.full_name(), err),
                }
            }

            if floor_reached {
                debug!(
                    "{}: floor {} reached on page {}",
                    spec.full_name(),
                    spec.floor,
                    page
                );
                break;
            }

            if page == self.options.max_pages {
                debug!(
                    "{}: page cap ({}) reached before floor {}",
                    spec.full_name(),
                    self.options.max_pages,
                    spec.floor
                );
            }
        }

        Ok(latest_per_minor(&collected, Some(&spec.floor)))
    }
}
