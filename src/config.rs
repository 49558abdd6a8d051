// =============================================================================
// Pagination constants
// =============================================================================

/// Number of releases requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Maximum number of pages fetched per repository, bounding API calls even
/// when the floor is never reached.
pub const MAX_PAGES: u32 = 7;

/// Pagination options for the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Releases requested per page.
    pub page_size: u32,
    /// Hard cap on pages fetched for a single repository.
    pub max_pages: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            max_pages: MAX_PAGES,
        }
    }
}
