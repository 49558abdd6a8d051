//! Release source test utilities

use std::sync::Mutex;

use async_trait::async_trait;

use release_scout::release::error::SourceError;
use release_scout::release::source::ReleaseSource;

/// One scripted page of the fake release source.
pub enum Page {
    Tags(Vec<&'static str>),
    NotFound,
    Transport,
}

/// Release source serving pre-canned pages and recording which pages were
/// requested, so tests can assert the fetcher's laziness.
pub struct ScriptedSource {
    pages: Vec<Page>,
    requested: Mutex<Vec<u32>>,
}

impl ScriptedSource {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Page numbers requested so far, in order.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseSource for ScriptedSource {
    async fn list_page(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        _per_page: u32,
    ) -> Result<Vec<String>, SourceError> {
        self.requested.lock().unwrap().push(page);

        match self.pages.get((page - 1) as usize) {
            Some(Page::Tags(tags)) => Ok(tags.iter().map(|s| s.to_string()).collect()),
            Some(Page::NotFound) => Err(SourceError::NotFound(format!("{owner}/{repo}"))),
            Some(Page::Transport) => Err(SourceError::InvalidResponse(
                "Unexpected status: 500".to_string(),
            )),
            // Past the scripted pages the repository has no further releases.
            None => Ok(Vec::new()),
        }
    }
}
