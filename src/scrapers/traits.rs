use crate::error::ScrapeError;
use crate::models::JobRecord;
use async_trait::async_trait;

/// Common trait for paginated job listing sources
/// The crawl loop only talks to this, so another job board is one more impl
#[async_trait]
pub trait JobBoardScraper: Send + Sync {
    /// Number of results pages the search currently spans
    async fn page_count(&self) -> Result<usize, ScrapeError>;

    /// Scrape every listing on one results page, in page order
    async fn fetch_page(&self, page: usize) -> Result<Vec<JobRecord>, ScrapeError>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}
