use tracing::{info, warn};

use crate::config::{AppConfig, PageErrorPolicy};
use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::output;
use crate::scrapers::{IncruitScraper, JobBoardScraper};

/// Resolve the page count once, then scrape every page in order.
///
/// A failed page count always ends the crawl. A failed page either ends it
/// or is skipped, depending on `policy`.
pub async fn crawl<S>(scraper: &S, policy: PageErrorPolicy) -> Result<Vec<JobRecord>, ScrapeError>
where
    S: JobBoardScraper + ?Sized,
{
    let total_pages = scraper.page_count().await?;
    info!("Crawling {} pages from {}", total_pages, scraper.source_name());

    let mut jobs = Vec::new();
    for page in 0..total_pages {
        match scraper.fetch_page(page).await {
            Ok(page_jobs) => jobs.extend(page_jobs),
            Err(err) => match policy {
                PageErrorPolicy::Abort => return Err(err),
                PageErrorPolicy::Skip => warn!("Skipping page {}: {}", page, err),
            },
        }
    }

    Ok(jobs)
}

/// Full run: scrape the configured search and write the CSV file.
/// Returns the number of records written.
pub async fn run(config: &AppConfig) -> Result<usize, ScrapeError> {
    let scraper = IncruitScraper::with_params(config.search.clone(), config.request_timeout())?;

    let jobs = crawl(&scraper, config.on_page_error).await?;
    output::write_records(&config.output_path, &jobs)?;

    Ok(jobs.len())
}
