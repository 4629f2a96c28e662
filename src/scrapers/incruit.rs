use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::scrapers::parse::{parse_listing_page, parse_page_count, PageSelectors};
use crate::scrapers::traits::JobBoardScraper;
use crate::scrapers::types::SearchParams;
use crate::text::SourceDecoder;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Incruit search results scraper
pub struct IncruitScraper {
    client: Client,
    base_url: Url,
    params: SearchParams,
    selectors: PageSelectors,
    decoder: SourceDecoder,
}

impl IncruitScraper {
    /// Create a new Incruit scraper with default search parameters (`kw=python`)
    #[allow(dead_code)]
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_params(SearchParams::default(), Some(DEFAULT_TIMEOUT))
    }

    /// Create a new Incruit scraper with custom search parameters.
    ///
    /// Fails before any request is made when the URL, a selector or the
    /// encoding label is invalid.
    pub fn with_params(params: SearchParams, timeout: Option<Duration>) -> Result<Self, ScrapeError> {
        let base_url = Url::parse(&params.base_url)
            .map_err(|_| ScrapeError::InvalidUrl(params.base_url.clone()))?;
        let selectors = PageSelectors::compile(&params.selectors)?;
        let decoder = SourceDecoder::for_label(&params.source_encoding)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| ScrapeError::transport(&base_url, source))?;

        Ok(Self {
            client,
            base_url,
            params,
            selectors,
            decoder,
        })
    }

    /// URL of a results page: the base search plus `startno = page * stride`
    pub fn page_url(&self, page: usize) -> Url {
        let offset = page * self.params.page_stride;
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(&self.params.offset_param, &offset.to_string());
        url
    }

    /// GET a page and decode its body from the source encoding
    async fn fetch_html(&self, url: &Url) -> Result<String, ScrapeError> {
        info!("Requesting: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ScrapeError::transport(url, source))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("{} returned status: {}", url, status);
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ScrapeError::transport(url, source))?;

        debug!("Downloaded {} bytes of HTML", body.len());

        let decoded = self.decoder.decode(&body);
        if decoded.had_errors {
            warn!(
                "{} contained bytes that are not valid {}; they were replaced",
                url,
                self.decoder.name()
            );
        }

        Ok(decoded.text.into_owned())
    }
}

#[async_trait]
impl JobBoardScraper for IncruitScraper {
    async fn page_count(&self) -> Result<usize, ScrapeError> {
        let html = self.fetch_html(&self.base_url).await?;
        let pages = parse_page_count(&html, &self.selectors);

        if pages == 0 {
            warn!("No pagination found on {}", self.base_url);
        }
        info!("Search spans {} pages", pages);

        Ok(pages)
    }

    async fn fetch_page(&self, page: usize) -> Result<Vec<JobRecord>, ScrapeError> {
        let url = self.page_url(page);
        let html = self.fetch_html(&url).await?;
        let jobs = parse_listing_page(&html, &self.selectors);

        info!("Page {}: extracted {} jobs", page, jobs.len());
        Ok(jobs)
    }

    fn source_name(&self) -> &'static str {
        "Incruit"
    }
}
