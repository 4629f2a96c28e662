use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::scrapers::types::SelectorTable;
use crate::text::normalize_field;

/// Selector table compiled once per scraper
#[derive(Debug, Clone)]
pub struct PageSelectors {
    row: Selector,
    id_attribute: String,
    title: Selector,
    location: Selector,
    pagination: Selector,
    page_link: Selector,
}

impl PageSelectors {
    pub fn compile(table: &SelectorTable) -> Result<Self, ScrapeError> {
        Ok(Self {
            row: compile(&table.row)?,
            id_attribute: table.id_attribute.clone(),
            title: compile(&table.title)?,
            location: compile(&table.location)?,
            pagination: compile(&table.pagination)?,
            page_link: compile(&table.page_link)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|err| ScrapeError::Selector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// Count pages from the pagination widget of the first results page.
///
/// The last link in the widget is the "next" control, so it is not a page.
/// No widget means no pages.
pub fn parse_page_count(html: &str, selectors: &PageSelectors) -> usize {
    let document = Html::parse_document(html);

    document
        .select(&selectors.pagination)
        .last()
        .map(|widget| widget.select(&selectors.page_link).count().saturating_sub(1))
        .unwrap_or(0)
}

/// Extract one record per listing row, in document order
pub fn parse_listing_page(html: &str, selectors: &PageSelectors) -> Vec<JobRecord> {
    let document = Html::parse_document(html);

    let jobs: Vec<JobRecord> = document
        .select(&selectors.row)
        .map(|row| extract_fields(row, selectors))
        .collect();

    debug!("Found {} listing rows", jobs.len());
    jobs
}

/// Build a record from one listing row. Missing pieces become empty strings.
pub fn extract_fields(row: ElementRef<'_>, selectors: &PageSelectors) -> JobRecord {
    let id = row.value().attr(&selectors.id_attribute).unwrap_or_default();
    let title = normalize_field(&matched_text(row, &selectors.title));
    let location = normalize_field(&matched_text(row, &selectors.location));

    JobRecord::new(id, title, location)
}

// Text of every match, concatenated
fn matched_text(row: ElementRef<'_>, selector: &Selector) -> String {
    row.select(selector).flat_map(|element| element.text()).collect()
}
