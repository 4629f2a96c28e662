use serde::{Deserialize, Serialize};

/// Search parameters for job listing scraping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchParams {
    /// Search results URL, including the fixed query (`col=job&kw=python`)
    pub base_url: String,
    /// Query parameter carrying the result offset of a page
    pub offset_param: String,
    /// Listings per results page
    pub page_stride: usize,
    /// WHATWG label of the encoding the site serves its pages in
    pub source_encoding: String,
    pub selectors: SelectorTable,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            base_url: "https://search.incruit.com/list/search.asp?col=job&kw=python".to_string(),
            offset_param: "startno".to_string(),
            page_stride: 30,
            source_encoding: "euc-kr".to_string(),
            selectors: SelectorTable::default(),
        }
    }
}

/// CSS selectors describing the layout of a results page.
/// A layout change on the site is a change to this table only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectorTable {
    /// One element per job posting
    pub row: String,
    /// Attribute of the row element holding the listing identifier
    pub id_attribute: String,
    /// Title anchor, relative to the row
    pub title: String,
    /// Location text, relative to the row
    pub location: String,
    /// Pagination widget
    pub pagination: String,
    /// Links inside the pagination widget
    pub page_link: String,
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self {
            row: ".c_row".to_string(),
            id_attribute: "jobno".to_string(),
            title: ".cl_top > a".to_string(),
            location: ".cl_md span".to_string(),
            pagination: ".sqr_paging".to_string(),
            page_link: "a".to_string(),
        }
    }
}
