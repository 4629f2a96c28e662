pub mod incruit;
pub mod parse;
pub mod traits;
pub mod types;

pub use incruit::IncruitScraper;
pub use traits::JobBoardScraper;
pub use types::SearchParams;
