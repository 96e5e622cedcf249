pub(crate) mod comment;
pub mod health_checks;
pub(crate) mod like;
pub(crate) mod product;
pub(crate) mod review_post;

pub use health_checks::*;

use serde::Deserialize;

// Transport-level paging arguments; validated into db::PageParams by the
// handlers before any query runs.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

pub(crate) fn default_page() -> i64 {
    1
}

pub(crate) fn default_page_size() -> i64 {
    10
}
