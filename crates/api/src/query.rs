//! Query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters for `GET /games` (`?page=&pageSize=`).
///
/// Missing values fall back to the defaults in
/// [`gamecatalog_core::pagination`]; range checks happen in
/// [`PageRequest::from_params`](gamecatalog_core::pagination::PageRequest::from_params).
#[derive(Debug, Default, Deserialize)]
pub struct ListGamesParams {
    pub page: Option<i64>,
    #[serde(rename = "pageSize", alias = "page_size")]
    pub page_size: Option<i64>,
}
