use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Listing parameters as they usually arrive from an HTTP query string or a JSON body.
///
/// Semantics (see [`list_stages`](crate::stage::list_stages)):
/// - The search filter is applied when both `search_fields` and `keywords` are non-empty.
/// - Sorting is applied when `sort_by` is set and non-empty.
/// - Paging is applied when both `page` and `size` are set; `page` is zero based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_desc: bool,
    #[serde(default)]
    pub search_fields: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ListOptions {
    /// # Errors
    /// Returns an error if the JSON string cannot be parsed into list options.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
