//! Query-string parameters shared by handlers and extractors.
//!
//! Values are read straight from the raw query so a repeated key is not a
//! rejection: the last occurrence wins.

use url::form_urlencoded;

use crate::links::{PAGE_PARAM, SORT_PARAM};

/// Last decoded value of `name` in `query`, if present.
pub fn last_value(query: Option<&str>, name: &str) -> Option<String> {
    form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .filter(|(key, _)| key == name)
        .last()
        .map(|(_, value)| value.into_owned())
}

/// Query parameters for `GET /projects`.
///
/// Both values stay raw strings: the listing pipeline owns their parsing and
/// a bad page number is not a rejection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListProjectsParams {
    pub page: Option<String>,
    pub sort: Option<String>,
}

impl ListProjectsParams {
    pub fn from_query(query: Option<&str>) -> Self {
        Self {
            page: last_value(query, PAGE_PARAM),
            sort: last_value(query, SORT_PARAM),
        }
    }
}
