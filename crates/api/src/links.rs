//! Hypermedia link construction for project documents.

use portfolio_core::pagination::PageInfo;
use portfolio_core::types::DbId;
use serde::Serialize;
use url::Url;

/// Query parameter carrying the page number.
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the raw sort expression.
pub const SORT_PARAM: &str = "sort";

/// Builds absolute URLs for the `/projects` resource from the public base URL.
#[derive(Debug, Clone)]
pub struct ResourceLinks {
    collection: Url,
}

impl ResourceLinks {
    /// `public_url` must be a base URL ending in `/` (see
    /// [`crate::config::parse_public_url`]).
    pub fn new(public_url: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            collection: public_url.join("projects")?,
        })
    }

    /// `<base>/projects?page=<page>[&sort=<sort>]`.
    ///
    /// The sort expression is reproduced verbatim and form-urlencoded, so
    /// `name,budget` becomes `name%2Cbudget`.
    pub fn page(&self, page: i64, sort: Option<&str>) -> String {
        let mut url = self.collection.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(PAGE_PARAM, &page.to_string());
            if let Some(sort) = sort {
                query.append_pair(SORT_PARAM, sort);
            }
        }
        url.into()
    }

    /// `<base>/projects/<id>`.
    pub fn project(&self, id: DbId) -> String {
        format!("{}/{id}", self.collection)
    }
}

/// `links` member of a project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationLinks {
    #[serde(rename = "self")]
    pub current: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl PaginationLinks {
    /// Links for `info`; `next` and `previous` only when those pages exist.
    /// An empty sort expression is treated as absent.
    pub fn build(links: &ResourceLinks, info: &PageInfo, sort: Option<&str>) -> Self {
        let sort = sort.filter(|s| !s.is_empty());
        Self {
            current: links.page(info.number, sort),
            next: info.next_page().map(|n| links.page(n, sort)),
            previous: info.previous_page().map(|n| links.page(n, sort)),
        }
    }
}
