//! The project listing pipeline.
//!
//! `?sort=` is parsed and checked against the sortable-field allow-list before
//! the store is touched; a rejected expression short-circuits to
//! [`ListingResult::Invalid`]. Otherwise the requested page is fetched and
//! `self`/`next`/`previous` links are attached.

use portfolio_core::pagination::parse_page_number;
use portfolio_core::sorting::{ProjectSortField, SortSpec};
use portfolio_db::models::project::ProjectPage;
use portfolio_db::ProjectStore;

use crate::links::{PaginationLinks, ResourceLinks};

/// Reason attached to every rejected sort expression.
pub const UNSUPPORTED_SORT_REASON: &str = "unsupported sort attribute";

/// Outcome of a listing request. Rendered by its `IntoResponse` impl in
/// [`crate::response`].
#[derive(Debug)]
pub enum ListingResult {
    /// The sort expression named a field outside the allow-list.
    Invalid {
        reason: &'static str,
        fields: Vec<String>,
    },
    Ok {
        page: ProjectPage,
        links: PaginationLinks,
    },
}

/// Run the listing pipeline for one request.
///
/// `raw_sort` and `raw_page` are the untouched query values. Only storage
/// failures are errors; a bad sort expression is an `Invalid` result.
pub async fn list_projects(
    store: &dyn ProjectStore,
    links: &ResourceLinks,
    raw_sort: Option<&str>,
    raw_page: Option<&str>,
) -> Result<ListingResult, sqlx::Error> {
    let spec = SortSpec::parse(raw_sort);

    let order = match spec.validate::<ProjectSortField>() {
        Ok(order) => order,
        Err(err) => {
            tracing::debug!(fields = ?err.fields, "Rejected sort expression");
            return Ok(ListingResult::Invalid {
                reason: UNSUPPORTED_SORT_REASON,
                fields: err.fields,
            });
        }
    };

    let number = parse_page_number(raw_page);
    let page = store.page(&order, number).await?;
    let links = PaginationLinks::build(links, &page.info, raw_sort);

    tracing::debug!(
        page = page.info.number,
        total = page.info.total,
        sort_keys = order.len(),
        "Assembled project listing"
    );

    Ok(ListingResult::Ok { page, links })
}
