//! Page-number pagination arithmetic.

use serde::Serialize;

/// Pages are 1-based.
pub const FIRST_PAGE: i64 = 1;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Interpret a raw `?page=` value.
///
/// Missing, non-numeric and non-positive values all fall back to the first
/// page; a bad page number is never an error.
pub fn parse_page_number(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= FIRST_PAGE)
        .unwrap_or(FIRST_PAGE)
}

/// A requested page: which one, and how many rows per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: i64,
    pub size: i64,
}

impl PageRequest {
    /// Both values are floored at 1.
    pub fn new(number: i64, size: i64) -> Self {
        Self {
            number: number.max(FIRST_PAGE),
            size: size.max(1),
        }
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    /// Rows to skip before this page. Saturates instead of overflowing on
    /// absurd page numbers, which then simply land past the last row.
    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(self.size)
    }
}

/// Position of a fetched page within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub number: i64,
    pub size: i64,
    pub total: i64,
}

impl PageInfo {
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            number: request.number,
            size: request.size,
            total: total.max(0),
        }
    }

    pub fn total_pages(&self) -> i64 {
        let size = self.size.max(1);
        (self.total + size - 1) / size
    }

    /// The page lies past the last one (always true for an empty set).
    pub fn is_out_of_range(&self) -> bool {
        self.number > self.total_pages()
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages()
    }

    /// Only pages inside the result set point back; an out-of-range page has
    /// no previous page.
    pub fn has_previous(&self) -> bool {
        self.number > FIRST_PAGE && !self.is_out_of_range()
    }

    pub fn next_page(&self) -> Option<i64> {
        self.has_next().then_some(self.number + 1)
    }

    pub fn previous_page(&self) -> Option<i64> {
        self.has_previous().then_some(self.number - 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
