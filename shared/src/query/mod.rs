//! Complaint query engine
//!
//! Turns a normalized collection plus a [`QueryState`] into the page of rows
//! to render: filter, then sort, then paginate. Every step borrows the
//! collection and none of them can fail.
//!
//! # Example
//!
//! ```
//! use shared::models::ComplaintRecord;
//! use shared::query::{run_query, QueryState, DEFAULT_PAGE_SIZE};
//!
//! let records: Vec<ComplaintRecord> = Vec::new();
//! let page = run_query(&records, &QueryState::default(), DEFAULT_PAGE_SIZE);
//! assert_eq!(page.total_pages, 0);
//! assert_eq!(page.current_page, 1);
//! ```

pub mod controls;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;

pub use controls::{PageControl, has_next, has_previous, page_controls};
pub use filter::{FilterCriteria, filter};
pub use paginate::{PageSlice, clamp_page, paginate, total_pages};
pub use sort::{SortKey, UnknownSortKey, sort, sorted};
pub use state::{ActiveFilter, QueryState};

use serde::{Deserialize, Serialize};

use crate::models::ComplaintRecord;

/// Rows per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What the list view renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintPage {
    pub items: Vec<ComplaintRecord>,
    /// Number of records matching the filters
    pub total_count: usize,
    pub total_pages: usize,
    /// Page actually shown, after clamping
    pub current_page: usize,
    /// Size of the unfiltered collection
    pub collection_count: usize,
}

impl ComplaintPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn controls(&self) -> Vec<PageControl> {
        page_controls(self.current_page, self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        has_previous(self.current_page)
    }

    pub fn has_next(&self) -> bool {
        has_next(self.current_page, self.total_pages)
    }
}

/// Filter, sort and paginate `records` according to `state`
pub fn run_query(records: &[ComplaintRecord], state: &QueryState, page_size: usize) -> ComplaintPage {
    let matching = sorted(filter(records, &state.criteria()), state.sort_by());
    let slice = paginate(&matching, page_size, state.page());

    tracing::debug!(
        matching = matching.len(),
        page = slice.page,
        total_pages = slice.total_pages,
        "Ran complaint query"
    );

    ComplaintPage {
        items: slice.items.iter().map(|r| (*r).clone()).collect(),
        total_count: matching.len(),
        total_pages: slice.total_pages,
        current_page: slice.page,
        collection_count: records.len(),
    }
}
