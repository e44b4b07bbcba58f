//! Complaint list view
//!
//! Owns the fetched collection and the query state of one list screen. The
//! collection is fetched once per activation and replaced in one step on
//! success; a failed load leaves the previous collection in place.

use serde::{Deserialize, Serialize};
use shared::client::Scope;
use shared::models::ComplaintRecord;
use shared::query::{ComplaintPage, DEFAULT_PAGE_SIZE, QueryState, run_query, total_pages};

use crate::client::{ComplaintApi, HttpClient};
use crate::ClientResult;

/// Load state of the list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last load failed
    Error { message: String },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error { message } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComplaintListView {
    scope: Scope,
    page_size: usize,
    state: ViewState,
    records: Vec<ComplaintRecord>,
    skipped: usize,
    query: QueryState,
}

impl ComplaintListView {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            page_size: DEFAULT_PAGE_SIZE,
            state: ViewState::Idle,
            records: Vec::new(),
            skipped: 0,
            query: QueryState::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn records(&self) -> &[ComplaintRecord] {
        &self.records
    }

    /// Upstream items dropped by the last successful load
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Mutable query state; the next [`page`](Self::page) reflects changes
    pub fn query_mut(&mut self) -> &mut QueryState {
        &mut self.query
    }

    /// Fetch the collection
    ///
    /// On failure the view moves to [`ViewState::Error`] and keeps whatever
    /// it showed before. Retrying is calling `load` again. Dropping the
    /// future mid-fetch puts the previous state back.
    pub async fn load<C: HttpClient>(&mut self, api: &ComplaintApi<C>) -> ClientResult<()> {
        let scope = self.scope;
        let guard = LoadingGuard::begin(&mut self.state);
        tracing::info!(scope = ?scope, "Loading complaints");

        match api.fetch_collection(scope).await {
            Ok(batch) => {
                self.skipped = batch.skipped_count();
                self.records = batch.records;
                guard.finish(ViewState::Loaded);
                tracing::info!(
                    records = self.records.len(),
                    skipped = self.skipped,
                    "Complaints loaded"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load complaints");
                guard.finish(ViewState::Error {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Page to render for the current query
    pub fn page(&self) -> ComplaintPage {
        run_query(&self.records, &self.query, self.page_size)
    }

    /// Jump to `page`, clamped against the filtered page count
    pub fn go_to_page(&mut self, page: usize) {
        let matching = shared::query::filter(&self.records, &self.query.criteria()).len();
        self.query.go_to_page(page, total_pages(matching, self.page_size));
    }
}

/// Holds the view in `Loading` and rolls back unless finished
struct LoadingGuard<'a> {
    state: &'a mut ViewState,
    previous: Option<ViewState>,
}

impl<'a> LoadingGuard<'a> {
    fn begin(state: &'a mut ViewState) -> Self {
        let previous = std::mem::replace(state, ViewState::Loading);
        Self {
            state,
            previous: Some(previous),
        }
    }

    fn finish(mut self, next: ViewState) {
        self.previous = None;
        *self.state = next;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            tracing::debug!("Load cancelled, restoring previous state");
            *self.state = previous;
        }
    }
}
