//! Query state of the complaint list
//!
//! Changing any filter or the sort order sends the user back to page 1;
//! paging leaves the criteria alone; clearing restores every default.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::filter::FilterCriteria;
use super::paginate::clamp_page;
use super::sort::SortKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryState {
    keyword: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    sort_by: SortKey,
    #[serde(deserialize_with = "page_at_least_one")]
    page: usize,
}

fn page_at_least_one<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(usize::deserialize(deserializer)?.max(1))
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            start_date: None,
            end_date: None,
            sort_by: SortKey::default(),
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    /// Current page, 1-based
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.page = 1;
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
        self.page = 1;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
        self.page = 1;
    }

    /// Move to `page`, clamped against the current page count
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
    }

    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(&self.keyword, self.start_date, self.end_date)
    }

    /// Criteria that differ from the defaults, for the summary bar
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if !self.keyword.trim().is_empty() {
            active.push(ActiveFilter::Keyword(self.keyword.clone()));
        }
        if let Some(date) = self.start_date {
            active.push(ActiveFilter::StartDate(date));
        }
        if let Some(date) = self.end_date {
            active.push(ActiveFilter::EndDate(date));
        }
        if self.sort_by != SortKey::default() {
            active.push(ActiveFilter::Sort(self.sort_by));
        }
        active
    }

    pub fn has_active_filters(&self) -> bool {
        !self.active_filters().is_empty()
    }
}

/// A non-default criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    Keyword(String),
    StartDate(NaiveDate),
    EndDate(NaiveDate),
    Sort(SortKey),
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveFilter::Keyword(k) => write!(f, "검색: {}", k),
            ActiveFilter::StartDate(d) => write!(f, "시작: {}", d),
            ActiveFilter::EndDate(d) => write!(f, "종료: {}", d),
            ActiveFilter::Sort(s) => write!(f, "정렬: {}", s.label()),
        }
    }
}
