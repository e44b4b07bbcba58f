//! Keyword and date-range filtering

use chrono::NaiveDate;

use crate::models::ComplaintRecord;

/// Filter criteria derived from the query state
///
/// An empty or whitespace-only keyword matches everything. A non-blank
/// keyword is matched as typed, case-insensitively, against title, content,
/// category and id. Date bounds are inclusive; `start > end` matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    needle: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn new(keyword: &str, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        let needle = if keyword.trim().is_empty() {
            None
        } else {
            Some(keyword.to_lowercase())
        };
        Self {
            needle,
            start_date,
            end_date,
        }
    }

    pub fn keyword(keyword: &str) -> Self {
        Self::new(keyword, None, None)
    }

    pub fn date_range(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self::new("", start_date, end_date)
    }

    pub fn matches(&self, record: &ComplaintRecord) -> bool {
        self.matches_keyword(record) && self.matches_dates(record)
    }

    fn matches_keyword(&self, record: &ComplaintRecord) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        [
            record.title.as_str(),
            record.content.as_str(),
            record.category.as_str(),
            record.id.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle.as_str()))
    }

    fn matches_dates(&self, record: &ComplaintRecord) -> bool {
        let date = record.submitted_date;
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}

/// Records matching `criteria`, in input order
pub fn filter<'r, I>(records: I, criteria: &FilterCriteria) -> Vec<&'r ComplaintRecord>
where
    I: IntoIterator<Item = &'r ComplaintRecord>,
{
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
