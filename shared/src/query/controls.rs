//! Pagination control bar

use serde::{Deserialize, Serialize};

/// One slot of the control bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageControl {
    Page { number: usize, current: bool },
    Ellipsis,
}

const EDGE_PAGES: usize = 3;

/// Page buttons for `current` out of `total_pages`
///
/// Shows the first three pages, the last three and the neighbours of the
/// current page. Each run of hidden pages collapses into one ellipsis.
/// Nothing is shown for a single page.
pub fn page_controls(current: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let visible = |n: usize| {
        n <= EDGE_PAGES || n + EDGE_PAGES > total_pages || n.abs_diff(current) <= 1
    };

    let mut controls = Vec::new();
    for n in 1..=total_pages {
        if visible(n) {
            controls.push(PageControl::Page {
                number: n,
                current: n == current,
            });
        } else if controls.last() != Some(&PageControl::Ellipsis) {
            controls.push(PageControl::Ellipsis);
        }
    }
    controls
}

pub fn has_previous(current: usize) -> bool {
    current > 1
}

pub fn has_next(current: usize, total_pages: usize) -> bool {
    current < total_pages
}
