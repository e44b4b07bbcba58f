//! Plain-text rendering of a complaint page

use shared::models::ComplaintRecord;
use shared::query::{ComplaintPage, PageControl, QueryState};

const TITLE_WIDTH: usize = 40;

/// Render the page with its header, rows and control bar
pub fn render_page(page: &ComplaintPage, query: &QueryState, skipped: usize) -> String {
    let mut lines = vec![count_summary(page)];

    let filters = query.active_filters();
    if !filters.is_empty() {
        let labels: Vec<String> = filters.iter().map(|f| f.to_string()).collect();
        lines.push(format!("필터: {}", labels.join(" | ")));
    }
    if skipped > 0 {
        lines.push(format!("형식 오류로 제외된 민원: {}건", skipped));
    }
    lines.push(String::new());

    if page.is_empty() {
        let message = if query.has_active_filters() {
            "검색 결과가 없습니다."
        } else {
            "등록된 민원이 없습니다."
        };
        lines.push(message.to_string());
    } else {
        lines.extend(page.items.iter().map(render_row));

        let controls = control_bar(page);
        if !controls.is_empty() {
            lines.push(String::new());
            lines.push(controls);
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// "N of M" line
pub fn count_summary(page: &ComplaintPage) -> String {
    if page.total_count == page.collection_count {
        format!("전체 {}건", page.collection_count)
    } else {
        format!("{}건 / 전체 {}건", page.total_count, page.collection_count)
    }
}

/// One table row: id, date, status, category, title
pub fn render_row(record: &ComplaintRecord) -> String {
    let badge = if record.has_update() { " *" } else { "" };
    format!(
        "{:<12} {} {:<8} {:<8} {}{}",
        record.id,
        record.submitted_date,
        record.status.label(),
        record.category,
        truncate(&record.title, TITLE_WIDTH),
        badge
    )
}

/// Page buttons, e.g. `< 1 2 3 ... 9 [10] 11 ... 18 19 20 >`
pub fn control_bar(page: &ComplaintPage) -> String {
    let controls = page.controls();
    if controls.is_empty() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(controls.len() + 2);
    if page.has_previous() {
        parts.push("<".to_string());
    }
    parts.extend(controls.iter().map(|c| match c {
        PageControl::Page {
            number,
            current: true,
        } => format!("[{}]", number),
        PageControl::Page { number, .. } => number.to_string(),
        PageControl::Ellipsis => "...".to_string(),
    }));
    if page.has_next() {
        parts.push(">".to_string());
    }
    parts.join(" ")
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
