//! Table query engine
//!
//! One pure transformation shared by every list view: substring search and
//! exact-match filters, a stable sort on a named field, and clamped
//! pagination with a bounded page-number window. Records come in through the
//! `TableRow` trait; nothing here does I/O or mutates its input.

use crate::model::field::TableRow;
use std::cmp::Ordering;

/// Number of page buttons shown around the current page.
pub const PAGE_WINDOW_WIDTH: usize = 5;

/// Page sizes offered by the page-size dialog.
pub const PAGE_SIZE_CHOICES: [usize; 4] = [15, 20, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// An exact-match predicate on one field (the status/priority/district
/// dropdowns). Independent of, and composed with, the substring search;
/// the two are deliberately not unified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: String,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    fn matches<T: TableRow>(&self, record: &T) -> bool {
        record
            .field(&self.field)
            .map(|v| v.to_string() == self.value)
            .unwrap_or(false)
    }
}

/// The ephemeral search/sort/page parameters a list view holds.
#[derive(Debug, Clone)]
pub struct QueryState {
    pub search: String,
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
    pub page_size: usize,
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(PAGE_SIZE_CHOICES[0])
    }
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Sorting the key already in effect flips direction; a new key starts
    /// ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key) {
            self.sort_direction = self.sort_direction.flip();
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Changing the page size returns to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        if size > 0 {
            self.page_size = size;
            self.current_page = 1;
        }
    }

    /// Narrowing or widening the search returns to the first page.
    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.current_page = 1;
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.current_page = 1;
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.current_page = 1;
    }
}

/// One page of results plus the pagination summary.
#[derive(Debug)]
pub struct QueryOutput<'a, T> {
    pub page: Vec<&'a T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub page_window: Vec<usize>,
    /// The page actually shown after clamping.
    pub current_page: usize,
}

/// Filter and sort without paginating. Used by `query` and by CSV export,
/// which wants the whole filtered set.
pub fn filter_sort<'a, T: TableRow>(
    records: &'a [T],
    state: &QueryState,
    search_fields: &[&str],
    filters: &[FieldFilter],
) -> Vec<&'a T> {
    let needle = state.search.to_lowercase();

    let mut rows: Vec<&T> = records
        .iter()
        .filter(|r| filters.iter().all(|f| f.matches(*r)))
        .filter(|r| {
            needle.is_empty()
                || search_fields
                    .iter()
                    .any(|key| r.display(key).to_lowercase().contains(&needle))
        })
        .collect();

    if let Some(ref key) = state.sort_key {
        // Stable sort; records missing the field (or fields of mismatched
        // kinds) compare equal and keep their relative order.
        rows.sort_by(|a, b| {
            let ord = match (a.field(key), b.field(key)) {
                (Some(va), Some(vb)) => va.compare(&vb).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            };
            match state.sort_direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    rows
}

/// Run the full query: filter, sort, clamp the page, slice, and compute the
/// page-number window. Total over its input; never fails.
pub fn query<'a, T: TableRow>(
    records: &'a [T],
    state: &QueryState,
    search_fields: &[&str],
    filters: &[FieldFilter],
) -> QueryOutput<'a, T> {
    let rows = filter_sort(records, state, search_fields, filters);

    let page_size = state.page_size.max(1);
    let total_items = rows.len();
    let total_pages = (total_items.div_ceil(page_size)).max(1);
    let current_page = state.current_page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let page: Vec<&T> = rows
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    QueryOutput {
        page,
        total_items,
        total_pages,
        page_window: page_window(current_page, total_pages),
        current_page,
    }
}

/// The bounded set of page numbers to display: width 5, centered on the
/// current page, shifted to stay full-width near the boundaries.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let mut start = current_page
        .saturating_sub(PAGE_WINDOW_WIDTH / 2)
        .max(1);
    let end = (start + PAGE_WINDOW_WIDTH - 1).min(total_pages);
    if end + 1 - start < PAGE_WINDOW_WIDTH {
        start = end.saturating_sub(PAGE_WINDOW_WIDTH - 1).max(1);
    }
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::FieldValue;

    struct Campaign {
        name: &'static str,
        sent: i64,
    }

    impl TableRow for Campaign {
        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "name" => Some(FieldValue::from(self.name)),
                "sent" => Some(FieldValue::Number(self.sent)),
                _ => None,
            }
        }
    }

    fn campaigns() -> Vec<Campaign> {
        vec![
            Campaign { name: "Summer Sale", sent: 120 },
            Campaign { name: "New Product", sent: 45 },
            Campaign { name: "Customer Feedback", sent: 450 },
        ]
    }

    fn numbered(n: usize) -> Vec<Campaign> {
        (0..n)
            .map(|i| Campaign { name: "row", sent: i as i64 })
            .collect()
    }

    #[test]
    fn test_substring_search_is_case_folded() {
        let records = campaigns();
        let mut state = QueryState::new(15);
        state.search = "sale".to_string();

        let out = query(&records, &state, &["name"], &[]);
        assert_eq!(out.total_items, 1);
        assert_eq!(out.page[0].name, "Summer Sale");
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let records = campaigns();
        let out = query(&records, &QueryState::new(15), &["name"], &[]);
        assert_eq!(out.total_items, 3);
    }

    #[test]
    fn test_page_never_exceeds_page_size() {
        let records = numbered(32);
        let mut state = QueryState::new(15);
        for page in 1..=4 {
            state.current_page = page;
            let out = query(&records, &state, &["name"], &[]);
            assert!(out.page.len() <= 15);
        }
    }

    #[test]
    fn test_total_pages_and_page_clamping() {
        let records = numbered(32);
        let mut state = QueryState::new(15);
        state.current_page = 4;

        let out = query(&records, &state, &["name"], &[]);
        assert_eq!(out.total_pages, 3);
        assert_eq!(out.current_page, 3);
        assert_eq!(out.page.len(), 2);
    }

    #[test]
    fn test_zero_records_edge_case() {
        let records: Vec<Campaign> = Vec::new();
        let out = query(&records, &QueryState::new(15), &["name"], &[]);
        assert_eq!(out.total_pages, 1);
        assert!(out.page.is_empty());
        assert_eq!(out.page_window, vec![1]);
    }

    #[test]
    fn test_page_window_at_boundaries() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1), vec![1]);
    }

    #[test]
    fn test_sort_direction_is_an_involution() {
        let records = campaigns();
        let mut state = QueryState::new(15);
        state.toggle_sort("sent");
        let asc: Vec<i64> = query(&records, &state, &["name"], &[])
            .page
            .iter()
            .map(|c| c.sent)
            .collect();

        state.toggle_sort("sent");
        let desc: Vec<i64> = query(&records, &state, &["name"], &[])
            .page
            .iter()
            .map(|c| c.sent)
            .collect();

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(asc, vec![45, 120, 450]);
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_toggle_sort_new_key_resets_to_ascending() {
        let mut state = QueryState::new(15);
        state.toggle_sort("name");
        state.toggle_sort("name");
        assert_eq!(state.sort_direction, SortDirection::Descending);

        state.toggle_sort("sent");
        assert_eq!(state.sort_key.as_deref(), Some("sent"));
        assert_eq!(state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_absent_sort_key_keeps_input_order() {
        let records = campaigns();
        let mut state = QueryState::new(15);
        state.toggle_sort("no_such_field");

        let out = query(&records, &state, &["name"], &[]);
        let names: Vec<&str> = out.page.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Summer Sale", "New Product", "Customer Feedback"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let records = vec![
            Campaign { name: "a", sent: 1 },
            Campaign { name: "b", sent: 1 },
            Campaign { name: "c", sent: 0 },
        ];
        let mut state = QueryState::new(15);
        state.toggle_sort("sent");

        let out = query(&records, &state, &["name"], &[]);
        let names: Vec<&str> = out.page.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_filtering_is_idempotent_within_one_page() {
        let records = campaigns();
        let mut state = QueryState::new(15);
        state.search = "e".to_string();

        let first = query(&records, &state, &["name"], &[]);
        let narrowed: Vec<Campaign> = first
            .page
            .iter()
            .map(|c| Campaign { name: c.name, sent: c.sent })
            .collect();

        let second = query(&narrowed, &state, &["name"], &[]);
        let a: Vec<&str> = first.page.iter().map(|c| c.name).collect();
        let b: Vec<&str> = second.page.iter().map(|c| c.name).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exact_filter_composes_with_search() {
        let records = vec![
            Campaign { name: "Summer Sale", sent: 1 },
            Campaign { name: "Winter Sale", sent: 2 },
        ];
        let mut state = QueryState::new(15);
        state.search = "sale".to_string();
        let filters = vec![FieldFilter::new("name", "Winter Sale")];

        let out = query(&records, &state, &["name"], &filters);
        assert_eq!(out.total_items, 1);
        assert_eq!(out.page[0].name, "Winter Sale");
    }

    #[test]
    fn test_exact_filter_on_absent_field_matches_nothing() {
        let records = campaigns();
        let filters = vec![FieldFilter::new("status", "Open")];
        let out = query(&records, &QueryState::new(15), &["name"], &filters);
        assert_eq!(out.total_items, 0);
        assert_eq!(out.total_pages, 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = QueryState::new(15);
        state.current_page = 3;
        state.set_page_size(50);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, 50);
    }

    #[test]
    fn test_search_edit_resets_page() {
        let mut state = QueryState::new(15);
        state.current_page = 2;
        state.push_search('x');
        assert_eq!(state.current_page, 1);

        state.current_page = 2;
        state.pop_search();
        assert_eq!(state.current_page, 1);
    }
}
