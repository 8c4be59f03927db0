//! Shared list-view machinery
//!
//! Every list view is the same thing: a query state over its records, a
//! cursor on the visible page, and a rendered table with a pagination strip.
//! `TableController` owns the state and `render` draws it; the views supply
//! columns, search fields and records.

use crate::model::field::TableRow;
use crate::query::{self, FieldFilter, QueryOutput, QueryState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Widest a column is allowed to grow.
const MAX_COLUMN_WIDTH: usize = 40;

/// One column of a list view.
pub struct Column {
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
    /// Cell-text-to-color mapping for status/priority columns.
    pub tint: Option<fn(&str) -> Color>,
}

/// State mutations a list view responds to. The active view routes these
/// through `TableController::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOp {
    NextRow,
    PrevRow,
    FirstRow,
    LastRow,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    Sort(usize),
    SearchChar(char),
    SearchBackspace,
    SetPageSize(usize),
    SetFilter { field: String, value: String },
    ClearFilters,
}

/// Per-view table state: query parameters, exact filters, row cursor and
/// search-entry mode.
pub struct TableController {
    pub columns: &'static [Column],
    pub search_fields: &'static [&'static str],
    pub query: QueryState,
    pub filters: Vec<FieldFilter>,
    pub cursor: usize,
    pub search_mode: bool,
}

impl TableController {
    pub fn new(
        columns: &'static [Column],
        search_fields: &'static [&'static str],
        page_size: usize,
    ) -> Self {
        Self {
            columns,
            search_fields,
            query: QueryState::new(page_size),
            filters: Vec::new(),
            cursor: 0,
            search_mode: false,
        }
    }

    pub fn output<'a, T: TableRow>(&self, records: &'a [T]) -> QueryOutput<'a, T> {
        query::query(records, &self.query, self.search_fields, &self.filters)
    }

    /// The record under the cursor, if the page has one.
    pub fn selected<'a, T: TableRow>(&self, records: &'a [T]) -> Option<&'a T> {
        self.output(records).page.get(self.cursor).copied()
    }

    pub fn apply<T: TableRow>(&mut self, op: TableOp, records: &[T]) {
        match op {
            TableOp::NextRow => {
                let len = self.output(records).page.len();
                if len > 0 {
                    self.cursor = (self.cursor + 1) % len;
                }
            }
            TableOp::PrevRow => {
                let len = self.output(records).page.len();
                if len > 0 {
                    self.cursor = (self.cursor + len - 1) % len;
                }
            }
            TableOp::FirstRow => self.cursor = 0,
            TableOp::LastRow => {
                let len = self.output(records).page.len();
                self.cursor = len.saturating_sub(1);
            }
            TableOp::NextPage => {
                let out = self.output(records);
                if out.current_page < out.total_pages {
                    self.query.current_page = out.current_page + 1;
                    self.cursor = 0;
                }
            }
            TableOp::PrevPage => {
                let out = self.output(records);
                if out.current_page > 1 {
                    self.query.current_page = out.current_page - 1;
                    self.cursor = 0;
                }
            }
            TableOp::FirstPage => {
                self.query.current_page = 1;
                self.cursor = 0;
            }
            TableOp::LastPage => {
                self.query.current_page = self.output(records).total_pages;
                self.cursor = 0;
            }
            TableOp::Sort(index) => {
                if let Some(column) = self.columns.get(index) {
                    if column.sortable {
                        self.query.toggle_sort(column.key);
                    }
                }
            }
            TableOp::SearchChar(c) => {
                self.query.push_search(c);
                self.cursor = 0;
            }
            TableOp::SearchBackspace => {
                self.query.pop_search();
                self.cursor = 0;
            }
            TableOp::SetPageSize(size) => {
                self.query.set_page_size(size);
                self.cursor = 0;
            }
            TableOp::SetFilter { field, value } => {
                self.filters.retain(|f| f.field != field);
                self.filters.push(FieldFilter { field, value });
                self.query.current_page = 1;
                self.cursor = 0;
            }
            TableOp::ClearFilters => {
                self.filters.clear();
                self.query.current_page = 1;
                self.cursor = 0;
            }
        }

        // The cursor must stay on the page whatever just happened.
        let len = self.output(records).page.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Headers and stringified rows of the whole filtered, sorted set.
    /// Feeds CSV export.
    pub fn export_rows<T: TableRow>(&self, records: &[T]) -> (Vec<String>, Vec<Vec<String>>) {
        let headers = self.columns.iter().map(|c| c.title.to_string()).collect();
        let rows = query::filter_sort(records, &self.query, self.search_fields, &self.filters)
            .iter()
            .map(|r| self.columns.iter().map(|c| r.display(c.key)).collect())
            .collect();
        (headers, rows)
    }

    fn title_suffix(&self) -> String {
        let mut suffix = String::new();
        if !self.query.search.is_empty() {
            suffix.push_str(&format!(" /{}", self.query.search));
        }
        for filter in &self.filters {
            suffix.push_str(&format!(" [{}: {}]", filter.field, filter.value));
        }
        suffix
    }
}

/// Pad by display width, not char count.
fn pad(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

/// Char-safe truncation with an ellipsis.
fn clip(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if used + w > max.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Draw a list view: bordered table with header, rows, and pagination strip.
pub fn render<T: TableRow>(
    frame: &mut Frame,
    area: Rect,
    controller: &TableController,
    records: &[T],
    title: &str,
) {
    let out = controller.output(records);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " {} ({}){} ",
            title,
            out.total_items,
            controller.title_suffix()
        ))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // separator
            Constraint::Min(0),    // rows
            Constraint::Length(1), // pagination
        ])
        .split(inner);

    // Column widths from header titles and the visible page.
    let widths: Vec<usize> = controller
        .columns
        .iter()
        .map(|col| {
            let mut width = UnicodeWidthStr::width(col.title) + 2; // room for sort mark
            for row in &out.page {
                width = width.max(UnicodeWidthStr::width(row.display(col.key).as_str()));
            }
            width.min(MAX_COLUMN_WIDTH)
        })
        .collect();

    // Header with sort indicators.
    let header_spans: Vec<Span> = controller
        .columns
        .iter()
        .zip(&widths)
        .flat_map(|(col, &width)| {
            let mark = if controller.query.sort_key.as_deref() == Some(col.key) {
                controller.query.sort_direction.indicator()
            } else {
                ""
            };
            vec![
                Span::styled(
                    pad(&clip(&format!("{}{}", col.title, mark), width), width),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(header_spans)), chunks[0]);

    let separator: String = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[1],
    );

    // Rows.
    let items: Vec<ListItem> = out
        .page
        .iter()
        .map(|row| {
            let spans: Vec<Span> = controller
                .columns
                .iter()
                .zip(&widths)
                .flat_map(|(col, &width)| {
                    let text = row.display(col.key);
                    let style = match col.tint {
                        Some(tint) => Style::default().fg(tint(&text)),
                        None => Style::default().fg(Color::White),
                    };
                    vec![
                        Span::styled(pad(&clip(&text, width), width), style),
                        Span::raw(" │ "),
                    ]
                })
                .collect();
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    if !out.page.is_empty() {
        list_state.select(Some(controller.cursor.min(out.page.len() - 1)));
    }
    frame.render_stateful_widget(list, chunks[2], &mut list_state);

    // Pagination strip.
    let mut spans: Vec<Span> = vec![Span::styled(
        format!(" Page {}/{} ", out.current_page, out.total_pages),
        Style::default().fg(Color::DarkGray),
    )];
    spans.push(Span::styled("◀ ", Style::default().fg(Color::DarkGray)));
    for number in &out.page_window {
        if *number == out.current_page {
            spans.push(Span::styled(
                format!("[{}] ", number),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("{} ", number),
                Style::default().fg(Color::White),
            ));
        }
    }
    spans.push(Span::styled("▶ ", Style::default().fg(Color::DarkGray)));

    let (first, last) = if out.page.is_empty() {
        (0, 0)
    } else {
        let first = (out.current_page - 1) * controller.query.page_size + 1;
        (first, first + out.page.len() - 1)
    };
    spans.push(Span::styled(
        format!("│ Showing {} to {} of {} entries", first, last, out.total_items),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[3]);
}

/// Label/value lines for the record detail popup.
pub fn detail_lines<T: TableRow>(columns: &[Column], record: &T) -> Vec<Line<'static>> {
    columns
        .iter()
        .map(|col| {
            Line::from(vec![
                Span::styled(
                    format!("{:>16}: ", col.title),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(record.display(col.key), Style::default().fg(Color::White)),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::FieldValue;
    use crate::query::SortDirection;

    struct Row {
        id: i64,
        status: &'static str,
    }

    impl TableRow for Row {
        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "id" => Some(FieldValue::Number(self.id)),
                "status" => Some(FieldValue::from(self.status)),
                _ => None,
            }
        }
    }

    const COLUMNS: &[Column] = &[
        Column { key: "id", title: "ID", sortable: true, tint: None },
        Column { key: "status", title: "Status", sortable: false, tint: None },
    ];

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                id: i as i64,
                status: if i % 2 == 0 { "Open" } else { "Resolved" },
            })
            .collect()
    }

    fn controller() -> TableController {
        TableController::new(COLUMNS, &["id", "status"], 15)
    }

    #[test]
    fn test_row_navigation_wraps_within_page() {
        let records = rows(3);
        let mut table = controller();

        table.apply(TableOp::NextRow, &records);
        table.apply(TableOp::NextRow, &records);
        assert_eq!(table.cursor, 2);

        table.apply(TableOp::NextRow, &records);
        assert_eq!(table.cursor, 0);

        table.apply(TableOp::PrevRow, &records);
        assert_eq!(table.cursor, 2);
    }

    #[test]
    fn test_sort_on_same_column_toggles_direction() {
        let records = rows(3);
        let mut table = controller();

        table.apply(TableOp::Sort(0), &records);
        assert_eq!(table.query.sort_key.as_deref(), Some("id"));
        assert_eq!(table.query.sort_direction, SortDirection::Ascending);

        table.apply(TableOp::Sort(0), &records);
        assert_eq!(table.query.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_ignores_unsortable_and_unknown_columns() {
        let records = rows(3);
        let mut table = controller();

        table.apply(TableOp::Sort(1), &records);
        assert!(table.query.sort_key.is_none());

        table.apply(TableOp::Sort(9), &records);
        assert!(table.query.sort_key.is_none());
    }

    #[test]
    fn test_paging_clamps_at_both_ends() {
        let records = rows(32);
        let mut table = controller();

        table.apply(TableOp::PrevPage, &records);
        assert_eq!(table.query.current_page, 1);

        table.apply(TableOp::LastPage, &records);
        assert_eq!(table.query.current_page, 3);

        table.apply(TableOp::NextPage, &records);
        assert_eq!(table.query.current_page, 3);
    }

    #[test]
    fn test_search_narrows_and_resets_cursor() {
        let records = rows(32);
        let mut table = controller();
        table.apply(TableOp::LastPage, &records);
        table.apply(TableOp::LastRow, &records);

        table.apply(TableOp::SearchChar('3'), &records);
        assert_eq!(table.query.current_page, 1);
        assert_eq!(table.cursor, 0);

        // "3" matches 3, 13, 23, 30, 31.
        assert_eq!(table.output(&records).total_items, 5);
    }

    #[test]
    fn test_set_filter_replaces_same_field() {
        let records = rows(10);
        let mut table = controller();

        table.apply(
            TableOp::SetFilter { field: "status".to_string(), value: "Open".to_string() },
            &records,
        );
        assert_eq!(table.output(&records).total_items, 5);

        table.apply(
            TableOp::SetFilter { field: "status".to_string(), value: "Resolved".to_string() },
            &records,
        );
        assert_eq!(table.filters.len(), 1);
        assert_eq!(table.output(&records).total_items, 5);

        table.apply(TableOp::ClearFilters, &records);
        assert_eq!(table.output(&records).total_items, 10);
    }

    #[test]
    fn test_cursor_clamps_when_page_shrinks() {
        let records = rows(20);
        let mut table = controller();
        table.apply(TableOp::LastRow, &records);
        assert_eq!(table.cursor, 14);

        table.apply(TableOp::SearchChar('1'), &records);
        let len = table.output(&records).page.len();
        assert!(table.cursor < len);
    }

    #[test]
    fn test_export_rows_cover_all_pages() {
        let records = rows(32);
        let table = controller();
        let (headers, rows) = table.export_rows(&records);
        assert_eq!(headers, vec!["ID", "Status"]);
        assert_eq!(rows.len(), 32);
        assert_eq!(rows[0], vec!["0", "Open"]);
    }
}
