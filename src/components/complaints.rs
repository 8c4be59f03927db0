//! Complaints view
//!
//! Wrong-IC complaints with live search, sortable columns and an
//! add-complaint form.

use crate::components::form::{FormField, FormState};
use crate::components::table_view::{self, Column, TableController, TableOp};
use crate::model::complaint::{Complaint, ComplaintStatus};
use crate::services::seed;
use chrono::Local;
use ratatui::{layout::Rect, style::Color, Frame};

fn status_tint(text: &str) -> Color {
    match text {
        "Open" => Color::Yellow,
        "In Progress" => Color::Blue,
        "Resolved" => Color::Green,
        _ => Color::Red,
    }
}

pub const COLUMNS: &[Column] = &[
    Column { key: "id", title: "ID", sortable: true, tint: None },
    Column { key: "icno", title: "ICno", sortable: true, tint: None },
    Column { key: "wrong_icno", title: "Wrong ICno", sortable: false, tint: None },
    Column { key: "mobile", title: "Mobile", sortable: false, tint: None },
    Column { key: "user_name", title: "User Name", sortable: true, tint: None },
    Column { key: "status", title: "Status", sortable: true, tint: Some(status_tint) },
    Column { key: "created_at", title: "Created At", sortable: true, tint: None },
];

const SEARCH_FIELDS: &[&str] = &["icno", "wrong_icno", "mobile", "user_name"];

pub struct ComplaintsView {
    pub records: Vec<Complaint>,
    pub table: TableController,
}

impl ComplaintsView {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: seed::complaints(),
            table: TableController::new(COLUMNS, SEARCH_FIELDS, page_size),
        }
    }

    pub fn apply(&mut self, op: TableOp) {
        self.table.apply(op, &self.records);
    }

    pub fn selected(&self) -> Option<&Complaint> {
        self.table.selected(&self.records)
    }

    pub fn add_form() -> FormState {
        FormState::new(
            "Add New Complaint",
            vec![
                FormField::text("ICno"),
                FormField::text("Wrong ICno"),
                FormField::text("Mobile"),
                FormField::text("User Name"),
            ],
        )
    }

    /// New complaints open at the top of the list.
    pub fn submit_form(&mut self, form: &FormState) {
        let complaint = Complaint {
            id: Complaint::next_id(&self.records),
            icno: form.value("ICno"),
            wrong_icno: form.value("Wrong ICno"),
            mobile: form.value("Mobile"),
            user_name: form.value("User Name"),
            status: ComplaintStatus::Open,
            created_at: Local::now().date_naive(),
        };
        self.records.insert(0, complaint);
    }

    pub fn filter_options() -> Vec<(String, String)> {
        ComplaintStatus::all()
            .iter()
            .map(|s| ("status".to_string(), s.to_string()))
            .collect()
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        table_view::render(frame, area, &self.table, &self.records, "Complaints");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_complaint_lands_on_top_as_open() {
        let mut view = ComplaintsView::new(15);
        let before = view.records.len();

        let mut form = ComplaintsView::add_form();
        for c in "765432".chars() {
            form.input(c);
        }
        form.next_field();
        form.input('9');
        form.next_field();
        form.input('2');
        form.next_field();
        form.input('X');
        assert!(form.validate());

        view.submit_form(&form);
        assert_eq!(view.records.len(), before + 1);
        assert_eq!(view.records[0].icno, "765432");
        assert_eq!(view.records[0].status, ComplaintStatus::Open);
    }

    #[test]
    fn test_search_fields_match_the_web_page() {
        // The original page searched icno, wrong icno, mobile and user name.
        assert_eq!(SEARCH_FIELDS.len(), 4);
        assert!(!SEARCH_FIELDS.contains(&"status"));
    }
}
