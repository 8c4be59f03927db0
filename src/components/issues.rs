//! Customer issues view
//!
//! Issues carry the richest vocabulary (category, priority, technician,
//! district) and are the producer side of the technician task board: the
//! selected issue can be pushed onto the board as a task.

use crate::components::form::{FormField, FormState};
use crate::components::table_view::{self, Column, TableController, TableOp};
use crate::model::issue::{Issue, IssueStatus, CATEGORIES, DISTRICTS, TECHNICIANS};
use crate::model::task::{TaskStatus, TechTask};
use crate::model::Priority;
use crate::services::seed;
use chrono::{Days, Local};
use ratatui::{layout::Rect, style::Color, Frame};

fn status_tint(text: &str) -> Color {
    match text {
        "Open" => Color::Yellow,
        "In Progress" => Color::Blue,
        "Resolved" => Color::Green,
        "Closed" => Color::DarkGray,
        _ => Color::Red,
    }
}

fn priority_tint(text: &str) -> Color {
    match text {
        "High" => Color::Red,
        "Medium" => Color::Yellow,
        _ => Color::Green,
    }
}

pub const COLUMNS: &[Column] = &[
    Column { key: "id", title: "ID", sortable: true, tint: None },
    Column { key: "customer_name", title: "Customer", sortable: true, tint: None },
    Column { key: "mobile", title: "Mobile", sortable: false, tint: None },
    Column { key: "category", title: "Category", sortable: true, tint: None },
    Column { key: "priority", title: "Priority", sortable: true, tint: Some(priority_tint) },
    Column { key: "technician", title: "Technician", sortable: true, tint: None },
    Column { key: "district", title: "District", sortable: true, tint: None },
    Column { key: "created_at", title: "Created", sortable: true, tint: None },
    Column { key: "status", title: "Status", sortable: true, tint: Some(status_tint) },
];

const SEARCH_FIELDS: &[&str] = &["id", "customer_name", "mobile", "technician"];

/// Days between assigning an issue and the task falling due.
const ASSIGNMENT_LEAD_DAYS: u64 = 3;

pub struct IssuesView {
    pub records: Vec<Issue>,
    pub table: TableController,
}

impl IssuesView {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: seed::issues(),
            table: TableController::new(COLUMNS, SEARCH_FIELDS, page_size),
        }
    }

    pub fn apply(&mut self, op: TableOp) {
        self.table.apply(op, &self.records);
    }

    pub fn selected(&self) -> Option<&Issue> {
        self.table.selected(&self.records)
    }

    pub fn add_form() -> FormState {
        FormState::new(
            "Add New Issue",
            vec![
                FormField::text("Customer Name"),
                FormField::text("Mobile"),
                FormField::text("Description"),
                FormField::select("Category", &CATEGORIES),
                FormField::select("Priority", &["High", "Medium", "Low"]),
                FormField::select("Technician", &TECHNICIANS),
                FormField::select("District", &DISTRICTS),
            ],
        )
    }

    pub fn submit_form(&mut self, form: &FormState) {
        let issue = Issue {
            id: Issue::next_id(&self.records),
            customer_name: form.value("Customer Name"),
            mobile: form.value("Mobile"),
            description: form.value("Description"),
            category: form.value("Category"),
            priority: Priority::parse(&form.value("Priority")).unwrap_or(Priority::Medium),
            technician: form.value("Technician"),
            district: form.value("District"),
            created_at: Local::now().date_naive(),
            status: IssueStatus::Open,
        };
        self.records.insert(0, issue);
    }

    /// Task for the selected issue, addressed to its technician.
    pub fn task_for_selected(&self, board: &[TechTask]) -> Option<TechTask> {
        let issue = self.selected()?;
        Some(TechTask {
            id: TechTask::next_id(board),
            technician: issue.technician.clone(),
            description: format!("[{}] {}", issue.category, issue.description),
            priority: issue.priority,
            status: TaskStatus::Pending,
            due_date: Local::now()
                .date_naive()
                .checked_add_days(Days::new(ASSIGNMENT_LEAD_DAYS))
                .unwrap_or_else(|| Local::now().date_naive()),
        })
    }

    pub fn filter_options() -> Vec<(String, String)> {
        let mut options: Vec<(String, String)> = IssueStatus::all()
            .iter()
            .map(|s| ("status".to_string(), s.to_string()))
            .collect();
        options.extend(
            Priority::all()
                .iter()
                .map(|p| ("priority".to_string(), p.to_string())),
        );
        options.extend(
            DISTRICTS
                .iter()
                .map(|d| ("district".to_string(), d.to_string())),
        );
        options
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        table_view::render(frame, area, &self.table, &self.records, "Customer Issues");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_copies_issue_fields_onto_the_task() {
        let view = IssuesView::new(15);
        let issue = view.selected().cloned().unwrap();

        let task = view.task_for_selected(&[]).unwrap();
        assert_eq!(task.technician, issue.technician);
        assert_eq!(task.priority, issue.priority);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.description.contains(&issue.category));
        assert!(task.description.contains(&issue.description));
    }

    #[test]
    fn test_filter_options_span_three_fields() {
        let options = IssuesView::filter_options();
        assert!(options.iter().any(|(f, v)| f == "status" && v == "Closed"));
        assert!(options.iter().any(|(f, v)| f == "priority" && v == "High"));
        assert!(options
            .iter()
            .any(|(f, v)| f == "district" && v == "West District"));
    }
}
