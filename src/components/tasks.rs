//! Technician tasks view
//!
//! The consumer side of the task board. Records come from the shared store;
//! a refresh re-reads it to pick up tasks assigned from the customer-issues
//! view.

use crate::components::form::{FormField, FormState};
use crate::components::table_view::{self, Column, TableController, TableOp};
use crate::model::issue::TECHNICIANS;
use crate::model::task::{TaskStatus, TechTask};
use crate::model::Priority;
use chrono::{Days, Local};
use ratatui::{layout::Rect, style::Color, Frame};

fn status_tint(text: &str) -> Color {
    match text {
        "Pending" => Color::Yellow,
        "In Progress" => Color::Blue,
        "Completed" => Color::Green,
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
    Column { key: "technician", title: "Technician", sortable: true, tint: None },
    Column { key: "description", title: "Description", sortable: false, tint: None },
    Column { key: "priority", title: "Priority", sortable: true, tint: Some(priority_tint) },
    Column { key: "status", title: "Status", sortable: true, tint: Some(status_tint) },
    Column { key: "due_date", title: "Due Date", sortable: true, tint: None },
];

const SEARCH_FIELDS: &[&str] = &["technician", "description"];

const DUE_CHOICES: [&str; 4] = ["1 day", "3 days", "7 days", "14 days"];

pub struct TasksView {
    pub records: Vec<TechTask>,
    pub table: TableController,
}

impl TasksView {
    pub fn new(page_size: usize, records: Vec<TechTask>) -> Self {
        Self {
            records,
            table: TableController::new(COLUMNS, SEARCH_FIELDS, page_size),
        }
    }

    pub fn apply(&mut self, op: TableOp) {
        self.table.apply(op, &self.records);
    }

    pub fn selected(&self) -> Option<&TechTask> {
        self.table.selected(&self.records)
    }

    pub fn add_form() -> FormState {
        FormState::new(
            "Add New Task",
            vec![
                FormField::select("Technician", &TECHNICIANS),
                FormField::text("Description"),
                FormField::select("Priority", &["Medium", "Low", "High"]),
                FormField::select("Due", &DUE_CHOICES),
            ],
        )
    }

    /// Build the task described by the form; the caller writes it through
    /// the store.
    pub fn build_task(&self, form: &FormState) -> TechTask {
        let days = form
            .value("Due")
            .split_whitespace()
            .next()
            .and_then(|n| n.parse::<u64>().ok())
            .unwrap_or(7);
        let today = Local::now().date_naive();

        TechTask {
            id: TechTask::next_id(&self.records),
            technician: form.value("Technician"),
            description: form.value("Description"),
            priority: Priority::parse(&form.value("Priority")).unwrap_or(Priority::Medium),
            status: TaskStatus::Pending,
            due_date: today.checked_add_days(Days::new(days)).unwrap_or(today),
        }
    }

    pub fn filter_options() -> Vec<(String, String)> {
        TaskStatus::all()
            .iter()
            .map(|s| ("status".to_string(), s.to_string()))
            .collect()
    }

    pub fn open_count(&self) -> usize {
        self.records
            .iter()
            .filter(|t| t.status != TaskStatus::Completed)
            .count()
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        table_view::render(frame, area, &self.table, &self.records, "Technician Tasks");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_task_parses_the_due_choice() {
        let view = TasksView::new(15, Vec::new());
        let mut form = TasksView::add_form();
        form.next_field();
        form.input('F');
        form.next_field();
        form.next_field();
        form.cycle(1); // "3 days"
        assert!(form.validate());

        let task = view.build_task(&form);
        let today = Local::now().date_naive();
        assert_eq!(task.due_date, today.checked_add_days(Days::new(3)).unwrap());
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.id, "1");
    }
}
