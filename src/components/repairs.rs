//! STB repair view

use crate::components::form::{FormField, FormState};
use crate::components::table_view::{self, Column, TableController, TableOp};
use crate::model::repair::{DeviceType, RepairStatus, StbRepair, ISSUE_TYPES, TECHNICIANS};
use crate::model::Priority;
use crate::services::seed;
use chrono::Local;
use ratatui::{layout::Rect, style::Color, Frame};

fn status_tint(text: &str) -> Color {
    match text {
        "Pending" => Color::Yellow,
        "In Progress" => Color::Blue,
        "Resolved" => Color::Green,
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
    Column { key: "device_id", title: "Device", sortable: true, tint: None },
    Column { key: "customer_name", title: "Customer", sortable: true, tint: None },
    Column { key: "contact_number", title: "Contact", sortable: false, tint: None },
    Column { key: "device_type", title: "Type", sortable: true, tint: None },
    Column { key: "issue", title: "Issue", sortable: false, tint: None },
    Column { key: "status", title: "Status", sortable: true, tint: Some(status_tint) },
    Column { key: "priority", title: "Priority", sortable: true, tint: Some(priority_tint) },
    Column { key: "technician", title: "Technician", sortable: true, tint: None },
    Column { key: "created_at", title: "Created", sortable: true, tint: None },
];

const SEARCH_FIELDS: &[&str] = &["id", "device_id", "customer_name", "technician"];

pub struct RepairsView {
    pub records: Vec<StbRepair>,
    pub table: TableController,
}

impl RepairsView {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: seed::repairs(),
            table: TableController::new(COLUMNS, SEARCH_FIELDS, page_size),
        }
    }

    pub fn apply(&mut self, op: TableOp) {
        self.table.apply(op, &self.records);
    }

    pub fn selected(&self) -> Option<&StbRepair> {
        self.table.selected(&self.records)
    }

    pub fn add_form() -> FormState {
        FormState::new(
            "New Repair Request",
            vec![
                FormField::text("Device ID"),
                FormField::text("Customer Name"),
                FormField::text("Contact Number"),
                FormField::select("Device Type", &["STB", "STP"]),
                FormField::select("Issue Type", &ISSUE_TYPES),
                FormField::select("Priority", &["Medium", "Low", "High"]),
                FormField::select("Technician", &TECHNICIANS),
            ],
        )
    }

    pub fn submit_form(&mut self, form: &FormState) {
        let device_type = match form.value("Device Type").as_str() {
            "STP" => DeviceType::Stp,
            _ => DeviceType::Stb,
        };
        let repair = StbRepair {
            id: StbRepair::next_id(&self.records),
            device_id: form.value("Device ID"),
            customer_name: form.value("Customer Name"),
            contact_number: form.value("Contact Number"),
            device_type,
            issue: form.value("Issue Type"),
            status: RepairStatus::Pending,
            priority: Priority::parse(&form.value("Priority")).unwrap_or(Priority::Medium),
            technician: form.value("Technician"),
            created_at: Local::now().date_naive(),
        };
        self.records.insert(0, repair);
    }

    pub fn filter_options() -> Vec<(String, String)> {
        let mut options: Vec<(String, String)> = RepairStatus::all()
            .iter()
            .map(|s| ("status".to_string(), s.to_string()))
            .collect();
        options.extend(
            Priority::all()
                .iter()
                .map(|p| ("priority".to_string(), p.to_string())),
        );
        options
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        table_view::render(frame, area, &self.table, &self.records, "STB Repairs");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_repairs_start_pending() {
        let mut view = RepairsView::new(15);
        let mut form = RepairsView::add_form();
        form.input('S');
        form.next_field();
        form.input('J');
        form.next_field();
        form.input('0');
        assert!(form.validate());

        view.submit_form(&form);
        let repair = &view.records[0];
        assert_eq!(repair.status, RepairStatus::Pending);
        assert_eq!(repair.device_type, DeviceType::Stb);
        assert_eq!(repair.priority, Priority::Medium);
        assert_eq!(repair.issue, "No Signal");
    }
}
