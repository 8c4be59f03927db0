//! User management view

use crate::components::form::{FormField, FormState};
use crate::components::table_view::{self, Column, TableController, TableOp};
use crate::model::user::{Role, User, DEPARTMENTS, DESIGNATIONS};
use crate::services::seed;
use ratatui::{layout::Rect, style::Color, Frame};

fn role_tint(text: &str) -> Color {
    match text {
        "admin" => Color::Magenta,
        "employee" => Color::Cyan,
        _ => Color::White,
    }
}

pub const COLUMNS: &[Column] = &[
    Column { key: "id", title: "ID", sortable: true, tint: None },
    Column { key: "name", title: "Name", sortable: true, tint: None },
    Column { key: "email", title: "Email", sortable: true, tint: None },
    Column { key: "role", title: "Role", sortable: true, tint: Some(role_tint) },
    Column { key: "department", title: "Department", sortable: true, tint: None },
    Column { key: "designation", title: "Designation", sortable: true, tint: None },
];

const SEARCH_FIELDS: &[&str] = &["name", "email"];

pub struct UsersView {
    pub records: Vec<User>,
    pub table: TableController,
}

impl UsersView {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: seed::users(),
            table: TableController::new(COLUMNS, SEARCH_FIELDS, page_size),
        }
    }

    pub fn apply(&mut self, op: TableOp) {
        self.table.apply(op, &self.records);
    }

    pub fn selected(&self) -> Option<&User> {
        self.table.selected(&self.records)
    }

    pub fn add_form() -> FormState {
        FormState::new(
            "Add New User",
            vec![
                FormField::text("Name"),
                FormField::text("Email"),
                FormField::select("Role", &["employee", "admin", "user"]),
                FormField::select("Department", &DEPARTMENTS),
                FormField::select("Designation", &DESIGNATIONS),
            ],
        )
    }

    pub fn submit_form(&mut self, form: &FormState) {
        let role = match form.value("Role").as_str() {
            "admin" => Role::Admin,
            "user" => Role::User,
            _ => Role::Employee,
        };
        let next = self
            .records
            .iter()
            .filter_map(|u| u.id.strip_prefix("user-"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        self.records.push(User {
            id: format!("user-{}", next),
            name: form.value("Name"),
            email: form.value("Email"),
            role,
            department: form.value("Department"),
            designation: form.value("Designation"),
        });
    }

    pub fn filter_options() -> Vec<(String, String)> {
        let mut options: Vec<(String, String)> = Role::all()
            .iter()
            .map(|r| ("role".to_string(), r.to_string()))
            .collect();
        options.extend(
            DEPARTMENTS
                .iter()
                .map(|d| ("department".to_string(), d.to_string())),
        );
        options
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        table_view::render(frame, area, &self.table, &self.records, "Users");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_the_next_id() {
        let mut view = UsersView::new(15);
        let mut form = UsersView::add_form();
        form.input('Z');
        form.next_field();
        form.input('z');
        assert!(form.validate());

        view.submit_form(&form);
        let user = view.records.last().unwrap();
        assert_eq!(user.id, "user-41");
        assert_eq!(user.role, Role::Employee);
    }
}
