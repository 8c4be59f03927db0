//! SMS view
//!
//! The delivery log plus a two-stage compose flow: pick a template, then
//! fill the recipient and the template's declared variables.

use crate::components::form::{FormField, FormState};
use crate::components::table_view::{self, Column, TableController, TableOp};
use crate::model::sms::{SmsLog, SmsStatus, SmsTemplate};
use crate::services::{seed, templates};
use chrono::Local;
use ratatui::{layout::Rect, style::Color, Frame};
use std::collections::HashMap;

fn status_tint(text: &str) -> Color {
    match text {
        "Delivered" => Color::Green,
        "Sent" => Color::Cyan,
        "Pending" => Color::Yellow,
        _ => Color::Red,
    }
}

pub const COLUMNS: &[Column] = &[
    Column { key: "id", title: "ID", sortable: true, tint: None },
    Column { key: "recipient", title: "Recipient", sortable: true, tint: None },
    Column { key: "template", title: "Template", sortable: true, tint: None },
    Column { key: "message", title: "Message", sortable: false, tint: None },
    Column { key: "status", title: "Status", sortable: true, tint: Some(status_tint) },
    Column { key: "sent_at", title: "Sent At", sortable: true, tint: None },
    Column { key: "delivered_at", title: "Delivered At", sortable: false, tint: None },
];

const SEARCH_FIELDS: &[&str] = &["id", "recipient", "message", "template"];

pub struct SmsView {
    pub records: Vec<SmsLog>,
    pub templates: Vec<SmsTemplate>,
    pub table: TableController,
    /// Template chosen in stage one of the compose flow.
    pub compose_template: Option<usize>,
}

impl SmsView {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: seed::sms_logs(),
            templates: templates::load_templates(),
            table: TableController::new(COLUMNS, SEARCH_FIELDS, page_size),
            compose_template: None,
        }
    }

    pub fn apply(&mut self, op: TableOp) {
        self.table.apply(op, &self.records);
    }

    pub fn selected(&self) -> Option<&SmsLog> {
        self.table.selected(&self.records)
    }

    /// Stage one: choose the template.
    pub fn template_form(&self) -> FormState {
        let names: Vec<&str> = self.templates.iter().map(|t| t.name.as_str()).collect();
        FormState::new("Compose SMS", vec![FormField::select("Template", &names)])
    }

    /// Stage two: recipient plus one input per declared variable. Variables
    /// may be left blank; they render as gaps the operator can see in the
    /// log.
    pub fn message_form(&self, template_index: usize) -> FormState {
        let mut fields = vec![FormField::text("Recipient")];
        if let Some(template) = self.templates.get(template_index) {
            for variable in &template.variables {
                fields.push(FormField::optional_text(variable));
            }
        }
        FormState::new("Compose SMS", fields)
    }

    /// Render the chosen template with the form's variable values and append
    /// the message to the log. Returns the recipient for the status line.
    pub fn send(&mut self, template_index: usize, form: &FormState) -> Option<String> {
        let template = self.templates.get(template_index)?.clone();

        let mut values = HashMap::new();
        for variable in &template.variables {
            values.insert(variable.clone(), form.value(variable));
        }

        let recipient = form.value("Recipient");
        let log = SmsLog {
            id: SmsLog::next_id(&self.records),
            recipient: recipient.clone(),
            message: templates::render(&template, &values),
            template: template.name.clone(),
            status: SmsStatus::Sent,
            sent_at: Local::now().naive_local(),
            delivered_at: None,
        };
        self.records.insert(0, log);
        Some(recipient)
    }

    pub fn delivered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|l| l.status == SmsStatus::Delivered)
            .count()
    }

    pub fn filter_options() -> Vec<(String, String)> {
        SmsStatus::all()
            .iter()
            .map(|s| ("status".to_string(), s.to_string()))
            .collect()
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        table_view::render(frame, area, &self.table, &self.records, "SMS Log");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_renders_variables_into_the_log() {
        let mut view = SmsView::new(15);
        view.templates = templates::builtin_templates();
        let before = view.records.len();

        let mut form = view.message_form(0);
        // Recipient
        for c in "+252615000001".chars() {
            form.input(c);
        }
        // customerName
        form.next_field();
        for c in "Amina".chars() {
            form.input(c);
        }

        let recipient = view.send(0, &form).unwrap();
        assert_eq!(recipient, "+252615000001");
        assert_eq!(view.records.len(), before + 1);

        let log = &view.records[0];
        assert_eq!(log.status, SmsStatus::Sent);
        assert!(log.delivered_at.is_none());
        assert!(log.message.starts_with("Dear Amina"));
        // Unfilled variables render as empty strings, not placeholders.
        assert!(!log.message.contains("{customerName}"));
    }

    #[test]
    fn test_message_form_tracks_template_variables() {
        let mut view = SmsView::new(15);
        view.templates = templates::builtin_templates();

        let form = view.message_form(2);
        // Recipient + the payment template's four variables.
        assert_eq!(form.fields.len(), 5);
        assert_eq!(form.fields[1].label, "customerName");
    }
}
