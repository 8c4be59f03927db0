//! SMS campaigns view
//!
//! The marketing side of the SMS module: bulk campaigns with send counts and
//! delivery rates, searched by name. New campaigns enter as Scheduled with
//! nothing sent yet.

use crate::components::form::{FormField, FormState};
use crate::components::table_view::{self, Column, TableController, TableOp};
use crate::model::campaign::{Campaign, CampaignStatus};
use crate::services::seed;
use chrono::{Days, Local};
use ratatui::{layout::Rect, style::Color, Frame};

fn status_tint(text: &str) -> Color {
    match text {
        "Active" => Color::Green,
        "Scheduled" => Color::Yellow,
        "Completed" => Color::DarkGray,
        _ => Color::Red,
    }
}

pub const COLUMNS: &[Column] = &[
    Column { key: "id", title: "ID", sortable: true, tint: None },
    Column { key: "name", title: "Name", sortable: true, tint: None },
    Column { key: "status", title: "Status", sortable: true, tint: Some(status_tint) },
    Column { key: "sent_count", title: "Sent", sortable: true, tint: None },
    Column { key: "delivery_rate", title: "Delivery %", sortable: true, tint: None },
    Column { key: "start_date", title: "Start", sortable: true, tint: None },
    Column { key: "end_date", title: "End", sortable: true, tint: None },
    Column { key: "target_audience", title: "Audience", sortable: false, tint: None },
];

const SEARCH_FIELDS: &[&str] = &["name"];

const DURATION_CHOICES: [&str; 3] = ["7 days", "14 days", "30 days"];

pub struct CampaignsView {
    pub records: Vec<Campaign>,
    pub table: TableController,
}

impl CampaignsView {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: seed::campaigns(),
            table: TableController::new(COLUMNS, SEARCH_FIELDS, page_size),
        }
    }

    pub fn apply(&mut self, op: TableOp) {
        self.table.apply(op, &self.records);
    }

    pub fn selected(&self) -> Option<&Campaign> {
        self.table.selected(&self.records)
    }

    pub fn add_form() -> FormState {
        FormState::new(
            "New Campaign",
            vec![
                FormField::text("Name"),
                FormField::text("Message"),
                FormField::optional_text("Audience"),
                FormField::select("Duration", &DURATION_CHOICES),
            ],
        )
    }

    pub fn submit_form(&mut self, form: &FormState) {
        let days = form
            .value("Duration")
            .split_whitespace()
            .next()
            .and_then(|n| n.parse::<u64>().ok())
            .unwrap_or(7);
        let today = Local::now().date_naive();

        let campaign = Campaign {
            id: Campaign::next_id(&self.records),
            name: form.value("Name"),
            status: CampaignStatus::Scheduled,
            sent_count: 0,
            delivery_rate: 0.0,
            start_date: today,
            end_date: today.checked_add_days(Days::new(days)).unwrap_or(today),
            message: form.value("Message"),
            target_audience: form.value("Audience"),
        };
        self.records.insert(0, campaign);
    }

    pub fn filter_options() -> Vec<(String, String)> {
        CampaignStatus::all()
            .iter()
            .map(|s| ("status".to_string(), s.to_string()))
            .collect()
    }

    pub fn active_count(&self) -> usize {
        Campaign::count_with_status(&self.records, CampaignStatus::Active)
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        table_view::render(frame, area, &self.table, &self.records, "SMS Campaigns");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_campaign_is_scheduled_with_nothing_sent() {
        let mut view = CampaignsView::new(15);
        let before = view.records.len();

        let mut form = CampaignsView::add_form();
        for c in "Winter Sale".chars() {
            form.input(c);
        }
        form.next_field();
        form.input('W');
        form.next_field();
        form.next_field();
        form.cycle(2); // "30 days"
        assert!(form.validate());

        view.submit_form(&form);
        assert_eq!(view.records.len(), before + 1);

        let campaign = &view.records[0];
        assert_eq!(campaign.id, "4");
        assert_eq!(campaign.status, CampaignStatus::Scheduled);
        assert_eq!(campaign.sent_count, 0);
        let today = Local::now().date_naive();
        assert_eq!(
            campaign.end_date,
            today.checked_add_days(Days::new(30)).unwrap()
        );
    }

    #[test]
    fn test_sorting_by_delivery_rate_uses_numeric_order() {
        let mut view = CampaignsView::new(15);
        // Column 5 is "Delivery %".
        view.apply(TableOp::Sort(4));

        let out = view.table.output(&view.records);
        let rates: Vec<f64> = out.page.iter().map(|c| c.delivery_rate).collect();
        assert_eq!(rates, vec![0.0, 98.5, 99.1]);
    }
}
