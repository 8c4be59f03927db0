//! SMS campaign records

use super::field::{FieldValue, TableRow};
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Scheduled,
    Completed,
}

impl CampaignStatus {
    pub fn all() -> [CampaignStatus; 3] {
        [
            CampaignStatus::Active,
            CampaignStatus::Scheduled,
            CampaignStatus::Completed,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Scheduled => "Scheduled",
            CampaignStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub sent_count: i64,
    pub delivery_rate: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub message: String,
    pub target_audience: String,
}

impl Campaign {
    pub fn next_id(existing: &[Campaign]) -> String {
        let max = existing
            .iter()
            .filter_map(|c| c.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("{}", max + 1)
    }

    pub fn count_with_status(records: &[Campaign], status: CampaignStatus) -> usize {
        records.iter().filter(|c| c.status == status).count()
    }
}

impl TableRow for Campaign {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "name" => Some(FieldValue::from(self.name.as_str())),
            "status" => Some(FieldValue::from(self.status.to_string())),
            "sent_count" => Some(FieldValue::Number(self.sent_count)),
            "delivery_rate" => Some(FieldValue::Float(self.delivery_rate)),
            "start_date" => Some(FieldValue::Date(self.start_date)),
            "end_date" => Some(FieldValue::Date(self.end_date)),
            "message" => Some(FieldValue::from(self.message.as_str())),
            "target_audience" => Some(FieldValue::from(self.target_audience.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(id: &str, rate: f64) -> Campaign {
        Campaign {
            id: id.to_string(),
            name: "Summer Sale".to_string(),
            status: CampaignStatus::Active,
            sent_count: 5000,
            delivery_rate: rate,
            start_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
            message: String::new(),
            target_audience: String::new(),
        }
    }

    #[test]
    fn test_next_id_follows_highest_numeric() {
        let records = vec![campaign("1", 98.5), campaign("3", 99.1)];
        assert_eq!(Campaign::next_id(&records), "4");
        assert_eq!(Campaign::next_id(&[]), "1");
    }

    #[test]
    fn test_numeric_fields_expose_their_kind() {
        let c = campaign("1", 98.5);
        assert_eq!(c.field("sent_count"), Some(FieldValue::Number(5000)));
        assert_eq!(c.display("delivery_rate"), "98.5");
        assert_eq!(c.display("start_date"), "Jun 1, 2023");
    }
}
