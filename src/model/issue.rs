//! Customer issue records

use super::field::{FieldValue, TableRow};
use super::Priority;
use chrono::NaiveDate;
use std::fmt;

pub const CATEGORIES: [&str; 5] = ["Technical", "Billing", "Service", "Network", "Hardware"];

pub const TECHNICIANS: [&str; 4] = ["John Smith", "Sarah Wilson", "Mike Johnson", "Emily Brown"];

pub const DISTRICTS: [&str; 4] = [
    "North District",
    "South District",
    "East District",
    "West District",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl IssueStatus {
    pub fn all() -> [IssueStatus; 4] {
        [
            IssueStatus::Open,
            IssueStatus::InProgress,
            IssueStatus::Resolved,
            IssueStatus::Closed,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Issue {
    pub id: String,
    pub customer_name: String,
    pub mobile: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub technician: String,
    pub district: String,
    pub created_at: NaiveDate,
    pub status: IssueStatus,
}

impl Issue {
    /// Ids run `ISS001`, `ISS002`, ...
    pub fn next_id(existing: &[Issue]) -> String {
        let max = existing
            .iter()
            .filter_map(|i| i.id.strip_prefix("ISS"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("ISS{:03}", max + 1)
    }
}

impl TableRow for Issue {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "customer_name" => Some(FieldValue::from(self.customer_name.as_str())),
            "mobile" => Some(FieldValue::from(self.mobile.as_str())),
            "description" => Some(FieldValue::from(self.description.as_str())),
            "category" => Some(FieldValue::from(self.category.as_str())),
            "priority" => Some(FieldValue::from(self.priority.to_string())),
            "technician" => Some(FieldValue::from(self.technician.as_str())),
            "district" => Some(FieldValue::from(self.district.as_str())),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            "status" => Some(FieldValue::from(self.status.to_string())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_pads_to_three_digits() {
        let issue = Issue {
            id: "ISS007".to_string(),
            customer_name: "Customer 7".to_string(),
            mobile: "0611000007".to_string(),
            description: "Sample issue".to_string(),
            category: "Technical".to_string(),
            priority: Priority::High,
            technician: "John Smith".to_string(),
            district: "North District".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            status: IssueStatus::Open,
        };
        assert_eq!(Issue::next_id(&[issue]), "ISS008");
        assert_eq!(Issue::next_id(&[]), "ISS001");
    }
}
