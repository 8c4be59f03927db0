//! Complaint records
//!
//! A complaint tracks a wrongly registered IC number against the customer's
//! actual one.

use super::field::{FieldValue, TableRow};
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn all() -> [ComplaintStatus; 3] {
        [
            ComplaintStatus::Open,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComplaintStatus::Open => "Open",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Complaint {
    pub id: String,
    pub icno: String,
    pub wrong_icno: String,
    pub mobile: String,
    pub user_name: String,
    pub status: ComplaintStatus,
    pub created_at: NaiveDate,
}

impl Complaint {
    /// Allocate the next id above the highest numeric id in use.
    pub fn next_id(existing: &[Complaint]) -> String {
        let max = existing
            .iter()
            .filter_map(|c| c.id.parse::<u64>().ok())
            .max()
            .unwrap_or(100_000);
        format!("{}", max + 1)
    }

    pub fn count_with_status(records: &[Complaint], status: ComplaintStatus) -> usize {
        records.iter().filter(|c| c.status == status).count()
    }
}

impl TableRow for Complaint {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "icno" => Some(FieldValue::from(self.icno.as_str())),
            "wrong_icno" => Some(FieldValue::from(self.wrong_icno.as_str())),
            "mobile" => Some(FieldValue::from(self.mobile.as_str())),
            "user_name" => Some(FieldValue::from(self.user_name.as_str())),
            "status" => Some(FieldValue::from(self.status.to_string())),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint(id: &str) -> Complaint {
        Complaint {
            id: id.to_string(),
            icno: "765432".to_string(),
            wrong_icno: "765433".to_string(),
            mobile: "2345678901".to_string(),
            user_name: "John Doe".to_string(),
            status: ComplaintStatus::Open,
            created_at: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_next_id_follows_highest() {
        let records = vec![complaint("123456"), complaint("300010")];
        assert_eq!(Complaint::next_id(&records), "300011");
    }

    #[test]
    fn test_next_id_on_empty_collection() {
        assert_eq!(Complaint::next_id(&[]), "100001");
    }

    #[test]
    fn test_field_lookup() {
        let c = complaint("123456");
        assert_eq!(c.display("status"), "Open");
        assert_eq!(c.display("created_at"), "Jun 1, 2023");
        assert_eq!(c.display("nonexistent"), "");
    }
}
