//! Set-top-box repair records

use super::field::{FieldValue, TableRow};
use super::Priority;
use chrono::NaiveDate;
use std::fmt;

pub const ISSUE_TYPES: [&str; 7] = [
    "No Signal",
    "No Power",
    "Decryption Failed",
    "Smart Card Failed",
    "HDMI/AV Problem",
    "Network",
    "Remote Button Problem",
];

pub const TECHNICIANS: [&str; 4] = ["Mike Johnson", "Sarah Lee", "John Smith", "Lisa Wong"];

/// STB is the set-top box itself, STP the platform unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Stb,
    Stp,
}

impl DeviceType {
    pub fn name(&self) -> &'static str {
        match self {
            DeviceType::Stb => "STB",
            DeviceType::Stp => "STP",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairStatus {
    Pending,
    InProgress,
    Resolved,
}

impl RepairStatus {
    pub fn all() -> [RepairStatus; 3] {
        [
            RepairStatus::Pending,
            RepairStatus::InProgress,
            RepairStatus::Resolved,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RepairStatus::Pending => "Pending",
            RepairStatus::InProgress => "In Progress",
            RepairStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct StbRepair {
    pub id: String,
    pub device_id: String,
    pub customer_name: String,
    pub contact_number: String,
    pub device_type: DeviceType,
    pub issue: String,
    pub status: RepairStatus,
    pub priority: Priority,
    pub technician: String,
    pub created_at: NaiveDate,
}

impl StbRepair {
    /// Ids run `REP001`, `REP002`, ...
    pub fn next_id(existing: &[StbRepair]) -> String {
        let max = existing
            .iter()
            .filter_map(|r| r.id.strip_prefix("REP"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("REP{:03}", max + 1)
    }

    pub fn count_with_status(records: &[StbRepair], status: RepairStatus) -> usize {
        records.iter().filter(|r| r.status == status).count()
    }
}

impl TableRow for StbRepair {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "device_id" => Some(FieldValue::from(self.device_id.as_str())),
            "customer_name" => Some(FieldValue::from(self.customer_name.as_str())),
            "contact_number" => Some(FieldValue::from(self.contact_number.as_str())),
            "device_type" => Some(FieldValue::from(self.device_type.to_string())),
            "issue" => Some(FieldValue::from(self.issue.as_str())),
            "status" => Some(FieldValue::from(self.status.to_string())),
            "priority" => Some(FieldValue::from(self.priority.to_string())),
            "technician" => Some(FieldValue::from(self.technician.as_str())),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            _ => None,
        }
    }
}
