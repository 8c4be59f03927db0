//! Technician task records
//!
//! The one record type that crosses views: customer issues push tasks onto
//! the shared store, the technician-tasks view reads them back. Serializable
//! for that reason.

use super::field::{FieldValue, TableRow};
use super::Priority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechTask {
    pub id: String,
    pub technician: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
}

impl TechTask {
    pub fn next_id(existing: &[TechTask]) -> String {
        let max = existing
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("{}", max + 1)
    }
}

impl TableRow for TechTask {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "technician" => Some(FieldValue::from(self.technician.as_str())),
            "description" => Some(FieldValue::from(self.description.as_str())),
            "priority" => Some(FieldValue::from(self.priority.to_string())),
            "status" => Some(FieldValue::from(self.status.to_string())),
            "due_date" => Some(FieldValue::Date(self.due_date)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_roundtrips_through_json() {
        let task = TechTask {
            id: "1".to_string(),
            technician: "John Doe".to_string(),
            description: "Install new cable box".to_string(),
            priority: Priority::Medium,
            status: TaskStatus::InProgress,
            due_date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
        };

        let json = serde_json::to_string(&task).unwrap();
        let back: TechTask = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, task.id);
        assert_eq!(back.status, TaskStatus::InProgress);
        assert_eq!(back.due_date, task.due_date);
    }
}
