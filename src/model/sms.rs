//! SMS delivery log and message templates

use super::field::{FieldValue, TableRow};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsStatus {
    Sent,
    Delivered,
    Pending,
    Failed,
}

impl SmsStatus {
    pub fn all() -> [SmsStatus; 4] {
        [
            SmsStatus::Sent,
            SmsStatus::Delivered,
            SmsStatus::Pending,
            SmsStatus::Failed,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SmsStatus::Sent => "Sent",
            SmsStatus::Delivered => "Delivered",
            SmsStatus::Pending => "Pending",
            SmsStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for SmsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct SmsLog {
    pub id: String,
    pub recipient: String,
    pub message: String,
    pub template: String,
    pub status: SmsStatus,
    pub sent_at: NaiveDateTime,
    pub delivered_at: Option<NaiveDateTime>,
}

impl SmsLog {
    /// Ids run `SMS001`, `SMS002`, ...
    pub fn next_id(existing: &[SmsLog]) -> String {
        let max = existing
            .iter()
            .filter_map(|l| l.id.strip_prefix("SMS"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("SMS{:03}", max + 1)
    }
}

impl TableRow for SmsLog {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "recipient" => Some(FieldValue::from(self.recipient.as_str())),
            "message" => Some(FieldValue::from(self.message.as_str())),
            "template" => Some(FieldValue::from(self.template.as_str())),
            "status" => Some(FieldValue::from(self.status.to_string())),
            "sent_at" => Some(FieldValue::DateTime(self.sent_at)),
            "delivered_at" => self.delivered_at.map(FieldValue::DateTime),
            _ => None,
        }
    }
}

/// A message template with `{variable}` placeholders. Loaded from the
/// optional user template file, hence serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsTemplate {
    pub id: String,
    pub name: String,
    pub content: String,
    pub variables: Vec<String>,
}
