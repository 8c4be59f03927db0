//! Model layer - domain records, shared stores and UI state

pub mod auth;
pub mod campaign;
pub mod complaint;
pub mod field;
pub mod issue;
pub mod modal;
pub mod repair;
pub mod sms;
pub mod task;
pub mod taskboard;
pub mod ui;
pub mod user;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority scale shared by issues, repairs and technician tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn all() -> [Priority; 3] {
        [Priority::Low, Priority::Medium, Priority::High]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Priority> {
        Priority::all().into_iter().find(|p| p.name() == s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
