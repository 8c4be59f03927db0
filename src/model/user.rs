//! Operator account records

use super::field::{FieldValue, TableRow};
use std::fmt;

pub const DEPARTMENTS: [&str; 4] = ["Design", "Development", "Marketing", "Sales"];

pub const DESIGNATIONS: [&str; 4] = ["Manager", "Team Lead", "Senior Developer", "Designer"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employee,
    User,
}

impl Role {
    pub fn all() -> [Role; 3] {
        [Role::Admin, Role::Employee, Role::User]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub designation: String,
}

impl TableRow for User {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "name" => Some(FieldValue::from(self.name.as_str())),
            "email" => Some(FieldValue::from(self.email.as_str())),
            "role" => Some(FieldValue::from(self.role.to_string())),
            "department" => Some(FieldValue::from(self.department.as_str())),
            "designation" => Some(FieldValue::from(self.designation.as_str())),
            _ => None,
        }
    }
}
