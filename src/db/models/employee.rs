//! Employee Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Employee row; `id` is absent until the store assigns one on insert
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Update employee payload (full overwrite of the mutable fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeCreate {
    /// Build the unsaved employee this payload describes
    pub fn into_employee(self) -> Employee {
        Employee {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}
