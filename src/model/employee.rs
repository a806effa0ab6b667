use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee record as listed by `GET /api/employees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub position: String,

    pub salary: f64,

    #[serde(with = "crate::model::date")]
    pub hire_date: NaiveDate,

    pub active: bool,
}

/// The part of an employee embedded in a salary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,
}
