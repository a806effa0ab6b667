use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{Display, EnumString};

use crate::model::employee::EmployeeSummary;
use crate::model::month::MonthToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SalaryStatus {
    Pending,
    Paid,
    Late,
}

/// How a salary was paid. Only `transfer` carries meaning for the panel (it
/// unlocks the transaction reference), every other method is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Transfer,
    Other(String),
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Other(method) => method,
        }
    }

    pub fn requires_transaction_ref(&self) -> bool {
        matches!(self, PaymentMethod::Transfer)
    }
}

impl From<&str> for PaymentMethod {
    fn from(raw: &str) -> Self {
        match raw {
            "transfer" => PaymentMethod::Transfer,
            other => PaymentMethod::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PaymentMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PaymentMethod::from(raw.as_str()))
    }
}

/// Salary record as listed by `GET /api/salaries`, with its employee embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    pub employee: EmployeeSummary,

    pub month: MonthToken,

    pub basic_salary: f64,

    #[serde(default)]
    pub bonuses: f64,

    #[serde(default)]
    pub deductions: f64,

    pub net_salary: f64,

    pub status: SalaryStatus,

    /// Present once the record is paid
    #[serde(default, with = "crate::model::date::option")]
    pub payment_date: Option<NaiveDate>,

    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,

    #[serde(default)]
    pub transaction_ref: Option<String>,
}

impl SalaryRecord {
    pub fn is_paid(&self) -> bool {
        self.status == SalaryStatus::Paid
    }
}
