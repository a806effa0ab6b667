use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::api::client::BackendClient;
use crate::error::PanelError;
use crate::model::salary::{PaymentMethod, SalaryRecord};
use crate::panel::form::FormData;

pub const SALARIES_PATH: &str = "/api/salaries";
pub const GENERATE_PATH: &str = "/api/salaries/generate";

pub const PAY_SEGMENT: &str = "pay";

/// Body of `PUT /api/salaries/{id}/pay`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaySalary {
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,
}

impl PaySalary {
    /// Reads the pay form. The transaction reference only travels with a
    /// transfer, whatever the hidden field still holds.
    pub fn from_form(form: &FormData) -> Result<Self, PanelError> {
        let method = form
            .get("paymentMethod")
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| PanelError::Invalid("paymentMethod is required".to_string()))?;
        let payment_method = PaymentMethod::from(method);

        let transaction_ref = payment_method
            .requires_transaction_ref()
            .then(|| form.get("transactionRef").unwrap_or_default().to_string());

        Ok(Self {
            payment_method,
            transaction_ref,
        })
    }
}

pub async fn list_salaries(
    client: &BackendClient,
    query: &[(&str, String)],
) -> Result<Vec<SalaryRecord>, PanelError> {
    client.get_json(SALARIES_PATH, query).await
}

/// Asks the backend to create this month's salary records. Sent without a body.
pub async fn generate_salaries(client: &BackendClient) -> Result<Value, PanelError> {
    client.send_json::<Value>(Method::POST, GENERATE_PATH, None).await
}

pub async fn pay_salary(
    client: &BackendClient,
    salary_id: &str,
    payment: &PaySalary,
) -> Result<Value, PanelError> {
    let url = client.segment_url(SALARIES_PATH, &[salary_id, PAY_SEGMENT])?;
    client.send_json_to(Method::PUT, url, Some(payment)).await
}
