use reqwest::Method;
use serde_json::Value;

use crate::api::client::BackendClient;
use crate::error::PanelError;
use crate::model::employee::Employee;
use crate::panel::form::FormData;

pub const EMPLOYEES_PATH: &str = "/api/employees";

pub async fn list_employees(client: &BackendClient) -> Result<Vec<Employee>, PanelError> {
    client.get_json(EMPLOYEES_PATH, &[]).await
}

/// Creates an employee from the raw fields of the add-employee form.
pub async fn create_employee(client: &BackendClient, form: &FormData) -> Result<Value, PanelError> {
    client.send_json(Method::POST, EMPLOYEES_PATH, Some(form)).await
}
