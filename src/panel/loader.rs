use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::api::client::BackendClient;
use crate::api::{employee, salary};
use crate::error::PanelError;
use crate::model::employee::Employee;
use crate::model::salary::SalaryRecord;
use crate::panel::PanelContext;
use crate::view::row::{DisplaySettings, TableRow, employee_row, salary_row};
use crate::view::screen::{ActionBinding, ModalId, TableId};

/// A backend collection rendered into one table.
pub trait Resource {
    type Record: DeserializeOwned;

    const TABLE: TableId;

    fn fetch(
        client: &BackendClient,
        query: &[(&str, String)],
    ) -> impl Future<Output = Result<Vec<Self::Record>, PanelError>>;

    fn render(record: &Self::Record, display: &DisplaySettings) -> TableRow;

    /// Row controls that need a handler after every render.
    fn bindings(_records: &[Self::Record]) -> Vec<ActionBinding> {
        Vec::new()
    }
}

pub struct Employees;

impl Resource for Employees {
    type Record = Employee;

    const TABLE: TableId = TableId::Employees;

    fn fetch(
        client: &BackendClient,
        _query: &[(&str, String)],
    ) -> impl Future<Output = Result<Vec<Employee>, PanelError>> {
        employee::list_employees(client)
    }

    fn render(record: &Employee, display: &DisplaySettings) -> TableRow {
        employee_row(record, display)
    }
}

pub struct Salaries;

impl Resource for Salaries {
    type Record = SalaryRecord;

    const TABLE: TableId = TableId::Salaries;

    fn fetch(
        client: &BackendClient,
        query: &[(&str, String)],
    ) -> impl Future<Output = Result<Vec<SalaryRecord>, PanelError>> {
        salary::list_salaries(client, query)
    }

    fn render(record: &SalaryRecord, display: &DisplaySettings) -> TableRow {
        salary_row(record, display)
    }

    fn bindings(records: &[SalaryRecord]) -> Vec<ActionBinding> {
        records
            .iter()
            .filter(|record| !record.is_paid())
            .map(|record| ActionBinding {
                record_id: record.id.clone(),
                modal: ModalId::PaySalary,
                field: "salaryId",
            })
            .collect()
    }
}

/// Fetches the collection and re-renders its table from scratch.
///
/// A failed fetch leaves the table exactly as it was and is only logged; the
/// caller gets the error back but the user is not told.
pub async fn load<R: Resource>(ctx: &PanelContext, query: &[(&str, String)]) -> Result<usize, PanelError> {
    let records = match R::fetch(&ctx.client, query).await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, table = %R::TABLE, "Failed to load table");
            return Err(e);
        }
    };

    let rows = records
        .iter()
        .map(|record| R::render(record, &ctx.display))
        .collect::<Vec<_>>();
    let count = rows.len();

    ctx.screen.replace_rows(R::TABLE, rows);
    ctx.screen.bind_actions(R::TABLE, R::bindings(&records));

    debug!(table = %R::TABLE, count, "Table loaded");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockBackend, STAFF_TOKEN, context};
    use crate::view::row::ActionKind;
    use serde_json::json;

    fn employees() -> serde_json::Value {
        json!([
            { "_id": "e-1", "name": "Sara Ali", "position": "Teacher", "salary": 1250.5,
              "hireDate": "2023-09-01T00:00:00.000Z", "active": true },
            { "_id": "e-2", "name": "Khalid", "position": "Driver", "salary": 400,
              "hireDate": "2021-02-10", "active": false }
        ])
    }

    fn salaries() -> serde_json::Value {
        json!([
            { "_id": "s-1", "employee": { "name": "Sara Ali" }, "month": "2024-03",
              "basicSalary": 1000, "bonuses": 0, "deductions": 0, "netSalary": 1000,
              "status": "pending" },
            { "_id": "s-2", "employee": { "name": "Khalid" }, "month": "2024-03",
              "basicSalary": 400, "bonuses": 50, "deductions": 10, "netSalary": 440,
              "status": "paid", "paymentDate": "2024-03-28" },
            { "_id": "s-3", "employee": { "name": "Mona" }, "month": "2024-02",
              "basicSalary": 700, "bonuses": 0, "deductions": 0, "netSalary": 700,
              "status": "late" }
        ])
    }

    #[actix_web::test]
    async fn employee_table_mirrors_the_response() {
        let backend = MockBackend::start().await;
        backend.reply("GET", "/api/employees", 200, employees());
        let (ctx, _) = context(&backend.url);

        assert_eq!(load::<Employees>(&ctx, &[]).await.unwrap(), 2);

        let rows = ctx.screen.rows(TableId::Employees);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text()[2], "1,250.5 KWD");
        assert_eq!(rows[0].text()[3], "1 September 2023");
        assert_eq!(rows[1].badge().map(|b| b.0), Some("Inactive"));

        let requests = backend.requests_to("GET", "/api/employees");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].authorization.as_deref(), Some(&*format!("Bearer {STAFF_TOKEN}")));
    }

    #[actix_web::test]
    async fn failed_load_keeps_previous_rows() {
        let backend = MockBackend::start().await;
        backend.reply("GET", "/api/employees", 200, employees());
        let (ctx, _) = context(&backend.url);
        load::<Employees>(&ctx, &[]).await.unwrap();

        backend.reply_raw("GET", "/api/employees", 200, "<html>oops</html>");
        assert!(matches!(load::<Employees>(&ctx, &[]).await, Err(PanelError::Decode(_))));
        assert_eq!(ctx.screen.rows(TableId::Employees).len(), 2);

        backend.reply("GET", "/api/employees", 500, json!({ "error": "db down" }));
        assert!(matches!(load::<Employees>(&ctx, &[]).await, Err(PanelError::Rejected(_))));
        assert_eq!(ctx.screen.rows(TableId::Employees).len(), 2);

        // load failures never reach the user
        assert!(ctx.screen.take_alerts().is_empty());
    }

    #[actix_web::test]
    async fn unreachable_backend_keeps_previous_rows() {
        let (ctx, _) = context("http://127.0.0.1:9");
        ctx.screen.replace_rows(TableId::Salaries, vec![]);

        assert!(matches!(load::<Salaries>(&ctx, &[]).await, Err(PanelError::Transport(_))));
        assert!(ctx.screen.rows(TableId::Salaries).is_empty());
    }

    #[actix_web::test]
    async fn missing_token_is_a_load_failure() {
        let backend = MockBackend::start().await;
        backend.reply("GET", "/api/employees", 200, employees());
        let (ctx, storage) = context(&backend.url);
        storage.remove("token").unwrap();

        assert!(matches!(
            load::<Employees>(&ctx, &[]).await,
            Err(PanelError::MissingCredential(_))
        ));
        assert!(backend.requests().is_empty());
    }

    #[actix_web::test]
    async fn unpaid_salaries_get_pay_controls_and_bindings() {
        let backend = MockBackend::start().await;
        backend.reply("GET", "/api/salaries", 200, salaries());
        let (ctx, _) = context(&backend.url);

        load::<Salaries>(&ctx, &[]).await.unwrap();

        let rows = ctx.screen.rows(TableId::Salaries);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].action(ActionKind::Pay).and_then(|a| a.record_id.as_deref()),
            Some("s-1")
        );
        assert_eq!(rows[1].action(ActionKind::Pay), None);
        assert_eq!(rows[1].text()[7], "Paid on 28 March 2024");
        assert!(rows[2].action(ActionKind::Pay).is_some());

        let bound: Vec<_> = ctx
            .screen
            .bindings(TableId::Salaries)
            .into_iter()
            .map(|b| b.record_id)
            .collect();
        assert_eq!(bound, vec!["s-1", "s-3"]);
    }

    #[actix_web::test]
    async fn repeated_loads_do_not_stack_bindings() {
        let backend = MockBackend::start().await;
        backend.reply("GET", "/api/salaries", 200, salaries());
        let (ctx, _) = context(&backend.url);

        for _ in 0..3 {
            load::<Salaries>(&ctx, &[]).await.unwrap();
        }
        assert_eq!(ctx.screen.bindings(TableId::Salaries).len(), 2);

        assert!(ctx.screen.activate(TableId::Salaries, "s-3"));
        let modal = ctx.screen.modal(ModalId::PaySalary);
        assert!(modal.open);
        assert_eq!(modal.fields.get("salaryId"), Some("s-3"));

        assert!(!ctx.screen.activate(TableId::Salaries, "s-2"));
    }
}
