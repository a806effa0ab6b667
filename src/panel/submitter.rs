use std::future::Future;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::api::{employee, salary};
use crate::error::PanelError;
use crate::model::salary::PaymentMethod;
use crate::panel::form::FormData;
use crate::panel::loader::{Employees, Resource, Salaries, load};
use crate::panel::{Outcome, PanelContext};
use crate::view::screen::ModalId;
use crate::view::text::texts;
use crate::view::toast::ToastKind;

/// What to tell the user and which dialog to dismiss for one kind of submission.
pub struct Submission {
    pub modal: Option<ModalId>,
    pub success: &'static str,
    pub failure: &'static str,
}

/// Awaits `request` once and reacts to its result: success confirms, closes
/// the dialog and reloads `R`; a backend refusal is shown verbatim; anything
/// else gets the generic failure text. There is no retry.
pub async fn submit<R, F>(
    ctx: &PanelContext,
    submission: Submission,
    reload_query: &[(&str, String)],
    request: F,
) -> Outcome
where
    R: Resource,
    F: Future<Output = Result<Value, PanelError>>,
{
    let t = texts(ctx.display.locale);

    match request.await {
        Ok(_) => {
            info!(table = %R::TABLE, "Submission accepted");
            ctx.screen.toast(submission.success, ToastKind::Success, ctx.toast_duration);
            if let Some(modal) = submission.modal {
                ctx.screen.close_modal(modal);
            }
            let _ = load::<R>(ctx, reload_query).await;
            Outcome::Done
        }
        Err(PanelError::Rejected(rejection)) if rejection.message.is_some() => {
            let message = rejection.message.unwrap_or_default();
            warn!(status = rejection.status, %message, "Submission rejected");
            ctx.screen.alert(format!("{}: {}", t.error_prefix, message));
            Outcome::Rejected(message)
        }
        Err(e) => {
            error!(error = %e, "Submission failed");
            ctx.screen.alert(submission.failure);
            Outcome::Failed
        }
    }
}

/// Shows the add-employee dialog.
pub fn open_add_employee(ctx: &PanelContext) {
    ctx.screen.open_modal(ModalId::AddEmployee, FormData::new());
}

/// `POST /api/employees` with the raw form fields.
pub async fn add_employee(ctx: &PanelContext, form: FormData) -> Outcome {
    let t = texts(ctx.display.locale);
    let submission = Submission {
        modal: Some(ModalId::AddEmployee),
        success: t.employee_added,
        failure: t.employee_add_failed,
    };

    submit::<Employees, _>(ctx, submission, &[], employee::create_employee(&ctx.client, &form)).await
}

/// Payment method selector changed: the transaction reference field is only
/// shown for transfers.
pub fn choose_payment_method(ctx: &PanelContext, method: &str) {
    let visible = PaymentMethod::from(method).requires_transaction_ref();
    ctx.screen.set_field(ModalId::PaySalary, "paymentMethod", method);
    ctx.screen.set_field_visible(ModalId::PaySalary, "transactionRef", visible);
}

/// `PUT /api/salaries/{id}/pay`, then reload salaries with `reload_query`.
pub async fn pay_salary(
    ctx: &PanelContext,
    salary_id: &str,
    form: FormData,
    reload_query: &[(&str, String)],
) -> Outcome {
    let t = texts(ctx.display.locale);
    let submission = Submission {
        modal: Some(ModalId::PaySalary),
        success: t.salary_paid,
        failure: t.salary_pay_failed,
    };

    let request = async {
        match salary::PaySalary::from_form(&form) {
            Ok(body) => salary::pay_salary(&ctx.client, salary_id, &body).await,
            Err(e) => Err(e),
        }
    };

    submit::<Salaries, _>(ctx, submission, reload_query, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockBackend, context};
    use crate::view::screen::TableId;
    use serde_json::json;

    fn employee_form() -> FormData {
        FormData::new()
            .with("name", "Huda")
            .with("position", "Accountant")
            .with("salary", "900")
            .with("hireDate", "2024-04-01")
    }

    #[actix_web::test]
    async fn accepted_employee_closes_dialog_and_reloads() {
        let backend = MockBackend::start().await;
        backend.reply("POST", "/api/employees", 201, json!({ "_id": "e-9", "name": "Huda" }));
        backend.reply(
            "GET",
            "/api/employees",
            200,
            json!([{ "_id": "e-9", "name": "Huda", "position": "Accountant", "salary": 900,
                     "hireDate": "2024-04-01", "active": true }]),
        );
        let (ctx, _) = context(&backend.url);
        open_add_employee(&ctx);
        assert!(ctx.screen.modal(ModalId::AddEmployee).open);

        assert_eq!(add_employee(&ctx, employee_form()).await, Outcome::Done);

        let posted = backend.requests_to("POST", "/api/employees");
        assert_eq!(posted.len(), 1);
        assert_eq!(
            posted[0].json(),
            json!({ "name": "Huda", "position": "Accountant", "salary": "900", "hireDate": "2024-04-01" })
        );
        assert_eq!(posted[0].content_type.as_deref(), Some("application/json"));

        assert!(!ctx.screen.modal(ModalId::AddEmployee).open);
        assert_eq!(ctx.screen.rows(TableId::Employees).len(), 1);
        assert_eq!(ctx.screen.toasts().active()[0].message, "Employee added successfully");
        assert!(ctx.screen.take_alerts().is_empty());
    }

    #[actix_web::test]
    async fn success_status_with_plain_text_body_is_accepted() {
        let backend = MockBackend::start().await;
        backend.reply_raw("POST", "/api/employees", 201, "Created");
        backend.reply("GET", "/api/employees", 200, json!([]));
        let (ctx, _) = context(&backend.url);
        open_add_employee(&ctx);

        assert_eq!(add_employee(&ctx, employee_form()).await, Outcome::Done);

        assert!(ctx.screen.take_alerts().is_empty());
        assert!(!ctx.screen.modal(ModalId::AddEmployee).open);
        assert_eq!(backend.requests_to("GET", "/api/employees").len(), 1);
        assert_eq!(ctx.screen.toasts().active()[0].message, "Employee added successfully");
    }

    #[actix_web::test]
    async fn backend_error_is_shown_verbatim() {
        let backend = MockBackend::start().await;
        backend.reply("POST", "/api/employees", 400, json!({ "error": "name is required" }));
        let (ctx, _) = context(&backend.url);
        open_add_employee(&ctx);

        let outcome = add_employee(&ctx, FormData::new()).await;

        assert_eq!(outcome, Outcome::Rejected("name is required".to_string()));
        assert_eq!(ctx.screen.take_alerts(), vec!["Error: name is required"]);
        assert!(ctx.screen.modal(ModalId::AddEmployee).open);
        assert!(backend.requests_to("GET", "/api/employees").is_empty());
    }

    #[actix_web::test]
    async fn unparseable_error_gets_generic_message() {
        let backend = MockBackend::start().await;
        backend.reply_raw("POST", "/api/employees", 502, "Bad Gateway");
        let (ctx, _) = context(&backend.url);

        assert_eq!(add_employee(&ctx, employee_form()).await, Outcome::Failed);
        assert_eq!(
            ctx.screen.take_alerts(),
            vec!["Something went wrong while adding the employee"]
        );
    }

    #[actix_web::test]
    async fn transport_failure_gets_generic_message() {
        let (ctx, _) = context("http://127.0.0.1:9");

        assert_eq!(add_employee(&ctx, employee_form()).await, Outcome::Failed);
        assert_eq!(ctx.screen.take_alerts().len(), 1);
    }

    #[actix_web::test]
    async fn paying_puts_method_and_reference() {
        let backend = MockBackend::start().await;
        backend.reply("PUT", "/api/salaries/s-1/pay", 200, json!({ "_id": "s-1", "status": "paid" }));
        backend.reply("GET", "/api/salaries", 200, json!([]));
        let (ctx, _) = context(&backend.url);
        ctx.screen.open_modal(ModalId::PaySalary, FormData::new().with("salaryId", "s-1"));

        let form = FormData::new()
            .with("paymentMethod", "transfer")
            .with("transactionRef", "TRX-77");
        let query = vec![("month", "2024-03".to_string())];
        assert_eq!(pay_salary(&ctx, "s-1", form, &query).await, Outcome::Done);

        let put = backend.requests_to("PUT", "/api/salaries/s-1/pay");
        assert_eq!(put.len(), 1);
        assert_eq!(put[0].json(), json!({ "paymentMethod": "transfer", "transactionRef": "TRX-77" }));

        let reload = backend.requests_to("GET", "/api/salaries");
        assert_eq!(reload[0].target(), "/api/salaries?month=2024-03");
        assert!(!ctx.screen.modal(ModalId::PaySalary).open);
    }

    #[actix_web::test]
    async fn pay_form_without_method_is_not_sent() {
        let backend = MockBackend::start().await;
        let (ctx, _) = context(&backend.url);

        let outcome = pay_salary(&ctx, "s-1", FormData::new(), &[]).await;

        assert_eq!(outcome, Outcome::Failed);
        assert!(backend.requests().is_empty());
        assert_eq!(ctx.screen.take_alerts(), vec!["Something went wrong while paying the salary"]);
    }

    #[test]
    fn reference_field_follows_the_method() {
        let (ctx, _) = context("http://127.0.0.1:9");

        choose_payment_method(&ctx, "cash");
        assert!(!ctx.screen.modal(ModalId::PaySalary).is_visible("transactionRef"));

        choose_payment_method(&ctx, "transfer");
        let modal = ctx.screen.modal(ModalId::PaySalary);
        assert!(modal.is_visible("transactionRef"));
        assert_eq!(modal.fields.get("paymentMethod"), Some("transfer"));
    }
}
