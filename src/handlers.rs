use std::sync::Arc;

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::auth::credentials::{CredentialProvider, CredentialScope};
use crate::auth::storage::LocalStorage;
use crate::auth::token::is_authenticated;
use crate::error::PanelError;
use crate::model::month::month_options;
use crate::panel::PanelContext;
use crate::panel::filter::{FilterController, parse_month, parse_status};
use crate::panel::form::FormData;
use crate::panel::generate::generate;
use crate::panel::loader::{Employees, load};
use crate::panel::submitter::{add_employee, choose_payment_method, open_add_employee, pay_salary};
use crate::view::html;
use crate::view::screen::{ModalId, TableId};
use crate::view::text::texts;

/// Application state shared by every handler.
pub struct Panel {
    pub ctx: PanelContext,
    pub filters: FilterController,
    pub storage: Arc<LocalStorage>,
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn page(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub async fn index() -> impl Responder {
    see_other("/employees")
}

// -------------------- employees --------------------

pub async fn employees_page(panel: web::Data<Panel>) -> impl Responder {
    let ctx = &panel.ctx;
    // failures are already logged, the last good table stays on screen
    let _ = load::<Employees>(ctx, &[]).await;

    let locale = ctx.display.locale;
    page(html::employees_page(&ctx.screen, locale, texts(locale)))
}

pub async fn new_employee(panel: web::Data<Panel>) -> impl Responder {
    open_add_employee(&panel.ctx);
    see_other("/employees")
}

pub async fn create_employee(panel: web::Data<Panel>, form: web::Form<FormData>) -> impl Responder {
    let outcome = add_employee(&panel.ctx, form.into_inner()).await;
    info!(?outcome, "Add employee submitted");
    see_other("/employees")
}

// -------------------- salaries --------------------

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub month: Option<String>,
    pub status: Option<String>,
}

pub async fn salaries_page(panel: web::Data<Panel>, query: web::Query<FilterQuery>) -> impl Responder {
    let ctx = &panel.ctx;
    let mut selection = panel.filters.current();

    // an unparseable selector keeps its previous value
    match parse_month(query.month.as_deref().unwrap_or_default()) {
        Ok(month) => selection.month = month,
        Err(e) => warn!(error = %e, "Ignoring month filter"),
    }
    match parse_status(query.status.as_deref().unwrap_or_default()) {
        Ok(status) => selection.status = status,
        Err(e) => warn!(error = %e, "Ignoring status filter"),
    }
    let _ = panel.filters.select(ctx, selection).await;

    let locale = ctx.display.locale;
    let months = month_options(Local::now().date_naive(), locale);
    page(html::salaries_page(
        &ctx.screen,
        locale,
        texts(locale),
        &panel.filters.current(),
        &months,
    ))
}

pub async fn confirm_generate(panel: web::Data<Panel>) -> impl Responder {
    let ctx = &panel.ctx;
    let locale = ctx.display.locale;
    let t = texts(locale);
    page(html::confirm_page(&ctx.screen, locale, t, t.confirm_generate))
}

#[derive(Debug, Deserialize)]
pub struct ConfirmAnswer {
    pub answer: String,
}

pub async fn generate_salaries(panel: web::Data<Panel>, form: web::Form<ConfirmAnswer>) -> impl Responder {
    let confirmed = form.answer == "yes";
    let prompt = move |_: &str| confirmed;

    let outcome = generate(&panel.ctx, &prompt, &panel.filters.current().query()).await;
    info!(?outcome, "Salary generation");
    see_other("/salaries")
}

pub async fn open_pay_form(panel: web::Data<Panel>, path: web::Path<String>) -> impl Responder {
    let ctx = &panel.ctx;
    let salary_id = path.into_inner();

    if ctx.screen.activate(TableId::Salaries, &salary_id) {
        let modal = ctx.screen.modal(ModalId::PaySalary);
        let method = modal.fields.get("paymentMethod").unwrap_or("cash").to_string();
        choose_payment_method(ctx, &method);
    } else {
        warn!(%salary_id, "No pay control rendered for salary");
    }
    see_other("/salaries")
}

pub async fn change_payment_method(panel: web::Data<Panel>, form: web::Form<FormData>) -> impl Responder {
    let form = form.into_inner();
    let method = form.get("paymentMethod").unwrap_or_default();
    choose_payment_method(&panel.ctx, method);
    if let Some(reference) = form.get("transactionRef") {
        panel.ctx.screen.set_field(ModalId::PaySalary, "transactionRef", reference);
    }
    see_other("/salaries")
}

pub async fn submit_payment(
    panel: web::Data<Panel>,
    path: web::Path<String>,
    form: web::Form<FormData>,
) -> impl Responder {
    let salary_id = path.into_inner();
    let query = panel.filters.current().query();

    let outcome = pay_salary(&panel.ctx, &salary_id, form.into_inner(), &query).await;
    info!(%salary_id, ?outcome, "Pay salary submitted");
    see_other("/salaries")
}

// -------------------- session --------------------

#[derive(Debug, Deserialize)]
pub struct StoreToken {
    pub scope: CredentialScope,
    pub token: String,
}

pub async fn store_token(
    panel: web::Data<Panel>,
    payload: web::Json<StoreToken>,
) -> Result<HttpResponse, PanelError> {
    let payload = payload.into_inner();
    if payload.token.trim().is_empty() {
        return Err(PanelError::Invalid("token must not be empty".to_string()));
    }

    panel.storage.set(payload.scope.storage_key(), payload.token.trim())?;
    info!(scope = %payload.scope, "Token stored");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Token stored"
    })))
}

pub async fn logout(panel: web::Data<Panel>) -> Result<HttpResponse, PanelError> {
    for scope in CredentialScope::ALL {
        panel.storage.remove(scope.storage_key())?;
    }
    info!("Tokens removed");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Logged out"
    })))
}

pub async fn session_status(panel: web::Data<Panel>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "staff_token": panel.storage.bearer(CredentialScope::Staff).is_some(),
        // advisory only, the backend decides
        "student_authenticated": is_authenticated(panel.storage.as_ref(), Utc::now()),
    }))
}
