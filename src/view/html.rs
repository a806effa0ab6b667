//! Projects the screen into HTML pages. Every dynamic string goes through
//! `escape`; nothing from the backend is ever spliced in raw.

use std::fmt::Write as _;

use crate::model::month::MonthOption;
use crate::model::salary::SalaryStatus;
use crate::panel::filter::SalaryFilter;
use crate::utils::format::Locale;
use crate::view::row::{ActionControl, ActionKind, Cell, TableRow};
use crate::view::screen::{ModalId, ModalState, Screen, TableId};
use crate::view::text::Texts;
use crate::view::toast::ToastPhase;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn render_control(control: &ActionControl) -> String {
    let label = escape(&control.label);
    match (control.kind, &control.record_id) {
        (ActionKind::Pay, Some(id)) => {
            let id = escape(id);
            format!(
                r#"<a class="btn btn-sm btn-primary pay-btn" data-id="{id}" href="/salaries/{id}/pay">{label}</a>"#
            )
        }
        (ActionKind::Edit, _) => format!(r#"<button type="button" class="btn btn-sm btn-info">{label}</button>"#),
        (_, _) => format!(r#"<button type="button" class="btn btn-sm btn-danger">{label}</button>"#),
    }
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => format!("<td>{}</td>", escape(text)),
        Cell::Badge { label, tone } => {
            format!(r#"<td><span class="badge bg-{}">{}</span></td>"#, tone, escape(label))
        }
        Cell::Actions(controls) => format!(
            "<td>{}</td>",
            controls.iter().map(render_control).collect::<Vec<_>>().join(" ")
        ),
        Cell::Muted(text) => format!(r#"<td><span class="text-muted">{}</span></td>"#, escape(text)),
    }
}

/// `<tr>` elements for a table body, in row order.
pub fn render_rows(rows: &[TableRow]) -> String {
    rows.iter()
        .map(|row| format!("<tr>{}</tr>", row.cells.iter().map(render_cell).collect::<String>()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(id: TableId, headers: &[&str], rows: &[TableRow]) -> String {
    let head: String = headers.iter().map(|h| format!("<th>{}</th>", escape(h))).collect();
    format!(
        r#"<table id="{id}" class="table table-striped"><thead><tr>{head}</tr></thead><tbody>
{}
</tbody></table>"#,
        render_rows(rows)
    )
}

/// Full document around `body`: injected style sheets, pending message
/// boxes (consumed) and live toasts.
fn layout(screen: &Screen, locale: Locale, title: &str, body: &str) -> String {
    let dir = match locale {
        Locale::Ar => "rtl",
        Locale::En => "ltr",
    };

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html><html lang="{locale}" dir="{dir}"><head><meta charset="utf-8"><title>{}</title>"#,
        escape(title)
    );
    for (id, css) in screen.styles().all() {
        let _ = write!(html, r#"<style id="{}">{}</style>"#, escape(&id), css);
    }
    html.push_str("</head><body>");

    for alert in screen.take_alerts() {
        let _ = write!(html, r#"<div class="alert alert-danger" role="alert">{}</div>"#, escape(&alert));
    }

    html.push_str(body);

    for toast in screen.toasts().active() {
        let show = if toast.phase == ToastPhase::Visible { " show" } else { "" };
        let _ = write!(
            html,
            r#"<div class="toast toast-{}{}">{}</div>"#,
            toast.kind,
            show,
            escape(&toast.message)
        );
    }

    html.push_str("</body></html>");
    html
}

fn modal_open_class(state: &ModalState) -> &'static str {
    if state.open { "modal show d-block" } else { "modal d-none" }
}

pub fn employees_page(screen: &Screen, locale: Locale, t: &Texts) -> String {
    let rows = screen.rows(TableId::Employees);
    let modal = screen.modal(ModalId::AddEmployee);
    let field = |name: &str| escape(modal.fields.get(name).unwrap_or_default());

    let body = format!(
        r#"<h1>{title}</h1>
<a class="btn btn-success" href="/employees/new">{add}</a>
{table}
<div id="{modal_id}" class="{modal_class}"><form id="employeeForm" method="post" action="/employees">
<input name="name" value="{name}" required>
<input name="position" value="{position}" required>
<input name="salary" type="number" step="0.01" value="{salary}" required>
<input name="hireDate" type="date" value="{hire_date}" required>
<button type="submit" class="btn btn-primary">{save}</button>
<a class="btn btn-secondary" href="/employees">{cancel}</a>
</form></div>"#,
        title = escape(t.employees_title),
        add = escape(t.add_employee),
        table = render_table(TableId::Employees, &t.employee_columns, &rows),
        modal_id = ModalId::AddEmployee,
        modal_class = modal_open_class(&modal),
        name = field("name"),
        position = field("position"),
        salary = field("salary"),
        hire_date = field("hireDate"),
        save = escape(t.save),
        cancel = escape(t.cancel),
    );

    layout(screen, locale, t.employees_title, &body)
}

fn month_select(options: &[MonthOption], selected: &SalaryFilter, t: &Texts) -> String {
    let mut html = format!(r#"<select id="monthFilter" name="month"><option value="">{}</option>"#, escape(t.all_months));
    for option in options {
        let mark = if selected.month == Some(option.value) { " selected" } else { "" };
        let _ = write!(html, r#"<option value="{}"{}>{}</option>"#, option.value, mark, escape(&option.label));
    }
    html.push_str("</select>");
    html
}

fn status_select(selected: &SalaryFilter, t: &Texts) -> String {
    let mut html = format!(r#"<select id="statusFilter" name="status"><option value="">{}</option>"#, escape(t.all_statuses));
    for (status, label) in [
        (SalaryStatus::Pending, t.pending),
        (SalaryStatus::Paid, t.paid),
        (SalaryStatus::Late, t.late),
    ] {
        let mark = if selected.status == Some(status) { " selected" } else { "" };
        let _ = write!(html, r#"<option value="{}"{}>{}</option>"#, status, mark, escape(label));
    }
    html.push_str("</select>");
    html
}

fn pay_form(modal: &ModalState, t: &Texts) -> String {
    let salary_id = escape(modal.fields.get("salaryId").unwrap_or_default());
    let method = modal.fields.get("paymentMethod").unwrap_or("cash");
    let options: String = ["cash", "transfer", "cheque"]
        .iter()
        .map(|value| {
            let mark = if *value == method { " selected" } else { "" };
            format!(r#"<option value="{value}"{mark}>{value}</option>"#)
        })
        .collect();
    let ref_style = if modal.is_visible("transactionRef") { "block" } else { "none" };

    format!(
        r#"<div id="{modal_id}" class="{modal_class}"><form id="paySalaryForm" method="post" action="/salaries/{salary_id}/pay">
<input type="hidden" id="salaryId" value="{salary_id}">
<select name="paymentMethod">{options}</select>
<button type="submit" class="btn btn-link" formaction="/salaries/pay/method">{update}</button>
<div id="transactionRefField" style="display: {ref_style}"><input name="transactionRef" value="{transaction_ref}"></div>
<button type="submit" class="btn btn-primary">{pay}</button>
<a class="btn btn-secondary" href="/salaries">{cancel}</a>
</form></div>"#,
        modal_id = ModalId::PaySalary,
        modal_class = modal_open_class(modal),
        update = escape(t.update),
        transaction_ref = escape(modal.fields.get("transactionRef").unwrap_or_default()),
        pay = escape(t.pay),
        cancel = escape(t.cancel),
    )
}

pub fn salaries_page(
    screen: &Screen,
    locale: Locale,
    t: &Texts,
    filter: &SalaryFilter,
    months: &[MonthOption],
) -> String {
    let rows = screen.rows(TableId::Salaries);
    let modal = screen.modal(ModalId::PaySalary);

    let body = format!(
        r#"<h1>{title}</h1>
<form method="get" action="/salaries">{months}{statuses}<button type="submit" class="btn btn-outline-primary">{filter_label}</button></form>
<a id="generateSalaries" class="btn btn-warning" href="/salaries/generate">{generate}</a>
{table}
{pay_form}"#,
        title = escape(t.salaries_title),
        months = month_select(months, filter, t),
        statuses = status_select(filter, t),
        filter_label = escape(t.filter),
        generate = escape(t.generate_salaries),
        table = render_table(TableId::Salaries, &t.salary_columns, &rows),
        pay_form = pay_form(&modal, t),
    );

    layout(screen, locale, t.salaries_title, &body)
}

/// The blocking yes/no question before salaries are generated.
pub fn confirm_page(screen: &Screen, locale: Locale, t: &Texts, question: &str) -> String {
    let body = format!(
        r#"<form method="post" action="/salaries/generate"><p>{question}</p>
<button type="submit" name="answer" value="yes" class="btn btn-primary">{yes}</button>
<button type="submit" name="answer" value="no" class="btn btn-secondary">{no}</button>
</form>"#,
        question = escape(question),
        yes = escape(t.yes),
        no = escape(t.no),
    );

    layout(screen, locale, t.generate_salaries, &body)
}
