use strum_macros::Display;

use crate::model::employee::Employee;
use crate::model::salary::{SalaryRecord, SalaryStatus};
use crate::utils::format::{Locale, format_date, format_number};
use crate::view::text::texts;

/// How values are presented: locale plus the currency suffix of employee salaries.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub locale: Locale,
    pub currency_suffix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ActionKind {
    Edit,
    Delete,
    Pay,
}

/// A button inside a row. `record_id` is set only for wired actions; the
/// employee edit/delete buttons are drawn but do nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionControl {
    pub kind: ActionKind,
    pub label: String,
    pub record_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Badge { label: String, tone: BadgeTone },
    Actions(Vec<ActionControl>),
    /// De-emphasized text, e.g. the payment date of a settled salary
    Muted(String),
}

impl Cell {
    pub fn text(&self) -> String {
        match self {
            Cell::Text(text) | Cell::Muted(text) => text.clone(),
            Cell::Badge { label, .. } => label.clone(),
            Cell::Actions(controls) => controls
                .iter()
                .map(|c| c.label.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<Cell>,
}

impl TableRow {
    pub fn text(&self) -> Vec<String> {
        self.cells.iter().map(Cell::text).collect()
    }

    pub fn badge(&self) -> Option<(&str, BadgeTone)> {
        self.cells.iter().find_map(|cell| match cell {
            Cell::Badge { label, tone } => Some((label.as_str(), *tone)),
            _ => None,
        })
    }

    pub fn action(&self, kind: ActionKind) -> Option<&ActionControl> {
        self.cells.iter().find_map(|cell| match cell {
            Cell::Actions(controls) => controls.iter().find(|c| c.kind == kind),
            _ => None,
        })
    }
}

/// name | position | salary | hire date | status | actions
pub fn employee_row(employee: &Employee, display: &DisplaySettings) -> TableRow {
    let t = texts(display.locale);
    let badge = if employee.active {
        Cell::Badge {
            label: t.active.to_string(),
            tone: BadgeTone::Success,
        }
    } else {
        Cell::Badge {
            label: t.inactive.to_string(),
            tone: BadgeTone::Danger,
        }
    };

    TableRow {
        cells: vec![
            Cell::Text(employee.name.clone()),
            Cell::Text(employee.position.clone()),
            Cell::Text(format!(
                "{} {}",
                format_number(employee.salary, display.locale),
                display.currency_suffix
            )),
            Cell::Text(format_date(employee.hire_date, display.locale)),
            badge,
            Cell::Actions(vec![
                ActionControl {
                    kind: ActionKind::Edit,
                    label: t.edit.to_string(),
                    record_id: None,
                },
                ActionControl {
                    kind: ActionKind::Delete,
                    label: t.delete.to_string(),
                    record_id: None,
                },
            ]),
        ],
    }
}

/// employee | month | basic | bonuses | deductions | net | status | action
pub fn salary_row(salary: &SalaryRecord, display: &DisplaySettings) -> TableRow {
    let t = texts(display.locale);
    let amount = |value: f64| Cell::Text(format_number(value, display.locale));

    let (label, tone) = match salary.status {
        SalaryStatus::Paid => (t.paid, BadgeTone::Success),
        SalaryStatus::Pending => (t.pending, BadgeTone::Warning),
        SalaryStatus::Late => (t.late, BadgeTone::Danger),
    };

    let action = if salary.is_paid() {
        let date = salary
            .payment_date
            .map(|date| format_date(date, display.locale))
            .unwrap_or_else(|| "-".to_string());
        Cell::Muted(format!("{} {}", t.paid_on, date))
    } else {
        Cell::Actions(vec![ActionControl {
            kind: ActionKind::Pay,
            label: t.pay.to_string(),
            record_id: Some(salary.id.clone()),
        }])
    };

    TableRow {
        cells: vec![
            Cell::Text(salary.employee.name.clone()),
            Cell::Text(salary.month.to_string()),
            amount(salary.basic_salary),
            amount(salary.bonuses),
            amount(salary.deductions),
            amount(salary.net_salary),
            Cell::Badge {
                label: label.to_string(),
                tone,
            },
            action,
        ],
    }
}
