use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use strum_macros::Display;
use tracing::debug;

use crate::panel::form::FormData;
use crate::view::row::TableRow;
use crate::view::toast::{StyleSheets, TOAST_STYLE_ID, TOAST_STYLES, ToastKind, ToastTray};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TableId {
    #[strum(serialize = "employeesTable")]
    Employees,
    #[strum(serialize = "salariesTable")]
    Salaries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ModalId {
    #[strum(serialize = "addEmployeeModal")]
    AddEmployee,
    #[strum(serialize = "paySalaryModal")]
    PaySalary,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub open: bool,
    pub fields: FormData,
    pub hidden: BTreeSet<String>,
}

impl ModalState {
    pub fn is_visible(&self, field: &str) -> bool {
        !self.hidden.contains(field)
    }
}

/// Click handler attached to a row control: activating it opens `modal`
/// with `field` set to the row's record id.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionBinding {
    pub record_id: String,
    pub modal: ModalId,
    pub field: &'static str,
}

/// The rendering surface shared by every view: tables, their row bindings,
/// modal dialogs, message boxes and toasts.
///
/// Locks are only held for the duration of a single mutation, never across
/// a network call, so overlapping requests simply apply in completion order.
pub struct Screen {
    tables: Mutex<HashMap<TableId, Vec<TableRow>>>,
    bindings: Mutex<HashMap<TableId, Vec<ActionBinding>>>,
    modals: Mutex<HashMap<ModalId, ModalState>>,
    alerts: Mutex<Vec<String>>,
    toasts: ToastTray,
    styles: StyleSheets,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Screen {
    pub fn new() -> Self {
        let screen = Self {
            tables: Mutex::default(),
            bindings: Mutex::default(),
            modals: Mutex::default(),
            alerts: Mutex::default(),
            toasts: ToastTray::default(),
            styles: StyleSheets::default(),
        };
        screen.styles.inject_once(TOAST_STYLE_ID, TOAST_STYLES);
        screen
    }

    // -------------------- tables --------------------

    /// Drops every row of `table` and puts `rows` in their place.
    pub fn replace_rows(&self, table: TableId, rows: Vec<TableRow>) {
        debug!(%table, rows = rows.len(), "Table re-rendered");
        lock(&self.tables).insert(table, rows);
    }

    pub fn rows(&self, table: TableId) -> Vec<TableRow> {
        lock(&self.tables).get(&table).cloned().unwrap_or_default()
    }

    /// Replaces the bindings of `table` as a whole; earlier ones never linger.
    pub fn bind_actions(&self, table: TableId, bindings: Vec<ActionBinding>) {
        lock(&self.bindings).insert(table, bindings);
    }

    pub fn bindings(&self, table: TableId) -> Vec<ActionBinding> {
        lock(&self.bindings).get(&table).cloned().unwrap_or_default()
    }

    /// Runs the handler bound to `record_id` in `table`. Returns false when
    /// no such control is currently rendered.
    pub fn activate(&self, table: TableId, record_id: &str) -> bool {
        let binding = lock(&self.bindings)
            .get(&table)
            .and_then(|bindings| bindings.iter().find(|b| b.record_id == record_id).cloned());

        match binding {
            Some(binding) => {
                self.open_modal(binding.modal, FormData::new().with(binding.field, binding.record_id));
                true
            }
            None => false,
        }
    }

    // -------------------- modals --------------------

    /// Opens `modal`, overwriting the given fields and keeping the rest.
    pub fn open_modal(&self, modal: ModalId, fields: FormData) {
        let mut modals = lock(&self.modals);
        let state = modals.entry(modal).or_default();
        state.open = true;
        for (name, value) in fields.iter() {
            state.fields.set(name, value);
        }
    }

    pub fn close_modal(&self, modal: ModalId) {
        if let Some(state) = lock(&self.modals).get_mut(&modal) {
            state.open = false;
        }
    }

    pub fn modal(&self, modal: ModalId) -> ModalState {
        lock(&self.modals).get(&modal).cloned().unwrap_or_default()
    }

    pub fn set_field(&self, modal: ModalId, field: &str, value: &str) {
        lock(&self.modals).entry(modal).or_default().fields.set(field, value);
    }

    pub fn set_field_visible(&self, modal: ModalId, field: &str, visible: bool) {
        let mut modals = lock(&self.modals);
        let state = modals.entry(modal).or_default();
        if visible {
            state.hidden.remove(field);
        } else {
            state.hidden.insert(field.to_string());
        }
    }

    // -------------------- notices --------------------

    /// Message box for the user.
    pub fn alert(&self, message: impl Into<String>) {
        lock(&self.alerts).push(message.into());
    }

    /// Message boxes not yet shown; each is handed out once.
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut *lock(&self.alerts))
    }

    pub fn toast(&self, message: impl Into<String>, kind: ToastKind, duration: Duration) {
        self.toasts.show(message, kind, duration);
    }

    pub fn toasts(&self) -> &ToastTray {
        &self.toasts
    }

    pub fn styles(&self) -> &StyleSheets {
        &self.styles
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::row::Cell;

    fn row(text: &str) -> TableRow {
        TableRow {
            cells: vec![Cell::Text(text.to_string())],
        }
    }

    #[test]
    fn rows_are_replaced_not_appended() {
        let screen = Screen::new();
        screen.replace_rows(TableId::Employees, vec![row("a"), row("b")]);
        screen.replace_rows(TableId::Employees, vec![row("c")]);

        assert_eq!(screen.rows(TableId::Employees), vec![row("c")]);
        assert!(screen.rows(TableId::Salaries).is_empty());
    }

    #[test]
    fn activating_a_binding_prefills_the_modal() {
        let screen = Screen::new();
        screen.bind_actions(
            TableId::Salaries,
            vec![ActionBinding {
                record_id: "s-9".into(),
                modal: ModalId::PaySalary,
                field: "salaryId",
            }],
        );

        assert!(!screen.activate(TableId::Salaries, "missing"));
        assert!(!screen.modal(ModalId::PaySalary).open);

        assert!(screen.activate(TableId::Salaries, "s-9"));
        let modal = screen.modal(ModalId::PaySalary);
        assert!(modal.open);
        assert_eq!(modal.fields.get("salaryId"), Some("s-9"));

        screen.close_modal(ModalId::PaySalary);
        assert!(!screen.modal(ModalId::PaySalary).open);
    }

    #[test]
    fn alerts_are_handed_out_once() {
        let screen = Screen::new();
        screen.alert("first");
        screen.alert("second");

        assert_eq!(screen.take_alerts(), vec!["first", "second"]);
        assert!(screen.take_alerts().is_empty());
    }

    #[test]
    fn toast_styles_are_present_from_the_start() {
        let screen = Screen::new();
        assert!(!screen.styles().inject_once(TOAST_STYLE_ID, TOAST_STYLES));
    }
}
