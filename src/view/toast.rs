use std::sync::{Arc, Mutex};
use std::time::Duration;

use strum_macros::Display;
use uuid::Uuid;

pub const TOAST_STYLE_ID: &str = "toast-styles";

pub const TOAST_STYLES: &str = r#"
.toast {
    position: fixed;
    bottom: 20px;
    left: 50%;
    transform: translateX(-50%);
    padding: 12px 24px;
    border-radius: 4px;
    color: white;
    opacity: 0;
    transition: opacity 0.3s ease;
    z-index: 1000;
}
.toast.show {
    opacity: 1;
}
.toast-success {
    background-color: #28a745;
}
.toast-error {
    background-color: #dc3545;
}
.toast-warning {
    background-color: #ffc107;
    color: #212529;
}
.toast-info {
    background-color: #17a2b8;
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached, not yet faded in
    Entering,
    Visible,
    /// Fading out, removed once the fade completes
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

/// Transient notifications. Each toast runs its own timeline:
/// entering → visible after `SHOW_DELAY`, leaving after the display
/// duration, gone `FADE` later.
#[derive(Clone, Default)]
pub struct ToastTray {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastTray {
    pub const SHOW_DELAY: Duration = Duration::from_millis(10);
    pub const FADE: Duration = Duration::from_millis(300);
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind, duration: Duration) -> Uuid {
        let id = Uuid::new_v4();
        self.lock().push(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Entering,
        });

        let tray = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Self::SHOW_DELAY).await;
            tray.set_phase(id, ToastPhase::Visible);
            tokio::time::sleep(duration).await;
            tray.set_phase(id, ToastPhase::Leaving);
            tokio::time::sleep(Self::FADE).await;
            tray.lock().retain(|toast| toast.id != id);
        });

        id
    }

    pub fn active(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    fn set_phase(&self, id: Uuid, phase: ToastPhase) {
        if let Some(toast) = self.lock().iter_mut().find(|toast| toast.id == id) {
            toast.phase = phase;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Style sheets attached to a surface, each injected at most once.
#[derive(Default)]
pub struct StyleSheets {
    sheets: Mutex<Vec<(String, String)>>,
}

impl StyleSheets {
    /// Adds `css` under `id` unless a sheet with that id is already present.
    /// Returns whether it was added.
    pub fn inject_once(&self, id: &str, css: &str) -> bool {
        let mut sheets = self.sheets.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if sheets.iter().any(|(existing, _)| existing == id) {
            return false;
        }
        sheets.push((id.to_string(), css.to_string()));
        true
    }

    pub fn all(&self) -> Vec<(String, String)> {
        self.sheets.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }
}
