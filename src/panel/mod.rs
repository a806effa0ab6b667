use std::sync::Arc;
use std::time::Duration;

use crate::api::client::BackendClient;
use crate::view::row::DisplaySettings;
use crate::view::screen::Screen;

pub mod filter;
pub mod form;
pub mod generate;
pub mod loader;
pub mod submitter;

/// Everything a view operation needs: the authenticated backend client, the
/// surface it renders into and the display settings.
#[derive(Clone)]
pub struct PanelContext {
    pub client: BackendClient,
    pub screen: Arc<Screen>,
    pub display: DisplaySettings,
    pub toast_duration: Duration,
}

/// How a user initiated mutation ended, as far as the user saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Confirmed by the backend; the list was reloaded.
    Done,
    /// The backend refused and said why; the message box showed its words.
    Rejected(String),
    /// Transport or payload failure; the message box showed the generic text.
    Failed,
    /// The user answered no to the confirmation prompt.
    Declined,
}
