//! Application-level state.

use std::sync::Arc;

use rundbok_api::NetworkService;
use rundbok_search::ProgrammeCatalog;

use super::browse::BrowseState;
use super::form::FormState;
use super::settings::Settings;

/// The screen currently shown in the window.
#[derive(Debug, Default)]
pub enum View {
    /// The drill-down browser with the listings feed.
    #[default]
    Browse,
    /// The add/edit book form.
    Form(FormState),
}

/// Top-level application state - the root of everything `update` mutates.
pub struct AppState {
    /// Current screen.
    pub view: View,
    /// Drill-down browser state (always alive; the feed keeps its data
    /// while the form is open).
    pub browse: BrowseState,
    /// Flat programme list for the form typeahead. Fetched once per run,
    /// cached across form opens.
    pub programmes: ProgrammeCatalog,
    /// Persisted user settings.
    pub settings: Settings,
    /// Backend access, shared with background tasks.
    pub api: Arc<dyn NetworkService>,
}

impl AppState {
    /// Build the state from loaded settings, restoring the last filter
    /// state from the saved location.
    pub fn new(api: Arc<dyn NetworkService>, settings: Settings) -> Self {
        Self {
            view: View::Browse,
            browse: BrowseState::restore(&settings.last_search),
            programmes: ProgrammeCatalog::new(),
            settings,
            api,
        }
    }

    /// The form state, when the form is open.
    pub fn form(&self) -> Option<&FormState> {
        match &self.view {
            View::Form(form) => Some(form),
            View::Browse => None,
        }
    }
}
