//! Application state.

pub mod app_state;
pub mod browse;
pub mod form;
pub mod settings;

pub use app_state::{AppState, View};
pub use browse::BrowseState;
pub use form::{FormMode, FormState};
pub use settings::Settings;
