//! Reusable view components.

pub mod form_field;
pub mod search_box;
pub mod status;

pub use form_field::labeled_input;
pub use search_box::search_box;
pub use status::{empty_state, loading_row};
