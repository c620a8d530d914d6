//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background task results flow through these
//! types into `App::update`.

pub mod browse;
pub mod form;

use rundbok_model::BookListing;

pub use browse::BrowseMessage;
pub use form::FormMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Browse view messages (drill-down, listings feed, share link).
    Browse(BrowseMessage),

    /// Book form messages (typeahead, inputs, submission).
    Form(FormMessage),

    /// Open the form in "add" mode.
    OpenAddBook,

    /// Open the form in "edit" mode for an existing listing.
    OpenEditBook(BookListing),

    /// Leave the form and return to browsing.
    CloseForm,
}
