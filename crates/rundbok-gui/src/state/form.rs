//! Add/edit book form state.

use rundbok_model::{BookDraft, BookListing, Course, ListingId, ProgrammeSummary};
use rundbok_search::{CourseSearch, Fetcher};

/// Which flavor of the form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(ListingId),
}

/// Transient state of the book form.
///
/// Created fresh per open and dropped when the form closes. The submission
/// runs through a [`Fetcher`], whose in-flight dedupe doubles as the
/// double-submit guard.
#[derive(Debug)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: BookDraft,

    /// Programme picked from the typeahead.
    pub programme: Option<ProgrammeSummary>,

    /// Course search input and its debounced controller.
    pub course_query: String,
    pub course_search: CourseSearch,
    pub course: Option<Course>,

    // Raw text buffers for the numeric fields; parsed on every edit.
    pub price_input: String,
    pub new_price_input: String,
    pub year_input: String,

    /// Submission lifecycle. `Error` keeps the form editable and shows a
    /// retry affordance.
    pub submit: Fetcher<(), BookListing>,

    /// Set after a successful "add" submission; the form stays open.
    pub submitted: bool,

    /// Local validation message (incomplete draft, missing sign-in).
    pub validation: Option<String>,
}

impl FormState {
    /// Fresh form for the "add book" flow.
    pub fn add() -> Self {
        Self::with_draft(FormMode::Add, BookDraft::new())
    }

    /// Form hydrated from an existing listing for the "edit" flow.
    pub fn edit(listing: &BookListing) -> Self {
        let mut form = Self::with_draft(FormMode::Edit(listing.id), BookDraft::from_listing(listing));
        form.price_input = listing.price.to_string();
        form.new_price_input = listing
            .new_price
            .map(|p| p.to_string())
            .unwrap_or_default();
        form.year_input = listing
            .release_year
            .map(|y| y.to_string())
            .unwrap_or_default();
        form
    }

    fn with_draft(mode: FormMode, draft: BookDraft) -> Self {
        Self {
            mode,
            draft,
            programme: None,
            course_query: String::new(),
            course_search: CourseSearch::new(),
            course: None,
            price_input: String::new(),
            new_price_input: String::new(),
            year_input: String::new(),
            submit: Fetcher::new(),
            submitted: false,
            validation: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.state().is_loading()
    }
}
