//! Browse view messages.

use rundbok_model::{BookListing, CourseId, ProgrammeId, ProgrammeWithCourses};

/// Messages for the drill-down browser and the listings feed.
#[derive(Debug, Clone)]
pub enum BrowseMessage {
    /// The programme catalogue (with nested courses) resolved.
    CatalogueLoaded {
        seq: u64,
        result: Result<Vec<ProgrammeWithCourses>, String>,
    },

    /// A listings fetch resolved.
    ListingsLoaded {
        seq: u64,
        result: Result<Vec<BookListing>, String>,
    },

    /// A programme was clicked at the root level.
    ProgrammeClicked(ProgrammeId),

    /// A course was clicked inside the selected programme.
    CourseClicked(CourseId),

    /// "Back" from the course list to the programme list.
    BackClicked,

    /// The share-link input changed.
    LinkInputChanged(String),

    /// Apply the pasted share link to the filter state.
    OpenLinkClicked,

    /// Copy the current share link to the clipboard.
    CopyLinkClicked,
}
