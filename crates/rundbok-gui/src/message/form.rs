//! Book form messages.

use std::path::PathBuf;

use rundbok_model::{BookListing, Course, ProgrammeSummary};

/// Messages for the add/edit book form.
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// The flat programme list for the typeahead resolved.
    ProgrammesLoaded {
        seq: u64,
        result: Result<Vec<ProgrammeSummary>, String>,
    },

    /// A programme was picked from the typeahead.
    ProgrammePicked(ProgrammeSummary),

    /// The course search input changed.
    CourseQueryChanged(String),

    /// A course search debounce timer fired.
    CourseSearchElapsed(u64),

    /// A course search fetch resolved.
    CoursesLoaded {
        seq: u64,
        result: Result<Vec<Course>, String>,
    },

    /// A course was picked from the search results.
    CoursePicked(Course),

    // Plain field edits.
    TitleChanged(String),
    AuthorChanged(String),
    PriceChanged(String),
    NewPriceChanged(String),
    ReleaseYearChanged(String),
    DescriptionChanged(String),
    ConditionChanged(String),

    /// Open the cover photo file dialog.
    PickCoverPhoto,

    /// The file dialog closed.
    CoverPhotoPicked(Option<PathBuf>),

    /// Submit (or retry) the draft.
    SubmitPressed,

    /// The submission resolved.
    SubmitFinished {
        seq: u64,
        result: Result<BookListing, String>,
    },
}
