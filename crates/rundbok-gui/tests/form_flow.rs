//! Tests for the book form's update loop: the debounced course typeahead,
//! the double-submit guard, and the submission error/retry path.

use std::sync::Arc;

use async_trait::async_trait;

use rundbok_api::{NetworkService, Result as ApiResult};
use rundbok_gui::App;
use rundbok_gui::message::{FormMessage, Message};
use rundbok_gui::state::{FormState, Settings, View};
use rundbok_model::{
    BookDraft, BookListing, Course, CourseId, ListingId, ProgrammeId, ProgrammeSummary,
    ProgrammeWithCourses, SearchCriteria,
};
use rundbok_search::RequestStatus;

struct StubService;

#[async_trait]
impl NetworkService for StubService {
    async fn fetch_programmes(&self) -> ApiResult<Vec<ProgrammeSummary>> {
        Ok(Vec::new())
    }

    async fn fetch_available_programmes(&self) -> ApiResult<Vec<ProgrammeWithCourses>> {
        Ok(Vec::new())
    }

    async fn fetch_courses(&self, _query: &str) -> ApiResult<Vec<Course>> {
        Ok(Vec::new())
    }

    async fn fetch_books(&self, _criteria: &SearchCriteria) -> ApiResult<Vec<BookListing>> {
        Ok(Vec::new())
    }

    async fn add_new_book(&self, _token: &str, _draft: &BookDraft) -> ApiResult<BookListing> {
        Ok(listing())
    }

    async fn edit_book(
        &self,
        _token: &str,
        _draft: &BookDraft,
        _id: ListingId,
    ) -> ApiResult<BookListing> {
        Ok(listing())
    }
}

fn listing() -> BookListing {
    BookListing {
        id: ListingId(5),
        title: "Modern Operating Systems".to_string(),
        author: "Tanenbaum".to_string(),
        programme_code: "CDATE".to_string(),
        course_code: "ID1206".to_string(),
        price: 280,
        new_price: Some(560),
        description: "Fourth edition.".to_string(),
        personal_description: String::new(),
        release_year: Some(2014),
    }
}

fn course() -> Course {
    Course {
        id: CourseId(10),
        name: "Operating Systems".to_string(),
        course_code: "ID1206".to_string(),
    }
}

fn programme() -> ProgrammeSummary {
    ProgrammeSummary {
        id: ProgrammeId(1),
        name: "Computer Science".to_string(),
        programme_code: "CDATE".to_string(),
    }
}

fn boot(auth_token: Option<&str>) -> (App, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        auth_token: auth_token.map(String::from),
        storage_path: Some(dir.path().join("settings.toml")),
        ..Settings::default()
    };

    let (app, _startup) = App::with_service(Arc::new(StubService), settings);
    (app, dir)
}

fn form(app: &App) -> &FormState {
    app.state.form().expect("form should be open")
}

fn fill_draft(app: &mut App) {
    app.update(Message::Form(FormMessage::ProgrammePicked(programme())));
    app.update(Message::Form(FormMessage::CoursePicked(course())));
    app.update(Message::Form(FormMessage::TitleChanged(
        "Modern Operating Systems".to_string(),
    )));
    app.update(Message::Form(FormMessage::AuthorChanged(
        "Tanenbaum".to_string(),
    )));
    app.update(Message::Form(FormMessage::PriceChanged("280".to_string())));
}

#[test]
fn short_course_queries_issue_no_fetch() {
    let (mut app, _guard) = boot(Some("token"));
    app.update(Message::OpenAddBook);

    app.update(Message::Form(FormMessage::CourseQueryChanged(
        "C".to_string(),
    )));
    app.update(Message::Form(FormMessage::CourseQueryChanged(
        "CS".to_string(),
    )));

    assert_eq!(form(&app).course_search.status(), RequestStatus::Idle);
}

#[test]
fn only_the_latest_debounced_query_fetches() {
    let (mut app, _guard) = boot(Some("token"));
    app.update(Message::OpenAddBook);

    // Two gated keystrokes: sequence numbers 1 and 2.
    app.update(Message::Form(FormMessage::CourseQueryChanged(
        "CS1".to_string(),
    )));
    app.update(Message::Form(FormMessage::CourseQueryChanged(
        "CS10".to_string(),
    )));

    // The first timer fires late; it must not fetch.
    app.update(Message::Form(FormMessage::CourseSearchElapsed(1)));
    assert_eq!(form(&app).course_search.status(), RequestStatus::Idle);

    app.update(Message::Form(FormMessage::CourseSearchElapsed(2)));
    assert_eq!(form(&app).course_search.status(), RequestStatus::Loading);

    app.update(Message::Form(FormMessage::CoursesLoaded {
        seq: 1,
        result: Ok(vec![course()]),
    }));
    assert_eq!(form(&app).course_search.status(), RequestStatus::Success);
    assert_eq!(form(&app).course_search.courses().len(), 1);
}

#[test]
fn submitting_twice_before_resolution_is_a_no_op() {
    let (mut app, _guard) = boot(Some("token"));
    app.update(Message::OpenAddBook);
    fill_draft(&mut app);

    app.update(Message::Form(FormMessage::SubmitPressed));
    assert!(form(&app).is_submitting());

    // Second click while in flight: still one submission, nothing changes.
    app.update(Message::Form(FormMessage::SubmitPressed));
    assert!(form(&app).is_submitting());
    assert_eq!(form(&app).validation, None);

    app.update(Message::Form(FormMessage::SubmitFinished {
        seq: 1,
        result: Ok(listing()),
    }));
    assert!(!form(&app).is_submitting());
    assert!(form(&app).submitted);
}

#[test]
fn incomplete_draft_is_rejected_locally() {
    let (mut app, _guard) = boot(Some("token"));
    app.update(Message::OpenAddBook);

    app.update(Message::Form(FormMessage::SubmitPressed));

    assert!(!form(&app).is_submitting());
    assert!(form(&app).validation.is_some());
}

#[test]
fn submission_without_a_token_is_rejected_locally() {
    let (mut app, _guard) = boot(None);
    app.update(Message::OpenAddBook);
    fill_draft(&mut app);

    app.update(Message::Form(FormMessage::SubmitPressed));

    assert!(!form(&app).is_submitting());
    assert!(form(&app).validation.is_some());
}

#[test]
fn failed_submission_surfaces_the_error_and_allows_retry() {
    let (mut app, _guard) = boot(Some("token"));
    app.update(Message::OpenAddBook);
    fill_draft(&mut app);

    app.update(Message::Form(FormMessage::SubmitPressed));
    app.update(Message::Form(FormMessage::SubmitFinished {
        seq: 1,
        result: Err("server returned 500".to_string()),
    }));

    assert_eq!(form(&app).submit.status(), RequestStatus::Error);
    assert!(form(&app).submit.error().is_some());
    assert!(!form(&app).submitted);

    // Retry goes back through the same guarded path.
    app.update(Message::Form(FormMessage::SubmitPressed));
    assert!(form(&app).is_submitting());

    app.update(Message::Form(FormMessage::SubmitFinished {
        seq: 2,
        result: Ok(listing()),
    }));
    assert!(form(&app).submitted);
}

#[test]
fn successful_edit_returns_to_the_browse_view() {
    let (mut app, _guard) = boot(Some("token"));
    app.update(Message::OpenEditBook(listing()));

    // Hydration makes the draft complete; submit straight away.
    app.update(Message::Form(FormMessage::SubmitPressed));
    assert!(form(&app).is_submitting());

    app.update(Message::Form(FormMessage::SubmitFinished {
        seq: 1,
        result: Ok(listing()),
    }));

    assert!(matches!(app.state.view, View::Browse));
}

#[test]
fn stale_submit_resolution_is_ignored() {
    let (mut app, _guard) = boot(Some("token"));
    app.update(Message::OpenAddBook);
    fill_draft(&mut app);

    app.update(Message::Form(FormMessage::SubmitPressed));

    // A resolution carrying a sequence number that was never issued (or was
    // superseded) must not settle the submission.
    app.update(Message::Form(FormMessage::SubmitFinished {
        seq: 99,
        result: Ok(listing()),
    }));
    assert!(form(&app).is_submitting());
    assert!(!form(&app).submitted);
}
