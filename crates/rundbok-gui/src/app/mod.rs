//! Main application module.
//!
//! Implements the Iced application using the builder pattern. The
//! architecture follows the Elm pattern: State -> Message -> Update -> View.
//! All state changes happen in `update()`; views are pure functions.
//!
//! Message handling is organized by feature in `handler/`.

mod handler;

use std::sync::Arc;

use async_trait::async_trait;
use iced::{Element, Task};

use rundbok_api::{ApiClient, ApiError, NetworkService};
use rundbok_model::{
    BookDraft, BookListing, Course, ListingId, ProgrammeSummary, ProgrammeWithCourses,
    SearchCriteria,
};

use crate::message::Message;
use crate::service;
use crate::state::{AppState, FormMode, FormState, Settings, View};
use crate::view::{view_browse, view_form};
use handler::{BrowseHandler, FormHandler, MessageHandler};

/// Main application struct - the root of the Iced application.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application at startup.
    ///
    /// Loads settings, builds the backend client, and kicks off the initial
    /// catalogue and listings fetches.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        match ApiClient::new(&settings.api_base_url) {
            Ok(client) => Self::with_service(Arc::new(client), settings),
            Err(err) => {
                tracing::error!(error = %err, "failed to create API client");
                Self::with_service(Arc::new(UnavailableService(err.to_string())), settings)
            }
        }
    }

    /// Create the application with an explicit backend, restoring the last
    /// filter state from the settings.
    pub fn with_service(
        api: Arc<dyn NetworkService>,
        settings: Settings,
    ) -> (Self, Task<Message>) {
        let mut state = AppState::new(api, settings);
        let mut startup = Vec::new();

        if let Some(ticket) = state.browse.available.start() {
            startup.push(service::catalogue::load_catalogue(state.api.clone(), ticket));
        }
        if let Some(ticket) = state.browse.feed.refresh(state.browse.filter.criteria()) {
            startup.push(service::catalogue::load_listings(state.api.clone(), ticket));
        }

        (Self { state }, Task::batch(startup))
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Browse(msg) => BrowseHandler.handle(&mut self.state, msg),

            Message::Form(msg) => FormHandler.handle(&mut self.state, msg),

            Message::OpenAddBook => {
                self.state.view = View::Form(FormState::add());
                self.start_programme_fetch()
            }

            Message::OpenEditBook(listing) => {
                self.state.view = View::Form(FormState::edit(&listing));
                self.start_programme_fetch()
            }

            Message::CloseForm => {
                self.state.view = View::Browse;
                Task::none()
            }
        }
    }

    /// The programme typeahead data is fetched once per run, on the first
    /// form open.
    fn start_programme_fetch(&mut self) -> Task<Message> {
        match self.state.programmes.start() {
            Some(ticket) => service::catalogue::load_programmes(self.state.api.clone(), ticket),
            None => Task::none(),
        }
    }

    /// Render the current view. Pure function of state.
    pub fn view(&self) -> Element<'_, Message> {
        match &self.state.view {
            View::Browse => view_browse(&self.state),
            View::Form(form) => view_form(&self.state, form),
        }
    }

    /// Window title.
    pub fn title(&self) -> String {
        match &self.state.view {
            View::Browse => "Rundbok".to_string(),
            View::Form(form) => match form.mode {
                FormMode::Add => "Add book - Rundbok".to_string(),
                FormMode::Edit(_) => "Edit book - Rundbok".to_string(),
            },
        }
    }
}

/// Backend stand-in used when the HTTP client cannot be constructed.
/// Every call fails with the construction error, which the views surface
/// the same way as any other network failure.
struct UnavailableService(String);

impl UnavailableService {
    fn err(&self) -> ApiError {
        ApiError::Network(self.0.clone())
    }
}

#[async_trait]
impl NetworkService for UnavailableService {
    async fn fetch_programmes(&self) -> rundbok_api::Result<Vec<ProgrammeSummary>> {
        Err(self.err())
    }

    async fn fetch_available_programmes(&self) -> rundbok_api::Result<Vec<ProgrammeWithCourses>> {
        Err(self.err())
    }

    async fn fetch_courses(&self, _query: &str) -> rundbok_api::Result<Vec<Course>> {
        Err(self.err())
    }

    async fn fetch_books(&self, _criteria: &SearchCriteria) -> rundbok_api::Result<Vec<BookListing>> {
        Err(self.err())
    }

    async fn add_new_book(
        &self,
        _auth_token: &str,
        _draft: &BookDraft,
    ) -> rundbok_api::Result<BookListing> {
        Err(self.err())
    }

    async fn edit_book(
        &self,
        _auth_token: &str,
        _draft: &BookDraft,
        _listing: ListingId,
    ) -> rundbok_api::Result<BookListing> {
        Err(self.err())
    }
}
