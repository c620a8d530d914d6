//! Catalogue and listings fetch tasks.

use std::sync::Arc;

use iced::Task;

use rundbok_api::NetworkService;
use rundbok_model::SearchCriteria;
use rundbok_search::{DebounceTicket, FetchTicket, DEBOUNCE};

use crate::message::{BrowseMessage, FormMessage, Message};

/// Fetch the programme catalogue with nested courses.
pub fn load_catalogue(api: Arc<dyn NetworkService>, ticket: FetchTicket<()>) -> Task<Message> {
    let seq = ticket.seq;
    Task::perform(
        async move {
            api.fetch_available_programmes()
                .await
                .map_err(|e| e.to_string())
        },
        move |result| Message::Browse(BrowseMessage::CatalogueLoaded { seq, result }),
    )
}

/// Fetch the flat programme list for the form typeahead.
pub fn load_programmes(api: Arc<dyn NetworkService>, ticket: FetchTicket<()>) -> Task<Message> {
    let seq = ticket.seq;
    Task::perform(
        async move { api.fetch_programmes().await.map_err(|e| e.to_string()) },
        move |result| Message::Form(FormMessage::ProgrammesLoaded { seq, result }),
    )
}

/// Fetch the listings matching the given criteria.
pub fn load_listings(
    api: Arc<dyn NetworkService>,
    ticket: FetchTicket<SearchCriteria>,
) -> Task<Message> {
    let seq = ticket.seq;
    Task::perform(
        async move { api.fetch_books(&ticket.query).await.map_err(|e| e.to_string()) },
        move |result| Message::Browse(BrowseMessage::ListingsLoaded { seq, result }),
    )
}

/// Wait out the course search debounce, then report which timer fired.
pub fn debounce_course_search(ticket: DebounceTicket) -> Task<Message> {
    Task::perform(tokio::time::sleep(DEBOUNCE), move |_| {
        Message::Form(FormMessage::CourseSearchElapsed(ticket.seq))
    })
}

/// Run a debounced course search.
pub fn search_courses(api: Arc<dyn NetworkService>, ticket: FetchTicket<String>) -> Task<Message> {
    let seq = ticket.seq;
    Task::perform(
        async move { api.fetch_courses(&ticket.query).await.map_err(|e| e.to_string()) },
        move |result| Message::Form(FormMessage::CoursesLoaded { seq, result }),
    )
}
