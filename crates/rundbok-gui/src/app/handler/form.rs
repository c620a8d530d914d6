//! Book form message handler.
//!
//! Handles:
//! - The programme typeahead and the debounced course search
//! - Field edits and the cover photo dialog
//! - Submission with its double-submit guard and retry path

use iced::Task;

use rundbok_search::RequestStatus;

use super::MessageHandler;
use crate::message::{FormMessage, Message};
use crate::service;
use crate::state::{AppState, FormMode, View};

/// Handler for form messages.
pub struct FormHandler;

impl MessageHandler<FormMessage> for FormHandler {
    fn handle(&self, state: &mut AppState, msg: FormMessage) -> Task<Message> {
        // The typeahead cache is app-level; settle it even if the form has
        // closed in the meantime.
        if let FormMessage::ProgrammesLoaded { seq, result } = msg {
            if let Err(err) = &result {
                tracing::warn!(error = %err, "programme fetch failed");
            }
            state.programmes.settle(seq, result);
            return Task::none();
        }

        let View::Form(form) = &mut state.view else {
            // A fetch resolved after the form closed; nothing to update.
            return Task::none();
        };

        match msg {
            FormMessage::ProgrammesLoaded { .. } => Task::none(),

            FormMessage::ProgrammePicked(programme) => {
                form.draft.programme_code = programme.programme_code.clone();
                form.programme = Some(programme);
                Task::none()
            }

            FormMessage::CourseQueryChanged(text) => {
                form.course_query = text;
                match form.course_search.set_query(&form.course_query) {
                    Some(ticket) => service::catalogue::debounce_course_search(ticket),
                    None => Task::none(),
                }
            }

            FormMessage::CourseSearchElapsed(seq) => {
                match form.course_search.debounce_elapsed(seq) {
                    Some(ticket) => service::catalogue::search_courses(state.api.clone(), ticket),
                    None => Task::none(),
                }
            }

            FormMessage::CoursesLoaded { seq, result } => {
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "course search failed");
                }
                form.course_search.settle(seq, result);
                Task::none()
            }

            FormMessage::CoursePicked(course) => {
                form.draft.course_code = course.course_code.clone();
                form.course = Some(course);
                Task::none()
            }

            FormMessage::TitleChanged(text) => {
                form.draft.title = text;
                Task::none()
            }

            FormMessage::AuthorChanged(text) => {
                form.draft.author = text;
                Task::none()
            }

            FormMessage::PriceChanged(text) => {
                form.draft.price = text.trim().parse().ok();
                form.price_input = text;
                Task::none()
            }

            FormMessage::NewPriceChanged(text) => {
                form.draft.new_price = text.trim().parse().ok();
                form.new_price_input = text;
                Task::none()
            }

            FormMessage::ReleaseYearChanged(text) => {
                form.draft.release_year = text.trim().parse().ok();
                form.year_input = text;
                Task::none()
            }

            FormMessage::DescriptionChanged(text) => {
                form.draft.description = text;
                Task::none()
            }

            FormMessage::ConditionChanged(text) => {
                form.draft.personal_description = text;
                Task::none()
            }

            FormMessage::PickCoverPhoto => service::books::pick_cover_photo(),

            FormMessage::CoverPhotoPicked(path) => {
                if let Some(path) = path {
                    form.draft.cover_photo = Some(path);
                }
                Task::none()
            }

            FormMessage::SubmitPressed => {
                form.validation = None;
                form.submitted = false;

                if !form.draft.is_complete() {
                    form.validation = Some(
                        "Fill in programme, course, title, author, and price first.".to_string(),
                    );
                    return Task::none();
                }
                let Some(token) = state.settings.auth_token.clone() else {
                    form.validation = Some("Sign in before publishing a listing.".to_string());
                    return Task::none();
                };

                // begin() yields no ticket while a submission is in flight,
                // so a second click cannot double-submit.
                match form.submit.begin(()) {
                    Some(ticket) => service::books::submit_book(
                        state.api.clone(),
                        token,
                        form.mode,
                        form.draft.clone(),
                        ticket.seq,
                    ),
                    None => Task::none(),
                }
            }

            FormMessage::SubmitFinished { seq, result } => {
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "submission failed");
                }
                if !form.submit.settle(seq, result) {
                    return Task::none();
                }
                if form.submit.status() != RequestStatus::Success {
                    // The error stays in the submit state; the view shows it
                    // with a retry button.
                    return Task::none();
                }

                let mode = form.mode;
                match mode {
                    FormMode::Add => {
                        form.submitted = true;
                        Task::none()
                    }
                    FormMode::Edit(_) => {
                        state.view = View::Browse;
                        match state.browse.feed.refresh(state.browse.filter.criteria()) {
                            Some(ticket) => {
                                service::catalogue::load_listings(state.api.clone(), ticket)
                            }
                            None => Task::none(),
                        }
                    }
                }
            }
        }
    }
}
