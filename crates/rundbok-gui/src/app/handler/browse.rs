//! Browse view message handler.
//!
//! Handles:
//! - Programme/course drill-down and the back transition
//! - Catalogue and listings fetch results
//! - The share link (paste, apply, copy)

use iced::Task;
use rundbok_search::LocationStore;

use super::MessageHandler;
use crate::message::{BrowseMessage, Message};
use crate::service;
use crate::state::AppState;

/// Handler for browse view messages.
pub struct BrowseHandler;

impl MessageHandler<BrowseMessage> for BrowseHandler {
    fn handle(&self, state: &mut AppState, msg: BrowseMessage) -> Task<Message> {
        match msg {
            BrowseMessage::CatalogueLoaded { seq, result } => {
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "programme catalogue fetch failed");
                }
                if state.browse.available.settle(seq, result) {
                    // Deep links resolve by id against the fetched list, so
                    // the navigator level is only decided now.
                    state.browse.navigator.restore(
                        state.browse.filter.criteria(),
                        state.browse.available.programmes(),
                    );
                }
                Task::none()
            }

            BrowseMessage::ListingsLoaded { seq, result } => {
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "listings fetch failed");
                }
                state.browse.feed.settle(seq, result);
                Task::none()
            }

            BrowseMessage::ProgrammeClicked(id) => {
                let patch = state.browse.navigator.select_programme(id);
                state.browse.filter.search(patch);
                after_criteria_change(state)
            }

            BrowseMessage::CourseClicked(id) => {
                let patch = state.browse.navigator.select_course(id);
                state.browse.filter.search(patch);
                after_criteria_change(state)
            }

            BrowseMessage::BackClicked => {
                let patch = state.browse.navigator.back();
                state.browse.filter.search(patch);
                after_criteria_change(state)
            }

            BrowseMessage::LinkInputChanged(text) => {
                state.browse.link_input = text;
                Task::none()
            }

            BrowseMessage::OpenLinkClicked => {
                let link = state.browse.link_input.trim();
                // Accept a bare query-string or a full pasted URL.
                let query = link.split_once('?').map_or(link, |(_, q)| q).to_string();

                state.browse.filter.location_mut().write(&query);
                state.browse.filter.location_changed();
                state.browse.navigator.restore(
                    state.browse.filter.criteria(),
                    state.browse.available.programmes(),
                );
                after_criteria_change(state)
            }

            BrowseMessage::CopyLinkClicked => {
                iced::clipboard::write(state.browse.filter.share_link())
            }
        }
    }
}

/// Persist the new location and refetch the listings feed.
fn after_criteria_change(state: &mut AppState) -> Task<Message> {
    state.settings.last_search = state.browse.filter.share_link();
    if let Err(err) = state.settings.save() {
        tracing::warn!(error = %err, "failed to persist settings");
    }

    match state.browse.feed.refresh(state.browse.filter.criteria()) {
        Some(ticket) => service::catalogue::load_listings(state.api.clone(), ticket),
        None => Task::none(),
    }
}
