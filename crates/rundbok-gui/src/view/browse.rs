//! Browse screen: the drill-down navigator next to the listings feed.

use iced::widget::{Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use rundbok_model::{BookListing, ProgrammeId};
use rundbok_search::{Level, RequestStatus};

use crate::component::{empty_state, loading_row};
use crate::message::{BrowseMessage, Message};
use crate::state::{AppState, BrowseState};

/// Render the browse screen.
pub fn view_browse(state: &AppState) -> Element<'_, Message> {
    let browse = &state.browse;

    let header = row![
        text("Rundbok").size(24),
        Space::new().width(Length::Fill),
        button(
            row![lucide::plus().size(14), text("Add book").size(14)]
                .spacing(6)
                .align_y(Alignment::Center),
        )
        .on_press(Message::OpenAddBook)
        .padding([8.0, 14.0])
        .style(button::primary),
    ]
    .align_y(Alignment::Center);

    let body = row![
        container(view_navigator(browse)).width(Length::FillPortion(1)),
        container(view_listings(browse)).width(Length::FillPortion(2)),
    ]
    .spacing(24)
    .height(Length::Fill);

    container(column![header, view_share_link(browse), body].spacing(16))
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The shareable filter link: paste box, apply, and copy.
fn view_share_link(browse: &BrowseState) -> Element<'_, Message> {
    row![
        text_input("programme_id=...&course_id=...", &browse.link_input)
            .on_input(|s| Message::Browse(BrowseMessage::LinkInputChanged(s)))
            .padding(8)
            .width(Length::Fill),
        button(text("Open").size(13))
            .on_press(Message::Browse(BrowseMessage::OpenLinkClicked))
            .padding([8.0, 12.0])
            .style(button::secondary),
        button(text("Copy link").size(13))
            .on_press(Message::Browse(BrowseMessage::CopyLinkClicked))
            .padding([8.0, 12.0])
            .style(button::secondary),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn view_navigator(browse: &BrowseState) -> Element<'_, Message> {
    match browse.available.status() {
        RequestStatus::Idle | RequestStatus::Loading => loading_row("Loading programmes..."),
        RequestStatus::Error if browse.available.programmes().is_empty() => {
            empty_state("Couldn't load programmes.")
        }
        _ => match browse.navigator.level() {
            Level::Programmes => view_programme_level(browse),
            Level::Courses { programme_id } => view_course_level(browse, programme_id),
        },
    }
}

fn view_programme_level(browse: &BrowseState) -> Element<'_, Message> {
    let mut list = column![text("PROGRAMMES").size(11)].spacing(6);

    for programme in browse.available.programmes() {
        list = list.push(
            button(text(&programme.name).size(14))
                .on_press(Message::Browse(BrowseMessage::ProgrammeClicked(
                    programme.id,
                )))
                .padding([4.0, 2.0])
                .style(button::text),
        );
    }

    scrollable(list).height(Length::Fill).into()
}

fn view_course_level(browse: &BrowseState, programme_id: ProgrammeId) -> Element<'_, Message> {
    let mut list = column![text("COURSES").size(11)].spacing(6);

    if let Some(programme) = browse.available.find(programme_id) {
        for course in &programme.courses {
            list = list.push(
                button(text(&course.name).size(14))
                    .on_press(Message::Browse(BrowseMessage::CourseClicked(course.id)))
                    .padding([4.0, 2.0])
                    .style(button::text),
            );
        }
    }

    list = list.push(Space::new().height(12.0));
    list = list.push(
        button(
            row![lucide::arrow_left().size(14), text("Back").size(14)]
                .spacing(6)
                .align_y(Alignment::Center),
        )
        .on_press(Message::Browse(BrowseMessage::BackClicked))
        .padding([4.0, 2.0])
        .style(button::text),
    );

    scrollable(list).height(Length::Fill).into()
}

fn view_listings(browse: &BrowseState) -> Element<'_, Message> {
    let feed = &browse.feed;
    let mut list = column![].spacing(10);

    if feed.status() == RequestStatus::Loading {
        list = list.push(loading_row("Updating listings..."));
    }
    if let Some(err) = feed.error() {
        list = list.push(text(format!("Couldn't refresh listings: {err}")).size(13));
    }
    if feed.listings().is_empty() && feed.status() == RequestStatus::Success {
        list = list.push(empty_state("No books match this filter yet."));
    }

    for listing in feed.listings() {
        list = list.push(view_listing_row(listing));
    }

    scrollable(list).height(Length::Fill).into()
}

fn view_listing_row(listing: &BookListing) -> Element<'_, Message> {
    container(
        row![
            column![
                text(&listing.title).size(15),
                text(format!("{} · {}", listing.author, listing.course_code)).size(12),
            ]
            .spacing(2),
            Space::new().width(Length::Fill),
            column![
                text(format!("{} kr", listing.price)).size(15),
                button(text("Edit").size(12))
                    .on_press(Message::OpenEditBook(listing.clone()))
                    .padding([2.0, 8.0])
                    .style(button::text),
            ]
            .spacing(2)
            .align_x(Alignment::End),
        ]
        .align_y(Alignment::Center),
    )
    .padding(10)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
