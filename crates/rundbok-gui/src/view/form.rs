//! Add/edit book form.

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use rundbok_search::RequestStatus;

use crate::component::{labeled_input, loading_row, search_box};
use crate::message::{FormMessage, Message};
use crate::state::{AppState, FormMode, FormState};

/// Render the add/edit book form.
pub fn view_form<'a>(state: &'a AppState, form: &'a FormState) -> Element<'a, Message> {
    let title = match form.mode {
        FormMode::Add => "Add book",
        FormMode::Edit(_) => "Edit book",
    };

    let header = row![
        button(
            row![lucide::arrow_left().size(14), text("Listings").size(14)]
                .spacing(6)
                .align_y(Alignment::Center),
        )
        .on_press(Message::CloseForm)
        .padding([4.0, 2.0])
        .style(button::text),
        Space::new().width(Length::Fill),
        text(title).size(20),
        Space::new().width(Length::Fill),
    ]
    .align_y(Alignment::Center);

    let content = column![
        header,
        view_catalogue_pickers(state, form),
        row![
            labeled_input("Title", "Book title", &form.draft.title, |s| {
                Message::Form(FormMessage::TitleChanged(s))
            }),
            labeled_input("Author", "Author", &form.draft.author, |s| {
                Message::Form(FormMessage::AuthorChanged(s))
            }),
        ]
        .spacing(16),
        row![
            labeled_input("Price (kr)", "0", &form.price_input, |s| {
                Message::Form(FormMessage::PriceChanged(s))
            }),
            labeled_input("New price (kr)", "0", &form.new_price_input, |s| {
                Message::Form(FormMessage::NewPriceChanged(s))
            }),
            labeled_input("Release year", "", &form.year_input, |s| {
                Message::Form(FormMessage::ReleaseYearChanged(s))
            }),
        ]
        .spacing(16),
        labeled_input("Book description", "", &form.draft.description, |s| {
            Message::Form(FormMessage::DescriptionChanged(s))
        }),
        labeled_input(
            "Book condition",
            "",
            &form.draft.personal_description,
            |s| Message::Form(FormMessage::ConditionChanged(s))
        ),
        view_cover_photo(form),
        view_submit_area(form),
    ]
    .spacing(16)
    .max_width(720.0);

    scrollable(
        container(content)
            .padding(24)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .into()
}

/// Programme typeahead and debounced course search.
fn view_catalogue_pickers<'a>(state: &'a AppState, form: &'a FormState) -> Element<'a, Message> {
    let programme_picker = pick_list(state.programmes.programmes(), form.programme.clone(), |p| {
        Message::Form(FormMessage::ProgrammePicked(p))
    })
    .placeholder(if state.programmes.status() == RequestStatus::Loading {
        "Loading programmes..."
    } else {
        "Search programme..."
    })
    .width(Length::Fill);

    let course_results: Element<'a, Message> =
        if form.course_search.status() == RequestStatus::Loading {
            loading_row("Searching...")
        } else {
            let mut results = column![].spacing(2);
            for course in form.course_search.courses() {
                results = results.push(
                    button(text(course.to_string()).size(13))
                        .on_press(Message::Form(FormMessage::CoursePicked(course.clone())))
                        .padding([2.0, 4.0])
                        .style(button::text),
                );
            }
            results.into()
        };

    let chosen: Element<'a, Message> = match &form.course {
        Some(course) => text(format!("Selected: {course}")).size(12).into(),
        None => Space::new().into(),
    };

    row![
        column![text("Programme").size(13), programme_picker]
            .spacing(4)
            .width(Length::FillPortion(1)),
        column![
            text("Course").size(13),
            search_box(
                &form.course_query,
                "Search course...",
                |s| Message::Form(FormMessage::CourseQueryChanged(s)),
                Message::Form(FormMessage::CourseQueryChanged(String::new())),
            ),
            course_results,
            chosen,
        ]
        .spacing(4)
        .width(Length::FillPortion(1)),
    ]
    .spacing(16)
    .into()
}

fn view_cover_photo(form: &FormState) -> Element<'_, Message> {
    let name = form
        .draft
        .cover_photo
        .as_deref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "No file selected".to_string());

    row![
        button(text("Choose cover...").size(13))
            .on_press(Message::Form(FormMessage::PickCoverPhoto))
            .padding([6.0, 12.0])
            .style(button::secondary),
        text(name).size(12),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

/// Validation and submission feedback plus the submit/retry button.
fn view_submit_area(form: &FormState) -> Element<'_, Message> {
    let mut area = column![].spacing(8);

    if let Some(message) = &form.validation {
        area = area.push(text(message).size(13));
    }
    if let Some(err) = form.submit.error() {
        area = area.push(text(format!("Submission failed: {err}")).size(13));
    }
    if form.submitted {
        area = area.push(text("Listing published.").size(13));
    }

    let label = match (form.mode, form.submit.status() == RequestStatus::Error) {
        (_, true) => "Try again",
        (FormMode::Add, false) => "Add book",
        (FormMode::Edit(_), false) => "Save changes",
    };

    area.push(
        button(text(label).size(14))
            .on_press_maybe(
                (!form.is_submitting()).then_some(Message::Form(FormMessage::SubmitPressed)),
            )
            .padding([8.0, 16.0])
            .style(button::primary),
    )
    .into()
}
