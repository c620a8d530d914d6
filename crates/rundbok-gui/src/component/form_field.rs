//! Labeled form inputs.

use iced::Element;
use iced::widget::{column, text, text_input};

/// A labeled single-line text input.
pub fn labeled_input<'a, M: Clone + 'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &str,
    on_input: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    column![
        text(label).size(13),
        text_input(placeholder, value).on_input(on_input).padding(8),
    ]
    .spacing(4)
    .into()
}
