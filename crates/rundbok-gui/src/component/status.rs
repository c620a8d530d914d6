//! Loading and empty-state rows.

use iced::widget::{container, text};
use iced::{Element, Length};

/// Small inline loading indicator.
pub fn loading_row<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(text(label).size(13)).padding(8).into()
}

/// Centered empty-state hint.
pub fn empty_state<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(text(label).size(14))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(24)
        .into()
}
