//! Search box component.
//!
//! A text input with search icon and clear button.

use iced::widget::{button, container, row, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

/// Creates a search input with a clear button.
///
/// Shows a search icon prefix and a clear button once text is entered.
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding([8.0, 10.0])
        .width(Length::Fill);

    let mut content = row![container(lucide::search().size(14)).padding([0.0, 4.0]), input]
        .spacing(6)
        .align_y(Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(lucide::x().size(14))
                .on_press(on_clear)
                .padding([4.0, 8.0])
                .style(button::text),
        );
    }

    content.into()
}
