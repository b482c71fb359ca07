use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element};

use crate::Message;

pub fn view(query: &str) -> Element<'_, Message> {
    let input = text_input("Search...", query)
        .on_input(Message::QueryChanged)
        .padding(10)
        .size(16);

    let clear = button(text("Clear"))
        .padding(10)
        .style(button::secondary)
        .on_press_maybe((!query.is_empty()).then(|| Message::QueryChanged(String::new())));

    row![text("🔍").size(18), input, clear]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}
