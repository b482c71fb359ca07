/// Statistics sheet, shown as a modal over the main view
use iced::widget::{button, center, column, container, mouse_area, opaque, stack, text};
use iced::{Alignment, Color, Element, Length};

use crate::state::stats::Statistics;
use crate::Message;

const SHEET_WIDTH: f32 = 320.0;

pub fn view(stats: &Statistics) -> Element<'_, Message> {
    let mut content = column![
        text("Statistics").size(24),
        text(format!("Total Items: {}", stats.item_count)).size(16),
        text(format!("Top {} Characters:", stats.k)).size(16),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    for entry in &stats.top_characters {
        content = content.push(text(format!("{}: {}", entry.label(), entry.count)));
    }

    content = content.push(
        button("Close")
            .on_press(Message::CloseStatistics)
            .padding(10),
    );

    container(content)
        .width(Length::Fixed(SHEET_WIDTH))
        .padding(30)
        .style(container::rounded_box)
        .into()
}

/// Show `content` above `base`, dimming it; clicking outside sends `on_blur`
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.7,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
