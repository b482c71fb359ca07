/// The "now showing" panel and the full item list
use iced::widget::image::{Handle, Image};
use iced::widget::{column, container, mouse_area, row, text, Column};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::media::thumbnail::MediaEntry;
use crate::state::data::Catalog;
use crate::state::selection::Selection;
use crate::Message;

const DETAIL_THUMBNAIL: f32 = 80.0;
const ROW_THUMBNAIL: f32 = 60.0;
const DESCRIPTION_COLOR: Color = Color {
    r: 0.55,
    g: 0.55,
    b: 0.55,
    a: 1.0,
};

/// Square thumbnail, or an empty tile while it's missing
fn thumbnail<'a>(entry: Option<&MediaEntry>, size: f32) -> Element<'a, Message> {
    match entry.and_then(|e| e.thumbnail.clone()) {
        Some(path) => Image::new(Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        None => container(text("?").size(size / 3.0))
            .center(Length::Fixed(size))
            .style(container::rounded_box)
            .into(),
    }
}

/// Details of the current item, or `None` when it is filtered out
pub fn now_showing<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
    media: &'a [MediaEntry],
) -> Option<Element<'a, Message>> {
    let index = selection.showing()?;
    let item = catalog.get(index)?;

    let panel = row![
        thumbnail(media.get(index), DETAIL_THUMBNAIL),
        column![text(&item.name).size(16), text(&item.description).size(16)]
            .spacing(4)
            .align_x(Alignment::Center),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    Some(
        container(panel)
            .padding(10)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into(),
    )
}

/// Every catalog item, regardless of the search query
pub fn view<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
    media: &'a [MediaEntry],
) -> Element<'a, Message> {
    let rows = catalog.items().iter().enumerate().map(|(index, item)| {
        let content = row![
            thumbnail(media.get(index), ROW_THUMBNAIL),
            column![
                text(&item.name).size(16),
                text(&item.description).size(14).color(DESCRIPTION_COLOR),
            ]
            .spacing(2),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let style: fn(&Theme) -> container::Style = if selection.showing() == Some(index) {
            container::bordered_box
        } else {
            container::rounded_box
        };

        mouse_area(
            container(content)
                .padding(10)
                .width(Length::Fill)
                .style(style),
        )
        .on_press(Message::ItemPressed(index))
        .into()
    });

    Column::with_children(rows).spacing(10).into()
}
