/// The paged image viewer at the top of the window
use iced::widget::image::{Handle, Image};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::media::thumbnail::MediaEntry;
use crate::state::data::{Catalog, Item};
use crate::state::selection::Selection;
use crate::ui::page_control;
use crate::Message;

const CAROUSEL_HEIGHT: f32 = 300.0;

pub fn view<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
    media: &'a [MediaEntry],
) -> Element<'a, Message> {
    let page_view = match selection
        .showing()
        .and_then(|index| catalog.get(index).map(|item| (item, media.get(index))))
    {
        Some((item, entry)) => slide(item, entry),
        None => placeholder("No matching images"),
    };

    let pages = selection.filtered().len();
    let page = selection.page();

    let previous = button(text("‹").size(32))
        .padding([10, 16])
        .style(button::text)
        .on_press_maybe((page > 0).then_some(Message::PreviousPage));
    let next = button(text("›").size(32))
        .padding([10, 16])
        .style(button::text)
        .on_press_maybe((page + 1 < pages).then_some(Message::NextPage));

    column![
        row![previous, page_view, next]
            .spacing(10)
            .align_y(Alignment::Center),
        page_control::view(pages, page),
    ]
    .spacing(10)
    .into()
}

/// One carousel page; falls back to the item name when the file is missing
fn slide<'a>(item: &'a Item, entry: Option<&MediaEntry>) -> Element<'a, Message> {
    match entry.and_then(|e| e.original.clone()) {
        Some(path) => Image::new(Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(CAROUSEL_HEIGHT))
            .into(),
        None => placeholder(&item.name),
    }
}

fn placeholder(label: &str) -> Element<'_, Message> {
    container(text(label).size(24))
        .center(Length::Fill)
        .height(Length::Fixed(CAROUSEL_HEIGHT))
        .style(container::rounded_box)
        .into()
}
