/// Page indicator below the carousel
/// One dot per filtered item; clicking a dot jumps to that page
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Canvas, Path, Program};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme};

use crate::Message;

/// Horizontal space reserved for each dot
const DOT_SPACING: f32 = 16.0;
const DOT_RADIUS: f32 = 4.0;
const CONTROL_HEIGHT: f32 = 20.0;

/// Page indicator drawn on a canvas
#[derive(Debug, Clone, Copy)]
pub struct PageControl {
    pub number_of_pages: usize,
    pub current_page: usize,
}

/// Left edge of the first dot, with the row of dots centered in `width`
fn dots_offset(width: f32, pages: usize) -> f32 {
    (width - pages as f32 * DOT_SPACING) / 2.0
}

/// Which page a click at `x` lands on, if any
pub fn page_at(x: f32, width: f32, pages: usize) -> Option<usize> {
    if pages == 0 {
        return None;
    }

    let relative = x - dots_offset(width, pages);
    if relative < 0.0 || relative >= pages as f32 * DOT_SPACING {
        return None;
    }

    Some(((relative / DOT_SPACING) as usize).min(pages - 1))
}

impl Program<Message> for PageControl {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let offset = dots_offset(bounds.width, self.number_of_pages);
        let y = bounds.height / 2.0;

        let current_color = theme.palette().text;
        let other_color = Color::from_rgb(0.6, 0.6, 0.6);

        for page in 0..self.number_of_pages {
            let x = offset + DOT_SPACING * (page as f32 + 0.5);
            let dot = Path::circle(Point::new(x, y), DOT_RADIUS);
            let color = if page == self.current_page {
                current_color
            } else {
                other_color
            };
            frame.fill(&dot, color);
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position_in(bounds) {
                if let Some(page) = page_at(position.x, bounds.width, self.number_of_pages) {
                    return (canvas::event::Status::Captured, Some(Message::PageSelected(page)));
                }
            }
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        let over_dot = cursor
            .position_in(bounds)
            .and_then(|p| page_at(p.x, bounds.width, self.number_of_pages))
            .is_some();

        if over_dot {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

pub fn view<'a>(number_of_pages: usize, current_page: usize) -> Element<'a, Message> {
    Canvas::new(PageControl {
        number_of_pages,
        current_page,
    })
    .width(Length::Fill)
    .height(Length::Fixed(CONTROL_HEIGHT))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_at_centered_dots() {
        // 3 dots, 48px wide, centered in 100px: dots span 26..74
        assert_eq!(page_at(26.0, 100.0, 3), Some(0));
        assert_eq!(page_at(41.9, 100.0, 3), Some(0));
        assert_eq!(page_at(42.0, 100.0, 3), Some(1));
        assert_eq!(page_at(73.0, 100.0, 3), Some(2));
    }

    #[test]
    fn test_page_at_outside_dots() {
        assert_eq!(page_at(10.0, 100.0, 3), None);
        assert_eq!(page_at(74.0, 100.0, 3), None);
        assert_eq!(page_at(50.0, 100.0, 0), None);
    }
}
