use iced::alignment::{Horizontal, Vertical};
use iced::keyboard::{self, key, Key};
use iced::widget::{button, column, container, scrollable, stack, text, Column};
use iced::{Element, Length, Subscription, Task, Theme};
use tracing_subscriber::EnvFilter;

mod config;
mod media;
mod state;
mod ui;

use config::Settings;
use media::thumbnail::{self, MediaEntry};
use state::data::Catalog;
use state::selection::Selection;
use state::stats::Statistics;

/// Main application state
struct ImageCarousel {
    settings: Settings,
    /// Items shown by the carousel, fixed at startup
    catalog: Catalog,
    /// Search query and current item
    selection: Selection,
    /// Image files per catalog item (empty until loaded)
    media: Vec<MediaEntry>,
    /// Open statistics sheet, if any
    statistics: Option<Statistics>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User typed in the search bar
    QueryChanged(String),
    /// User clicked a dot in the page indicator
    PageSelected(usize),
    NextPage,
    PreviousPage,
    /// User clicked a row in the item list
    ItemPressed(usize),
    /// User clicked the floating statistics button
    ShowStatistics,
    CloseStatistics,
    /// Background thumbnail generation finished
    MediaLoaded(Result<Vec<MediaEntry>, String>),
}

impl ImageCarousel {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let catalog = Catalog::load(settings.catalog_path.as_deref());
        if catalog.is_empty() {
            tracing::warn!("⚠️  Catalog has no items");
        }

        tracing::info!("🎠 Image Carousel initialized with {} items", catalog.len());

        let load = Task::perform(
            thumbnail::load_media(
                settings.assets_dir(),
                config::thumbnail_cache_dir(),
                catalog.image_refs(),
            ),
            |result| Message::MediaLoaded(result.map_err(|e| e.to_string())),
        );

        (Self::with_catalog(settings, catalog), load)
    }

    /// State for a catalog with the first item selected and no media yet
    fn with_catalog(settings: Settings, catalog: Catalog) -> Self {
        let selection = Selection::new(&catalog.names());

        ImageCarousel {
            settings,
            catalog,
            selection,
            media: Vec::new(),
            statistics: None,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.selection.set_query(&self.catalog.names(), query);
                tracing::debug!(
                    "Query {:?} matches {} items",
                    self.selection.query(),
                    self.selection.filtered().len()
                );
            }
            Message::PageSelected(page) => self.selection.go_to_page(page),
            Message::NextPage => self.selection.next_page(),
            Message::PreviousPage => self.selection.previous_page(),
            Message::ItemPressed(index) => {
                if !self.selection.select(index) {
                    tracing::debug!("Item {} is not in the filtered set", index);
                }
            }
            Message::ShowStatistics => {
                let stats = Statistics::compute(
                    &self.catalog.names(),
                    self.selection.filtered().len(),
                    self.settings.top_k,
                );
                tracing::debug!("📊 Statistics: {:?}", stats);
                self.statistics = Some(stats);
            }
            Message::CloseStatistics => self.statistics = None,
            Message::MediaLoaded(Ok(media)) => self.media = media,
            Message::MediaLoaded(Err(e)) => {
                tracing::error!("❌ Media loading failed: {}", e);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content: Column<Message> = column![
            ui::carousel::view(&self.catalog, &self.selection, &self.media),
            ui::search_bar::view(self.selection.query()),
        ]
        .spacing(10)
        .padding(20);

        if let Some(panel) = ui::item_list::now_showing(&self.catalog, &self.selection, &self.media) {
            content = content.push(panel);
        }

        content = content.push(ui::item_list::view(&self.catalog, &self.selection, &self.media));

        let statistics_button = container(
            button(text("•••").size(20))
                .on_press(Message::ShowStatistics)
                .padding(15),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(20);

        let main = stack![scrollable(content), statistics_button];

        match &self.statistics {
            Some(stats) => ui::statistics::modal(
                main,
                ui::statistics::view(stats),
                Message::CloseStatistics,
            ),
            None => main.into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            Key::Named(key::Named::ArrowRight) => Some(Message::NextPage),
            Key::Named(key::Named::ArrowLeft) => Some(Message::PreviousPage),
            Key::Named(key::Named::Escape) => Some(Message::CloseStatistics),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.settings.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("image_carousel=info")),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application("Image Carousel", ImageCarousel::update, ImageCarousel::view)
        .theme(ImageCarousel::theme)
        .subscription(ImageCarousel::subscription)
        .centered()
        .run_with(ImageCarousel::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::stats::CharacterCount;

    fn app() -> ImageCarousel {
        ImageCarousel::with_catalog(Settings::default(), Catalog::builtin())
    }

    fn send(app: &mut ImageCarousel, messages: Vec<Message>) {
        for message in messages {
            let _ = app.update(message);
        }
    }

    fn count(character: &str, count: usize) -> CharacterCount {
        CharacterCount {
            character: character.to_string(),
            count,
        }
    }

    #[test]
    fn test_statistics_count_filtered_but_tally_all_names() {
        let mut app = app();
        send(
            &mut app,
            vec![Message::QueryChanged("1".to_string()), Message::ShowStatistics],
        );

        let stats = app.statistics.as_ref().unwrap();
        assert_eq!(stats.item_count, 1);
        assert_eq!(
            stats.top_characters,
            vec![count("I", 9), count("m", 9), count("a", 9)]
        );

        send(&mut app, vec![Message::CloseStatistics]);
        assert!(app.statistics.is_none());
    }

    #[test]
    fn test_statistics_use_configured_top_k() {
        let settings = Settings {
            top_k: 1,
            ..Settings::default()
        };
        let mut app = ImageCarousel::with_catalog(settings, Catalog::builtin());
        send(&mut app, vec![Message::ShowStatistics]);

        let stats = app.statistics.as_ref().unwrap();
        assert_eq!(stats.item_count, 9);
        assert_eq!(stats.top_characters, vec![count("I", 9)]);
    }

    #[test]
    fn test_query_then_navigation_stays_in_filtered() {
        let mut app = app();
        send(
            &mut app,
            vec![
                Message::PageSelected(5),
                Message::QueryChanged("image 1".to_string()),
            ],
        );
        assert_eq!(app.selection.filtered(), &[8]);
        assert_eq!(app.selection.current(), 8);

        send(
            &mut app,
            vec![
                Message::ItemPressed(2),
                Message::PageSelected(4),
                Message::NextPage,
                Message::PreviousPage,
            ],
        );
        assert_eq!(app.selection.current(), 8);
        assert_eq!(app.selection.showing(), Some(8));
    }

    #[test]
    fn test_item_press_and_pages_follow_visible_items() {
        let mut app = app();
        send(&mut app, vec![Message::QueryChanged("IMAGE".to_string())]);
        assert_eq!(app.selection.filtered().len(), 9);

        send(&mut app, vec![Message::ItemPressed(3)]);
        assert_eq!(app.selection.current(), 3);
        assert_eq!(app.selection.page(), 3);

        send(&mut app, vec![Message::NextPage, Message::NextPage]);
        assert_eq!(app.selection.current(), 5);

        send(&mut app, vec![Message::PageSelected(100)]);
        assert_eq!(app.selection.current(), 8);
    }

    #[test]
    fn test_query_without_matches_shows_nothing() {
        let mut app = app();
        send(
            &mut app,
            vec![
                Message::QueryChanged("zebra".to_string()),
                Message::NextPage,
                Message::ItemPressed(4),
                Message::ShowStatistics,
            ],
        );

        assert_eq!(app.selection.current(), 0);
        assert_eq!(app.selection.showing(), None);
        assert_eq!(app.statistics.as_ref().unwrap().item_count, 0);
    }

    #[test]
    fn test_media_loaded_replaces_entries() {
        let mut app = app();
        let entries = vec![MediaEntry::default(); 9];
        send(&mut app, vec![Message::MediaLoaded(Ok(entries.clone()))]);
        assert_eq!(app.media, entries);

        send(&mut app, vec![Message::MediaLoaded(Err("boom".to_string()))]);
        assert_eq!(app.media.len(), 9);
    }
}
