/// View components
///
/// - `carousel.rs` - paged image viewer
/// - `page_control.rs` - canvas-drawn page indicator
/// - `search_bar.rs` - query input
/// - `item_list.rs` - "now showing" panel and full item list
/// - `statistics.rs` - statistics sheet and modal overlay

pub mod carousel;
pub mod item_list;
pub mod page_control;
pub mod search_bar;
pub mod statistics;
