/// State management module
///
/// This module handles all application state, including:
/// - The immutable image catalog (data.rs)
/// - Search filtering and carousel selection (selection.rs)
/// - Character statistics for the statistics sheet (stats.rs)

pub mod data;
pub mod selection;
pub mod stats;
