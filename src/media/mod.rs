/// Image file handling
///
/// This module handles:
/// - Resolving catalog image references to files on disk
/// - Generating thumbnails
/// - Caching thumbnails to disk

pub mod thumbnail;
