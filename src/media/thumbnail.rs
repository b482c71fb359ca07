use blake3::Hasher;
use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use thiserror::Error;

/// Size of generated thumbnails (bounding square)
const THUMBNAIL_SIZE: u32 = 256;

/// Extensions tried, in order, for image references without one
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to create cache directory {path}: {source}")]
    CacheDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to save thumbnail {path}: {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("task join error: {0}")]
    Join(String),
}

/// Image files for one catalog item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaEntry {
    /// Full-size image shown in the carousel
    pub original: Option<PathBuf>,
    /// Small cached copy shown in the list and detail panel
    pub thumbnail: Option<PathBuf>,
}

/// Find the file an image reference points to
///
/// A reference with an extension is used as a file name directly. Otherwise
/// the common extensions are tried in order.
pub fn resolve_image_path(assets_dir: &Path, image_ref: &str) -> Option<PathBuf> {
    if Path::new(image_ref).extension().is_some() {
        let path = assets_dir.join(image_ref);
        return path.is_file().then_some(path);
    }

    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| assets_dir.join(format!("{}.{}", image_ref, ext)))
        .find(|path| path.is_file())
}

/// Get the thumbnail path for a source image (doesn't generate, just returns the expected path)
///
/// The file name is a hash of the source path, size and modification time,
/// so an edited or moved source gets a fresh thumbnail.
pub fn thumbnail_path(cache_dir: &Path, source: &Path) -> PathBuf {
    let mut hasher = Hasher::new();
    hasher.update(source.to_string_lossy().as_bytes());

    if let Ok(metadata) = fs::metadata(source) {
        hasher.update(&metadata.len().to_le_bytes());
        let modified = metadata
            .modified()
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map(|since| since.as_nanos())
            .unwrap_or(0);
        hasher.update(&modified.to_le_bytes());
    }

    let hash = hasher.finalize().to_hex();
    cache_dir.join(format!("{}.png", &hash.as_str()[..32]))
}

/// Generate a thumbnail for an image, reusing a cached one if present
pub fn generate_thumbnail(source: &Path, cache_dir: &Path) -> Result<PathBuf, MediaError> {
    let target = thumbnail_path(cache_dir, source);
    if target.exists() {
        return Ok(target);
    }

    fs::create_dir_all(cache_dir).map_err(|source| MediaError::CacheDir {
        path: cache_dir.to_path_buf(),
        source,
    })?;

    let img = image::open(source).map_err(|e| MediaError::Decode {
        path: source.to_path_buf(),
        source: e,
    })?;

    // Resize to thumbnail size, keeping the aspect ratio
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    thumbnail.save(&target).map_err(|source| MediaError::Save {
        path: target.clone(),
        source,
    })?;

    tracing::debug!("📸 Generated thumbnail: {}", target.display());
    Ok(target)
}

/// Resolve and thumbnail every image reference
/// Runs in a background thread to avoid blocking the UI
pub async fn load_media(
    assets_dir: PathBuf,
    cache_dir: PathBuf,
    image_refs: Vec<String>,
) -> Result<Vec<MediaEntry>, MediaError> {
    tokio::task::spawn_blocking(move || load_media_blocking(&assets_dir, &cache_dir, &image_refs))
        .await
        .map_err(|e| MediaError::Join(e.to_string()))
}

/// Blocking version of media loading
fn load_media_blocking(assets_dir: &Path, cache_dir: &Path, image_refs: &[String]) -> Vec<MediaEntry> {
    tracing::info!("🔍 Loading {} images from {}", image_refs.len(), assets_dir.display());

    let entries: Vec<MediaEntry> = image_refs
        .iter()
        .map(|image_ref| {
            let Some(original) = resolve_image_path(assets_dir, image_ref) else {
                tracing::warn!("⚠️  No image file for {:?}", image_ref);
                return MediaEntry::default();
            };

            let thumbnail = match generate_thumbnail(&original, cache_dir) {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!("⚠️  {}", e);
                    None
                }
            };

            MediaEntry {
                original: Some(original),
                thumbnail,
            }
        })
        .collect();

    let found = entries.iter().filter(|e| e.original.is_some()).count();
    tracing::info!("✅ Media ready: {} of {} images found", found, image_refs.len());

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        write_colored_png(path, width, height, [200, 40, 40]);
    }

    fn write_colored_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
        RgbImage::from_pixel(width, height, Rgb(color))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_resolve_tries_extensions() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("image2.png"), 4, 4);
        fs::write(dir.path().join("image3.jpg"), b"").unwrap();

        assert_eq!(
            resolve_image_path(dir.path(), "image2"),
            Some(dir.path().join("image2.png"))
        );
        assert_eq!(
            resolve_image_path(dir.path(), "image3"),
            Some(dir.path().join("image3.jpg"))
        );
        assert_eq!(resolve_image_path(dir.path(), "image4"), None);
    }

    #[test]
    fn test_resolve_explicit_extension() {
        let dir = tempdir().unwrap();
        write_png(&dir.path().join("cat.png"), 4, 4);

        assert_eq!(
            resolve_image_path(dir.path(), "cat.png"),
            Some(dir.path().join("cat.png"))
        );
        assert_eq!(resolve_image_path(dir.path(), "cat.jpg"), None);
    }

    #[test]
    fn test_thumbnail_path_stays_in_cache_dir() {
        let path = thumbnail_path(Path::new("/cache"), Path::new("/assets/../holiday/beach 1.png"));
        assert_eq!(path.parent(), Some(Path::new("/cache")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
    }

    #[test]
    fn test_distinct_sources_get_distinct_thumbnails() {
        let assets = tempdir().unwrap();
        let cache = tempdir().unwrap();
        let cat = assets.path().join("猫1.png");
        let dog = assets.path().join("犬1.png");
        write_colored_png(&cat, 32, 32, [255, 0, 0]);
        write_colored_png(&dog, 32, 32, [0, 0, 255]);

        let cat_thumb = generate_thumbnail(&cat, cache.path()).unwrap();
        let dog_thumb = generate_thumbnail(&dog, cache.path()).unwrap();
        assert_ne!(cat_thumb, dog_thumb);

        let pixel = image::open(&dog_thumb).unwrap().to_rgb8().get_pixel(0, 0).0;
        assert_eq!(pixel, [0, 0, 255]);

        let spaced = assets.path().join("a b.png");
        let underscored = assets.path().join("a_b.png");
        write_png(&spaced, 8, 8);
        write_png(&underscored, 8, 8);
        assert_ne!(
            thumbnail_path(cache.path(), &spaced),
            thumbnail_path(cache.path(), &underscored)
        );
    }

    #[test]
    fn test_changed_source_gets_fresh_thumbnail() {
        let assets = tempdir().unwrap();
        let cache = tempdir().unwrap();
        let source = assets.path().join("photo.png");

        write_colored_png(&source, 32, 32, [255, 0, 0]);
        let first = generate_thumbnail(&source, cache.path()).unwrap();

        write_colored_png(&source, 200, 100, [0, 255, 0]);
        let second = generate_thumbnail(&source, cache.path()).unwrap();

        assert_ne!(first, second);
        let img = image::open(&second).unwrap().to_rgb8();
        assert_eq!(img.width(), 256);
        assert_eq!(img.get_pixel(0, 0).0, [0, 255, 0]);
    }

    #[test]
    fn test_generate_thumbnail_keeps_aspect() {
        let assets = tempdir().unwrap();
        let cache = tempdir().unwrap();
        let source = assets.path().join("wide.png");
        write_png(&source, 512, 300);

        let thumb = generate_thumbnail(&source, &cache.path().join("thumbs")).unwrap();
        let img = image::open(&thumb).unwrap();
        assert_eq!(img.width(), 256);
        assert_eq!(img.height(), 150);
    }

    #[test]
    fn test_generate_thumbnail_rejects_garbage() {
        let assets = tempdir().unwrap();
        let cache = tempdir().unwrap();
        let source = assets.path().join("broken.png");
        fs::write(&source, b"not an image").unwrap();

        let result = generate_thumbnail(&source, cache.path());
        assert!(matches!(result, Err(MediaError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_load_media() {
        let assets = tempdir().unwrap();
        let cache = tempdir().unwrap();
        write_png(&assets.path().join("image2.png"), 64, 64);

        let entries = load_media(
            assets.path().to_path_buf(),
            cache.path().to_path_buf(),
            vec!["image2".to_string(), "image3".to_string()],
        )
        .await
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].original, Some(assets.path().join("image2.png")));
        assert!(entries[0].thumbnail.as_ref().is_some_and(|p| p.exists()));
        assert_eq!(entries[1], MediaEntry::default());
    }
}
