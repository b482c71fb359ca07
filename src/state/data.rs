/// The image catalog shown by the carousel
///
/// A catalog is fixed at startup and never changes afterwards. Items are
/// identified only by their position.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Represents a single entry in the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Image reference, resolved against the assets directory (e.g. "image2")
    pub image_ref: String,
    /// Display name, matched by the search bar (e.g. "Image 2")
    pub name: String,
    /// Secondary line shown under the name
    pub description: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(
        "catalog columns differ in length: {images} images, {names} names, {descriptions} descriptions"
    )]
    LengthMismatch {
        images: usize,
        names: usize,
        descriptions: usize,
    },
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed catalog {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// On-disk catalog layout: three parallel columns
#[derive(Debug, Deserialize)]
struct CatalogFile {
    images: Vec<String>,
    names: Vec<String>,
    descriptions: Vec<String>,
}

/// Ordered, immutable list of carousel items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from three parallel columns of equal length
    pub fn from_parallel(
        images: Vec<String>,
        names: Vec<String>,
        descriptions: Vec<String>,
    ) -> Result<Self, CatalogError> {
        if images.len() != names.len() || names.len() != descriptions.len() {
            return Err(CatalogError::LengthMismatch {
                images: images.len(),
                names: names.len(),
                descriptions: descriptions.len(),
            });
        }

        let items = images
            .into_iter()
            .zip(names)
            .zip(descriptions)
            .map(|((image_ref, name), description)| Item {
                image_ref,
                name,
                description,
            })
            .collect();

        Ok(Catalog { items })
    }

    /// The catalog bundled with the application
    pub fn builtin() -> Self {
        let items = (2..=10)
            .enumerate()
            .map(|(i, n)| Item {
                image_ref: format!("image{}", n),
                name: format!("Image {}", n),
                description: format!("Description {}", i + 1),
            })
            .collect();

        Catalog { items }
    }

    /// Read a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: CatalogFile = serde_json::from_str(&json).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_parallel(file.images, file.names, file.descriptions)
    }

    /// Load the configured catalog, falling back to the built-in one
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("📚 Using built-in catalog");
            return Self::builtin();
        };

        match Self::from_file(path) {
            Ok(catalog) => {
                tracing::info!("📚 Loaded {} items from {}", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                tracing::warn!("⚠️  {}; using built-in catalog", e);
                Self::builtin()
            }
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Display names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    /// Image references in catalog order
    pub fn image_refs(&self) -> Vec<String> {
        self.items.iter().map(|item| item.image_ref.clone()).collect()
    }
}
