//! Photo library model and loading
//!
//! The library is read once at startup from a single JSON document
//! `{ photos, albums, featured? }` and is immutable afterwards.

use crate::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single photo entry. Field names follow the camelCase of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Full-size image, relative to the document location
    pub url: String,
    /// Preview image for the grid, relative to the document location
    pub thumbnail: String,
    #[serde(default)]
    pub album_id: Option<String>,
}

/// Named grouping of photos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
}

/// On-disk shape of the library document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryDocument {
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub albums: Vec<Album>,
    /// Photo ids forming the carousel slide list, in order
    #[serde(default)]
    pub featured: Vec<String>,
}

/// The loaded, immutable photo library
#[derive(Debug)]
pub struct PhotoLibrary {
    photos: Vec<Photo>,
    albums: Vec<Album>,
    featured: Vec<Photo>,
    root: PathBuf,
}

impl PhotoLibrary {
    /// Read and parse the library document at `path`
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let doc: LibraryDocument = serde_json::from_str(&content)?;
        let root = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();

        tracing::info!(
            "Library loaded: {} photos, {} albums, {} featured",
            doc.photos.len(),
            doc.albums.len(),
            doc.featured.len()
        );

        Ok(Self::from_document(doc, root))
    }

    /// Build a library from an already parsed document.
    /// Featured ids that match no photo are skipped with a warning.
    pub fn from_document(doc: LibraryDocument, root: PathBuf) -> Self {
        let featured = doc
            .featured
            .iter()
            .filter_map(|id| {
                let found = doc.photos.iter().find(|p| &p.id == id).cloned();
                if found.is_none() {
                    tracing::warn!("Featured id {:?} matches no photo, skipping", id);
                }
                found
            })
            .collect();

        Self {
            photos: doc.photos,
            albums: doc.albums,
            featured,
            root,
        }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Carousel slide list resolved from the document's featured ids
    pub fn featured(&self) -> &[Photo] {
        &self.featured
    }

    pub fn photo_by_id(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// Resolve an image path from the document against its location
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

/// User-driven gallery selection, driving the derived visible-photo view
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    pub current_album_id: Option<String>,
    pub search_term: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_doc() -> &'static str {
        r#"{
            "photos": [
                {"id": "a", "title": "Sunset", "description": "Evening light",
                 "tags": ["beach", "sky"], "url": "img/a.jpg",
                 "thumbnail": "thumbs/a.jpg", "albumId": "x"},
                {"id": "b", "title": "Mountain", "tags": ["hike"],
                 "url": "img/b.jpg", "thumbnail": "thumbs/b.jpg", "albumId": null}
            ],
            "albums": [{"id": "x", "name": "Travel"}],
            "featured": ["b", "missing", "a"]
        }"#
    }

    #[test]
    fn parses_camel_case_document() {
        let doc: LibraryDocument = serde_json::from_str(sample_doc()).unwrap();

        assert_eq!(doc.photos.len(), 2);
        assert_eq!(doc.photos[0].album_id.as_deref(), Some("x"));
        assert_eq!(doc.photos[1].album_id, None);
        assert_eq!(doc.photos[1].description, "");
        assert_eq!(doc.albums[0].name, "Travel");
    }

    #[test]
    fn featured_resolution_keeps_order_and_skips_unknown_ids() {
        let doc: LibraryDocument = serde_json::from_str(sample_doc()).unwrap();
        let library = PhotoLibrary::from_document(doc, PathBuf::from("."));

        let ids: Vec<&str> = library.featured().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let result = serde_json::from_str::<LibraryDocument>("{\"photos\": 12}");
        assert!(result.is_err());
    }

    #[test]
    fn load_reads_document_and_resolves_paths() {
        let dir = tempfile::tempdir().unwrap();
        let doc_path = dir.path().join("photos.json");
        let mut file = std::fs::File::create(&doc_path).unwrap();
        file.write_all(sample_doc().as_bytes()).unwrap();

        let library = PhotoLibrary::load(&doc_path).unwrap();

        assert_eq!(library.photos().len(), 2);
        assert_eq!(
            library.resolve_path(&library.photos()[0].thumbnail),
            dir.path().join("thumbs/a.jpg")
        );
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let err = PhotoLibrary::load(Path::new("/nonexistent/photos.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
