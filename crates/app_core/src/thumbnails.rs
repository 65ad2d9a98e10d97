//! Thumbnail and image sourcing
//!
//! Front of the decode pipeline: deduplicates requests, tracks in-flight
//! keys, and hands decoded images to the UI exactly once for texture
//! upload. Grid thumbnails are requested lazily as rows become visible;
//! carousel slides are preloaded in a parallel batch at startup.

use crate::image_loader::{decode_file, ImageLoader, LoadedImage};
use dashmap::{DashMap, DashSet};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

/// Cache key for a photo's grid thumbnail
pub fn thumb_key(photo_id: &str) -> String {
    format!("thumb:{photo_id}")
}

/// Cache key for a photo's full-size image (lightbox and carousel slides)
pub fn full_key(photo_id: &str) -> String {
    format!("full:{photo_id}")
}

/// Request deduplication + ready-image handoff for the decode worker
#[derive(Clone)]
pub struct ThumbnailManager {
    ready: Arc<DashMap<String, LoadedImage>>,
    pending: Arc<DashSet<String>>,
    loader: ImageLoader,
}

impl ThumbnailManager {
    pub fn new() -> Self {
        let ready = Arc::new(DashMap::new());
        let pending = Arc::new(DashSet::new());
        let loader = ImageLoader::new(ready.clone(), pending.clone());

        Self {
            ready,
            pending,
            loader,
        }
    }

    /// Queue a decode unless the key is already decoded or in flight
    pub fn request(&self, key: &str, path: PathBuf, target_size: Option<(u32, u32)>) {
        if self.ready.contains_key(key) {
            return;
        }
        if !self.pending.insert(key.to_string()) {
            return;
        }

        if let Err(e) = self.loader.request(key.to_string(), path, target_size) {
            tracing::error!("{}", e);
            self.pending.remove(key);
        }
    }

    /// Decode a batch in parallel off the UI thread (startup preload)
    pub fn preload(&self, requests: Vec<(String, PathBuf, Option<(u32, u32)>)>) {
        let requests: Vec<_> = requests
            .into_iter()
            .filter(|(key, _, _)| !self.ready.contains_key(key) && self.pending.insert(key.clone()))
            .collect();

        if requests.is_empty() {
            return;
        }

        tracing::info!("Preloading {} images", requests.len());

        let ready = self.ready.clone();
        let pending = self.pending.clone();
        rayon::spawn(move || {
            requests
                .into_par_iter()
                .for_each(|(key, path, target_size)| {
                    match decode_file(&key, &path, target_size) {
                        Ok(image) => {
                            ready.insert(key.clone(), image);
                        }
                        Err(e) => {
                            tracing::warn!("Preload of {:?} failed: {}", path, e);
                        }
                    }
                    pending.remove(&key);
                });
        });
    }

    /// Take every decoded image waiting for texture upload
    pub fn drain_ready(&self) -> Vec<LoadedImage> {
        let keys: Vec<String> = self.ready.iter().map(|entry| entry.key().clone()).collect();
        keys.into_iter()
            .filter_map(|key| self.ready.remove(&key).map(|(_, image)| image))
            .collect()
    }

    /// Number of decodes currently in flight
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Default for ThumbnailManager {
    fn default() -> Self {
        Self::new()
    }
}
