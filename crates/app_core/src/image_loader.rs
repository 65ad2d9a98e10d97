//! Image loading and decoding service
//!
//! Decoding runs on a dedicated worker thread; completed images land in the
//! shared ready map where the UI picks them up for texture upload.

use crate::AppError;
use dashmap::{DashMap, DashSet};
use image::{GenericImageView, ImageReader};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Decoded RGBA8 image ready for texture upload
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub key: String,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Decode request handled by the worker thread
#[derive(Debug)]
struct LoadRequest {
    key: String,
    path: PathBuf,
    target_size: Option<(u32, u32)>,
}

/// Background decode service
#[derive(Clone)]
pub struct ImageLoader {
    request_tx: mpsc::UnboundedSender<LoadRequest>,
}

impl ImageLoader {
    /// Create the loader and spawn its worker thread. Decoded images are
    /// inserted into `ready`; `pending` entries are cleared either way.
    pub fn new(
        ready: Arc<DashMap<String, LoadedImage>>,
        pending: Arc<DashSet<String>>,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<LoadRequest>();

        std::thread::spawn(move || {
            while let Some(request) = request_rx.blocking_recv() {
                match decode_file(&request.key, &request.path, request.target_size) {
                    Ok(image) => {
                        ready.insert(request.key.clone(), image);
                    }
                    Err(e) if e.is_recoverable() => {
                        tracing::warn!("Failed to load {:?}: {}", request.path, e);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load {:?}: {}", request.path, e);
                    }
                }
                pending.remove(&request.key);
            }
        });

        Self { request_tx }
    }

    /// Queue a decode for the worker thread
    pub fn request(
        &self,
        key: String,
        path: PathBuf,
        target_size: Option<(u32, u32)>,
    ) -> Result<(), AppError> {
        self.request_tx
            .send(LoadRequest {
                key,
                path,
                target_size,
            })
            .map_err(|_| AppError::Worker("Image loader channel closed".into()))
    }
}

/// Decode an image file to RGBA8, downscaling to fit `target_size` if given
pub fn decode_file(
    key: &str,
    path: &Path,
    target_size: Option<(u32, u32)>,
) -> Result<LoadedImage, AppError> {
    tracing::debug!("Loading image: {:?}", path);

    let data = std::fs::read(path)?;

    let reader = ImageReader::new(Cursor::new(&data))
        .with_guessed_format()
        .map_err(|e| AppError::ImageDecode(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| AppError::ImageDecode(e.to_string()))?;

    let img = if let Some((max_w, max_h)) = target_size {
        let (w, h) = img.dimensions();
        if w > max_w || h > max_h {
            img.thumbnail(max_w, max_h)
        } else {
            img
        }
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        key: key.to_string(),
        width,
        height,
        data: rgba.into_raw(),
    })
}
