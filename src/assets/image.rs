//! Background image decoder.
//!
//! Decodes batches of local image files off the UI thread, in parallel
//! across files, into RGBA buffers ready for texture upload. Results come
//! back over a channel that the UI polls each frame.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use log::{debug, warn};
use rayon::prelude::*;

/// Widest image kept after decoding; larger ones are scaled down.
pub const DEFAULT_MAX_WIDTH: u32 = 800;

/// Decoded image data (RGBA).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Error while reading or decoding one file.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetError {
    pub path: PathBuf,
    pub message: String,
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

impl std::error::Error for AssetError {}

type Decoded = (PathBuf, Result<ImageData, AssetError>);

/// Manages background decoding.
pub struct ImageLoader {
    max_width: u32,
    tx: mpsc::Sender<Decoded>,
    rx: mpsc::Receiver<Decoded>,
    pending: HashSet<PathBuf>,
    loaded: HashMap<PathBuf, ImageData>,
    failed: HashSet<PathBuf>,
}

impl ImageLoader {
    pub fn new(max_width: u32) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            max_width: max_width.max(1),
            tx,
            rx,
            pending: HashSet::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Queue `paths` for decoding. Paths already loaded, pending, or failed
    /// are skipped. Returns how many were queued.
    pub fn request_batch<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut batch = Vec::new();
        for path in paths {
            let path = path.as_ref().to_path_buf();
            if self.loaded.contains_key(&path)
                || self.pending.contains(&path)
                || self.failed.contains(&path)
            {
                continue;
            }
            self.pending.insert(path.clone());
            batch.push(path);
        }
        if batch.is_empty() {
            return 0;
        }

        let queued = batch.len();
        debug!("assets: decoding {} images", queued);
        let tx = self.tx.clone();
        let max_width = self.max_width;
        std::thread::spawn(move || {
            batch.into_par_iter().for_each_with(tx, |tx, path| {
                let result = decode_file(&path, max_width);
                let _ = tx.send((path, result));
            });
        });
        queued
    }

    /// Collect finished decodes. Call every frame.
    pub fn poll(&mut self) -> usize {
        let mut received = 0;
        while let Ok((path, result)) = self.rx.try_recv() {
            self.pending.remove(&path);
            match result {
                Ok(data) => {
                    self.loaded.insert(path, data);
                }
                Err(e) => {
                    warn!("assets: {}", e);
                    self.failed.insert(path);
                }
            }
            received += 1;
        }
        received
    }

    pub fn get(&self, path: &Path) -> Option<&ImageData> {
        self.loaded.get(path)
    }

    pub fn is_failed(&self, path: &Path) -> bool {
        self.failed.contains(path)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Nothing left in flight.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDTH)
    }
}

/// Decode one file, scaling it down to at most `max_width` pixels wide.
pub fn decode_file(path: &Path, max_width: u32) -> Result<ImageData, AssetError> {
    let img = image::open(path).map_err(|e| AssetError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > max_width {
        let ratio = max_width as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            max_width,
            new_h,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Ok(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("curio-assets-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbaImage::from_pixel(width, height, image::Rgba([200, 80, 40, 255]))
            .save(path)
            .unwrap();
    }

    fn wait_idle(loader: &mut ImageLoader) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !loader.is_idle() && Instant::now() < deadline {
            loader.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_loader_deduplicates() {
        let mut loader = ImageLoader::default();
        let path = Path::new("/no/such/dir/img.png");
        assert_eq!(loader.request_batch([path, path]), 1);
        assert_eq!(loader.request_batch([path]), 0);
        assert_eq!(loader.pending_count(), 1);
    }

    #[test]
    fn test_missing_file_fails() {
        let mut loader = ImageLoader::default();
        let path = Path::new("/no/such/dir/missing.png");
        loader.request_batch([path]);
        wait_idle(&mut loader);
        assert_eq!(loader.failed_count(), 1);
        assert!(loader.is_failed(path));
        // failed paths are not retried
        assert_eq!(loader.request_batch([path]), 0);
    }

    #[test]
    fn test_decodes_batch_in_background() {
        let dir = scratch_dir("batch");
        let a = dir.join("a.png");
        let b = dir.join("b.png");
        write_png(&a, 4, 2);
        write_png(&b, 3, 3);

        let mut loader = ImageLoader::default();
        assert_eq!(loader.request_batch([&a, &b]), 2);
        wait_idle(&mut loader);
        assert_eq!(loader.loaded_count(), 2);
        let data = loader.get(&a).unwrap();
        assert_eq!((data.width, data.height), (4, 2));
        assert_eq!(data.rgba.len(), 4 * 2 * 4);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_wide_images_scaled_down() {
        let dir = scratch_dir("wide");
        let path = dir.join("wide.png");
        write_png(&path, 1000, 500);
        let data = decode_file(&path, DEFAULT_MAX_WIDTH).unwrap();
        assert_eq!((data.width, data.height), (800, 400));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_decode_error_names_path() {
        let err = decode_file(Path::new("/no/such/file.png"), 800).unwrap_err();
        assert!(err.to_string().starts_with("/no/such/file.png"));
    }
}
