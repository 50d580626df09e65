//! Application settings.
//!
//! Defaults cover the bundled collection. `from_env` overlays the
//! `CURIO_*` environment variables; unreadable values are logged and the
//! default kept.

use std::path::PathBuf;

use log::{info, warn};

use crate::interaction::{SessionOptions, DRAG_THRESHOLD_PX};
use crate::layout::{LayoutStrategy, CANONICAL_SEED, MAX_ITEMS};
use crate::motion::PARALLAX_STRENGTH;
use crate::view::ViewMode;

pub const ENV_IMAGES_DIR: &str = "CURIO_IMAGES_DIR";
pub const ENV_CATALOG: &str = "CURIO_CATALOG";
pub const ENV_LAYOUT: &str = "CURIO_LAYOUT";
pub const ENV_SEED: &str = "CURIO_SEED";
pub const ENV_VIEW: &str = "CURIO_VIEW";

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub images_dir: PathBuf,
    /// JSON catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
    pub strategy: LayoutStrategy,
    /// Seed of the canonical (baseline) layout.
    pub seed: u64,
    /// Items shown on the canvas, at most [`MAX_ITEMS`].
    pub max_items: usize,
    pub drag_threshold_px: f32,
    pub parallax_strength: f32,
    pub image_max_width: u32,
    pub start_mode: ViewMode,
    pub dark_mode: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("assets/images"),
            catalog_path: None,
            strategy: LayoutStrategy::RowPack,
            seed: CANONICAL_SEED,
            max_items: MAX_ITEMS,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            parallax_strength: PARALLAX_STRENGTH,
            image_max_width: crate::assets::image::DEFAULT_MAX_WIDTH,
            start_mode: ViewMode::Scattered,
            dark_mode: false,
        }
    }
}

impl GalleryConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each `CURIO_*`
    /// key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = non_empty(lookup(ENV_IMAGES_DIR)) {
            config = config.with_images_dir(dir);
        }
        if let Some(path) = non_empty(lookup(ENV_CATALOG)) {
            config = config.with_catalog(path);
        }
        if let Some(raw) = non_empty(lookup(ENV_LAYOUT)) {
            match LayoutStrategy::parse(&raw) {
                Some(strategy) => config.strategy = strategy,
                None => warn!("config: ignoring {}={:?}", ENV_LAYOUT, raw),
            }
        }
        if let Some(raw) = non_empty(lookup(ENV_SEED)) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = seed,
                Err(_) => warn!("config: ignoring {}={:?}", ENV_SEED, raw),
            }
        }
        if let Some(raw) = non_empty(lookup(ENV_VIEW)) {
            match ViewMode::parse(&raw) {
                Some(mode) => config = config.with_start_mode(mode),
                None => warn!("config: ignoring {}={:?}", ENV_VIEW, raw),
            }
        }

        info!(
            "config: images={} layout={} seed={} view={}",
            config.images_dir.display(),
            config.strategy.label(),
            config.seed,
            config.start_mode.label()
        );
        config
    }

    // ── Builders ─────────────────────────────────────────────────────────────

    pub fn with_images_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.images_dir = dir.into();
        self
    }

    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_strategy(mut self, strategy: LayoutStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items.min(MAX_ITEMS);
        self
    }

    pub fn with_start_mode(mut self, mode: ViewMode) -> Self {
        self.start_mode = mode;
        self
    }

    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = dark;
        self
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            strategy: self.strategy,
            seed: self.seed,
            drag_threshold: self.drag_threshold_px,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_items, 64);
        assert_eq!(config.strategy, LayoutStrategy::RowPack);
        assert_eq!(config.start_mode, ViewMode::Scattered);
        assert!((config.drag_threshold_px - 5.0).abs() < 1e-6);
        assert!((config.parallax_strength - 7.5).abs() < 1e-6);
        assert_eq!(config.image_max_width, 800);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = GalleryConfig::from_lookup(lookup(&[
            (ENV_IMAGES_DIR, "/srv/curios"),
            (ENV_CATALOG, "items.json"),
            (ENV_LAYOUT, "zigzag"),
            (ENV_SEED, " 7 "),
            (ENV_VIEW, "List"),
        ]));
        assert_eq!(config.images_dir, PathBuf::from("/srv/curios"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("items.json")));
        assert_eq!(config.strategy, LayoutStrategy::ZigZag);
        assert_eq!(config.seed, 7);
        assert_eq!(config.start_mode, ViewMode::List);
    }

    #[test]
    fn test_invalid_values_ignored() {
        let config = GalleryConfig::from_lookup(lookup(&[
            (ENV_LAYOUT, "spiral"),
            (ENV_SEED, "-1"),
            (ENV_CATALOG, "   "),
            (ENV_VIEW, "masonry"),
        ]));
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_builders_and_session_options() {
        let config = GalleryConfig::default()
            .with_seed(9)
            .with_strategy(LayoutStrategy::ZigZag)
            .with_max_items(500)
            .with_dark_mode(true);
        assert_eq!(config.max_items, MAX_ITEMS);
        assert!(config.dark_mode);
        let options = config.session_options();
        assert_eq!(options.seed, 9);
        assert_eq!(options.strategy, LayoutStrategy::ZigZag);
    }
}
