//! `GalleryApp`: the top-level egui application state.
//!
//! This module declares the `GalleryApp` struct and its constructor.
//! Drawing is split across the sibling sub-modules:
//!
//! - `toolbar`: view switch, filters, sort, canvas controls
//! - `content`: grid, list, and scattered canvas
//! - `detail`:  the item modal

pub mod content;
pub mod detail;
pub mod toolbar;

use std::collections::HashMap;
use std::path::PathBuf;

use eframe::egui;
use log::{error, info};

use curio_gallery::assets::ImageLoader;
use curio_gallery::catalog::{Catalog, Item, ItemFilter, ItemId, SortOrder};
use curio_gallery::config::GalleryConfig;
use curio_gallery::detail::DetailView;
use curio_gallery::interaction::ScatterSession;
use curio_gallery::motion::{CanvasMotion, LoaderAnimation, ScrollVelocity};
use curio_gallery::view::ViewMode;

/// Shortest time the start-up counter stays on screen.
const LOADER_MIN_SECS: f32 = 1.6;
/// Canvas width assumed before the first frame is laid out.
const INITIAL_CANVAS_WIDTH: f32 = 1280.0;

// ─── Application state ───────────────────────────────────────────────────────

pub struct GalleryApp {
    pub config: GalleryConfig,
    pub catalog: Catalog,
    pub filter: ItemFilter,
    pub sort: SortOrder,
    pub view_mode: ViewMode,
    pub dark_mode: bool,
    // Scattered canvas
    pub session: ScatterSession,
    pub motion: CanvasMotion,
    pub scroll_velocity: ScrollVelocity,
    // Detail modal
    pub detail: Option<DetailView>,
    // Image loading
    pub image_loader: ImageLoader,
    pub image_textures: HashMap<PathBuf, egui::TextureHandle>,
    pub loader: LoaderAnimation,
    pub app_start: std::time::Instant,
}

impl GalleryApp {
    pub fn new(config: GalleryConfig) -> Self {
        let catalog = match config.catalog_path {
            Some(ref path) => Catalog::load(path).unwrap_or_else(|e| {
                error!("catalog: {}; using the built-in collection", e);
                Catalog::builtin()
            }),
            None => Catalog::builtin(),
        };
        info!("catalog: {} items", catalog.len());

        let mut image_loader = ImageLoader::new(config.image_max_width);
        image_loader.request_batch(
            catalog
                .items()
                .iter()
                .map(|item| item.image_path(&config.images_dir)),
        );

        let filter = ItemFilter::default();
        let sort = SortOrder::default();
        let ids = canvas_ids(&catalog, &filter, sort, config.max_items);
        let session = ScatterSession::new(&ids, INITIAL_CANVAS_WIDTH, config.session_options());

        Self {
            catalog,
            filter,
            sort,
            view_mode: config.start_mode,
            dark_mode: config.dark_mode,
            session,
            motion: CanvasMotion::new(config.parallax_strength),
            scroll_velocity: ScrollVelocity::new(),
            detail: None,
            image_loader,
            image_textures: HashMap::new(),
            loader: LoaderAnimation::new(LOADER_MIN_SECS),
            app_start: std::time::Instant::now(),
            config,
        }
    }

    // ── Selection ────────────────────────────────────────────────────────────

    /// Ids passing the current filter, in the current sort order.
    pub fn visible_ids(&self) -> Vec<ItemId> {
        self.catalog
            .select(&self.filter, self.sort)
            .iter()
            .map(|item| item.id)
            .collect()
    }

    /// Keep the canvas in step with the filter and sort. Regenerates the
    /// layout only when the id list actually changed.
    pub fn sync_canvas_items(&mut self) {
        let ids = canvas_ids(&self.catalog, &self.filter, self.sort, self.config.max_items);
        if ids != self.session.item_ids() {
            self.session.set_items(&ids);
        }
    }

    pub fn open_detail(&mut self, id: ItemId) {
        self.detail = DetailView::open(id, self.visible_ids());
    }

    // ── Images ───────────────────────────────────────────────────────────────

    pub fn texture_for(&self, item: &Item) -> Option<&egui::TextureHandle> {
        self.image_textures
            .get(&item.image_path(&self.config.images_dir))
    }

    pub fn image_failed(&self, item: &Item) -> bool {
        self.image_loader
            .is_failed(&item.image_path(&self.config.images_dir))
    }

    /// Height over width of an item's image; square until it has loaded.
    pub fn height_ratio(&self, id: ItemId) -> f32 {
        self.catalog
            .get(id)
            .and_then(|item| self.texture_for(item))
            .map(|tex| {
                let [w, h] = tex.size();
                if w == 0 { 1.0 } else { h as f32 / w as f32 }
            })
            .unwrap_or(1.0)
    }

    /// Poll the decoder and upload finished images as textures.
    pub fn upload_textures(&mut self, ctx: &egui::Context) {
        if self.image_loader.poll() == 0 {
            return;
        }
        for item in self.catalog.items() {
            let path = item.image_path(&self.config.images_dir);
            if self.image_textures.contains_key(&path) {
                continue;
            }
            if let Some(data) = self.image_loader.get(&path) {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [data.width as usize, data.height as usize],
                    &data.rgba,
                );
                let tex = ctx.load_texture(
                    format!("img_{}", item.id),
                    image,
                    egui::TextureOptions::LINEAR,
                );
                self.image_textures.insert(path, tex);
            }
        }
    }
}

fn canvas_ids(catalog: &Catalog, filter: &ItemFilter, sort: SortOrder, max: usize) -> Vec<ItemId> {
    catalog
        .select(filter, sort)
        .iter()
        .take(max)
        .map(|item| item.id)
        .collect()
}
