//! Scattered-canvas session: live placements, baseline snapshot, drag.
//!
//! `ScatterSession` is the only mutable layout state. The app owns it and
//! drives it from the UI loop; nothing here is global.
//!
//! - The **baseline** is the last canonical generation (seed fixed) for the
//!   current item list and viewport width. Drag and Shuffle never touch it.
//! - The **live** set is what gets painted. Drag edits it in place, Shuffle
//!   replaces it with a fresh-seed generation, Reset copies the baseline back.
//! - Resize and list changes regenerate both in one step and abandon any drag.

pub mod drag;

use log::{debug, info};

use crate::layout::{
    fallback_placement, fresh_seed, generate_with, ItemId, LayoutStrategy, Placement,
    PlacementMap, ViewportClass, CANONICAL_SEED,
};

pub use drag::{DragRelease, DragSession, Point, Size, DRAG_THRESHOLD_PX};

/// Tunables for a [`ScatterSession`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub strategy: LayoutStrategy,
    /// Seed for baseline generations.
    pub seed: u64,
    pub drag_threshold: f32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            strategy: LayoutStrategy::RowPack,
            seed: CANONICAL_SEED,
            drag_threshold: DRAG_THRESHOLD_PX,
        }
    }
}

pub struct ScatterSession {
    item_ids: Vec<ItemId>,
    viewport_width: f32,
    viewport: ViewportClass,
    options: SessionOptions,
    live: PlacementMap,
    baseline: PlacementMap,
    drag: Option<DragSession>,
}

impl ScatterSession {
    pub fn new(item_ids: &[ItemId], viewport_width: f32, options: SessionOptions) -> Self {
        let viewport = ViewportClass::from_width(viewport_width);
        let baseline = generate_with(item_ids, viewport, options.seed, options.strategy);
        Self {
            item_ids: item_ids.to_vec(),
            viewport_width,
            viewport,
            options,
            live: baseline.clone(),
            baseline,
            drag: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn item_ids(&self) -> &[ItemId] {
        &self.item_ids
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn strategy(&self) -> LayoutStrategy {
        self.options.strategy
    }

    pub fn live(&self) -> &PlacementMap {
        &self.live
    }

    pub fn baseline(&self) -> &PlacementMap {
        &self.baseline
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn dragging_item(&self) -> Option<ItemId> {
        self.drag.map(|d| d.item_id)
    }

    pub fn max_z(&self) -> u32 {
        self.live.max_z()
    }

    /// Live placement for `id`, or a deterministic grid placement when the id
    /// has none (e.g. a stale index while the list is changing).
    pub fn placement_or_fallback(&self, id: ItemId, index: usize) -> Placement {
        self.live
            .get(id)
            .copied()
            .unwrap_or_else(|| fallback_placement(id, index, self.viewport))
    }

    /// Placed ids in paint order: lowest z first, ties broken by id.
    pub fn painter_order(&self) -> Vec<ItemId> {
        let mut order: Vec<(u32, ItemId)> = self.live.iter().map(|p| (p.z_index, p.item_id)).collect();
        order.sort_unstable();
        order.into_iter().map(|(_, id)| id).collect()
    }

    /// Topmost item whose painted, rotated box contains `point`.
    ///
    /// `aspect` gives height/width for an item's image so the box height can
    /// be derived from its width. The point is turned into the item's frame
    /// about the box centre, matching how the canvas paints it.
    pub fn hit_test(
        &self,
        point: Point,
        container: Size,
        aspect: impl Fn(ItemId) -> f32,
    ) -> Option<ItemId> {
        if container.is_empty() {
            return None;
        }
        self.painter_order().into_iter().rev().find(|&id| {
            let Some(p) = self.live.get(id) else {
                return false;
            };
            let x = p.left * 0.01 * container.width;
            let y = p.top * 0.01 * container.height;
            let w = p.width * 0.01 * container.width;
            let h = w * aspect(id);
            let (sin, cos) = p.rotation_radians().sin_cos();
            let dx = point.x - (x + w * 0.5);
            let dy = point.y - (y + h * 0.5);
            let local_x = cos * dx + sin * dy;
            let local_y = cos * dy - sin * dx;
            local_x.abs() <= w * 0.5 && local_y.abs() <= h * 0.5
        })
    }

    // ── Drag ─────────────────────────────────────────────────────────────────

    /// Start dragging `id`. Raises it above every other placement; the raise
    /// persists after the drag ends. Returns `None` for unknown ids.
    pub fn begin_drag(&mut self, id: ItemId, pointer: Point) -> Option<&DragSession> {
        let next_z = self.live.max_z().saturating_add(1);
        let placement = self.live.get_mut(id)?;
        placement.z_index = next_z;
        let session = DragSession::new(id, pointer, placement.left, placement.top);
        debug!("drag start: item {} z={}", id, next_z);
        self.drag = Some(session);
        self.drag.as_ref()
    }

    /// Apply a pointer-move. Returns the updated placement of the dragged item.
    ///
    /// Positions are not clamped; items may be dragged past the container edge.
    pub fn update_drag(&mut self, pointer: Point, container: Size) -> Option<Placement> {
        let drag = self.drag.as_mut()?;
        let (left, top) = drag.track(pointer, container, self.options.drag_threshold);
        let placement = self.live.get_mut(drag.item_id)?;
        placement.left = left;
        placement.top = top;
        Some(*placement)
    }

    /// Pointer-up. Tells the caller whether this was a click or a drag.
    pub fn end_drag(&mut self) -> Option<DragRelease> {
        let release = self.drag.take()?.release();
        debug!("drag end: {:?}", release);
        Some(release)
    }

    /// Pointer left the canvas mid-gesture: stop tracking, select nothing.
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!("drag cancelled: item {}", drag.item_id);
        }
    }

    // ── Regeneration ─────────────────────────────────────────────────────────

    /// Replace the live set with a fresh, non-reproducible arrangement.
    pub fn shuffle(&mut self) {
        self.shuffle_with_seed(fresh_seed());
    }

    /// Replace the live set with the arrangement for `seed`. Baseline stays.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        self.drag = None;
        self.live = generate_with(&self.item_ids, self.viewport, seed, self.options.strategy);
        info!("shuffle: {} items, seed {}", self.live.len(), seed);
    }

    /// Restore the live set to the baseline snapshot.
    pub fn reset(&mut self) {
        self.drag = None;
        self.live = self.baseline.clone();
        info!("reset: {} items", self.live.len());
    }

    /// Viewport resized. Regenerates the baseline with the canonical seed and
    /// overwrites the live set; an in-flight drag is abandoned.
    pub fn resize(&mut self, viewport_width: f32) {
        let viewport = ViewportClass::from_width(viewport_width);
        if viewport != self.viewport {
            info!(
                "viewport class {} -> {} at {:.0}px",
                self.viewport.label(),
                viewport.label(),
                viewport_width
            );
        }
        self.viewport_width = viewport_width;
        self.viewport = viewport;
        self.regenerate();
    }

    /// New displayed list (filter or sort changed).
    pub fn set_items(&mut self, item_ids: &[ItemId]) {
        self.item_ids = item_ids.to_vec();
        self.regenerate();
    }

    /// Switch layout algorithm; regenerates like a resize.
    pub fn set_strategy(&mut self, strategy: LayoutStrategy) {
        if self.options.strategy != strategy {
            self.options.strategy = strategy;
            self.regenerate();
        }
    }

    fn regenerate(&mut self) {
        self.drag = None;
        let baseline = generate_with(
            &self.item_ids,
            self.viewport,
            self.options.seed,
            self.options.strategy,
        );
        self.live = baseline.clone();
        self.baseline = baseline;
    }
}
