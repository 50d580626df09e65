//! Scattered-layout engine.
//!
//! Turns an ordered list of item ids plus a viewport class into one
//! [`Placement`] per item: top-left position and width as percentages of the
//! container, a small rotation, and a shallow z-index. Output is a pure
//! function of `(ids, viewport, seed, strategy)`.
//!
//! Two strategies share the same contract:
//! - [`LayoutStrategy::RowPack`] (default): cells from a per-viewport row
//!   pattern, shuffled with the seeded generator, then jittered inside their
//!   cell and clamped to the safe margin.
//! - [`LayoutStrategy::ZigZag`]: a zig-zag walk across the canvas with
//!   pairwise collision rejection and a bounded retry loop.

pub mod rng;
mod row_pack;
mod zigzag;

use std::collections::{BTreeMap, HashSet};

use log::{debug, warn};

pub use rng::{fresh_seed, SeededRng};
pub use row_pack::row_count;

/// Stable catalog identifier of a displayed item.
pub type ItemId = u32;

/// Hard cap on the number of items the engine lays out.
pub const MAX_ITEMS: usize = 64;

/// Lower bound for `left`/`top`, in percent.
pub const SAFE_MIN: f32 = 2.0;
/// Upper bound for `left`/`top`, in percent.
pub const SAFE_MAX: f32 = 98.0;

/// Rotation palette in degrees.
pub const ROTATIONS: [i32; 11] = [-5, -4, -3, -2, -1, 0, 1, 2, 3, 4, 5];

/// Seed used for baseline generations (initial load, resize, list change).
pub const CANONICAL_SEED: u64 = 42;

// ─── Viewport class ──────────────────────────────────────────────────────────

/// Discrete device-width bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl ViewportClass {
    pub const MOBILE_MAX_WIDTH: f32 = 480.0;
    pub const TABLET_MAX_WIDTH: f32 = 768.0;

    pub fn from_width(width: f32) -> Self {
        if width <= Self::MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width <= Self::TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Item width in percent of the container width.
    pub fn item_width(self) -> f32 {
        match self {
            Self::Mobile => 80.0,
            Self::Tablet => 40.0,
            Self::Desktop => 18.0,
        }
    }

    /// Columns per row, cycled row after row.
    pub fn row_pattern(self) -> &'static [usize] {
        match self {
            Self::Mobile => &[1],
            Self::Tablet => &[2, 3, 2],
            Self::Desktop => &[4, 5],
        }
    }

    /// Horizontal jitter as a fraction of the column spacing.
    pub fn jitter_x(self) -> f32 {
        match self {
            Self::Mobile => 0.1,
            Self::Tablet => 0.3,
            Self::Desktop => 0.4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

// ─── Placement ───────────────────────────────────────────────────────────────

/// Computed position, size, rotation, and stacking for one displayed item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub item_id: ItemId,
    /// Top edge, percent of container height.
    pub top: f32,
    /// Left edge, percent of container width.
    pub left: f32,
    /// Percent of container width.
    pub width: f32,
    /// Degrees, from [`ROTATIONS`].
    pub rotation: i32,
    pub z_index: u32,
}

impl Placement {
    pub fn rotation_radians(&self) -> f32 {
        (self.rotation as f32).to_radians()
    }
}

/// Layout algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutStrategy {
    #[default]
    RowPack,
    ZigZag,
}

impl LayoutStrategy {
    pub const ALL: [LayoutStrategy; 2] = [LayoutStrategy::RowPack, LayoutStrategy::ZigZag];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rowpack" | "row-pack" | "rows" => Some(Self::RowPack),
            "zigzag" | "zig-zag" => Some(Self::ZigZag),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RowPack => "Rows",
            Self::ZigZag => "Zig-zag",
        }
    }
}

// ─── Placement map ───────────────────────────────────────────────────────────

/// Identifier-keyed set of placements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlacementMap {
    placements: BTreeMap<ItemId, Placement>,
}

impl PlacementMap {
    pub fn get(&self, id: ItemId) -> Option<&Placement> {
        self.placements.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut Placement> {
        self.placements.get_mut(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.placements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.values()
    }

    /// Highest z-index in the set, 0 when empty.
    pub fn max_z(&self) -> u32 {
        self.placements.values().map(|p| p.z_index).max().unwrap_or(0)
    }
}

// ─── Generation ──────────────────────────────────────────────────────────────

/// Generate placements with the canonical row-packing strategy.
pub fn generate(item_ids: &[ItemId], viewport: ViewportClass, seed: u64) -> PlacementMap {
    generate_with(item_ids, viewport, seed, LayoutStrategy::RowPack)
}

/// Generate placements with an explicit strategy.
///
/// Inputs longer than [`MAX_ITEMS`] are truncated; repeated ids keep their
/// first occurrence. An empty input yields an empty map.
pub fn generate_with(
    item_ids: &[ItemId],
    viewport: ViewportClass,
    seed: u64,
    strategy: LayoutStrategy,
) -> PlacementMap {
    let ids = prepare_ids(item_ids);
    let mut map = PlacementMap::default();
    if ids.is_empty() {
        return map;
    }

    let mut rng = SeededRng::new(seed);
    let placements = match strategy {
        LayoutStrategy::RowPack => row_pack::place(&ids, viewport, &mut rng),
        LayoutStrategy::ZigZag => zigzag::place(&ids, viewport, &mut rng),
    };
    debug_assert_eq!(placements.len(), ids.len());

    map.placements = placements.into_iter().map(|p| (p.item_id, p)).collect();
    debug!(
        "layout: {} items, {} viewport, {:?}, seed {}",
        map.len(),
        viewport.label(),
        strategy,
        seed
    );
    map
}

fn prepare_ids(item_ids: &[ItemId]) -> Vec<ItemId> {
    let mut seen = HashSet::with_capacity(item_ids.len().min(MAX_ITEMS));
    let mut ids = Vec::with_capacity(item_ids.len().min(MAX_ITEMS));
    let mut dropped_duplicates = 0usize;
    for &id in item_ids {
        if !seen.insert(id) {
            dropped_duplicates += 1;
            continue;
        }
        ids.push(id);
    }
    if dropped_duplicates > 0 {
        debug!("layout: ignored {} repeated item ids", dropped_duplicates);
    }
    if ids.len() > MAX_ITEMS {
        warn!(
            "layout: {} items exceed the cap of {}, truncating",
            ids.len(),
            MAX_ITEMS
        );
        ids.truncate(MAX_ITEMS);
    }
    ids
}

/// Deterministic placement for an item that has no entry in the live map
/// (for example a stale index during a list change). Lays items out on a
/// plain grid by display index.
pub fn fallback_placement(item_id: ItemId, index: usize, viewport: ViewportClass) -> Placement {
    let cols = viewport.row_pattern()[0].max(1);
    let width = viewport.item_width();
    let spacing = 100.0 / cols as f32;
    let row = index / cols;
    let col = index % cols;
    Placement {
        item_id,
        top: clamp_top(SAFE_MIN + row as f32 * spacing * 0.5),
        left: clamp_left(col as f32 * spacing + (spacing - width) * 0.5, width),
        width,
        rotation: 0,
        z_index: 1,
    }
}

/// Clamp a left edge so the item starts inside the safe range and, when it
/// fits, also ends inside it.
pub(crate) fn clamp_left(left: f32, width: f32) -> f32 {
    let hi = (SAFE_MAX - width).max(SAFE_MIN);
    left.clamp(SAFE_MIN, hi)
}

pub(crate) fn clamp_top(top: f32) -> f32 {
    top.clamp(SAFE_MIN, SAFE_MAX)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn viewport() -> impl Strategy<Value = ViewportClass> {
        prop_oneof![
            Just(ViewportClass::Mobile),
            Just(ViewportClass::Tablet),
            Just(ViewportClass::Desktop),
        ]
    }

    fn strategy() -> impl Strategy<Value = LayoutStrategy> {
        prop_oneof![Just(LayoutStrategy::RowPack), Just(LayoutStrategy::ZigZag)]
    }

    proptest! {
        #[test]
        fn placements_stay_in_safe_margin(
            n in 0u32..=80,
            seed in any::<u64>(),
            vp in viewport(),
            st in strategy(),
        ) {
            let ids: Vec<ItemId> = (1..=n).collect();
            let map = generate_with(&ids, vp, seed, st);
            prop_assert_eq!(map.len(), (n as usize).min(MAX_ITEMS));
            for p in map.iter() {
                prop_assert!(p.left >= SAFE_MIN && p.left <= SAFE_MAX, "left {}", p.left);
                prop_assert!(p.top >= SAFE_MIN && p.top <= SAFE_MAX, "top {}", p.top);
                prop_assert!((p.width - vp.item_width()).abs() < 1e-6);
            }
        }

        #[test]
        fn generation_is_reproducible(
            ids in proptest::collection::vec(0u32..500, 0..70),
            seed in any::<u64>(),
            vp in viewport(),
            st in strategy(),
        ) {
            let a = generate_with(&ids, vp, seed, st);
            let b = generate_with(&ids, vp, seed, st);
            prop_assert_eq!(a, b);
        }
    }
}
