//! The item collection.
//!
//! A catalog is an ordered list of [`Item`]s with unique ids. It ships with a
//! built-in collection and can also be read from a JSON array whose objects
//! use the same field names as the web gallery's data file (`src`, `from`,
//! `howAcquired`, `usedFor`, ...).

mod builtin;
pub mod filter;

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

pub use crate::layout::ItemId;
pub use filter::{ItemFilter, SortOrder};

// ─── Item ────────────────────────────────────────────────────────────────────

/// How an item came into the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Acquisition {
    Bought,
    Gifted,
    #[default]
    Unknown,
}

impl Acquisition {
    pub const FILTERABLE: [Acquisition; 2] = [Acquisition::Bought, Acquisition::Gifted];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bought => "Bought",
            Self::Gifted => "Gifted",
            Self::Unknown => "",
        }
    }
}

impl From<String> for Acquisition {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "bought" => Self::Bought,
            "gifted" | "gift" => Self::Gifted,
            _ => Self::Unknown,
        }
    }
}

impl From<Acquisition> for String {
    fn from(a: Acquisition) -> Self {
        a.label().to_string()
    }
}

/// One object in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    /// Image file name relative to the images directory.
    #[serde(rename = "src")]
    pub image: String,
    #[serde(default)]
    pub name: String,
    /// Comma-separated colour names.
    #[serde(default)]
    pub color: String,
    #[serde(default, rename = "from")]
    pub country: String,
    #[serde(default, rename = "howAcquired")]
    pub acquired: Acquisition,
    #[serde(default)]
    pub used_for: String,
    #[serde(default)]
    pub story: String,
    /// Raw price text as written, e.g. `Rs.3699` or `2000 yen`.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub link: String,
}

impl Item {
    /// Name, or a numbered placeholder for undescribed items.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Item {:03}", self.id)
        } else {
            self.name.clone()
        }
    }

    /// Individual colour names, trimmed, empty entries skipped.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.color.split(',').map(str::trim).filter(|c| !c.is_empty())
    }

    pub fn has_details(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Image location under `images_dir`. Web-style sources such as
    /// `/images/001.png` resolve by file name.
    pub fn image_path(&self, images_dir: &Path) -> PathBuf {
        match Path::new(&self.image).file_name() {
            Some(name) => images_dir.join(name),
            None => images_dir.join(&self.image),
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Error while loading a catalog file.
#[derive(Debug)]
pub struct CatalogError {
    pub message: String,
    pub phase: &'static str,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

impl std::error::Error for CatalogError {}

// ─── Catalog ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build from items, rejecting repeated ids.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError {
                    message: format!("duplicate item id {}", item.id),
                    phase: "validate",
                });
            }
        }
        Ok(Self { items })
    }

    /// The collection shipped with the app.
    pub fn builtin() -> Self {
        Self {
            items: builtin::items(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json).map_err(|e| CatalogError {
            message: e.to_string(),
            phase: "parse",
        })?;
        Self::new(items)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError {
            message: format!("{}: {}", path.display(), e),
            phase: "read",
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!("catalog: {} items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items passing `filter`, in `sort` order.
    pub fn select(&self, filter: &ItemFilter, sort: SortOrder) -> Vec<&Item> {
        let mut selected: Vec<&Item> = self.items.iter().filter(|i| filter.matches(i)).collect();
        sort.apply(&mut selected);
        selected
    }

    /// Distinct non-empty countries, alphabetical.
    pub fn countries(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|i| i.country.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct colour names across all items, alphabetical.
    pub fn colors(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|i| i.colors())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_unique_and_ordered() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 50);
        let ids: Vec<ItemId> = catalog.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
    }

    #[test]
    fn test_display_name_placeholder() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(1).unwrap().display_name(), "Cotton Knitted Throw Blanket");
        assert_eq!(catalog.get(16).unwrap().display_name(), "Item 016");
        assert!(!catalog.get(16).unwrap().has_details());
    }

    #[test]
    fn test_from_json_uses_web_field_names() {
        let json = r#"[
            {"id": 3, "src": "003.png", "name": "Mug", "color": "Multicolor",
             "howAcquired": "Bought", "from": "USA", "usedFor": "", "story": "",
             "price": "$42", "link": ""},
            {"id": 7, "src": "007.png", "howAcquired": "Gifted"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let mug = catalog.get(3).unwrap();
        assert_eq!(mug.country, "USA");
        assert_eq!(mug.acquired, Acquisition::Bought);
        assert_eq!(mug.image, "003.png");
        let bare = catalog.get(7).unwrap();
        assert_eq!(bare.acquired, Acquisition::Gifted);
        assert!(bare.name.is_empty());
    }

    #[test]
    fn test_json_round_trips_acquisition_labels() {
        let item = Catalog::builtin().get(6).unwrap().clone();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""howAcquired":"Gifted""#));
        assert!(json.contains(r#""from":"USA""#));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[{"id": 1, "src": "a.png"}, {"id": 1, "src": "b.png"}]"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert_eq!(err.phase, "validate");
        assert!(err.to_string().contains("duplicate item id 1"));
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert_eq!(err.phase, "parse");
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.phase, "read");
    }

    #[test]
    fn test_countries_and_colors() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.countries(), vec!["France", "India", "Japan", "USA"]);
        let colors = catalog.colors();
        assert!(colors.contains(&"Mustard".to_string()));
        assert!(colors.contains(&"Green".to_string()));
        assert_eq!(colors.iter().filter(|c| *c == "Green").count(), 1);
    }

    #[test]
    fn test_image_path_uses_file_name() {
        let mut item = Catalog::builtin().get(1).unwrap().clone();
        let dir = Path::new("assets/images");
        assert_eq!(item.image_path(dir), dir.join("001.png"));
        item.image = "/images/001.png".to_string();
        assert_eq!(item.image_path(dir), dir.join("001.png"));
    }

    #[test]
    fn test_unknown_acquisition_strings() {
        assert_eq!(Acquisition::from(String::new()), Acquisition::Unknown);
        assert_eq!(Acquisition::from("  BOUGHT ".to_string()), Acquisition::Bought);
    }
}
