use crate::layout::{row_count, ViewportClass};

/// Presentation mode for the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    Grid,
    /// Free-form canvas driven by the layout engine.
    #[default]
    Scattered,
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::Scattered, ViewMode::List];

    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::Scattered => "Canvas",
            Self::List => "List",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Some(Self::Grid),
            "scattered" | "canvas" => Some(Self::Scattered),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

/// Columns of the plain grid view.
pub fn grid_columns(viewport: ViewportClass) -> usize {
    match viewport {
        ViewportClass::Mobile => 1,
        ViewportClass::Tablet => 2,
        ViewportClass::Desktop => 4,
    }
}

/// Canvas height for the scattered view, in pixels.
///
/// Each row of the layout gets a band a little taller than a square tile at
/// the viewport's item width; never shorter than `min_height`.
pub fn scatter_canvas_height(
    container_width: f32,
    viewport: ViewportClass,
    item_count: usize,
    min_height: f32,
) -> f32 {
    let rows = row_count(item_count, viewport).max(1) as f32;
    let tile = container_width * viewport.item_width() * 0.01;
    (rows * tile * 1.15).max(min_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_scattered() {
        assert_eq!(ViewMode::default(), ViewMode::Scattered);
    }

    #[test]
    fn test_parse_labels() {
        for mode in ViewMode::ALL {
            assert_eq!(ViewMode::parse(mode.label()), Some(mode));
        }
        assert_eq!(ViewMode::parse("masonry"), None);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(ViewportClass::Mobile), 1);
        assert_eq!(grid_columns(ViewportClass::Desktop), 4);
    }

    #[test]
    fn test_canvas_height_grows_with_rows() {
        let few = scatter_canvas_height(1200.0, ViewportClass::Desktop, 9, 0.0);
        let many = scatter_canvas_height(1200.0, ViewportClass::Desktop, 45, 0.0);
        assert!(many > few);
        // 9 items = 2 rows of 216px tiles
        assert!((few - 2.0 * 216.0 * 1.15).abs() < 1e-3);
        assert!((scatter_canvas_height(1200.0, ViewportClass::Desktop, 0, 600.0) - 600.0).abs() < 1e-6);
    }
}
