//! Row/column packing with seeded jitter.

use super::{clamp_left, clamp_top, ItemId, Placement, SeededRng, ViewportClass, ROTATIONS};

/// Fraction of the container height used by the row bands; the rest is split
/// evenly above and below.
const PACKING_DENSITY: f32 = 0.92;
/// Vertical jitter as a fraction of the row spacing.
const VERTICAL_JITTER: f32 = 0.5;
/// Where inside its row band an item's top edge sits.
const ROW_ANCHOR: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Cell {
    row: usize,
    col: usize,
    cols_in_row: usize,
}

/// Walk the row pattern until `count` cells exist. A final row that would be
/// short takes only the remaining count as its column count, so its items
/// spread across the full width instead of huddling on the left.
fn build_cells(count: usize, pattern: &[usize]) -> Vec<Cell> {
    debug_assert!(!pattern.is_empty());
    let mut cells = Vec::with_capacity(count);
    let mut row = 0;
    while cells.len() < count {
        let remaining = count - cells.len();
        let cols = pattern[row % pattern.len()].max(1).min(remaining);
        cells.extend((0..cols).map(|col| Cell {
            row,
            col,
            cols_in_row: cols,
        }));
        row += 1;
    }
    cells
}

/// Number of rows the row-packing strategy uses for `item_count` items.
pub fn row_count(item_count: usize, viewport: ViewportClass) -> usize {
    let pattern = viewport.row_pattern();
    let mut placed = 0;
    let mut rows = 0;
    while placed < item_count {
        placed += pattern[rows % pattern.len()].max(1);
        rows += 1;
    }
    rows
}

pub(super) fn place(ids: &[ItemId], viewport: ViewportClass, rng: &mut SeededRng) -> Vec<Placement> {
    let mut cells = build_cells(ids.len(), viewport.row_pattern());
    let total_rows = cells.last().map_or(1, |c| c.row + 1);
    rng.shuffle(&mut cells);

    let width = viewport.item_width();
    let row_spacing = 100.0 * PACKING_DENSITY / total_rows as f32;
    let inset = 100.0 * (1.0 - PACKING_DENSITY) * 0.5;

    ids.iter()
        .zip(cells)
        .map(|(&item_id, cell)| {
            let col_spacing = 100.0 / cell.cols_in_row as f32;
            let center_x = (cell.col as f32 + 0.5) * col_spacing;
            let band_top = inset + cell.row as f32 * row_spacing;

            let jitter_x = (rng.next_f32() - 0.5) * col_spacing * viewport.jitter_x();
            let jitter_y = (rng.next_f32() - 0.5) * row_spacing * VERTICAL_JITTER;
            let rotation = rng.pick(&ROTATIONS);
            let z_index = 1 + rng.next_index(3) as u32;

            Placement {
                item_id,
                top: clamp_top(band_top + row_spacing * ROW_ANCHOR + jitter_y),
                left: clamp_left(center_x - width * 0.5 + jitter_x, width),
                width,
                rotation,
                z_index,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn row_sizes(cells: &[Cell]) -> Vec<usize> {
        let rows = cells.last().map_or(0, |c| c.row + 1);
        (0..rows)
            .map(|r| cells.iter().filter(|c| c.row == r).count())
            .collect()
    }

    #[test]
    fn test_desktop_alternates_four_and_five() {
        let cells = build_cells(18, ViewportClass::Desktop.row_pattern());
        assert_eq!(row_sizes(&cells), vec![4, 5, 4, 5]);
    }

    #[test]
    fn test_tablet_pattern() {
        let cells = build_cells(7, ViewportClass::Tablet.row_pattern());
        assert_eq!(row_sizes(&cells), vec![2, 3, 2]);
    }

    #[test]
    fn test_mobile_single_column() {
        let cells = build_cells(5, ViewportClass::Mobile.row_pattern());
        assert_eq!(row_sizes(&cells), vec![1, 1, 1, 1, 1]);
        assert!(cells.iter().all(|c| c.col == 0 && c.cols_in_row == 1));
    }

    #[test]
    fn test_short_last_row_spreads() {
        let cells = build_cells(10, ViewportClass::Desktop.row_pattern());
        assert_eq!(row_sizes(&cells), vec![4, 5, 1]);
        let last = cells.last().unwrap();
        assert_eq!(last.cols_in_row, 1);
        assert_eq!(last.col, 0);
    }

    #[test]
    fn test_cells_unique() {
        let cells = build_cells(64, ViewportClass::Desktop.row_pattern());
        let set: HashSet<_> = cells.iter().map(|c| (c.row, c.col)).collect();
        assert_eq!(set.len(), 64);
    }

    #[test]
    fn test_row_count_matches_cells() {
        for viewport in [ViewportClass::Mobile, ViewportClass::Tablet, ViewportClass::Desktop] {
            for n in 0..70 {
                let cells = build_cells(n, viewport.row_pattern());
                let rows = cells.last().map_or(0, |c| c.row + 1);
                assert_eq!(row_count(n, viewport), rows, "{viewport:?} n={n}");
            }
        }
    }

    #[test]
    fn test_single_item_is_centred_horizontally() {
        let mut rng = SeededRng::new(42);
        let placements = place(&[1], ViewportClass::Desktop, &mut rng);
        let p = placements[0];
        let center = p.left + p.width * 0.5;
        // jitter is at most 20% of the 100% column spacing either way
        assert!((center - 50.0).abs() <= 20.0 + 1e-3);
    }

    #[test]
    fn test_rows_descend() {
        let mut rng = SeededRng::new(3);
        let ids: Vec<ItemId> = (1..=5).collect();
        let placements = place(&ids, ViewportClass::Mobile, &mut rng);
        let mut tops: Vec<f32> = placements.iter().map(|p| p.top).collect();
        tops.sort_by(|a, b| a.partial_cmp(b).unwrap());
        // five rows of ~18.4% each, jitter bounded by a quarter row
        for pair in tops.windows(2) {
            assert!(pair[1] - pair[0] > 5.0);
        }
    }
}
