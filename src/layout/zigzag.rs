//! Zig-zag walk with pairwise collision rejection.
//!
//! The cursor sweeps right, bounces off the edge, drops a row, and sweeps
//! back. Each item tries up to `MAX_ATTEMPTS` jittered spots around the cursor
//! and keeps the first one that clears every earlier placement; when all
//! attempts collide it settles on the cursor itself.

use super::{clamp_top, ItemId, Placement, SeededRng, ViewportClass, ROTATIONS, SAFE_MAX, SAFE_MIN};

const MAX_ATTEMPTS: usize = 50;
/// Gap required between neighbours, in percent.
const PADDING: f32 = 2.0;
/// Nominal item height used for the vertical overlap test, in percent.
const ASSUMED_HEIGHT: f32 = 5.0;

fn collides(left: f32, top: f32, width: f32, placed: &[Placement]) -> bool {
    placed.iter().any(|p| {
        let overlap_x = (left - p.left).abs() < (width + p.width) * 0.5 + PADDING;
        let overlap_y = (top - p.top).abs() < ASSUMED_HEIGHT + PADDING;
        overlap_x && overlap_y
    })
}

pub(super) fn place(ids: &[ItemId], viewport: ViewportClass, rng: &mut SeededRng) -> Vec<Placement> {
    let width = viewport.item_width();
    let max_left = (SAFE_MAX - width).max(SAFE_MIN);
    let mut placed: Vec<Placement> = Vec::with_capacity(ids.len());

    let mut cursor_top = SAFE_MIN;
    let mut cursor_left = 5.0_f32;
    let mut direction = 1.0_f32;

    for &item_id in ids {
        let rotation = rng.pick(&ROTATIONS);

        let mut found = None;
        for _ in 0..MAX_ATTEMPTS {
            let offset_x = (rng.next_f32() - 0.5) * 15.0;
            let offset_y = (rng.next_f32() - 0.5) * 2.0;
            let left = (cursor_left + offset_x).clamp(SAFE_MIN, max_left);
            let top = cursor_top + offset_y;
            if !collides(left, top, width, &placed) {
                found = Some((left, top));
                break;
            }

            cursor_left += (rng.next_f32() - 0.3) * 20.0 * direction;
            if !(5.0..=80.0).contains(&cursor_left) {
                direction = -direction;
                cursor_top += 4.0 + rng.next_f32() * 2.0;
                cursor_left = if direction > 0.0 {
                    5.0 + rng.next_f32() * 10.0
                } else {
                    75.0 - rng.next_f32() * 10.0
                };
            }
        }
        let (left, top) =
            found.unwrap_or((cursor_left.clamp(SAFE_MIN, max_left), cursor_top));

        placed.push(Placement {
            item_id,
            top,
            left,
            width,
            rotation,
            z_index: 1 + rng.next_index(3) as u32,
        });

        cursor_left += (15.0 + rng.next_f32() * 12.0) * direction;
        if !(8.0..=78.0).contains(&cursor_left) {
            direction = -direction;
            cursor_top += 5.0 + rng.next_f32() * 3.0;
            cursor_left = if direction > 0.0 {
                5.0 + rng.next_f32() * 8.0
            } else {
                78.0 - rng.next_f32() * 8.0
            };
        }
    }

    fit_vertically(&mut placed);
    placed
}

/// Bring every top edge into the safe range. A walk taller than the range is
/// compressed proportionally; a shorter one is only shifted.
fn fit_vertically(placed: &mut [Placement]) {
    let Some(min) = placed.iter().map(|p| p.top).reduce(f32::min) else {
        return;
    };
    let max = placed.iter().map(|p| p.top).fold(min, f32::max);
    let span = max - min;
    let range = SAFE_MAX - SAFE_MIN;

    for p in placed.iter_mut() {
        let top = if span > range {
            SAFE_MIN + (p.top - min) * (range / span)
        } else if min < SAFE_MIN {
            p.top + (SAFE_MIN - min)
        } else if max > SAFE_MAX {
            p.top - (max - SAFE_MAX)
        } else {
            p.top
        };
        p.top = clamp_top(top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(left: f32, top: f32, width: f32) -> Placement {
        Placement {
            item_id: 0,
            top,
            left,
            width,
            rotation: 0,
            z_index: 1,
        }
    }

    #[test]
    fn test_collision_needs_both_axes() {
        let placed = [at(10.0, 10.0, 18.0)];
        assert!(collides(15.0, 12.0, 18.0, &placed));
        // far enough horizontally
        assert!(!collides(40.0, 10.0, 18.0, &placed));
        // far enough vertically
        assert!(!collides(10.0, 20.0, 18.0, &placed));
    }

    #[test]
    fn test_fit_shifts_short_walk() {
        let mut placed = vec![at(5.0, 1.0, 18.0), at(30.0, 20.0, 18.0)];
        fit_vertically(&mut placed);
        assert!((placed[0].top - SAFE_MIN).abs() < 1e-5);
        assert!((placed[1].top - 21.0).abs() < 1e-5);
    }

    #[test]
    fn test_fit_compresses_tall_walk() {
        let mut placed = vec![at(5.0, 2.0, 18.0), at(30.0, 100.0, 18.0), at(50.0, 194.0, 18.0)];
        fit_vertically(&mut placed);
        assert!((placed[0].top - SAFE_MIN).abs() < 1e-4);
        assert!((placed[1].top - 51.0).abs() < 1e-3);
        assert!((placed[2].top - SAFE_MAX).abs() < 1e-4);
    }

    #[test]
    fn test_first_item_near_top_left() {
        let mut rng = SeededRng::new(42);
        let placed = place(&[1, 2, 3], ViewportClass::Desktop, &mut rng);
        let first = placed[0];
        assert!(first.left < 20.0);
        assert!(first.top < 10.0);
    }

    #[test]
    fn test_walk_descends_on_many_items() {
        let mut rng = SeededRng::new(42);
        let ids: Vec<ItemId> = (1..=20).collect();
        let placed = place(&ids, ViewportClass::Desktop, &mut rng);
        let last_top = placed.last().unwrap().top;
        assert!(last_top > placed[0].top);
    }
}
