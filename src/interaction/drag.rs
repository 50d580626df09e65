//! Drag gesture bookkeeping.
//!
//! A drag starts on pointer-down over an item and records where both the
//! pointer and the item were. Every pointer-move is measured against those
//! origins, so moves are idempotent and the last one wins. A gesture that
//! never leaves the click threshold is still a click: its release selects the
//! item instead of finishing a drag.

use crate::layout::ItemId;

/// Pointer position in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Container size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Default click-versus-drag threshold in pixels, per axis.
pub const DRAG_THRESHOLD_PX: f32 = 5.0;

/// State of one in-flight drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub item_id: ItemId,
    pub pointer_start: Point,
    pub origin_left: f32,
    pub origin_top: f32,
    /// Set once the pointer has travelled past the threshold on either axis.
    /// Sticky: returning to the start point does not turn it back into a click.
    pub moved: bool,
}

impl DragSession {
    pub fn new(item_id: ItemId, pointer_start: Point, origin_left: f32, origin_top: f32) -> Self {
        Self {
            item_id,
            pointer_start,
            origin_left,
            origin_top,
            moved: false,
        }
    }

    /// Record a pointer sample and return the new `(left, top)` in percent.
    pub fn track(&mut self, pointer: Point, container: Size, threshold: f32) -> (f32, f32) {
        let dx = pointer.x - self.pointer_start.x;
        let dy = pointer.y - self.pointer_start.y;
        if dx.abs() > threshold || dy.abs() > threshold {
            self.moved = true;
        }
        if container.is_empty() {
            return (self.origin_left, self.origin_top);
        }
        (
            self.origin_left + dx / container.width * 100.0,
            self.origin_top + dy / container.height * 100.0,
        )
    }

    pub fn release(self) -> DragRelease {
        if self.moved {
            DragRelease::Moved(self.item_id)
        } else {
            DragRelease::Select(self.item_id)
        }
    }
}

/// What a pointer-up means for the item under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    /// Never crossed the threshold: treat as a click and open the detail view.
    Select(ItemId),
    /// A real drag; the item stays where it was dropped.
    Moved(ItemId),
}

impl DragRelease {
    pub fn selected(self) -> Option<ItemId> {
        match self {
            Self::Select(id) => Some(id),
            Self::Moved(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_delta_to_percent() {
        let mut drag = DragSession::new(1, Point::new(100.0, 100.0), 20.0, 30.0);
        let (left, top) = drag.track(Point::new(200.0, 150.0), Size::new(1000.0, 500.0), 5.0);
        assert!((left - 30.0).abs() < 1e-5);
        assert!((top - 40.0).abs() < 1e-5);
    }

    #[test]
    fn test_threshold_is_per_axis_and_strict() {
        let mut drag = DragSession::new(1, Point::new(0.0, 0.0), 0.0, 0.0);
        drag.track(Point::new(5.0, 5.0), Size::new(100.0, 100.0), 5.0);
        assert!(!drag.moved);
        drag.track(Point::new(0.0, 5.5), Size::new(100.0, 100.0), 5.0);
        assert!(drag.moved);
    }

    #[test]
    fn test_moved_is_sticky() {
        let mut drag = DragSession::new(4, Point::new(0.0, 0.0), 0.0, 0.0);
        drag.track(Point::new(20.0, 0.0), Size::new(100.0, 100.0), 5.0);
        drag.track(Point::new(0.0, 0.0), Size::new(100.0, 100.0), 5.0);
        assert_eq!(drag.release(), DragRelease::Moved(4));
    }

    #[test]
    fn test_empty_container_keeps_origin() {
        let mut drag = DragSession::new(1, Point::new(0.0, 0.0), 12.0, 34.0);
        let (left, top) = drag.track(Point::new(50.0, 50.0), Size::default(), 5.0);
        assert_eq!((left, top), (12.0, 34.0));
    }

    #[test]
    fn test_release_without_motion_selects() {
        let drag = DragSession::new(9, Point::new(3.0, 3.0), 0.0, 0.0);
        assert_eq!(drag.release().selected(), Some(9));
    }
}
