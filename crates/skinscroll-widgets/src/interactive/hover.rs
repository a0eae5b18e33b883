//! Pointer-over tracking.

use skinscroll_core::{Event, Point, Rect};

/// Tracks whether the pointer is over an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverReactive {
    over: bool,
}

impl HoverReactive {
    /// Create with the pointer outside.
    #[must_use]
    pub const fn new() -> Self {
        Self { over: false }
    }

    /// Whether the pointer is currently over the element.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Force the hover flag. Returns true if it changed.
    pub fn set(&mut self, over: bool) -> bool {
        let changed = self.over != over;
        self.over = over;
        changed
    }

    /// Recompute from a pointer position in the element's parent space.
    pub fn reevaluate(&mut self, pointer: Point, bounds: Rect) -> bool {
        self.set(bounds.contains_point(&pointer))
    }

    /// Update from an event. Returns true if the hover flag changed.
    ///
    /// Enter and leave notifications are taken at face value; positional
    /// events are hit-tested against `bounds`.
    pub fn track(&mut self, event: &Event, bounds: Rect) -> bool {
        match event {
            Event::MouseEnter => self.set(true),
            Event::MouseLeave => self.set(false),
            Event::MouseMove { position }
            | Event::MouseDown { position, .. }
            | Event::MouseUp { position, .. } => self.reevaluate(*position, bounds),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(10.0, 10.0, 20.0, 20.0);

    #[test]
    fn test_track_move_in_and_out() {
        let mut hover = HoverReactive::new();
        assert!(hover.track(&Event::MouseMove { position: Point::new(15.0, 15.0) }, BOUNDS));
        assert!(hover.is_over());
        assert!(!hover.track(&Event::MouseMove { position: Point::new(16.0, 15.0) }, BOUNDS));
        assert!(hover.track(&Event::MouseMove { position: Point::new(0.0, 0.0) }, BOUNDS));
        assert!(!hover.is_over());
    }

    #[test]
    fn test_track_enter_leave() {
        let mut hover = HoverReactive::new();
        hover.track(&Event::MouseEnter, BOUNDS);
        assert!(hover.is_over());
        hover.track(&Event::MouseLeave, BOUNDS);
        assert!(!hover.is_over());
    }

    #[test]
    fn test_reevaluate_after_geometry_change() {
        let mut hover = HoverReactive::new();
        hover.set(true);
        let moved = BOUNDS.with_origin(Point::new(100.0, 100.0));
        assert!(hover.reevaluate(Point::new(15.0, 15.0), moved));
        assert!(!hover.is_over());
    }
}
