//! Drag-to-move within a parent's extent.

use skinscroll_core::{limit_move, Axes, Axis, Point, Rect, Size};

/// Moves an element with the pointer while the button is held.
///
/// Positions are in the parent's space. The element is kept inside
/// `[0, limits]` on every draggable axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draggable {
    axes: Axes,
    limits: Size,
    grab: Option<Point>,
}

impl Draggable {
    /// Create for the given axes inside a parent of size `limits`.
    #[must_use]
    pub const fn new(axes: Axes, limits: Size) -> Self {
        Self {
            axes,
            limits,
            grab: None,
        }
    }

    /// Axes the element can move along.
    #[must_use]
    pub const fn axes(&self) -> Axes {
        self.axes
    }

    /// Change the draggable axes.
    pub fn set_axes(&mut self, axes: Axes) {
        self.axes = axes;
    }

    /// Parent extent the element is kept inside.
    #[must_use]
    pub const fn limits(&self) -> Size {
        self.limits
    }

    /// Change the parent extent.
    pub fn set_limits(&mut self, limits: Size) {
        self.limits = limits;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Record where inside the element the pointer went down.
    pub fn grab(&mut self, pointer: Point, bounds: Rect) {
        self.grab = Some(bounds.to_local(pointer));
    }

    /// Follow the pointer. Returns the new bounds if the element moved.
    pub fn drag_to(&mut self, pointer: Point, bounds: Rect) -> Option<Rect> {
        let grab = self.grab?;
        let target = pointer - grab;
        let mut origin = bounds.origin();
        for axis in Axis::BOTH {
            if self.axes.get(axis) {
                let value = limit_move(
                    target.along(axis),
                    bounds.size().along(axis),
                    0.0,
                    self.limits.along(axis),
                );
                origin = origin.with_along(axis, value);
            }
        }
        (origin != bounds.origin()).then(|| bounds.with_origin(origin))
    }

    /// End the drag.
    pub fn release(&mut self) {
        self.grab = None;
    }
}
