//! Widget trait and related types.
//!
//! Widgets follow a layout-event-paint cycle driven by the host:
//!
//! 1. **Layout**: the parent assigns bounds in its own coordinate space
//! 2. **Event**: input is delivered in that same space; the widget may ask
//!    the host scheduler for timer callbacks and may return a message
//! 3. **Paint**: the widget draws itself at its bounds
//!
//! # Examples
//!
//! ```
//! use skinscroll_core::WidgetId;
//!
//! let a = WidgetId::next();
//! let b = WidgetId::next();
//! assert_ne!(a, b);
//! assert_eq!(WidgetId::new(42).0, 42);
//! ```

use crate::canvas::Canvas;
use crate::event::Event;
use crate::geometry::{Point, Rect};
use crate::timer::Scheduler;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a widget ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a process-unique ID.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Message type returned from [`Widget::event`]; downcast to the concrete
/// message struct the widget documents.
pub type Message = Box<dyn Any + Send>;

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get this widget's identifier.
    fn id(&self) -> WidgetId;

    /// Current bounds in the parent's coordinate space.
    fn bounds(&self) -> Rect;

    /// Assign new bounds.
    fn layout(&mut self, bounds: Rect);

    /// Draw the widget at its bounds.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input or timer event.
    fn event(&mut self, event: &Event, timers: &mut dyn Scheduler) -> Option<Message>;

    /// Check if this widget currently reacts to pointer input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Recompute hover state after a geometry change, given the pointer's
    /// current position in the parent's space.
    fn reevaluate_hover(&mut self, _pointer: Point) {}
}
