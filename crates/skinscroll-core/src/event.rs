//! Input events for widgets.
//!
//! Pointer positions are always expressed in the coordinate space of the
//! widget's parent, the same space its bounds live in. Containers translate
//! positions before forwarding events to their children.

use crate::geometry::Point;
use crate::timer::TimerTicket;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Mouse wheel scrolled
    Scroll {
        /// Pointer position when the wheel moved
        position: Point,
        /// Horizontal scroll delta
        delta_x: f32,
        /// Vertical scroll delta
        delta_y: f32,
    },
    /// Mouse entered widget bounds
    MouseEnter,
    /// Mouse left widget bounds
    MouseLeave,
    /// Widget resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
    /// A one-shot timer requested through a [`Scheduler`](crate::Scheduler) fired
    Timer {
        /// Ticket handed to the scheduler when the timer was armed
        ticket: TimerTicket,
    },
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

impl Event {
    /// Check if this is a pointer event.
    #[must_use]
    pub const fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseMove { .. }
                | Self::MouseDown { .. }
                | Self::MouseUp { .. }
                | Self::Scroll { .. }
                | Self::MouseEnter
                | Self::MouseLeave
        )
    }

    /// Get the pointer position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::Scroll { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Copy of the event with its position shifted into a child's space.
    ///
    /// `origin` is the child's top-left corner in this event's space.
    #[must_use]
    pub fn translated(&self, origin: Point) -> Self {
        let mut event = self.clone();
        match &mut event {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::Scroll { position, .. } => *position = *position - origin,
            _ => {}
        }
        event
    }

    /// Shorthand for a left-button press.
    #[must_use]
    pub const fn left_down(position: Point) -> Self {
        Self::MouseDown {
            position,
            button: MouseButton::Left,
        }
    }

    /// Shorthand for a left-button release.
    #[must_use]
    pub const fn left_up(position: Point) -> Self {
        Self::MouseUp {
            position,
            button: MouseButton::Left,
        }
    }
}
