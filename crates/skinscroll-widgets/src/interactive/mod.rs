//! Interactive elements built from composable capabilities.
//!
//! An [`Interactive`] holds any subset of five capabilities:
//!
//! - [`HoverReactive`]: shows the hover image while the pointer is over it
//! - [`PressReactive`]: fires on press or on release ([`PressMode`])
//! - [`HoldRepeating`]: keeps firing on a timer while held
//! - [`Draggable`]: follows the pointer inside its parent
//! - [`Toggleable`]: flips between two image sets on each completed push
//!
//! Every event runs through the capabilities in that fixed order. When
//! more than one produces a message, the later capability's message wins.

mod drag;
mod hold;
mod hover;
mod press;
mod toggle;

pub use drag::Draggable;
pub use hold::{HoldDelays, HoldRepeating};
pub use hover::HoverReactive;
pub use press::{PressMode, PressReactive};
pub use toggle::Toggleable;

use crate::visual::{StateImages, ToggleImages, ToggleState, VisualState};
use skinscroll_core::{
    Axes, Canvas, Event, Message, MouseButton, Pixmap, Point, Rect, Scheduler, Size, Widget,
    WidgetId,
};
use std::sync::Arc;

/// Emitted when an element's action fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activated {
    /// Element that fired
    pub id: WidgetId,
}

/// Emitted when a toggle changes position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    /// Element that flipped
    pub id: WidgetId,
    /// New position
    pub state: ToggleState,
}

/// Emitted when a dragged element moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moved {
    /// Element that moved
    pub id: WidgetId,
    /// New bounds in the parent's space
    pub bounds: Rect,
}

/// A pointer-driven element with state images.
#[derive(Debug, Clone)]
pub struct Interactive {
    id: WidgetId,
    bounds: Rect,
    enabled: bool,
    images: StateImages,
    hover: Option<HoverReactive>,
    press: Option<PressReactive>,
    hold: Option<HoldRepeating>,
    drag: Option<Draggable>,
    toggle: Option<Toggleable>,
}

impl Interactive {
    /// Create a bare element with no capabilities.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            id: WidgetId::next(),
            bounds,
            enabled: true,
            images: StateImages::default(),
            hover: None,
            press: None,
            hold: None,
            drag: None,
            toggle: None,
        }
    }

    /// Hover-reactive element that fires on press.
    #[must_use]
    pub fn button(bounds: Rect) -> Self {
        Self::new(bounds).hoverable().pressable(PressMode::OnPress)
    }

    /// Hover-reactive element that fires on release over itself.
    #[must_use]
    pub fn push_button(bounds: Rect) -> Self {
        Self::new(bounds).hoverable().pressable(PressMode::OnRelease)
    }

    /// Button that keeps firing while held.
    #[must_use]
    pub fn hold_button(bounds: Rect, delays: HoldDelays) -> Self {
        Self::new(bounds).hoverable().holdable(delays)
    }

    /// Push button that flips between two image sets.
    #[must_use]
    pub fn toggle_button(bounds: Rect, state: ToggleState, images: ToggleImages) -> Self {
        Self::new(bounds).hoverable().toggleable(state, images)
    }

    /// Hover-reactive element that follows the pointer inside `limits`.
    #[must_use]
    pub fn drag_handle(bounds: Rect, axes: Axes, limits: Size) -> Self {
        Self::new(bounds).hoverable().draggable(axes, limits)
    }

    /// Add hover tracking.
    #[must_use]
    pub fn hoverable(mut self) -> Self {
        self.hover = Some(HoverReactive::new());
        self
    }

    /// Add press tracking in the given mode.
    #[must_use]
    pub fn pressable(mut self, mode: PressMode) -> Self {
        self.press = Some(PressReactive::new(mode));
        self
    }

    /// Add hold-to-repeat. Fires immediately on press, then on a timer.
    #[must_use]
    pub fn holdable(mut self, delays: HoldDelays) -> Self {
        self.press = Some(PressReactive::new(PressMode::OnPress));
        self.hold = Some(HoldRepeating::new(self.id, delays));
        self
    }

    /// Add drag-to-move.
    #[must_use]
    pub fn draggable(mut self, axes: Axes, limits: Size) -> Self {
        if self.press.is_none() {
            self.press = Some(PressReactive::new(PressMode::OnRelease));
        }
        self.drag = Some(Draggable::new(axes, limits));
        self
    }

    /// Add toggling on completed pushes.
    #[must_use]
    pub fn toggleable(mut self, state: ToggleState, images: ToggleImages) -> Self {
        self.press = Some(PressReactive::new(PressMode::OnRelease));
        self.toggle = Some(Toggleable::new(state, images));
        self
    }

    /// Set the state images.
    #[must_use]
    pub fn with_images(mut self, images: StateImages) -> Self {
        self.images = images;
        self
    }

    /// Start out disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Replace the state images.
    pub fn set_images(&mut self, images: StateImages) {
        self.images = images;
    }

    /// State images.
    #[must_use]
    pub const fn get_images(&self) -> &StateImages {
        &self.images
    }

    /// Change the axes a draggable element moves along.
    pub fn set_drag_axes(&mut self, axes: Axes) {
        if let Some(drag) = &mut self.drag {
            drag.set_axes(axes);
        }
    }

    /// Change the extent a draggable element is kept inside.
    pub fn set_drag_limits(&mut self, limits: Size) {
        if let Some(drag) = &mut self.drag {
            drag.set_limits(limits);
        }
    }

    /// Move without a drag.
    pub fn set_origin(&mut self, origin: Point) {
        self.bounds = self.bounds.with_origin(origin);
    }

    /// Accept input again.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Ignore input and show the disabled image. Any press, repeat or drag
    /// in progress is dropped.
    pub fn disable(&mut self) {
        self.enabled = false;
        if let Some(press) = &mut self.press {
            press.cancel();
        }
        if let Some(hold) = &mut self.hold {
            hold.stop();
        }
        if let Some(drag) = &mut self.drag {
            drag.release();
        }
    }

    /// Enable or disable.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.enable();
        } else {
            self.disable();
        }
    }

    /// Whether the element accepts input.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the pointer is over the element.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.hover.is_some_and(|h| h.is_over())
    }

    /// Whether the button is held on the element.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some_and(|p| p.is_pressed())
    }

    /// Whether a hold-to-repeat chain is running.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.hold.is_some_and(|h| h.is_holding())
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|d| d.is_dragging())
    }

    /// Toggle position, for toggleable elements.
    #[must_use]
    pub fn toggle_state(&self) -> Option<ToggleState> {
        self.toggle.as_ref().map(Toggleable::state)
    }

    /// Which state image is shown.
    ///
    /// Holding and dragging keep the pressed look when the pointer strays
    /// off the element; plain presses fall back to rest until it returns.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        if !self.enabled {
            return VisualState::Disabled;
        }
        let sticky = self.hold.is_some() || self.drag.is_some();
        if self.is_pressed() && (self.is_over() || sticky) {
            VisualState::Pressed
        } else if self.is_over() {
            VisualState::Hover
        } else {
            VisualState::Rest
        }
    }

    /// Image for the current state, if one is available.
    #[must_use]
    pub fn current_image(&self) -> Option<&Arc<Pixmap>> {
        let state = self.visual_state();
        let image = match &self.toggle {
            Some(toggle) => toggle.images().get(toggle.state(), state),
            None => self.images.get(state),
        };
        image.filter(|i| !i.is_empty())
    }

    fn pointer_over(&self, event: &Event) -> bool {
        match self.hover {
            Some(hover) => hover.is_over(),
            None => event
                .position()
                .is_some_and(|p| self.bounds.contains_point(&p)),
        }
    }

    fn activated(&self) -> Option<Message> {
        Some(Box::new(Activated { id: self.id }))
    }
}

impl Widget for Interactive {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        match self.current_image() {
            Some(image) => canvas.draw_image(image, self.bounds.origin()),
            None => canvas.fill_rect(self.bounds, self.visual_state().fallback_color()),
        }
    }

    fn event(&mut self, event: &Event, timers: &mut dyn Scheduler) -> Option<Message> {
        if !self.enabled {
            return None;
        }

        if let Some(hover) = &mut self.hover {
            hover.track(event, self.bounds);
        }
        let over = self.pointer_over(event);
        let mut message: Option<Message> = None;

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                if let Some(press) = &mut self.press {
                    if press.press() {
                        message = self.activated();
                    }
                }
                if let Some(hold) = &mut self.hold {
                    hold.start(timers);
                }
                if let Some(drag) = &mut self.drag {
                    drag.grab(*position, self.bounds);
                }
            }
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } => {
                let mut completed = false;
                if let Some(press) = &mut self.press {
                    completed = press.release(over);
                    if completed && press.mode() == PressMode::OnRelease {
                        message = self.activated();
                    }
                }
                if let Some(hold) = &mut self.hold {
                    hold.stop();
                }
                if let Some(drag) = &mut self.drag {
                    drag.release();
                }
                if completed {
                    if let Some(toggle) = &mut self.toggle {
                        let state = toggle.flip();
                        message = Some(Box::new(Toggled { id: self.id, state }));
                    }
                }
            }
            Event::MouseMove { position } => {
                if let Some(drag) = &mut self.drag {
                    if let Some(moved) = drag.drag_to(*position, self.bounds) {
                        self.bounds = moved;
                        if let Some(hover) = &mut self.hover {
                            hover.reevaluate(*position, moved);
                        }
                        message = Some(Box::new(Moved {
                            id: self.id,
                            bounds: moved,
                        }));
                    }
                }
            }
            Event::Timer { ticket } => {
                if let Some(hold) = &mut self.hold {
                    if hold.fire(*ticket, timers) {
                        message = self.activated();
                    }
                }
            }
            _ => {}
        }

        message
    }

    fn is_interactive(&self) -> bool {
        self.enabled
    }

    fn reevaluate_hover(&mut self, pointer: Point) {
        if let Some(hover) = &mut self.hover {
            hover.reevaluate(pointer, self.bounds);
        }
    }
}
