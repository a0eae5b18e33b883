//! The track a scrollbar handle slides along.

use crate::interactive::HoverReactive;
use crate::visual::VisualState;
use skinscroll_core::{
    Canvas, Color, Event, Message, MouseButton, Pixmap, Point, Rect, Scheduler, Widget, WidgetId,
};
use std::sync::Arc;

/// Scrollbar track with four state images.
///
/// A trough stays inert until [`Trough::set_images`] installs its images:
/// before that it ignores events and paints a flat color. Page stepping is
/// handled by the owning scrollbar and works either way.
#[derive(Debug, Clone)]
pub struct Trough {
    id: WidgetId,
    bounds: Rect,
    images: Option<[Arc<Pixmap>; 4]>,
    hover: HoverReactive,
    pressed: bool,
    enabled: bool,
    color: Color,
}

impl Trough {
    /// Create an imageless trough.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            id: WidgetId::next(),
            bounds,
            images: None,
            hover: HoverReactive::new(),
            pressed: false,
            enabled: true,
            color: Color::LIGHT_GRAY,
        }
    }

    /// Install the rest, hover, pressed and disabled images.
    pub fn set_images(&mut self, images: [Arc<Pixmap>; 4]) {
        self.images = Some(images);
    }

    /// Installed images, in state order.
    #[must_use]
    pub const fn get_images(&self) -> Option<&[Arc<Pixmap>; 4]> {
        self.images.as_ref()
    }

    /// Whether images are installed and the trough reacts to the pointer.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.images.is_some()
    }

    /// Show the disabled image.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.pressed = false;
    }

    /// Leave the disabled look.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Enable or disable.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.enable();
        } else {
            self.disable();
        }
    }

    /// Which state image is shown.
    #[must_use]
    pub const fn visual_state(&self) -> VisualState {
        if !self.enabled {
            VisualState::Disabled
        } else if self.pressed {
            VisualState::Pressed
        } else if self.hover.is_over() {
            VisualState::Hover
        } else {
            VisualState::Rest
        }
    }
}

impl Widget for Trough {
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
        let image = self
            .images
            .as_ref()
            .map(|set| &set[self.visual_state().index()])
            .filter(|i| !i.is_empty());
        match image {
            Some(image) => canvas.draw_image(image, self.bounds.origin()),
            None => canvas.fill_rect(self.bounds, self.color),
        }
    }

    fn event(&mut self, event: &Event, _timers: &mut dyn Scheduler) -> Option<Message> {
        if !self.is_active() || !self.enabled {
            return None;
        }
        self.hover.track(event, self.bounds);
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => self.pressed = true,
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } => self.pressed = false,
            _ => {}
        }
        None
    }

    fn is_interactive(&self) -> bool {
        self.is_active() && self.enabled
    }

    fn reevaluate_hover(&mut self, pointer: Point) {
        if self.is_active() {
            self.hover.reevaluate(pointer, self.bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinscroll_core::{DrawCommand, NoTimers, RecordingCanvas};

    fn set() -> [Arc<Pixmap>; 4] {
        [0u8, 1, 2, 3].map(|tag| Arc::new(Pixmap::from_fn(1, 1, move |_, _| [tag, 0, 0, 255])))
    }

    fn shown_tag(trough: &Trough) -> u8 {
        let mut canvas = RecordingCanvas::new();
        trough.paint(&mut canvas);
        let (_, image) = canvas.images().next().unwrap();
        image.get_pixel(0, 0).unwrap()[0]
    }

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 20.0, 200.0);

    #[test]
    fn test_inactive_without_images() {
        let mut trough = Trough::new(BOUNDS);
        trough.event(&Event::MouseEnter, &mut NoTimers);
        trough.event(&Event::left_down(Point::new(5.0, 5.0)), &mut NoTimers);
        assert_eq!(trough.visual_state(), VisualState::Rest);
        assert!(!trough.is_interactive());

        let mut canvas = RecordingCanvas::new();
        trough.paint(&mut canvas);
        match &canvas.commands()[0] {
            DrawCommand::FillRect { color, .. } => assert_eq!(*color, Color::LIGHT_GRAY),
            other => panic!("expected fill, got {other:?}"),
        }
    }

    #[test]
    fn test_state_images_follow_pointer() {
        let mut trough = Trough::new(BOUNDS);
        trough.set_images(set());
        assert_eq!(shown_tag(&trough), 0);

        trough.event(&Event::MouseEnter, &mut NoTimers);
        assert_eq!(shown_tag(&trough), 1);

        trough.event(&Event::left_down(Point::new(5.0, 5.0)), &mut NoTimers);
        assert_eq!(shown_tag(&trough), 2);

        trough.event(&Event::left_up(Point::new(5.0, 5.0)), &mut NoTimers);
        assert_eq!(shown_tag(&trough), 1);

        trough.event(&Event::MouseLeave, &mut NoTimers);
        assert_eq!(shown_tag(&trough), 0);

        trough.disable();
        assert_eq!(shown_tag(&trough), 3);
    }

    #[test]
    fn test_disabled_ignores_events() {
        let mut trough = Trough::new(BOUNDS);
        trough.set_images(set());
        trough.disable();
        trough.event(&Event::MouseEnter, &mut NoTimers);
        trough.enable();
        assert_eq!(trough.visual_state(), VisualState::Rest);
    }
}
