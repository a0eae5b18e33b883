//! Plain image display.

use skinscroll_core::{
    AssetError, Canvas, Color, Event, Message, Pixmap, Rect, Scheduler, Widget, WidgetId,
};
use std::path::Path;
use std::sync::Arc;

/// Shows one image, or a flat color when none is set.
#[derive(Debug, Clone)]
pub struct Background {
    id: WidgetId,
    bounds: Rect,
    image: Option<Arc<Pixmap>>,
    color: Color,
}

impl Background {
    /// Create an empty background.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            id: WidgetId::next(),
            bounds,
            image: None,
            color: Color::LIGHT_GRAY,
        }
    }

    /// Set the fill color used when no image is set.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Load an image from `path`.
    ///
    /// On failure the previous image stays in place and a warning is logged;
    /// the error is returned for callers that want it.
    pub fn set_image(&mut self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        match Pixmap::open(path) {
            Ok(pixmap) => {
                self.image = Some(Arc::new(pixmap));
                Ok(())
            }
            Err(err) => {
                log::warn!("{err}");
                Err(err)
            }
        }
    }

    /// Install an already built image.
    pub fn set_pixmap(&mut self, image: Arc<Pixmap>) {
        self.image = Some(image);
    }

    /// Current image.
    #[must_use]
    pub const fn get_image(&self) -> Option<&Arc<Pixmap>> {
        self.image.as_ref()
    }
}

impl Widget for Background {
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
        match self.image.as_ref().filter(|i| !i.is_empty()) {
            Some(image) => canvas.draw_image(image, self.bounds.origin()),
            None => canvas.fill_rect(self.bounds, self.color),
        }
    }

    fn event(&mut self, _event: &Event, _timers: &mut dyn Scheduler) -> Option<Message> {
        None
    }
}
