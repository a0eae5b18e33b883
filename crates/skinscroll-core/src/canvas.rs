//! Paint target abstraction and a recording implementation.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::pixmap::Pixmap;
use std::sync::Arc;

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the host's compositor.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw an image unscaled with its top-left corner at `origin`.
    fn draw_image(&mut self, image: &Arc<Pixmap>, origin: Point);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);

    /// Push a translation applied to everything drawn until the matching pop.
    fn push_translate(&mut self, offset: Point);

    /// Pop the translation.
    fn pop_translate(&mut self);
}

/// A recorded paint operation, in canvas (untranslated) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle
    FillRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
        /// Active clip, if any
        clip: Option<Rect>,
    },
    /// Image blit
    Image {
        /// Top-left corner
        origin: Point,
        /// The image drawn
        image: Arc<Pixmap>,
        /// Active clip, if any
        clip: Option<Rect>,
    },
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Translations are resolved at record time, so every command carries the
/// position it would land on in the host surface.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    translate_stack: Vec<Point>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.translate_stack.clear();
    }

    /// Images drawn so far, with their landing positions.
    pub fn images(&self) -> impl Iterator<Item = (Point, &Arc<Pixmap>)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { origin, image, .. } => Some((*origin, image)),
            DrawCommand::FillRect { .. } => None,
        })
    }

    /// Current accumulated translation.
    #[must_use]
    pub fn current_offset(&self) -> Point {
        self.translate_stack.last().copied().unwrap_or(Point::ORIGIN)
    }

    /// Current clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let origin = rect.origin() + self.current_offset();
        self.commands.push(DrawCommand::FillRect {
            bounds: rect.with_origin(origin),
            color,
            clip: self.current_clip(),
        });
    }

    fn draw_image(&mut self, image: &Arc<Pixmap>, origin: Point) {
        self.commands.push(DrawCommand::Image {
            origin: origin + self.current_offset(),
            image: Arc::clone(image),
            clip: self.current_clip(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        let rect = rect.with_origin(rect.origin() + self.current_offset());
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    fn push_translate(&mut self, offset: Point) {
        let total = self.current_offset() + offset;
        self.translate_stack.push(total);
    }

    fn pop_translate(&mut self) {
        self.translate_stack.pop();
    }
}
