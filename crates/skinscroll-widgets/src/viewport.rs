//! Scrollable viewport with a vertical and a horizontal scrollbar.
//!
//! Bars can be fixed (always shown, always taking space) or automatic
//! (shown only while the content overflows on their axis). Automatic bars
//! are resolved in one pass, vertical first, because showing one bar takes
//! space from the other. A content size that crosses both thresholds at
//! once can need a second pass to settle.

use crate::scrollbar::{LinkConfig, ScrollOffset, Scrollbar, ViewportMetrics};
use crate::skin::ScrollSkin;
use skinscroll_core::{
    Axes, Axis, Canvas, Event, GeometryError, Message, Point, Rect, Scheduler, Size, Widget,
    WidgetId,
};

/// Emitted when the content offset changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentScrolled {
    /// Viewport that scrolled
    pub id: WidgetId,
    /// New content offset
    pub offset: Point,
}

/// A clipped view onto content that may be larger than it.
pub struct Viewport {
    id: WidgetId,
    bounds: Rect,
    bar_size: f32,
    /// Bars that can ever be shown
    managed: Axes,
    auto: Axes,
    /// `x` is the horizontal bar, `y` the vertical one
    shown: Axes,
    visible: Size,
    content_size: Size,
    content_offset: Point,
    content: Option<Box<dyn Widget>>,
    vertical: Scrollbar,
    horizontal: Scrollbar,
    /// Bar that received the last button press
    captured: Option<Axis>,
    /// Last pointer position, viewport-local
    pointer: Option<Point>,
    enabled: bool,
}

impl Viewport {
    /// Create a viewport of `size`.
    ///
    /// `bars` selects fixed bars, `auto` automatic ones; an automatic bar
    /// does not need to be listed in `bars` too.
    pub fn new(size: Size, bar_size: f32, bars: Axes, auto: Axes) -> Result<Self, GeometryError> {
        let managed = Axes::new(bars.x || auto.x, bars.y || auto.y);
        let shown = Axes::new(managed.x && !auto.x, managed.y && !auto.y);
        let visible = Size::new(
            size.width - if shown.y { bar_size } else { 0.0 },
            size.height - if shown.x { bar_size } else { 0.0 },
        );

        let handle = Size::new(bar_size, bar_size);
        let mut vertical = Scrollbar::new(Size::new(bar_size, size.height), handle)?
            .at(Point::new(visible.width, 0.0));
        let mut horizontal = Scrollbar::new(Size::new(visible.width, bar_size), handle)?
            .at(Point::new(0.0, visible.height));

        let id = WidgetId::next();
        let metrics = ViewportMetrics::new(visible, visible);
        vertical.link(id, metrics, LinkConfig::vertical());
        horizontal.link(id, metrics, LinkConfig::horizontal());
        vertical.resize_handle()?;
        horizontal.resize_handle()?;

        Ok(Self {
            id,
            bounds: Rect::from_size(size),
            bar_size,
            managed,
            auto,
            shown,
            visible,
            content_size: visible,
            content_offset: Point::ORIGIN,
            content: None,
            vertical,
            horizontal,
            captured: None,
            pointer: None,
            enabled: true,
        })
    }

    /// Place the viewport in its parent.
    #[must_use]
    pub fn at(mut self, origin: Point) -> Self {
        self.bounds = self.bounds.with_origin(origin);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Size of the area content is visible in.
    #[must_use]
    pub const fn visible_size(&self) -> Size {
        self.visible
    }

    /// Size of the content.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }

    /// Offset of the content's top-left corner from the visible area's.
    #[must_use]
    pub const fn content_offset(&self) -> Point {
        self.content_offset
    }

    /// Thickness of the bars.
    #[must_use]
    pub const fn bar_size(&self) -> f32 {
        self.bar_size
    }

    /// Which bars are shown; `x` is the horizontal bar.
    #[must_use]
    pub const fn shown_bars(&self) -> Axes {
        self.shown
    }

    /// The vertical bar.
    #[must_use]
    pub const fn vertical(&self) -> &Scrollbar {
        &self.vertical
    }

    /// The horizontal bar.
    #[must_use]
    pub const fn horizontal(&self) -> &Scrollbar {
        &self.horizontal
    }

    /// The content widget, if one is set.
    #[must_use]
    pub fn content(&self) -> Option<&dyn Widget> {
        self.content.as_deref()
    }

    /// Whether the viewport accepts input.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Metrics as the bars see them.
    #[must_use]
    pub const fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics::new(self.visible, self.content_size)
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Declare the content size. Returns the resulting content offset.
    pub fn set_content_size(&mut self, size: Size) -> Result<Point, GeometryError> {
        self.content_size = size;
        self.refresh()
    }

    /// Host a content widget, sized by its current bounds.
    pub fn set_content(&mut self, content: impl Widget + 'static) -> Result<Point, GeometryError> {
        self.content_size = content.bounds().size();
        self.content = Some(Box::new(content));
        self.refresh()
    }

    /// Scroll so the content sits at `offset`, as far as the bars allow.
    /// Returns the offset actually reached.
    pub fn scroll_content_to(&mut self, offset: Point) -> Point {
        let v = self.vertical.scroll_to(offset);
        let h = self.horizontal.scroll_to(offset);
        self.apply(v);
        self.apply(h);
        self.content_offset
    }

    /// Change the viewport size. A size that leaves no room for a bar's
    /// trough is rejected and the viewport is left untouched.
    pub fn resize(&mut self, size: Size) -> Result<Point, GeometryError> {
        let narrowest = size.width - if self.managed.y { self.bar_size } else { 0.0 };
        if !(narrowest > 0.0) {
            return Err(GeometryError::EmptyTrough(Size::new(narrowest, self.bar_size)));
        }
        if !(size.height > 0.0) {
            return Err(GeometryError::EmptyTrough(Size::new(self.bar_size, size.height)));
        }

        self.bounds = self.bounds.with_size(size);
        self.visible = Size::new(
            size.width - if self.shown.y { self.bar_size } else { 0.0 },
            size.height - if self.shown.x { self.bar_size } else { 0.0 },
        );
        self.vertical
            .set_trough_size(Size::new(self.bar_size, size.height))?;
        self.place_bars()?;
        self.refresh()
    }

    /// Skin both bars. Each bar keeps its own clone; sprites are shared.
    pub fn set_skin(&mut self, skin: ScrollSkin) {
        self.vertical.set_skin(skin.clone());
        self.horizontal.set_skin(skin);
    }

    /// Accept input again.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.vertical.enable();
        self.horizontal.enable();
    }

    /// Ignore input; both bars show their disabled look.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.captured = None;
        self.vertical.disable();
        self.horizontal.disable();
    }

    // =========================================================================
    // Bar Composition
    // =========================================================================

    /// Re-resolve automatic bars and push the metrics to both bars.
    fn refresh(&mut self) -> Result<Point, GeometryError> {
        if self.show_bars().any() {
            self.place_bars()?;
        }
        let metrics = self.metrics();
        let v = self.vertical.viewport_resized(metrics)?;
        let h = self.horizontal.viewport_resized(metrics)?;
        self.apply(v);
        self.apply(h);
        if let Some(pointer) = self.pointer {
            self.reevaluate_children(pointer);
        }
        Ok(self.content_offset)
    }

    /// One pass over the automatic bars, vertical first. Returns the bars
    /// whose visibility changed.
    fn show_bars(&mut self) -> Axes {
        let size = self.bounds.size();
        let mut changed = Axes::NONE;

        if self.auto.y {
            if self.content_size.height > self.visible.height && !self.shown.y {
                self.visible.width -= self.bar_size;
                self.shown.y = true;
                changed.y = true;
            } else if self.content_size.height < self.visible.height && self.shown.y {
                self.visible.width = size.width;
                self.shown.y = false;
                changed.y = true;
            }
        }
        if self.auto.x {
            if self.content_size.width > self.visible.width && !self.shown.x {
                self.visible.height -= self.bar_size;
                self.shown.x = true;
                changed.x = true;
            } else if self.content_size.width < self.visible.width && self.shown.x {
                self.visible.height = size.height;
                self.shown.x = false;
                changed.x = true;
            }
        }

        if changed.any() {
            log::debug!(
                "viewport {} bars now vertical={} horizontal={}",
                self.id.0,
                self.shown.y,
                self.shown.x
            );
        }
        changed
    }

    fn place_bars(&mut self) -> Result<(), GeometryError> {
        self.vertical.set_origin(Point::new(self.visible.width, 0.0));
        self.horizontal.set_origin(Point::new(0.0, self.visible.height));
        self.horizontal
            .set_trough_size(Size::new(self.visible.width, self.bar_size))?;
        Ok(())
    }

    fn apply(&mut self, offset: ScrollOffset) {
        self.content_offset = offset.apply_to(self.content_offset);
        if let Some(content) = &mut self.content {
            content.layout(Rect::new(
                self.content_offset.x,
                self.content_offset.y,
                self.content_size.width,
                self.content_size.height,
            ));
        }
    }

    fn bar_mut(&mut self, axis: Axis) -> &mut Scrollbar {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Shown bar under a viewport-local position. The vertical bar owns
    /// the corner.
    fn bar_at(&self, position: Point) -> Option<Axis> {
        if self.shown.y && self.vertical.bounds().contains_point(&position) {
            Some(Axis::Vertical)
        } else if self.shown.x && self.horizontal.bounds().contains_point(&position) {
            Some(Axis::Horizontal)
        } else {
            None
        }
    }

    fn reevaluate_children(&mut self, pointer: Point) {
        self.vertical.reevaluate_hover(pointer);
        self.horizontal.reevaluate_hover(pointer);
        if let Some(content) = &mut self.content {
            content.reevaluate_hover(pointer);
        }
    }

    fn to_content(&mut self, local: &Event, timers: &mut dyn Scheduler) -> Option<Message> {
        let visible = Rect::from_size(self.visible);
        if local.position().is_some_and(|p| !visible.contains_point(&p)) {
            return None;
        }
        self.content.as_mut()?.event(local, timers)
    }
}

fn bar_offset(message: Option<Message>) -> ScrollOffset {
    message
        .and_then(|m| m.downcast_ref::<ScrollOffset>().copied())
        .unwrap_or_default()
}

impl Widget for Viewport {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn layout(&mut self, bounds: Rect) {
        self.bounds = self.bounds.with_origin(bounds.origin());
        if bounds.size() != self.bounds.size() {
            if let Err(err) = self.resize(bounds.size()) {
                log::warn!("viewport {} layout rejected: {err}", self.id.0);
            }
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.push_translate(self.bounds.origin());
        if let Some(content) = &self.content {
            canvas.push_clip(Rect::from_size(self.visible));
            content.paint(canvas);
            canvas.pop_clip();
        }
        if self.shown.y {
            self.vertical.paint(canvas);
        }
        if self.shown.x {
            self.horizontal.paint(canvas);
        }
        canvas.pop_translate();
    }

    fn event(&mut self, event: &Event, timers: &mut dyn Scheduler) -> Option<Message> {
        let local = event.translated(self.bounds.origin());
        if let Some(position) = local.position() {
            self.pointer = Some(position);
        }
        if let Event::Resize { width, height } = local {
            let before = self.content_offset;
            return match self.resize(Size::new(width, height)) {
                Ok(offset) if offset != before => Some(Box::new(ContentScrolled {
                    id: self.id,
                    offset,
                })),
                Ok(_) => None,
                Err(err) => {
                    log::warn!("viewport {} resize rejected: {err}", self.id.0);
                    None
                }
            };
        }
        if !self.enabled {
            return None;
        }

        let offset = match &local {
            Event::Timer { ticket } => {
                if self.vertical.owns_ticket(*ticket) {
                    bar_offset(self.vertical.event(&local, timers))
                } else if self.horizontal.owns_ticket(*ticket) {
                    bar_offset(self.horizontal.event(&local, timers))
                } else {
                    return self.to_content(&local, timers);
                }
            }
            Event::Scroll {
                position, delta_y, ..
            } => {
                let over = Rect::from_size(self.bounds.size()).contains_point(position);
                if self.managed.y {
                    self.vertical.wheel_scrolled(*delta_y, over)
                } else {
                    ScrollOffset::default()
                }
            }
            Event::MouseDown { position, .. } => match self.bar_at(*position) {
                Some(axis) => {
                    self.captured = Some(axis);
                    bar_offset(self.bar_mut(axis).event(&local, timers))
                }
                None => return self.to_content(&local, timers),
            },
            Event::MouseUp { .. } => match self.captured.take() {
                Some(axis) => bar_offset(self.bar_mut(axis).event(&local, timers)),
                None => return self.to_content(&local, timers),
            },
            Event::MouseMove { .. } => {
                let mut offset = ScrollOffset::default();
                for axis in Axis::BOTH {
                    if self.shown.get(axis) {
                        let moved = bar_offset(self.bar_mut(axis).event(&local, timers));
                        if !moved.is_empty() {
                            offset = moved;
                        }
                    }
                }
                if offset.is_empty() && self.captured.is_none() {
                    return self.to_content(&local, timers);
                }
                offset
            }
            Event::MouseLeave => {
                self.vertical.event(&local, timers);
                self.horizontal.event(&local, timers);
                return self.to_content(&local, timers);
            }
            _ => return self.to_content(&local, timers),
        };

        if offset.is_empty() {
            return None;
        }
        self.apply(offset);
        Some(Box::new(ContentScrolled {
            id: self.id,
            offset: self.content_offset,
        }))
    }

    fn is_interactive(&self) -> bool {
        self.enabled
    }

    fn reevaluate_hover(&mut self, pointer: Point) {
        let local = pointer - self.bounds.origin();
        self.pointer = Some(local);
        self.reevaluate_children(local);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::Background;
    use crate::interactive::{Activated, Interactive};
    use skinscroll_core::{Color, DrawCommand, NoTimers, Pixmap, RecordingCanvas, TimerQueue};

    const SIZE: Size = Size::new(200.0, 200.0);

    fn auto_viewport() -> Viewport {
        Viewport::new(SIZE, 20.0, Axes::NONE, Axes::BOTH).unwrap()
    }

    fn scrolled(msg: Option<Message>) -> Point {
        msg.unwrap().downcast_ref::<ContentScrolled>().unwrap().offset
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[test]
    fn test_fixed_bars_take_space() {
        let vp = Viewport::new(SIZE, 20.0, Axes::BOTH, Axes::NONE).unwrap();
        assert_eq!(vp.visible_size(), Size::new(180.0, 180.0));
        assert_eq!(vp.shown_bars(), Axes::BOTH);
        assert_eq!(vp.vertical().bounds(), Rect::new(180.0, 0.0, 20.0, 200.0));
        assert_eq!(vp.horizontal().bounds(), Rect::new(0.0, 180.0, 180.0, 20.0));
        assert!(!vp.vertical().is_enabled());
        assert_eq!(vp.vertical().linked_viewport(), Some(vp.id()));
    }

    #[test]
    fn test_unmanaged_bar_never_shows() {
        let mut vp = Viewport::new(SIZE, 20.0, Axes::VERTICAL, Axes::NONE).unwrap();
        vp.set_content_size(Size::new(1000.0, 1000.0)).unwrap();
        assert_eq!(vp.shown_bars(), Axes::VERTICAL);
        assert_eq!(vp.visible_size(), Size::new(180.0, 200.0));
    }

    #[test]
    fn test_bad_bar_size() {
        assert!(matches!(
            Viewport::new(SIZE, 0.0, Axes::BOTH, Axes::NONE),
            Err(GeometryError::EmptyTrough(_))
        ));
    }

    // =========================================================================
    // Auto Bar Tests
    // =========================================================================

    #[test]
    fn test_auto_vertical_shows_for_tall_content() {
        let mut vp = auto_viewport();
        assert_eq!(vp.shown_bars(), Axes::NONE);

        vp.set_content_size(Size::new(180.0, 800.0)).unwrap();
        assert_eq!(vp.shown_bars(), Axes::VERTICAL);
        assert_eq!(vp.visible_size(), Size::new(180.0, 200.0));
        assert_eq!(vp.vertical().handle_size().height, 50.0);
        assert!(vp.vertical().is_enabled());
        assert!(!vp.horizontal().is_enabled());
    }

    #[test]
    fn test_vertical_bar_can_push_horizontal_into_view() {
        let mut vp = auto_viewport();
        vp.set_content_size(Size::new(190.0, 400.0)).unwrap();
        assert_eq!(vp.shown_bars(), Axes::BOTH);
        assert_eq!(vp.visible_size(), Size::new(180.0, 180.0));
        assert_eq!(vp.horizontal().bounds(), Rect::new(0.0, 180.0, 180.0, 20.0));
        assert_eq!(vp.vertical().bounds().x, 180.0);
    }

    #[test]
    fn test_auto_bars_settle_over_two_passes() {
        let mut vp = auto_viewport();
        // horizontal shows first in this pass and only then does the
        // content overflow vertically
        vp.set_content_size(Size::new(210.0, 195.0)).unwrap();
        assert_eq!(vp.shown_bars(), Axes::HORIZONTAL);

        vp.set_content_size(Size::new(210.0, 195.0)).unwrap();
        assert_eq!(vp.shown_bars(), Axes::BOTH);
    }

    #[test]
    fn test_auto_bar_hides_and_resets_offset() {
        let mut vp = auto_viewport();
        vp.set_content_size(Size::new(180.0, 800.0)).unwrap();
        vp.scroll_content_to(Point::new(0.0, -300.0));
        assert_eq!(vp.content_offset(), Point::new(0.0, -300.0));

        vp.set_content_size(Size::new(100.0, 100.0)).unwrap();
        assert_eq!(vp.shown_bars(), Axes::NONE);
        assert_eq!(vp.visible_size(), SIZE);
        assert_eq!(vp.content_offset(), Point::ORIGIN);
    }

    // =========================================================================
    // Scrolling Tests
    // =========================================================================

    #[test]
    fn test_scroll_content_to_clamps() {
        let mut vp = auto_viewport();
        vp.set_content_size(Size::new(180.0, 800.0)).unwrap();
        assert_eq!(vp.scroll_content_to(Point::new(0.0, -5000.0)), Point::new(0.0, -600.0));
        assert_eq!(vp.vertical().handle_position().y, 150.0);
    }

    #[test]
    fn test_wheel_over_viewport_scrolls() {
        let mut vp = auto_viewport().at(Point::new(50.0, 50.0));
        vp.set_content_size(Size::new(180.0, 800.0)).unwrap();

        let wheel = |x, y| Event::Scroll {
            position: Point::new(x, y),
            delta_x: 0.0,
            delta_y: -100.0,
        };
        let offset = scrolled(vp.event(&wheel(100.0, 100.0), &mut NoTimers));
        assert_eq!(offset, Point::new(0.0, -40.0));

        assert!(vp.event(&wheel(10.0, 10.0), &mut NoTimers).is_none());
    }

    #[test]
    fn test_drag_vertical_handle() {
        let mut vp = auto_viewport();
        vp.set_content_size(Size::new(180.0, 800.0)).unwrap();

        assert!(vp
            .event(&Event::left_down(Point::new(190.0, 10.0)), &mut NoTimers)
            .is_none());
        let offset = scrolled(vp.event(
            &Event::MouseMove {
                position: Point::new(190.0, 40.0),
            },
            &mut NoTimers,
        ));
        assert_eq!(offset, Point::new(0.0, -120.0));

        // the captured bar keeps dragging outside its bounds
        let offset = scrolled(vp.event(
            &Event::MouseMove {
                position: Point::new(20.0, 70.0),
            },
            &mut NoTimers,
        ));
        assert_eq!(offset, Point::new(0.0, -240.0));
        vp.event(&Event::left_up(Point::new(20.0, 70.0)), &mut NoTimers);
    }

    #[test]
    fn test_trough_repeat_routed_through_viewport() {
        let mut vp = auto_viewport();
        vp.set_content_size(Size::new(180.0, 800.0)).unwrap();
        let mut timers = TimerQueue::new();

        let offset = scrolled(vp.event(&Event::left_down(Point::new(190.0, 195.0)), &mut timers));
        assert_eq!(offset, Point::new(0.0, -180.0));

        let mut last = None;
        timers.run_for(400, |ticket, q| {
            if let Some(msg) = vp.event(&Event::Timer { ticket }, q) {
                last = Some(msg.downcast_ref::<ContentScrolled>().unwrap().offset);
            }
        });
        assert_eq!(last, Some(Point::new(0.0, -360.0)));

        vp.event(&Event::left_up(Point::new(190.0, 195.0)), &mut timers);
        timers.run_for(1000, |ticket, q| {
            assert!(vp.event(&Event::Timer { ticket }, q).is_none());
        });
    }

    // =========================================================================
    // Content Tests
    // =========================================================================

    #[test]
    fn test_content_receives_clicks_inside_visible_area() {
        let mut vp = auto_viewport();
        vp.set_content(Interactive::button(Rect::new(0.0, 0.0, 180.0, 800.0)))
            .unwrap();
        assert_eq!(vp.content_size(), Size::new(180.0, 800.0));

        let msg = vp.event(&Event::left_down(Point::new(50.0, 50.0)), &mut NoTimers);
        assert!(msg.unwrap().downcast_ref::<Activated>().is_some());
    }

    #[test]
    fn test_content_follows_offset_and_is_clipped() {
        let mut vp = auto_viewport().at(Point::new(10.0, 10.0));
        vp.set_content(Background::new(Rect::new(0.0, 0.0, 180.0, 800.0)).color(Color::BLACK))
            .unwrap();
        vp.scroll_content_to(Point::new(0.0, -40.0));
        assert_eq!(vp.content().unwrap().bounds().origin(), Point::new(0.0, -40.0));

        let mut canvas = RecordingCanvas::new();
        vp.paint(&mut canvas);
        match &canvas.commands()[0] {
            DrawCommand::FillRect { bounds, clip, .. } => {
                assert_eq!(bounds.origin(), Point::new(10.0, -30.0));
                assert_eq!(*clip, Some(Rect::new(10.0, 10.0, 180.0, 200.0)));
            }
            other => panic!("expected content fill, got {other:?}"),
        }
        // content plus the vertical bar's trough and handle
        assert_eq!(canvas.command_count(), 3);
    }

    // =========================================================================
    // Skin / Enable Tests
    // =========================================================================

    #[test]
    fn test_set_skin_renders_each_bar_at_its_size() {
        let mut vp = Viewport::new(SIZE, 20.0, Axes::BOTH, Axes::NONE).unwrap();
        let skin = ScrollSkin::from_pixmaps(
            vec![(Pixmap::new(4, 2), None)],
            vec![(Pixmap::new(4, 2), None)],
        )
        .unwrap();
        vp.set_skin(skin);

        let v = &vp.vertical().trough().get_images().unwrap()[0];
        let h = &vp.horizontal().trough().get_images().unwrap()[0];
        assert_eq!((v.width(), v.height()), (20, 200));
        assert_eq!((h.width(), h.height()), (180, 20));
    }

    #[test]
    fn test_disable_ignores_wheel() {
        let mut vp = auto_viewport();
        vp.set_content_size(Size::new(180.0, 800.0)).unwrap();
        vp.disable();
        let wheel = Event::Scroll {
            position: Point::new(10.0, 10.0),
            delta_x: 0.0,
            delta_y: -100.0,
        };
        assert!(vp.event(&wheel, &mut NoTimers).is_none());
        vp.enable();
        assert!(vp.event(&wheel, &mut NoTimers).is_some());
    }

    #[test]
    fn test_resize_keeps_bars_aligned() {
        let mut vp = auto_viewport();
        vp.set_content_size(Size::new(180.0, 800.0)).unwrap();
        vp.resize(Size::new(300.0, 400.0)).unwrap();
        assert_eq!(vp.visible_size(), Size::new(280.0, 400.0));
        assert_eq!(vp.vertical().bounds(), Rect::new(280.0, 0.0, 20.0, 400.0));
        assert_eq!(vp.vertical().handle_size().height, 200.0);
    }

    #[test]
    fn test_rejected_resize_leaves_viewport_untouched() {
        let mut vp = auto_viewport();
        vp.set_content_size(Size::new(180.0, 800.0)).unwrap();
        let vertical = vp.vertical().bounds();
        let horizontal = vp.horizontal().bounds();

        assert!(matches!(
            vp.resize(Size::new(15.0, 300.0)),
            Err(GeometryError::EmptyTrough(_))
        ));
        assert!(vp.resize(Size::new(100.0, 0.0)).is_err());

        assert_eq!(vp.bounds().size(), SIZE);
        assert_eq!(vp.visible_size(), Size::new(180.0, 200.0));
        assert_eq!(vp.vertical().bounds(), vertical);
        assert_eq!(vp.horizontal().bounds(), horizontal);
        assert_eq!(vp.vertical().handle_size().height, 50.0);
    }

    #[test]
    fn test_resize_event_clamps_offset() {
        let mut vp = auto_viewport();
        vp.set_content_size(Size::new(180.0, 800.0)).unwrap();
        vp.scroll_content_to(Point::new(0.0, -600.0));

        let resize = Event::Resize {
            width: 200.0,
            height: 400.0,
        };
        let offset = scrolled(vp.event(&resize, &mut NoTimers));
        assert_eq!(offset, Point::new(0.0, -400.0));
        assert_eq!(vp.bounds().size(), Size::new(200.0, 400.0));
    }
}
