//! Scrollbar: a trough, a draggable handle, and the mapping between handle
//! position and the content offset of a linked viewport.
//!
//! The scrollbar never reaches into the viewport. It keeps the viewport's
//! id and the last [`ViewportMetrics`] it was told about, and answers every
//! movement with a [`ScrollOffset`] the owner applies to its content.
//!
//! # Examples
//!
//! ```
//! use skinscroll_core::{Size, WidgetId};
//! use skinscroll_widgets::{LinkConfig, Scrollbar, ViewportMetrics};
//!
//! let mut bar = Scrollbar::new(Size::new(20.0, 200.0), Size::new(20.0, 20.0)).unwrap();
//! let metrics = ViewportMetrics::new(Size::new(100.0, 250.0), Size::new(100.0, 1000.0));
//! bar.link(WidgetId::next(), metrics, LinkConfig::vertical());
//! bar.resize_handle().unwrap();
//! assert_eq!(bar.handle_size().height, 50.0);
//! ```

use crate::interactive::{HoldDelays, Interactive, Moved};
use crate::skin::{ScrollSkin, SkinImages};
use crate::trough::Trough;
use crate::visual::StateImages;
use serde::{Deserialize, Serialize};
use skinscroll_core::{
    limit_move, Axes, Axis, Canvas, Event, GeometryError, Message, MouseButton, Point, Rect,
    RepeatGate, Scheduler, Size, TimerTicket, Widget, WidgetId,
};

/// Tuning shared by every scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Wheel delta that moves the handle by one unit
    pub wheel_step: f32,
    /// Fraction of the handle length moved by one page step
    pub page_percent: f32,
    /// Shortest handle a long document can shrink it to
    pub min_handle_length: f32,
    /// Page-repeat timing while the trough is held
    pub hold: HoldDelays,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            wheel_step: 10.0,
            page_percent: 0.9,
            min_handle_length: 8.0,
            hold: HoldDelays::default(),
        }
    }
}

impl ScrollbarConfig {
    /// Check the tuning values.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.wheel_step > 0.0 && self.wheel_step.is_finite()) {
            return Err(GeometryError::WheelStep(self.wheel_step));
        }
        if !(self.page_percent > 0.0 && self.page_percent <= 1.0) {
            return Err(GeometryError::PagePercent(self.page_percent));
        }
        Ok(())
    }
}

/// How handle movement maps onto a viewport's content offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Sign applied to the mapped offset; content moves against the handle
    /// with the default of -1
    pub movement_modifier: f32,
    /// Axes the scrollbar drives
    pub active: Axes,
    /// Offset added to every mapped value
    pub content_offset: Point,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            movement_modifier: -1.0,
            active: Axes::BOTH,
            content_offset: Point::ORIGIN,
        }
    }
}

impl LinkConfig {
    /// Default link driving both axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default link driving only the vertical axis.
    #[must_use]
    pub fn vertical() -> Self {
        Self::new().active(Axes::VERTICAL)
    }

    /// Default link driving only the horizontal axis.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::new().active(Axes::HORIZONTAL)
    }

    /// Set the movement modifier.
    #[must_use]
    pub fn movement_modifier(mut self, modifier: f32) -> Self {
        self.movement_modifier = modifier;
        self
    }

    /// Set the driven axes.
    #[must_use]
    pub fn active(mut self, active: Axes) -> Self {
        self.active = active;
        self
    }

    /// Set the configured offset.
    #[must_use]
    pub fn content_offset(mut self, offset: Point) -> Self {
        self.content_offset = offset;
        self
    }
}

/// What a viewport tells its scrollbars about itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// Size of the visible area
    pub visible: Size,
    /// Size of the content behind it
    pub content: Size,
}

impl ViewportMetrics {
    /// Create new metrics.
    #[must_use]
    pub const fn new(visible: Size, content: Size) -> Self {
        Self { visible, content }
    }
}

/// New content offset on the axes a scrollbar drives.
///
/// Emitted as the message of [`Scrollbar::event`] whenever the handle moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    /// Horizontal content offset, if driven
    pub x: Option<f32>,
    /// Vertical content offset, if driven
    pub y: Option<f32>,
}

impl ScrollOffset {
    /// True when no axis is driven.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    /// Value for `axis`.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.x = Some(value),
            Axis::Vertical => self.y = Some(value),
        }
    }

    /// Overwrite the driven axes of `offset`.
    #[must_use]
    pub fn apply_to(&self, offset: Point) -> Point {
        Point::new(self.x.unwrap_or(offset.x), self.y.unwrap_or(offset.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Link {
    viewport: WidgetId,
    config: LinkConfig,
    metrics: ViewportMetrics,
}

/// A trough with a draggable handle, optionally linked to a viewport.
#[derive(Debug, Clone)]
pub struct Scrollbar {
    id: WidgetId,
    origin: Point,
    trough: Trough,
    handle: Interactive,
    config: ScrollbarConfig,
    enabled: bool,
    /// Handle fills the trough on every axis
    inert: bool,
    scrollable: Axes,
    link: Option<Link>,
    /// Metrics the current handle geometry was computed from
    cached: Option<ViewportMetrics>,
    repeat: RepeatGate,
    /// Last pointer position while the trough is held
    paging: Option<Point>,
    skin: Option<ScrollSkin>,
    horizontal_skin: bool,
}

impl Scrollbar {
    /// Create an unlinked scrollbar with default tuning.
    pub fn new(trough: Size, handle: Size) -> Result<Self, GeometryError> {
        Self::with_config(trough, handle, ScrollbarConfig::default())
    }

    /// Create an unlinked scrollbar.
    pub fn with_config(
        trough: Size,
        handle: Size,
        config: ScrollbarConfig,
    ) -> Result<Self, GeometryError> {
        config.validate()?;
        if !(trough.width > 0.0 && trough.height > 0.0) {
            return Err(GeometryError::EmptyTrough(trough));
        }
        if !(handle.width > 0.0 && handle.height > 0.0) {
            return Err(GeometryError::EmptyHandle(handle));
        }
        if !trough.contains(&handle) {
            return Err(GeometryError::HandleExceedsTrough { handle, trough });
        }

        let id = WidgetId::next();
        Ok(Self {
            id,
            origin: Point::ORIGIN,
            trough: Trough::new(Rect::from_size(trough)),
            handle: Interactive::drag_handle(Rect::from_size(handle), Axes::BOTH, trough),
            config,
            enabled: true,
            inert: false,
            scrollable: Axes::NONE,
            link: None,
            cached: None,
            repeat: RepeatGate::new(id),
            paging: None,
            skin: None,
            horizontal_skin: false,
        })
    }

    /// Set the wheel step.
    pub fn wheel_step(mut self, step: f32) -> Result<Self, GeometryError> {
        let config = ScrollbarConfig {
            wheel_step: step,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Set the page step as a fraction of the handle length.
    pub fn page_percent(mut self, percent: f32) -> Result<Self, GeometryError> {
        let config = ScrollbarConfig {
            page_percent: percent,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Set the shortest handle length.
    #[must_use]
    pub fn min_handle_length(mut self, length: f32) -> Self {
        self.config.min_handle_length = length.max(0.0);
        self
    }

    /// Set the page-repeat timing.
    #[must_use]
    pub fn hold_delays(mut self, delays: HoldDelays) -> Self {
        self.config.hold = delays;
        self
    }

    /// Always render skins in horizontal orientation.
    #[must_use]
    pub fn horizontal_skin(mut self, forced: bool) -> Self {
        self.horizontal_skin = forced;
        self
    }

    /// Place the scrollbar in its parent.
    #[must_use]
    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Tuning in effect.
    #[must_use]
    pub const fn get_config(&self) -> &ScrollbarConfig {
        &self.config
    }

    /// Trough extent.
    #[must_use]
    pub fn trough_size(&self) -> Size {
        self.trough.bounds().size()
    }

    /// Handle bounds, relative to the trough.
    #[must_use]
    pub fn handle_bounds(&self) -> Rect {
        self.handle.bounds()
    }

    /// Handle position, relative to the trough.
    #[must_use]
    pub fn handle_position(&self) -> Point {
        self.handle.bounds().origin()
    }

    /// Handle extent.
    #[must_use]
    pub fn handle_size(&self) -> Size {
        self.handle.bounds().size()
    }

    /// The trough.
    #[must_use]
    pub const fn trough(&self) -> &Trough {
        &self.trough
    }

    /// The handle.
    #[must_use]
    pub const fn handle(&self) -> &Interactive {
        &self.handle
    }

    /// Whether the bar responds to input: enabled by the user and with
    /// something to scroll.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled && !self.inert
    }

    /// Whether a viewport is linked.
    #[must_use]
    pub const fn is_linked(&self) -> bool {
        self.link.is_some()
    }

    /// Id of the linked viewport.
    #[must_use]
    pub fn linked_viewport(&self) -> Option<WidgetId> {
        self.link.map(|l| l.viewport)
    }

    /// Link configuration in effect.
    #[must_use]
    pub fn link_config(&self) -> Option<LinkConfig> {
        self.link.map(|l| l.config)
    }

    /// Metrics the handle geometry was last computed from.
    #[must_use]
    pub const fn cached_metrics(&self) -> Option<ViewportMetrics> {
        self.cached
    }

    /// Axes on which the handle can move.
    #[must_use]
    pub const fn scrollable_axes(&self) -> Axes {
        self.scrollable
    }

    /// Whether the trough is held and page stepping.
    #[must_use]
    pub const fn is_paging(&self) -> bool {
        self.paging.is_some()
    }

    /// Whether skins are forced into horizontal orientation.
    #[must_use]
    pub const fn forces_horizontal_skin(&self) -> bool {
        self.horizontal_skin
    }

    /// Installed skin.
    #[must_use]
    pub const fn get_skin(&self) -> Option<&ScrollSkin> {
        self.skin.as_ref()
    }

    /// Whether a timer ticket belongs to this scrollbar or its handle.
    #[must_use]
    pub fn owns_ticket(&self, ticket: TimerTicket) -> bool {
        ticket.owner == self.id || ticket.owner == self.handle.id()
    }

    // =========================================================================
    // Linking
    // =========================================================================

    /// Link to a viewport.
    ///
    /// `metrics` become the cached baseline; call
    /// [`resize_handle`](Self::resize_handle) to fit the handle. Linking to
    /// the already linked viewport again does nothing. Linking to another
    /// viewport replaces the current link.
    pub fn link(&mut self, viewport: WidgetId, metrics: ViewportMetrics, config: LinkConfig) {
        match self.link {
            Some(link) if link.viewport == viewport => {
                log::trace!(
                    "scrollbar {} already linked to viewport {}",
                    self.id.0,
                    viewport.0
                );
                return;
            }
            Some(_) => self.unlink(),
            None => {}
        }

        self.link = Some(Link {
            viewport,
            config,
            metrics,
        });
        self.cached = Some(metrics);
        log::debug!("scrollbar {} linked to viewport {}", self.id.0, viewport.0);
    }

    /// Drop the link. Link-dependent calls become no-ops.
    pub fn unlink(&mut self) {
        match self.link.take() {
            Some(link) => log::debug!(
                "scrollbar {} unlinked from viewport {}",
                self.id.0,
                link.viewport.0
            ),
            None => log::trace!("scrollbar {} was not linked", self.id.0),
        }
        self.cached = None;
        self.stop_paging();
    }

    /// Resize notification from the linked viewport.
    ///
    /// Refits the handle only when `metrics` differ from the cached ones.
    pub fn viewport_resized(
        &mut self,
        metrics: ViewportMetrics,
    ) -> Result<ScrollOffset, GeometryError> {
        let Some(link) = &mut self.link else {
            log::trace!("scrollbar {} ignoring resize: unlinked", self.id.0);
            return Ok(ScrollOffset::default());
        };
        link.metrics = metrics;
        if self.cached == Some(metrics) {
            return Ok(ScrollOffset::default());
        }
        self.resize_handle()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Fit the handle to the visible fraction of the content.
    ///
    /// Returns the content offset implied by the resulting handle position.
    pub fn resize_handle(&mut self) -> Result<ScrollOffset, GeometryError> {
        let trough = self.trough_size();
        if !(trough.width > 0.0 && trough.height > 0.0) {
            return Err(GeometryError::EmptyTrough(trough));
        }
        let Some(link) = self.link else {
            log::trace!("scrollbar {} ignoring resize_handle: unlinked", self.id.0);
            return Ok(ScrollOffset::default());
        };

        let metrics = link.metrics;
        let mut size = trough;
        let mut scrollable = Axes::NONE;
        for axis in Axis::BOTH {
            let visible = metrics.visible.along(axis);
            let content = metrics.content.along(axis);
            if link.config.active.get(axis) && visible < content {
                let length = trough.along(axis);
                let min = self.config.min_handle_length.min(length);
                let fitted = (length * visible.max(0.0) / content).clamp(min, length);
                size = size.with_along(axis, fitted);
                scrollable.set(axis, fitted < length);
            }
        }

        let position = clamp_into(self.handle_position(), size, trough);
        self.handle
            .layout(Rect::new(position.x, position.y, size.width, size.height));
        self.handle.set_drag_axes(scrollable);
        self.handle.set_drag_limits(trough);
        self.scrollable = scrollable;

        let inert = !scrollable.any();
        if inert != self.inert {
            log::debug!(
                "scrollbar {} {}",
                self.id.0,
                if inert { "has nothing to scroll" } else { "can scroll" }
            );
        }
        self.inert = inert;
        self.sync_enabled();
        self.cached = Some(metrics);
        self.render_skin();

        Ok(self.handle_dragged(position))
    }

    /// Resize the trough, refitting the handle.
    pub fn set_trough_size(&mut self, size: Size) -> Result<ScrollOffset, GeometryError> {
        if !(size.width > 0.0 && size.height > 0.0) {
            return Err(GeometryError::EmptyTrough(size));
        }
        self.trough.layout(Rect::from_size(size));
        self.handle.set_drag_limits(size);
        if self.link.is_some() {
            return self.resize_handle();
        }

        let handle = Size::new(
            self.handle_size().width.min(size.width),
            self.handle_size().height.min(size.height),
        );
        let position = clamp_into(self.handle_position(), handle, size);
        self.handle
            .layout(Rect::new(position.x, position.y, handle.width, handle.height));
        self.render_skin();
        Ok(ScrollOffset::default())
    }

    /// Move the scrollbar within its parent.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    // =========================================================================
    // Offset Mapping
    // =========================================================================

    /// Content offset for a handle at `position`.
    ///
    /// On each driven axis the offset is
    /// `position * (content - visible) / (trough - handle) * modifier + offset`;
    /// an axis with nothing to scroll yields just the configured offset.
    #[must_use]
    pub fn handle_dragged(&self, position: Point) -> ScrollOffset {
        let Some(link) = self.link else {
            return ScrollOffset::default();
        };
        let trough = self.trough_size();
        let handle = self.handle_size();
        let mut offset = ScrollOffset::default();
        for axis in Axis::BOTH {
            if !link.config.active.get(axis) {
                continue;
            }
            let base = link.config.content_offset.along(axis);
            let value = if self.scrollable.get(axis) {
                let travel = trough.along(axis) - handle.along(axis);
                let range = link.metrics.content.along(axis) - link.metrics.visible.along(axis);
                position.along(axis) * range / travel * link.config.movement_modifier + base
            } else {
                base
            };
            offset.set(axis, value);
        }
        offset
    }

    /// Handle position that produces `offset`, clamped to the trough.
    ///
    /// Axes that cannot scroll keep the current position.
    #[must_use]
    pub fn handle_position_for(&self, offset: Point) -> Point {
        let current = self.handle_position();
        let Some(link) = self.link else {
            return current;
        };
        let trough = self.trough_size();
        let handle = self.handle_size();
        let modifier = link.config.movement_modifier;
        let mut position = current;
        for axis in Axis::BOTH {
            if !(link.config.active.get(axis) && self.scrollable.get(axis)) || modifier == 0.0 {
                continue;
            }
            let travel = trough.along(axis) - handle.along(axis);
            let range = link.metrics.content.along(axis) - link.metrics.visible.along(axis);
            let base = link.config.content_offset.along(axis);
            let raw = (offset.along(axis) - base) / modifier * travel / range;
            position = position.with_along(axis, raw.clamp(0.0, travel));
        }
        position
    }

    /// Move the handle so the content lands at `offset` (as far as the
    /// trough allows). Returns the resulting offset.
    pub fn scroll_to(&mut self, offset: Point) -> ScrollOffset {
        let position = self.handle_position_for(offset);
        self.move_handle(position)
    }

    fn move_handle(&mut self, position: Point) -> ScrollOffset {
        let position = clamp_into(position, self.handle_size(), self.trough_size());
        self.handle.set_origin(position);
        self.handle_dragged(position)
    }

    // =========================================================================
    // Paging and Wheel
    // =========================================================================

    /// The trough was pressed at `pointer` (trough-local).
    ///
    /// Steps the handle one page toward the pointer, then keeps stepping on
    /// a timer until the press ends.
    pub fn trough_pressed(&mut self, pointer: Point, timers: &mut dyn Scheduler) -> ScrollOffset {
        if !self.is_enabled() || self.link.is_none() {
            log::trace!("scrollbar {} ignoring trough press", self.id.0);
            return ScrollOffset::default();
        }
        if self.on_handle(pointer) {
            return ScrollOffset::default();
        }
        self.paging = Some(pointer);
        let offset = self.page_step(pointer);
        if !self.repeat.is_armed() {
            let ticket = self.repeat.arm();
            timers.schedule(self.config.hold.init_delay_ms, ticket);
        }
        offset
    }

    /// Whether `pointer` hits the handle. The far edge along a scrollable
    /// axis belongs to the trough.
    fn on_handle(&self, pointer: Point) -> bool {
        let bounds = self.handle.bounds();
        bounds.contains_point(&pointer)
            && Axis::BOTH.iter().all(|&axis| {
                !self.scrollable.get(axis)
                    || pointer.along(axis) < bounds.origin().along(axis) + bounds.size().along(axis)
            })
    }

    /// Stop page repeating. Timers in flight become stale.
    pub fn trough_released(&mut self) {
        self.stop_paging();
    }

    fn repeat_page(&mut self, ticket: TimerTicket, timers: &mut dyn Scheduler) -> ScrollOffset {
        if !self.repeat.accepts(ticket) {
            return ScrollOffset::default();
        }
        let Some(pointer) = self.paging else {
            self.repeat.disarm();
            return ScrollOffset::default();
        };
        timers.schedule(self.config.hold.delay_ms, self.repeat.ticket());
        self.page_step(pointer)
    }

    fn page_step(&mut self, pointer: Point) -> ScrollOffset {
        let bounds = self.handle.bounds();
        let trough = self.trough_size();
        let mut position = bounds.origin();
        let mut moved = false;
        for axis in Axis::BOTH {
            if !self.scrollable.get(axis) {
                continue;
            }
            let start = bounds.origin().along(axis);
            let length = bounds.size().along(axis);
            let at = pointer.along(axis);
            if start < at && at < start + length {
                continue;
            }
            let direction = if at <= start { -1.0 } else { 1.0 };
            let target = (start + direction * length * self.config.page_percent)
                .clamp(0.0, trough.along(axis) - length);
            moved |= (target - start).abs() > f32::EPSILON;
            position = position.with_along(axis, target);
        }
        if moved {
            self.move_handle(position)
        } else {
            ScrollOffset::default()
        }
    }

    fn stop_paging(&mut self) {
        self.repeat.disarm();
        self.paging = None;
    }

    /// Wheel turned by `delta` while the pointer was (or was not) over the
    /// linked viewport. Moves the handle by `-delta / wheel_step`.
    pub fn wheel_scrolled(&mut self, delta: f32, pointer_over_viewport: bool) -> ScrollOffset {
        let Some(link) = self.link else {
            log::trace!("scrollbar {} ignoring wheel: unlinked", self.id.0);
            return ScrollOffset::default();
        };
        if !(pointer_over_viewport
            && self.is_enabled()
            && link.config.active.y
            && self.scrollable.y)
        {
            return ScrollOffset::default();
        }
        let speed = delta / self.config.wheel_step;
        let position = self.handle_position();
        let travel = self.trough_size().height - self.handle_size().height;
        let y = (position.y - speed).clamp(0.0, travel);
        self.move_handle(Point::new(position.x, y))
    }

    // =========================================================================
    // Skin and State
    // =========================================================================

    /// Install a skin and render it at the current geometry.
    pub fn set_skin(&mut self, skin: ScrollSkin) {
        self.skin = Some(skin);
        self.render_skin();
    }

    /// Install rendered state images for the trough and the handle.
    pub fn install_skin_images(&mut self, images: SkinImages) {
        self.trough.set_images(images.trough);
        self.handle.set_images(StateImages::from(images.handle));
    }

    fn render_skin(&mut self) {
        if let Some(skin) = &self.skin {
            let images = skin.render(self.trough_size(), self.handle_size(), self.horizontal_skin);
            self.install_skin_images(images);
        }
    }

    /// Accept input again (if there is something to scroll).
    pub fn enable(&mut self) {
        self.enabled = true;
        self.sync_enabled();
        log::debug!("scrollbar {} enabled", self.id.0);
    }

    /// Ignore input and show the disabled images.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.sync_enabled();
        log::debug!("scrollbar {} disabled", self.id.0);
    }

    fn sync_enabled(&mut self) {
        let enabled = self.is_enabled();
        self.trough.set_enabled(enabled);
        self.handle.set_enabled(enabled);
        if !enabled {
            self.stop_paging();
        }
    }
}

/// Clamp a span of `size` at `position` into `[0, limits]` per axis.
fn clamp_into(position: Point, size: Size, limits: Size) -> Point {
    Point::new(
        limit_move(position.x, size.width, 0.0, limits.width),
        limit_move(position.y, size.height, 0.0, limits.height),
    )
}

impl Widget for Scrollbar {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.trough_size()).with_origin(self.origin)
    }

    fn layout(&mut self, bounds: Rect) {
        self.origin = bounds.origin();
        if bounds.size() != self.trough_size() {
            if let Err(err) = self.set_trough_size(bounds.size()) {
                log::warn!("scrollbar {} layout rejected: {err}", self.id.0);
            }
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.push_translate(self.origin);
        self.trough.paint(canvas);
        self.handle.paint(canvas);
        canvas.pop_translate();
    }

    fn event(&mut self, event: &Event, timers: &mut dyn Scheduler) -> Option<Message> {
        let local = event.translated(self.origin);
        let offset = match &local {
            Event::Timer { ticket } if ticket.owner == self.id => {
                self.repeat_page(*ticket, timers)
            }
            _ if !self.is_enabled() => ScrollOffset::default(),
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.on_handle(*position) {
                    self.handle.event(&local, timers);
                    ScrollOffset::default()
                } else if self.trough.bounds().contains_point(position) {
                    self.trough.event(&local, timers);
                    self.trough_pressed(*position, timers)
                } else {
                    ScrollOffset::default()
                }
            }
            Event::MouseMove { position } => {
                self.trough.event(&local, timers);
                if self.paging.is_some() {
                    self.paging = Some(*position);
                }
                match self.handle.event(&local, timers) {
                    Some(msg) if msg.is::<Moved>() => self.handle_dragged(self.handle_position()),
                    _ => ScrollOffset::default(),
                }
            }
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } => {
                self.handle.event(&local, timers);
                self.trough.event(&local, timers);
                self.stop_paging();
                ScrollOffset::default()
            }
            Event::MouseEnter => {
                self.trough.event(&local, timers);
                ScrollOffset::default()
            }
            Event::MouseLeave => {
                self.trough.event(&local, timers);
                self.handle.event(&local, timers);
                ScrollOffset::default()
            }
            _ => ScrollOffset::default(),
        };

        if offset.is_empty() {
            None
        } else {
            Some(Box::new(offset))
        }
    }

    fn is_interactive(&self) -> bool {
        self.is_enabled()
    }

    fn reevaluate_hover(&mut self, pointer: Point) {
        let local = pointer - self.origin;
        self.trough.reevaluate_hover(local);
        self.handle.reevaluate_hover(local);
    }
}
