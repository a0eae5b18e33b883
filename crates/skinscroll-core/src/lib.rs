//! Core types and traits for skinscroll.
//!
//! This crate provides the vocabulary shared by every widget:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Axes`]
//! - Pointer, wheel, resize and timer input: [`Event`]
//! - The primitive image type: [`Pixmap`]
//! - Paint targets: [`Canvas`], [`RecordingCanvas`]
//! - Host timer scheduling: [`Scheduler`], [`TimerQueue`], [`RepeatGate`]
//! - The [`Widget`] trait
//! - Error types: [`GeometryError`], [`AssetError`]

mod canvas;
mod color;
mod error;
mod event;
mod geometry;
mod pixmap;
mod timer;
pub mod widget;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use color::Color;
pub use error::{AssetError, GeometryError};
pub use event::{Event, MouseButton};
pub use geometry::{limit_move, Axes, Axis, Point, Rect, Size};
pub use pixmap::Pixmap;
pub use timer::{NoTimers, RepeatGate, Scheduler, TimerQueue, TimerTicket};
pub use widget::{Message, Widget, WidgetId};
