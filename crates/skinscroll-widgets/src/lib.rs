//! Widgets for skinscroll.
//!
//! - [`Interactive`]: image-backed elements assembled from hover, press,
//!   hold, drag and toggle capabilities
//! - [`Background`]: a single image
//! - [`Trough`] and [`Scrollbar`]: a track with a draggable handle that
//!   drives a linked viewport's content offset
//! - [`Viewport`]: clipped content with automatic or fixed bars
//! - [`ScrollSkin`]: renders sprite manifests into bar images

mod background;
pub mod interactive;
pub mod scrollbar;
pub mod skin;
mod trough;
pub mod viewport;
mod visual;

pub use background::Background;
pub use interactive::{
    Activated, Draggable, HoldDelays, HoldRepeating, HoverReactive, Interactive, Moved, PressMode,
    PressReactive, Toggleable, Toggled,
};
pub use scrollbar::{LinkConfig, ScrollOffset, Scrollbar, ScrollbarConfig, ViewportMetrics};
pub use skin::{
    render_bar, ScrollSkin, SkinImages, SkinPair, SkinSpec, SkinSpecError, MAX_PAIRS,
};
pub use trough::Trough;
pub use viewport::{ContentScrolled, Viewport};
pub use visual::{StateImages, ToggleImages, ToggleState, VisualState};
