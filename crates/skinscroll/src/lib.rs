//! skinscroll: image-skinned scrollbars and mouse-driven widget primitives.
//!
//! The core vocabulary is re-exported at the top level; widgets live in
//! [`widgets`] and their common types are re-exported here too.
//!
//! ```
//! use skinscroll::{Axes, Size, Viewport};
//!
//! let mut viewport = Viewport::new(Size::new(200.0, 200.0), 16.0, Axes::NONE, Axes::BOTH)?;
//! viewport.set_content_size(Size::new(180.0, 800.0))?;
//! assert!(viewport.shown_bars().y);
//! # Ok::<(), skinscroll::GeometryError>(())
//! ```

pub use skinscroll_core::*;
pub use skinscroll_widgets as widgets;

pub use skinscroll_widgets::{
    Background, ContentScrolled, Interactive, LinkConfig, ScrollOffset, ScrollSkin, Scrollbar,
    ScrollbarConfig, SkinSpec, Viewport,
};
