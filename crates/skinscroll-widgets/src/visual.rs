//! Visual states and the image tables that map them to pixmaps.

use serde::{Deserialize, Serialize};
use skinscroll_core::{Color, Pixmap};
use std::path::Path;
use std::sync::Arc;

/// Which of the four state images an element shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VisualState {
    /// Pointer elsewhere
    #[default]
    Rest,
    /// Pointer over the element
    Hover,
    /// Button held on the element
    Pressed,
    /// Element ignores input
    Disabled,
}

impl VisualState {
    /// All states in slot order.
    pub const ALL: [Self; 4] = [Self::Rest, Self::Hover, Self::Pressed, Self::Disabled];

    /// Slot index into a 4-entry image set.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Rest => 0,
            Self::Hover => 1,
            Self::Pressed => 2,
            Self::Disabled => 3,
        }
    }

    /// Flat fill used when no image is available for this state.
    #[must_use]
    pub const fn fallback_color(self) -> Color {
        match self {
            Self::Rest | Self::Disabled => Color::GRAY,
            Self::Hover => Color::WHITE,
            Self::Pressed => Color::RED,
        }
    }
}

/// One optional image per [`VisualState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateImages {
    slots: [Option<Arc<Pixmap>>; 4],
}

impl StateImages {
    /// Create from explicit slots in [`VisualState::ALL`] order.
    #[must_use]
    pub const fn new(slots: [Option<Arc<Pixmap>>; 4]) -> Self {
        Self { slots }
    }

    /// Every state shows the same image.
    #[must_use]
    pub fn uniform(image: Arc<Pixmap>) -> Self {
        Self::new([
            Some(Arc::clone(&image)),
            Some(Arc::clone(&image)),
            Some(Arc::clone(&image)),
            Some(image),
        ])
    }

    /// Fill slots in order from `images`.
    ///
    /// With fewer than four images the remaining slots stay empty, except
    /// that the disabled slot falls back to the rest image.
    #[must_use]
    pub fn from_images(images: impl IntoIterator<Item = Arc<Pixmap>>) -> Self {
        let mut slots: [Option<Arc<Pixmap>>; 4] = Default::default();
        let mut count = 0;
        for (slot, image) in slots.iter_mut().zip(images) {
            *slot = Some(image);
            count += 1;
        }
        if count < 4 {
            slots[3] = slots[0].clone();
        }
        Self { slots }
    }

    /// Load images from paths with [`StateImages::from_images`] semantics.
    ///
    /// Paths that fail to load become empty placeholders (with a warning).
    #[must_use]
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Self {
        Self::from_images(
            paths
                .iter()
                .take(4)
                .map(|p| Arc::new(Pixmap::open_or_placeholder(p))),
        )
    }

    /// Image for `state`, if one is installed.
    #[must_use]
    pub fn get(&self, state: VisualState) -> Option<&Arc<Pixmap>> {
        self.slots[state.index()].as_ref()
    }

    /// True when no slot holds an image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl From<[Arc<Pixmap>; 4]> for StateImages {
    fn from(images: [Arc<Pixmap>; 4]) -> Self {
        Self::new(images.map(Some))
    }
}

/// The two positions of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToggleState {
    /// Switched off
    #[default]
    Off,
    /// Switched on
    On,
}

impl ToggleState {
    /// Create from a boolean.
    #[must_use]
    pub const fn from_bool(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }

    /// True for [`ToggleState::On`].
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// The other position.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }
}

/// Lookup table `(ToggleState, VisualState) -> image`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleImages {
    table: [StateImages; 2],
}

impl ToggleImages {
    /// Create from the image sets shown while off and while on.
    #[must_use]
    pub fn new(off: StateImages, on: StateImages) -> Self {
        Self { table: [off, on] }
    }

    /// Image for the given toggle position and visual state.
    #[must_use]
    pub fn get(&self, toggle: ToggleState, visual: VisualState) -> Option<&Arc<Pixmap>> {
        self.table[toggle.index()].get(visual)
    }
}
