//! Two-position switching on completed pushes.

use crate::visual::{ToggleImages, ToggleState};

/// Flips between off and on each time a push completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toggleable {
    state: ToggleState,
    images: ToggleImages,
}

impl Toggleable {
    /// Create in `state` with the given image table.
    #[must_use]
    pub const fn new(state: ToggleState, images: ToggleImages) -> Self {
        Self { state, images }
    }

    /// Current position.
    #[must_use]
    pub const fn state(&self) -> ToggleState {
        self.state
    }

    /// Set the position without a push.
    pub fn set_state(&mut self, state: ToggleState) {
        self.state = state;
    }

    /// Flip and return the new position.
    pub fn flip(&mut self) -> ToggleState {
        self.state = self.state.flipped();
        self.state
    }

    /// Image table.
    #[must_use]
    pub const fn images(&self) -> &ToggleImages {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        let mut toggle = Toggleable::default();
        assert_eq!(toggle.flip(), ToggleState::On);
        assert_eq!(toggle.flip(), ToggleState::Off);
    }

    #[test]
    fn test_set_state() {
        let mut toggle = Toggleable::default();
        toggle.set_state(ToggleState::On);
        assert!(toggle.state().is_on());
    }
}
