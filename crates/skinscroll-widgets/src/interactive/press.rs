//! Button press tracking.

use serde::{Deserialize, Serialize};

/// When a press-reactive element fires its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressMode {
    /// Fire as soon as the button goes down
    #[default]
    OnPress,
    /// Fire when the button is released over the element
    OnRelease,
}

/// Tracks the left button on an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressReactive {
    mode: PressMode,
    pressed: bool,
}

impl PressReactive {
    /// Create in the given mode.
    #[must_use]
    pub const fn new(mode: PressMode) -> Self {
        Self {
            mode,
            pressed: false,
        }
    }

    /// Firing mode.
    #[must_use]
    pub const fn mode(&self) -> PressMode {
        self.mode
    }

    /// Whether the button is held on the element.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Button went down on the element. Returns true if the action fires.
    pub fn press(&mut self) -> bool {
        self.pressed = true;
        self.mode == PressMode::OnPress
    }

    /// Button released. Returns true if this completes a push, meaning the
    /// press started on the element and the pointer is still over it.
    pub fn release(&mut self, over: bool) -> bool {
        let completed = self.pressed && over;
        self.pressed = false;
        completed
    }

    /// Drop any press in progress without completing it.
    pub fn cancel(&mut self) {
        self.pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_press_fires_on_down() {
        let mut press = PressReactive::new(PressMode::OnPress);
        assert!(press.press());
        assert!(press.is_pressed());
    }

    #[test]
    fn test_on_release_fires_only_when_over() {
        let mut press = PressReactive::new(PressMode::OnRelease);
        assert!(!press.press());
        assert!(press.release(true));

        press.press();
        assert!(!press.release(false));
        assert!(!press.is_pressed());
    }

    #[test]
    fn test_release_without_press_is_not_a_push() {
        let mut press = PressReactive::new(PressMode::OnRelease);
        assert!(!press.release(true));
    }

    #[test]
    fn test_cancel() {
        let mut press = PressReactive::default();
        press.press();
        press.cancel();
        assert!(!press.release(true));
    }
}
