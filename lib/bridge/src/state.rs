//! Per-view UI state owned by the home page.

/// Whether the "Communication Successful." notice is on screen.
///
/// Starts hidden. Only an inbound acknowledgement shows it; only the user
/// dismisses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoticeState {
    visible: bool,
}

impl NoticeState {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

/// The animation toggle: each activation flips the image rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinState {
    rotated: bool,
}

impl SpinState {
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.rotated
    }

    /// Flips the toggle and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.rotated = !self.rotated;
        self.rotated
    }

    /// Target rotation for the animated element.
    #[must_use]
    pub fn rotation_degrees(self) -> u16 {
        if self.rotated { 360 } else { 0 }
    }
}
