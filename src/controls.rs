//! Keyboard bindings for the player.
//!
//! Hosts forward `KeyboardEvent.key` strings; navigation actions go to the
//! [`crate::playback::Stepper`], the rest to [`crate::Settings::apply`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Next,
    Prev,
    Reset,
    ZoomIn,
    ZoomOut,
    ToggleMode,
    ToggleAudio,
}

impl Action {
    /// Map a key name to an action. Letter keys are case-insensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        let action = match key {
            "ArrowRight" | " " | "Space" | "Spacebar" | "Enter" => Action::Next,
            "ArrowLeft" | "Backspace" => Action::Prev,
            "Home" | "Escape" => Action::Reset,
            "+" | "=" => Action::ZoomIn,
            "-" | "_" => Action::ZoomOut,
            k if k.eq_ignore_ascii_case("m") => Action::ToggleMode,
            k if k.eq_ignore_ascii_case("a") => Action::ToggleAudio,
            _ => return None,
        };
        Some(action)
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, Action::Next | Action::Prev | Action::Reset)
    }
}
