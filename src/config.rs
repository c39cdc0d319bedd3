//! # Player Settings
//!
//! Display and preview preferences, read from YAML with kebab-case keys.
//! Every key is optional; unknown keys are rejected so typos surface.
//!
//! ```yaml
//! unit-size: 80
//! display-mode: dynamic
//! lookahead: 3
//! tempo: 90
//! audio: true
//! ```
//!
//! Values are normalized after loading: the unit size is clamped to
//! `[min-unit-size, max-unit-size]` and a tempo that is not positive
//! falls back to 60.

use serde::{Deserialize, Serialize};

use crate::controls::Action;
use crate::error::CardsError;
use crate::layout::DEFAULT_GAP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Multi-row grid of every card
    #[default]
    Static,
    /// Active card plus a short lookahead
    Dynamic,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Static => DisplayMode::Dynamic,
            DisplayMode::Dynamic => DisplayMode::Static,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    pub unit_size: f64,
    pub gap: f64,
    pub display_mode: DisplayMode,
    pub lookahead: usize,
    pub tempo: f64,
    pub audio: bool,
    pub min_unit_size: f64,
    pub max_unit_size: f64,
    pub zoom_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit_size: 60.0,
            gap: DEFAULT_GAP,
            display_mode: DisplayMode::Static,
            lookahead: 4,
            tempo: 60.0,
            audio: false,
            min_unit_size: 20.0,
            max_unit_size: 200.0,
            zoom_step: 10.0,
        }
    }
}

impl Settings {
    /// Parse settings from a YAML document. An empty document gives defaults.
    pub fn from_yaml(content: &str) -> Result<Self, CardsError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(content)
            .map_err(|e| CardsError::ConfigError(e.to_string()))?;
        Ok(settings.normalized())
    }

    pub fn to_yaml(&self) -> Result<String, CardsError> {
        serde_yaml::to_string(self).map_err(|e| CardsError::ConfigError(e.to_string()))
    }

    /// Fix up out-of-range values instead of rejecting them.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.min_unit_size > 0.0) {
            log::warn!("min-unit-size {} is not positive, using default", self.min_unit_size);
            self.min_unit_size = defaults.min_unit_size;
        }
        if !(self.max_unit_size >= self.min_unit_size) {
            log::warn!("max-unit-size {} below min-unit-size, using min", self.max_unit_size);
            self.max_unit_size = self.min_unit_size;
        }
        if self.unit_size.is_nan() {
            self.unit_size = defaults.unit_size;
        }
        self.unit_size = self.unit_size.clamp(self.min_unit_size, self.max_unit_size);
        if !(self.tempo.is_finite() && self.tempo > 0.0) {
            self.tempo = defaults.tempo;
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            self.gap = defaults.gap;
        }
        self
    }

    /// Apply a non-navigation action. Returns whether anything changed.
    pub fn apply(&mut self, action: Action) -> bool {
        let before = self.clone();
        match action {
            Action::ZoomIn => {
                self.unit_size = (self.unit_size + self.zoom_step).min(self.max_unit_size);
            }
            Action::ZoomOut => {
                self.unit_size = (self.unit_size - self.zoom_step).max(self.min_unit_size);
            }
            Action::ToggleMode => self.display_mode = self.display_mode.toggled(),
            Action::ToggleAudio => self.audio = !self.audio,
            Action::Next | Action::Prev | Action::Reset => {}
        }
        *self != before
    }
}
