use serde::{Deserialize, Serialize};

use crate::error::{SlicerError, SlicerResult};
use crate::settings::SlicerSettings;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load slicer
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlicerEngineConfig {
    /// BCP 47 tag used to resolve the clear/reset labels and the header
    /// placeholder.
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub settings: SlicerSettings,
}

impl SlicerEngineConfig {
    /// Creates a config with the default locale and formatting model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host locale tag.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Replaces the whole formatting model.
    #[must_use]
    pub fn with_settings(mut self, settings: SlicerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the custom header title.
    #[must_use]
    pub fn with_header_text(mut self, text: impl Into<String>) -> Self {
        self.settings.header_text.header_text = text.into();
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> SlicerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SlicerError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> SlicerResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SlicerError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for SlicerEngineConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            settings: SlicerSettings::default(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_owned()
}
