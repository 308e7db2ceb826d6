//! The typed formatting/settings model.
//!
//! Three cards mirror the host formatting pane: header text, header icons
//! and the date inputs themselves. Settings arrive as plain data (hex color
//! strings, percentages, point sizes); validation and color resolution
//! happen here so the reconciliation core never sees presentation state.

pub mod color;
pub mod locale;

pub use color::Rgba;
pub use locale::UiStrings;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{SlicerError, SlicerResult};

/// Formatting card for the two date input boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateInputSettings {
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_color")]
    pub font_color: String,
    #[serde(default = "default_input_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default = "default_background_color")]
    pub input_background_color: String,
    #[serde(default)]
    pub input_background_transparency: u8,
    #[serde(default = "default_border_color")]
    pub input_border_color: String,
}

impl DateInputSettings {
    pub fn validate(&self) -> SlicerResult<()> {
        validate_font("date input", &self.font_family, self.font_size)?;
        Rgba::from_hex(&self.font_color)?;
        Rgba::from_hex_with_transparency(
            &self.input_background_color,
            self.input_background_transparency,
        )?;
        Rgba::from_hex(&self.input_border_color)?;
        Ok(())
    }

    /// Input background with the transparency slider applied.
    pub fn background_rgba(&self) -> SlicerResult<Rgba> {
        Rgba::from_hex_with_transparency(
            &self.input_background_color,
            self.input_background_transparency,
        )
    }

    pub fn font_rgba(&self) -> SlicerResult<Rgba> {
        Rgba::from_hex(&self.font_color)
    }

    pub fn border_rgba(&self) -> SlicerResult<Rgba> {
        Rgba::from_hex(&self.input_border_color)
    }
}

impl Default for DateInputSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_color: default_font_color(),
            font_size: default_input_font_size(),
            bold: false,
            italic: false,
            underline: false,
            input_background_color: default_background_color(),
            input_background_transparency: 0,
            input_border_color: default_border_color(),
        }
    }
}

/// Formatting card for the header line above the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderTextSettings {
    /// Custom title; empty falls back to the bound field's display name.
    #[serde(default)]
    pub header_text: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_color")]
    pub font_color: String,
    #[serde(default = "default_header_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default = "default_background_color")]
    pub header_background_color: String,
    #[serde(default)]
    pub header_background_transparency: u8,
    #[serde(default = "default_header_margin")]
    pub header_margin_top: f64,
    #[serde(default = "default_header_margin")]
    pub header_margin_bottom: f64,
}

impl HeaderTextSettings {
    pub fn validate(&self) -> SlicerResult<()> {
        validate_font("header", &self.font_family, self.font_size)?;
        Rgba::from_hex(&self.font_color)?;
        Rgba::from_hex_with_transparency(
            &self.header_background_color,
            self.header_background_transparency,
        )?;
        for (name, margin) in [
            ("header margin top", self.header_margin_top),
            ("header margin bottom", self.header_margin_bottom),
        ] {
            if !margin.is_finite() || margin < 0.0 {
                return Err(SlicerError::InvalidSettings(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// The header title fallback chain: configured text, then the bound
    /// field's display name, then the locale placeholder.
    #[must_use]
    pub fn resolve_title(&self, field_display_name: Option<&str>, strings: &UiStrings) -> String {
        let configured = self.header_text.trim();
        if !configured.is_empty() {
            return configured.to_owned();
        }
        match field_display_name {
            Some(name) if !name.trim().is_empty() => name.to_owned(),
            _ => strings.field_placeholder.clone(),
        }
    }

    pub fn background_rgba(&self) -> SlicerResult<Rgba> {
        Rgba::from_hex_with_transparency(
            &self.header_background_color,
            self.header_background_transparency,
        )
    }

    pub fn font_rgba(&self) -> SlicerResult<Rgba> {
        Rgba::from_hex(&self.font_color)
    }
}

impl Default for HeaderTextSettings {
    fn default() -> Self {
        Self {
            header_text: String::new(),
            font_family: default_font_family(),
            font_color: default_font_color(),
            font_size: default_header_font_size(),
            bold: false,
            italic: false,
            underline: false,
            header_background_color: default_background_color(),
            header_background_transparency: 0,
            header_margin_top: default_header_margin(),
            header_margin_bottom: default_header_margin(),
        }
    }
}

/// Formatting card for the clear/reset header icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderIconSettings {
    #[serde(default = "default_icon_color")]
    pub clear_icon_color: String,
    #[serde(default = "default_icon_color")]
    pub reset_icon_color: String,
}

impl HeaderIconSettings {
    pub fn validate(&self) -> SlicerResult<()> {
        Rgba::from_hex(&self.clear_icon_color)?;
        Rgba::from_hex(&self.reset_icon_color)?;
        Ok(())
    }

    pub fn clear_rgba(&self) -> SlicerResult<Rgba> {
        Rgba::from_hex(&self.clear_icon_color)
    }

    pub fn reset_rgba(&self) -> SlicerResult<Rgba> {
        Rgba::from_hex(&self.reset_icon_color)
    }
}

impl Default for HeaderIconSettings {
    fn default() -> Self {
        Self {
            clear_icon_color: default_icon_color(),
            reset_icon_color: default_icon_color(),
        }
    }
}

/// The complete formatting model in pane order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlicerSettings {
    #[serde(default)]
    pub header_text: HeaderTextSettings,
    #[serde(default)]
    pub header_icons: HeaderIconSettings,
    #[serde(default)]
    pub date_inputs: DateInputSettings,
}

/// One card of the formatting-model descriptor surfaced to the host pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    pub display_name: String,
    pub slices: Vec<String>,
}

impl SlicerSettings {
    pub fn validate(&self) -> SlicerResult<()> {
        self.header_text.validate()?;
        self.header_icons.validate()?;
        self.date_inputs.validate()?;
        Ok(())
    }

    /// Sets the custom header title.
    #[must_use]
    pub fn with_header_text(mut self, text: impl Into<String>) -> Self {
        self.header_text.header_text = text.into();
        self
    }

    /// Replaces the header text card.
    #[must_use]
    pub fn with_header_text_settings(mut self, card: HeaderTextSettings) -> Self {
        self.header_text = card;
        self
    }

    /// Replaces the header icon card.
    #[must_use]
    pub fn with_header_icons(mut self, card: HeaderIconSettings) -> Self {
        self.header_icons = card;
        self
    }

    /// Replaces the date input card.
    #[must_use]
    pub fn with_date_inputs(mut self, card: DateInputSettings) -> Self {
        self.date_inputs = card;
        self
    }

    /// Card and slice names in pane declaration order.
    ///
    /// Card keys are the wire identifiers the host persists values under,
    /// so they stay camelCase regardless of this crate's own naming.
    #[must_use]
    pub fn formatting_model(&self) -> IndexMap<String, CardDescriptor> {
        let mut model = IndexMap::new();
        model.insert(
            "dateHeaderText".to_owned(),
            CardDescriptor {
                display_name: "Header text".to_owned(),
                slices: vec![
                    "headerText".to_owned(),
                    "fontFamily".to_owned(),
                    "fontColor".to_owned(),
                    "fontSize".to_owned(),
                    "bold".to_owned(),
                    "italic".to_owned(),
                    "underline".to_owned(),
                    "headerBackgroundColor".to_owned(),
                    "headerBackgroundTransparency".to_owned(),
                    "headerMarginTop".to_owned(),
                    "headerMarginBottom".to_owned(),
                ],
            },
        );
        model.insert(
            "dateHeaderIcons".to_owned(),
            CardDescriptor {
                display_name: "Header icons".to_owned(),
                slices: vec!["clearIconColor".to_owned(), "resetIconColor".to_owned()],
            },
        );
        model.insert(
            "dateInputs".to_owned(),
            CardDescriptor {
                display_name: "Date inputs".to_owned(),
                slices: vec![
                    "fontFamily".to_owned(),
                    "fontColor".to_owned(),
                    "fontSize".to_owned(),
                    "bold".to_owned(),
                    "italic".to_owned(),
                    "underline".to_owned(),
                    "inputBackgroundColor".to_owned(),
                    "inputBackgroundTransparency".to_owned(),
                    "inputBorderColor".to_owned(),
                ],
            },
        );
        model
    }
}

fn validate_font(card: &str, family: &str, size: f64) -> SlicerResult<()> {
    if family.trim().is_empty() {
        return Err(SlicerError::InvalidSettings(format!(
            "{card} font family must not be empty"
        )));
    }
    if !size.is_finite() || size <= 0.0 {
        return Err(SlicerError::InvalidSettings(format!(
            "{card} font size must be finite and > 0"
        )));
    }
    Ok(())
}

fn default_font_family() -> String {
    "Segoe UI".to_owned()
}

fn default_font_color() -> String {
    "#333333".to_owned()
}

fn default_input_font_size() -> f64 {
    12.0
}

fn default_header_font_size() -> f64 {
    14.0
}

fn default_background_color() -> String {
    "#ffffff".to_owned()
}

fn default_border_color() -> String {
    "#a6a6a6".to_owned()
}

fn default_icon_color() -> String {
    "#666666".to_owned()
}

fn default_header_margin() -> f64 {
    6.0
}

#[cfg(test)]
mod tests {
    use super::{SlicerSettings, UiStrings};

    #[test]
    fn default_model_validates() {
        SlicerSettings::default()
            .validate()
            .expect("defaults are valid");
    }

    #[test]
    fn malformed_color_fails_validation() {
        let mut settings = SlicerSettings::default();
        settings.date_inputs.input_border_color = "a6a6a6".to_owned();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn negative_margin_fails_validation() {
        let mut settings = SlicerSettings::default();
        settings.header_text.header_margin_top = -1.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn header_title_falls_back_text_then_field_then_placeholder() {
        let strings = UiStrings::for_locale("en-US");
        let settings = SlicerSettings::default().with_header_text("Shipping window");
        assert_eq!(
            settings
                .header_text
                .resolve_title(Some("Order Date"), &strings),
            "Shipping window"
        );
        let settings = SlicerSettings::default();
        assert_eq!(
            settings
                .header_text
                .resolve_title(Some("Order Date"), &strings),
            "Order Date"
        );
        assert_eq!(settings.header_text.resolve_title(None, &strings), "Field");
    }

    #[test]
    fn formatting_model_preserves_pane_order() {
        let model = SlicerSettings::default().formatting_model();
        let cards: Vec<&str> = model.keys().map(String::as_str).collect();
        assert_eq!(cards, ["dateHeaderText", "dateHeaderIcons", "dateInputs"]);
        assert_eq!(model["dateHeaderIcons"].slices.len(), 2);
        assert_eq!(model["dateHeaderText"].slices[0], "headerText");
    }

    #[test]
    fn settings_deserialize_from_partial_json() {
        let settings: SlicerSettings = serde_json::from_str(
            r#"{ "date_inputs": { "font_size": 16.0 } }"#,
        )
        .expect("partial settings JSON");
        assert!((settings.date_inputs.font_size - 16.0).abs() < 1e-12);
        assert_eq!(settings.date_inputs.font_family, "Segoe UI");
        assert_eq!(settings.header_text.font_size, 14.0);
    }
}
