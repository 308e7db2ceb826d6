//! Hex color resolution for the formatting model.
//!
//! Hosts express colors as `#rrggbb` strings plus a separate transparency
//! percentage slider; rendering layers want normalized RGBA. Resolution
//! happens once at settings validation time.

use serde::{Deserialize, Serialize};

use crate::error::{SlicerError, SlicerResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parses `#rrggbb` (or the `#rgb` shorthand) into an opaque color.
    pub fn from_hex(hex: &str) -> SlicerResult<Self> {
        Self::from_hex_with_transparency(hex, 0)
    }

    /// Parses a hex color and applies a transparency percentage.
    ///
    /// Transparency runs opposite to alpha: 0 is fully opaque, 100 fully
    /// transparent.
    pub fn from_hex_with_transparency(hex: &str, transparency: u8) -> SlicerResult<Self> {
        if transparency > 100 {
            return Err(SlicerError::InvalidSettings(format!(
                "transparency must be within 0..=100, got {transparency}"
            )));
        }
        let digits = hex.strip_prefix('#').ok_or_else(|| malformed(hex))?;
        let expanded: String;
        let digits = match digits.len() {
            3 => {
                expanded = digits.chars().flat_map(|c| [c, c]).collect();
                expanded.as_str()
            }
            6 => digits,
            _ => return Err(malformed(hex)),
        };
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed(hex));
        }
        let channel = |lo: usize, hi: usize| {
            u8::from_str_radix(&digits[lo..hi], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| malformed(hex))
        };
        Ok(Self {
            red: channel(0, 2)?,
            green: channel(2, 4)?,
            blue: channel(4, 6)?,
            alpha: f64::from(100 - transparency) / 100.0,
        })
    }

    /// CSS `rgba()` form for host style plumbing.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            self.alpha
        )
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

fn malformed(hex: &str) -> SlicerError {
    SlicerError::InvalidSettings(format!("malformed hex color `{hex}`"))
}
