use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FacetError, FacetResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a `#RRGGBB` (or `#RRGGBBAA` when translucent) token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses a `#RRGGBB` or `#RRGGBBAA` token. The leading `#` is optional.
    pub fn from_hex(token: &str) -> FacetResult<Self> {
        let digits = token.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(FacetError::InvalidData(format!(
                "color token `{token}` must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let channel = |start: usize| -> FacetResult<f64> {
            u8::from_str_radix(&digits[start..start + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| {
                    FacetError::InvalidData(format!("color token `{token}` is not hexadecimal"))
                })
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha),
        );
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn validate(self) -> FacetResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(FacetError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = FacetError;

    fn try_from(token: String) -> FacetResult<Self> {
        Self::from_hex(&token)
    }
}
