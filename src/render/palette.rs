use serde::{Deserialize, Serialize};

use crate::error::{FacetError, FacetResult};
use crate::render::Color;

/// Hex tokens of the stock dashboard color scheme.
pub const DEFAULT_PALETTE_TOKENS: [&str; 6] = [
    "#1A85FF", "#005AB5", "#08366F", "#EE3177", "#D41159", "#666666",
];

/// The stock scheme as colors, in the same order as [`DEFAULT_PALETTE_TOKENS`].
pub const DEFAULT_PALETTE_COLORS: [Color; 6] = [
    Color::from_rgb8(0x1A, 0x85, 0xFF),
    Color::from_rgb8(0x00, 0x5A, 0xB5),
    Color::from_rgb8(0x08, 0x36, 0x6F),
    Color::from_rgb8(0xEE, 0x31, 0x77),
    Color::from_rgb8(0xD4, 0x11, 0x59),
    Color::from_rgb8(0x66, 0x66, 0x66),
];

/// Ordered, non-empty list of category colors.
///
/// Lookups cycle: category `i` gets color `i mod len`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> FacetResult<Self> {
        if colors.is_empty() {
            return Err(FacetError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self { colors })
    }

    pub fn from_hex_tokens<I, S>(tokens: I) -> FacetResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = tokens
            .into_iter()
            .map(|token| Color::from_hex(token.as_ref()))
            .collect::<FacetResult<Vec<_>>>()?;
        Self::new(colors)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color for the category at `index`, cycling past the end.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE_COLORS.to_vec(),
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = FacetError;

    fn try_from(colors: Vec<Color>) -> FacetResult<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
