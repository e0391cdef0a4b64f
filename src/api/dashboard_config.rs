use serde::{Deserialize, Serialize};

use crate::core::ColumnId;
use crate::error::{FacetError, FacetResult};
use crate::render::{ChartKind, DEFAULT_PALETTE_TOKENS, Palette};

/// One multi-select filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDimension {
    pub column: ColumnId,
    /// Control label; defaults to the column name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FilterDimension {
    #[must_use]
    pub fn new(column: impl Into<ColumnId>) -> Self {
        Self {
            column: column.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.column.as_str())
    }
}

/// One chart panel of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub column: ColumnId,
    pub title: String,
    #[serde(default = "default_panel_kind")]
    pub kind: ChartKind,
}

impl PanelConfig {
    #[must_use]
    pub fn new(column: impl Into<ColumnId>, title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            column: column.into(),
            title: title.into(),
            kind,
        }
    }

    #[must_use]
    pub fn proportion(column: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self::new(column, title, ChartKind::Proportion)
    }

    #[must_use]
    pub fn count(column: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self::new(column, title, ChartKind::Count)
    }
}

/// Public dashboard layout configuration.
///
/// This type is serializable so host applications can keep their panel
/// layout in a JSON file instead of wiring it in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_palette_tokens")]
    pub palette: Vec<String>,
    #[serde(default)]
    pub filters: Vec<FilterDimension>,
    #[serde(default)]
    pub panels: Vec<PanelConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            palette: default_palette_tokens(),
            filters: Vec::new(),
            panels: Vec::new(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter control.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterDimension) -> Self {
        self.filters.push(filter);
        self
    }

    /// Appends a chart panel.
    #[must_use]
    pub fn with_panel(mut self, panel: PanelConfig) -> Self {
        self.panels.push(panel);
        self
    }

    /// Replaces the palette with hex color tokens.
    #[must_use]
    pub fn with_palette<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Parses the configured palette.
    pub fn resolve_palette(&self) -> FacetResult<Palette> {
        Palette::from_hex_tokens(&self.palette)
    }

    pub fn from_json_str(input: &str) -> FacetResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| FacetError::InvalidData(format!("failed to parse dashboard config: {e}")))
    }

    pub fn to_json_pretty(&self) -> FacetResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            FacetError::InvalidData(format!("failed to serialize dashboard config: {e}"))
        })
    }
}

fn default_palette_tokens() -> Vec<String> {
    DEFAULT_PALETTE_TOKENS
        .iter()
        .map(|token| (*token).to_owned())
        .collect()
}

fn default_panel_kind() -> ChartKind {
    ChartKind::Proportion
}
