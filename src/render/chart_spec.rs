use serde::{Deserialize, Serialize};

use crate::core::{CategoryCount, CellValue, ColumnId, Distribution};
use crate::render::{Color, Palette};

/// Text a renderer should show in place of a chart with no categories.
pub const NO_DATA_MESSAGE: &str = "no data";

/// Donut hole size relative to the outer radius.
pub const DONUT_HOLE_RATIO: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Donut-style share of total; slice values are percentages.
    Proportion,
    /// Bar-style absolute counts; slice values are row counts.
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendOrientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorX {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorY {
    Top,
    Bottom,
}

/// Legend placement in plot-relative coordinates.
///
/// `(0, 0)` is the bottom-left of the plot area and `(1, 1)` the top-right;
/// values outside that range place the legend outside the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendPlacement {
    pub visible: bool,
    pub orientation: LegendOrientation,
    pub x: f64,
    pub y: f64,
    pub x_anchor: AnchorX,
    pub y_anchor: AnchorY,
}

impl LegendPlacement {
    /// Horizontal legend centered below the plot.
    #[must_use]
    pub const fn below_center() -> Self {
        Self {
            visible: true,
            orientation: LegendOrientation::Horizontal,
            x: 0.5,
            y: -0.3,
            x_anchor: AnchorX::Center,
            y_anchor: AnchorY::Bottom,
        }
    }

    /// Vertical legend to the right of the plot.
    #[must_use]
    pub const fn right_side() -> Self {
        Self {
            visible: true,
            orientation: LegendOrientation::Vertical,
            x: 1.02,
            y: 1.0,
            x_anchor: AnchorX::Left,
            y_anchor: AnchorY::Top,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceTextInfo {
    PercentAndLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutStyle {
    pub hole_ratio: f64,
    pub text_info: SliceTextInfo,
}

impl Default for DonutStyle {
    fn default() -> Self {
        Self {
            hole_ratio: DONUT_HOLE_RATIO,
            text_info: SliceTextInfo::PercentAndLabel,
        }
    }
}

/// One category of a chart: a donut slice or a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub category: CellValue,
    pub label: String,
    /// Percentage for proportion charts, row count for count charts.
    pub value: f64,
    pub count: usize,
    pub color: Color,
}

/// Renderer-agnostic description of one dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub column: ColumnId,
    pub total: usize,
    pub slices: Vec<ChartSlice>,
    pub legend: LegendPlacement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donut: Option<DonutStyle>,
}

impl ChartSpec {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Legend entries as `(label, color)`, one per category.
    pub fn legend_entries(&self) -> impl Iterator<Item = (&str, Color)> {
        self.slices
            .iter()
            .map(|slice| (slice.label.as_str(), slice.color))
    }
}

/// Builds a donut-style chart whose slice values are category percentages.
#[must_use]
pub fn to_proportion_spec(
    distribution: &Distribution,
    title: impl Into<String>,
    palette: &Palette,
) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Proportion,
        title: title.into(),
        column: distribution.column.clone(),
        total: distribution.total,
        slices: categorical_slices(distribution, palette, |entry| entry.percentage),
        legend: LegendPlacement::below_center(),
        donut: Some(DonutStyle::default()),
    }
}

/// Builds a bar-style chart whose slice values are category counts.
#[must_use]
pub fn to_count_spec(
    distribution: &Distribution,
    title: impl Into<String>,
    palette: &Palette,
) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Count,
        title: title.into(),
        column: distribution.column.clone(),
        total: distribution.total,
        slices: categorical_slices(distribution, palette, |entry| entry.count as f64),
        legend: LegendPlacement::right_side(),
        donut: None,
    }
}

/// Dispatches to the builder for `kind`.
#[must_use]
pub fn to_chart_spec(
    kind: ChartKind,
    distribution: &Distribution,
    title: impl Into<String>,
    palette: &Palette,
) -> ChartSpec {
    match kind {
        ChartKind::Proportion => to_proportion_spec(distribution, title, palette),
        ChartKind::Count => to_count_spec(distribution, title, palette),
    }
}

// Shared by both chart kinds: the donut and bar views of one distribution
// always agree on category order and colors.
fn categorical_slices(
    distribution: &Distribution,
    palette: &Palette,
    value_of: impl Fn(&CategoryCount) -> f64,
) -> Vec<ChartSlice> {
    distribution
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| ChartSlice {
            category: entry.category.clone(),
            label: entry.category.label(),
            value: value_of(entry),
            count: entry.count,
            color: palette.color_at(index),
        })
        .collect()
}
