mod chart_spec;
mod null_renderer;
mod palette;
mod primitives;

pub use chart_spec::{
    AnchorX, AnchorY, ChartKind, ChartSlice, ChartSpec, DONUT_HOLE_RATIO, DonutStyle,
    LegendOrientation, LegendPlacement, NO_DATA_MESSAGE, SliceTextInfo, to_chart_spec,
    to_count_spec, to_proportion_spec,
};
pub use null_renderer::NullRenderer;
pub use palette::{DEFAULT_PALETTE_COLORS, DEFAULT_PALETTE_TOKENS, Palette};
pub use primitives::Color;

use crate::error::FacetResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `ChartSpec` so drawing code stays
/// isolated from filtering and aggregation. A spec with no slices is valid
/// and should be drawn as an empty chart (see [`NO_DATA_MESSAGE`]).
pub trait ChartRenderer {
    fn render(&mut self, spec: &ChartSpec) -> FacetResult<()>;
}
