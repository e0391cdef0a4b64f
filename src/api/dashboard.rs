use std::sync::Arc;

#[cfg(feature = "parallel-panels")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    CellValue, ColumnId, Dataset, FilteredView, Selection, apply_selection, distribute,
    filter_options,
};
use crate::error::FacetResult;
use crate::render::{ChartRenderer, ChartSpec, Palette, to_chart_spec};

use super::{DashboardConfig, PanelConfig};

/// Options offered by one filter control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterControl {
    pub column: ColumnId,
    pub label: String,
    pub options: Vec<CellValue>,
}

/// Result of one recompute pass: every configured panel for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFrame {
    pub total_rows: usize,
    pub filtered_rows: usize,
    pub panels: Vec<ChartSpec>,
}

/// Binds an immutable dataset to a panel layout.
///
/// The dashboard holds no selection state: every call to [`Dashboard::compute`]
/// takes the caller's current selection and recomputes from scratch, so any
/// number of sessions can share one dashboard through its `Arc<Dataset>`.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
    palette: Palette,
}

impl Dashboard {
    /// Validates every configured column and the palette against `dataset`.
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> FacetResult<Self> {
        let palette = config.resolve_palette()?;
        for filter in &config.filters {
            dataset.resolve(filter.column.as_str())?;
        }
        for panel in &config.panels {
            dataset.resolve(panel.column.as_str())?;
        }

        debug!(
            rows = dataset.row_count(),
            filters = config.filters.len(),
            panels = config.panels.len(),
            palette = palette.len(),
            "dashboard configured"
        );
        Ok(Self {
            dataset,
            config,
            palette,
        })
    }

    #[must_use]
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Filter controls in configured order, each with its first-seen options.
    pub fn filter_controls(&self) -> FacetResult<Vec<FilterControl>> {
        self.config
            .filters
            .iter()
            .map(|filter| -> FacetResult<FilterControl> {
                Ok(FilterControl {
                    column: filter.column.clone(),
                    label: filter.display_label().to_owned(),
                    options: filter_options(&self.dataset, filter.column.as_str())?,
                })
            })
            .collect()
    }

    /// Runs the full filter → distribute → chart pass for one selection.
    pub fn compute(&self, selection: &Selection) -> FacetResult<DashboardFrame> {
        let view = apply_selection(&self.dataset, selection)?;
        debug!(
            dimensions = selection.dimension_count(),
            filtered_rows = view.len(),
            total_rows = self.dataset.row_count(),
            "recomputing dashboard"
        );

        let panels = self.build_panels(&view)?;
        Ok(DashboardFrame {
            total_rows: self.dataset.row_count(),
            filtered_rows: view.len(),
            panels,
        })
    }

    /// Computes a frame and hands each panel to `renderer` in order.
    pub fn render<R: ChartRenderer>(
        &self,
        renderer: &mut R,
        selection: &Selection,
    ) -> FacetResult<DashboardFrame> {
        let frame = self.compute(selection)?;
        for panel in &frame.panels {
            renderer.render(panel)?;
        }
        Ok(frame)
    }

    #[cfg(feature = "parallel-panels")]
    fn build_panels(&self, view: &FilteredView<'_>) -> FacetResult<Vec<ChartSpec>> {
        self.config
            .panels
            .par_iter()
            .map(|panel| self.build_panel(view, panel))
            .collect()
    }

    #[cfg(not(feature = "parallel-panels"))]
    fn build_panels(&self, view: &FilteredView<'_>) -> FacetResult<Vec<ChartSpec>> {
        self.config
            .panels
            .iter()
            .map(|panel| self.build_panel(view, panel))
            .collect()
    }

    fn build_panel(&self, view: &FilteredView<'_>, panel: &PanelConfig) -> FacetResult<ChartSpec> {
        let distribution = distribute(view, panel.column.as_str())?;
        trace!(
            column = %panel.column,
            categories = distribution.category_count(),
            "built panel distribution"
        );
        Ok(to_chart_spec(
            panel.kind,
            &distribution,
            panel.title.clone(),
            &self.palette,
        ))
    }
}
