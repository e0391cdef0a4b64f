use crate::error::{FacetError, FacetResult};
use crate::render::{ChartKind, ChartRenderer, ChartSpec};

const PERCENT_TOLERANCE: f64 = 1e-6;

/// No-op renderer used by tests and headless dashboard usage.
///
/// It still validates spec content so tests can catch inconsistent charts
/// before a real backend draws them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub rendered_charts: usize,
    pub empty_charts: usize,
    pub last_slice_count: usize,
}

impl ChartRenderer for NullRenderer {
    fn render(&mut self, spec: &ChartSpec) -> FacetResult<()> {
        validate_spec(spec)?;
        self.rendered_charts += 1;
        if spec.is_empty() {
            self.empty_charts += 1;
        }
        self.last_slice_count = spec.slices.len();
        Ok(())
    }
}

fn validate_spec(spec: &ChartSpec) -> FacetResult<()> {
    let mut counted = 0usize;
    for slice in &spec.slices {
        slice.color.validate()?;
        if !slice.value.is_finite() || slice.value < 0.0 {
            return Err(FacetError::InvalidData(format!(
                "slice `{}` value must be finite and >= 0",
                slice.label
            )));
        }
        counted += slice.count;
    }

    if counted != spec.total {
        return Err(FacetError::InvalidData(format!(
            "chart `{}` slice counts sum to {counted}, expected {}",
            spec.title, spec.total
        )));
    }

    if spec.kind == ChartKind::Proportion && !spec.is_empty() {
        let sum: f64 = spec.slices.iter().map(|slice| slice.value).sum();
        if (sum - 100.0).abs() > PERCENT_TOLERANCE {
            return Err(FacetError::InvalidData(format!(
                "chart `{}` percentages sum to {sum}, expected 100",
                spec.title
            )));
        }
    }

    Ok(())
}
