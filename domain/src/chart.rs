//! Chart adapter for the detail modal.
//!
//! `build_chart_spec` describes the bar chart for a company and view mode
//! without knowing how it is drawn. `ChartSlot` owns the single live chart
//! and disposes it before a backend creates the next one.

use crate::error::ChartError;
use log::{debug, warn};
use shared::{
    AxisId, ChartAxis, ChartKind, ChartMode, ChartSeries, ChartSpec, Company, FiscalYear, Rgba,
};

pub const REVENUE_FILL: Rgba = Rgba::new(153, 15, 61, 0.8);
pub const REVENUE_OUTLINE: Rgba = Rgba::opaque(0x99, 0x0F, 0x3D);
pub const PROFIT_FILL: Rgba = Rgba::new(13, 118, 128, 0.8);
pub const PROFIT_OUTLINE: Rgba = Rgba::opaque(0x0D, 0x76, 0x80);
pub const LOSS_FILL: Rgba = Rgba::new(204, 0, 0, 0.8);
pub const LOSS_OUTLINE: Rgba = Rgba::opaque(0xCC, 0x00, 0x00);

const BORDER_WIDTH: u32 = 2;
const REVENUE_LABEL: &str = "매출 (억원)";
const PROFIT_LABEL: &str = "영업이익 (억원)";

/// A chart drawn by a backend; destroying it releases its drawing resources
pub trait ChartHandle {
    fn destroy(self);
}

/// Draws chart specs somewhere (canvas, test recorder, ...)
pub trait ChartBackend {
    type Handle: ChartHandle;

    fn create(&mut self, spec: &ChartSpec) -> Result<Self::Handle, ChartError>;
}

fn revenue_series(company: &Company, axis: AxisId) -> ChartSeries {
    let data: Vec<Option<f64>> = FiscalYear::ALL.iter().map(|&y| company.revenue(y)).collect();
    ChartSeries {
        label: REVENUE_LABEL.to_string(),
        fill: vec![REVENUE_FILL; data.len()],
        outline: vec![REVENUE_OUTLINE; data.len()],
        data,
        border_width: BORDER_WIDTH,
        axis,
    }
}

fn profit_series(company: &Company, axis: AxisId, colour_by_sign: bool) -> ChartSeries {
    let data: Vec<Option<f64>> = FiscalYear::ALL.iter().map(|&y| company.profit(y)).collect();
    // absent bars take the non-negative colours
    let is_loss = |value: &Option<f64>| colour_by_sign && value.is_some_and(|v| v < 0.0);
    ChartSeries {
        label: PROFIT_LABEL.to_string(),
        fill: data
            .iter()
            .map(|v| if is_loss(v) { LOSS_FILL } else { PROFIT_FILL })
            .collect(),
        outline: data
            .iter()
            .map(|v| if is_loss(v) { LOSS_OUTLINE } else { PROFIT_OUTLINE })
            .collect(),
        data,
        border_width: BORDER_WIDTH,
        axis,
    }
}

/// Describes the bar chart for `company` in the given mode
pub fn build_chart_spec(company: &Company, mode: ChartMode) -> ChartSpec {
    let labels = FiscalYear::ALL.iter().map(|y| y.label().to_string()).collect();

    let (series, axes) = match mode {
        ChartMode::Revenue => (
            vec![revenue_series(company, AxisId::Left)],
            vec![ChartAxis {
                id: AxisId::Left,
                begin_at_zero: true,
                title: None,
                draw_grid: true,
            }],
        ),
        ChartMode::Profit => (
            vec![profit_series(company, AxisId::Left, true)],
            vec![ChartAxis {
                id: AxisId::Left,
                begin_at_zero: false,
                title: None,
                draw_grid: true,
            }],
        ),
        ChartMode::Combined => (
            vec![
                revenue_series(company, AxisId::Left),
                profit_series(company, AxisId::Right, false),
            ],
            vec![
                ChartAxis {
                    id: AxisId::Left,
                    begin_at_zero: false,
                    title: Some(REVENUE_LABEL.to_string()),
                    draw_grid: true,
                },
                ChartAxis {
                    id: AxisId::Right,
                    begin_at_zero: false,
                    title: Some(PROFIT_LABEL.to_string()),
                    draw_grid: false,
                },
            ],
        ),
    };

    ChartSpec {
        kind: ChartKind::Bar,
        labels,
        series,
        axes,
        show_legend: mode == ChartMode::Combined,
    }
}

/// Holds at most one live chart
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    current: Option<B::Handle>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Destroys the current chart, then draws `spec` as the new one.
    ///
    /// A backend failure is logged and leaves the slot empty.
    pub fn render(&mut self, spec: &ChartSpec) {
        self.dispose();
        match self.backend.create(spec) {
            Ok(handle) => self.current = Some(handle),
            Err(err) => warn!("Chart creation failed: {}", err),
        }
    }

    pub fn dispose(&mut self) {
        if let Some(handle) = self.current.take() {
            debug!("Destroying previous chart");
            handle.destroy();
        }
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChartBackend> Drop for ChartSlot<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{company, RecordingChartBackend};

    fn sample() -> Company {
        company(
            "Acme",
            [Some(100.0), Some(120.0), None],
            [Some(10.0), Some(-5.0), None],
        )
    }

    #[test]
    fn test_revenue_spec() {
        let spec = build_chart_spec(&sample(), ChartMode::Revenue);

        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.labels, vec!["2022년", "2023년", "2024년"]);
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].data, vec![Some(100.0), Some(120.0), None]);
        assert_eq!(spec.series[0].fill, vec![REVENUE_FILL; 3]);
        assert!(spec.axis(AxisId::Left).unwrap().begin_at_zero);
        assert!(spec.axis(AxisId::Right).is_none());
        assert!(!spec.show_legend);
    }

    #[test]
    fn test_profit_spec_colours_by_sign() {
        let spec = build_chart_spec(&sample(), ChartMode::Profit);
        let series = &spec.series[0];

        assert_eq!(series.label, "영업이익 (억원)");
        assert_eq!(series.fill, vec![PROFIT_FILL, LOSS_FILL, PROFIT_FILL]);
        assert_eq!(series.outline, vec![PROFIT_OUTLINE, LOSS_OUTLINE, PROFIT_OUTLINE]);
        assert!(!spec.axis(AxisId::Left).unwrap().begin_at_zero);
        assert!(!spec.show_legend);
    }

    #[test]
    fn test_combined_spec_uses_two_axes() {
        let spec = build_chart_spec(&sample(), ChartMode::Combined);

        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].axis, AxisId::Left);
        assert_eq!(spec.series[1].axis, AxisId::Right);
        assert_eq!(spec.series[1].fill, vec![PROFIT_FILL; 3]);

        let right = spec.axis(AxisId::Right).unwrap();
        assert!(!right.draw_grid);
        assert_eq!(right.title.as_deref(), Some("영업이익 (억원)"));
        assert_eq!(AxisId::Right.key(), "y1");
        assert!(spec.show_legend);
    }

    #[test]
    fn test_slot_disposes_before_creating() {
        let backend = RecordingChartBackend::default();
        let mut slot = ChartSlot::new(backend.clone());

        let company = sample();
        slot.render(&build_chart_spec(&company, ChartMode::Revenue));
        slot.render(&build_chart_spec(&company, ChartMode::Combined));

        assert_eq!(backend.created(), 2);
        assert_eq!(backend.destroyed(), 1);
        assert_eq!(backend.max_live(), 1);
        assert_eq!(backend.live(), 1);

        drop(slot);
        assert_eq!(backend.live(), 0);
    }

    #[test]
    fn test_failed_creation_leaves_slot_empty() {
        let backend = RecordingChartBackend::default();
        let mut slot = ChartSlot::new(backend.clone());
        slot.render(&build_chart_spec(&sample(), ChartMode::Revenue));
        assert!(slot.is_live());

        backend.fail_next();
        slot.render(&build_chart_spec(&sample(), ChartMode::Profit));
        assert!(!slot.is_live());
        assert_eq!(backend.live(), 0);

        slot.render(&build_chart_spec(&sample(), ChartMode::Combined));
        assert!(slot.is_live());
        assert_eq!(backend.live(), 1);
    }
}
