//! Draws `ChartSpec` bar charts on a canvas with plotters.

use domain::formatting::format_number;
use domain::{ChartBackend, ChartError, ChartHandle};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use shared::{AxisId, ChartAxis, ChartSeries, ChartSpec, Rgba};
use std::ops::Range;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

pub const CHART_CANVAS_ID: &str = "companyChart";

/// Share of each label slot taken by its bars
const GROUP_WIDTH: f64 = 0.7;
const LEGEND_HEIGHT: u32 = 36;

fn to_color(rgba: Rgba) -> RGBAColor {
    RGBAColor(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn backend_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Backend(err.to_string())
}

/// Value range of an axis with 10% headroom; includes zero when the axis begins at zero
fn axis_range(values: impl Iterator<Item = f64>, begin_at_zero: bool) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo > hi {
        return 0.0..1.0;
    }
    let (lo, hi) = if begin_at_zero {
        (lo.min(0.0), hi.max(0.0))
    } else {
        (lo, hi)
    };
    let pad = ((hi - lo) * 0.1).max(1.0);
    let lo = if begin_at_zero && lo >= 0.0 { 0.0 } else { lo - pad };
    lo..hi + pad
}

fn series_range(spec: &ChartSpec, axis: &ChartAxis) -> Range<f64> {
    let values = spec
        .series
        .iter()
        .filter(|series| series.axis == axis.id)
        .flat_map(|series| series.data.iter().flatten().copied());
    axis_range(values, axis.begin_at_zero)
}

/// Fill and outline rectangles for one series; absent values draw nothing
fn bars(
    series: &ChartSeries,
    index: usize,
    count: usize,
    y_range: &Range<f64>,
) -> (Vec<Rectangle<(f64, f64)>>, Vec<Rectangle<(f64, f64)>>) {
    let width = GROUP_WIDTH / count as f64;
    let baseline = 0.0_f64.clamp(y_range.start, y_range.end);
    let mut fills = Vec::new();
    let mut outlines = Vec::new();

    for (slot, value) in series.data.iter().enumerate() {
        let Some(value) = value else { continue };
        let x0 = slot as f64 + (1.0 - GROUP_WIDTH) / 2.0 + index as f64 * width;
        let corners = [(x0, baseline), (x0 + width, *value)];

        if let Some(fill) = series.fill.get(slot) {
            fills.push(Rectangle::new(corners, to_color(*fill).filled()));
        }
        if let Some(outline) = series.outline.get(slot) {
            outlines.push(Rectangle::new(
                corners,
                to_color(*outline).stroke_width(series.border_width),
            ));
        }
    }
    (fills, outlines)
}

/// Draws onto the canvas with the configured id, looked up on every chart
pub struct CanvasChartBackend {
    canvas_id: String,
}

impl CanvasChartBackend {
    pub fn new(canvas_id: &str) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
        }
    }

    fn canvas(&self) -> Result<HtmlCanvasElement, ChartError> {
        gloo::utils::document()
            .get_element_by_id(&self.canvas_id)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| ChartError::Backend(format!("No canvas #{}", self.canvas_id)))
    }

    fn draw(&self, canvas: HtmlCanvasElement, spec: &ChartSpec) -> Result<(), ChartError> {
        let backend = CanvasBackend::with_canvas_object(canvas)
            .ok_or_else(|| ChartError::Backend("Canvas has no 2d context".to_string()))?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(backend_error)?;

        let left = spec
            .axis(AxisId::Left)
            .ok_or_else(|| ChartError::Backend("Chart has no left axis".to_string()))?;
        let right = spec.axis(AxisId::Right);
        let left_range = series_range(spec, left);
        let x_range = 0.0..spec.labels.len().max(1) as f64;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .margin_top(if spec.show_legend { LEGEND_HEIGHT + 10 } else { 15 })
            .x_label_area_size(30)
            .y_label_area_size(70)
            .right_y_label_area_size(if right.is_some() { 70 } else { 0 })
            .build_cartesian_2d(x_range.clone(), left_range.clone())
            .map_err(backend_error)?;

        let y_formatter = |v: &f64| format_number(Some(*v));
        {
            let mut mesh = chart.configure_mesh();
            mesh.disable_x_mesh()
                .x_labels(0)
                .y_label_formatter(&y_formatter)
                .label_style(("sans-serif", 12))
                .axis_style(RGBColor(200, 200, 200))
                .bold_line_style(RGBColor(235, 235, 235))
                .light_line_style(RGBColor(248, 248, 248));
            if !left.draw_grid {
                mesh.disable_y_mesh();
            }
            if let Some(title) = &left.title {
                mesh.y_desc(title.as_str());
            }
            mesh.draw().map_err(backend_error)?;
        }

        let count = spec.series.len();
        for (index, series) in spec.series.iter().enumerate() {
            if series.axis != AxisId::Left {
                continue;
            }
            let (fills, outlines) = bars(series, index, count, &left_range);
            chart.draw_series(fills).map_err(backend_error)?;
            chart.draw_series(outlines).map_err(backend_error)?;
        }

        // x labels centred under each slot
        let label_style = TextStyle::from(("sans-serif", 13).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));
        for (slot, label) in spec.labels.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(slot as f64 + 0.5, left_range.start));
            root.draw(&Text::new(label.clone(), (x, y + 8), label_style.clone()))
                .map_err(backend_error)?;
        }

        if let Some(right) = right {
            let right_range = series_range(spec, right);
            let mut chart = chart.set_secondary_coord(x_range, right_range.clone());
            {
                let mut axes = chart.configure_secondary_axes();
                axes.y_label_formatter(&y_formatter)
                    .label_style(("sans-serif", 12));
                if let Some(title) = &right.title {
                    axes.y_desc(title.as_str());
                }
                axes.draw().map_err(backend_error)?;
            }
            for (index, series) in spec.series.iter().enumerate() {
                if series.axis != AxisId::Right {
                    continue;
                }
                let (fills, outlines) = bars(series, index, count, &right_range);
                chart.draw_secondary_series(fills).map_err(backend_error)?;
                chart.draw_secondary_series(outlines).map_err(backend_error)?;
            }
        }

        if spec.show_legend {
            draw_legend(&root, &spec.series)?;
        }

        root.present().map_err(backend_error)
    }
}

fn draw_legend(
    root: &DrawingArea<CanvasBackend, plotters::coord::Shift>,
    series: &[ChartSeries],
) -> Result<(), ChartError> {
    let (width, _) = root.dim_in_pixel();
    let entry_width = 140;
    let mut x = (width as i32 - entry_width * series.len() as i32) / 2;
    let y = 12;

    for entry in series {
        let color = entry.fill.first().copied().map(to_color).unwrap_or(BLACK.to_rgba());
        root.draw(&Rectangle::new([(x, y), (x + 14, y + 12)], color.filled()))
            .map_err(backend_error)?;
        root.draw(&Text::new(
            entry.label.clone(),
            (x + 20, y),
            ("sans-serif", 13).into_font(),
        ))
        .map_err(backend_error)?;
        x += entry_width;
    }
    Ok(())
}

/// A drawn chart; destroying it clears the canvas
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
}

impl ChartHandle for CanvasChart {
    fn destroy(self) {
        // resetting the width wipes the bitmap
        let width = self.canvas.width();
        self.canvas.set_width(width);
    }
}

impl ChartBackend for CanvasChartBackend {
    type Handle = CanvasChart;

    fn create(&mut self, spec: &ChartSpec) -> Result<Self::Handle, ChartError> {
        let canvas = self.canvas()?;
        self.draw(canvas.clone(), spec)?;
        Ok(CanvasChart { canvas })
    }
}


#[cfg(test)]
mod wasm_tests {
    use super::*;
    use domain::build_chart_spec;
    use shared::{ChartMode, Company};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_canvas_is_an_error() {
        let mut backend = CanvasChartBackend::new("no-such-canvas");
        let company = Company {
            name: "Acme".to_string(),
            revenue: [Some(1.0), Some(2.0), Some(3.0)],
            profit: [Some(1.0), Some(-1.0), None],
        };
        let result = backend.create(&build_chart_spec(&company, ChartMode::Combined));
        assert!(matches!(result, Err(ChartError::Backend(_))));
    }
}
