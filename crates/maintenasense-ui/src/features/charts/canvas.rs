//! Canvas 2D chart backend.
//!
//! # Design
//! - Geometry comes from [`crate::features::charts::layout`]; this module only issues draw calls.
//! - Each handle owns its resize and hover listeners; dropping them detaches the chart.
//! - Disposal clears the canvas so a stale chart is never left on screen.

use crate::features::charts::datasets::MAX_OPERATING_HOURS;
use crate::features::charts::labels::{point_tooltip, tooltip_title};
use crate::features::charts::layout::{
    LEGEND_HEIGHT, LinearScale, POINT_RADIUS, Rect, Ring, band_at, bands, doughnut_arcs,
    nice_ticks, plot_area, point_at, scatter_scales, segment_at,
};
use crate::features::charts::lifecycle::{ChartBackend, ChartError, ChartHandle};
use crate::features::charts::spec::{CategoryValue, ChartKind, ChartSpec, ChartTarget, Series};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

const DOUGHNUT_CUTOUT: f64 = 0.6;
const BAR_FILL: f64 = 0.7;
const SWATCH: f64 = 12.0;

/// Draws charts onto `<canvas>` elements found by id.
#[derive(Debug, Default)]
pub(crate) struct CanvasBackend;

/// A chart drawn on a canvas, redrawn on window resize.
pub(crate) struct CanvasChart {
    canvas: HtmlCanvasElement,
    target: ChartTarget,
    listeners: Vec<EventListener>,
}

impl ChartBackend for CanvasBackend {
    type Handle = CanvasChart;

    fn mount(&mut self, spec: &ChartSpec) -> Result<CanvasChart, ChartError> {
        let target = spec.target;
        let canvas = document()
            .get_element_by_id(target.canvas_id())
            .ok_or(ChartError::MountMissing {
                canvas_id: target.canvas_id(),
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ChartError::Render {
                canvas_id: target.canvas_id(),
                message: "element is not a canvas".to_string(),
            })?;
        let spec = Rc::new(spec.clone());
        draw(&canvas, &spec)?;

        let resize = EventListener::new(&window(), "resize", {
            let canvas = canvas.clone();
            let spec = Rc::clone(&spec);
            move |_event| {
                if let Err(err) = draw(&canvas, &spec) {
                    console::error!("chart redraw failed", err.to_string());
                }
            }
        });
        let hover = EventListener::new(&canvas, "mousemove", {
            let canvas = canvas.clone();
            let spec = Rc::clone(&spec);
            move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let point = (f64::from(event.offset_x()), f64::from(event.offset_y()));
                let title = hover_title(&spec, canvas_size(&canvas), point).unwrap_or_default();
                if canvas.set_attribute("title", &title).is_err() {
                    console::debug!("chart tooltip update skipped");
                }
            }
        });

        Ok(CanvasChart {
            canvas,
            target,
            listeners: vec![resize, hover],
        })
    }
}

impl ChartHandle for CanvasChart {
    fn dispose(&mut self) {
        self.listeners.clear();
        if self.canvas.remove_attribute("title").is_err() {
            console::debug!("chart tooltip reset skipped", self.target.canvas_id());
        }
        if let Ok(ctx) = context(&self.canvas, self.target) {
            ctx.clear_rect(
                0.0,
                0.0,
                f64::from(self.canvas.width()),
                f64::from(self.canvas.height()),
            );
        }
    }
}

fn render_error(target: ChartTarget) -> impl Fn(JsValue) -> ChartError {
    move |err| ChartError::Render {
        canvas_id: target.canvas_id(),
        message: format!("{err:?}"),
    }
}

fn context(
    canvas: &HtmlCanvasElement,
    target: ChartTarget,
) -> Result<CanvasRenderingContext2d, ChartError> {
    canvas
        .get_context("2d")
        .map_err(render_error(target))?
        .ok_or_else(|| ChartError::Render {
            canvas_id: target.canvas_id(),
            message: "2d context unavailable".to_string(),
        })?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ChartError::Render {
            canvas_id: target.canvas_id(),
            message: "unexpected context type".to_string(),
        })
}

fn canvas_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    (f64::from(canvas.width()), f64::from(canvas.height()))
}

/// Match the backing store to the laid-out size so text is not stretched.
fn fit_to_layout(canvas: &HtmlCanvasElement) {
    let width = u32::try_from(canvas.client_width()).unwrap_or(0);
    let height = u32::try_from(canvas.client_height()).unwrap_or(0);
    if width > 0 && height > 0 && (canvas.width() != width || canvas.height() != height) {
        canvas.set_width(width);
        canvas.set_height(height);
    }
}

fn draw(canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Result<(), ChartError> {
    fit_to_layout(canvas);
    let ctx = context(canvas, spec.target)?;
    let (width, height) = canvas_size(canvas);
    ctx.clear_rect(0.0, 0.0, width, height);
    let area = plot_area(spec.kind, width, height);
    draw_legend(&ctx, spec, width)?;
    match (&spec.series, spec.kind) {
        (Series::Categories(values), ChartKind::Doughnut) => draw_doughnut(&ctx, spec, values, area),
        (Series::Categories(values), ChartKind::Bar | ChartKind::Scatter) => {
            draw_bars(&ctx, spec, values, area)
        }
        (Series::Points { points, color }, _) => {
            draw_axes(&ctx, spec, area, MAX_OPERATING_HOURS, 1.0)?;
            let (x, y) = scatter_scales(area, MAX_OPERATING_HOURS, 1.0);
            ctx.set_fill_style_str(color);
            for point in points {
                ctx.begin_path();
                ctx.arc(x.map(point.x), y.map(point.y), POINT_RADIUS, 0.0, std::f64::consts::TAU)
                    .map_err(render_error(spec.target))?;
                ctx.fill();
            }
            Ok(())
        }
    }
}

fn draw_legend(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    width: f64,
) -> Result<(), ChartError> {
    let entries: Vec<(String, &str)> = match &spec.series {
        Series::Categories(values) if spec.kind == ChartKind::Doughnut => values
            .iter()
            .map(|value| (tooltip_title(&value.label), value.color))
            .collect(),
        Series::Categories(values) => {
            let color = values.first().map_or(spec.style.legend_text, |v| v.color);
            vec![(spec.dataset_label.to_string(), color)]
        }
        Series::Points { color, .. } => vec![(spec.dataset_label.to_string(), *color)],
    };
    ctx.set_font(&spec.style.font(12));
    ctx.set_text_baseline("middle");
    ctx.set_text_align("left");
    let widths: Vec<f64> = entries
        .iter()
        .map(|(label, _)| {
            ctx.measure_text(label)
                .map(|metrics| metrics.width())
                .map_err(render_error(spec.target))
        })
        .collect::<Result<_, _>>()?;
    let total: f64 = widths.iter().map(|w| w + SWATCH + 24.0).sum();
    let mut cursor = ((width - total) / 2.0).max(0.0);
    let middle = LEGEND_HEIGHT / 2.0;
    for ((label, color), text_width) in entries.iter().zip(widths) {
        ctx.set_fill_style_str(color);
        ctx.fill_rect(cursor, middle - SWATCH / 2.0, SWATCH, SWATCH);
        ctx.set_fill_style_str(spec.style.legend_text);
        ctx.fill_text(label, cursor + SWATCH + 6.0, middle)
            .map_err(render_error(spec.target))?;
        cursor += SWATCH + 24.0 + text_width;
    }
    Ok(())
}

fn draw_doughnut(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    values: &[CategoryValue],
    area: Rect,
) -> Result<(), ChartError> {
    let ring = Ring::fit(area, DOUGHNUT_CUTOUT);
    let amounts: Vec<f64> = values.iter().map(|value| value.value).collect();
    let (cx, cy) = ring.center;
    ctx.set_stroke_style_str(spec.style.border);
    ctx.set_line_width(2.0);
    for (arc, value) in doughnut_arcs(&amounts).iter().zip(values) {
        ctx.begin_path();
        ctx.arc(cx, cy, ring.outer, arc.start, arc.end)
            .map_err(render_error(spec.target))?;
        ctx.arc_with_anticlockwise(cx, cy, ring.inner, arc.end, arc.start, true)
            .map_err(render_error(spec.target))?;
        ctx.close_path();
        ctx.set_fill_style_str(value.color);
        ctx.fill();
        ctx.stroke();
    }
    Ok(())
}

fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    values: &[CategoryValue],
    area: Rect,
) -> Result<(), ChartError> {
    let max = values.iter().map(|value| value.value).fold(0.0, f64::max);
    let top = draw_axes(ctx, spec, area, 0.0, max)?;
    let y = LinearScale::new((0.0, top), (area.bottom(), area.y));
    ctx.set_stroke_style_str(spec.style.border);
    ctx.set_line_width(1.0);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for (band, value) in bands(values.len(), area, BAR_FILL).iter().zip(values) {
        let bar_top = y.map(value.value);
        ctx.set_fill_style_str(value.color);
        ctx.fill_rect(band.x, bar_top, band.width, area.bottom() - bar_top);
        ctx.stroke_rect(band.x, bar_top, band.width, area.bottom() - bar_top);
        ctx.set_fill_style_str(spec.style.tick_text);
        for (line_index, line) in value.label.lines().iter().enumerate() {
            let offset = 6.0 + 14.0 * line_index as f64;
            ctx.fill_text(line, band.center, area.bottom() + offset)
                .map_err(render_error(spec.target))?;
        }
    }
    Ok(())
}

/// Draw y grid lines and tick labels (plus x ticks when `x_max` is non-zero).
/// Returns the top of the y domain.
fn draw_axes(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    area: Rect,
    x_max: f64,
    y_max: f64,
) -> Result<f64, ChartError> {
    let y_ticks = nice_ticks(0.0, y_max, 6);
    let top = y_ticks.last().copied().unwrap_or(y_max).max(y_max);
    let y = LinearScale::new((0.0, top), (area.bottom(), area.y));
    ctx.set_font(&spec.style.font(11));
    ctx.set_line_width(1.0);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for tick in &y_ticks {
        let py = y.map(*tick);
        ctx.set_stroke_style_str(spec.style.grid);
        ctx.begin_path();
        ctx.move_to(area.x, py);
        ctx.line_to(area.right(), py);
        ctx.stroke();
        ctx.set_fill_style_str(spec.style.tick_text);
        ctx.fill_text(&format_tick(*tick), area.x - 8.0, py)
            .map_err(render_error(spec.target))?;
    }
    if x_max > 0.0 {
        let x = LinearScale::new((0.0, x_max), (area.x, area.right()));
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        for tick in nice_ticks(0.0, x_max, 5) {
            ctx.fill_text(&format_tick(tick), x.map(tick), area.bottom() + 6.0)
                .map_err(render_error(spec.target))?;
        }
    }
    ctx.set_fill_style_str(spec.style.tick_text);
    ctx.set_font(&spec.style.font(12));
    if let Some(title) = spec.axes.x {
        ctx.set_text_align("center");
        ctx.set_text_baseline("bottom");
        let (cx, _) = area.center();
        ctx.fill_text(title, cx, area.bottom() + 44.0)
            .map_err(render_error(spec.target))?;
    }
    if let Some(title) = spec.axes.y {
        let (_, cy) = area.center();
        ctx.save();
        ctx.translate(area.x - 44.0, cy)
            .map_err(render_error(spec.target))?;
        ctx.rotate(-std::f64::consts::FRAC_PI_2)
            .map_err(render_error(spec.target))?;
        ctx.set_text_align("center");
        ctx.set_text_baseline("bottom");
        ctx.fill_text(title, 0.0, 0.0)
            .map_err(render_error(spec.target))?;
        ctx.restore();
    }
    Ok(top)
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn hover_title(spec: &ChartSpec, size: (f64, f64), point: (f64, f64)) -> Option<String> {
    let area = plot_area(spec.kind, size.0, size.1);
    let values = match &spec.series {
        Series::Categories(values) => values,
        Series::Points { points, .. } => {
            let scales = scatter_scales(area, MAX_OPERATING_HOURS, 1.0);
            let index = point_at(points, scales, point, POINT_RADIUS)?;
            return points
                .get(index)
                .map(|hit| point_tooltip(spec.dataset_label, *hit));
        }
    };
    let index = match spec.kind {
        ChartKind::Doughnut => {
            let amounts: Vec<f64> = values.iter().map(|value| value.value).collect();
            segment_at(
                &doughnut_arcs(&amounts),
                Ring::fit(area, DOUGHNUT_CUTOUT),
                point,
            )
        }
        ChartKind::Bar | ChartKind::Scatter => band_at(&bands(values.len(), area, BAR_FILL), point.0),
    }?;
    let value = values.get(index)?;
    Some(format!("{}: {}", tooltip_title(&value.label), value.value))
}
