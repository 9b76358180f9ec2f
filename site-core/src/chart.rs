//! Dashboard charts: a line chart of orders and a bar chart of reservations.
//!
//! Layout is computed here and drawn through [`Surface`], which the browser
//! crate implements over a 2D canvas context.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;

/// Vertical headroom so the tallest point never touches the top edge.
pub const HEADROOM: f64 = 1.2;
/// Slot width as a multiple of bar width; the remainder is the gap.
pub const BAR_SLOT: f64 = 1.8;

/// Minimal path-drawing surface, in the vocabulary of a 2D canvas.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
}

/// One bar: its label, value and the CSS custom property holding its color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl BarSpec {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn default_orders() -> Vec<f64> {
    vec![40.0, 56.0, 42.0, 60.0, 72.0, 68.0, 80.0]
}

pub fn default_reservations() -> Vec<BarSpec> {
    vec![
        BarSpec::new("Morning", 24.0, "--accent"),
        BarSpec::new("Afternoon", 36.0, "--color-sage"),
        BarSpec::new("Evening", 30.0, "--color-mocha"),
    ]
}

fn scaled_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max) * HEADROOM
}

/// Canvas y for `value`, with the origin at the top-left.
fn value_y(value: f64, max: f64, height: f64, padding: f64) -> f64 {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    height - padding - ratio * (height - padding * 2.0)
}

/// Evenly spaced points for a line series. Empty in, empty out.
pub fn line_points(values: &[f64], width: f64, height: f64, padding: f64) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = scaled_max(values.iter().copied());
    let step = if values.len() > 1 {
        (width - padding * 2.0) / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            (
                padding + idx as f64 * step,
                value_y(value, max, height, padding),
            )
        })
        .collect()
}

pub fn bar_rects(values: &[f64], width: f64, height: f64, padding: f64) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = scaled_max(values.iter().copied());
    let bar_width = (width - padding * 2.0) / values.len() as f64 / BAR_SLOT;

    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let y = value_y(value, max, height, padding);
            Rect {
                x: padding + idx as f64 * bar_width * BAR_SLOT,
                y,
                width: bar_width,
                height: height - padding - y,
            }
        })
        .collect()
}

/// Trace a rounded rectangle as a closed path. The caller fills or strokes.
pub fn round_rect<S: Surface + ?Sized>(surface: &mut S, rect: Rect, radius: f64) {
    let Rect {
        x,
        y,
        width,
        height,
    } = rect;
    let r = radius.max(0.0).min(width.abs() / 2.0).min(height.abs() / 2.0);

    surface.begin_path();
    surface.move_to(x + r, y);
    surface.arc_to(x + width, y, x + width, y + height, r);
    surface.arc_to(x + width, y + height, x, y + height, r);
    surface.arc_to(x, y + height, x, y, r);
    surface.arc_to(x, y, x + width, y, r);
    surface.close_path();
}

pub fn draw_line_chart<S: Surface + ?Sized>(
    surface: &mut S,
    values: &[f64],
    config: &ChartConfig,
    color: &str,
) {
    let (width, height) = surface.size();
    surface.clear();

    let points = line_points(values, width, height, config.padding);
    let Some(&(first_x, first_y)) = points.first() else {
        return;
    };

    surface.set_line_width(config.line_width);
    surface.set_stroke_color(color);
    surface.begin_path();
    surface.move_to(first_x, first_y);
    for &(x, y) in &points[1..] {
        surface.line_to(x, y);
    }
    surface.stroke();

    surface.set_fill_color(color);
    for &(x, y) in &points {
        surface.begin_path();
        surface.arc(x, y, config.marker_radius, 0.0, PI * 2.0);
        surface.fill();
    }
}

/// `resolve` maps each bar's color variable to a concrete color.
pub fn draw_bar_chart<S, F>(surface: &mut S, bars: &[BarSpec], config: &ChartConfig, resolve: F)
where
    S: Surface + ?Sized,
    F: Fn(&str) -> String,
{
    let (width, height) = surface.size();
    surface.clear();

    let values: Vec<f64> = bars.iter().map(|bar| bar.value).collect();
    let rects = bar_rects(&values, width, height, config.padding);

    for (bar, rect) in bars.iter().zip(rects) {
        surface.set_fill_color(&resolve(&bar.color));
        round_rect(surface, rect, config.corner_radius);
        surface.fill();
    }
}
