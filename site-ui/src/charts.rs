use site_core::chart::{draw_bar_chart, draw_line_chart, Surface};
use site_core::{SiteConfig, ID_ORDERS_CHART, ID_RESERVATIONS_CHART};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::dom;
use crate::error::UiError;

/// [`Surface`] over a canvas 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `Ok(None)` when the page has no such canvas or it cannot give a 2D
    /// context.
    pub fn find(document: &Document, id: &str) -> Result<Option<Self>, UiError> {
        let Some(el) = document.get_element_by_id(id) else {
            return Ok(None);
        };
        let canvas = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| UiError::WrongElement("canvas"))?;
        let Some(ctx) = canvas.get_context("2d")? else {
            return Ok(None);
        };
        let ctx = ctx
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| UiError::WrongElement("2d context"))?;
        Ok(Some(Self { canvas, ctx }))
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        let _ = self.ctx.arc(x, y, radius, start, end);
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
        let _ = self.ctx.arc_to(x1, y1, x2, y2, radius);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}

/// Resolve `--custom-property` names against the body's computed style so
/// charts follow the active theme. Anything else is taken as a literal color.
pub fn resolve_color(color: &str) -> String {
    if !color.starts_with("--") {
        return color.to_string();
    }
    let value = dom::window()
        .ok()
        .zip(dom::body().ok())
        .and_then(|(window, body)| window.get_computed_style(&body).ok().flatten())
        .and_then(|style| style.get_property_value(color).ok())
        .unwrap_or_default();
    value.trim().to_string()
}

pub fn init(config: &SiteConfig) -> Result<(), UiError> {
    let document = dom::document()?;
    let chart = &config.chart;

    if let Some(mut surface) = CanvasSurface::find(&document, ID_ORDERS_CHART)? {
        let color = resolve_color(&chart.line_color);
        draw_line_chart(&mut surface, &chart.orders, chart, &color);
    }

    if let Some(mut surface) = CanvasSurface::find(&document, ID_RESERVATIONS_CHART)? {
        draw_bar_chart(&mut surface, &chart.reservations, chart, resolve_color);
    }

    Ok(())
}
