use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::{Rgba, Vec2};

use super::surface::{RadialGradient, Surface};

const TAU: f64 = std::f64::consts::TAU;

/// Distinct fill colours kept as CSS strings before the cache is flushed
const STYLE_CACHE_LIMIT: usize = 32;

/// `CanvasRenderingContext2d` surface.
///
/// The context is requested with `{ alpha: false }` so the trail overlay
/// composites onto an opaque backing store.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    styles: Vec<(Rgba, String)>,
    current_fill: Option<Rgba>,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::FALSE)?;
        let context = canvas
            .get_context_with_context_options("2d", &options)?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            canvas,
            context,
            styles: Vec::with_capacity(8),
            current_fill: None,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn set_fill(&mut self, color: Rgba) {
        if self.current_fill == Some(color) {
            return;
        }
        if self.styles.len() >= STYLE_CACHE_LIMIT {
            self.styles.clear();
        }
        let css = match self.styles.iter().position(|(c, _)| *c == color) {
            Some(i) => &self.styles[i].1,
            None => {
                self.styles.push((color, color.to_css()));
                &self.styles[self.styles.len() - 1].1
            }
        };
        self.context.set_fill_style_str(css);
        self.current_fill = Some(color);
    }

    fn fill_disk(&self, center: Vec2, radius: f64) {
        self.context.begin_path();
        if let Err(err) = self.context.arc(center.x, center.y, radius, 0.0, TAU) {
            log::warn!("canvas arc rejected: {:?}", err);
            return;
        }
        self.context.fill();
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.set_fill(color);
        self.context.fill_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.set_fill(color);
        self.fill_disk(center, radius);
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
        let c = gradient.center;
        let ramp = match self.context.create_radial_gradient(
            c.x,
            c.y,
            gradient.inner_radius,
            c.x,
            c.y,
            gradient.outer_radius,
        ) {
            Ok(ramp) => ramp,
            Err(err) => {
                log::warn!("radial gradient rejected: {:?}", err);
                return;
            }
        };
        let stops = ramp
            .add_color_stop(0.0, &gradient.inner.to_css())
            .and_then(|_| ramp.add_color_stop(1.0, &gradient.outer.to_css()));
        if let Err(err) = stops {
            log::warn!("gradient stop rejected: {:?}", err);
            return;
        }

        self.context.set_fill_style_canvas_gradient(&ramp);
        self.current_fill = None;
        self.fill_disk(c, gradient.outer_radius);
    }

    /// Resize the backing store; this also resets the context state
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.current_fill = None;
    }
}
