use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::domain::config::CosmosConfig;
use crate::render::canvas::CanvasSurface;
use crate::render::surface::Surface;
use crate::simulation::CosmosCore;

use super::animation_loop::{AnimationLoop, FrameOutcome};

type SharedLoop = Rc<RefCell<AnimationLoop<CanvasSurface>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Browser driver: binds a canvas, follows window resizes and ticks once
/// per `requestAnimationFrame`.
#[wasm_bindgen]
pub struct CosmosApp {
    animation: SharedLoop,
    frame_callback: FrameCallback,
    pending_request: Rc<Cell<Option<i32>>>,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl CosmosApp {
    /// Attach to `<canvas id={canvas_id}>`, sized to the window.
    /// `config_json` is an optional `CosmosConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<CosmosApp, JsValue> {
        let window = window()?;
        let canvas = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", canvas_id)))?;

        let config = match config_json {
            Some(json) => CosmosConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
            None => CosmosConfig::default(),
        };

        let (width, height) = window_size(&window)?;
        let core = CosmosCore::with_config(width, height, config).map_err(|e| JsValue::from_str(&e))?;
        let mut surface = CanvasSurface::from_canvas(canvas)?;
        surface.resize(core.frame().width() as u32, core.frame().height() as u32);

        Ok(CosmosApp {
            animation: Rc::new(RefCell::new(AnimationLoop::new(core, surface))),
            frame_callback: Rc::new(RefCell::new(None)),
            pending_request: Rc::new(Cell::new(None)),
            resize_listener: None,
        })
    }

    /// Begin animating; calling it on a running app does nothing
    pub fn start(&mut self) -> Result<(), JsValue> {
        if !self.animation.borrow_mut().start() {
            return Ok(());
        }
        if let Err(err) = self.schedule_first_frame() {
            // roll back so a later start() can retry
            self.animation.borrow_mut().stop();
            return Err(err);
        }
        Ok(())
    }

    /// Cancel the pending frame; safe to call repeatedly
    pub fn stop(&mut self) {
        if !self.animation.borrow_mut().stop() {
            return;
        }
        if let Some(id) = self.pending_request.take() {
            if let Ok(window) = window() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {:?}", err);
                }
            }
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.animation.borrow().is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.animation.borrow().core().particle_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.animation.borrow().core().ticks()
    }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 {
        self.animation.borrow().core().generation()
    }
}

impl CosmosApp {
    fn schedule_first_frame(&mut self) -> Result<(), JsValue> {
        if self.resize_listener.is_none() {
            self.install_resize_listener()?;
        }
        if self.frame_callback.borrow().is_none() {
            self.install_frame_callback();
        }
        let id = request_frame(&self.frame_callback)?;
        self.pending_request.set(Some(id));
        Ok(())
    }

    fn install_frame_callback(&self) {
        let animation = self.animation.clone();
        let pending = self.pending_request.clone();
        let callback = self.frame_callback.clone();

        *self.frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(None);
            if animation.borrow_mut().frame() == FrameOutcome::Halted {
                return;
            }
            // schedule next frame only after this one completed
            match request_frame(&callback) {
                Ok(id) => pending.set(Some(id)),
                Err(err) => {
                    log::warn!("requestAnimationFrame failed, stopping: {:?}", err);
                    animation.borrow_mut().stop();
                }
            }
        }) as Box<dyn FnMut()>));
    }

    fn install_resize_listener(&mut self) -> Result<(), JsValue> {
        let animation = self.animation.clone();
        let listener = Closure::wrap(Box::new(move || {
            let size = window().and_then(|w| window_size(&w));
            match size {
                Ok((width, height)) => animation.borrow_mut().resize(width, height),
                Err(err) => log::warn!("resize ignored: {:?}", err),
            }
        }) as Box<dyn FnMut()>);

        window()?.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;
        self.resize_listener = Some(listener);
        Ok(())
    }
}

impl Drop for CosmosApp {
    fn drop(&mut self) {
        self.stop();
        if let (Some(listener), Ok(window)) = (self.resize_listener.take(), window()) {
            if let Err(err) =
                window.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            {
                log::warn!("removing resize listener failed: {:?}", err);
            }
        }
        // the frame closure holds a handle to its own cell; break the cycle
        self.frame_callback.borrow_mut().take();
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn window_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width, height))
}

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    let borrowed = callback.borrow();
    let closure = borrowed
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
    window()?.request_animation_frame(closure.as_ref().unchecked_ref())
}
