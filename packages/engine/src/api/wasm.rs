//! `#[wasm_bindgen]` wrappers around the page effects. The particle field
//! itself is exported as `Cosmos` (headless) and `CosmosApp` (canvas driver).

use wasm_bindgen::prelude::*;

use crate::core::Rng;
use crate::effects::decrypt::{DecryptText, FRAME_INTERVAL_MS};
use crate::effects::signup::{SignupForm, SubmitOutcome, SUBSCRIBE_ENDPOINT};
use crate::effects::tilt::TiltTransform;
use crate::effects::RevealTracker;

pub use crate::simulation::Cosmos;

/// Scrambled heading reveal. JS calls `next_frame` every `interval_ms`
/// until it returns `undefined`.
#[wasm_bindgen]
pub struct DecryptEffect {
    inner: DecryptText,
}

#[wasm_bindgen]
impl DecryptEffect {
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> DecryptEffect {
        DecryptEffect {
            inner: DecryptText::new(text, Rng::from_entropy()),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn interval_ms(&self) -> u32 {
        FRAME_INTERVAL_MS
    }

    #[wasm_bindgen(getter)]
    pub fn finished(&self) -> bool {
        self.inner.is_finished()
    }

    pub fn next_frame(&mut self) -> Option<String> {
        self.inner.next_frame()
    }
}

/// Pointer-driven card tilt
#[wasm_bindgen]
pub struct TiltEffect;

#[wasm_bindgen]
impl TiltEffect {
    /// CSS `transform` for a pointer at (`x`, `y`) inside a `width`x`height`
    /// card; `undefined` on narrow viewports, where cards stay flat
    pub fn transform(viewport_width: f64, x: f64, y: f64, width: f64, height: f64) -> Option<String> {
        TiltTransform::for_pointer(viewport_width, x, y, width, height).map(|t| t.to_css())
    }

    pub fn rest() -> String {
        TiltTransform::REST.to_css()
    }
}

/// Scroll-reveal bookkeeping for `IntersectionObserver` callbacks
#[wasm_bindgen]
pub struct RevealController {
    inner: RevealTracker,
}

#[wasm_bindgen]
impl RevealController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RevealController {
        RevealController {
            inner: RevealTracker::default(),
        }
    }

    pub fn observe(&mut self, id: u32) {
        self.inner.observe(id);
    }

    /// True exactly once per element: add the `visible` class and unobserve
    pub fn on_intersection(&mut self, id: u32, is_intersecting: bool, ratio: f64) -> bool {
        self.inner.on_intersection(id, is_intersecting, ratio)
    }

    #[wasm_bindgen(getter)]
    pub fn pending(&self) -> usize {
        self.inner.pending()
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}

/// Submit-button state for the access form
#[wasm_bindgen]
pub struct SignupController {
    form: SignupForm,
}

#[wasm_bindgen]
impl SignupController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SignupController {
        SignupController {
            form: SignupForm::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn endpoint(&self) -> String {
        SUBSCRIBE_ENDPOINT.to_string()
    }

    /// JSON body for the POST; throws if a submission is already in flight
    pub fn submit(&mut self, email: &str, organization: &str) -> Result<String, JsValue> {
        self.form
            .submit(email, organization)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Feed back `response.ok`, or `false` on a network error
    pub fn resolve(&mut self, ok: bool) -> Result<(), JsValue> {
        self.form
            .resolve(SubmitOutcome::from_response_ok(ok))
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        self.form.advance(elapsed_ms)
    }

    pub fn take_clear_fields(&mut self) -> bool {
        self.form.take_clear_fields()
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.form.state().label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn background(&self) -> String {
        self.form.state().background().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn color(&self) -> String {
        self.form.state().foreground().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn disabled(&self) -> bool {
        self.form.state().disabled()
    }
}

impl Default for SignupController {
    fn default() -> Self {
        Self::new()
    }
}
