//! Browser binding
//!
//! JS owns the canvas, `requestAnimationFrame` and DOM listeners; it forwards
//! them here and draws from the JSON snapshot each frame.

use wasm_bindgen::prelude::*;

use crate::persistence::LocalStore;
use crate::session::Session;
use crate::sim::RngSource;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("FallDown loaded");
}

/// One game bound to a canvas
#[wasm_bindgen]
pub struct WebGame {
    session: Session<LocalStore>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<WebGame, JsValue> {
        let session = Session::new(width, height, LocalStore::new(), RngSource::thread())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { session })
    }

    /// Returns true if the engine was rebuilt
    pub fn resize(&mut self, width: f32, height: f32) -> Result<bool, JsValue> {
        self.session
            .resize(width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn start(&mut self, now: f64) {
        self.session.begin(now);
    }

    /// Advance to `now` (ms, from `requestAnimationFrame`)
    pub fn frame(&mut self, now: f64) {
        self.session.frame(now);
    }

    /// Current snapshot as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn screen(&self) -> String {
        match self.session.screen() {
            crate::session::Screen::Start => "start".to_string(),
            crate::session::Screen::Playing => "playing".to_string(),
            crate::session::Screen::GameOver => "gameover".to_string(),
        }
    }

    /// Returns true if the key is bound (caller should `preventDefault`)
    pub fn key_down(&mut self, key: &str) -> bool {
        self.session.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.session.key_up(key)
    }

    pub fn touch_start(&mut self, x: f32) {
        self.session.touch_start(x);
    }

    pub fn touch_move(&mut self, x: f32) {
        self.session.touch_move(x);
    }

    pub fn touch_end(&mut self) {
        self.session.touch_end();
    }
}
