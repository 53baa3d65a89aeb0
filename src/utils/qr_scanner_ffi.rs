// ============================================================================
// QR SCANNER FFI - Foreign Function Interface para html5-qrcode
// ============================================================================
// Bindings a la clase global `Html5Qrcode` - Sin estado, sin lógica
// ============================================================================

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::ScannerConfig;

#[wasm_bindgen]
extern "C" {
    /// Instancia de html5-qrcode ligada a un elemento del DOM
    pub type Html5Qrcode;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(element_id: &str) -> Result<Html5Qrcode, JsValue>;

    /// start(cameraConstraint, config, onDecodeSuccess, onDecodeFailure) -> Promise
    #[wasm_bindgen(method, catch)]
    pub fn start(
        this: &Html5Qrcode,
        camera: &JsValue,
        config: &JsValue,
        on_decode_success: &js_sys::Function,
        on_decode_failure: &js_sys::Function,
    ) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn stop(this: &Html5Qrcode) -> Result<js_sys::Promise, JsValue>;

    /// Elimina la UI renderizada por el escáner
    #[wasm_bindgen(method, catch)]
    pub fn clear(this: &Html5Qrcode) -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter, js_name = isScanning)]
    pub fn is_scanning(this: &Html5Qrcode) -> bool;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartConfig {
    fps: u32,
    remember_last_used_camera: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CameraConstraint<'a> {
    facing_mode: &'a str,
}

#[derive(Serialize)]
struct QrBox {
    width: u32,
    height: u32,
}

/// Verifica que el script de html5-qrcode esté cargado en la página
pub fn is_library_loaded() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("Html5Qrcode")).ok())
        .map(|ctor| ctor.is_function())
        .unwrap_or(false)
}

/// `{ facingMode: "environment" }`
pub fn camera_constraint(config: &ScannerConfig) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&CameraConstraint {
        facing_mode: &config.facing_mode,
    })
    .map_err(JsValue::from)
}

/// Objeto de configuración de start(); `qrbox` se calcula en JS con el callback dado
pub fn start_config(config: &ScannerConfig, qrbox: &js_sys::Function) -> Result<JsValue, JsValue> {
    let value = serde_wasm_bindgen::to_value(&StartConfig {
        fps: config.fps,
        remember_last_used_camera: config.remember_last_used_camera,
    })
    .map_err(JsValue::from)?;
    js_sys::Reflect::set(&value, &JsValue::from_str("qrbox"), qrbox)?;
    Ok(value)
}

/// `{ width, height }` cuadrado devuelto por el callback de qrbox
pub fn qrbox_value(edge: u32) -> JsValue {
    serde_wasm_bindgen::to_value(&QrBox { width: edge, height: edge }).unwrap_or(JsValue::NULL)
}
