// ============================================================================
// PARKING QR CLIENT - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Validación + llamadas al backend por flujo
// - Services: SOLO comunicación API
// - Scanner: Sesión única de cámara (html5-qrcode)
// - State: Código QR pendiente por flujo con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod scanner;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::scanner::QrScanner;

// Instancia global de la App (los listeners viven toda la página)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Parking QR Client - Rust Puro + MVVM");
    log::info!("🌐 [MAIN] Backend: {}", CONFIG.api_base_url);

    let app = App::new();
    app.bind()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Detiene la cámara activa (llamable desde JavaScript, p. ej. en `pagehide`)
#[wasm_bindgen]
pub fn stop_scanner() {
    QrScanner::shared().stop_in_background();
}

/// Estado del escáner como texto ("Idle", "Scanning"...), útil para depurar
#[wasm_bindgen]
pub fn scanner_state() -> String {
    format!("{:?}", QrScanner::shared().state())
}
