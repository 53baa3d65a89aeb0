// ============================================================================
// QR SCANNER SESSION - Sesión única de cámara sobre html5-qrcode
// ============================================================================
// - scan(): espera un código decodificado (Result, sin callbacks anidados)
// - start(): variante con callbacks, envuelve scan()
// - stop(): idempotente, nunca falla hacia el llamador
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::{ScanError, ScannerEvent, ScannerState};
use crate::config::{ScannerConfig, CONFIG};
use crate::dom::get_element_by_id;
use crate::utils::qr_scanner_ffi::{self, Html5Qrcode};

const IDLE_POLL_MS: u32 = 50;

// Una sola sesión por página
thread_local! {
    static SHARED_SCANNER: QrScanner = QrScanner::new(CONFIG.scanner_config.clone());
}

/// resolve() de la promesa que espera scan(); se resuelve con el texto,
/// o con `undefined` si la sesión se detiene antes
struct PendingDecode {
    resolve: js_sys::Function,
}

/// Closures JS que deben vivir mientras exista la instancia
struct ScanCallbacks {
    on_success: Closure<dyn FnMut(JsValue, JsValue)>,
    on_failure: Closure<dyn FnMut(JsValue)>,
    qrbox: Closure<dyn FnMut(f64, f64) -> JsValue>,
}

#[derive(Default)]
struct Session {
    state: ScannerState,
    instance: Option<Html5Qrcode>,
    pending: Option<PendingDecode>,
    callbacks: Option<ScanCallbacks>,
    /// Se incrementa en cada scan()/stop(); un arranque con generación vieja se descarta
    generation: u64,
}

#[derive(Clone)]
pub struct QrScanner {
    session: Rc<RefCell<Session>>,
    config: ScannerConfig,
}

impl QrScanner {
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session::default())),
            config,
        }
    }

    /// Escáner compartido de la página
    pub fn shared() -> QrScanner {
        SHARED_SCANNER.with(|scanner| scanner.clone())
    }

    pub fn state(&self) -> ScannerState {
        self.session.borrow().state
    }

    /// Arranca una sesión y notifica por callbacks. Una cancelación no llama a ninguno.
    pub fn start<S, E>(&self, region_id: &str, on_success: S, on_error: E)
    where
        S: FnOnce(String) + 'static,
        E: FnOnce(String) + 'static,
    {
        let scanner = self.clone();
        let region_id = region_id.to_string();
        spawn_local(async move {
            match scanner.scan(&region_id).await {
                Ok(text) => on_success(text),
                Err(e) if e.is_cancelled() => {
                    log::info!("⏹️ [SCANNER] Escaneo cancelado en #{}", region_id);
                }
                Err(e) => on_error(e.user_message()),
            }
        });
    }

    /// Arranca una sesión en `region_id` y espera el primer código decodificado.
    /// La sesión ya está detenida cuando devuelve Ok.
    pub async fn scan(&self, region_id: &str) -> Result<String, ScanError> {
        let generation = {
            let mut session = self.session.borrow_mut();
            session.generation += 1;
            session.generation
        };
        log::info!("📷 [SCANNER] Iniciando escáner en #{}", region_id);

        // Arranque serializado detrás de cualquier sesión anterior
        self.release().await;
        self.wait_until_idle().await;
        if !self.is_current(generation) {
            return Err(ScanError::Cancelled);
        }

        if get_element_by_id(region_id).is_none() {
            log::error!("❌ [SCANNER] Región #{} no encontrada", region_id);
            return Err(ScanError::RegionNotFound(region_id.to_string()));
        }
        if !qr_scanner_ffi::is_library_loaded() {
            log::error!("❌ [SCANNER] html5-qrcode no está cargado");
            return Err(ScanError::LibraryUnavailable);
        }

        let (decoded, pending) = pending_decode()?;
        let instance = Html5Qrcode::new(region_id).map_err(|e| ScanError::from_js(&e))?;
        let callbacks = self.build_callbacks();
        let camera = qr_scanner_ffi::camera_constraint(&self.config).map_err(|e| ScanError::from_js(&e))?;
        let start_config = qr_scanner_ffi::start_config(&self.config, callbacks.qrbox.as_ref().unchecked_ref())
            .map_err(|e| ScanError::from_js(&e))?;

        let start = instance.start(
            &camera,
            &start_config,
            callbacks.on_success.as_ref().unchecked_ref(),
            callbacks.on_failure.as_ref().unchecked_ref(),
        );

        self.transition(ScannerEvent::StartRequested);
        {
            let mut session = self.session.borrow_mut();
            session.instance = Some(instance);
            session.pending = Some(pending);
            session.callbacks = Some(callbacks);
        }

        let started = match start {
            Ok(promise) => JsFuture::from(promise).await,
            Err(e) => Err(e),
        };
        if let Err(e) = started {
            let error = ScanError::from_js(&e);
            log::error!("❌ [SCANNER] Error arrancando la cámara: {}", error);
            self.discard_failed_start();
            return Err(error);
        }

        self.transition(ScannerEvent::Started);
        if !self.is_current(generation) {
            // stop() o un scan() posterior llegó mientras arrancaba
            self.release().await;
            return Err(ScanError::Cancelled);
        }
        log::info!("✅ [SCANNER] Escaneando en #{}", region_id);

        let decoded = JsFuture::from(decoded).await;
        // Un código decodificado antes de Scanning deja la cámara abierta
        self.release().await;
        match decoded {
            Ok(value) => value.as_string().ok_or(ScanError::Cancelled),
            Err(_) => Err(ScanError::Cancelled),
        }
    }

    /// Detiene la sesión activa, si existe. Seguro de llamar varias veces.
    pub async fn stop(&self) {
        self.session.borrow_mut().generation += 1;
        self.release().await;
    }

    /// stop() para handlers síncronos
    pub fn stop_in_background(&self) {
        let scanner = self.clone();
        spawn_local(async move { scanner.stop().await });
    }

    fn is_current(&self, generation: u64) -> bool {
        self.session.borrow().generation == generation
    }

    fn transition(&self, event: ScannerEvent) {
        let mut session = self.session.borrow_mut();
        match session.state.next(event) {
            Some(next) => {
                log::debug!("🔁 [SCANNER] {:?} --{:?}--> {:?}", session.state, event, next);
                session.state = next;
            }
            None => log::warn!("⚠️ [SCANNER] Transición inválida {:?} en {:?}", event, session.state),
        }
    }

    async fn wait_until_idle(&self) {
        while self.state() != ScannerState::Idle {
            TimeoutFuture::new(IDLE_POLL_MS).await;
        }
    }

    // Libera cámara y UI de la región. Errores solo se registran.
    async fn release(&self) {
        match self.state() {
            ScannerState::Scanning => {}
            ScannerState::Idle => return,
            // Starting: quien arranca se detiene solo al ver su generación vieja
            other => {
                log::debug!("⏳ [SCANNER] stop diferido en estado {:?}", other);
                return;
            }
        }

        self.transition(ScannerEvent::StopRequested);
        let (instance, pending) = {
            let mut session = self.session.borrow_mut();
            (session.instance.take(), session.pending.take())
        };

        if let Some(pending) = pending {
            let _ = pending.resolve.call0(&JsValue::NULL);
        }

        if let Some(instance) = instance {
            if instance.is_scanning() {
                let stopped = match instance.stop() {
                    Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                    Err(e) => Err(e),
                };
                if let Err(e) = stopped {
                    log::error!("❌ [SCANNER] Error deteniendo la cámara: {:?}", e);
                }
            }
            if let Err(e) = instance.clear() {
                log::warn!("⚠️ [SCANNER] Error limpiando la UI del escáner: {:?}", e);
            }
        }

        self.session.borrow_mut().callbacks = None;
        self.transition(ScannerEvent::Stopped);
        log::info!("🛑 [SCANNER] Escáner detenido");
    }

    fn discard_failed_start(&self) {
        let instance = {
            let mut session = self.session.borrow_mut();
            session.pending = None;
            session.instance.take()
        };
        if let Some(instance) = instance {
            if let Err(e) = instance.clear() {
                log::warn!("⚠️ [SCANNER] Error limpiando la UI tras fallo de arranque: {:?}", e);
            }
        }
        self.session.borrow_mut().callbacks = None;
        self.transition(ScannerEvent::StartFailed);
    }

    fn build_callbacks(&self) -> ScanCallbacks {
        let on_success = {
            let scanner = self.clone();
            Closure::wrap(Box::new(move |decoded_text: JsValue, _result: JsValue| {
                // Solo el primer código cuenta; los siguientes frames llegan antes del stop
                let Some(pending) = scanner.session.borrow_mut().pending.take() else {
                    return;
                };
                let text = decoded_text.as_string().unwrap_or_default();
                log::info!("📱 [SCANNER] QR decodificado: {}", text);

                let scanner = scanner.clone();
                spawn_local(async move {
                    scanner.release().await;
                    let _ = pending.resolve.call1(&JsValue::NULL, &JsValue::from_str(&text));
                });
            }) as Box<dyn FnMut(JsValue, JsValue)>)
        };

        // Se llama en cada frame sin QR: ignorar
        let on_failure = Closure::wrap(Box::new(|_message: JsValue| {}) as Box<dyn FnMut(JsValue)>);

        let qrbox = {
            let config = self.config.clone();
            Closure::wrap(Box::new(move |width: f64, height: f64| {
                qr_scanner_ffi::qrbox_value(config.qrbox_edge(width, height))
            }) as Box<dyn FnMut(f64, f64) -> JsValue>)
        };

        ScanCallbacks {
            on_success,
            on_failure,
            qrbox,
        }
    }
}

fn pending_decode() -> Result<(js_sys::Promise, PendingDecode), ScanError> {
    let mut slot = None;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        slot = Some(PendingDecode { resolve });
    });
    slot.map(|pending| (promise, pending))
        .ok_or_else(|| ScanError::Unknown("Could not create scan promise.".to_string()))
}
