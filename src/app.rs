// ============================================================================
// APP - Controlador de la página
// ============================================================================
// Enlaza botones → viewmodels → vistas. Cada intento termina en un estado
// listo para reintentar (salvo una petición que nunca responde).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, clear_inputs, focus_input, input_value, on_click_id, require_element};
use crate::scanner::QrScanner;
use crate::state::AppState;
use crate::viewmodels::{OwnerForm, ParkingViewModel, RegistrationViewModel, ScanFlow, VehicleForm};
use crate::views::scan_panel::CHECKIN_SPOT_INPUT;
use crate::views::{
    bind_scan_panel, messages, render_registration_result, render_vehicle_status, reset_scan_panel,
    set_cancel_visible, update_status_by_id, StatusKind,
};

// Registro de propietario
const OWNER_NAME_INPUT: &str = "owner-name";
const OWNER_PHONE_INPUT: &str = "owner-phone";
const OWNER_STATUS: &str = "owner-reg-status";
const REGISTER_OWNER_BUTTON: &str = "register-owner-btn";

// Registro de vehículo
const PLATE_INPUT: &str = "reg-plate";
const VEHICLE_OWNER_PHONE_INPUT: &str = "vehicle-owner-phone";
const VEHICLE_STATUS: &str = "reg-status";
const VEHICLE_QR_RESULT: &str = "reg-qr-result";
const REGISTER_VEHICLE_BUTTON: &str = "register-vehicle-btn";

// Detalle de la consulta de estado
const STATUS_DETAILS: &str = "vehicle-status-details";

#[cfg(feature = "spot-tracking")]
const PARKING_LOT: &str = "parking-lot";

/// Aplicación principal
pub struct App {
    state: AppState,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Registra los listeners de la página (una sola vez) y deja cada flujo en el paso 1
    pub fn bind(&self) -> Result<(), JsValue> {
        bind_button(REGISTER_OWNER_BUTTON, || spawn_local(register_owner()))?;
        bind_button(REGISTER_VEHICLE_BUTTON, || spawn_local(register_vehicle()))?;

        for flow in ScanFlow::ALL {
            let ids = flow.ids();
            bind_scan_panel(&self.state, flow);
            reset_scan_panel(&self.state, flow);

            let state = self.state.clone();
            bind_button(ids.scan_button, move || spawn_local(scan(state.clone(), flow)))?;

            if let Some(confirm) = ids.confirm_button {
                let state = self.state.clone();
                bind_button(confirm, move || spawn_local(submit(state.clone(), flow)))?;
            }

            if let Some(cancel) = ids.cancel_button {
                let state = self.state.clone();
                bind_button(cancel, move || cancel_scan(&state, flow))?;
            }
        }

        #[cfg(feature = "spot-tracking")]
        spawn_local(refresh_parking_lot());

        log::info!("✅ [APP] Página enlazada");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn bind_button<F>(id: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    if !on_click_id(id, move |_e| handler())? {
        log::warn!("⚠️ [APP] Botón #{} no encontrado, flujo deshabilitado", id);
    }
    Ok(())
}

async fn register_owner() {
    let form = OwnerForm {
        name: input_value(OWNER_NAME_INPUT),
        phone_number: input_value(OWNER_PHONE_INPUT),
    };
    if let Err(e) = form.validate() {
        update_status_by_id(OWNER_STATUS, &e.to_string(), StatusKind::Error);
        return;
    }

    update_status_by_id(OWNER_STATUS, messages::REGISTERING_OWNER, StatusKind::Success);
    match RegistrationViewModel::new().register_owner(&form).await {
        Ok(owner) => {
            update_status_by_id(OWNER_STATUS, &messages::owner_registered(&owner), StatusKind::Success);
            clear_inputs(&[OWNER_NAME_INPUT, OWNER_PHONE_INPUT]);
        }
        Err(e) => {
            log::error!("❌ [APP] Error registrando propietario: {}", e);
            update_status_by_id(OWNER_STATUS, &e.to_string(), StatusKind::Error);
        }
    }
}

async fn register_vehicle() {
    let form = VehicleForm {
        license_plate: input_value(PLATE_INPUT),
        owner_phone_number: input_value(VEHICLE_OWNER_PHONE_INPUT),
    };
    if let Err(e) = form.validate() {
        update_status_by_id(VEHICLE_STATUS, &e.to_string(), StatusKind::Error);
        return;
    }

    update_status_by_id(VEHICLE_STATUS, messages::REGISTERING_VEHICLE, StatusKind::Success);
    let result_region = require_element(VEHICLE_QR_RESULT);
    if let Some(region) = &result_region {
        clear_children(region);
    }

    match RegistrationViewModel::new().register_vehicle(&form).await {
        Ok(response) => {
            update_status_by_id(VEHICLE_STATUS, &messages::vehicle_registered(&response), StatusKind::Success);
            clear_inputs(&[PLATE_INPUT, VEHICLE_OWNER_PHONE_INPUT]);

            if let Some(region) = &result_region {
                let rendered = render_registration_result(&response).and_then(|block| append_child(region, &block));
                if let Err(e) = rendered {
                    log::error!("❌ [APP] Error mostrando el QR registrado: {:?}", e);
                }
            }
        }
        Err(e) => {
            log::error!("❌ [APP] Error registrando vehículo: {}", e);
            update_status_by_id(VEHICLE_STATUS, &e.to_string(), StatusKind::Error);
            if let Some(region) = &result_region {
                clear_children(region);
            }
        }
    }
}

/// Paso 1: escanear. Check-in/check-out esperan confirmación; la consulta se envía ya.
async fn scan(state: AppState, flow: ScanFlow) {
    let ids = flow.ids();
    log::info!("📷 [APP] Escaneo solicitado para {:?}", flow);

    update_status_by_id(ids.status, messages::STARTING_SCANNER, StatusKind::Success);
    reset_scan_panel(&state, flow);
    if flow == ScanFlow::VehicleStatus {
        if let Some(details) = require_element(STATUS_DETAILS) {
            clear_children(&details);
        }
    }

    // La cámara es compartida: el escaneo de otro flujo sin código pendiente se cancela
    for other in ScanFlow::ALL {
        if other != flow && state.pending_code(other).is_none() {
            set_cancel_visible(other, false);
        }
    }
    let turn = state.begin_scan(flow);
    set_cancel_visible(flow, true);

    let scanner = QrScanner::shared();
    let result = scanner.scan(ids.scanner_region).await;
    let still_owner = state.end_scan(turn);

    match result {
        Ok(qr_code) => {
            state.set_pending(flow, qr_code);
            update_status_by_id(ids.status, flow.scanned_message(), StatusKind::Success);

            if flow.requires_confirmation() {
                if flow == ScanFlow::CheckIn {
                    focus_input(CHECKIN_SPOT_INPUT, false);
                }
            } else {
                submit(state, flow).await;
            }
        }
        Err(e) if e.is_cancelled() => {
            log::info!("⏹️ [APP] Escaneo de {:?} cancelado", flow);
            if still_owner {
                set_cancel_visible(flow, false);
            }
        }
        Err(e) => {
            log::error!("❌ [APP] Error del escáner en {:?}: {}", flow, e);
            set_cancel_visible(flow, false);
            update_status_by_id(ids.status, &messages::scanner_error(&e.user_message()), StatusKind::Error);
            if still_owner {
                scanner.stop().await;
            }
        }
    }
}

/// Paso 2: enviar el código pendiente al backend
async fn submit(state: AppState, flow: ScanFlow) {
    let ids = flow.ids();
    let spot_number = (flow == ScanFlow::CheckIn).then(|| input_value(CHECKIN_SPOT_INPUT));

    let submission = match ParkingViewModel::prepare(flow, state.pending_code(flow), spot_number) {
        Ok(submission) => submission,
        Err(e) => {
            update_status_by_id(ids.status, &e.to_string(), StatusKind::Error);
            if flow == ScanFlow::CheckIn {
                focus_input(CHECKIN_SPOT_INPUT, false);
            }
            return;
        }
    };

    update_status_by_id(ids.status, flow.progress_message(), StatusKind::Success);
    match ParkingViewModel::new().submit(&submission).await {
        Ok(response) => {
            let message = match flow {
                ScanFlow::CheckIn => messages::checked_in(&response),
                ScanFlow::CheckOut => messages::checked_out(&response, &CONFIG.currency_symbol),
                ScanFlow::VehicleStatus => messages::vehicle_status_headline(&response),
            };
            update_status_by_id(ids.status, &message, StatusKind::Success);

            if flow == ScanFlow::VehicleStatus {
                show_vehicle_status(&response);
            }

            #[cfg(feature = "spot-tracking")]
            if flow != ScanFlow::VehicleStatus {
                refresh_parking_lot().await;
            }

            reset_scan_panel(&state, flow);
        }
        Err(e) => {
            log::error!("❌ [APP] {:?} falló: {}", flow, e);
            update_status_by_id(ids.status, &e.to_string(), StatusKind::Error);

            // Con plazas numeradas el check-in conserva el paso 2 para corregir la plaza
            #[cfg(feature = "spot-tracking")]
            if flow == ScanFlow::CheckIn {
                focus_input(CHECKIN_SPOT_INPUT, true);
                return;
            }

            // scan() ya liberó la cámara antes de devolver el código
            reset_scan_panel(&state, flow);
        }
    }
}

fn cancel_scan(state: &AppState, flow: ScanFlow) {
    log::info!("↩️ [APP] {:?} cancelado por el usuario", flow);
    if state.is_scanning(flow) {
        QrScanner::shared().stop_in_background();
    }
    reset_scan_panel(state, flow);
    update_status_by_id(flow.ids().status, "", StatusKind::Success);
}

fn show_vehicle_status(response: &crate::models::VehicleStatusResponse) {
    let Some(details) = require_element(STATUS_DETAILS) else {
        return;
    };
    clear_children(&details);
    let rendered = render_vehicle_status(response, &CONFIG.currency_symbol).and_then(|list| append_child(&details, &list));
    if let Err(e) = rendered {
        log::error!("❌ [APP] Error mostrando el estado del vehículo: {:?}", e);
    }
}

#[cfg(feature = "spot-tracking")]
async fn refresh_parking_lot() {
    use crate::views::{render_parking_lot, render_parking_lot_error, render_parking_lot_loading};

    let Some(container) = require_element(PARKING_LOT) else {
        return;
    };
    let _ = render_parking_lot_loading(&container);

    let rendered = match ParkingViewModel::new().load_spots().await {
        Ok(spots) => {
            log::info!("🅿️ [APP] {} plazas cargadas", spots.len());
            render_parking_lot(&container, &spots)
        }
        Err(e) => {
            log::error!("❌ [APP] Error cargando plazas: {}", e);
            render_parking_lot_error(&container, &e.to_string())
        }
    };
    if let Err(e) = rendered {
        log::error!("❌ [APP] Error pintando el parking: {:?}", e);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use crate::dom::{get_element_by_id, get_input, has_class, is_visible};
    use crate::scanner::ScanError;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(html: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_inner_html(html);
        document.body().unwrap().append_child(&container).unwrap();
        container
    }

    /// `window.fetch` falso que responde siempre lo mismo; al soltarlo vuelve el original
    struct FetchStub {
        original: JsValue,
    }

    impl FetchStub {
        fn respond(status: u16, body: &str) -> Self {
            let window = web_sys::window().unwrap();
            let original = js_sys::Reflect::get(&window, &"fetch".into()).unwrap();
            let source = format!(
                r#"
                window.__fetchCalls += 1;
                window.__lastUrl = typeof input === 'string' ? input : input.url;
                const sent = typeof input === 'string' ? Promise.resolve((init && init.body) || '') : input.text();
                return sent.then(function (text) {{
                    window.__lastBody = text;
                    return new Response({body}, {{ status: {status}, headers: {{ 'Content-Type': 'application/json' }} }});
                }});
                "#,
                body = serde_json::to_string(body).unwrap(),
                status = status,
            );
            let stub = js_sys::Function::new_with_args("input, init", &source);
            js_sys::Reflect::set(&window, &"__fetchCalls".into(), &JsValue::from_f64(0.0)).unwrap();
            js_sys::Reflect::set(&window, &"fetch".into(), &stub).unwrap();
            Self { original }
        }

        fn global(name: &str) -> JsValue {
            js_sys::Reflect::get(&web_sys::window().unwrap(), &name.into()).unwrap()
        }

        fn calls(&self) -> f64 {
            Self::global("__fetchCalls").as_f64().unwrap_or(0.0)
        }

        fn last_url(&self) -> String {
            Self::global("__lastUrl").as_string().unwrap_or_default()
        }

        fn last_body(&self) -> serde_json::Value {
            let text = Self::global("__lastBody").as_string().unwrap_or_default();
            serde_json::from_str(&text).unwrap()
        }
    }

    impl Drop for FetchStub {
        fn drop(&mut self) {
            let window = web_sys::window().unwrap();
            js_sys::Reflect::set(&window, &"fetch".into(), &self.original).unwrap();
        }
    }

    const CHECKOUT_PANEL: &str = r#"
        <button id="checkout-scan-btn"></button>
        <div id="checkout-scanner-region"></div>
        <button id="checkout-cancel-btn"></button>
        <div id="checkout-step2"><span id="checkout-qr-data"></span></div>
        <p id="checkout-status" class="status"></p>"#;

    #[wasm_bindgen_test]
    async fn owner_registration_reports_and_clears_inputs() {
        let container = mount(
            r#"<input id="owner-name" value=" Alice ">
               <input id="owner-phone" value="555-1111">
               <p id="owner-reg-status" class="status"></p>"#,
        );
        let fetch = FetchStub::respond(201, r#"{"id": 1, "name": "Alice", "phone_number": "555-1111"}"#);

        register_owner().await;

        let status = get_element_by_id(OWNER_STATUS).unwrap();
        assert_eq!(status.text_content().unwrap(), "Owner 'Alice' (555-1111) registered!");
        assert!(has_class(&status, "success"));
        assert_eq!(get_input(OWNER_NAME_INPUT).unwrap().value(), "");
        assert_eq!(get_input(OWNER_PHONE_INPUT).unwrap().value(), "");

        assert_eq!(fetch.calls(), 1.0);
        assert!(fetch.last_url().ends_with("/owners"));
        assert_eq!(fetch.last_body(), serde_json::json!({"name": "Alice", "phone_number": "555-1111"}));

        drop(fetch);
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn vehicle_registration_renders_qr_block() {
        let container = mount(
            r#"<input id="reg-plate" value="KA01">
               <input id="vehicle-owner-phone" value="555-1111">
               <p id="reg-status" class="status"></p>
               <div id="reg-qr-result"></div>"#,
        );
        let fetch = FetchStub::respond(
            200,
            r#"{"message": "Vehicle 'KA01' registered for owner phone '555-1111'.",
                "vehicle": {"id": 1, "license_plate": "KA01", "qr_code": "QR-KA01",
                            "owner": {"id": 3, "name": "Alice", "phone_number": "555-1111"}},
                "qr_code_path": "/qrcodes/QR-KA01.png"}"#,
        );

        register_vehicle().await;

        let status = get_element_by_id(VEHICLE_STATUS).unwrap();
        assert_eq!(status.text_content().unwrap(), "Vehicle 'KA01' registered for owner phone '555-1111'.");
        let result = get_element_by_id(VEHICLE_QR_RESULT).unwrap();
        assert_eq!(result.query_selector_all(".qr-result").unwrap().length(), 1);
        assert_eq!(get_input(PLATE_INPUT).unwrap().value(), "");
        assert_eq!(fetch.last_body(), serde_json::json!({"license_plate": "KA01", "owner_phone_number": "555-1111"}));

        drop(fetch);
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn check_out_shows_duration_and_fee_then_resets() {
        let container = mount(CHECKOUT_PANEL);
        let fetch = FetchStub::respond(
            200,
            r#"{"message": "Vehicle KA01 checked out.", "is_checked_in": false, "duration_hours": 3.25, "fee": 12.5}"#,
        );
        let state = AppState::new();
        bind_scan_panel(&state, ScanFlow::CheckOut);
        state.set_pending(ScanFlow::CheckOut, "QR123".to_string());

        submit(state.clone(), ScanFlow::CheckOut).await;

        let status = get_element_by_id("checkout-status").unwrap();
        assert_eq!(
            status.text_content().unwrap(),
            format!("Vehicle KA01 checked out. Duration: 3.3 hrs. Fee: {}12.50", CONFIG.currency_symbol)
        );
        assert!(has_class(&status, "success"));
        assert_eq!(state.pending_code(ScanFlow::CheckOut), None);
        assert!(is_visible(&get_element_by_id("checkout-scan-btn").unwrap()));
        assert!(!is_visible(&get_element_by_id("checkout-step2").unwrap()));
        assert!(!is_visible(&get_element_by_id("checkout-cancel-btn").unwrap()));
        assert_eq!(fetch.last_body(), serde_json::json!({"qr_code": "QR123"}));

        drop(fetch);
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn check_out_error_shows_backend_detail() {
        let container = mount(CHECKOUT_PANEL);
        let fetch = FetchStub::respond(404, r#"{"detail": "X"}"#);
        let state = AppState::new();
        bind_scan_panel(&state, ScanFlow::CheckOut);
        state.set_pending(ScanFlow::CheckOut, "QR404".to_string());

        submit(state.clone(), ScanFlow::CheckOut).await;

        let status = get_element_by_id("checkout-status").unwrap();
        assert_eq!(status.text_content().unwrap(), "Check-out failed: X");
        assert!(has_class(&status, "error"));
        assert_eq!(state.pending_code(ScanFlow::CheckOut), None);
        assert!(is_visible(&get_element_by_id("checkout-scan-btn").unwrap()));
        assert_eq!(fetch.calls(), 1.0);

        drop(fetch);
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn scan_without_library_reports_in_flow_status() {
        // La página de test no carga html5-qrcode
        let container = mount(
            r#"<button id="status-scan-btn"></button>
               <div id="status-scanner-region"></div>
               <button id="status-cancel-btn"></button>
               <span id="status-qr-data"></span>
               <p id="vehicle-status-result" class="status"></p>
               <div id="vehicle-status-details"></div>"#,
        );
        let fetch = FetchStub::respond(200, "{}");
        let state = AppState::new();
        bind_scan_panel(&state, ScanFlow::VehicleStatus);

        scan(state.clone(), ScanFlow::VehicleStatus).await;

        let status = get_element_by_id("vehicle-status-result").unwrap();
        assert_eq!(
            status.text_content().unwrap(),
            messages::scanner_error(&ScanError::LibraryUnavailable.user_message())
        );
        assert!(has_class(&status, "error"));
        assert!(!is_visible(&get_element_by_id("status-cancel-btn").unwrap()));
        assert!(!state.is_scanning(ScanFlow::VehicleStatus));
        assert_eq!(fetch.calls(), 0.0);

        drop(fetch);
        container.remove();
    }
}
