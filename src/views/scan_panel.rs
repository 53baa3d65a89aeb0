// ============================================================================
// SCAN PANEL VIEW - Paso 1 (botón de escaneo) / paso 2 (confirmación)
// ============================================================================

use crate::dom::{clear_inputs, set_text_by_id, set_visible_by_id};
use crate::state::AppState;
use crate::viewmodels::ScanFlow;

/// Input de plaza del check-in (solo existe en la variante con plazas numeradas)
pub const CHECKIN_SPOT_INPUT: &str = "checkin-spot";

/// Enlaza la UI del flujo a su código pendiente: con código se muestra el paso 2
/// y se oculta el botón de escaneo; sin código, al revés.
pub fn bind_scan_panel(state: &AppState, flow: ScanFlow) {
    let ids = flow.ids();
    state.pending(flow).subscribe(move |code| {
        set_text_by_id(ids.qr_data, code.as_deref().unwrap_or(""));
        if let Some(step2) = ids.step2 {
            set_visible_by_id(step2, code.is_some());
        }
        let awaiting_confirmation = code.is_some() && flow.requires_confirmation();
        set_visible_by_id(ids.scan_button, !awaiting_confirmation);
        set_cancel_visible(flow, awaiting_confirmation);
    });
}

/// Botón de cancelar del flujo (mientras la cámara está abierta no hay código pendiente)
pub fn set_cancel_visible(flow: ScanFlow, visible: bool) {
    if let Some(cancel) = flow.ids().cancel_button {
        set_visible_by_id(cancel, visible);
    }
}

/// Vuelve al paso 1 (listo para escanear). No toca la región de estado.
pub fn reset_scan_panel(state: &AppState, flow: ScanFlow) {
    state.clear_pending(flow);
    if flow == ScanFlow::CheckIn {
        clear_inputs(&[CHECKIN_SPOT_INPUT]);
    }
}
