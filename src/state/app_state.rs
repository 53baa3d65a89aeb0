// ============================================================================
// APP STATE - Estado efímero de la página
// ============================================================================
// El código QR pendiente de confirmar por cada flujo y qué flujo tiene la
// cámara abierta. Propietarios, vehículos y estancias viven en el backend.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::state::ReactiveState;
use crate::viewmodels::ScanFlow;

/// Código escaneado a la espera de confirmación
pub type PendingScan = ReactiveState<Option<String>>;

#[derive(Clone)]
pub struct AppState {
    check_in: PendingScan,
    check_out: PendingScan,
    vehicle_status: PendingScan,
    /// (turno, flujo) del escaneo en curso; cada scan() recibe un turno nuevo
    active_scan: Rc<Cell<Option<(u64, ScanFlow)>>>,
    next_turn: Rc<Cell<u64>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            check_in: ReactiveState::new(None),
            check_out: ReactiveState::new(None),
            vehicle_status: ReactiveState::new(None),
            active_scan: Rc::new(Cell::new(None)),
            next_turn: Rc::new(Cell::new(0)),
        }
    }

    pub fn pending(&self, flow: ScanFlow) -> &PendingScan {
        match flow {
            ScanFlow::CheckIn => &self.check_in,
            ScanFlow::CheckOut => &self.check_out,
            ScanFlow::VehicleStatus => &self.vehicle_status,
        }
    }

    pub fn pending_code(&self, flow: ScanFlow) -> Option<String> {
        self.pending(flow).get()
    }

    pub fn set_pending(&self, flow: ScanFlow, qr_code: String) {
        log::info!("📥 [STATE] QR pendiente para {:?}: {}", flow, qr_code);
        self.pending(flow).set(Some(qr_code));
    }

    /// Marca `flow` como dueño de la cámara; devuelve su turno
    pub fn begin_scan(&self, flow: ScanFlow) -> u64 {
        let turn = self.next_turn.get() + 1;
        self.next_turn.set(turn);
        self.active_scan.set(Some((turn, flow)));
        turn
    }

    /// Libera la cámara si `turn` sigue siendo el escaneo en curso.
    /// false: otro scan() lo reemplazó y ya gestiona la UI.
    pub fn end_scan(&self, turn: u64) -> bool {
        match self.active_scan.get() {
            Some((current, _)) if current == turn => {
                self.active_scan.set(None);
                true
            }
            _ => false,
        }
    }

    pub fn is_scanning(&self, flow: ScanFlow) -> bool {
        matches!(self.active_scan.get(), Some((_, active)) if active == flow)
    }

    pub fn clear_pending(&self, flow: ScanFlow) {
        if self.pending(flow).get().is_some() {
            log::info!("🧹 [STATE] QR pendiente limpiado para {:?}", flow);
        }
        self.pending(flow).set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_scans_are_independent_per_flow() {
        let state = AppState::new();
        state.set_pending(ScanFlow::CheckIn, "QR-IN".to_string());
        state.set_pending(ScanFlow::CheckOut, "QR-OUT".to_string());

        state.clear_pending(ScanFlow::CheckIn);

        assert_eq!(state.pending_code(ScanFlow::CheckIn), None);
        assert_eq!(state.pending_code(ScanFlow::CheckOut), Some("QR-OUT".to_string()));
        assert_eq!(state.pending_code(ScanFlow::VehicleStatus), None);
    }

    #[test]
    fn test_superseded_scan_does_not_release_camera() {
        let state = AppState::new();
        let first = state.begin_scan(ScanFlow::CheckIn);
        let second = state.begin_scan(ScanFlow::CheckOut);

        assert!(!state.is_scanning(ScanFlow::CheckIn));
        assert!(state.is_scanning(ScanFlow::CheckOut));

        assert!(!state.end_scan(first));
        assert!(state.is_scanning(ScanFlow::CheckOut));
        assert!(state.end_scan(second));
        assert!(!state.is_scanning(ScanFlow::CheckOut));
    }

    #[test]
    fn test_clear_notifies_subscribers() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let state = AppState::new();
        let shown = Rc::new(RefCell::new(Vec::new()));
        {
            let shown = shown.clone();
            state
                .pending(ScanFlow::CheckOut)
                .subscribe(move |code| shown.borrow_mut().push(code.is_some()));
        }

        state.set_pending(ScanFlow::CheckOut, "QR123".to_string());
        state.clear_pending(ScanFlow::CheckOut);

        assert_eq!(*shown.borrow(), vec![true, false]);
    }
}
