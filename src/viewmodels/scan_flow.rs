// ============================================================================
// SCAN FLOWS - Check-in, check-out y consulta de estado
// ============================================================================

/// Flujos que obtienen el código QR con la cámara
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanFlow {
    CheckIn,
    CheckOut,
    VehicleStatus,
}

/// IDs del DOM de un flujo (ver index.html)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowIds {
    pub scan_button: &'static str,
    pub scanner_region: &'static str,
    pub status: &'static str,
    pub qr_data: &'static str,
    /// Paso 2 (confirmación); la consulta de estado no lo tiene
    pub step2: Option<&'static str>,
    pub confirm_button: Option<&'static str>,
    /// Visible mientras el flujo escanea o espera confirmación
    pub cancel_button: Option<&'static str>,
}

impl ScanFlow {
    pub const ALL: [ScanFlow; 3] = [ScanFlow::CheckIn, ScanFlow::CheckOut, ScanFlow::VehicleStatus];

    pub fn ids(self) -> FlowIds {
        match self {
            ScanFlow::CheckIn => FlowIds {
                scan_button: "checkin-scan-btn",
                scanner_region: "checkin-scanner-region",
                status: "checkin-status",
                qr_data: "checkin-qr-data",
                step2: Some("checkin-step2"),
                confirm_button: Some("checkin-confirm-btn"),
                cancel_button: Some("checkin-cancel-btn"),
            },
            ScanFlow::CheckOut => FlowIds {
                scan_button: "checkout-scan-btn",
                scanner_region: "checkout-scanner-region",
                status: "checkout-status",
                qr_data: "checkout-qr-data",
                step2: Some("checkout-step2"),
                confirm_button: Some("checkout-confirm-btn"),
                cancel_button: Some("checkout-cancel-btn"),
            },
            ScanFlow::VehicleStatus => FlowIds {
                scan_button: "status-scan-btn",
                scanner_region: "status-scanner-region",
                status: "vehicle-status-result",
                qr_data: "status-qr-data",
                step2: None,
                confirm_button: None,
                cancel_button: Some("status-cancel-btn"),
            },
        }
    }

    /// Nombre de la acción en mensajes de error: "<acción> failed: ..."
    pub fn action(self) -> &'static str {
        match self {
            ScanFlow::CheckIn => "Check-in",
            ScanFlow::CheckOut => "Check-out",
            ScanFlow::VehicleStatus => "Status lookup",
        }
    }

    pub fn progress_message(self) -> &'static str {
        match self {
            ScanFlow::CheckIn => "Processing Check-In...",
            ScanFlow::CheckOut => "Processing Check-Out...",
            ScanFlow::VehicleStatus => "Fetching vehicle status...",
        }
    }

    /// Mensaje tras un escaneo correcto, antes de confirmar
    pub fn scanned_message(self) -> &'static str {
        match self {
            #[cfg(feature = "spot-tracking")]
            ScanFlow::CheckIn => "QR scanned. Please enter spot number.",
            #[cfg(not(feature = "spot-tracking"))]
            ScanFlow::CheckIn => "QR scanned. Confirm check-in.",
            ScanFlow::CheckOut => "QR scanned. Confirm check-out.",
            ScanFlow::VehicleStatus => "QR scanned.",
        }
    }

    /// Check-in y check-out esperan confirmación; la consulta se lanza al escanear
    pub fn requires_confirmation(self) -> bool {
        self.ids().confirm_button.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_flow_dom_ids_are_unique() {
        let mut seen = HashSet::new();
        for flow in ScanFlow::ALL {
            let ids = flow.ids();
            let all = [Some(ids.scan_button), Some(ids.scanner_region), Some(ids.status), Some(ids.qr_data), ids.step2, ids.confirm_button, ids.cancel_button];
            for id in all.into_iter().flatten() {
                assert!(seen.insert(id), "ID duplicado: {}", id);
            }
        }
    }

    #[test]
    fn test_only_status_lookup_skips_confirmation() {
        assert!(ScanFlow::CheckIn.requires_confirmation());
        assert!(ScanFlow::CheckOut.requires_confirmation());
        assert!(!ScanFlow::VehicleStatus.requires_confirmation());
    }
}
