// ============================================================================
// PARKING VIEWMODEL - Check-in, check-out y consulta de estado
// ============================================================================
// La tarifa, la duración y la ocupación las calcula el backend
// ============================================================================

use crate::models::VehicleStatusResponse;
#[cfg(feature = "spot-tracking")]
use crate::models::ParkingSpot;
use crate::services::ApiClient;
#[cfg(feature = "spot-tracking")]
use crate::services::ApiError;
use super::flow_error::{FlowError, ValidationError};
use super::scan_flow::ScanFlow;

/// Petición validada, lista para enviar
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub flow: ScanFlow,
    pub qr_code: String,
    pub spot_number: Option<String>,
}

pub struct ParkingViewModel {
    api_client: ApiClient,
}

impl ParkingViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Valida el código pendiente (y la plaza en check-in con plazas numeradas)
    pub fn prepare(
        flow: ScanFlow,
        pending: Option<String>,
        spot_number: Option<String>,
    ) -> Result<Submission, ValidationError> {
        let qr_code = pending
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .ok_or(ValidationError::NoPendingScan)?;

        let spot_number = match flow {
            #[cfg(feature = "spot-tracking")]
            ScanFlow::CheckIn => Some(super::flow_error::require(
                spot_number.as_deref().unwrap_or(""),
                "the spot number",
            )?),
            _ => {
                let _ = spot_number;
                None
            }
        };

        Ok(Submission {
            flow,
            qr_code,
            spot_number,
        })
    }

    pub async fn submit(&self, submission: &Submission) -> Result<VehicleStatusResponse, FlowError> {
        let flow = submission.flow;
        let qr_code = submission.qr_code.as_str();

        let result = match (flow, submission.spot_number.as_deref()) {
            (ScanFlow::CheckIn, Some(spot)) => self.api_client.check_in_at_spot(qr_code, spot).await,
            (ScanFlow::CheckIn, None) => self.api_client.check_in(qr_code).await,
            (ScanFlow::CheckOut, _) => self.api_client.check_out(qr_code).await,
            (ScanFlow::VehicleStatus, _) => self.api_client.vehicle_status(qr_code).await,
        };

        let response = result.map_err(|e| FlowError::api(flow.action(), e))?;
        log::info!(
            "✅ [PARKING] {} OK para {:?} (dentro: {})",
            flow.action(),
            response.license_plate,
            response.is_checked_in
        );
        Ok(response)
    }

    /// Plazas del parking (variante con plazas numeradas)
    #[cfg(feature = "spot-tracking")]
    pub async fn load_spots(&self) -> Result<Vec<ParkingSpot>, ApiError> {
        self.api_client.list_spots().await
    }
}

impl Default for ParkingViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_requires_pending_scan() {
        assert_eq!(
            ParkingViewModel::prepare(ScanFlow::CheckOut, None, None),
            Err(ValidationError::NoPendingScan)
        );
        assert_eq!(
            ParkingViewModel::prepare(ScanFlow::CheckOut, Some("  ".to_string()), None),
            Err(ValidationError::NoPendingScan)
        );
    }

    #[test]
    fn test_prepare_checkout() {
        let submission = ParkingViewModel::prepare(ScanFlow::CheckOut, Some("QR123".to_string()), None).unwrap();
        assert_eq!(submission.qr_code, "QR123");
        assert_eq!(submission.spot_number, None);
    }

    #[cfg(not(feature = "spot-tracking"))]
    #[test]
    fn test_prepare_checkin_ignores_spot_number() {
        let submission =
            ParkingViewModel::prepare(ScanFlow::CheckIn, Some("QR123".to_string()), Some("A1".to_string())).unwrap();
        assert_eq!(submission.spot_number, None);
    }

    #[cfg(feature = "spot-tracking")]
    #[test]
    fn test_prepare_checkin_requires_spot_number() {
        assert_eq!(
            ParkingViewModel::prepare(ScanFlow::CheckIn, Some("QR123".to_string()), Some(" ".to_string())),
            Err(ValidationError::Missing("the spot number"))
        );
        let submission =
            ParkingViewModel::prepare(ScanFlow::CheckIn, Some("QR123".to_string()), Some(" A1 ".to_string())).unwrap();
        assert_eq!(submission.spot_number.as_deref(), Some("A1"));
    }
}
