use serde::{Deserialize, Serialize};

/// Cuerpo de POST /checkin, /checkout y /vehicle-status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QrCodeRequest {
    pub qr_code: String,
}

/// Cuerpo de POST /checkin en la variante con plazas numeradas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckInRequest {
    pub qr_code: String,
    pub spot_number: String,
}

/// Respuesta común de check-in, check-out y consulta de estado
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VehicleStatusResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_checked_in: bool,
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_phone_number: Option<String>,
    #[serde(default)]
    pub entry_time: Option<String>,
    #[serde(default)]
    pub exit_time: Option<String>,
    #[serde(default)]
    pub duration_hours: Option<f64>,
    #[serde(default)]
    pub fee: Option<f64>,
}

/// Cuerpo de error de FastAPI: `{"detail": "..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// Texto legible del campo `detail`, si es un string no vacío
    pub fn detail_text(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_response_parses_numbers() {
        let json = r#"{"message":"Checked out","fee":12.5,"duration_hours":3.25}"#;
        let response: VehicleStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.fee, Some(12.5));
        assert_eq!(response.duration_hours, Some(3.25));
        assert!(!response.is_checked_in);
    }

    #[test]
    fn test_detail_text_ignores_validation_arrays() {
        // 422 de FastAPI devuelve una lista en detail
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","qr_code"],"msg":"field required"}]}"#).unwrap();
        assert_eq!(body.detail_text(), None);

        let body: ApiErrorBody = serde_json::from_str(r#"{"detail":"Vehicle not found."}"#).unwrap();
        assert_eq!(body.detail_text(), Some("Vehicle not found."));
    }
}
