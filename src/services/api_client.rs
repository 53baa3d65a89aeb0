// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: tarifas, ocupación y registros viven en el backend
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{
    ApiErrorBody, CheckInRequest, Owner, OwnerCreate, QrCodeRequest, VehicleCreate,
    VehicleRegistrationResponse, VehicleStatusResponse,
};
#[cfg(feature = "spot-tracking")]
use crate::models::ParkingSpot;

/// Errores de comunicación con el backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch lanzó una excepción (sin conexión, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not encode request: {0}")]
    Serialization(String),

    /// Respuesta no 2xx; `message` ya es legible para el usuario
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Parse(String),
}

impl ApiError {
    /// Construye el error de una respuesta no 2xx a partir de su cuerpo.
    /// Usa `detail` si el cuerpo es JSON con ese campo; si no, el status text.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.detail_text().map(str::to_string));

        let message = match detail {
            Some(detail) => detail,
            None if !status_text.trim().is_empty() => status_text.trim().to_string(),
            None => format!("HTTP {}", status),
        };

        ApiError::Http { status, message }
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Registrar propietario
    pub async fn register_owner(&self, name: &str, phone_number: &str) -> Result<Owner, ApiError> {
        log::info!("👤 [API] Registrando propietario: {} ({})", name, phone_number);
        let body = OwnerCreate {
            name: name.to_string(),
            phone_number: phone_number.to_string(),
        };
        self.post_json("owners", &body).await
    }

    /// Registrar vehículo para un propietario existente (por teléfono)
    pub async fn register_vehicle(
        &self,
        license_plate: &str,
        owner_phone_number: &str,
    ) -> Result<VehicleRegistrationResponse, ApiError> {
        log::info!("🚗 [API] Registrando vehículo: {} → {}", license_plate, owner_phone_number);
        let body = VehicleCreate {
            license_plate: license_plate.to_string(),
            owner_phone_number: owner_phone_number.to_string(),
        };
        self.post_json("register", &body).await
    }

    /// Check-in por código QR
    pub async fn check_in(&self, qr_code: &str) -> Result<VehicleStatusResponse, ApiError> {
        log::info!("🅿️ [API] Check-in: {}", qr_code);
        let body = QrCodeRequest {
            qr_code: qr_code.to_string(),
        };
        self.post_json("checkin", &body).await
    }

    /// Check-in con número de plaza (variante con plazas numeradas)
    pub async fn check_in_at_spot(
        &self,
        qr_code: &str,
        spot_number: &str,
    ) -> Result<VehicleStatusResponse, ApiError> {
        log::info!("🅿️ [API] Check-in: {} en plaza {}", qr_code, spot_number);
        let body = CheckInRequest {
            qr_code: qr_code.to_string(),
            spot_number: spot_number.to_string(),
        };
        self.post_json("checkin", &body).await
    }

    /// Check-out por código QR; el backend calcula duración y tarifa
    pub async fn check_out(&self, qr_code: &str) -> Result<VehicleStatusResponse, ApiError> {
        log::info!("🚪 [API] Check-out: {}", qr_code);
        let body = QrCodeRequest {
            qr_code: qr_code.to_string(),
        };
        self.post_json("checkout", &body).await
    }

    /// Consultar estado del vehículo
    pub async fn vehicle_status(&self, qr_code: &str) -> Result<VehicleStatusResponse, ApiError> {
        log::info!("🔍 [API] Estado del vehículo: {}", qr_code);
        let body = QrCodeRequest {
            qr_code: qr_code.to_string(),
        };
        self.post_json("vehicle-status", &body).await
    }

    /// Listar plazas del parking
    #[cfg(feature = "spot-tracking")]
    pub async fn list_spots(&self) -> Result<Vec<ParkingSpot>, ApiError> {
        let response = Request::get(&self.url("spots"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let response = Request::post(&self.url(path))
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !response.ok() {
            let error = ApiError::from_response(status, &response.status_text(), &body);
            log::warn!("⚠️ [API] {} {} → {}", status, response.url(), error);
            return Err(error);
        }

        serde_json::from_str::<R>(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_uses_backend_detail() {
        let error = ApiError::from_response(404, "Not Found", r#"{"detail":"Vehicle with QR code not found."}"#);
        assert_eq!(error.to_string(), "Vehicle with QR code not found.");
        assert!(matches!(error, ApiError::Http { status: 404, .. }));
    }

    #[test]
    fn test_error_falls_back_to_status_text() {
        let error = ApiError::from_response(500, "Internal Server Error", "<html>boom</html>");
        assert_eq!(error.to_string(), "Internal Server Error");

        let error = ApiError::from_response(400, "Bad Request", r#"{"other":"x"}"#);
        assert_eq!(error.to_string(), "Bad Request");
    }

    #[test]
    fn test_error_without_status_text_uses_code() {
        // HTTP/2 no envía reason phrase
        let error = ApiError::from_response(502, "", "");
        assert_eq!(error.to_string(), "HTTP 502");
    }

    #[test]
    fn test_url_join() {
        let client = ApiClient::with_base_url("http://127.0.0.1:8000/api/");
        assert_eq!(client.url("vehicle-status"), "http://127.0.0.1:8000/api/vehicle-status");
    }
}
